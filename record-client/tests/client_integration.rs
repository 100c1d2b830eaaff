//! Client against a live server on an ephemeral port

use record_client::{
    ClientConfig, ClientError, FormUpdate, HttpClient, Level, RecordFields, RecordForm, Submitted,
};
use record_server::{Config, DbService, ServerState, build_app};

async fn spawn_server() -> HttpClient {
    let config = Config::with_overrides(0, "mem://");
    let db = DbService::connect(&config).await;
    let app = build_app(ServerState::with_db(config, &db));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    HttpClient::new(&ClientConfig::new(format!("http://{addr}"))).unwrap()
}

#[tokio::test]
async fn crud_through_the_client() {
    let client = spawn_server().await;

    let ada = RecordFields::new("Ada Lovelace", "Engineer", "Senior");
    let id = client.create_record(&ada).await.unwrap();

    let record = client.get_record(&id).await.unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.fields(), ada);

    let promoted = RecordFields::new("Ada Lovelace", "Lead Engineer", "Senior");
    let result = client.update_record(&id, &promoted).await.unwrap();
    assert_eq!(result.matched_count, 1);
    assert_eq!(client.get_record(&id).await.unwrap().position, "Lead Engineer");

    assert_eq!(client.list_records().await.unwrap().len(), 1);

    let deleted = client.delete_record(&id).await.unwrap();
    assert_eq!(deleted.deleted_count, 1);
    assert!(matches!(
        client.get_record(&id).await,
        Err(ClientError::NotFound(_))
    ));
}

#[tokio::test]
async fn malformed_id_is_a_validation_error() {
    let client = spawn_server().await;
    assert!(matches!(
        client.get_record("bogus").await,
        Err(ClientError::Validation(_))
    ));
}

#[tokio::test]
async fn form_creates_then_edits() {
    let client = spawn_server().await;

    let mut form = RecordForm::new();
    form.update_field(FormUpdate {
        name: Some("Grace Hopper".into()),
        position: Some("Rear Admiral".into()),
        level: Some(Level::Senior),
    });
    let id = match form.submit(&client).await.unwrap() {
        Submitted::Created { id } => id,
        other => panic!("expected a create, got {other:?}"),
    };
    // Cleared after submit
    assert_eq!(form.fields(), RecordFields::default());

    let mut edit = RecordForm::load(&client, &id).await;
    assert!(!edit.is_new());
    assert_eq!(edit.name(), "Grace Hopper");
    assert_eq!(edit.level(), Some(Level::Senior));

    edit.update_field(FormUpdate {
        position: Some("Computer Scientist".into()),
        ..FormUpdate::default()
    });
    match edit.submit(&client).await.unwrap() {
        Submitted::Updated { id: updated, result } => {
            assert_eq!(updated, id);
            assert_eq!(result.modified_count, 1);
        }
        other => panic!("expected an update, got {other:?}"),
    }

    let record = client.get_record(&id).await.unwrap();
    assert_eq!(record.position, "Computer Scientist");
}

#[tokio::test]
async fn form_keeps_unlisted_level_on_unchanged_submit() {
    let client = spawn_server().await;
    let stored = RecordFields::new("Ada Lovelace", "Engineer", "Principal");
    let id = client.create_record(&stored).await.unwrap();

    let mut edit = RecordForm::load(&client, &id).await;
    assert_eq!(edit.level(), None);
    assert_eq!(edit.level_text(), "Principal");

    match edit.submit(&client).await.unwrap() {
        Submitted::Updated { result, .. } => {
            assert_eq!(result.matched_count, 1);
            assert_eq!(result.modified_count, 0);
        }
        other => panic!("expected an update, got {other:?}"),
    }
    assert_eq!(client.get_record(&id).await.unwrap().fields(), stored);
}

#[tokio::test]
async fn form_load_failure_leaves_fields_empty() {
    let client = spawn_server().await;
    let id = uuid::Uuid::new_v4().to_string();

    let form = RecordForm::load(&client, &id).await;
    assert_eq!(form.editing_id(), Some(id.as_str()));
    assert_eq!(form.fields(), RecordFields::default());
}

#[tokio::test]
async fn form_submit_failure_still_clears() {
    // Nothing listens here
    let client = HttpClient::new(&ClientConfig::new("http://127.0.0.1:1").with_timeout(2)).unwrap();

    let mut form = RecordForm::new();
    form.update_field(FormUpdate {
        name: Some("Ada Lovelace".into()),
        ..FormUpdate::default()
    });

    assert!(matches!(form.submit(&client).await, Err(ClientError::Http(_))));
    assert_eq!(form.name(), "");
}

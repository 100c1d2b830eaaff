//! HTTP client for the record API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{DeleteResult, EmployeeRecord, InsertResult, RecordFields, UpdateResult};

/// HTTP client for the record server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Map non-2xx statuses to errors, otherwise decode the JSON body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(format!("{status}: {text}"))),
            };
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Record API ==========

    /// List every record
    pub async fn list_records(&self) -> ClientResult<Vec<EmployeeRecord>> {
        self.get("/record").await
    }

    /// Fetch one record
    pub async fn get_record(&self, id: &str) -> ClientResult<EmployeeRecord> {
        self.get(&format!("/record/{id}")).await
    }

    /// Create a record, returning the new id
    pub async fn create_record(&self, fields: &RecordFields) -> ClientResult<String> {
        let result: InsertResult = self.post("/record", fields).await?;
        Ok(result.inserted_id)
    }

    /// Replace the fields of a record
    pub async fn update_record(&self, id: &str, fields: &RecordFields) -> ClientResult<UpdateResult> {
        self.patch(&format!("/record/{id}"), fields).await
    }

    /// Delete a record
    pub async fn delete_record(&self, id: &str) -> ClientResult<DeleteResult> {
        self.delete(&format!("/record/{id}")).await
    }
}

//! Employee Record API Module
//!
//! | Path | Method | Success |
//! |------|--------|---------|
//! | /record | GET | 200, all records |
//! | /record | POST | 201, `{acknowledged, insertedId}` |
//! | /record/{id} | GET | 200, the record (404 if absent) |
//! | /record/{id} | PATCH | 200, `{acknowledged, matchedCount, modifiedCount}` |
//! | /record/{id} | DELETE | 200, `{acknowledged, deletedCount}` |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Record router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/record", get(handler::list).post(handler::create))
        .route(
            "/record/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
}

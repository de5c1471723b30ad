//! Defines the data structures used for query parameters and response bodies.

use serde::{Deserialize, Serialize};

// --- Query parameters ---

/// Query parameters for `GET /user`.
#[derive(Deserialize, Debug)]
pub struct UserQuery {
    pub id: Option<String>,
}

/// Query parameters for `GET /search`.
#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub q: Option<String>,
}

// --- Response Bodies ---

/// JSON body served by the `status` variant's `/` route.
#[derive(Serialize, Debug)]
pub struct StatusResponse {
    pub message: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

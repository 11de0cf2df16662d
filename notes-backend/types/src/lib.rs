//! Wire types for the notes backend and its HTTP clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A single titled text note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =====================================================
// Service Types
// =====================================================

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub health: String,
    pub notes_collection: String,
    pub notes_item: String,
}

impl ServiceInfo {
    pub const NAME: &'static str = "Simple Notes API";
    pub const API_VERSION: &'static str = "v1";

    pub fn current() -> Self {
        Self {
            name: Self::NAME.to_string(),
            version: Self::API_VERSION.to_string(),
            endpoints: Endpoints {
                health: "/health".to_string(),
                notes_collection: "/notes".to_string(),
                notes_item: "/notes/<id>".to_string(),
            },
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

// =====================================================
// Error Types
// =====================================================

/// JSON body returned with every 4xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Numeric HTTP status
    pub code: u16,
    /// Reason phrase, e.g. "Not Found"
    pub status: String,
    pub message: String,
}

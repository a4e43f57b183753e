use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
    /// Opaque caller context, passed through to the engine.
    pub context: Option<Map<String, JsonValue>>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message_id: String,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
    pub suggestions: Vec<String>,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct QuickActionDto {
    pub id: String,
    pub title: String,
    pub query: String,
    pub description: String,
    pub category: &'static str,
    pub icon: &'static str,
}

impl From<&portstock_ai::QuickAction> for QuickActionDto {
    fn from(action: &portstock_ai::QuickAction) -> Self {
        Self {
            id: action.id.clone(),
            title: action.title.clone(),
            query: action.query.clone(),
            description: action.description.clone(),
            category: "inventory",
            icon: "QuestionCircleOutlined",
        }
    }
}

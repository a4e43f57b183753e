use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use uuid::Uuid;

use portstock_ai::AiService;

use crate::app::{dto, errors};

/// Maximum accepted message length, in characters.
const MAX_MESSAGE_CHARS: usize = 1000;

pub fn router() -> Router {
    Router::new()
        .route("/message", post(send_message))
        .route("/quick-actions", get(quick_actions))
        .route("/suggestions", get(suggestions))
}

pub async fn send_message(
    Extension(service): Extension<Arc<AiService>>,
    Json(body): Json<dto::ChatRequest>,
) -> axum::response::Response {
    let message = body.message.trim();
    if message.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "empty_message",
            "message must not be empty",
        );
    }
    if body.message.chars().count() > MAX_MESSAGE_CHARS {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "message_too_long",
            format!("message must be at most {MAX_MESSAGE_CHARS} characters"),
        );
    }

    let session_id = body
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let ai_response = service.process_query(&body.message, body.context.as_ref());

    let response = dto::ChatResponse {
        message_id: Uuid::new_v4().to_string(),
        response: ai_response.message,
        data: ai_response.query_result.map(|r| r.data),
        suggestions: ai_response.suggestions,
        session_id,
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

pub async fn quick_actions(
    Extension(service): Extension<Arc<AiService>>,
) -> impl IntoResponse {
    let actions: Vec<dto::QuickActionDto> = service
        .quick_actions()
        .iter()
        .map(dto::QuickActionDto::from)
        .collect();
    Json(actions)
}

pub async fn suggestions() -> impl IntoResponse {
    Json(serde_json::json!({
        "suggestions": [
            "A码头有多少物品？",
            "库存总览",
            "搜索起重机",
            "最近7天的交易记录",
            "1号仓库有多少设备？",
            "库存不足的物资有哪些？",
            "查找安全帽",
            "B码头的库存情况",
        ],
    }))
}

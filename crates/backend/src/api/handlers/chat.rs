use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use contracts::api::{ChatRequest, ChatResponse, ErrorBody};

use crate::domain::a001_company;
use crate::shared::config;
use crate::shared::data::db;
use crate::shared::llm::openai_provider::OpenAiProvider;
use crate::shared::llm::{ChatMessage, LlmProvider};

/// Fixed instruction preamble; the aggregated company report is appended
/// below it in the system message.
const SYSTEM_PREAMBLE: &str = "Eres SinercIA, el asistente virtual de una empresa agropecuaria. \
     Respondés en español, de forma breve y concreta, basándote en los datos \
     de la empresa incluidos a continuación.";

/// Presence validation only: a missing or empty message is rejected,
/// anything else is forwarded as-is.
fn extract_message(req: &ChatRequest) -> Option<&str> {
    match req.message.as_deref() {
        Some(m) if !m.is_empty() => Some(m),
        _ => None,
    }
}

/// POST /api/chat
pub async fn chat(
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorBody>)> {
    // Presence validation only; nothing is sent to the LLM on this path.
    let Some(message) = extract_message(&req) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "Mensaje requerido".to_string(),
            }),
        ));
    };

    let db = db::get_connection();
    let context = a001_company::service::company_context(db).await;

    let provider = build_provider().map_err(|e| {
        tracing::error!("Cannot construct LLM provider: {}", e);
        internal_error()
    })?;

    let messages = vec![
        ChatMessage::system(format!("{}\n\n{}", SYSTEM_PREAMBLE, context)),
        ChatMessage::user(message),
    ];

    // Inference failures are not softened; they surface as a 500.
    let response = provider.chat_completion(messages).await.map_err(|e| {
        tracing::error!("LLM request failed: {}", e);
        internal_error()
    })?;

    tracing::debug!(
        "LLM reply from {}: tokens={:?}, finish_reason={:?}",
        response.model,
        response.tokens_used,
        response.finish_reason
    );

    let reply = if response.content.is_empty() {
        "Error procesando consulta.".to_string()
    } else {
        response.content
    };

    Ok(Json(ChatResponse {
        message: reply,
        timestamp: Utc::now(),
    }))
}

fn build_provider() -> anyhow::Result<OpenAiProvider> {
    let config = config::load_config()?;
    let api_key = config::openai_api_key()?;
    Ok(OpenAiProvider::new(api_key, &config.llm))
}

fn internal_error() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Error procesando consulta.".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_is_rejected() {
        let req = ChatRequest { message: None };
        assert!(extract_message(&req).is_none());
    }

    #[test]
    fn empty_message_is_rejected() {
        let req = ChatRequest {
            message: Some(String::new()),
        };
        assert!(extract_message(&req).is_none());
    }

    #[test]
    fn whitespace_only_message_is_forwarded_untouched() {
        let req = ChatRequest {
            message: Some("   ".to_string()),
        };
        assert_eq!(extract_message(&req), Some("   "));
    }

    // Runs without a database or API key: the 400 is produced before the
    // connection handle or the provider is ever touched (the uninitialized
    // handle would panic otherwise).
    #[tokio::test]
    async fn missing_message_yields_400_before_any_lookup() {
        let result = chat(Json(ChatRequest { message: None })).await;
        let (status, body) = result.err().expect("request without message must fail");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "Mensaje requerido");
    }
}

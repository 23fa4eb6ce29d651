use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
///
/// `message` is an Option so a missing field can be told apart from a
/// deserialization failure and answered with a proper 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful chat reply. `timestamp` serializes as ISO 8601 (RFC 3339)
/// and is taken after the inference call returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Error body for client-error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_field_deserializes_to_none() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn timestamp_serializes_as_iso8601() {
        let resp = ChatResponse {
            message: "ok".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        let raw = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
    }
}

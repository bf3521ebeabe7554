use serde::Deserialize;

/// Event type that triggers a profile sync. All other types are
/// acknowledged and ignored.
pub const USER_UPDATED: &str = "user.updated";

/// Webhook event envelope as sent by Clerk.
///
/// Deserialized from the raw body only after the signature has been
/// verified; `data` stays untyped because its shape varies per event type.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: serde_json::Value,
}

impl WebhookEvent {
    /// The `data.id` field, present on user.* events.
    pub fn user_id(&self) -> Option<&str> {
        self.data.get("id").and_then(|id| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_updated_envelope() {
        let event: WebhookEvent = serde_json::from_str(
            r#"{"type":"user.updated","data":{"id":"u_123","first_name":"A"}}"#,
        )
        .unwrap();
        assert_eq!(event.event_type, USER_UPDATED);
        assert_eq!(event.user_id(), Some("u_123"));
    }

    #[test]
    fn missing_id_yields_none() {
        let event: WebhookEvent =
            serde_json::from_str(r#"{"type":"user.updated","data":{}}"#).unwrap();
        assert_eq!(event.user_id(), None);
    }

    #[test]
    fn rejects_envelope_without_type() {
        let result = serde_json::from_str::<WebhookEvent>(r#"{"data":{"id":"u_1"}}"#);
        assert!(result.is_err());
    }
}

// Path: crates/forwarder/src/serializer.rs
//! Renders wire messages as JSON for call logs.

use crate::error::SerializeError;
use serde::Serialize;
use std::any::Any;

/// A type-erased wire message as seen by interceptors.
///
/// Interceptors can render it but not mutate it; the forwarding code takes it
/// back out as its concrete type with [`Payload::into_any`].
pub trait Payload: Send + Sync {
    fn to_json_value(&self) -> serde_json::Result<serde_json::Value>;
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
}

impl<T> Payload for T
where
    T: Serialize + Send + Sync + 'static,
{
    fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

/// Converts messages to human-readable JSON strings.
///
/// Passed explicitly to whoever needs it; there is no process-wide instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl JsonConverter {
    pub fn new() -> Self {
        Self
    }

    /// Renders `value` as JSON. An absent value renders as `null`.
    pub fn marshal(&self, value: Option<&dyn Payload>) -> Result<String, SerializeError> {
        let Some(value) = value else {
            return Ok("null".to_string());
        };
        let json = value.to_json_value()?;
        Ok(serde_json::to_string(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forwarder_proto::upstream;

    struct Unrenderable;

    impl Serialize for Unrenderable {
        fn serialize<S: serde::Serializer>(&self, _s: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to render"))
        }
    }

    #[test]
    fn test_marshal_renders_message_fields() {
        let resp = upstream::GetSyncingResponse { syncing: true };
        let json = JsonConverter::new().marshal(Some(&resp)).unwrap();
        assert_eq!(json, r#"{"syncing":true}"#);
    }

    #[test]
    fn test_marshal_absent_value_is_null() {
        assert_eq!(JsonConverter::new().marshal(None).unwrap(), "null");
    }

    #[test]
    fn test_marshal_reports_unrenderable_values() {
        let err = JsonConverter::new().marshal(Some(&Unrenderable)).unwrap_err();
        assert!(err.to_string().contains("refusing to render"));
    }

    #[test]
    fn test_marshal_is_single_line() {
        let req = upstream::GetBlockByHeightRequest { height: 7 };
        let json = JsonConverter::new().marshal(Some(&req)).unwrap();
        assert!(!json.contains('\n'));
        assert_eq!(json, r#"{"height":7}"#);
    }
}

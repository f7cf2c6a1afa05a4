// Path: crates/proto/src/serializers.rs
//! Serde helpers used when wire messages are rendered for call logs.
//!
//! Only serialization is supported; the forwarder never reads JSON back.

/// Byte-field helpers.
pub mod bytes {
    /// Renders `Vec<u8>` fields as standard base64 strings, matching the
    /// canonical protobuf JSON mapping for `bytes`.
    pub mod base64string {
        use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
        use serde::Serializer;

        pub fn serialize<S>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&BASE64.encode(value))
        }
    }
}

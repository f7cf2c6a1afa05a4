// Path: crates/proto/src/prost/google.protobuf.rs
/// `Any` contains an arbitrary serialized protocol buffer message along with a
/// URL that describes the type of the serialized message.
///
/// The forwarder never resolves `type_url`; the payload stays opaque bytes.
#[derive(::serde::Serialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Any {
    #[prost(string, tag = "1")]
    pub type_url: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(serialize_with = "crate::serializers::bytes::base64string::serialize")]
    pub value: ::prost::alloc::vec::Vec<u8>,
}

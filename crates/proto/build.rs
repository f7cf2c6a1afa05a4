// Path: crates/proto/build.rs
use tonic_build::manual::{Builder, Method, Service};

/// The seven unary query RPCs shared by the upstream and public services,
/// as (rust method name, route name, request type, response type).
const RPCS: &[(&str, &str, &str, &str)] = &[
    ("get_node_info", "GetNodeInfo", "GetNodeInfoRequest", "GetNodeInfoResponse"),
    ("get_syncing", "GetSyncing", "GetSyncingRequest", "GetSyncingResponse"),
    ("get_latest_block", "GetLatestBlock", "GetLatestBlockRequest", "GetLatestBlockResponse"),
    (
        "get_block_by_height",
        "GetBlockByHeight",
        "GetBlockByHeightRequest",
        "GetBlockByHeightResponse",
    ),
    (
        "get_latest_validator_set",
        "GetLatestValidatorSet",
        "GetLatestValidatorSetRequest",
        "GetLatestValidatorSetResponse",
    ),
    (
        "get_validator_set_by_height",
        "GetValidatorSetByHeight",
        "GetValidatorSetByHeightRequest",
        "GetValidatorSetByHeightResponse",
    ),
    ("abci_query", "ABCIQuery", "AbciQueryRequest", "AbciQueryResponse"),
];

fn query_service(package: &str, module_path: &str, comment: &str) -> Service {
    let mut builder = Service::builder()
        .name("Service")
        .package(package)
        .comment(comment);
    for (name, route, input, output) in RPCS {
        builder = builder.method(
            Method::builder()
                .name(*name)
                .route_name(*route)
                .input_type(format!("{module_path}::{input}"))
                .output_type(format!("{module_path}::{output}"))
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        );
    }
    builder.build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    // Message types are checked in under src/prost; only the service glue is
    // generated, so no protoc is needed at build time. Each service goes into
    // its own `{package}.Service.rs` file under OUT_DIR.
    Builder::new().compile(&[query_service(
        "cosmos.base.tendermint.v1beta1",
        "crate::cosmos::base::tendermint::v1beta1",
        "Service defines the gRPC querier service for tendermint queries.",
    )]);
    Builder::new().compile(&[query_service(
        "api.cosmos.forwarder.v1",
        "crate::api::cosmos::forwarder::v1",
        "Service is the stable public query surface exposed by the forwarder.",
    )]);

    Ok(())
}

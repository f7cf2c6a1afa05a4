// Path: crates/proto/src/lib.rs
//! # Forwarder Wire Schemas
//!
//! Protobuf message types and gRPC glue for both sides of the forwarder:
//! 1. **Upstream**: `cosmos.base.tendermint.v1beta1.Service`, the node's query API.
//! 2. **Public**: `api.cosmos.forwarder.v1.Service`, the stable surface we serve.
//!
//! Messages are checked in under `src/prost`; clients and servers are generated
//! by `build.rs`.

pub mod serializers;

pub mod google {
    pub mod protobuf {
        include!("prost/google.protobuf.rs");
    }
}

// Nested to match the proto package hierarchy so that cross-package
// references resolve the same way they do in the .proto sources.
pub mod cosmos {
    pub mod base {
        pub mod query {
            pub mod v1beta1 {
                include!("prost/cosmos.base.query.v1beta1.rs");
            }
        }

        pub mod tendermint {
            pub mod v1beta1 {
                include!("prost/cosmos.base.tendermint.v1beta1.rs");
                include!(concat!(
                    env!("OUT_DIR"),
                    "/cosmos.base.tendermint.v1beta1.Service.rs"
                ));
            }
        }
    }
}

pub mod api {
    pub mod cosmos {
        pub mod forwarder {
            pub mod v1 {
                include!("prost/api.cosmos.forwarder.v1.rs");
                include!(concat!(env!("OUT_DIR"), "/api.cosmos.forwarder.v1.Service.rs"));
            }
        }
    }
}

// Flatten the API for users
pub use api::cosmos::forwarder::v1 as public;
pub use cosmos::base::query::v1beta1 as query;
pub use cosmos::base::tendermint::v1beta1 as upstream;

pub use tendermint_proto;

// Path: crates/forwarder/src/handler/mod.rs
//! The public query service.
//!
//! [`QueryForwarder`] is the capability interface: one async method per public
//! RPC, each defaulting to `Unimplemented`. [`ForwarderService`] adapts any
//! implementation to the generated tonic server trait, and
//! [`ForwardingHandler`] is the implementation that relays every query to the
//! upstream node.

pub mod translate;

use crate::upstream::UpstreamConnection;
use forwarder_proto::public::{self, service_server};
use forwarder_proto::upstream;
use std::sync::Arc;
use tonic::{Request, Response, Status};

/// The queries a forwarder can answer.
///
/// Implementations override the RPCs they support; the rest answer
/// `Unimplemented` naming the RPC.
#[tonic::async_trait]
pub trait QueryForwarder: Send + Sync + 'static {
    async fn get_node_info(
        &self,
        _request: public::GetNodeInfoRequest,
    ) -> Result<public::GetNodeInfoResponse, Status> {
        Err(Status::unimplemented("GetNodeInfo is not implemented"))
    }

    async fn get_syncing(
        &self,
        _request: public::GetSyncingRequest,
    ) -> Result<public::GetSyncingResponse, Status> {
        Err(Status::unimplemented("GetSyncing is not implemented"))
    }

    async fn get_latest_block(
        &self,
        _request: public::GetLatestBlockRequest,
    ) -> Result<public::GetLatestBlockResponse, Status> {
        Err(Status::unimplemented("GetLatestBlock is not implemented"))
    }

    async fn get_block_by_height(
        &self,
        _request: public::GetBlockByHeightRequest,
    ) -> Result<public::GetBlockByHeightResponse, Status> {
        Err(Status::unimplemented("GetBlockByHeight is not implemented"))
    }

    async fn get_latest_validator_set(
        &self,
        _request: public::GetLatestValidatorSetRequest,
    ) -> Result<public::GetLatestValidatorSetResponse, Status> {
        Err(Status::unimplemented("GetLatestValidatorSet is not implemented"))
    }

    async fn get_validator_set_by_height(
        &self,
        _request: public::GetValidatorSetByHeightRequest,
    ) -> Result<public::GetValidatorSetByHeightResponse, Status> {
        Err(Status::unimplemented("GetValidatorSetByHeight is not implemented"))
    }

    async fn abci_query(
        &self,
        _request: public::AbciQueryRequest,
    ) -> Result<public::AbciQueryResponse, Status> {
        Err(Status::unimplemented("ABCIQuery is not implemented"))
    }
}

/// Exposes a [`QueryForwarder`] as the generated `api.cosmos.forwarder.v1.Service`.
#[derive(Debug)]
pub struct ForwarderService<T> {
    inner: Arc<T>,
}

impl<T> ForwarderService<T> {
    pub fn new(inner: Arc<T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for ForwarderService<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[tonic::async_trait]
impl<T: QueryForwarder> service_server::Service for ForwarderService<T> {
    async fn get_node_info(
        &self,
        request: Request<public::GetNodeInfoRequest>,
    ) -> Result<Response<public::GetNodeInfoResponse>, Status> {
        self.inner
            .get_node_info(request.into_inner())
            .await
            .map(Response::new)
    }

    async fn get_syncing(
        &self,
        request: Request<public::GetSyncingRequest>,
    ) -> Result<Response<public::GetSyncingResponse>, Status> {
        self.inner
            .get_syncing(request.into_inner())
            .await
            .map(Response::new)
    }

    async fn get_latest_block(
        &self,
        request: Request<public::GetLatestBlockRequest>,
    ) -> Result<Response<public::GetLatestBlockResponse>, Status> {
        self.inner
            .get_latest_block(request.into_inner())
            .await
            .map(Response::new)
    }

    async fn get_block_by_height(
        &self,
        request: Request<public::GetBlockByHeightRequest>,
    ) -> Result<Response<public::GetBlockByHeightResponse>, Status> {
        self.inner
            .get_block_by_height(request.into_inner())
            .await
            .map(Response::new)
    }

    async fn get_latest_validator_set(
        &self,
        request: Request<public::GetLatestValidatorSetRequest>,
    ) -> Result<Response<public::GetLatestValidatorSetResponse>, Status> {
        self.inner
            .get_latest_validator_set(request.into_inner())
            .await
            .map(Response::new)
    }

    async fn get_validator_set_by_height(
        &self,
        request: Request<public::GetValidatorSetByHeightRequest>,
    ) -> Result<Response<public::GetValidatorSetByHeightResponse>, Status> {
        self.inner
            .get_validator_set_by_height(request.into_inner())
            .await
            .map(Response::new)
    }

    async fn abci_query(
        &self,
        request: Request<public::AbciQueryRequest>,
    ) -> Result<Response<public::AbciQueryResponse>, Status> {
        self.inner
            .abci_query(request.into_inner())
            .await
            .map(Response::new)
    }
}

/// Relays every query to the upstream node, remapping at the boundary.
///
/// Upstream failures are returned to the caller exactly as the node reported
/// them.
#[derive(Debug, Clone)]
pub struct ForwardingHandler {
    upstream: Arc<UpstreamConnection>,
}

impl ForwardingHandler {
    pub fn new(upstream: Arc<UpstreamConnection>) -> Self {
        Self { upstream }
    }
}

#[tonic::async_trait]
impl QueryForwarder for ForwardingHandler {
    async fn get_node_info(
        &self,
        _request: public::GetNodeInfoRequest,
    ) -> Result<public::GetNodeInfoResponse, Status> {
        let resp = self
            .upstream
            .get_node_info(upstream::GetNodeInfoRequest {})
            .await?;
        Ok(translate::node_info(resp))
    }

    async fn get_syncing(
        &self,
        _request: public::GetSyncingRequest,
    ) -> Result<public::GetSyncingResponse, Status> {
        let resp = self
            .upstream
            .get_syncing(upstream::GetSyncingRequest {})
            .await?;
        Ok(translate::syncing(resp))
    }

    async fn get_latest_block(
        &self,
        _request: public::GetLatestBlockRequest,
    ) -> Result<public::GetLatestBlockResponse, Status> {
        let resp = self
            .upstream
            .get_latest_block(upstream::GetLatestBlockRequest {})
            .await?;
        Ok(translate::latest_block(resp))
    }

    async fn get_block_by_height(
        &self,
        request: public::GetBlockByHeightRequest,
    ) -> Result<public::GetBlockByHeightResponse, Status> {
        let resp = self
            .upstream
            .get_block_by_height(translate::block_by_height_request(request))
            .await?;
        Ok(translate::block_by_height(resp))
    }

    async fn get_latest_validator_set(
        &self,
        request: public::GetLatestValidatorSetRequest,
    ) -> Result<public::GetLatestValidatorSetResponse, Status> {
        let resp = self
            .upstream
            .get_latest_validator_set(translate::latest_validator_set_request(request))
            .await?;
        Ok(translate::latest_validator_set(resp))
    }

    async fn get_validator_set_by_height(
        &self,
        request: public::GetValidatorSetByHeightRequest,
    ) -> Result<public::GetValidatorSetByHeightResponse, Status> {
        let resp = self
            .upstream
            .get_validator_set_by_height(translate::validator_set_by_height_request(request))
            .await?;
        Ok(translate::validator_set_by_height(resp))
    }

    async fn abci_query(
        &self,
        request: public::AbciQueryRequest,
    ) -> Result<public::AbciQueryResponse, Status> {
        let resp = self
            .upstream
            .abci_query(translate::abci_query_request(request))
            .await?;
        Ok(translate::abci_query(resp))
    }
}

// Path: crates/forwarder/src/upstream.rs
//! The long-lived connection to the upstream Cosmos SDK node.

use crate::error::{GatewayError, UpstreamError};
use crate::interceptor::{InterceptorChain, Next, Reply, Terminal, UnaryCall, UnaryInterceptor};
use crate::serializer::Payload;
use forwarder_proto::upstream::{self, service_client::ServiceClient};
use futures::FutureExt;
use std::{future::Future, sync::Arc, time::Duration};
use tonic::{
    transport::{Channel, Endpoint},
    Response, Status,
};

/// Full method paths of the upstream query service.
pub mod methods {
    pub const GET_NODE_INFO: &str = "/cosmos.base.tendermint.v1beta1.Service/GetNodeInfo";
    pub const GET_SYNCING: &str = "/cosmos.base.tendermint.v1beta1.Service/GetSyncing";
    pub const GET_LATEST_BLOCK: &str = "/cosmos.base.tendermint.v1beta1.Service/GetLatestBlock";
    pub const GET_BLOCK_BY_HEIGHT: &str =
        "/cosmos.base.tendermint.v1beta1.Service/GetBlockByHeight";
    pub const GET_LATEST_VALIDATOR_SET: &str =
        "/cosmos.base.tendermint.v1beta1.Service/GetLatestValidatorSet";
    pub const GET_VALIDATOR_SET_BY_HEIGHT: &str =
        "/cosmos.base.tendermint.v1beta1.Service/GetValidatorSetByHeight";
    pub const ABCI_QUERY: &str = "/cosmos.base.tendermint.v1beta1.Service/ABCIQuery";
}

/// Transport tuning for the upstream channel.
#[derive(Debug, Clone)]
pub struct UpstreamOptions {
    pub connect_timeout: Option<Duration>,
    /// Deadline applied to each call.
    pub call_timeout: Option<Duration>,
    pub tcp_keepalive: Option<Duration>,
}

impl Default for UpstreamOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            call_timeout: None,
            tcp_keepalive: Some(Duration::from_secs(60)),
        }
    }
}

/// Normalizes `host:port` or `http://host:port` into a plaintext URI.
///
/// TLS endpoints are refused: the upstream is always reached in plaintext.
pub fn normalize_endpoint(raw: &str) -> Result<String, GatewayError> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| GatewayError::Endpoint {
        endpoint: raw.to_string(),
        reason: reason.to_string(),
    };
    if trimmed.is_empty() {
        return Err(invalid("endpoint is empty"));
    }
    if trimmed.starts_with("https://") {
        return Err(invalid("TLS endpoints are not supported; use a plaintext host:port"));
    }
    if trimmed.starts_with("http://") {
        return Ok(trimmed.to_string());
    }
    if trimmed.contains("://") {
        return Err(invalid("unsupported scheme"));
    }
    Ok(format!("http://{}", trimmed))
}

/// One lazily-connected channel to the upstream node plus the outbound
/// interceptor chain every call runs through.
///
/// Created once at startup and shared by all inbound calls. Cloning the
/// generated client per call is cheap; all clones share the channel.
#[derive(Clone)]
pub struct UpstreamConnection {
    client: ServiceClient<Channel>,
    interceptors: InterceptorChain,
    endpoint: String,
}

impl std::fmt::Debug for UpstreamConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConnection")
            .field("endpoint", &self.endpoint)
            .field("interceptors", &self.interceptors)
            .finish_non_exhaustive()
    }
}

impl UpstreamConnection {
    /// Builds the channel without dialing. Only malformed configuration fails
    /// here; an unreachable node surfaces as an error status on the first call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        endpoint: &str,
        interceptors: Vec<Arc<dyn UnaryInterceptor>>,
        options: UpstreamOptions,
    ) -> Result<Self, GatewayError> {
        let uri = normalize_endpoint(endpoint)?;
        let mut builder =
            Endpoint::from_shared(uri.clone()).map_err(|e| GatewayError::Endpoint {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;
        if let Some(timeout) = options.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = options.call_timeout {
            builder = builder.timeout(timeout);
        }
        builder = builder.tcp_keepalive(options.tcp_keepalive);

        let channel = builder.connect_lazy();
        tracing::debug!(target: "upstream", endpoint = %uri, "upstream channel created");

        Ok(Self {
            client: ServiceClient::new(channel),
            interceptors: interceptors.into(),
            endpoint: uri,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one call through the interceptor chain and hands back the typed response.
    async fn invoke<Req, Resp, F, Fut>(
        &self,
        method: &'static str,
        request: Req,
        call: F,
    ) -> Result<Resp, UpstreamError>
    where
        Req: Payload + Clone + 'static,
        Resp: Payload + 'static,
        F: FnOnce(ServiceClient<Channel>, Req) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Response<Resp>, Status>> + Send + 'static,
    {
        let client = self.client.clone();
        let outbound = request.clone();
        let terminal: Terminal<'_> = Box::new(move || {
            async move {
                let response = call(client, outbound).await?;
                let reply: Reply = Box::new(response.into_inner());
                Ok::<Reply, Status>(reply)
            }
            .boxed()
        });

        let reply = Next::new(&self.interceptors, terminal)
            .run(UnaryCall {
                method,
                request: &request,
            })
            .await?;

        reply
            .into_any()
            .downcast::<Resp>()
            .map(|resp| *resp)
            .map_err(|_| {
                UpstreamError(Status::internal(format!(
                    "interceptor replaced the response of {method}"
                )))
            })
    }

    pub async fn get_node_info(
        &self,
        request: upstream::GetNodeInfoRequest,
    ) -> Result<upstream::GetNodeInfoResponse, UpstreamError> {
        self.invoke(methods::GET_NODE_INFO, request, |mut client, req| async move {
            client.get_node_info(req).await
        })
        .await
    }

    pub async fn get_syncing(
        &self,
        request: upstream::GetSyncingRequest,
    ) -> Result<upstream::GetSyncingResponse, UpstreamError> {
        self.invoke(methods::GET_SYNCING, request, |mut client, req| async move {
            client.get_syncing(req).await
        })
        .await
    }

    pub async fn get_latest_block(
        &self,
        request: upstream::GetLatestBlockRequest,
    ) -> Result<upstream::GetLatestBlockResponse, UpstreamError> {
        self.invoke(methods::GET_LATEST_BLOCK, request, |mut client, req| async move {
            client.get_latest_block(req).await
        })
        .await
    }

    pub async fn get_block_by_height(
        &self,
        request: upstream::GetBlockByHeightRequest,
    ) -> Result<upstream::GetBlockByHeightResponse, UpstreamError> {
        self.invoke(methods::GET_BLOCK_BY_HEIGHT, request, |mut client, req| async move {
            client.get_block_by_height(req).await
        })
        .await
    }

    pub async fn get_latest_validator_set(
        &self,
        request: upstream::GetLatestValidatorSetRequest,
    ) -> Result<upstream::GetLatestValidatorSetResponse, UpstreamError> {
        self.invoke(methods::GET_LATEST_VALIDATOR_SET, request, |mut client, req| async move {
            client.get_latest_validator_set(req).await
        })
        .await
    }

    pub async fn get_validator_set_by_height(
        &self,
        request: upstream::GetValidatorSetByHeightRequest,
    ) -> Result<upstream::GetValidatorSetByHeightResponse, UpstreamError> {
        self.invoke(
            methods::GET_VALIDATOR_SET_BY_HEIGHT,
            request,
            |mut client, req| async move { client.get_validator_set_by_height(req).await },
        )
        .await
    }

    pub async fn abci_query(
        &self,
        request: upstream::AbciQueryRequest,
    ) -> Result<upstream::AbciQueryResponse, UpstreamError> {
        self.invoke(methods::ABCI_QUERY, request, |mut client, req| async move {
            client.abci_query(req).await
        })
        .await
    }
}

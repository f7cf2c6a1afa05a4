// Path: crates/forwarder/tests/common/mod.rs
#![allow(dead_code)]

use anyhow::Result;
use cosmos_grpc_forwarder::{
    forwarding_handler, ForwarderConfig, GatewayError, GatewayServer, JsonConverter,
    ServerSettings, ServerState,
};
use forwarder_proto::public::service_client::ServiceClient as PublicClient;
use forwarder_proto::query::PageResponse;
use forwarder_proto::upstream::{self, service_server};
use forwarder_proto::{google::protobuf::Any, tendermint_proto};
use forwarder_telemetry::{CallLogRecord, CallLogSink, LogFormat};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Channel, Server};
use tonic::metadata::AsciiMetadataValue;
use tonic::{Request, Response, Status};

/// Heights the mock node treats specially.
pub const SLOW_HEIGHT: i64 = 777;
pub const STALLED_HEIGHT: i64 = 888;
pub const MAX_HEIGHT: i64 = 1_000;
pub const SLOW_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Default)]
pub struct MemorySink(Mutex<Vec<CallLogRecord>>);

impl CallLogSink for MemorySink {
    fn record(&self, record: CallLogRecord) {
        self.0.lock().unwrap().push(record);
    }
}

impl MemorySink {
    pub fn records(&self) -> Vec<CallLogRecord> {
        self.0.lock().unwrap().clone()
    }
}

/// Everything the mock node has been asked.
#[derive(Debug, Default)]
pub struct Seen {
    pub heights: Vec<i64>,
    pub validator_sets: Vec<upstream::GetValidatorSetByHeightRequest>,
    pub latest_validator_sets: Vec<upstream::GetLatestValidatorSetRequest>,
    pub abci: Vec<upstream::AbciQueryRequest>,
}

/// An in-process stand-in for a Cosmos SDK node's query service.
#[derive(Debug, Clone, Default)]
pub struct MockNode {
    pub seen: Arc<Mutex<Seen>>,
    pub build_deps: Vec<upstream::Module>,
}

pub fn sample_validators() -> Vec<upstream::Validator> {
    (0..3)
        .map(|i| upstream::Validator {
            address: format!("cosmosvalcons1validator{i}"),
            pub_key: Some(Any {
                type_url: "/cosmos.crypto.ed25519.PubKey".into(),
                value: vec![i as u8; 32],
            }),
            voting_power: 1_000 - i64::from(i),
            proposer_priority: -i64::from(i),
        })
        .collect()
}

/// The tendermint block the mock node reports as its tip.
pub fn raw_block() -> tendermint_proto::types::Block {
    tendermint_proto::types::Block {
        header: Some(tendermint_proto::types::Header {
            chain_id: "testnet-1".into(),
            height: 41,
            ..Default::default()
        }),
        data: Some(tendermint_proto::types::Data {
            txs: vec![b"tx-one".to_vec(), b"tx-two".to_vec()],
        }),
        evidence: Some(tendermint_proto::types::EvidenceList { evidence: vec![] }),
        last_commit: Some(tendermint_proto::types::Commit {
            height: 40,
            round: 0,
            block_id: None,
            signatures: vec![],
        }),
    }
}

fn block_at(height: i64) -> upstream::Block {
    upstream::Block {
        header: Some(upstream::Header {
            chain_id: "testnet-1".into(),
            height,
            app_hash: vec![0xab; 32],
            proposer_address: "cosmosvalcons1proposer".into(),
            ..Default::default()
        }),
        data: Some(tendermint_proto::types::Data { txs: vec![] }),
        evidence: None,
        last_commit: None,
    }
}

#[tonic::async_trait]
impl service_server::Service for MockNode {
    async fn get_node_info(
        &self,
        _request: Request<upstream::GetNodeInfoRequest>,
    ) -> Result<Response<upstream::GetNodeInfoResponse>, Status> {
        Ok(Response::new(upstream::GetNodeInfoResponse {
            default_node_info: Some(tendermint_proto::p2p::DefaultNodeInfo {
                network: "testnet-1".into(),
                moniker: "mock".into(),
                ..Default::default()
            }),
            application_version: Some(upstream::VersionInfo {
                name: "gaia".into(),
                app_name: "gaiad".into(),
                version: "v15.0.0".into(),
                git_commit: "deadbeef".into(),
                build_tags: "netgo,ledger".into(),
                go_version: "go1.21".into(),
                build_deps: self.build_deps.clone(),
                cosmos_sdk_version: "v0.47.5".into(),
            }),
        }))
    }

    async fn get_syncing(
        &self,
        _request: Request<upstream::GetSyncingRequest>,
    ) -> Result<Response<upstream::GetSyncingResponse>, Status> {
        Ok(Response::new(upstream::GetSyncingResponse { syncing: true }))
    }

    async fn get_latest_block(
        &self,
        _request: Request<upstream::GetLatestBlockRequest>,
    ) -> Result<Response<upstream::GetLatestBlockResponse>, Status> {
        // Older nodes only fill the raw block.
        Ok(Response::new(upstream::GetLatestBlockResponse {
            block_id: Some(tendermint_proto::types::BlockId {
                hash: vec![1; 32],
                part_set_header: None,
            }),
            block: Some(raw_block()),
            sdk_block: None,
        }))
    }

    async fn get_block_by_height(
        &self,
        request: Request<upstream::GetBlockByHeightRequest>,
    ) -> Result<Response<upstream::GetBlockByHeightResponse>, Status> {
        let height = request.into_inner().height;
        self.seen.lock().unwrap().heights.push(height);
        match height {
            SLOW_HEIGHT => tokio::time::sleep(SLOW_DELAY).await,
            STALLED_HEIGHT => tokio::time::sleep(Duration::from_secs(30)).await,
            h if h > MAX_HEIGHT => {
                let mut status = Status::with_details(
                    tonic::Code::NotFound,
                    format!("height {h} is not available"),
                    tonic::codegen::Bytes::from_static(b"\x08\x05"),
                );
                let tip: AsciiMetadataValue = MAX_HEIGHT.to_string().parse().unwrap();
                status.metadata_mut().insert("x-cosmos-block-height", tip);
                return Err(status);
            }
            _ => {}
        }
        Ok(Response::new(upstream::GetBlockByHeightResponse {
            block_id: None,
            block: None,
            sdk_block: Some(block_at(height)),
        }))
    }

    async fn get_latest_validator_set(
        &self,
        request: Request<upstream::GetLatestValidatorSetRequest>,
    ) -> Result<Response<upstream::GetLatestValidatorSetResponse>, Status> {
        self.seen
            .lock()
            .unwrap()
            .latest_validator_sets
            .push(request.into_inner());
        Ok(Response::new(upstream::GetLatestValidatorSetResponse {
            block_height: 42,
            validators: sample_validators(),
            pagination: Some(PageResponse {
                next_key: b"page-2".to_vec(),
                total: 3,
            }),
        }))
    }

    async fn get_validator_set_by_height(
        &self,
        request: Request<upstream::GetValidatorSetByHeightRequest>,
    ) -> Result<Response<upstream::GetValidatorSetByHeightResponse>, Status> {
        let request = request.into_inner();
        let height = request.height;
        self.seen.lock().unwrap().validator_sets.push(request);
        Ok(Response::new(upstream::GetValidatorSetByHeightResponse {
            block_height: height,
            validators: Vec::new(),
            pagination: None,
        }))
    }

    async fn abci_query(
        &self,
        request: Request<upstream::AbciQueryRequest>,
    ) -> Result<Response<upstream::AbciQueryResponse>, Status> {
        let request = request.into_inner();
        self.seen.lock().unwrap().abci.push(request.clone());
        let proof_ops = request.prove.then(|| upstream::ProofOps {
            ops: vec![upstream::ProofOp {
                r#type: "ics23:iavl".into(),
                key: request.data.clone(),
                data: vec![0xde, 0xad],
            }],
        });
        Ok(Response::new(upstream::AbciQueryResponse {
            code: 0,
            log: format!("queried {}", request.path),
            info: String::new(),
            index: 0,
            key: request.data,
            value: b"value".to_vec(),
            proof_ops,
            height: request.height,
            codespace: String::new(),
        }))
    }
}

/// Serves `node` on an ephemeral local port.
pub async fn spawn_upstream(node: MockNode) -> Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(
        Server::builder()
            .add_service(service_server::ServiceServer::new(node))
            .serve_with_incoming(TcpListenerStream::new(listener)),
    );
    Ok(addr)
}

pub fn config_for(upstream: SocketAddr, drain: Duration) -> ForwarderConfig {
    ForwarderConfig {
        server_host: "127.0.0.1".into(),
        server_port: 0,
        server_name: "forwarder-under-test".into(),
        cosmos_sdk_grpc_endpoint: upstream.to_string(),
        log_level: "debug".into(),
        log_format: LogFormat::Text,
        upstream_connect_timeout_secs: Some(2),
        upstream_call_timeout_secs: None,
        shutdown_drain_secs: drain.as_secs(),
        telemetry_addr: None,
    }
}

/// A running gateway in front of a mock node.
pub struct Harness {
    pub addr: SocketAddr,
    pub node: MockNode,
    pub sink: Arc<MemorySink>,
    pub shutdown: watch::Sender<bool>,
    pub state: watch::Receiver<ServerState>,
    pub task: JoinHandle<Result<(), GatewayError>>,
}

impl Harness {
    pub async fn start(node: MockNode) -> Result<Self> {
        Self::start_with_drain(node, Duration::from_secs(5)).await
    }

    pub async fn start_with_drain(node: MockNode, drain: Duration) -> Result<Self> {
        let upstream = spawn_upstream(node.clone()).await?;
        let config = config_for(upstream, drain);
        let mut settings = ServerSettings::from(&config);
        settings.drain_timeout = drain;

        let sink = Arc::new(MemorySink::default());
        let handler = forwarding_handler(&config, JsonConverter::new(), sink.clone())?;
        let server = GatewayServer::bind(settings, Arc::new(handler)).await?;
        let addr = server.local_addr();
        let state = server.state();

        let (shutdown, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(server.run(shutdown_rx));

        Ok(Self {
            addr,
            node,
            sink,
            shutdown,
            state,
            task,
        })
    }

    pub async fn client(&self) -> Result<PublicClient<Channel>> {
        Ok(PublicClient::connect(format!("http://{}", self.addr)).await?)
    }

    /// Waits until the server reports `target`.
    pub async fn wait_for(&mut self, target: ServerState) -> Result<()> {
        tokio::time::timeout(Duration::from_secs(5), async {
            while *self.state.borrow_and_update() != target {
                if self.state.changed().await.is_err() {
                    break;
                }
            }
        })
        .await?;
        Ok(())
    }
}

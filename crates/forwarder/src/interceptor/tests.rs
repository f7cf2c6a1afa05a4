// Path: crates/forwarder/src/interceptor/tests.rs
use super::*;
use crate::serializer::JsonConverter;
use forwarder_proto::upstream;
use forwarder_telemetry::{CallLogRecord, CallLogSink};
use futures::FutureExt;
use std::sync::Mutex;
use std::time::Duration;

const METHOD: &str = "/cosmos.base.tendermint.v1beta1.Service/GetSyncing";

#[derive(Debug, Default)]
struct MemorySink(Mutex<Vec<CallLogRecord>>);

impl CallLogSink for MemorySink {
    fn record(&self, record: CallLogRecord) {
        self.0.lock().unwrap().push(record);
    }
}

impl MemorySink {
    fn records(&self) -> Vec<CallLogRecord> {
        self.0.lock().unwrap().clone()
    }
}

/// Pushes `"<name>:before"` and `"<name>:after"` around the rest of the chain.
#[derive(Debug)]
struct Tracer {
    name: &'static str,
    trace: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl UnaryInterceptor for Tracer {
    async fn intercept(&self, call: UnaryCall<'_>, next: Next<'_>) -> Result<Reply, Status> {
        self.trace.lock().unwrap().push(format!("{}:before", self.name));
        let result = next.run(call).await;
        self.trace.lock().unwrap().push(format!("{}:after", self.name));
        result
    }
}

struct Unrenderable;

impl serde::Serialize for Unrenderable {
    fn serialize<S: serde::Serializer>(&self, _s: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("no json for you"))
    }
}

fn call(request: &dyn Payload) -> UnaryCall<'_> {
    UnaryCall {
        method: METHOD,
        request,
    }
}

fn respond_with<'a, T: Payload + 'static>(value: T) -> Terminal<'a> {
    Box::new(move || async move { Ok::<Reply, Status>(Box::new(value)) }.boxed())
}

fn synced<'a>(syncing: bool) -> Terminal<'a> {
    respond_with(upstream::GetSyncingResponse { syncing })
}

fn fail_with<'a>(status: Status) -> Terminal<'a> {
    Box::new(move || async move { Err::<Reply, Status>(status) }.boxed())
}

fn logging(sink: &Arc<MemorySink>) -> Arc<dyn UnaryInterceptor> {
    Arc::new(LoggingInterceptor::new(JsonConverter::new(), sink.clone()))
}

fn tracer(name: &'static str, trace: &Arc<Mutex<Vec<String>>>) -> Arc<dyn UnaryInterceptor> {
    let trace = trace.clone();
    Arc::new(Tracer { name, trace })
}

#[tokio::test]
async fn test_first_declared_interceptor_is_outermost() {
    let trace = Arc::new(Mutex::new(Vec::new()));
    let chain = vec![tracer("outer", &trace), tracer("inner", &trace)];
    let request = upstream::GetSyncingRequest {};
    Next::new(&chain, synced(true))
        .run(call(&request))
        .await
        .unwrap();

    assert_eq!(
        *trace.lock().unwrap(),
        vec!["outer:before", "inner:before", "inner:after", "outer:after"]
    );
}

#[tokio::test]
async fn test_empty_chain_runs_terminal_directly() {
    let request = upstream::GetSyncingRequest {};
    let reply = Next::new(&[], synced(true))
        .run(call(&request))
        .await
        .unwrap();
    let resp = reply.into_any().downcast::<upstream::GetSyncingResponse>();
    assert!(resp.unwrap().syncing);
}

#[tokio::test]
async fn test_logging_records_successful_call() {
    let sink = Arc::new(MemorySink::default());
    let chain = vec![logging(&sink)];
    let request = upstream::GetBlockByHeightRequest { height: 12 };

    let reply = Next::new(&chain, synced(false))
        .run(call(&request))
        .await
        .unwrap();
    let resp = reply.into_any().downcast::<upstream::GetSyncingResponse>();
    assert!(!resp.unwrap().syncing);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.method, METHOD);
    assert_eq!(record.request, r#"{"height":12}"#);
    assert_eq!(record.response, r#"{"syncing":false}"#);
    assert!(record.error.is_none());
    assert!(record.duration_secs >= 0.0);
}

#[tokio::test]
async fn test_logged_error_equals_returned_error() {
    let sink = Arc::new(MemorySink::default());
    let chain = vec![logging(&sink)];
    let request = upstream::GetBlockByHeightRequest { height: 999_999 };
    let refused = Status::not_found("height 999999 is not available");

    let status = Next::new(&chain, fail_with(refused))
        .run(call(&request))
        .await
        .err()
        .unwrap();
    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "height 999999 is not available");

    let records = sink.records();
    assert_eq!(records.len(), 1);
    let error = records[0].error.clone().unwrap();
    assert_eq!(error.code, code_name(status.code()));
    assert_eq!(error.message, status.message());
    assert_eq!(records[0].response, "null");
}

#[tokio::test]
async fn test_unrenderable_request_does_not_affect_call() {
    let sink = Arc::new(MemorySink::default());
    let chain = vec![logging(&sink)];
    let request = Unrenderable;

    let reply = Next::new(&chain, synced(true))
        .run(call(&request))
        .await
        .unwrap();
    let resp = reply.into_any().downcast::<upstream::GetSyncingResponse>();
    assert!(resp.is_ok());

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].request, "null");
    assert_eq!(records[0].response, r#"{"syncing":true}"#);
}

#[tokio::test]
async fn test_dropped_call_is_recorded_as_cancelled() {
    let sink = Arc::new(MemorySink::default());
    let chain = vec![logging(&sink)];
    let request = upstream::GetSyncingRequest {};
    let never: Terminal<'_> =
        Box::new(|| futures::future::pending::<Result<Reply, Status>>().boxed());

    let pending = Next::new(&chain, never).run(call(&request));
    let outcome = tokio::time::timeout(Duration::from_millis(20), pending).await;
    assert!(outcome.is_err());

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].error.as_ref().unwrap().code, "Cancelled");
}

#[tokio::test]
async fn test_each_concurrent_call_gets_its_own_record() {
    let sink = Arc::new(MemorySink::default());
    let chain = vec![logging(&sink)];

    let calls = (0..16i64).map(|height| {
        let chain = &chain;
        async move {
            let request = upstream::GetBlockByHeightRequest { height };
            let terminal: Terminal<'_> = Box::new(move || {
                async move {
                    let delay = Duration::from_millis((16 - height as u64) % 5);
                    tokio::time::sleep(delay).await;
                    let echoed = upstream::GetBlockByHeightRequest {
                        height: height * 10,
                    };
                    Ok::<Reply, Status>(Box::new(echoed))
                }
                .boxed()
            });
            Next::new(chain, terminal).run(call(&request)).await
        }
    });
    let results = futures::future::join_all(calls).await;
    assert!(results.iter().all(Result::is_ok));

    let records = sink.records();
    assert_eq!(records.len(), 16);
    for record in records {
        let req: serde_json::Value = serde_json::from_str(&record.request).unwrap();
        let resp: serde_json::Value = serde_json::from_str(&record.response).unwrap();
        assert_eq!(
            resp["height"].as_i64().unwrap(),
            req["height"].as_i64().unwrap() * 10
        );
    }
}

#[derive(Debug, Default)]
struct CountingMetrics(Mutex<Vec<(String, String)>>);

impl forwarder_telemetry::sinks::UpstreamMetricsSink for CountingMetrics {
    fn inc_calls_total(&self, method: &str, code: &str) {
        let labels = (method.to_string(), code.to_string());
        self.0.lock().unwrap().push(labels);
    }
    fn observe_call_duration(&self, _method: &str, _duration_secs: f64) {}
}

#[tokio::test]
async fn test_metrics_interceptor_labels_by_status_code() {
    let metrics: &'static CountingMetrics = Box::leak(Box::default());
    let stage: Arc<dyn UnaryInterceptor> = Arc::new(MetricsInterceptor::new(metrics));
    let chain = vec![stage];
    let request = upstream::GetSyncingRequest {};

    let _ = Next::new(&chain, synced(true)).run(call(&request)).await;
    let unavailable = fail_with(Status::unavailable("node down"));
    let _ = Next::new(&chain, unavailable).run(call(&request)).await;

    let seen = metrics.0.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            (METHOD.to_string(), "Ok".to_string()),
            (METHOD.to_string(), "Unavailable".to_string()),
        ]
    );
}

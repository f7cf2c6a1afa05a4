// Path: crates/telemetry/src/tests.rs
use crate::http::router;
use crate::init::LogFormat;
use crate::prometheus::install;
use crate::sinks::{upstream_metrics, CallLogRecord, CallLogSink, NopSink, TracingCallLogSink};
use axum::{body::Body, http::Request, http::StatusCode};
use tokio::sync::watch;
use tower::ServiceExt;

#[test]
fn test_log_format_parsing() {
    assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
    assert_eq!("TEXT".parse::<LogFormat>(), Ok(LogFormat::Text));
    assert_eq!(" plain ".parse::<LogFormat>(), Ok(LogFormat::Text));
    assert!("yaml".parse::<LogFormat>().is_err());
    assert_eq!(LogFormat::default(), LogFormat::Json);
    assert_eq!(LogFormat::Text.to_string(), "text");
}

#[test]
fn test_call_sinks_accept_records() {
    let record = CallLogRecord {
        method: "/cosmos.base.tendermint.v1beta1.Service/GetSyncing".into(),
        request: "{}".into(),
        response: r#"{"syncing":true}"#.into(),
        error: None,
        duration_secs: 0.01,
    };
    // Neither sink may panic without a subscriber installed.
    NopSink.record(record.clone());
    TracingCallLogSink.record(record);
}

#[test]
fn test_prometheus_install_is_idempotent() {
    install().unwrap();
    install().unwrap();

    upstream_metrics().inc_calls_total("/svc/Method", "Ok");
    upstream_metrics().observe_call_duration("/svc/Method", 0.002);

    let families = prometheus::gather();
    let calls = families
        .iter()
        .find(|f| f.get_name() == "forwarder_upstream_calls_total")
        .expect("counter registered");
    assert!(!calls.get_metric().is_empty());
}

#[tokio::test]
async fn test_healthz_is_always_ok() {
    let (_tx, ready) = watch::channel(false);
    let resp = router(ready)
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readyz_follows_ready_flag() {
    let (tx, ready) = watch::channel(false);
    let app = router(ready);

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    tx.send(true).unwrap();
    let resp = app
        .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_endpoint_serves_text_format() {
    install().unwrap();
    upstream_metrics().inc_calls_total("/svc/Scraped", "NotFound");

    let (_tx, ready) = watch::channel(true);
    let resp = router(ready)
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("forwarder_upstream_calls_total"));
    assert!(text.contains("/svc/Scraped"));
}

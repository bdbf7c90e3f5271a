// Path: crates/client/tests/http_transport.rs

//! Drives `HttpTransport` and `WireClient` against a local axum backend.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Form, Router,
};
use eicoop_client::{codec, HttpTransport, WireClient};
use eicoop_types::schema::{
    ContractCoopStatusRequest, ContractCoopStatusResponse, ContributionInfo, FarmProductionParams,
    QueryCoopRequest, QueryCoopResponse,
};
use eicoop_types::{ClientConfig, ResponseFraming, VariantSelector, WireError};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Deserialize)]
struct DataForm {
    data: String,
}

#[derive(Clone, Default)]
struct Backend {
    slow: bool,
}

async fn handle(
    State(backend): State<Backend>,
    Path(endpoint): Path<String>,
    Form(form): Form<DataForm>,
) -> Result<Vec<u8>, (StatusCode, String)> {
    let bad_request = |e: WireError| (StatusCode::BAD_REQUEST, e.to_string());
    if backend.slow {
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
    let bytes = codec::decode_payload(&form.data).map_err(bad_request)?;
    match endpoint.as_str() {
        "coop_status" => {
            let req: ContractCoopStatusRequest = codec::decode_record(&bytes).map_err(bad_request)?;
            let resp = ContractCoopStatusResponse {
                contract_identifier: req.contract_identifier,
                coop_identifier: req.coop_identifier,
                total_amount: 100.0,
                seconds_remaining: 200.0,
                contributors: vec![ContributionInfo {
                    user_id: req.user_id,
                    contribution_rate: 10.0,
                    production_params: Some(FarmProductionParams {
                        sr: 8.0,
                        ..Default::default()
                    }),
                    ..Default::default()
                }],
                ..Default::default()
            };
            Ok(codec::frame(&resp, ResponseFraming::AUTHENTICATED))
        }
        "query_coop" => {
            let req: QueryCoopRequest = codec::decode_record(&bytes).map_err(bad_request)?;
            let resp = QueryCoopResponse {
                exists: req.coop_identifier == "known",
                ..Default::default()
            };
            Ok(codec::frame(&resp, ResponseFraming::BARE))
        }
        other => Err((StatusCode::NOT_FOUND, format!("unknown endpoint {}", other))),
    }
}

async fn spawn_backend(backend: Backend) -> Result<String> {
    let app = Router::new()
        .route("/ei/:endpoint", post(handle))
        .with_state(backend);
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{}/ei/{{}}", addr))
}

fn client(base_url: String, timeout: Duration) -> Result<WireClient> {
    let transport = Arc::new(HttpTransport::new(timeout)?);
    Ok(WireClient::new(
        transport,
        ClientConfig::new(base_url, "EI-HTTP", 47),
    ))
}

#[tokio::test]
async fn test_coop_status_over_http() -> Result<()> {
    let base = spawn_backend(Backend::default()).await?;
    let client = client(base, Duration::from_secs(15))?;

    let status = client.fetch_coop_status("spring", "my-coop").await?;
    assert_eq!(status.contract_identifier, "spring");
    assert_eq!(status.coop_identifier, "my-coop");
    assert_eq!(status.contributors.len(), 1);
    assert_eq!(status.contributors[0].user_id, "EI-HTTP");
    Ok(())
}

#[tokio::test]
async fn test_query_coop_over_http() -> Result<()> {
    let base = spawn_backend(Backend::default()).await?;
    let client = client(base, Duration::from_secs(15))?;

    let known = client.query_coop("c", "known", VariantSelector::league(true)).await?;
    assert!(known.exists);
    let unknown = client.query_coop("c", "nope", VariantSelector::league(true)).await?;
    assert!(!unknown.exists);
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_remote_error() -> Result<()> {
    let base = spawn_backend(Backend::default()).await?;
    let client = client(base, Duration::from_secs(15))?;

    let err = client.fetch_periodicals().await.unwrap_err();
    match err {
        WireError::Remote { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("get_periodicals"), "{}", body);
        }
        other => panic!("expected remote error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_timeout_is_transport_error() -> Result<()> {
    let base = spawn_backend(Backend { slow: true }).await?;
    let client = client(base, Duration::from_millis(200))?;

    let err = client.fetch_coop_status("c", "coop").await.unwrap_err();
    assert!(matches!(err, WireError::Transport(_)), "{:?}", err);
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() -> Result<()> {
    // Bind then drop to obtain a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = client(format!("http://{}/ei/{{}}", addr), Duration::from_secs(2))?;
    let err = client.fetch_coop_status("c", "coop").await.unwrap_err();
    assert!(matches!(err, WireError::Transport(_)), "{:?}", err);
    Ok(())
}

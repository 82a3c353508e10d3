//! HTTP gateway endpoint.
//!
//! `GET /ussd?MSISDN=..&INPUT=..&SessionId=..` drives one step of the menu. The
//! `FreeFlow` header tells the gateway whether to keep the session open.

pub mod input;

use crate::application::engine::UssdEngine;
use crate::error::Result;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::header::{CONTENT_TYPE, HeaderName};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

const FREE_FLOW: HeaderName = HeaderName::from_static("freeflow");
const LEGACY_CONTENT_TYPE: HeaderName = HeaderName::from_static("content_type");
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

pub fn router(engine: Arc<UssdEngine>) -> Router {
    Router::new()
        .route("/ussd", get(ussd))
        .fallback(not_found)
        .with_state(engine)
}

/// Binds `port` on all interfaces and serves until Ctrl-C.
pub async fn serve(port: u16, engine: Arc<UssdEngine>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "USSD gateway listening");

    axum::serve(listener, router(engine))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await?;
    tracing::info!("USSD gateway stopped");
    Ok(())
}

async fn ussd(
    State(engine): State<Arc<UssdEngine>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let msisdn = params.get("MSISDN").filter(|v| !v.is_empty());
    let session_id = params.get("SessionId").filter(|v| !v.is_empty());
    let (Some(msisdn), Some(session_id)) = (msisdn, session_id) else {
        tracing::info!("rejected request without MSISDN or SessionId");
        return (
            StatusCode::BAD_REQUEST,
            [(CONTENT_TYPE, TEXT_PLAIN)],
            "Missing required parameters: MSISDN or SessionId",
        )
            .into_response();
    };

    // The raw input can carry a PIN, so only its length is logged.
    let input = input::current_input(params.get("INPUT").map(String::as_str));
    tracing::info!(msisdn, session_id, input_len = input.len(), "USSD request");

    let response = engine.process_request(msisdn, input, session_id).await;
    tracing::info!(
        msisdn,
        session_id,
        free_flow = response.flow.marker(),
        body_len = response.body.len(),
        "USSD response"
    );

    (
        StatusCode::OK,
        [
            (FREE_FLOW, response.flow.marker()),
            (LEGACY_CONTENT_TYPE, "utf-8"),
            (CONTENT_TYPE, TEXT_PLAIN),
        ],
        response.body,
    )
        .into_response()
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, [(CONTENT_TYPE, TEXT_PLAIN)], "Not found")
}

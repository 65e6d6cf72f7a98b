use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, ConnectInfo, OriginalUri, State},
    http::{Extensions, HeaderMap, Method},
};
use chrono::Utc;
use std::collections::HashMap;
use std::net::SocketAddr;

use crate::{
    server::{error::ServerError, models::CAPTURE_ACK, AppState},
    NewRecord,
};

pub async fn capture_request(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    extensions: Extensions,
    body: Result<Bytes, BytesRejection>,
) -> Result<&'static str, ServerError> {
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    // Create span with method and url for all logs in this request
    let span = tracing::info_span!("capture_request", method = %method, url = %url);
    let _enter = span.enter();

    let body = body.map_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "Request body rejected, not captured");
        ServerError::from(rejection)
    })?;

    // Absent when the router is driven without a socket
    let remote_addr = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();

    let id = state.capture_log.insert(NewRecord {
        method: method.to_string(),
        url,
        headers: first_header_values(&headers),
        body: String::from_utf8_lossy(&body).into_owned(),
        timestamp: Utc::now(),
        remote_addr,
    });

    tracing::info!(id, "Webhook received");

    Ok(CAPTURE_ACK)
}

/// Flatten headers to one value per name, keeping the first occurrence
fn first_header_values(headers: &HeaderMap) -> HashMap<String, String> {
    let mut flattened = HashMap::with_capacity(headers.keys_len());
    for (name, value) in headers {
        flattened
            .entry(name.as_str().to_string())
            .or_insert_with(|| String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn first_header_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.2"));
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let flattened = first_header_values(&headers);

        assert_eq!(flattened.len(), 2);
        assert_eq!(flattened["x-forwarded-for"], "10.0.0.1");
        assert_eq!(flattened["content-type"], "application/json");
    }

    #[test]
    fn non_utf8_header_values_are_kept_lossily() {
        let mut headers = HeaderMap::new();
        headers.insert("x-raw", HeaderValue::from_bytes(b"caf\xe9").unwrap());

        let flattened = first_header_values(&headers);

        assert_eq!(flattened["x-raw"], "caf\u{fffd}");
    }
}

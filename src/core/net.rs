// src/core/net.rs

// One blocking GET with browser-like headers. No retries.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use tracing::{debug, info};
use url::Url;

use crate::config::consts;
use crate::error::{MajorsError, Result};

/// Raw page as returned by the server.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub status: u16,
    pub body: String,
}

/// Site root of `url`, used as the Referer (`https://host/`).
pub fn referer_for(url: &Url) -> String {
    format!("{}/", url.origin().ascii_serialization())
}

fn static_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(consts::USER_AGENT));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(consts::ACCEPT_LANGUAGE));
    h.insert(ACCEPT, HeaderValue::from_static(consts::ACCEPT));
    h
}

/// Sends the GET and returns the response whatever its status.
pub fn send(url: &str, timeout: Option<Duration>) -> Result<Response> {
    let parsed = Url::parse(url).map_err(|source| MajorsError::Url {
        url: url.to_string(),
        source,
    })?;
    let fetch_err = |source| fetch_error(url, source);

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_err)?;

    debug!(url, ?timeout, "GET");
    let resp = client
        .get(parsed.clone())
        .headers(static_headers())
        .header(REFERER, referer_for(&parsed))
        .send()
        .map_err(fetch_err)?;

    info!(url, status = %resp.status(), "response");
    Ok(resp)
}

/// Non-2xx is a fetch failure; otherwise the body, decoded lossily.
pub fn read_body(url: &str, resp: Response) -> Result<Fetched> {
    let fetch_err = |source| fetch_error(url, source);
    let status = resp.status().as_u16();
    let resp = resp.error_for_status().map_err(fetch_err)?;
    let bytes = resp.bytes().map_err(fetch_err)?;

    Ok(Fetched {
        status,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

fn fetch_error(url: &str, source: reqwest::Error) -> MajorsError {
    MajorsError::Fetch {
        url: url.to_string(),
        source,
    }
}

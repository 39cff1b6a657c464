// src/core/net.rs
// Blocking HTTP GET; one page per run, no retries.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    let fail = |reason: String| Error::Fetch { url: url.to_string(), reason };

    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| fail(e.to_string()))?;

    logf!("GET {url}");
    let resp = client.get(url).send().map_err(|e| fail(e.to_string()))?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(fail(format!("HTTP {status}")));
    }
    resp.text().map_err(|e| fail(e.to_string()))
}

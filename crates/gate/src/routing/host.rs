//! Requested host resolution
//!
//! User agents and proxies can set `X-Forwarded-Host` and `Host` to arbitrary
//! values. Nothing here validates them: the result is only ever compared
//! against configured values, never trusted for anything else.

use axum::http::{header, HeaderMap, Uri};

/// Header set by reverse proxies carrying the client-requested host
pub const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Resolve the effective requested host.
///
/// The forwarded host wins when present and non-empty, otherwise the primary
/// host header is used. The result is lowercased and otherwise kept verbatim
/// (ports are not stripped).
pub fn effective_host(forwarded_host: Option<&str>, host: &str) -> String {
    match forwarded_host {
        Some(forwarded) if !forwarded.is_empty() => forwarded.to_lowercase(),
        _ => host.to_lowercase(),
    }
}

/// Host values taken from an incoming request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHost {
    /// Effective host, honoring `X-Forwarded-Host`
    pub host: String,
    /// The request's own `Host`, used as the default domain
    pub server_name: String,
}

impl RequestHost {
    pub fn from_headers(headers: &HeaderMap, uri: &Uri) -> Self {
        let forwarded = header_string(headers, X_FORWARDED_HOST);
        // HTTP/2 requests carry the host in the URI authority instead
        let own_host = header_string(headers, header::HOST.as_str())
            .or_else(|| uri.authority().map(|a| a.as_str().to_string()))
            .unwrap_or_default();

        Self {
            host: effective_host(forwarded.as_deref(), &own_host),
            server_name: own_host.to_lowercase(),
        }
    }
}

/// Header value as an opaque string; bytes that are not UTF-8 are replaced
fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
}

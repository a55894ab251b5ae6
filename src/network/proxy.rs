//! Proxy liveness probing.

use std::time::Duration;

const PROBE_URL: &str = "https://httpbin.org/ip";
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Probe a `host:port` proxy descriptor and return its URL when usable.
///
/// Any failure, a dead proxy, a bad descriptor, a non-success probe
/// status, degrades silently to a direct connection (`None`).
pub async fn resolve_proxy(descriptor: Option<&str>) -> Option<String> {
    let descriptor = descriptor?.trim();
    if descriptor.is_empty() {
        return None;
    }

    let proxy_url = if descriptor.starts_with("http://") || descriptor.starts_with("https://") {
        descriptor.to_string()
    } else {
        format!("http://{}", descriptor)
    };

    let proxy = match reqwest::Proxy::all(&proxy_url) {
        Ok(proxy) => proxy,
        Err(e) => {
            tracing::warn!(proxy = %descriptor, error = %e, "Bad proxy descriptor, continuing without it");
            return None;
        }
    };
    let client = match reqwest::Client::builder()
        .proxy(proxy)
        .timeout(PROBE_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(proxy = %descriptor, error = %e, "Proxy client build failed, continuing without it");
            return None;
        }
    };

    match client.get(PROBE_URL).send().await {
        Ok(response) if response.status().is_success() => Some(proxy_url),
        Ok(response) => {
            tracing::warn!(
                proxy = %descriptor,
                status = %response.status(),
                "Proxy returned non-success status, continuing without it"
            );
            None
        }
        Err(_) => {
            tracing::warn!(proxy = %descriptor, "Proxy connection failed, continuing without it");
            None
        }
    }
}

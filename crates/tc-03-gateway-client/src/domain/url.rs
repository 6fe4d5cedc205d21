//! URL joining.

/// Join an endpoint onto the base URL with exactly one `/` between them.
///
/// Every endpoint is treated as a path under the base URL, including ones
/// that look like absolute URLs, so a request never leaves the base
/// endpoint. An empty endpoint yields the base URL itself.
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = endpoint.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{base}/{path}")
}

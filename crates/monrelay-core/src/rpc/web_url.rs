//! Web frontend URL derived from an API endpoint URL

const API_ENDPOINT: &str = "api_jsonrpc.php";

/// Strip a trailing `api_jsonrpc.php` and end with exactly one slash
pub fn web_url(api_url: &str) -> String {
    let base = api_url.strip_suffix(API_ENDPOINT).unwrap_or(api_url);
    format!("{}/", base.trim_end_matches('/'))
}

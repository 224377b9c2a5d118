//! Shared HTTP client utilities
//!
//! All outbound API calls (TMDB, OpenAI, Spotify) go through one
//! lazily-initialized client so connections are pooled and the timeout
//! policy lives in a single place.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// HTTP timeout for upstream API requests in seconds. The model call is
/// the slowest leg; nothing else comes close.
const TIMEOUT_SECS: u64 = 60;

static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("showtune/1.0")
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}

/// Strip markdown code blocks from a JSON response
///
/// Some models wrap their JSON output in markdown fences even when told
/// not to. This removes such wrappers and returns the clean JSON content.
pub fn strip_markdown_json(content: &str) -> &str {
    let trimmed = content.trim();

    // Handle ```json ... ```
    if let Some(stripped) = trimmed
        .strip_prefix("```json")
        .and_then(|s| s.strip_suffix("```"))
    {
        return stripped.trim();
    }

    // Handle ``` ... ```
    if let Some(stripped) = trimmed
        .strip_prefix("```")
        .and_then(|s| s.strip_suffix("```"))
    {
        return stripped.trim();
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown_json_with_json_block() {
        let input = r#"```json
[{"songTitle": "Creep"}]
```"#;
        assert_eq!(strip_markdown_json(input), r#"[{"songTitle": "Creep"}]"#);
    }

    #[test]
    fn test_strip_markdown_json_with_plain_block() {
        let input = r#"```
[{"songTitle": "Creep"}]
```"#;
        assert_eq!(strip_markdown_json(input), r#"[{"songTitle": "Creep"}]"#);
    }

    #[test]
    fn test_strip_markdown_json_no_block() {
        let input = r#"[{"songTitle": "Creep"}]"#;
        assert_eq!(strip_markdown_json(input), input);
    }

    #[test]
    fn test_get_client_returns_same_instance() {
        let client1 = get_client();
        let client2 = get_client();
        assert!(std::ptr::eq(client1, client2));
    }
}

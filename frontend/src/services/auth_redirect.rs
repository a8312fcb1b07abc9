//! One-shot consumption of the redirect-completion marker.
//!
//! The backend sends the browser back to this page with `?status=success`
//! appended after the provider round-trip. The marker must trigger exactly
//! one login attempt, so it is stripped from the URL before the flow runs;
//! a reload, or a login that then fails, cannot replay it.

use wasm_bindgen::JsValue;

const MARKER: &str = "status=success";

/// True iff the page URL carries the marker. Strips it from the address bar
/// via `history.replaceState` before returning, preserving any other query
/// parameters.
pub fn consume_auth_marker() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let location = window.location();
    let Ok(query) = location.search() else {
        return false;
    };

    if !query_has_marker(&query) {
        return false;
    }

    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let new_url = format!("{}{}", path, query_without_marker(&query));
    match window.history() {
        Ok(history) => {
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)) {
                tracing::warn!(?err, "failed to strip auth marker from url");
            }
        }
        Err(err) => tracing::warn!(?err, "history api unavailable"),
    }

    true
}

fn query_has_marker(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == MARKER)
}

fn query_without_marker(query: &str) -> String {
    let rest: Vec<&str> = query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty() && *pair != MARKER)
        .collect();

    if rest.is_empty() {
        String::new()
    } else {
        format!("?{}", rest.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_the_marker_anywhere_in_the_query() {
        assert!(query_has_marker("?status=success"));
        assert!(query_has_marker("?status=success&tab=past"));
        assert!(query_has_marker("?tab=past&status=success"));
        assert!(query_has_marker("?a=1&status=success&b=2"));
    }

    #[test]
    fn ignores_near_misses() {
        assert!(!query_has_marker(""));
        assert!(!query_has_marker("?"));
        assert!(!query_has_marker("?status=failure"));
        assert!(!query_has_marker("?status=successful"));
        assert!(!query_has_marker("?other=status=success"));
    }

    #[test]
    fn stripping_removes_only_the_marker() {
        assert_eq!(query_without_marker("?status=success"), "");
        assert_eq!(query_without_marker("?status=success&tab=past"), "?tab=past");
        assert_eq!(query_without_marker("?tab=past&status=success"), "?tab=past");
        assert_eq!(query_without_marker("?a=1&status=success&b=2"), "?a=1&b=2");
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = query_without_marker("?status=success&tab=past");
        assert_eq!(query_without_marker(&once), once);
    }
}

//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location and the
/// configured backend port (see `shared::config::ApiConfig`).
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    origin(&protocol, &hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(3000, "/api/v1/get-all-booking-orders");
/// ```
pub fn api_url(port: u16, path: &str) -> String {
    join_url(&api_base(port), path)
}

fn origin(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        assert_eq!(origin("https:", "example.com", 3000), "https://example.com:3000");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000", "/api/v1/x"),
            "http://localhost:3000/api/v1/x"
        );
        assert_eq!(join_url("http://localhost:3000", "api/v1/x"), "http://localhost:3000/api/v1/x");
    }
}

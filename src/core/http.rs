//! HTTP utilities for the college basketball data API

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Build the headers every API request carries: JSON accept plus bearer auth.
pub fn auth_header_map(token: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))?;
    auth.set_sensitive(true);
    h.insert(AUTHORIZATION, auth);
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_map_sets_bearer_token() {
        let headers = auth_header_map("secret-token\n").unwrap();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret-token");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_auth_header_map_rejects_control_characters() {
        assert!(auth_header_map("bad\ntoken").is_err());
    }
}

//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod draft_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = DraftError::from(json_error);

        match err {
            DraftError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = DraftError::from(io_error);

        match err {
            DraftError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let err = DraftError::from(header_error);

        match err {
            DraftError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let err = DraftError::from(parse_error);

        match err {
            DraftError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_missing_token_message() {
        let err = DraftError::MissingToken {
            env_var: "CBBD_ACCESS_TOKEN".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("Access token not provided"));
        assert!(msg.contains("CBBD_ACCESS_TOKEN"));
    }

    #[test]
    fn test_duplicate_pick_message() {
        let err = DraftError::DuplicatePick { team_id: 72 };
        assert_eq!(err.to_string(), "Team 72 is drafted more than once");
    }

    #[test]
    fn test_api_error_message() {
        let err = DraftError::Api {
            status: 401,
            endpoint: "/games".to_string(),
        };
        assert_eq!(err.to_string(), "API returned 401 for /games");
    }

    #[test]
    fn test_error_debug_format() {
        let err = DraftError::InvalidZone {
            value: "EST".to_string(),
        };

        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidZone"));
        assert!(debug_str.contains("EST"));
    }
}

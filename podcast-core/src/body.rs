//! Permissive request body parsing
//!
//! A missing body, malformed JSON, or any JSON value other than an object is
//! read as `{}`. Only a field of the wrong type is an error.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Parse a raw request body into `T`, defaulting unusable bodies to an empty object
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let object = match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    Ok(serde_json::from_value(Value::Object(object))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PodcastError;
    use crate::types::{SearchParams, VideoRequest};

    #[test]
    fn test_empty_and_malformed_bodies() {
        let bodies: [&[u8]; 6] = [b"", b"{not json", b"[1, 2]", b"42", b"null", b"   "];
        for body in bodies {
            let params: SearchParams = parse_body(body).unwrap();
            assert_eq!(params, SearchParams::default());
        }
    }

    #[test]
    fn test_valid_body() {
        let params: SearchParams = parse_body(br#"{"limit": 2, "min_score": 7.5}"#).unwrap();
        assert_eq!(params.limit(), 2);
        assert_eq!(params.min_score(), 7.5);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let video: VideoRequest = parse_body(br#"{"type": "standard", "extra": true}"#).unwrap();
        assert_eq!(video.video_type(), "standard");
    }

    #[test]
    fn test_wrong_field_type_is_error() {
        let err = parse_body::<SearchParams>(br#"{"limit": "two"}"#).unwrap_err();
        assert!(matches!(err, PodcastError::InvalidRequest(_)));

        assert!(parse_body::<VideoRequest>(br#"{"type": 7}"#).is_err());
    }
}

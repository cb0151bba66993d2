use serde_json::{Map, Value};

/// Parse a submission body as a JSON object of telemetry fields.
/// A bare `null` carries no fields and parses as an empty object.
pub fn parse_payload(body: &[u8]) -> Result<Map<String, Value>, String> {
    serde_json::from_slice::<Option<Map<String, Value>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| format!("Invalid JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object() {
        let payload = parse_payload(br#"{"foo":"bar","cpu":{"cores":8}}"#).unwrap();
        assert_eq!(payload["foo"], "bar");
        assert_eq!(payload["cpu"]["cores"], 8);
    }

    #[test]
    fn empty_object_is_valid() {
        assert!(parse_payload(b"{}").unwrap().is_empty());
    }

    #[test]
    fn null_is_an_empty_payload() {
        assert!(parse_payload(b"null").unwrap().is_empty());
        assert!(parse_payload(b" null\n").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(parse_payload(b"[1,2,3]").is_err());
        assert!(parse_payload(b"\"text\"").is_err());
        assert!(parse_payload(b"42").is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_payload(b"{\"foo\":").unwrap_err();
        assert!(err.starts_with("Invalid JSON"));
        assert!(parse_payload(b"").is_err());
        assert!(parse_payload(&[0xff, 0xfe]).is_err());
    }
}

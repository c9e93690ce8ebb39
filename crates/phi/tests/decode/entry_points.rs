use std::io::Cursor;

use phi::{Error, ErrorBody, ErrorKind, Introspect};
use serde::Deserialize;

#[derive(Debug, Deserialize, Introspect)]
struct Signup {
    #[phi(required)]
    email: String,
    #[phi(required)]
    #[serde(default)]
    tags: Vec<String>,
    newsletter: bool,
}

#[test]
fn test_valid_body_is_returned() {
    let signup: Signup =
        phi::from_str(r#"{"email": "a@b.c", "tags": ["x"], "newsletter": false}"#).unwrap();
    assert_eq!(signup.email, "a@b.c");
    assert!(!signup.newsletter);
}

#[test]
fn test_malformed_body_is_a_decode_error() {
    let error = phi::from_slice::<Signup>(b"{\"email\": ").unwrap_err();
    assert!(matches!(error, Error::Decode(_)));
    assert_eq!(error.kind(), ErrorKind::Decode);
    assert!(error.as_missing_fields().is_none());
}

#[test]
fn test_type_mismatch_is_a_decode_error() {
    let error = phi::from_str::<Signup>(r#"{"email": 1, "newsletter": true}"#).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Decode);
    assert_eq!(ErrorBody::from(&error), ErrorBody::DECODING);
}

#[test]
fn test_missing_fields_after_decode() {
    let error = phi::from_slice::<Signup>(br#"{"email": "", "newsletter": true}"#).unwrap_err();
    let missing = error.as_missing_fields().unwrap();
    assert_eq!(missing.paths(), ["email", "tags"]);

    let body = ErrorBody::from(error);
    assert_eq!(body.status_code, 400);
    assert_eq!(
        body.to_json().unwrap(),
        r#"{"error":"missingBodyParameters","message":"missing 'email, tags'"}"#
    );
}

#[test]
fn test_from_reader() {
    let reader = Cursor::new(r#"{"email": "a@b.c", "tags": [], "newsletter": true}"#);
    let error = phi::from_reader::<Signup, _>(reader).unwrap_err();
    assert_eq!(error.to_string(), "missing 'tags'");
}

#[test]
fn test_untyped_json() {
    #[derive(Debug, Deserialize, Introspect)]
    struct Event {
        #[phi(required)]
        kind: String,
        #[phi(required)]
        payload: serde_json::Value,
    }

    for (payload, missing) in [
        ("null", true),
        ("{}", true),
        ("[]", true),
        ("0", true),
        ("false", true),
        ("\"\"", true),
        ("{\"a\": null}", false),
        ("[0]", false),
        ("0.5", false),
        ("true", false),
    ] {
        let body = format!(r#"{{"kind": "click", "payload": {payload}}}"#);
        let result = phi::from_str::<Event>(&body);
        assert_eq!(result.is_err(), missing, "payload {payload}");
    }
}

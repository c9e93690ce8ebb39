use std::collections::BTreeMap;

use phi::{Described, Introspect};
use serde::Deserialize;

#[derive(Debug, Deserialize, Introspect)]
struct Meta {
    #[phi(required)]
    id: String,
}

#[derive(Debug, Deserialize, Introspect)]
struct Body {
    #[serde(flatten)]
    meta: Meta,
    #[phi(required)]
    name: String,
}

#[derive(Debug, Deserialize, Introspect)]
struct Open {
    #[phi(required)]
    kind: String,
    #[serde(flatten)]
    rest: BTreeMap<String, Meta>,
}

#[test]
fn test_flattened_field_is_described() {
    let meta = <Body as Described>::FIELDS[0];
    assert_eq!(meta.name(), "meta");
    assert!(meta.is_flattened());
    assert!(!<Body as Described>::FIELDS[1].is_flattened());
}

#[test]
fn test_flattened_record_uses_wire_paths() {
    let error = phi::from_str::<Body>(r#"{"name": "x", "id": ""}"#).unwrap_err();
    assert_eq!(error.to_string(), "missing 'id'");
}

#[test]
fn test_flattened_map_keys_are_fields() {
    let error = phi::from_str::<Open>(r#"{"kind": "", "b": {"id": ""}, "a": {"id": "ok"}}"#)
        .unwrap_err();
    assert_eq!(error.to_string(), "missing 'kind, b.id'");
}

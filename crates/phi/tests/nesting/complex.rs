use std::collections::HashMap;

use phi::Introspect;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, Introspect)]
#[serde(default, rename_all = "camelCase")]
struct Required {
    #[phi(required)]
    classic_string: String,
    classic_int: i64,
}

fn missing(classic_int: i64) -> Required {
    Required {
        classic_string: String::new(),
        classic_int,
    }
}

fn present(classic_int: i64) -> Required {
    Required {
        classic_string: "test".to_string(),
        classic_int,
    }
}

type Ref<T> = Option<Box<T>>;

fn some<T>(value: T) -> Ref<T> {
    Some(Box::new(value))
}

#[derive(Debug, Deserialize, Introspect)]
#[serde(rename_all = "camelCase")]
struct Complex {
    #[phi(required)]
    classic_string: String,
    classic_struct: Required,
    #[phi(required)]
    classic_ptr: Ref<Required>,
    #[phi(required)]
    classic_slice: Vec<Required>,
    #[phi(required)]
    classic_ptr_slice: Vec<Ref<Required>>,
    #[phi(required)]
    classic_ptr_ptr_slice: Vec<Ref<Ref<Required>>>,
    #[phi(required)]
    classic_ptr_slice_ptr: Ref<Vec<Ref<Required>>>,
    #[phi(required)]
    classic_map: HashMap<String, Required>,
    #[phi(required)]
    classic_ptr_map: HashMap<String, Ref<Required>>,
    #[phi(required)]
    classic_ptr_map_ptr: Ref<HashMap<String, Ref<Required>>>,
    #[phi(required)]
    classic_map_slice_ptr: Ref<HashMap<String, Vec<Ref<Required>>>>,
}

const EXPECTED: &str = "missing 'classicString, classicStruct.classicString, \
classicPtr.classicString, classicSlice[0].classicString, \
classicPtrSlice[0].classicString, classicPtrPtrSlice[0].classicString, \
classicPtrSlicePtr[0].classicString, classicMap[test1].classicString, \
classicPtrMap[test1].classicString, classicPtrMapPtr[test1].classicString, \
classicMapSlicePtr[test1][0].classicString, classicMapSlicePtr[test2][1].classicString'";

fn ptr_map() -> HashMap<String, Ref<Required>> {
    HashMap::from([
        ("test1".to_string(), some(missing(1337))),
        ("test2".to_string(), some(present(1338))),
    ])
}

#[test]
fn test_complex_value() {
    let complex = Complex {
        classic_string: String::new(),
        classic_struct: missing(1337),
        classic_ptr: some(missing(1337)),
        classic_slice: vec![missing(1337), present(1338)],
        classic_ptr_slice: vec![some(missing(1337)), some(present(1338))],
        classic_ptr_ptr_slice: vec![some(some(missing(1337))), some(some(present(1338)))],
        classic_ptr_slice_ptr: some(vec![some(missing(1337)), some(present(1338))]),
        classic_map: HashMap::from([
            ("test1".to_string(), missing(1337)),
            ("test2".to_string(), present(1338)),
        ]),
        classic_ptr_map: ptr_map(),
        classic_ptr_map_ptr: some(ptr_map()),
        classic_map_slice_ptr: some(HashMap::from([
            (
                "test1".to_string(),
                vec![some(missing(1337)), some(present(1338))],
            ),
            (
                "test2".to_string(),
                vec![some(present(1337)), some(missing(1338))],
            ),
        ])),
    };
    assert_eq!(phi::check(&complex).unwrap_err().to_string(), EXPECTED);
}

#[test]
fn test_complex_decoded() {
    let pair = r#"[{"classicInt": 1337}, {"classicString": "test", "classicInt": 1338}]"#;
    let map = r#"{"test1": {"classicInt": 1337}, "test2": {"classicString": "test"}}"#;
    let body = format!(
        r#"{{
            "classicString": "",
            "classicStruct": {{"classicInt": 1337}},
            "classicPtr": {{"classicInt": 1337}},
            "classicSlice": {pair},
            "classicPtrSlice": {pair},
            "classicPtrPtrSlice": {pair},
            "classicPtrSlicePtr": {pair},
            "classicMap": {map},
            "classicPtrMap": {map},
            "classicPtrMapPtr": {map},
            "classicMapSlicePtr": {{
                "test1": {pair},
                "test2": [{{"classicString": "test"}}, {{"classicInt": 1}}]
            }}
        }}"#
    );
    let error = phi::from_str::<Complex>(&body).unwrap_err();
    assert_eq!(error.kind(), phi::ErrorKind::MissingFields);
    assert_eq!(error.to_string(), EXPECTED);
}

#[test]
fn test_redundant_reference_at_root() {
    let value = some(some(missing(1337)));
    assert_eq!(
        phi::check(&value).unwrap_err().to_string(),
        "missing 'classicString'"
    );
}

#[test]
fn test_fixed_array_root() {
    let value = [present(1337), missing(1338)];
    assert_eq!(
        phi::check(&value).unwrap_err().to_string(),
        "missing '[1].classicString'"
    );
    assert!(phi::check(&vec![present(1337), present(1338)]).is_ok());
}

#[test]
fn test_deep_reference_chain_in_sequence() {
    #[derive(Introspect)]
    struct Playground {
        #[phi(required)]
        arr: Ref<Vec<Ref<Ref<Ref<Required>>>>>,
    }

    let value = Playground {
        arr: some(vec![some(some(some(missing(1337)))), some(some(some(present(1338))))]),
    };
    assert_eq!(
        phi::check(&value).unwrap_err().paths(),
        ["arr[0].classicString"]
    );
}

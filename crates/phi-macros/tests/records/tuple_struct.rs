use phi::{Described, Introspect, Shape};

#[derive(Introspect)]
struct Pair(#[phi(required)] String, u8);

#[derive(Introspect)]
struct Email(String);

#[derive(Introspect)]
struct Marker;

#[derive(Introspect)]
struct Contact {
    #[phi(required)]
    email: Email,
    #[phi(required)]
    pair: Pair,
}

#[test]
fn test_tuple_fields_are_named_by_position() {
    let fields = <Pair as Described>::FIELDS;
    assert_eq!(fields[0].name(), "0");
    assert_eq!(fields[1].name(), "1");
}

#[test]
fn test_newtype_is_transparent() {
    let email = Email(String::new());
    assert!(matches!(email.shape(), Shape::Scalar { is_default: true }));
    let email = Email("a@b".to_string());
    assert!(matches!(email.shape(), Shape::Scalar { is_default: false }));
}

#[test]
fn test_unit_struct_is_default_scalar() {
    assert!(matches!(Marker.shape(), Shape::Scalar { is_default: true }));
}

#[test]
fn test_nested_tuple_struct_paths() {
    let contact = Contact {
        email: Email("a@b".to_string()),
        pair: Pair(String::new(), 1),
    };
    assert_eq!(phi::check(&contact).unwrap_err().paths(), ["pair.0"]);

    let contact = Contact {
        email: Email(String::new()),
        pair: Pair(String::new(), 0),
    };
    assert_eq!(phi::check(&contact).unwrap_err().paths(), ["email", "pair"]);
}

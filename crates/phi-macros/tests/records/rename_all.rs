use phi::{Described, Introspect};
use serde::Deserialize;

#[derive(Deserialize, Introspect)]
#[serde(rename_all = "camelCase")]
struct FromSerde {
    #[phi(required)]
    first_name: String,
}

#[derive(Deserialize, Introspect)]
#[serde(rename_all = "camelCase")]
#[phi(rename_all = "SCREAMING_SNAKE_CASE")]
struct PhiWins {
    first_name: String,
}

#[derive(Introspect)]
#[phi(rename_all = "kebab-case")]
struct Kebab {
    #[phi(rename = "explicit")]
    first_name: String,
    last_name: String,
}

#[test]
fn test_serde_rename_all() {
    assert_eq!(<FromSerde as Described>::FIELDS[0].name(), "firstName");
}

#[test]
fn test_phi_rename_all_wins() {
    assert_eq!(<PhiWins as Described>::FIELDS[0].name(), "FIRST_NAME");
}

#[test]
fn test_field_rename_wins_over_rename_all() {
    let fields = <Kebab as Described>::FIELDS;
    assert_eq!(fields[0].name(), "explicit");
    assert_eq!(fields[1].name(), "last-name");
}

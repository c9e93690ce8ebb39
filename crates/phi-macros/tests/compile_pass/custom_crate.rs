use phi as validation;

#[derive(validation::Introspect)]
#[phi(crate = crate::validation)]
struct Config {
    #[phi(required)]
    name: String,
}

fn main() {
    let config = Config {
        name: "app".to_string(),
    };
    assert!(phi::check(&config).is_ok());
}

use hushscribe::presentation::Environment;

#[test]
fn given_known_names_when_parsing_then_maps_to_environment() {
    assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
    assert_eq!("TEST".parse::<Environment>().unwrap(), Environment::Test);
    assert_eq!(
        Environment::try_from("prod".to_string()).unwrap(),
        Environment::Prod
    );
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    let err = "qa".parse::<Environment>().unwrap_err();
    assert!(err.contains("qa"));
}

#[test]
fn given_environment_when_displaying_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.to_string(), "prod");
}

//! Engines built from configuration.

use pretty_assertions::assert_eq;
use tagvalid::{Engine, MessageSet, ValidateConfig};

use crate::common::{Account, Node};

#[test]
fn from_config_applies_messages_and_depth() {
    let config = ValidateConfig::new()
        .with_max_depth(1)
        .with_messages("required", MessageSet::from_text("{field} is missing", false));
    let engine = Engine::from_config(&config).unwrap();

    let account = Account {
        password: String::new(),
        ..Account::valid()
    };
    let bag = engine.validate(&account).unwrap();
    assert_eq!(bag.errors_for("required")[0].message, "Password is missing");

    let err = engine.validate(&Node::chain(3)).unwrap_err();
    assert_eq!(err.code(), "VALID:DEPTH");
}

#[test]
fn from_json_config() {
    let config = ValidateConfig::from_json_str(
        r#"{
            "locale": "en",
            "messages": {
                "email": { "negated_message": "{field} must not be an address" }
            }
        }"#,
    )
    .unwrap();
    assert_eq!(config.max_depth, None);

    let engine = Engine::from_config(&config).unwrap();
    assert_eq!(engine.registry().locale(), Some("en"));
    assert!(engine.validate(&Account::valid()).unwrap().is_empty());
}

#[test]
fn unsupported_locale_fails_the_build() {
    let config = ValidateConfig::new().with_locale("fr");
    let err = Engine::from_config(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Locale fr is not implemented (we'd love it if you could help us fix that!)"
    );
}

#[test]
fn environment_lookup_feeds_the_engine() {
    let config = ValidateConfig::from_lookup(|key| match key {
        tagvalid::config::ENV_MAX_DEPTH => Some("0".to_owned()),
        _ => None,
    })
    .unwrap();
    let engine = Engine::from_config(&config).unwrap();

    assert!(engine.validate(&Node::chain(1)).unwrap().is_empty());
    assert!(engine.validate(&Node::chain(2)).is_err());
}

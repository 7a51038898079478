//! Rule-set overrides, both process-wide and per engine.

use pretty_assertions::assert_eq;
use tagvalid::{
    Engine, Registry, RuleSets, add_rule_set, must_add_rule_set, validate_struct,
    validate_with_rule_sets,
};

use crate::common::{Account, Address};

fn weak_password() -> Account {
    Account {
        password: "short".into(),
        ..Account::valid()
    }
}

#[test]
fn rule_set_replaces_compiled_tags() {
    add_rule_set(
        "signup",
        &Account::default(),
        [("password", "between(10,60)")],
    )
    .unwrap();

    let account = weak_password();
    assert!(validate_struct(&account).unwrap().is_empty());

    let bag = validate_with_rule_sets(&account, &["signup"]).unwrap();
    assert_eq!(bag.len(), 1);
    assert_eq!(bag.errors_for("between")[0].message, "Password is out of range");
}

#[test]
fn several_sets_share_one_bag() {
    must_add_rule_set(
        "signup-combined",
        &Account::default(),
        [("password", "between(10,60)")],
    );

    let account = Account {
        email: "not-an-address".into(),
        ..weak_password()
    };
    let bag = validate_with_rule_sets(&account, &["valid", "signup-combined"]).unwrap();
    assert!(bag.has_error_for("email"));
    assert!(bag.has_error_for("between"));
    assert_eq!(bag.len(), 2);
}

#[test]
fn missing_set_is_an_error() {
    let err = validate_with_rule_sets(&Account::valid(), &["never-registered"]).unwrap_err();
    assert_eq!(err.code(), "VALID:RULESET_NOT_FOUND");
    assert_eq!(
        err.to_string(),
        "No custom validation never-registered for Account"
    );
}

#[test]
fn unknown_field_is_rejected() {
    let err = add_rule_set("typo", &Account::default(), [("passwrd", "required")]).unwrap_err();
    assert_eq!(err.to_string(), "Field passwrd in Account not found");
}

#[test]
#[should_panic(expected = "Field nope in Address not found")]
fn must_add_panics_on_unknown_field() {
    must_add_rule_set("typo-panics", &Address::default(), [("nope", "required")]);
}

#[test]
fn nested_records_fall_back_to_compiled_tags() {
    let mut sets = RuleSets::new();
    sets.add("strict", &Account::default(), [("password", "required")])
        .unwrap();
    let engine = Engine::new(Registry::builtin()).with_rule_sets(sets);

    let account = Account {
        address: Some(Address {
            street: String::new(),
            zip: "x".into(),
        }),
        ..Account::valid()
    };
    let mut bag = tagvalid::ErrorBag::new();
    engine
        .validate_into(&account, &mut bag, Some("strict"))
        .unwrap();
    assert_eq!(bag.errors_for("required")[0].field, "Street");
    assert!(bag.has_error_for("numeric"));
}

#[test]
fn nested_records_use_their_own_entry() {
    let mut sets = RuleSets::new();
    sets.add("strict", &Account::default(), [("password", "required")])
        .unwrap()
        .add("strict", &Address::default(), [("zip", "required")])
        .unwrap();
    let engine = Engine::new(Registry::builtin()).with_rule_sets(sets);

    let account = Account {
        address: Some(Address {
            street: String::new(),
            zip: String::new(),
        }),
        ..Account::valid()
    };
    let bag = engine.validate_with_rule_sets(&account, &["strict"]).unwrap();
    assert_eq!(bag.errors_for("required").len(), 1);
    assert_eq!(bag.errors_for("required")[0].field, "Zip");
}

#[test]
fn fields_without_an_entry_have_no_directives() {
    let mut sets = RuleSets::new();
    sets.add("relaxed", &Account::default(), [("age", "int")])
        .unwrap();
    let engine = Engine::new(Registry::builtin()).with_rule_sets(sets);

    let account = Account {
        email: String::new(),
        password: String::new(),
        ..Account::valid()
    };
    assert!(
        engine
            .validate_with_rule_sets(&account, &["relaxed"])
            .unwrap()
            .is_empty()
    );
}

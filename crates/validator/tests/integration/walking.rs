//! Walker behavior over derived records.

use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;
use rstest::rstest;
use tagvalid::{Engine, Error, Kind, Registry, Validatable, validate_struct};

use crate::common::{Account, Address, Node};

fn messages(bag: &tagvalid::ErrorBag, key: &str) -> Vec<String> {
    bag.errors_for(key)
        .iter()
        .map(|e| e.message.clone())
        .collect()
}

// ============================================================================
// SCALARS
// ============================================================================

#[test]
fn valid_account_has_no_errors() {
    let bag = validate_struct(&Account::valid()).unwrap();
    assert!(bag.is_empty(), "unexpected errors: {bag}");
}

#[test]
fn required_on_empty_string() {
    let account = Account {
        password: String::new(),
        ..Account::valid()
    };
    let bag = validate_struct(&account).unwrap();
    assert_eq!(messages(&bag, "required"), ["Password must not be empty"]);
    assert_eq!(bag.errors_for("required")[0].field, "Password");
}

#[test]
fn blank_string_is_not_present() {
    let account = Account {
        password: "   ".into(),
        ..Account::valid()
    };
    let bag = validate_struct(&account).unwrap();
    assert!(bag.has_error_for("required"));
}

#[rstest]
#[case::below(3, true)]
#[case::inside(7, false)]
#[case::lower_bound(5, false)]
#[case::upper_bound(10, false)]
#[case::above(11, true)]
#[case::zero_is_exempt(0, false)]
fn between_range(#[case] age: i32, #[case] fails: bool) {
    let account = Account {
        age,
        ..Account::valid()
    };
    let bag = validate_struct(&account).unwrap();
    assert_eq!(bag.has_error_for("between"), fails);
    if fails {
        assert_eq!(messages(&bag, "between"), ["Age is out of range"]);
    }
}

#[derive(Validatable)]
pub struct Code {
    #[valid("!alpha")]
    pub code: String,
}

#[test]
fn negation_flips_the_result() {
    let bag = validate_struct(&Code {
        code: "abc123".into(),
    })
    .unwrap();
    assert!(bag.is_empty());

    let bag = validate_struct(&Code { code: "abc".into() }).unwrap();
    assert_eq!(messages(&bag, "alpha"), ["Code must not contain letters"]);
}

#[derive(Validatable)]
pub struct Contact {
    #[valid("email->{field} must be valid")]
    pub email: String,
    #[valid("name=Backup Address|email->{field} ({value}) must be valid")]
    pub backup: String,
}

#[test]
fn tag_message_fills_placeholders() {
    let bag = validate_struct(&Contact {
        email: "nope".into(),
        backup: "also-nope".into(),
    })
    .unwrap();
    assert_eq!(
        messages(&bag, "email"),
        [
            "Email must be valid",
            "Backup Address (also-nope) must be valid"
        ]
    );
}

#[derive(Validatable)]
pub struct Callback {
    #[valid(tag = "required", key = "contact")]
    pub phone: String,
    #[valid(tag = "required", key = "contact")]
    pub email: String,
}

#[test]
fn error_key_override_groups_fields() {
    let bag = validate_struct(&Callback {
        phone: String::new(),
        email: String::new(),
    })
    .unwrap();
    assert!(!bag.has_error_for("required"));
    assert_eq!(bag.errors_for("contact").len(), 2);

    let by_field = bag.by_field();
    assert_eq!(by_field.keys().copied().collect::<Vec<_>>(), ["Phone", "Email"]);
}

// ============================================================================
// POINTERS AND NESTING
// ============================================================================

#[test]
fn nil_nested_record_is_skipped() {
    let account = Account {
        address: None,
        ..Account::valid()
    };
    assert!(validate_struct(&account).unwrap().is_empty());
}

#[test]
fn nil_root_is_accepted() {
    let missing: Option<Account> = None;
    assert!(validate_struct(&missing).unwrap().is_empty());

    let boxed: Option<Box<Account>> = Some(Box::new(Account {
        password: String::new(),
        ..Account::valid()
    }));
    assert_eq!(validate_struct(&boxed).unwrap().len(), 1);
}

#[test]
fn nested_record_uses_its_own_tags() {
    let account = Account {
        address: Some(Address {
            street: String::new(),
            zip: "12a".into(),
        }),
        ..Account::valid()
    };
    let bag = validate_struct(&account).unwrap();
    assert_eq!(bag.errors_for("required")[0].field, "Street");
    assert_eq!(messages(&bag, "numeric"), ["Postal Code must only contain numbers"]);
}

#[test]
fn sequence_elements_share_the_field_directives() {
    let account = Account {
        tags: vec!["ok".into(), "2bad".into()],
        ..Account::valid()
    };
    let bag = validate_struct(&account).unwrap();
    assert_eq!(messages(&bag, "alpha"), ["Tags must only contain letters"]);
}

#[derive(Validatable)]
pub struct Shipment {
    #[valid("required")]
    pub stops: Vec<Address>,
    pub labels: BTreeMap<String, Address>,
}

#[test]
fn records_inside_containers_are_walked() {
    let shipment = Shipment {
        stops: vec![Address::valid(), Address::default()],
        labels: BTreeMap::from([("home".to_owned(), Address {
            zip: "x".into(),
            ..Address::valid()
        })]),
    };
    let bag = validate_struct(&shipment).unwrap();
    assert_eq!(bag.errors_for("required").len(), 1);
    assert_eq!(bag.errors_for("numeric").len(), 1);
}

#[test]
fn required_on_empty_sequence() {
    let shipment = Shipment {
        stops: Vec::new(),
        labels: BTreeMap::new(),
    };
    let bag = validate_struct(&shipment).unwrap();
    assert_eq!(messages(&bag, "required"), ["Stops must not be empty"]);
}

#[derive(Validatable)]
pub struct Glossary {
    #[valid("required|alpha")]
    pub terms: BTreeMap<String, String>,
}

#[test]
fn scalar_map_values_only_see_container_rules() {
    let glossary = Glossary {
        terms: BTreeMap::from([("k".to_owned(), "123".to_owned())]),
    };
    assert!(validate_struct(&glossary).unwrap().is_empty());

    let bag = validate_struct(&Glossary {
        terms: BTreeMap::new(),
    })
    .unwrap();
    assert_eq!(messages(&bag, "required"), ["Terms must not be empty"]);
    assert!(!bag.has_error_for("alpha"));
}

#[derive(Validatable)]
pub enum Reachable {
    Unset,
    Email(String),
    Postal(Address),
}

#[derive(Validatable)]
pub struct Profile {
    #[valid("email")]
    pub primary: Reachable,
}

#[test]
fn sum_types_validate_the_held_value() {
    let bag = validate_struct(&Profile {
        primary: Reachable::Unset,
    })
    .unwrap();
    assert!(bag.is_empty());

    let bag = validate_struct(&Profile {
        primary: Reachable::Email("bad".into()),
    })
    .unwrap();
    assert_eq!(messages(&bag, "email"), ["Primary must be a valid address"]);

    let bag = validate_struct(&Profile {
        primary: Reachable::Postal(Address::default()),
    })
    .unwrap();
    assert!(!bag.has_error_for("email"));
    assert!(bag.has_error_for("required"));
}

#[derive(Validatable)]
pub struct Hidden {
    #[valid("required")]
    pub shown: String,
    #[valid(skip)]
    pub skipped: String,
    secret: String,
}

#[test]
fn private_and_skipped_fields_are_not_visited() {
    let hidden = Hidden {
        shown: "x".into(),
        skipped: String::new(),
        secret: String::new(),
    };
    assert!(hidden.secret.is_empty());
    assert!(validate_struct(&hidden).unwrap().is_empty());
}

// ============================================================================
// IDEMPOTENCE
// ============================================================================

#[test]
fn same_value_gives_equal_bags() {
    let account = Account {
        email: "broken".into(),
        age: 42,
        tags: vec!["1".into(), "2".into()],
        address: Some(Address::default()),
        ..Account::valid()
    };
    let first = validate_struct(&account).unwrap();
    let second = validate_struct(&account).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

// ============================================================================
// INTERNAL ERRORS
// ============================================================================

#[test]
fn root_must_be_a_record() {
    let err = validate_struct(&5_i32).unwrap_err();
    assert_eq!(err.code(), "VALID:NOT_A_RECORD");
    assert!(matches!(err, Error::NotARecord { kind: Kind::Int }));
}

#[derive(Validatable)]
pub struct Unclosed {
    #[valid("between(1,2")]
    pub x: i32,
}

#[derive(Validatable)]
pub struct UnknownSetting {
    #[valid("label=Foo|required")]
    pub x: String,
}

#[derive(Validatable)]
pub struct EmptyMessage {
    #[valid("email->")]
    pub x: String,
}

#[test]
fn grammar_errors_name_the_field() {
    let err = validate_struct(&Unclosed { x: 1 }).unwrap_err();
    assert!(err.is_grammar());
    assert_eq!(
        err.to_string(),
        "invalid validation tag on field x: the parameter close token for between is incorrect or missing"
    );

    let err = validate_struct(&UnknownSetting { x: "a".into() }).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid validation tag on field x: label is not a valid validation option"
    );

    let err = validate_struct(&EmptyMessage { x: "a".into() }).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid validation tag on field x: custom message indicated but not given for email"
    );
}

#[derive(Validatable)]
pub struct UnknownKey {
    #[valid("required|frobnicate")]
    pub thing: String,
}

#[test]
fn unknown_key_names_field_and_key() {
    let err = validate_struct(&UnknownKey { thing: "x".into() }).unwrap_err();
    assert_eq!(err.code(), "VALID:UNKNOWN_KEY");
    assert_eq!(err.to_string(), "Invalid validation key for field Thing: frobnicate");
}

#[derive(Validatable)]
pub struct Scores {
    pub by_id: HashMap<i32, String>,
}

#[test]
fn non_string_map_keys_are_rejected() {
    let scores = Scores {
        by_id: HashMap::from([(1, "a".to_owned())]),
    };
    let err = validate_struct(&scores).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedMapKey { ref field, kind: Kind::Int } if field == "by_id"
    ));
}

#[derive(Validatable)]
pub struct Counter {
    #[valid("email")]
    pub count: i32,
}

#[test]
fn string_rule_on_a_number_is_an_error() {
    let err = validate_struct(&Counter { count: 3 }).unwrap_err();
    assert_eq!(err.code(), "VALID:RULE_TYPE");
}

#[derive(Validatable)]
pub struct Opaque {
    pub marker: (),
}

#[test]
fn unsupported_field_types_are_errors() {
    let err = validate_struct(&Opaque { marker: () }).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { type_name: "()", .. }));
}

#[test]
fn failures_before_an_abort_stay_in_the_bag() {
    #[derive(Validatable)]
    pub struct Partial {
        #[valid("required")]
        pub first: String,
        #[valid("nope")]
        pub second: String,
    }

    let engine = Engine::new(Registry::builtin());
    let mut bag = tagvalid::ErrorBag::new();
    let err = engine
        .validate_into(
            &Partial {
                first: String::new(),
                second: String::new(),
            },
            &mut bag,
            None,
        )
        .unwrap_err();
    assert_eq!(err.code(), "VALID:UNKNOWN_KEY");
    assert_eq!(bag.len(), 1);
}

// ============================================================================
// DEPTH
// ============================================================================

#[test]
fn depth_guard_stops_deep_chains() {
    let chain = Node::chain(3);
    let engine = Engine::new(Registry::builtin());
    assert!(engine.validate(&chain).unwrap().is_empty());

    let err = engine.clone().with_max_depth(1).validate(&chain).unwrap_err();
    assert_eq!(err.code(), "VALID:DEPTH");
    assert_eq!(
        err.to_string(),
        "validation depth limit of 1 exceeded in Node"
    );

    assert!(engine.with_max_depth(2).validate(&chain).unwrap().is_empty());
}

//! What `#[derive(Validatable)]` generates, and how a bag renders.

use std::any::TypeId;

use pretty_assertions::assert_eq;
use tagvalid::{Kind, Record, Shape, Validatable, validate_struct};

use crate::common::{Account, Address};

#[test]
fn derive_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/record_pass.rs");
    t.pass("tests/ui/enum_pass.rs");
}

#[test]
fn record_metadata() {
    let account = Account::valid();
    assert_eq!(account.record_type_name(), "Account");
    assert_eq!(account.record_type_id(), TypeId::of::<Account>());
    assert_eq!(
        account.field_names(),
        ["email", "password", "age", "address", "tags"]
    );

    let fields = account.fields();
    assert_eq!(fields[0].tag, Some("required|email"));
    assert_eq!(fields[3].tag, None);
    assert_eq!(fields[3].value.shape().kind(), Kind::Pointer);
}

#[derive(Validatable)]
pub struct Wire {
    #[valid(tag = "required", key = "transport")]
    pub r#type: String,
    #[valid(skip)]
    pub cache: Vec<u8>,
    pub retries: u8,
    internal: u32,
}

#[test]
fn field_attributes() {
    let wire = Wire {
        r#type: String::new(),
        cache: Vec::new(),
        retries: 3,
        internal: 0,
    };
    assert_eq!(wire.internal, 0);
    assert_eq!(wire.field_names(), ["type", "cache", "retries", "internal"]);

    let names: Vec<&str> = wire.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["type", "retries"]);
    assert_eq!(wire.fields()[0].error_key, Some("transport"));

    let bag = validate_struct(&wire).unwrap();
    assert_eq!(bag.errors_for("transport")[0].message, "Type must not be empty");
}

#[derive(Validatable)]
pub struct Envelope<T> {
    #[valid("required")]
    pub payload: T,
}

#[test]
fn generic_records() {
    let bag = validate_struct(&Envelope {
        payload: String::new(),
    })
    .unwrap();
    assert_eq!(bag.len(), 1);

    let bag = validate_struct(&Envelope {
        payload: Address::default(),
    })
    .unwrap();
    assert_eq!(bag.errors_for("required")[0].field, "Street");

    assert_ne!(
        Envelope { payload: 1_u8 }.record_type_id(),
        Envelope { payload: 1_u16 }.record_type_id()
    );
}

#[test]
fn records_report_record_shape() {
    let address = Address::valid();
    assert!(matches!(address.shape(), Shape::Record(_)));
    assert_eq!(address.shape().to_string(), "{1 Main St 90210}");
}

#[test]
fn bag_renders_as_json() {
    let account = Account {
        password: String::new(),
        ..Account::valid()
    };
    let bag = validate_struct(&account).unwrap();
    insta::assert_json_snapshot!(bag, @r#"
    {
      "required": [
        {
          "name": "required",
          "field": "Password",
          "message": "Password must not be empty"
        }
      ]
    }
    "#);
}

#[test]
fn bag_display_prefixes_fields() {
    let account = Account {
        password: String::new(),
        age: 99,
        ..Account::valid()
    };
    let bag = validate_struct(&account).unwrap();
    assert_eq!(
        bag.to_string(),
        "[Password] required: Password must not be empty; [Age] between: Age is out of range"
    );
}

#[test]
fn validation_emits_tracing_events() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let account = Account {
        email: "nope".into(),
        ..Account::valid()
    };
    assert_eq!(validate_struct(&account).unwrap().len(), 1);
}

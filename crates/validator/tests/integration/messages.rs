//! Message resolution, custom validators and locales.

use pretty_assertions::assert_eq;
use tagvalid::registry::{self, Descriptor, Rule};
use tagvalid::{Engine, ErrorBag, MessageSet, Registry, Shape, Slot, Validatable, validate_struct};

#[derive(Validatable)]
pub struct Signup {
    #[valid("email")]
    pub email: String,
    #[valid("!numeric")]
    pub nickname: String,
}

impl Signup {
    fn invalid() -> Self {
        Self {
            email: "nope".into(),
            nickname: "1234".into(),
        }
    }
}

fn first_message(bag: &ErrorBag, key: &str) -> String {
    bag.errors_for(key)[0].message.clone()
}

#[test]
fn default_messages_come_from_the_locale() {
    let bag = Engine::new(Registry::builtin())
        .validate(&Signup::invalid())
        .unwrap();
    assert_eq!(first_message(&bag, "email"), "Email must be a valid address");
    assert_eq!(first_message(&bag, "numeric"), "Nickname must not contain numbers");
}

#[test]
fn custom_messages_override_and_clear() {
    let mut builder = Registry::builder();
    builder
        .set_custom_message("email", "{field} is not deliverable")
        .unwrap()
        .set_custom_negated_message("numeric", "%s cannot be all digits")
        .unwrap();
    let registry = builder.build().unwrap();

    let bag = Engine::new(registry.clone())
        .validate(&Signup::invalid())
        .unwrap();
    assert_eq!(first_message(&bag, "email"), "Email is not deliverable");
    assert_eq!(first_message(&bag, "numeric"), "Nickname cannot be all digits");

    let mut builder = registry.to_builder();
    builder.clear_custom_messages("email").unwrap();
    let bag = Engine::new(builder.build().unwrap())
        .validate(&Signup::invalid())
        .unwrap();
    assert_eq!(first_message(&bag, "email"), "Email must be a valid address");
}

#[derive(Validatable)]
pub struct Tagged {
    #[valid("email->{field} is wrong here")]
    pub email: String,
}

#[test]
fn tag_message_beats_custom_message() {
    let mut builder = Registry::builder();
    builder
        .set_custom_message("email", "{field} is not deliverable")
        .unwrap();
    let bag = Engine::new(builder.build().unwrap())
        .validate(&Tagged {
            email: "nope".into(),
        })
        .unwrap();
    assert_eq!(first_message(&bag, "email"), "Email is wrong here");
}

#[test]
fn custom_messages_need_a_registered_key() {
    let mut builder = Registry::builder();
    let err = builder.set_custom_message("nope", "x").unwrap_err();
    assert_eq!(err.code(), "VALID:UNKNOWN_MESSAGE_TARGET");
    assert_eq!(err.to_string(), "validator with key nope doesn't exist");
}

#[test]
fn unknown_locale_leaves_messages_untouched() {
    let mut builder = Registry::builder();
    let err = builder.load_locale("xx").unwrap_err();
    assert_eq!(err.code(), "VALID:LOCALE");

    let registry = builder.build().unwrap();
    assert_eq!(registry.locale(), Some("en"));
    let bag = Engine::new(registry).validate(&Signup::invalid()).unwrap();
    assert_eq!(first_message(&bag, "email"), "Email must be a valid address");
}

#[test]
fn message_table_overrides_defaults() {
    let mut builder = Registry::builder();
    builder
        .load_message_table([("email.messagefmt", "%s: bad address")])
        .unwrap();
    let bag = Engine::new(builder.build().unwrap())
        .validate(&Signup::invalid())
        .unwrap();
    assert_eq!(first_message(&bag, "email"), "Email: bad address");

    let mut builder = Registry::builder();
    let err = builder
        .load_message_table([("email.subject", "x")])
        .unwrap_err();
    assert_eq!(err.code(), "VALID:MESSAGE_SLOT");
}

// ============================================================================
// CUSTOM VALIDATORS
// ============================================================================

#[derive(Validatable)]
pub struct Batch {
    #[valid("even")]
    pub size: i64,
}

fn even() -> Descriptor {
    Descriptor::new(
        "even",
        Rule::generic(|value, _| matches!(value, Shape::Int(i) if i % 2 == 0)),
    )
    .with_default_message("%s must be even")
}

#[test]
fn registered_validators_run_from_tags() {
    let mut builder = Registry::builder();
    builder.register(even()).unwrap();
    let engine = Engine::new(builder.build().unwrap());

    assert!(engine.validate(&Batch { size: 4 }).unwrap().is_empty());
    let bag = engine.validate(&Batch { size: 3 }).unwrap();
    assert_eq!(first_message(&bag, "even"), "Size must be even");
}

#[test]
fn registering_twice_is_an_error() {
    let mut builder = Registry::builder();
    builder.register(even()).unwrap();
    let err = builder.register(even()).unwrap_err();
    assert_eq!(err.code(), "VALID:DUPLICATE_KEY");

    builder.replace(
        Descriptor::new("even", Rule::generic(|_, _| true)).with_default_message("%s"),
    );
    let engine = Engine::new(builder.build().unwrap());
    assert!(engine.validate(&Batch { size: 3 }).unwrap().is_empty());
}

#[test]
fn validators_need_a_default_message() {
    let mut builder = Registry::builder();
    builder
        .register(Descriptor::new("silent", Rule::string(|_, _| true)))
        .unwrap();
    let err = builder.build().unwrap_err();
    assert_eq!(err.code(), "VALID:MISSING_MESSAGE");
}

#[test]
fn complex_rules_see_containers() {
    #[derive(Validatable)]
    pub struct Basket {
        #[valid("pair")]
        pub items: Vec<String>,
    }

    let mut builder = Registry::builder();
    builder
        .register(
            Descriptor::new(
                "pair",
                Rule::complex(|value, _| match value {
                    Shape::Sequence(seq) => seq.len() == 2,
                    _ => true,
                }),
            )
            .with_default_messages(MessageSet::new().with(Slot::MessageFmt, "%s needs two items")),
        )
        .unwrap();
    let engine = Engine::new(builder.build().unwrap());

    let bag = engine
        .validate(&Basket {
            items: vec!["a".into()],
        })
        .unwrap();
    assert_eq!(first_message(&bag, "pair"), "Items needs two items");
}

// ============================================================================
// PROCESS-WIDE REGISTRY
// ============================================================================

#[derive(Validatable)]
pub struct Applicant {
    #[valid("ssn")]
    pub ssn: String,
}

#[test]
fn global_custom_message_round_trip() {
    let applicant = Applicant {
        ssn: "123".into(),
    };

    registry::set_custom_message("ssn", "{field} {value} is not on file").unwrap();
    let bag = validate_struct(&applicant).unwrap();
    assert_eq!(first_message(&bag, "ssn"), "Ssn 123 is not on file");

    registry::clear_custom_messages("ssn").unwrap();
    let bag = validate_struct(&applicant).unwrap();
    assert_eq!(first_message(&bag, "ssn"), "Ssn must be a valid SSN");

    let err = registry::load_locale("tlh").unwrap_err();
    assert_eq!(err.code(), "VALID:LOCALE");
}

#[test]
fn nested_global_writes_fail_instead_of_blocking() {
    let err = registry::configure(|_| registry::set_custom_message("email", "{field} nested"))
        .unwrap_err();
    assert_eq!(err.code(), "VALID:CONFIG");
    assert_eq!(
        err.to_string(),
        "configuration error: registry is already being configured"
    );

    let bag = validate_struct(&Signup::invalid()).unwrap();
    assert_eq!(first_message(&bag, "email"), "Email must be a valid address");

    registry::configure(|b| b.load_locale("en").map(|_| ())).unwrap();
}

#[derive(Validatable)]
pub struct Padded {
    #[valid("email->{value:%99999999999999999999s}")]
    pub email: String,
}

#[test]
fn oversized_placeholder_width_is_clamped() {
    let bag = validate_struct(&Padded {
        email: "bad".into(),
    })
    .unwrap();
    let message = first_message(&bag, "email");
    assert_eq!(message.len(), usize::from(u16::MAX));
    assert_eq!(message.trim_start(), "bad");
}

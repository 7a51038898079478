//! Property tests over the walker.

use proptest::prelude::*;
use tagvalid::{Engine, Registry, Validatable};

use crate::common::Account;

#[derive(Validatable)]
pub struct Letters {
    #[valid("alpha")]
    pub words: Vec<String>,
}

fn engine() -> Engine {
    Engine::new(Registry::builtin())
}

proptest! {
    #[test]
    fn between_matches_the_inclusive_range(age in -50_i32..50) {
        let account = Account { age, ..Account::valid() };
        let bag = engine().validate(&account).unwrap();
        let expected = age != 0 && !(5..=10).contains(&age);
        prop_assert_eq!(bag.has_error_for("between"), expected);
    }

    #[test]
    fn one_error_per_bad_element(words in prop::collection::vec("[a-z]{1,8}|[0-9]{1,4}", 0..12)) {
        let bad = words.iter().filter(|w| w.starts_with(|c: char| c.is_ascii_digit())).count();
        let bag = engine().validate(&Letters { words }).unwrap();
        prop_assert_eq!(bag.errors_for("alpha").len(), bad);
    }

    #[test]
    fn validation_is_idempotent(email in ".{0,24}", password in ".{0,12}", age in any::<i32>()) {
        let account = Account { email, password, age, ..Account::valid() };
        let engine = engine();
        let first = engine.validate(&account).unwrap();
        let second = engine.validate(&account).unwrap();
        prop_assert_eq!(first, second);
    }
}

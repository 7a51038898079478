//! Shared fixtures.

use tagvalid::Validatable;

#[derive(Debug, Clone, Default, Validatable)]
pub struct Address {
    #[valid("required")]
    pub street: String,
    #[valid("name=Postal Code|numeric")]
    pub zip: String,
}

impl Address {
    pub fn valid() -> Self {
        Self {
            street: "1 Main St".into(),
            zip: "90210".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Validatable)]
pub struct Account {
    #[valid("required|email")]
    pub email: String,
    #[valid("required")]
    pub password: String,
    #[valid("between(5,10)")]
    pub age: i32,
    pub address: Option<Address>,
    #[valid("alpha")]
    pub tags: Vec<String>,
}

impl Account {
    pub fn valid() -> Self {
        Self {
            email: "jane@example.com".into(),
            password: "hunter2".into(),
            age: 7,
            address: Some(Address::valid()),
            tags: vec!["admin".into()],
        }
    }
}

/// Singly linked chain for depth tests.
#[derive(Debug, Clone, Default, Validatable)]
pub struct Node {
    #[valid("required")]
    pub label: String,
    pub next: Option<Box<Node>>,
}

impl Node {
    pub fn chain(len: usize) -> Self {
        let mut node = Self {
            label: "tail".into(),
            next: None,
        };
        for i in 1..len {
            node = Self {
                label: format!("n{i}"),
                next: Some(Box::new(node)),
            };
        }
        node
    }
}

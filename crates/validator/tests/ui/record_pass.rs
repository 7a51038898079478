use std::collections::HashMap;

use tagvalid::Validatable;

#[derive(Validatable)]
pub struct Address {
    #[valid("required")]
    pub street: String,
}

#[derive(Validatable)]
pub struct Customer<T> {
    #[valid("name=E-mail|required|email")]
    pub email: String,
    #[valid(tag = "between(1,5)", key = "rating")]
    pub stars: u8,
    #[valid(skip)]
    pub raw: Vec<u8>,
    pub addresses: Vec<Address>,
    pub extra: HashMap<String, Address>,
    pub payload: Option<Box<T>>,
    note: String,
}

fn main() {
    let customer = Customer::<Address> {
        email: "a@b.co".into(),
        stars: 3,
        raw: Vec::new(),
        addresses: Vec::new(),
        extra: HashMap::new(),
        payload: None,
        note: String::new(),
    };
    let _ = customer.note;
    let bag = tagvalid::validate_struct(&customer).unwrap();
    assert!(bag.is_empty());
}

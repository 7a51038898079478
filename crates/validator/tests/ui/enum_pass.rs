use tagvalid::Validatable;

#[derive(Validatable)]
pub struct Card {
    #[valid("creditcard")]
    pub number: String,
}

#[derive(Validatable)]
pub enum Payment {
    Cash,
    Card(Card),
    Voucher(String),
}

#[derive(Validatable)]
pub enum Never {}

#[derive(Validatable)]
pub struct Order {
    #[valid("required")]
    pub payment: Payment,
}

fn main() {
    let order = Order {
        payment: Payment::Voucher("SUMMER".into()),
    };
    assert!(tagvalid::validate_struct(&order).unwrap().is_empty());

    let order = Order {
        payment: Payment::Cash,
    };
    assert_eq!(tagvalid::validate_struct(&order).unwrap().len(), 1);
}

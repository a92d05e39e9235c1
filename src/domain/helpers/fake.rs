use fake::{Dummy, rand::seq::IteratorRandom};
use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{catalog::Product, ids::ProductId};

pub struct Price;

impl Dummy<Price> for Decimal {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &Price, rng: &mut R) -> Self {
        let value = (10..1000).choose(rng).unwrap();
        Decimal::new(value, 2)
    }
}

/// A catalog product for tests, with a fresh id and stamped just now.
pub fn example_product(name: &str, unit_price: Decimal) -> Product {
    Product {
        id: ProductId::new(),
        name: name.to_owned(),
        description: format!("{name} from the test kitchen"),
        unit_price,
        stock: 25,
        created_at: Timestamp::now(),
        updated_at: None,
    }
}

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;

use business::domain::produto::model::Produto;

/// Row shape of the `produtos` table. Prices are stored as NUMERIC(10,2)
/// and travel as [`BigDecimal`]; the domain works with `f64`.
#[derive(Debug, FromRow)]
pub struct ProdutoEntity {
    pub id: i32,
    pub external_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub category: String,
    pub picture_url: Option<String>,
}

impl ProdutoEntity {
    pub fn into_domain(self) -> Produto {
        Produto {
            id: self.id,
            external_id: self.external_id,
            name: self.name,
            description: self.description,
            price: self.price.to_f64().unwrap_or(0.0),
            category: self.category,
            picture_url: self.picture_url,
        }
    }
}

/// Converts a domain price into the column representation.
pub fn price_to_decimal(price: f64) -> BigDecimal {
    BigDecimal::from_f64(price).unwrap_or_default()
}

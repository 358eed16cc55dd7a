use serde::Serialize;

use super::errors::ProdutoError;

/// A catalog item managed by this service.
///
/// The `id` is assigned by the database on insert and never changes
/// afterwards. `external_id` correlates the row with an external source and
/// is unique when present.
#[derive(Debug, Clone, Serialize)]
pub struct Produto {
    pub id: i32,
    pub external_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub picture_url: Option<String>,
}

pub struct NewProdutoProps {
    pub external_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub picture_url: Option<String>,
}

/// A validated produto that has not been persisted yet (no id).
#[derive(Debug, Clone)]
pub struct NewProduto {
    pub external_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub picture_url: Option<String>,
}

impl NewProduto {
    pub fn new(props: NewProdutoProps) -> Result<Self, ProdutoError> {
        if props.name.trim().is_empty() {
            return Err(ProdutoError::NameEmpty);
        }

        if props.price < 0.0 {
            return Err(ProdutoError::PriceNegative);
        }

        Ok(Self {
            external_id: props.external_id,
            name: props.name,
            description: props.description,
            price: props.price,
            category: props.category,
            picture_url: props.picture_url,
        })
    }
}

/// A partial update. Fields left as `None` keep their stored value; there is
/// no way to null out a field through this type.
#[derive(Debug, Clone, Default)]
pub struct ProdutoChanges {
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub picture_url: Option<String>,
}

impl ProdutoChanges {
    /// Validates the fields that were provided.
    pub fn validate(&self) -> Result<(), ProdutoError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(ProdutoError::NameEmpty);
        }

        if let Some(price) = self.price
            && price < 0.0
        {
            return Err(ProdutoError::PriceNegative);
        }

        Ok(())
    }
}

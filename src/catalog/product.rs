use serde::{Deserialize, Serialize};

use super::{number, Validate, ValidationError};
use crate::patch::Assignments;
use crate::record::{Column, ColumnKind, NewRecord, Record};
use crate::Patch;

/// A catalogue product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub base_price: f64,
    pub created_at: String,
    pub category_id: i64,
}

impl Record for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "id", ColumnKind::Id),
        Column::new("name", "name", ColumnKind::Text),
        Column::new("base_price", "basePrice", ColumnKind::Real),
        Column::new("created_at", "createdAt", ColumnKind::CreatedAt),
        Column::new("category_id", "categoryId", ColumnKind::Integer),
    ];

    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /products`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(deserialize_with = "number::whole")]
    pub category_id: i64,
    pub base_price: f64,
}

impl NewRecord for NewProduct {
    type Record = Product;

    fn assignments(&self) -> Assignments {
        Assignments::new()
            .with("name", "name", self.name.as_str().into())
            .with("category_id", "categoryId", self.category_id.into())
            .with("base_price", "basePrice", self.base_price.into())
    }
}

impl Validate for NewProduct {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::new("name must be a non-empty string"));
        }
        Ok(())
    }
}

/// Body of `PATCH /products/:id`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Patch)]
#[serde(rename_all = "camelCase")]
#[patch(record = Product)]
pub struct ProductPatch {
    #[patch(text, reject_null)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "number::optional_whole")]
    pub category_id: Option<i64>,
    pub base_price: Option<f64>,
}

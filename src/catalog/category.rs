use serde::{Deserialize, Serialize};

use super::{Validate, ValidationError};
use crate::patch::Assignments;
use crate::record::{Column, ColumnKind, NewRecord, Record};
use crate::Patch;

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Record for ProductCategory {
    const TABLE: &'static str = "product_categories";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "id", ColumnKind::Id),
        Column::new("name", "name", ColumnKind::Text),
        Column::new("description", "description", ColumnKind::Text).nullable(),
    ];

    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /product-categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProductCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewRecord for NewProductCategory {
    type Record = ProductCategory;

    fn assignments(&self) -> Assignments {
        Assignments::new()
            .with("name", "name", self.name.as_str().into())
            .with("description", "description", self.description.clone().into())
    }
}

impl Validate for NewProductCategory {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::new("name must be a non-empty string"));
        }
        Ok(())
    }
}

/// Body of `PATCH /product-categories/:id`.
///
/// `description` follows the same truthy-string rule as `name`: an empty
/// string or `null` leaves the stored description untouched.
#[derive(Debug, Clone, Default, Deserialize, Patch)]
#[patch(record = ProductCategory)]
pub struct ProductCategoryPatch {
    #[patch(text)]
    pub name: Option<String>,
    #[patch(text)]
    pub description: Option<String>,
}

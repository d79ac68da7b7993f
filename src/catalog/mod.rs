//! Catalog - The users, products and product categories served by the API.
//!
//! Each resource has a record type, a creation body and (for products and
//! categories) a patch body resolved with `#[derive(Patch)]`.

mod category;
mod number;
mod product;
mod user;

use thiserror::Error;
use tracing::info;

use crate::error::StoreError;
use crate::store::{RecordStore, RecordsExt};

pub use category::{NewProductCategory, ProductCategory, ProductCategoryPatch};
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{NewUser, User};

/// A creation body that decoded but breaks a field rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid field: {0}")]
pub struct ValidationError(pub &'static str);

impl ValidationError {
    pub fn new(reason: &'static str) -> Self {
        Self(reason)
    }
}

/// Field rules checked after a body has been decoded.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Users present in a fresh installation.
pub const SEED_USERS: &[&str] = &["John Doe", "Jane Doe"];

/// Insert [`SEED_USERS`] when the user table is empty. Returns how many
/// users were inserted.
pub fn seed_users<S: RecordStore>(store: &S) -> Result<usize, StoreError> {
    let users = store.records::<User>();
    if users.count()? > 0 {
        return Ok(0);
    }

    for name in SEED_USERS {
        users.insert(&NewUser::new(*name))?;
    }
    info!(count = SEED_USERS.len(), "seeded users");

    Ok(SEED_USERS.len())
}

//! Patch - Partial-update resolution.
//!
//! A patch request is a struct of optional fields. Each field carries a
//! policy that decides whether a supplied value makes it into the
//! assignment set:
//!
//! - [`Policy::Text`]: only a non-empty string qualifies. An empty string is
//!   treated exactly like an absent field.
//! - [`Policy::Present`]: any supplied value qualifies, zero included.
//!
//! An empty assignment set means no write at all: [`apply`] degenerates to a
//! fetch by id and still reports a missing record as `None`.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_api::{patch, InMemoryStore, Patch};
//!
//! #[derive(Deserialize, Patch)]
//! #[serde(rename_all = "camelCase")]
//! #[patch(record = Product)]
//! struct ProductPatch {
//!     #[patch(text)]
//!     name: Option<String>,
//!     base_price: Option<f64>,
//! }
//!
//! let store = InMemoryStore::new();
//! let updated = patch::apply(&store, 1, &ProductPatch { name: None, base_price: Some(0.0) })?;
//! ```

mod apply;
mod assignments;

use serde_json::Value as Json;

use crate::record::Record;
use crate::value::Value;

pub use apply::apply;
pub use assignments::{Assignment, Assignments};

/// Rule deciding whether a supplied field value qualifies for the assignment set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Truthy strings only; `""` counts as absent.
    Text,
    /// Any supplied value.
    Present,
}

/// Static description of one patchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchField {
    pub column: &'static str,
    pub field: &'static str,
    pub policy: Policy,
    /// An explicit JSON `null` is a validation error rather than absence.
    pub rejects_null: bool,
}

/// A partial-update request for a record type.
///
/// Usually derived with `#[derive(Patch)]`.
pub trait Patch {
    /// The record type this patch applies to.
    type Record: Record;

    /// Patchable fields with their policies.
    const FIELDS: &'static [PatchField];

    /// Compute the assignment set. Never fails: fields that do not qualify
    /// are left out.
    fn assignments(&self) -> Assignments;

    /// JSON attributes of `body` that are explicitly `null` on a field
    /// that rejects null.
    fn null_violations(body: &Json) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .filter(|f| f.rejects_null)
            .filter(|f| matches!(body.get(f.field), Some(Json::Null)))
            .map(|f| f.field)
            .collect()
    }
}

/// Truthy-string policy: qualifies only a non-empty string.
pub fn truthy_text(value: &Option<String>) -> Option<Value> {
    match value {
        Some(s) if !s.is_empty() => Some(Value::Text(s.clone())),
        _ => None,
    }
}

/// Present policy: qualifies any supplied value.
pub fn present<T: Clone + Into<Value>>(value: &Option<T>) -> Option<Value> {
    value.clone().map(Into::into)
}

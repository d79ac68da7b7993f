//! Per-resource HTTP vocabulary: request bodies and response messages.

use serde::de::DeserializeOwned;

use crate::catalog::{
    NewProduct, NewProductCategory, NewUser, Product, ProductCategory, ProductCategoryPatch,
    ProductPatch, User, Validate,
};
use crate::patch::Patch;
use crate::record::{NewRecord, Record};

/// A record type exposed over HTTP with list, get and create routes.
pub trait Resource: Record {
    /// Body of the create route.
    type New: NewRecord<Record = Self> + Validate + DeserializeOwned + Send;

    const NOT_FOUND: &'static str;
    const INVALID: &'static str;
    const CREATED: &'static str;
}

/// A resource that additionally has update and delete routes.
pub trait Mutable: Resource {
    /// Body of the update route.
    type Patch: Patch<Record = Self> + DeserializeOwned + Send;

    const UPDATED: &'static str;
    const DELETED: &'static str;
}

impl Resource for User {
    type New = NewUser;

    const NOT_FOUND: &'static str = "User not found";
    const INVALID: &'static str = "Invalid user data";
    const CREATED: &'static str = "User created successfully";
}

impl Resource for Product {
    type New = NewProduct;

    const NOT_FOUND: &'static str = "Product not found";
    const INVALID: &'static str = "Invalid request data";
    const CREATED: &'static str = "Product created successfully";
}

impl Mutable for Product {
    type Patch = ProductPatch;

    const UPDATED: &'static str = "Product updated successfully";
    const DELETED: &'static str = "Product deleted successfully";
}

impl Resource for ProductCategory {
    type New = NewProductCategory;

    const NOT_FOUND: &'static str = "Product category not found";
    const INVALID: &'static str = "Invalid request data";
    const CREATED: &'static str = "Product category created successfully";
}

impl Mutable for ProductCategory {
    type Patch = ProductCategoryPatch;

    const UPDATED: &'static str = "Product category updated successfully";
    const DELETED: &'static str = "Product category deleted successfully";
}

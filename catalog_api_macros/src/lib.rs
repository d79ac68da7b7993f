mod patch;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Patch)]
// ============================================================================

/// Derive macro for partial-update request types.
///
/// Generates an implementation of `catalog_api::Patch` that decides, field by
/// field, which supplied values make it into the assignment set.
///
/// # Usage
///
/// ```ignore
/// use catalog_api::Patch;
///
/// #[derive(Deserialize, Patch)]
/// #[serde(rename_all = "camelCase")]
/// #[patch(record = Product)]
/// pub struct ProductPatch {
///     #[patch(text)]
///     pub name: Option<String>,
///     pub category_id: Option<i64>,
///     pub base_price: Option<i64>,
/// }
/// ```
///
/// - `#[patch(record = Type)]` names the record type the patch applies to.
/// - Every field must be an `Option<T>` where `T: Into<catalog_api::Value> + Clone`.
/// - `#[patch(text)]` selects the truthy-string policy: empty strings are
///   treated as absent. Fields without it use the present policy: any
///   supplied value qualifies, zero included.
/// - `#[patch(reject_null)]` makes an explicit JSON `null` a validation
///   error instead of an absent field. Present-policy fields always reject
///   `null`; text fields opt in.
/// - `#[patch(column = "...")]` overrides the SQL column (defaults to the
///   field ident).
/// - `#[patch(field = "...")]` overrides the JSON attribute (defaults to the
///   camelCase form of the field ident).
#[proc_macro_derive(Patch, attributes(patch))]
pub fn derive_patch(input: TokenStream) -> TokenStream {
    patch::derive_patch(input)
}

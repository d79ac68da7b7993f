use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, Path};

/// How a single patch field qualifies for the assignment set.
enum FieldPolicy {
    Text,
    Present,
}

struct PatchFieldSpec {
    ident: syn::Ident,
    column: String,
    field: String,
    policy: FieldPolicy,
    rejects_null: bool,
}

pub fn derive_patch(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let record = extract_record(input)?;
    let fields = extract_fields(input)?;

    let field_entries = fields.iter().map(|spec| {
        let column = &spec.column;
        let field = &spec.field;
        let rejects_null = spec.rejects_null;
        let policy = match spec.policy {
            FieldPolicy::Text => quote!(catalog_api::Policy::Text),
            FieldPolicy::Present => quote!(catalog_api::Policy::Present),
        };
        quote! {
            catalog_api::PatchField {
                column: #column,
                field: #field,
                policy: #policy,
                rejects_null: #rejects_null,
            }
        }
    });

    let pushes = fields.iter().map(|spec| {
        let ident = &spec.ident;
        let column = &spec.column;
        let field = &spec.field;
        let qualify = match spec.policy {
            FieldPolicy::Text => quote!(catalog_api::patch::truthy_text(&self.#ident)),
            FieldPolicy::Present => quote!(catalog_api::patch::present(&self.#ident)),
        };
        quote! {
            if let Some(value) = #qualify {
                set.push(#column, #field, value);
            }
        }
    });

    Ok(quote! {
        impl catalog_api::Patch for #name {
            type Record = #record;

            const FIELDS: &'static [catalog_api::PatchField] = &[
                #(#field_entries),*
            ];

            fn assignments(&self) -> catalog_api::Assignments {
                let mut set = catalog_api::Assignments::new();
                #(#pushes)*
                set
            }
        }
    })
}

fn extract_record(input: &DeriveInput) -> syn::Result<Path> {
    for attr in &input.attrs {
        if !attr.path().is_ident("patch") {
            continue;
        }

        let mut record = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("record") {
                let value: Path = meta.value()?.parse()?;
                record = Some(value);
                Ok(())
            } else {
                Err(meta.error("unsupported patch attribute, expected `record = Type`"))
            }
        })?;

        if let Some(path) = record {
            return Ok(path);
        }
    }

    Err(syn::Error::new_spanned(
        &input.ident,
        "Patch derive: missing #[patch(record = Type)] on the struct",
    ))
}

fn extract_fields(input: &DeriveInput) -> syn::Result<Vec<PatchFieldSpec>> {
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Patch derive requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Patch derive can only be used on structs",
            ))
        }
    };

    let mut specs = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };

        let mut policy = FieldPolicy::Present;
        let mut column = None;
        let mut json_field = None;
        let mut reject_null = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("patch") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("text") {
                    policy = FieldPolicy::Text;
                } else if meta.path.is_ident("reject_null") {
                    reject_null = true;
                } else if meta.path.is_ident("column") {
                    let value: LitStr = meta.value()?.parse()?;
                    column = Some(value.value());
                } else if meta.path.is_ident("field") {
                    let value: LitStr = meta.value()?.parse()?;
                    json_field = Some(value.value());
                } else {
                    return Err(meta.error(
                        "unsupported patch field attribute, expected `text`, `reject_null`, `column` or `field`",
                    ));
                }
                Ok(())
            })?;
        }

        // A present-policy field can never take null as a value.
        let rejects_null = reject_null || matches!(policy, FieldPolicy::Present);
        let raw = ident.to_string();
        specs.push(PatchFieldSpec {
            column: column.unwrap_or_else(|| raw.clone()),
            field: json_field.unwrap_or_else(|| to_camel_case(&raw)),
            ident,
            policy,
            rejects_null,
        });
    }

    Ok(specs)
}

fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;
    for ch in s.trim_start_matches("r#").chars() {
        if ch == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

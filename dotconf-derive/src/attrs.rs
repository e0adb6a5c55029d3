//! Attribute parsing for `#[conf(...)]` annotations.
//!
//! This module extracts and validates configuration attributes from structs and
//! their fields during macro expansion.

use syn::{Attribute, Field, LitStr};

/// Parsed `#[conf(...)]` attributes from the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every key name.
    pub prefix: String,
}

impl StructAttrs {
    /// Extract `#[conf(prefix = "...")]` from the struct attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("conf") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.prefix = lit.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level conf attribute (expected `prefix`)"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed `#[conf(...)]` attributes from a struct field.
///
/// Represents all configuration options that can be specified on individual fields
/// of a `DotConf`-derived struct.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Custom key name override.
    ///
    /// If `None`, the field name is converted to upper case.
    pub name: Option<String>,

    /// Default value strategy:
    /// - `None`: Field is required (no default)
    /// - `Some(None)`: Use `Default::default()`
    /// - `Some(Some(tokens))`: Use explicit token stream as default value
    pub default: Option<Option<proc_macro2::TokenStream>>,

    /// Custom deserializer function path (e.g., `"serde_json::from_str"`).
    ///
    /// When specified, bypasses `FromValue` and uses this function instead.
    pub deserializer: Option<syn::Path>,
}

impl FieldAttrs {
    /// Extract and parse `#[conf(...)]` attributes from a struct field.
    ///
    /// Attributes other than `conf` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("conf") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let name: LitStr = meta.value()?.parse()?;
                    attrs.name = Some(name.value());
                    return Ok(());
                }

                // default or default = value
                if meta.path.is_ident("default") {
                    if meta.input.peek(syn::Token![=]) {
                        let value = meta.value()?;
                        let expr: syn::Expr = value.parse()?;
                        attrs.default = Some(Some(quote::ToTokens::to_token_stream(&expr)));
                    } else {
                        attrs.default = Some(None);
                    }
                    return Ok(());
                }

                // deserializer = "function::path"
                if meta.path.is_ident("deserializer") {
                    let func: LitStr = meta.value()?.parse()?;
                    attrs.deserializer = Some(func.parse()?);
                    return Ok(());
                }

                Err(meta.error(
                    "unsupported conf attribute (expected `name`, `default` or `deserializer`)",
                ))
            })?;
        }

        Ok(attrs)
    }
}

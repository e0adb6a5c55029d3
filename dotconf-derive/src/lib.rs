//! Derive macro implementation for dotconf

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// Extract inner type from Option<T>
fn option_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let seg = type_path.path.segments.last()?;
    if seg.ident != "Option" {
        return None;
    }
    match &seg.arguments {
        syn::PathArguments::AngleBracketed(args) => match args.args.first() {
            Some(syn::GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// `DotConf` derive macro
///
/// Implements `from_dotenv()` and `from_dotenv_file()` on structs.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[conf(prefix = "PREFIX_")]`: Add prefix to all key names
///
/// **Field-level**:
/// - `#[conf(name = "CUSTOM_NAME")]`: Custom key name
/// - `#[conf(default)]`: Use `Default::default()` if the key is missing
/// - `#[conf(default = value)]`: Use explicit default value if the key is missing
/// - `#[conf(deserializer = "func")]`: Use custom deserializer function
///
/// # Example
///
/// See the `dotconf` crate documentation for usage examples.
#[proc_macro_derive(DotConf, attributes(conf))]
pub fn derive_dotconf(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let prefix = StructAttrs::from_attrs(&input.attrs)?.prefix;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "DotConf only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "DotConf only supports structs",
            ));
        }
    };

    let field_initializers = fields
        .iter()
        .map(|field| field_initializer(field, &prefix))
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            /// Build the configuration from a loaded dotenv store
            ///
            /// # Errors
            ///
            /// - Required keys are not defined
            /// - Values cannot be converted into the field types
            pub fn from_dotenv(env: &::dotconf::DotEnv) -> ::dotconf::anyhow::Result<Self> {
                Ok(Self {
                    #(#field_initializers),*
                })
            }

            /// Load the dotenv file at `path` and build the configuration from it
            ///
            /// # Errors
            ///
            /// - The file cannot be opened or read
            /// - Any error from `from_dotenv`
            pub fn from_dotenv_file(
                path: impl ::std::convert::AsRef<::std::path::Path>,
            ) -> ::dotconf::anyhow::Result<Self> {
                let env = ::dotconf::DotEnv::load(path)?;
                Self::from_dotenv(&env)
            }
        }
    })
}

fn field_initializer(field: &syn::Field, prefix: &str) -> syn::Result<proc_macro2::TokenStream> {
    let Some(field_name) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "DotConf requires named fields"));
    };
    let field_type = &field.ty;
    let attrs = FieldAttrs::from_field(field)?;
    let option_inner = option_inner_type(field_type);

    let base_name = attrs
        .name
        .unwrap_or_else(|| field_name.unraw().to_string().to_uppercase());
    let key = format!("{}{}", prefix, base_name);

    if option_inner.is_some() && attrs.default.is_some() {
        return Err(syn::Error::new_spanned(
            field_name,
            "Option<T> fields cannot have default attribute (they default to None automatically)",
        ));
    }

    let expr = match (attrs.deserializer, option_inner) {
        (Some(_), _) if attrs.default.is_some() => {
            return Err(syn::Error::new_spanned(
                field_name,
                "default value is not supported with deserializer attribute",
            ));
        }
        (Some(func), Some(inner_type)) => quote! {
            match ::dotconf::de::get_value(env, #key) {
                Ok(__value) => Some(#func(__value).map_err(|e| ::dotconf::DotEnvError::parse_error::<#inner_type>(#key, e))?),
                Err(::dotconf::DotEnvError::Missing { .. }) => None,
                Err(e) => return Err(e.into()),
            }
        },
        (Some(func), None) => quote! {
            {
                let __value = ::dotconf::de::get_value(env, #key)?;
                #func(__value).map_err(|e| ::dotconf::DotEnvError::parse_error::<#field_type>(#key, e))?
            }
        },
        (None, Some(inner_type)) => quote! {
            ::dotconf::de::deserialize_optional::<#inner_type>(env, #key)?
        },
        (None, None) => match attrs.default {
            Some(Some(default_value)) => quote! {
                ::dotconf::de::deserialize_with_default::<#field_type>(env, #key, #default_value)?
            },
            Some(None) => quote! {
                ::dotconf::de::deserialize_with_default::<#field_type>(
                    env,
                    #key,
                    ::std::default::Default::default()
                )?
            },
            None => quote! {
                ::dotconf::de::deserialize_required::<#field_type>(env, #key)?
            },
        },
    };

    Ok(quote! {
        #field_name: #expr
    })
}

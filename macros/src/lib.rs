//! Derive macros for the unidirectional state core
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `unidirectional_core::action::Action` for
//!   an action enum, tagging each variant with a stable `kind`
//!
//! # Example
//!
//! ```ignore
//! use unidirectional_macros::Action;
//! use unidirectional_core::action::Action as _;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     AddTodo { text: String },
//!     ToggleTodo { index: usize },
//!     #[kind = "FILTER"]
//!     SetVisibilityFilter { filter: VisibilityFilter },
//! }
//!
//! // Generated tags:
//! assert_eq!(TodoAction::AddTodo { text: "x".into() }.kind(), "ADD_TODO");
//! assert_eq!(TodoAction::ToggleTodo { index: 0 }.kind(), "TOGGLE_TODO");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Lit, Meta, parse_macro_input};

/// Derive macro for action enums
///
/// Generates an implementation of `unidirectional_core::action::Action`
/// whose `kind()` returns the variant name in `SCREAMING_SNAKE_CASE`
/// (`AddTodo` → `"ADD_TODO"`).
///
/// # Attributes
///
/// - `#[kind = "..."]` - Override the tag of a single variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A `#[kind]` attribute is not of the form `#[kind = "literal"]`
/// - Two variants end up with the same tag
#[proc_macro_derive(Action, attributes(kind))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut seen = std::collections::HashSet::new();
    let mut kind_arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let kind = match kind_override(&variant.attrs) {
            Ok(Some(kind)) => kind,
            Ok(None) => screaming_snake_case(&variant_name.to_string()),
            Err(error) => return error.to_compile_error().into(),
        };

        if !seen.insert(kind.clone()) {
            return syn::Error::new_spanned(variant, format!("duplicate action kind `{kind}`"))
                .to_compile_error()
                .into();
        }

        kind_arms.push(match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #kind, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #kind, },
            Fields::Unit => quote! { Self::#variant_name => #kind, },
        });
    }

    // An uninhabited enum still needs a body that type-checks.
    let body = if kind_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#kind_arms)*
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics ::unidirectional_core::action::Action for #name #ty_generics #where_clause {
            fn kind(&self) -> &'static str {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[kind = "..."]` from a variant's attributes
fn kind_override(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("kind")) else {
        return Ok(None);
    };

    if let Meta::NameValue(name_value) = &attr.meta {
        if let Expr::Lit(expr_lit) = &name_value.value {
            if let Lit::Str(lit) = &expr_lit.lit {
                return Ok(Some(lit.value()));
            }
        }
    }

    Err(syn::Error::new_spanned(
        attr,
        "expected `#[kind = \"ACTION_KIND\"]`",
    ))
}

/// `AddTodo` → `ADD_TODO`, `HTTPRequest` → `HTTP_REQUEST`
fn screaming_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::screaming_snake_case;

    #[test]
    fn converts_camel_case_names() {
        assert_eq!(screaming_snake_case("AddTodo"), "ADD_TODO");
        assert_eq!(screaming_snake_case("SetVisibilityFilter"), "SET_VISIBILITY_FILTER");
        assert_eq!(screaming_snake_case("Reset"), "RESET");
    }

    #[test]
    fn keeps_acronyms_together() {
        assert_eq!(screaming_snake_case("HTTPRequest"), "HTTP_REQUEST");
        assert_eq!(screaming_snake_case("LoadV2Data"), "LOAD_V2_DATA");
    }
}

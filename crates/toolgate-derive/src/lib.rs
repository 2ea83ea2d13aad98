//! toolgate Macros
//!
//! This crate provides the `#[claims]` attribute macro.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Appends the registered JWT claim fields to a struct and implements the
/// `StandardClaims` trait.
///
/// Fields appended after the struct's own fields, in this order:
/// - Issuer (`iss`)
/// - Subject (`sub`)
/// - Audience (`aud`)
/// - Expiration (`exp`)
/// - Not Before (`nbf`)
/// - Issued At (`iat`)
/// - JWT ID (`jti`)
///
/// Registered claims left as `None` are omitted from the serialized payload.
/// The generated struct derives `Default`, so its own fields must too.
/// The struct's own fields come first so that namespaced application claims
/// lead the payload.
#[proc_macro_attribute]
pub fn claims(_args: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;
    let vis = &input.vis;
    let attrs = &input.attrs;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let generics = &input.generics;

    let existing_fields = if let syn::Data::Struct(syn::DataStruct {
        fields: syn::Fields::Named(fields),
        ..
    }) = &input.data
    {
        &fields.named
    } else {
        return syn::Error::new_spanned(
            struct_name,
            "#[claims] can only be applied to structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let existing_fields = existing_fields.iter();

    let expanded = quote! {
        #(#attrs)*
        #[derive(Debug, Clone, Default, serde::Serialize)]
        #vis struct #struct_name #generics #where_clause {
            #(#existing_fields,)*

            #[serde(rename = "iss", skip_serializing_if = "Option::is_none")]
            pub issuer: Option<String>,
            #[serde(rename = "sub", skip_serializing_if = "Option::is_none")]
            pub subject: Option<String>,
            #[serde(rename = "aud", skip_serializing_if = "Option::is_none")]
            pub audience: Option<String>,
            #[serde(rename = "exp", skip_serializing_if = "Option::is_none")]
            pub expiration: Option<i64>,
            #[serde(rename = "nbf", skip_serializing_if = "Option::is_none")]
            pub not_before: Option<i64>,
            #[serde(rename = "iat", skip_serializing_if = "Option::is_none")]
            pub issued_at: Option<i64>,
            #[serde(rename = "jti", skip_serializing_if = "Option::is_none")]
            pub jwt_id: Option<String>,
        }

        impl #impl_generics toolgate::StandardClaims for #struct_name #ty_generics #where_clause {
            fn issuer(&self) -> Option<&str> {
                self.issuer.as_deref()
            }

            fn subject(&self) -> Option<&str> {
                self.subject.as_deref()
            }

            fn audience(&self) -> Option<&str> {
                self.audience.as_deref()
            }

            fn expiration(&self) -> Option<i64> {
                self.expiration
            }

            fn not_before(&self) -> Option<i64> {
                self.not_before
            }

            fn issued_at(&self) -> Option<i64> {
                self.issued_at
            }

            fn jwt_id(&self) -> Option<&str> {
                self.jwt_id.as_deref()
            }
        }
    };

    TokenStream::from(expanded)
}

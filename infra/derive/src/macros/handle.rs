use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct};

pub fn expand_handle(input: ItemStruct) -> TokenStream {
    let wrapper_ident = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;

    let has_slot_field = matches!(
        fields,
        Fields::Named(named) if named
            .named
            .iter()
            .any(|field| field.ident.as_ref().is_some_and(|ident| ident == "slot"))
    );
    if !has_slot_field {
        return syn::Error::new_spanned(
            &input.ident,
            "slot_handle requires a named `slot: SlotId` field",
        )
        .to_compile_error();
    }

    let inner_ident = format_ident!("{wrapper_ident}Inner");

    quote! {
        #[derive(Debug)]
        #vis struct #inner_ident #fields

        // Attributes (doc comments included) belong on the type users see.
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #wrapper_ident {
            inner: std::sync::Arc<#inner_ident>,
        }

        impl #wrapper_ident {
            pub fn new(inner: #inner_ident) -> Self {
                Self {
                    inner: std::sync::Arc::new(inner),
                }
            }

            /// Two handles are the same object when they share the inner allocation.
            #[must_use]
            pub fn same_handle(a: &Self, b: &Self) -> bool {
                std::sync::Arc::ptr_eq(&a.inner, &b.inner)
            }
        }

        impl std::ops::Deref for #wrapper_ident {
            type Target = #inner_ident;
            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::ihub_domain::registry::SlotHandle for #wrapper_ident {
            fn slot(&self) -> ::ihub_domain::SlotId {
                self.inner.slot
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::expand_handle;
    use syn::parse_quote;

    #[test]
    fn attributes_land_on_the_wrapper() {
        let expanded = expand_handle(parse_quote! {
            /// A demo handle.
            pub struct Demo {
                slot: u8,
            }
        });

        let file: syn::File = syn::parse2(expanded).expect("expansion parses");
        let documented: Vec<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Struct(s) if s.attrs.iter().any(|a| a.path().is_ident("doc")) => {
                    Some(s.ident.to_string())
                },
                _ => None,
            })
            .collect();

        assert_eq!(documented, ["Demo"], "docs belong on the wrapper, not the inner struct");
    }

    #[test]
    fn missing_slot_field_is_rejected() {
        let expanded = expand_handle(parse_quote! {
            pub struct Demo {
                label: &'static str,
            }
        })
        .to_string();

        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains("slot"));
    }

    #[test]
    fn tuple_struct_is_rejected() {
        let expanded = expand_handle(parse_quote! {
            pub struct Demo(u8);
        })
        .to_string();

        assert!(expanded.contains("compile_error"));
    }
}

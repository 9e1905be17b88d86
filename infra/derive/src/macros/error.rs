use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, Type, Variant};

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
}

pub fn expand_error(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext_trait = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("ihub_error can only be applied to enums"); };
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        match inspect_variant(variant) {
            Ok(meta) => variants.push(meta),
            Err(err) => return err,
        }
    }

    let missing_derives = missing_derives(&input);
    let context_ext = expand_context_ext(name, &ext_trait, &variants);
    let from_impls: Vec<_> =
        variants.iter().filter_map(|v| expand_from_source(name, &ext_trait, v)).collect();
    let internal_impls = expand_internal(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #missing_derives
        #input

        #context_ext
        #(#from_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn inspect_variant(variant: &Variant) -> Result<ErrorVariant<'_>, TokenStream> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "ihub_error requires named fields for source/context handling",
        )
        .to_compile_error());
    };

    let mut source = None;
    let mut has_context = false;
    for field in &fields.named {
        let Some(ident) = &field.ident else { continue };
        if ident == "context" {
            if !is_context_type(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "context field must be Option<Cow<'static, str>>",
                )
                .to_compile_error());
            }
            has_context = true;
        } else if ident == "source"
            || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
        {
            source = Some((ident, &field.ty));
        }
    }

    if source.is_some() && !has_context {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "ihub_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        )
        .to_compile_error());
    }

    Ok(ErrorVariant { ident: &variant.ident, source, has_context })
}

fn expand_context_ext(
    name: &Ident,
    ext_trait: &Ident,
    variants: &[ErrorVariant<'_>],
) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        quote! { #name::#ident { context: c, .. } => *c = Some(context.into()), }
    });

    quote! {
        pub trait #ext_trait<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext_trait<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        #( #arms )*
                        _ => {}
                    }
                    e
                })
            }
        }
    }
}

fn expand_from_source(
    name: &Ident,
    ext_trait: &Ident,
    variant: &ErrorVariant<'_>,
) -> Option<TokenStream> {
    if variant.ident == "Internal" {
        return None;
    }
    let (field, ty) = variant.source?;
    let v_ident = variant.ident;

    Some(quote! {
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#v_ident { #field, context: None } }
        }

        impl<T> #ext_trait<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#v_ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn expand_internal(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    if !variants.iter().any(|v| v.ident == "Internal") {
        return quote!();
    }

    quote! {
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

/// Adds `Debug`/`thiserror::Error` derives that the enum does not already declare.
fn missing_derives(input: &DeriveInput) -> TokenStream {
    let mut has_debug = false;
    let mut has_error = false;

    for attr in &input.attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            match meta.path.segments.last().map(|seg| seg.ident.to_string()).as_deref() {
                Some("Debug") => has_debug = true,
                Some("Error") => has_error = true,
                _ => {},
            }
            Ok(())
        });
    }

    let mut tokens = Vec::new();
    if !has_debug {
        tokens.push(quote! { Debug });
    }
    if !has_error {
        tokens.push(quote! { ::thiserror::Error });
    }
    if tokens.is_empty() { quote!() } else { quote! { #[derive(#(#tokens),*)] } }
}

/// Structural check for `Option<Cow<'static, str>>`, tolerant of path prefixes.
fn is_context_type(ty: &Type) -> bool {
    let rendered: String =
        ty.to_token_stream().to_string().chars().filter(|c| !c.is_whitespace()).collect();
    rendered.ends_with("Cow<'static,str>>")
        && (rendered.starts_with("Option<") || rendered.starts_with("std::option::Option<"))
}

#[cfg(test)]
mod tests {
    use super::expand_error;
    use syn::parse_quote;

    fn render(input: syn::DeriveInput) -> String {
        expand_error(input).to_string()
    }

    #[test]
    fn tuple_variants_are_rejected() {
        let out = render(parse_quote! {
            pub enum DemoError {
                #[error("boom")]
                Broken(String),
            }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("named fields"));
    }

    #[test]
    fn source_without_context_is_rejected() {
        let out = render(parse_quote! {
            pub enum DemoError {
                #[error("io: {source}")]
                Io { source: std::io::Error },
            }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("variants with a source"));
    }

    #[test]
    fn malformed_context_type_is_rejected() {
        let out = render(parse_quote! {
            pub enum DemoError {
                #[error("boom{context}")]
                Broken { context: String },
            }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("must be Option<Cow<'static, str>>"));
    }

    #[test]
    fn non_enum_input_is_rejected() {
        let out = render(parse_quote! {
            pub struct NotAnError {
                message: String,
            }
        });

        assert!(out.contains("compile_error"));
    }

    #[test]
    fn source_variants_gain_conversions() {
        let out = render(parse_quote! {
            pub enum DemoError {
                #[error("io{}: {source}", format_context(.context))]
                Io {
                    source: std::io::Error,
                    context: Option<std::borrow::Cow<'static, str>>,
                },
                #[error("internal{}: {message}", format_context(.context))]
                Internal {
                    message: std::borrow::Cow<'static, str>,
                    context: Option<std::borrow::Cow<'static, str>>,
                },
            }
        });

        assert!(out.contains("DemoErrorExt"), "context extension trait is generated");
        assert!(out.contains("From"), "source variants get From impls");
        assert!(out.contains("Internal"), "Internal keeps its str/String conversions");
    }
}

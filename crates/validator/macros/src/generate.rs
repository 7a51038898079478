//! Code generation for `#[derive(Validatable)]`

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DataEnum, DeriveInput, Fields, FieldsNamed, GenericParam, Visibility};

use crate::parse::FieldAttrs;

pub(crate) fn generate(input: &DeriveInput) -> syn::Result<TokenStream> {
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Validatable types cannot have lifetime parameters",
        ));
    }

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => generate_record(input, fields),
            other => Err(syn::Error::new_spanned(
                other,
                "Validatable can only be derived for structs with named fields",
            )),
        },
        Data::Enum(data) => generate_sum(input, data),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "Validatable cannot be derived for unions",
        )),
    }
}

/// Generics with a `Validatable + 'static` bound on every type parameter.
fn bounded_generics(input: &DeriveInput) -> syn::Generics {
    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(syn::parse_quote!(::tagvalid::Validatable));
            ty.bounds.push(syn::parse_quote!('static));
        }
    }
    generics
}

fn generate_record(input: &DeriveInput, fields: &FieldsNamed) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let type_name = name.to_string();
    let generics = bounded_generics(input);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut all_names = Vec::new();
    let mut visible = Vec::new();

    for field in &fields.named {
        let attrs = FieldAttrs::from_attributes(&field.attrs)?;
        let Some(ident) = &field.ident else {
            continue;
        };
        let field_name = ident.unraw().to_string();
        all_names.push(field_name.clone());

        if attrs.skip || !matches!(field.vis, Visibility::Public(_)) {
            if let (false, Some(tag)) = (attrs.skip, &attrs.tag) {
                return Err(syn::Error::new(
                    tag.span(),
                    "validation tags are only read from `pub` fields",
                ));
            }
            continue;
        }

        let with_tag = attrs.tag.as_ref().map(|tag| quote!(.with_tag(#tag)));
        let with_key = attrs.key.as_ref().map(|key| quote!(.with_error_key(#key)));
        visible.push(quote! {
            ::tagvalid::FieldRef::new(#field_name, &self.#ident) #with_tag #with_key
        });
    }

    Ok(quote! {
        impl #impl_generics ::tagvalid::Validatable for #name #ty_generics #where_clause {
            fn shape(&self) -> ::tagvalid::Shape<'_> {
                ::tagvalid::Shape::Record(self)
            }
        }

        impl #impl_generics ::tagvalid::Record for #name #ty_generics #where_clause {
            fn record_type_id(&self) -> ::core::any::TypeId {
                ::core::any::TypeId::of::<Self>()
            }

            fn record_type_name(&self) -> &'static str {
                #type_name
            }

            fn field_names(&self) -> &'static [&'static str] {
                &[#(#all_names),*]
            }

            fn fields(&self) -> ::std::vec::Vec<::tagvalid::FieldRef<'_>> {
                ::std::vec![#(#visible),*]
            }
        }
    })
}

/// Enums whose variants are unit or hold exactly one value. A unit variant
/// is the empty sum.
fn generate_sum(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let generics = bounded_generics(input);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut arms = Vec::new();
    for variant in &data.variants {
        let ident = &variant.ident;
        let arm = match &variant.fields {
            Fields::Unit => quote! {
                Self::#ident => ::tagvalid::Shape::Dynamic(::core::option::Option::None)
            },
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => quote! {
                Self::#ident(value) => ::tagvalid::Shape::Dynamic(
                    ::core::option::Option::Some(value as &dyn ::tagvalid::Validatable)
                )
            },
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "Validatable enum variants must be unit or hold exactly one value",
                ));
            }
        };
        arms.push(arm);
    }

    let body = if arms.is_empty() {
        quote!(match *self {})
    } else {
        quote!(match self { #(#arms,)* })
    };

    Ok(quote! {
        impl #impl_generics ::tagvalid::Validatable for #name #ty_generics #where_clause {
            fn shape(&self) -> ::tagvalid::Shape<'_> {
                #body
            }
        }
    })
}

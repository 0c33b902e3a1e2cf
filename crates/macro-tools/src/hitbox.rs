use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput};

pub fn macro_hitbox(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;
    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Hitbox can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let mut hitbox_fields = data.fields.iter().filter(|field| {
        field
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("hitbox"))
    });

    let Some(hitbox_field) = hitbox_fields.next() else {
        return syn::Error::new(ident.span(), "mark exactly one field with #[hitbox]")
            .into_compile_error()
            .into();
    };

    if hitbox_fields.next().is_some() {
        return syn::Error::new(ident.span(), "only one field can be marked with #[hitbox]")
            .into_compile_error()
            .into();
    }

    let Some(hitbox_ident) = hitbox_field.ident.clone() else {
        return syn::Error::new(ident.span(), "#[hitbox] field must be named")
            .into_compile_error()
            .into();
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote!(
        impl #impl_generics crate::element::Hitbox for #ident #ty_generics #where_clause {
            fn hitbox(&self) -> &crate::shape::polygon::Polygon {
                crate::element::Hitbox::hitbox(&self.#hitbox_ident)
            }

            fn hitbox_mut(&mut self) -> &mut crate::shape::polygon::Polygon {
                crate::element::Hitbox::hitbox_mut(&mut self.#hitbox_ident)
            }
        }
    )
    .into()
}

mod builder;
mod deref;
mod fields;
mod hitbox;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Delegates `crate::element::Hitbox` to the field marked `#[hitbox]`.
///
/// Only usable inside the `skater` crate, the generated impl refers to the
/// trait through `crate::`.
#[proc_macro_derive(Hitbox, attributes(hitbox))]
pub fn hitbox(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    hitbox::macro_hitbox(input)
}

#[proc_macro_derive(Deref, attributes(deref))]
pub fn deref(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    deref::macro_deref(input)
}

/// Generates `{Name}Builder` together with `Default` impls for both structs.
///
/// Field defaults come from `#[default(expr)]` or a literal `#[default = 0]`,
/// falling back to `Default::default()`. `#[builder(skip)]` or `#[shared(skip)]` hide the
/// setter but keep the field in the builder.
#[proc_macro_derive(Builder, attributes(default, builder, shared))]
pub fn builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    builder::macro_builder(input)
}

/// Generates accessors, `#[r]` for readers and `#[w]` for writers.
///
/// Both accept `vis(...)`; `#[w]` also accepts `set` (a `set_field(value)`
/// setter) and `reducer` (a `set_field(|old| new)` setter).
#[proc_macro_derive(Fields, attributes(shared, r, w))]
pub fn fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fields::macro_fields(input)
}

use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parenthesized, Attribute, Data, DeriveInput, Ident, Visibility};

// read accessors of these types return by value
const COPY_TYPES: [&str; 17] = [
    "bool", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128",
    "isize", "f32", "f64", "FloatNum", "Point",
];

fn find_attr<'a>(attrs: &'a [Attribute], ident: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(ident))
}

fn should_skip(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| ["shared", "r", "w"].iter().any(|k| attr.path().is_ident(k)))
        .any(|attr| {
            let mut is_skip = false;
            let _ = attr.parse_nested_meta(|meta| {
                is_skip = meta.path.is_ident("skip");
                Ok(())
            });
            is_skip
        })
}

struct WriteAttr {
    use_reducer: bool,
    use_setter: bool,
    vis: Visibility,
}

pub fn macro_fields(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;

    let input_vis = input.vis;

    let parse_attr_read = |attrs: &[Attribute]| -> Option<Visibility> {
        find_attr(attrs, "r").map(|attr| {
            let mut field_vis: Visibility = input_vis.clone();
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("vis") {
                    let content;
                    parenthesized!(content in meta.input);
                    field_vis = content.parse::<Visibility>()?;
                }
                Ok(())
            });
            field_vis
        })
    };

    let parse_attr_write = |attrs: &[Attribute]| -> Option<WriteAttr> {
        find_attr(attrs, "w").map(|attr| {
            let mut write_attr = WriteAttr {
                use_reducer: false,
                use_setter: false,
                vis: input_vis.clone(),
            };
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("reducer") {
                    write_attr.use_reducer = true;
                    write_attr.use_setter = true;
                }
                if meta.path.is_ident("set") {
                    write_attr.use_setter = true;
                }
                if meta.path.is_ident("vis") {
                    let content;
                    parenthesized!(content in meta.input);
                    write_attr.vis = content.parse::<Visibility>()?;
                }
                Ok(())
            });
            write_attr
        })
    };

    let global_attr_read = parse_attr_read(&input.attrs);

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Fields can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let property_methods = data
        .fields
        .iter()
        .filter(|field| !should_skip(&field.attrs))
        .filter_map(|field| field.ident.clone().map(|field_ident| (field_ident, field)))
        .map(|(field_ident, field)| {
            let ty = field.ty.clone();

            let should_return_copy_when_read = match &field.ty {
                syn::Type::Path(path) => {
                    let t = path.into_token_stream().to_string();
                    COPY_TYPES.iter().any(|copy_type| copy_type == &t)
                }
                _ => false,
            };

            let read_field_method = parse_attr_read(&field.attrs)
                .or(global_attr_read.clone())
                .map(|vis| {
                    if should_return_copy_when_read {
                        quote!(
                            #vis fn #field_ident(&self) -> #ty {
                                self.#field_ident
                            }
                        )
                    } else {
                        quote!(
                            #vis fn #field_ident(&self) -> &#ty {
                                &self.#field_ident
                            }
                        )
                    }
                });

            let write_field_method = parse_attr_write(&field.attrs)
                .or_else(|| parse_attr_write(&input.attrs))
                .map(|WriteAttr { use_reducer, use_setter, vis }| {
                    if use_setter {
                        let set_field_ident =
                            Ident::new(&format!("set_{}", field_ident), field_ident.span());
                        if use_reducer {
                            quote!(
                                #vis fn #set_field_ident(&mut self, reducer: impl FnOnce(#ty) -> #ty) -> &mut Self {
                                    self.#field_ident = reducer(self.#field_ident.clone());
                                    self
                                }
                            )
                        } else {
                            quote!(
                                #vis fn #set_field_ident(&mut self, value: impl Into<#ty>) -> &mut Self {
                                    self.#field_ident = value.into();
                                    self
                                }
                            )
                        }
                    } else {
                        let field_ident_mut =
                            Ident::new(&format!("{}_mut", field_ident), field_ident.span());

                        quote!(
                            #vis fn #field_ident_mut(&mut self) -> &mut #ty {
                                &mut self.#field_ident
                            }
                        )
                    }
                });

            quote!(
                #read_field_method

                #write_field_method
            )
        });

    quote!(
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#property_methods)*
        }
    )
    .into()
}

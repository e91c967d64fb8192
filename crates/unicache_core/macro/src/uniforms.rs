use darling::{ast, util, FromDeriveInput, FromField};
use quote::{quote, ToTokens};

#[derive(Debug, FromField)]
#[darling(attributes(uniforms))]
struct UniformsField {
    ident: Option<syn::Ident>,
    ty: syn::Type,

    #[darling(default)]
    name: Option<String>,
    #[darling(default)]
    ignore: bool,
}

#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_named))]
pub struct Uniforms {
    ident: syn::Ident,
    generics: syn::Generics,
    data: ast::Data<util::Ignored, UniformsField>,
}

struct UniformEntry<'a> {
    name: String,
    field: &'a syn::Ident,
    ty: &'a syn::Type,
}

impl Uniforms {
    fn entries(&self) -> Vec<UniformEntry<'_>> {
        let Some(fields) = self.data.as_ref().take_struct() else {
            return Vec::new();
        };

        fields
            .fields
            .into_iter()
            .filter(|field| !field.ignore)
            .filter_map(|field| {
                let ident = field.ident.as_ref()?;

                // Uniform name is taken from #[uniforms(name = "...")] if it's defined,
                // and defaulted to the field name.
                let name = match &field.name {
                    Some(name) => name.clone(),
                    None => {
                        let name = ident.to_string();
                        // Padding fields have names starting with __, ignore them
                        if name.starts_with("__") {
                            return None;
                        }
                        name
                    }
                };

                Some(UniformEntry {
                    name,
                    field: ident,
                    ty: &field.ty,
                })
            })
            .collect()
    }
}

impl ToTokens for Uniforms {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let Uniforms {
            ref ident,
            ref generics,
            ..
        } = *self;

        let (imp, ty, wher) = generics.split_for_impl();

        let entries = self.entries();
        let count = entries.len();

        let attributes = entries.iter().map(|UniformEntry { name, ty, .. }| {
            quote! {
                unicache_core::uniforms::UniformAttribute {
                    name: #name,
                    kind: <#ty as unicache_core::uniforms::UniformField>::KIND,
                }
            }
        });

        let values = entries.iter().map(|UniformEntry { name, field, ty }| {
            quote! {
                values.insert(
                    #name.to_owned(),
                    <#ty as unicache_core::uniforms::UniformField>::value(&self.#field),
                );
            }
        });

        tokens.extend(quote! {
            impl #imp unicache_core::uniforms::Uniforms for #ident #ty #wher {
                const FORMAT: &'static [unicache_core::uniforms::UniformAttribute] = &[
                    #(#attributes,)*
                ];

                fn values(&self) -> unicache_core::value::UniformValues {
                    let mut values = unicache_core::value::UniformValues::with_capacity(#count);
                    #(#values)*
                    values
                }
            }
        });
    }
}

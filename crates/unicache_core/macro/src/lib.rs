use darling::FromDeriveInput;
use proc_macro::TokenStream;
use quote::quote;
use uniforms::Uniforms;

mod uniforms;

/// Implements `unicache_core::Uniforms` for a struct with named fields.
///
/// Every field becomes a uniform named after the field. `#[uniforms(name = "...")]`
/// renames it, `#[uniforms(ignore)]` skips it, and fields starting with `__`
/// are treated as padding.
#[proc_macro_derive(Uniforms, attributes(uniforms))]
pub fn uniforms_derive(input: TokenStream) -> TokenStream {
    let input = match syn::parse2(input.into()) {
        Ok(input) => input,
        Err(error) => return error.to_compile_error().into(),
    };

    match Uniforms::from_derive_input(&input) {
        Ok(uniforms) => quote!(#uniforms).into(),
        Err(error) => error.write_errors().into(),
    }
}

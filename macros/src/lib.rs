use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model struct with exactly three `Component` fields,
/// along with a `new` constructor and conversions to and from `Components`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return syn::Error::new(
            Span::call_site(),
            "Models must have exactly 3 fields, one for each component of the color.",
        )
        .to_compile_error()
        .into();
    }

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "Models can not be generic.")
            .to_compile_error()
            .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Components are always reachable from outside the model.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color having this color model.
            pub const fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for crate::color::Components {
            fn from(value: #struct_name) -> Self {
                value.to_components()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}

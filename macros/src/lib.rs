use proc_macro::TokenStream;
use quote::{quote, ToTokens};

/// Generate a color model from a struct with exactly 3 named fields of the
/// same type. The fields are made public and the model gets a `new`
/// constructor, `to_array` and conversions from and to `[T; 3]`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Model fields must be named.")
        }
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

    // All components share one type so the model can be viewed as an array.
    let ty = input.fields.iter().next().map(|f| f.ty.clone());
    let Some(ty) = ty else {
        return quote! { compile_error!("Model has no fields.") }.into();
    };
    let ty_name = ty.to_token_stream().to_string();
    if let Some(other) = input
        .fields
        .iter()
        .find(|f| f.ty.to_token_stream().to_string() != ty_name)
    {
        return syn::Error::new_spanned(&other.ty, "All model components must have the same type.")
            .to_compile_error()
            .into();
    }

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    });

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color from its three components.
            pub const fn new(#field1: #ty, #field2: #ty, #field3: #ty) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components in declaration order.
            pub const fn to_array(&self) -> [#ty; 3] {
                [self.#field1, self.#field2, self.#field3]
            }
        }

        impl From<[#ty; 3]> for #struct_name {
            fn from(value: [#ty; 3]) -> Self {
                let [#field1, #field2, #field3] = value;
                Self::new(#field1, #field2, #field3)
            }
        }

        impl From<#struct_name> for [#ty; 3] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}

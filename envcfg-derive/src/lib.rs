mod field;

use std::collections::HashSet;

use darling::{
    FromDeriveInput,
    ast::{Data, Fields},
};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{DeriveInput, Ident, Visibility, parse_macro_input};

use crate::field::{EnvField, EnvFieldReceiver};

#[proc_macro_derive(EnvConfig, attributes(env))]
pub fn derive_env_config(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_derive(input) {
        Ok(output) => output.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn impl_derive(input: DeriveInput) -> darling::Result<TokenStream> {
    let receiver = EnvConfigReceiver::from_derive_input(&input)?;
    let fields = receiver.validate()?;

    Ok(EnvConfigStruct {
        ident: receiver.ident,
        fields,
    }
    .to_token_stream())
}

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct EnvConfigReceiver {
    pub ident: Ident,
    pub vis: Visibility,
    pub data: Data<(), EnvFieldReceiver>,
}

impl EnvConfigReceiver {
    fn validate(&self) -> darling::Result<Vec<EnvField>> {
        let mut errors = darling::Error::accumulator();

        if !matches!(&self.vis, Visibility::Public(_)) {
            errors.push(
                darling::Error::custom("EnvConfig derive requires a public struct")
                    .with_span(&self.ident.span()),
            );
        }

        let fields: Vec<EnvField> = self
            .get_fields()
            .iter()
            .filter_map(|field| errors.handle(field.validate()))
            .collect();

        let mut keys = HashSet::new();
        for field in &fields {
            if !keys.insert(field.key.as_str()) {
                errors.push(
                    darling::Error::custom(format!(
                        "environment variable `{}` is already read by another field",
                        field.key
                    ))
                    .with_span(&field.ident),
                );
            }
        }

        errors.finish_with(fields)
    }

    fn get_fields(&self) -> &Fields<EnvFieldReceiver> {
        let Data::Struct(fields) = &self.data else {
            panic!("we've asserted that it's a struct");
        };

        fields
    }
}

struct EnvConfigStruct {
    ident: Ident,
    fields: Vec<EnvField>,
}

impl ToTokens for EnvConfigStruct {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let private_path = quote!(__envcfg::__private);

        let impl_struct = self.impl_struct(&private_path);
        let impl_env_config = self.impl_env_config(&private_path);

        tokens.extend(quote! {
            const _: () = {
                extern crate envcfg as __envcfg;

                #impl_struct

                #impl_env_config
            };
        });
    }
}

impl EnvConfigStruct {
    fn impl_struct(&self, private_path: &TokenStream) -> TokenStream {
        let struct_name = &self.ident;

        quote! {
            impl #struct_name {
                /// The spec this struct resolves.
                pub fn spec() -> #private_path::SpecMap {
                    #private_path::spec(&<Self as #private_path::EnvConfig>::fields())
                }

                /// One `KEY=default` line per field.
                pub fn requirements() -> ::std::string::String {
                    let mut requirements = ::std::string::String::new();
                    #private_path::requirements(
                        &<Self as #private_path::EnvConfig>::fields(),
                        &mut requirements,
                    );
                    requirements
                }

                /// Builds the struct from a store that `spec()` was resolved into.
                pub fn from_cfg<E>(
                    cfg: &#private_path::EnvCfg<E>,
                ) -> ::core::result::Result<Self, #private_path::EnvConfigErrors> {
                    <Self as #private_path::EnvConfig>::from_cfg(cfg)
                }

                /// Resolves `spec()` against the process environment.
                pub fn from_env() -> ::core::result::Result<Self, #private_path::EnvConfigErrors> {
                    Self::from_env_in(#private_path::SystemEnv)
                }

                /// Resolves `spec()` against `env`.
                pub fn from_env_in<E: #private_path::EnvRead>(
                    env: E,
                ) -> ::core::result::Result<Self, #private_path::EnvConfigErrors> {
                    let cfg = #private_path::load(env, &<Self as #private_path::EnvConfig>::fields())?;
                    <Self as #private_path::EnvConfig>::from_cfg(&cfg)
                }
            }
        }
    }

    fn impl_env_config(&self, private_path: &TokenStream) -> TokenStream {
        let struct_name = &self.ident;

        let entries = self.fields.iter().map(|field| {
            let path = field.path(struct_name);
            let key = &field.key;
            let scalar = &field.scalar;

            let spec = match &field.default {
                Some(default) => quote! {
                    #private_path::default::<#scalar>(::core::convert::Into::into(#default))
                },
                None => quote! { #private_path::hint::<#scalar>() },
            };

            quote! {
                #private_path::Field {
                    path: #path,
                    key: #key,
                    spec: #spec,
                }
            }
        });

        // Every field is read before bailing out so all errors are collected.
        let reads = self.fields.iter().map(|field| {
            let ident = &field.ident;
            let path = field.path(struct_name);
            let key = &field.key;
            let scalar = &field.scalar;
            let read = if field.optional {
                quote!(optional)
            } else {
                quote!(required)
            };

            quote! {
                let #ident = #private_path::#read::<#scalar, E>(
                    __envcfg_cfg,
                    #path,
                    #key,
                    &mut __envcfg_errors,
                );
            }
        });

        let assignments = self.fields.iter().map(|field| {
            let ident = &field.ident;

            quote! {
                #ident: match #ident {
                    ::core::result::Result::Ok(val) => val,
                    ::core::result::Result::Err(()) => {
                        return ::core::result::Result::Err(__envcfg_errors);
                    }
                }
            }
        });

        quote! {
            impl #private_path::EnvConfig for #struct_name {
                fn fields() -> ::std::vec::Vec<#private_path::Field> {
                    ::std::vec![#(#entries,)*]
                }

                fn from_cfg<E>(
                    __envcfg_cfg: &#private_path::EnvCfg<E>,
                ) -> ::core::result::Result<Self, #private_path::EnvConfigErrors> {
                    let mut __envcfg_errors = #private_path::EnvConfigErrors::new();

                    #(#reads)*

                    ::core::result::Result::Ok(#struct_name {
                        #(#assignments,)*
                    })
                }
            }
        }
    }
}

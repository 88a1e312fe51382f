use darling::{FromField, FromMeta, util::Override};
use syn::{Expr, GenericArgument, Ident, PathArguments, Type, ext::IdentExt};

/// The right-hand side of `default = ...`, kept as written.
///
/// `syn::Expr`'s own `FromMeta` would parse `"localhost"` as the path
/// `localhost`.
pub struct DefaultExpr(pub Expr);

impl FromMeta for DefaultExpr {
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        Ok(DefaultExpr(expr.clone()))
    }
}

#[derive(FromField)]
#[darling(attributes(env))]
pub struct EnvFieldReceiver {
    pub ident: Option<Ident>,
    pub ty: Type,
    /// `#[env(from)]` or `#[env(from = "NAME")]`
    #[darling(default)]
    pub from: Option<Override<String>>,
    #[darling(default)]
    pub default: Option<DefaultExpr>,
}

/// A validated field.
pub struct EnvField {
    pub ident: Ident,
    /// The scalar type read from the store; `T` for both `T` and `Option<T>`.
    pub scalar: Type,
    pub optional: bool,
    pub key: String,
    pub default: Option<Expr>,
}

impl EnvFieldReceiver {
    pub fn validate(&self) -> darling::Result<EnvField> {
        let Some(ident) = self.ident.clone() else {
            return Err(darling::Error::custom(
                "EnvConfig derive only supports structs with named fields",
            ));
        };

        let Some(from) = &self.from else {
            return Err(darling::Error::custom(
                "expected `#[env(from)]` or `#[env(from = \"NAME\")]`",
            )
            .with_span(&ident));
        };

        let key = match from {
            Override::Inherit => ident.unraw().to_string().to_uppercase(),
            Override::Explicit(name) => name.clone(),
        };

        let (scalar, optional) = match parse_option(&self.ty) {
            Some(inner) => (inner.clone(), true),
            None => (self.ty.clone(), false),
        };

        if optional && self.default.is_some() {
            return Err(
                darling::Error::custom("Optional fields cannot have a default").with_span(&ident),
            );
        }

        Ok(EnvField {
            ident,
            scalar,
            optional,
            key,
            default: self.default.as_ref().map(|d| d.0.clone()),
        })
    }
}

impl EnvField {
    /// `Struct.field`, used to label errors.
    pub fn path(&self, struct_name: &Ident) -> String {
        format!("{}.{}", struct_name, self.ident.unraw())
    }
}

fn parse_option(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };

    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let PathArguments::AngleBracketed(generic_args) = &segment.arguments else {
        return None;
    };

    match generic_args.args.first() {
        Some(GenericArgument::Type(inner)) if generic_args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, LitStr};

#[derive(deluxe::ParseMetaItem)]
#[deluxe(attributes(scoring_feature))]
struct FeatureAttributes(syn::Ident, #[deluxe(flatten)] FeatureKey);

#[derive(deluxe::ParseMetaItem)]
struct FeatureKey {
  name: LitStr,
}

/// Turns a bare `score_feature` function into a unit struct implementing
/// `Feature`, named after the first argument and reporting `name` as its key.
///
/// The key must be lower snake case, it is what ends up in the serialized
/// feature vector.
///
/// ```rust,ignore
/// #[scoring_feature(ExactMatch, name = "exact_match")]
/// fn score_feature(&self, _bump: &Bump, lhs: &ParsedQuery, rhs: &Candidate) -> f64 {
///   if lhs.clean_name == rhs.name { 1.0 } else { 0.0 }
/// }
/// ```
#[proc_macro_attribute]
pub fn scoring_feature(attrs: TokenStream, input: TokenStream) -> TokenStream {
  match expand(attrs.into(), input.into()) {
    Ok(tokens) => tokens.into(),
    Err(err) => err.into_compile_error().into(),
  }
}

fn expand(attrs: proc_macro2::TokenStream, input: proc_macro2::TokenStream) -> syn::Result<proc_macro2::TokenStream> {
  let FeatureAttributes(ident, FeatureKey { name }) = deluxe::parse2::<FeatureAttributes>(attrs)?;
  let func = syn::parse2::<ItemFn>(input)?;

  if func.sig.ident != "score_feature" {
    return Err(syn::Error::new_spanned(&func.sig.ident, "scoring features must be implemented by a function named `score_feature`"));
  }

  check_key(&name.value()).map_err(|reason| syn::Error::new(name.span(), reason))?;

  let doc = format!("Scores the `{}` feature.", name.value());

  Ok(quote! {
    #[doc = #doc]
    #[derive(Clone, Copy, Debug)]
    pub struct #ident;

    impl Feature for #ident {
      fn name(&self) -> &'static str {
        #name
      }

      #[tracing::instrument(level = "trace", name = #name, skip_all, fields(entry_id = rhs.id))]
      #func
    }
  })
}

fn check_key(key: &str) -> Result<(), String> {
  if key.is_empty() {
    return Err("feature key must not be empty".into());
  }

  if key.starts_with('_') || key.ends_with('_') || key.contains("__") {
    return Err(format!("feature key `{key}` has a stray underscore"));
  }

  if !key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') || !key.starts_with(|c: char| c.is_ascii_lowercase()) {
    return Err(format!("feature key `{key}` must be lower snake case"));
  }

  Ok(())
}

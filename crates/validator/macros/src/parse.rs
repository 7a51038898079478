//! Parsing of `#[valid(...)]` field attributes

use syn::{Attribute, LitStr};

/// Field attributes.
///
/// ```ignore
/// #[valid("required|email")]
/// #[valid(tag = "required|email", key = "contact")]
/// #[valid(skip)]
/// ```
#[derive(Debug, Default)]
pub(crate) struct FieldAttrs {
    pub tag: Option<LitStr>,
    pub key: Option<LitStr>,
    pub skip: bool,
}

impl FieldAttrs {
    pub(crate) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("valid") {
                continue;
            }

            if let Ok(tag) = attr.parse_args::<LitStr>() {
                result.set_tag(tag)?;
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("tag") {
                    let value: LitStr = meta.value()?.parse()?;
                    return result.set_tag(value);
                }

                if meta.path.is_ident("key") {
                    let value: LitStr = meta.value()?.parse()?;
                    if result.key.is_some() {
                        return Err(meta.error("duplicate `key`"));
                    }
                    result.key = Some(value);
                    return Ok(());
                }

                if meta.path.is_ident("skip") {
                    result.skip = true;
                    return Ok(());
                }

                Err(meta.error("unknown attribute; expected a tag string, `tag`, `key` or `skip`"))
            })?;
        }

        Ok(result)
    }

    fn set_tag(&mut self, tag: LitStr) -> syn::Result<()> {
        if self.tag.is_some() {
            return Err(syn::Error::new(tag.span(), "field already has a validation tag"));
        }
        self.tag = Some(tag);
        Ok(())
    }
}

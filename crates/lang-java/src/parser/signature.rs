use crate::naming::{INNER_CLASS_SEPARATOR, qualify};
use immutagen_api::{ModelError, ModelResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// `package.Name$Inner<Generic>`, every part but the name optional.
/// Word characters are ASCII only.
static SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<prefix>((?-u:\w)+\.)*)(?P<outer>(?-u:\w)+)(\$(?P<inner>(?-u:\w)+))?(<(?P<generic>(?-u:\w).*)>)?$",
    )
    .expect("Failed to compile signature grammar - this is a fatal error")
});

/// The components of a parsed type signature.
///
/// For inner classes the enclosing class is folded into `package`, so
/// `a.b.Outer$Inner` yields package `a.b.Outer` and name `Inner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureParts<'a> {
    pub package: Option<String>,
    pub name: &'a str,
    pub generic: Option<&'a str>,
}

pub fn parse_signature(signature: &str) -> ModelResult<SignatureParts<'_>> {
    let caps = SIGNATURE.captures(signature).ok_or_else(|| {
        ModelError::MalformedTypeSignature(format!(
            "'{}' does not match package.Name{}Inner<Generic>",
            signature, INNER_CLASS_SEPARATOR
        ))
    })?;

    let prefix = caps
        .name("prefix")
        .map(|m| m.as_str())
        .and_then(|p| p.strip_suffix('.'))
        .filter(|p| !p.is_empty());
    let outer = caps.name("outer").map_or("", |m| m.as_str());

    let (package, name) = match caps.name("inner") {
        Some(inner) => (Some(qualify(prefix, outer)), inner.as_str()),
        None => (prefix.map(str::to_string), outer),
    };

    if name.is_empty() {
        return Err(ModelError::MalformedTypeSignature(format!(
            "'{}' resolves to an empty type name",
            signature
        )));
    }

    Ok(SignatureParts {
        package,
        name,
        generic: caps.name("generic").map(|m| m.as_str()),
    })
}

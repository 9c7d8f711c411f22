use super::import::Import;
use super::modifiers::Final;
use super::types::Type;
use crate::naming::is_identifier;
use crate::resolve::{Annotations, Imports};
use immutagen_api::{ModelResult, check};
use std::fmt;

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    ty: Type,
    final_: Final,
    annotations: Annotations,
}

impl Attribute {
    pub fn new(
        name: impl Into<String>,
        ty: Type,
        final_: Final,
        annotations: Annotations,
    ) -> ModelResult<Self> {
        let name = name.into();
        check::not_empty(&name, "parameter name")?;
        check::argument(
            is_identifier(&name),
            format!("parameter name '{}' is not an identifier", name),
        )?;
        Ok(Self {
            name,
            ty,
            final_,
            annotations,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn final_(&self) -> Final {
        self.final_
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn imports(&self) -> Imports {
        self.annotations
            .imports()
            .copy_and_add([Import::from_type(&self.ty)])
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.annotations.render_inline())?;
        if let Some(keyword) = self.final_.keyword() {
            write!(f, "{} ", keyword)?;
        }
        write!(f, "{} {}", self.ty.simple_declaration(), self.name)
    }
}

/// Render a parameter list without the surrounding parentheses.
pub(crate) fn render_parameters(attributes: &[Attribute]) -> String {
    attributes
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reject two parameters with the same name.
pub(crate) fn check_unique_names(attributes: &[Attribute], owner: &str) -> ModelResult<()> {
    for (i, attribute) in attributes.iter().enumerate() {
        check::argument(
            attributes[..i].iter().all(|a| a.name != attribute.name),
            format!("duplicate parameter '{}' in {}", attribute.name, owner),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let attr = Attribute::new(
            "values",
            Type::parse("java.util.List<String>").unwrap(),
            Final::Final,
            Annotations::parse(["javax.annotation.Nonnull"]).unwrap(),
        )
        .unwrap();
        assert_eq!(attr.to_string(), "@Nonnull final List<String> values");
    }

    #[test]
    fn test_imports_include_type_and_annotations() {
        let attr = Attribute::new(
            "values",
            Type::parse("java.util.List<String>").unwrap(),
            Final::Undefined,
            Annotations::parse(["javax.annotation.Nonnull"]).unwrap(),
        )
        .unwrap();
        let rendered: Vec<String> = attr.imports().iter().map(|i| i.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["import javax.annotation.Nonnull;", "import java.util.List;"]
        );
    }

    #[test]
    fn test_rejects_bad_name() {
        let ty = Type::parse("int").unwrap();
        assert!(Attribute::new("", ty.clone(), Final::Undefined, Annotations::empty()).is_err());
        assert!(Attribute::new("2x", ty, Final::Undefined, Annotations::empty()).is_err());
    }
}

use super::import::Import;
use super::modifiers::{Final, Static, Visibility, keyword_prefix};
use super::types::Type;
use crate::naming::{INDENT, is_identifier};
use crate::resolve::{Annotations, Imports};
use immutagen_api::{ModelResult, check};
use std::fmt;

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    ty: Type,
    visibility: Visibility,
    static_: Static,
    final_: Final,
    annotations: Annotations,
    initializer: Option<String>,
}

pub struct FieldBuilder {
    name: String,
    ty: Type,
    visibility: Visibility,
    static_: Static,
    final_: Final,
    annotations: Annotations,
    initializer: Option<String>,
}

impl Field {
    pub fn builder(name: impl Into<String>, ty: Type) -> FieldBuilder {
        FieldBuilder {
            name: name.into(),
            ty,
            visibility: Visibility::Undefined,
            static_: Static::Undefined,
            final_: Final::Undefined,
            annotations: Annotations::empty(),
            initializer: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn static_(&self) -> Static {
        self.static_
    }

    pub fn final_(&self) -> Final {
        self.final_
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn initializer(&self) -> Option<&str> {
        self.initializer.as_deref()
    }

    pub fn imports(&self) -> Imports {
        self.annotations
            .imports()
            .copy_and_add([Import::from_type(&self.ty)])
    }
}

impl FieldBuilder {
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self, static_: Static) -> Self {
        self.static_ = static_;
        self
    }

    pub fn final_(mut self, final_: Final) -> Self {
        self.final_ = final_;
        self
    }

    pub fn annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Source text of the initializer expression, without `=` or `;`.
    pub fn initializer(mut self, expression: impl Into<String>) -> Self {
        self.initializer = Some(expression.into());
        self
    }

    pub fn build(self) -> ModelResult<Field> {
        check::not_empty(&self.name, "field name")?;
        check::argument(
            is_identifier(&self.name),
            format!("field name '{}' is not an identifier", self.name),
        )?;
        if let Some(expression) = &self.initializer {
            check::not_empty(expression.trim(), "field initializer")?;
        }
        Ok(Field {
            name: self.name,
            ty: self.ty,
            visibility: self.visibility,
            static_: self.static_,
            final_: self.final_,
            annotations: self.annotations,
            initializer: self.initializer,
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.annotations.render_block(INDENT))?;
        write!(
            f,
            "{}{}{} {}",
            INDENT,
            keyword_prefix(&[
                self.visibility.keyword(),
                self.static_.keyword(),
                self.final_.keyword(),
            ]),
            self.ty.simple_declaration(),
            self.name
        )?;
        if let Some(expression) = &self.initializer {
            write!(f, " = {}", expression)?;
        }
        write!(f, ";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full() {
        let field = Field::builder("EMPTY", Type::parse("java.util.List<String>").unwrap())
            .visibility(Visibility::Private)
            .static_(Static::Static)
            .final_(Final::Final)
            .annotations(Annotations::parse(["javax.annotation.Nonnull"]).unwrap())
            .initializer("java.util.Collections.emptyList()")
            .build()
            .unwrap();
        assert_eq!(
            field.to_string(),
            "    @Nonnull\n    private static final List<String> EMPTY = java.util.Collections.emptyList();"
        );
    }

    #[test]
    fn test_render_plain() {
        let field = Field::builder("x", Type::parse("int").unwrap())
            .build()
            .unwrap();
        assert_eq!(field.to_string(), "    int x;");
    }

    #[test]
    fn test_rejects_invalid_name_and_blank_initializer() {
        let ty = Type::parse("int").unwrap();
        assert!(Field::builder("a b", ty.clone()).build().is_err());
        assert!(Field::builder("x", ty).initializer("  ").build().is_err());
    }
}

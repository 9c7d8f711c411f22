use super::attribute::{Attribute, check_unique_names, render_parameters};
use super::import::Import;
use super::modifiers::{Abstract, Final, Static, Visibility, keyword_prefix};
use super::types::Type;
use crate::naming::{INDENT, is_identifier};
use crate::resolve::{Annotations, Imports};
use immutagen_api::{ModelResult, check};
use std::fmt;

/// A method declaration with its body given as source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    return_type: Type,
    visibility: Visibility,
    static_: Static,
    final_: Final,
    abstract_: Abstract,
    annotations: Annotations,
    attributes: Vec<Attribute>,
    body: Vec<String>,
}

pub struct MethodBuilder {
    inner: Method,
}

impl Method {
    pub fn builder(name: impl Into<String>, return_type: Type) -> MethodBuilder {
        MethodBuilder {
            inner: Method {
                name: name.into(),
                return_type,
                visibility: Visibility::Undefined,
                static_: Static::Undefined,
                final_: Final::Undefined,
                abstract_: Abstract::Undefined,
                annotations: Annotations::empty(),
                attributes: Vec::new(),
                body: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
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

    pub fn abstract_(&self) -> Abstract {
        self.abstract_
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Return type and method annotations, plus every parameter's contribution.
    pub fn imports(&self) -> Imports {
        let mut imports = self
            .annotations
            .imports()
            .copy_and_add([Import::from_type(&self.return_type)]);
        for attribute in &self.attributes {
            imports = imports.merge(&attribute.imports());
        }
        imports
    }
}

impl MethodBuilder {
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.inner.visibility = visibility;
        self
    }

    pub fn static_(mut self, static_: Static) -> Self {
        self.inner.static_ = static_;
        self
    }

    pub fn final_(mut self, final_: Final) -> Self {
        self.inner.final_ = final_;
        self
    }

    pub fn abstract_(mut self, abstract_: Abstract) -> Self {
        self.inner.abstract_ = abstract_;
        self
    }

    pub fn annotations(mut self, annotations: Annotations) -> Self {
        self.inner.annotations = annotations;
        self
    }

    pub fn attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.inner.attributes = attributes;
        self
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.inner.attributes.push(attribute);
        self
    }

    pub fn body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.body = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> ModelResult<Method> {
        let method = self.inner;
        check::not_empty(&method.name, "method name")?;
        check::argument(
            is_identifier(&method.name),
            format!("method name '{}' is not an identifier", method.name),
        )?;
        check_unique_names(&method.attributes, &method.name)?;
        if method.abstract_.is_abstract() {
            check::argument(
                !method.final_.is_final() && !method.static_.is_static(),
                format!(
                    "abstract method '{}' cannot be final or static",
                    method.name
                ),
            )?;
            check::argument(
                method.body.is_empty(),
                format!("abstract method '{}' cannot have a body", method.name),
            )?;
        }
        Ok(method)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.annotations.render_block(INDENT))?;
        write!(
            f,
            "{}{}{} {}({})",
            INDENT,
            keyword_prefix(&[
                self.visibility.keyword(),
                self.static_.keyword(),
                self.final_.keyword(),
                self.abstract_.keyword(),
            ]),
            self.return_type.simple_declaration(),
            self.name,
            render_parameters(&self.attributes)
        )?;
        if self.abstract_.is_abstract() {
            return write!(f, ";");
        }
        writeln!(f, " {{")?;
        for line in &self.body {
            writeln!(f, "{}{}{}", INDENT, INDENT, line)?;
        }
        write!(f, "{}}}", INDENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(name: &str, ty: &str) -> Attribute {
        Attribute::new(
            name,
            Type::parse(ty).unwrap(),
            Final::Final,
            Annotations::empty(),
        )
        .unwrap()
    }

    #[test]
    fn test_render_concrete() {
        let method = Method::builder("withX", Type::parse("geo.Point").unwrap())
            .visibility(Visibility::Public)
            .annotations(Annotations::parse(["javax.annotation.Nonnull"]).unwrap())
            .attribute(attr("x", "int"))
            .body(["return new Point(x, this.y);"])
            .build()
            .unwrap();
        assert_eq!(
            method.to_string(),
            "    @Nonnull\n    public Point withX(final int x) {\n        return new Point(x, this.y);\n    }"
        );
    }

    #[test]
    fn test_render_abstract() {
        let method = Method::builder("area", Type::parse("double").unwrap())
            .visibility(Visibility::Public)
            .abstract_(Abstract::Abstract)
            .build()
            .unwrap();
        assert_eq!(method.to_string(), "    public abstract double area();");
    }

    #[test]
    fn test_abstract_conflicts() {
        let ty = Type::parse("void").unwrap();
        assert!(
            Method::builder("run", ty.clone())
                .abstract_(Abstract::Abstract)
                .final_(Final::Final)
                .build()
                .is_err()
        );
        assert!(
            Method::builder("run", ty.clone())
                .abstract_(Abstract::Abstract)
                .body(["return;"])
                .build()
                .is_err()
        );
        assert!(
            Method::builder("run", ty)
                .attribute(attr("a", "int"))
                .attribute(attr("a", "long"))
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_imports_cover_parameters() {
        let method = Method::builder("of", Type::parse("java.util.Optional<T>").unwrap())
            .attribute(attr("values", "java.util.List<T>"))
            .build()
            .unwrap();
        let imports: Vec<String> = method
            .imports()
            .iter()
            .map(|i| i.ty().to_string())
            .collect();
        assert_eq!(imports, vec!["java.util.Optional", "java.util.List"]);
    }
}

use super::attribute::{Attribute, check_unique_names, render_parameters};
use super::modifiers::{Visibility, keyword_prefix};
use crate::naming::{INDENT, is_identifier};
use crate::resolve::{Annotations, Imports};
use immutagen_api::{ModelResult, check};
use std::fmt;

/// A constructor of the class named `class_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    class_name: String,
    visibility: Visibility,
    annotations: Annotations,
    attributes: Vec<Attribute>,
    body: Vec<String>,
}

pub struct ConstructorBuilder {
    inner: Constructor,
}

impl Constructor {
    pub fn builder(class_name: impl Into<String>) -> ConstructorBuilder {
        ConstructorBuilder {
            inner: Constructor {
                class_name: class_name.into(),
                visibility: Visibility::Undefined,
                annotations: Annotations::empty(),
                attributes: Vec::new(),
                body: Vec::new(),
            },
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
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

    pub fn imports(&self) -> Imports {
        self.attributes
            .iter()
            .fold(self.annotations.imports(), |acc, a| acc.merge(&a.imports()))
    }
}

impl ConstructorBuilder {
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.inner.visibility = visibility;
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

    pub fn build(self) -> ModelResult<Constructor> {
        let constructor = self.inner;
        check::not_empty(&constructor.class_name, "constructor class name")?;
        check::argument(
            is_identifier(&constructor.class_name),
            format!(
                "constructor class name '{}' is not an identifier",
                constructor.class_name
            ),
        )?;
        check_unique_names(&constructor.attributes, &constructor.class_name)?;
        Ok(constructor)
    }
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.annotations.render_block(INDENT))?;
        writeln!(
            f,
            "{}{}{}({}) {{",
            INDENT,
            keyword_prefix(&[self.visibility.keyword()]),
            self.class_name,
            render_parameters(&self.attributes)
        )?;
        for line in &self.body {
            writeln!(f, "{}{}{}", INDENT, INDENT, line)?;
        }
        write!(f, "{}}}", INDENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Final, Type};

    #[test]
    fn test_render() {
        let constructor = Constructor::builder("Point")
            .visibility(Visibility::Private)
            .attribute(
                Attribute::new(
                    "x",
                    Type::parse("int").unwrap(),
                    Final::Final,
                    Annotations::empty(),
                )
                .unwrap(),
            )
            .body(["this.x = x;"])
            .build()
            .unwrap();
        assert_eq!(
            constructor.to_string(),
            "    private Point(final int x) {\n        this.x = x;\n    }"
        );
    }

    #[test]
    fn test_empty_body() {
        let constructor = Constructor::builder("Point").build().unwrap();
        assert_eq!(constructor.to_string(), "    Point() {\n    }");
    }

    #[test]
    fn test_rejects_invalid_class_name() {
        assert!(Constructor::builder("").build().is_err());
        assert!(Constructor::builder("geo.Point").build().is_err());
    }
}

//! JSON class descriptors and their conversion into the validated node graph.

use anyhow::{Context, Result};
use immutagen_java::{
    Abstract, Annotation, Annotations, Attribute, Clazz, Constructor, Field, Final, Imports,
    Interface, Method, Package, Static, Type, Visibility,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityKeyword {
    Public,
    Protected,
    Private,
}

fn visibility_of(keyword: Option<VisibilityKeyword>) -> Visibility {
    match keyword {
        Some(VisibilityKeyword::Public) => Visibility::Public,
        Some(VisibilityKeyword::Protected) => Visibility::Protected,
        Some(VisibilityKeyword::Private) => Visibility::Private,
        None => Visibility::Undefined,
    }
}

/// A class to render. `name` is the declaration and may carry type
/// parameters, e.g. `Box<T>`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClassDescriptor {
    #[serde(default)]
    pub package: Option<String>,
    pub name: String,
    #[serde(default)]
    pub visibility: Option<VisibilityKeyword>,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub visibility: Option<VisibilityKeyword>,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub initializer: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConstructorDescriptor {
    #[serde(default)]
    pub visibility: Option<VisibilityKeyword>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MethodDescriptor {
    pub name: String,
    pub return_type: String,
    #[serde(default)]
    pub visibility: Option<VisibilityKeyword>,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub body: Vec<String>,
}

/// An annotation removed because no import could qualify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedAnnotation {
    /// Where the annotation was written, e.g. `method getName`.
    pub site: String,
    pub annotation: Annotation,
}

/// A built class and the annotations requalification dropped from it.
#[derive(Debug, Clone)]
pub struct Assembled {
    pub clazz: Clazz,
    pub dropped: Vec<DroppedAnnotation>,
}

impl ClassDescriptor {
    /// Build the class. With `requalify`, unqualified annotations are
    /// resolved against the imports of the class as written.
    pub fn assemble(&self, requalify: bool) -> Result<Assembled> {
        let mut dropped = Vec::new();
        let raw = self.build(None, &mut dropped)?;
        if !requalify {
            return Ok(Assembled {
                clazz: raw,
                dropped,
            });
        }
        let known = raw.imports();
        let clazz = self.build(Some(&known), &mut dropped)?;
        Ok(Assembled { clazz, dropped })
    }

    fn build(&self, known: Option<&Imports>, dropped: &mut Vec<DroppedAnnotation>) -> Result<Clazz> {
        let mut resolver = AnnotationResolver { known, dropped };
        let class_name = self.name.split('<').next().unwrap_or_default().trim();

        let mut builder = Clazz::builder(self.name.as_str())
            .visibility(visibility_of(self.visibility))
            .final_(Final::from(self.is_final))
            .abstract_(Abstract::from(self.is_abstract))
            .annotations(resolver.resolve(&self.annotations, "class")?);
        if let Some(package) = &self.package {
            builder = builder.package(Package::of(package.as_str()).context("class package")?);
        }

        let interfaces = self
            .interfaces
            .iter()
            .map(|i| Interface::parse(i).with_context(|| format!("interface '{}'", i)))
            .collect::<Result<Vec<_>>>()?;
        builder = builder.interfaces(interfaces);

        for field in &self.fields {
            let site = format!("field {}", field.name);
            let mut field_builder = Field::builder(field.name.as_str(), parse_type(&field.ty, &site)?)
                .visibility(visibility_of(field.visibility))
                .static_(Static::from(field.is_static))
                .final_(Final::from(field.is_final))
                .annotations(resolver.resolve(&field.annotations, &site)?);
            if let Some(initializer) = &field.initializer {
                field_builder = field_builder.initializer(initializer.as_str());
            }
            builder = builder.field(field_builder.build().context(site)?);
        }

        for (index, constructor) in self.constructors.iter().enumerate() {
            let site = format!("constructor #{}", index + 1);
            let built = Constructor::builder(class_name)
                .visibility(visibility_of(constructor.visibility))
                .annotations(resolver.resolve(&constructor.annotations, &site)?)
                .attributes(resolver.parameters(&constructor.parameters, &site)?)
                .body(constructor.body.iter().map(String::as_str))
                .build()
                .context(site)?;
            builder = builder.constructor(built);
        }

        for method in &self.methods {
            let site = format!("method {}", method.name);
            let built = Method::builder(method.name.as_str(), parse_type(&method.return_type, &site)?)
                .visibility(visibility_of(method.visibility))
                .static_(Static::from(method.is_static))
                .final_(Final::from(method.is_final))
                .abstract_(Abstract::from(method.is_abstract))
                .annotations(resolver.resolve(&method.annotations, &site)?)
                .attributes(resolver.parameters(&method.parameters, &site)?)
                .body(method.body.iter().map(String::as_str))
                .build()
                .context(site)?;
            builder = builder.method(built);
        }

        builder
            .build()
            .with_context(|| format!("class '{}'", self.name))
    }
}

fn parse_type(signature: &str, site: &str) -> Result<Type> {
    Type::parse(signature).with_context(|| format!("type of {}", site))
}

struct AnnotationResolver<'a> {
    known: Option<&'a Imports>,
    dropped: &'a mut Vec<DroppedAnnotation>,
}

impl AnnotationResolver<'_> {
    fn resolve(&mut self, signatures: &[String], site: &str) -> Result<Annotations> {
        let annotations =
            Annotations::parse(signatures).with_context(|| format!("annotations of {}", site))?;
        let Some(known) = self.known else {
            return Ok(annotations);
        };
        let resolution = annotations.resolve(known);
        self.dropped
            .extend(resolution.unresolved.into_iter().map(|annotation| DroppedAnnotation {
                site: site.to_string(),
                annotation,
            }));
        Ok(resolution.resolved)
    }

    fn parameters(&mut self, parameters: &[ParameterDescriptor], owner: &str) -> Result<Vec<Attribute>> {
        parameters
            .iter()
            .map(|p| {
                let site = format!("parameter {} of {}", p.name, owner);
                let annotations = self.resolve(&p.annotations, &site)?;
                Attribute::new(
                    p.name.as_str(),
                    parse_type(&p.ty, &site)?,
                    Final::from(p.is_final),
                    annotations,
                )
                .context(site)
            })
            .collect()
    }
}

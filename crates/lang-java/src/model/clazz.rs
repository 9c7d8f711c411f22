//! The class aggregate and its source renderer.
//!
//! A [`Clazz`] is assembled once through [`ClazzBuilder`]; its import list and
//! its text are recomputed from the full node graph on every call.

use super::constructor::Constructor;
use super::field::Field;
use super::generic::GenericDeclaration;
use super::interface::Interface;
use super::method::Method;
use super::modifiers::{Abstract, Final, Visibility, keyword_prefix};
use super::package::Package;
use crate::naming::is_identifier;
use crate::resolve::{Annotations, Imports};
use immutagen_api::{ModelResult, check};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clazz {
    package: Package,
    name: String,
    generic: GenericDeclaration,
    visibility: Visibility,
    final_: Final,
    abstract_: Abstract,
    annotations: Annotations,
    interfaces: Vec<Interface>,
    fields: Vec<Field>,
    constructors: Vec<Constructor>,
    methods: Vec<Method>,
}

pub struct ClazzBuilder {
    declaration: String,
    package: Package,
    visibility: Visibility,
    final_: Final,
    abstract_: Abstract,
    annotations: Annotations,
    interfaces: Vec<Interface>,
    fields: Vec<Field>,
    constructors: Vec<Constructor>,
    methods: Vec<Method>,
}

impl Clazz {
    /// Start a class from its declaration, e.g. `Point` or `Box<T>`.
    pub fn builder(declaration: impl Into<String>) -> ClazzBuilder {
        ClazzBuilder {
            declaration: declaration.into(),
            package: Package::Undefined,
            visibility: Visibility::Undefined,
            final_: Final::Undefined,
            abstract_: Abstract::Undefined,
            annotations: Annotations::empty(),
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generic_declaration(&self) -> &GenericDeclaration {
        &self.generic
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
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

    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// The import statements this class needs: every contribution, without
    /// primitives or unqualified types, ordered by name.
    pub fn imports(&self) -> Imports {
        Imports::all_of(self).filter().sort_by_name()
    }
}

impl ClazzBuilder {
    pub fn package(mut self, package: Package) -> Self {
        self.package = package;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn final_(mut self, final_: Final) -> Self {
        self.final_ = final_;
        self
    }

    pub fn abstract_(mut self, abstract_: Abstract) -> Self {
        self.abstract_ = abstract_;
        self
    }

    pub fn annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn interfaces(mut self, interfaces: Vec<Interface>) -> Self {
        self.interfaces = interfaces;
        self
    }

    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn constructors(mut self, constructors: Vec<Constructor>) -> Self {
        self.constructors = constructors;
        self
    }

    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn build(self) -> ModelResult<Clazz> {
        let declaration = self.declaration.trim();
        check::not_empty(declaration, "class declaration")?;
        let name = declaration
            .split('<')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        check::argument(
            is_identifier(&name),
            format!("class name '{}' is not an identifier", name),
        )?;

        check::state(
            !(self.abstract_.is_abstract() && self.final_.is_final()),
            "A class can be either abstract or final, not both",
        )?;
        for (i, field) in self.fields.iter().enumerate() {
            check::state(
                self.fields[..i].iter().all(|f| f.name() != field.name()),
                format!("duplicate field '{}' in class {}", field.name(), name),
            )?;
        }
        for constructor in &self.constructors {
            check::state(
                constructor.class_name() == name,
                format!(
                    "constructor of '{}' does not belong to class {}",
                    constructor.class_name(),
                    name
                ),
            )?;
        }

        Ok(Clazz {
            generic: GenericDeclaration::parse_from(declaration),
            name,
            package: self.package,
            visibility: self.visibility,
            final_: self.final_,
            abstract_: self.abstract_,
            annotations: self.annotations,
            interfaces: self.interfaces,
            fields: self.fields,
            constructors: self.constructors,
            methods: self.methods,
        })
    }
}

impl fmt::Display for Clazz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(package) = self.package.name() {
            writeln!(f, "package {};", package)?;
            writeln!(f)?;
        }

        write!(f, "{}", self.imports())?;
        writeln!(f)?;

        write!(f, "{}", self.annotations.render_block(""))?;
        write!(
            f,
            "{}class {}{}",
            keyword_prefix(&[
                self.visibility.keyword(),
                self.final_.keyword().or(self.abstract_.keyword()),
            ]),
            self.name,
            self.generic
        )?;
        if !self.interfaces.is_empty() {
            let names: Vec<String> = self.interfaces.iter().map(|i| i.to_string()).collect();
            write!(f, " implements {}", names.join(", "))?;
        }
        writeln!(f, " {{")?;
        writeln!(f)?;

        for field in &self.fields {
            writeln!(f, "{}", field)?;
            writeln!(f)?;
        }
        for constructor in &self.constructors {
            writeln!(f, "{}", constructor)?;
            writeln!(f)?;
        }
        for method in &self.methods {
            writeln!(f, "{}", method)?;
            writeln!(f)?;
        }

        writeln!(f, "}}")
    }
}

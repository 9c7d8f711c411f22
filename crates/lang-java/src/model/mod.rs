pub mod annotation;
pub mod attribute;
pub mod clazz;
pub mod constructor;
pub mod field;
pub mod generic;
pub mod import;
pub mod interface;
pub mod method;
pub mod modifiers;
pub mod package;
pub mod types;

pub use annotation::Annotation;
pub use attribute::Attribute;
pub use clazz::{Clazz, ClazzBuilder};
pub use constructor::{Constructor, ConstructorBuilder};
pub use field::{Field, FieldBuilder};
pub use generic::GenericDeclaration;
pub use import::Import;
pub use interface::Interface;
pub use method::{Method, MethodBuilder};
pub use modifiers::{Abstract, Final, Static, Visibility};
pub use package::Package;
pub use types::Type;

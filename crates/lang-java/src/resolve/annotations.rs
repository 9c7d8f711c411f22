use super::imports::Imports;
use crate::model::{Annotation, Import};
use immutagen_api::ModelResult;
use indexmap::IndexSet;

/// An ordered list of annotations on a single construct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    entries: Vec<Annotation>,
}

/// Outcome of requalifying annotations against an import set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: Annotations,
    /// Unqualified annotations with no matching import; these are dropped.
    pub unresolved: Vec<Annotation>,
}

impl Annotations {
    pub fn new(entries: Vec<Annotation>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse<I, S>(signatures: I) -> ModelResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        signatures
            .into_iter()
            .map(|s| Annotation::parse(s.as_ref()))
            .collect::<ModelResult<Vec<_>>>()
            .map(Self::new)
    }

    /// Requalify package-less annotations against `imports`.
    ///
    /// Qualified annotations are kept as they are. An unqualified one is
    /// replaced by the type of the first import with the same simple name;
    /// without such an import it is reported in [`Resolution::unresolved`].
    /// The resolved set is deduplicated by type in insertion order.
    pub fn resolve(&self, imports: &Imports) -> Resolution {
        let mut resolved = IndexSet::new();
        let mut unresolved = Vec::new();
        for annotation in &self.entries {
            if annotation.is_qualified() {
                resolved.insert(annotation.clone());
                continue;
            }
            match imports.find(annotation.ty().name()) {
                Some(import) => {
                    resolved.insert(Annotation::new(import.ty().clone()));
                }
                None => unresolved.push(annotation.clone()),
            }
        }
        Resolution {
            resolved: Annotations::new(resolved.into_iter().collect()),
            unresolved,
        }
    }

    /// Like [`Annotations::resolve`], silently dropping unresolved annotations.
    pub fn remove_unqualified(&self, imports: &Imports) -> Annotations {
        self.resolve(imports).resolved
    }

    pub fn imports(&self) -> Imports {
        self.entries
            .iter()
            .map(|a| Import::from_type(a.ty()))
            .collect()
    }

    pub fn contains(&self, annotation: &Annotation) -> bool {
        self.entries.contains(annotation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One annotation per line, each prefixed by `indent`.
    pub(crate) fn render_block(&self, indent: &str) -> String {
        self.entries
            .iter()
            .map(|a| format!("{}{}\n", indent, a))
            .collect()
    }

    /// All annotations on one line, each followed by a space.
    pub(crate) fn render_inline(&self) -> String {
        self.entries.iter().map(|a| format!("{} ", a)).collect()
    }
}

impl FromIterator<Annotation> for Annotations {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

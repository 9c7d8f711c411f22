use crate::model::{Clazz, Import};
use indexmap::IndexSet;
use std::fmt;

/// An insertion-ordered, deduplicated set of imports.
///
/// Equality is set equality; use [`Imports::as_list`] to compare order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    entries: IndexSet<Import>,
}

impl Imports {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(imports: impl IntoIterator<Item = Import>) -> Self {
        Self {
            entries: imports.into_iter().collect(),
        }
    }

    /// Union of every import contributed by the class and its members.
    ///
    /// The result is unfiltered and unsorted; primitives and unqualified
    /// references are still present.
    pub fn all_of(clazz: &Clazz) -> Self {
        let mut all = clazz.annotations().imports();
        for constructor in clazz.constructors() {
            all = all.merge(&constructor.imports());
        }
        for field in clazz.fields() {
            all = all.merge(&field.imports());
        }
        all = all.copy_and_add(clazz.interfaces().iter().map(|i| i.import()));
        for method in clazz.methods() {
            all = all.merge(&method.imports());
        }
        all
    }

    pub fn copy_and_add(&self, imports: impl IntoIterator<Item = Import>) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(imports);
        Self { entries }
    }

    pub fn merge(&self, other: &Imports) -> Self {
        self.copy_and_add(other.iter().cloned())
    }

    /// Keep only imports whose type has a package.
    ///
    /// Primitives and unqualified references need no import statement.
    pub fn filter(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|import| import.ty().is_qualified())
                .cloned()
                .collect(),
        }
    }

    /// Order by rendered type; entries without a package sort last.
    pub fn sort_by_name(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        Self { entries }
    }

    /// First import, in insertion order, whose simple name is `name`.
    ///
    /// Two imports sharing a simple name from different packages are
    /// ambiguous; the earlier one wins.
    pub fn find(&self, name: &str) -> Option<&Import> {
        self.entries.iter().find(|import| import.name() == name)
    }

    pub fn contains(&self, import: &Import) -> bool {
        self.entries.contains(import)
    }

    pub fn as_list(&self) -> Vec<Import> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn sort_key(import: &Import) -> (bool, String) {
    (!import.ty().is_qualified(), import.ty().to_string())
}

impl FromIterator<Import> for Imports {
    fn from_iter<I: IntoIterator<Item = Import>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a> IntoIterator for &'a Imports {
    type Item = &'a Import;
    type IntoIter = indexmap::set::Iter<'a, Import>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One `import ...;` statement per line.
impl fmt::Display for Imports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for import in &self.entries {
            writeln!(f, "{}", import)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(s: &str) -> Import {
        Import::of(s).unwrap()
    }

    #[test]
    fn test_deduplicates_preserving_order() {
        let imports = Imports::of([
            import("z.Z"),
            import("java.util.List<String>"),
            import("java.util.List"),
        ]);
        assert_eq!(imports.len(), 2);
        assert_eq!(imports.as_list(), vec![import("z.Z"), import("java.util.List")]);
    }

    #[test]
    fn test_filter_drops_unqualified() {
        let imports = Imports::of([import("int"), import("String"), import("java.util.List")]);
        let filtered = imports.filter();
        assert_eq!(filtered.as_list(), vec![import("java.util.List")]);
        assert_eq!(imports.len(), 3);
    }

    #[test]
    fn test_sort_by_name_puts_unqualified_last() {
        let sorted = Imports::of([import("Zeta"), import("z.Z"), import("a.A"), import("Alpha")])
            .sort_by_name();
        assert_eq!(
            sorted.as_list(),
            vec![import("a.A"), import("z.Z"), import("Alpha"), import("Zeta")]
        );
    }

    #[test]
    fn test_find_first_match_wins() {
        let imports = Imports::of([import("java.awt.List"), import("java.util.List")]);
        assert_eq!(imports.find("List"), Some(&import("java.awt.List")));
        assert_eq!(imports.find("Map"), None);
    }

    #[test]
    fn test_copy_and_add_leaves_receiver() {
        let base = Imports::of([import("a.A")]);
        let extended = base.copy_and_add([import("b.B")]);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert!(extended.contains(&import("b.B")));
    }

    #[test]
    fn test_display() {
        let imports = Imports::of([import("a.A"), import("b.B")]);
        assert_eq!(imports.to_string(), "import a.A;\nimport b.B;\n");
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar of a type *declaration* (`Name<T, U>`), as opposed to a type use.
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(((?-u:\w)(?-u:\w))*)(<((?-u:\w)+.*)>)?")
        .expect("Failed to compile declaration grammar - this is a fatal error")
});

/// Extract the raw contents of the first `<...>` clause of a declaration.
///
/// The clause is greedy up to the last `>`, so `Foo<T> extends Bar<U>`
/// yields `T> extends Bar<U`.
pub fn generic_clause(declaration: &str) -> Option<&str> {
    DECLARATION
        .captures_iter(declaration)
        .find_map(|caps| caps.get(4))
        .map(|m| m.as_str())
}

/// Separator used between packages and between package/class.
pub const TYPE_SEPARATOR: char = '.';

/// Separator between an enclosing class and an inner class in binary names.
pub const INNER_CLASS_SEPARATOR: char = '$';

/// Indentation of one nesting level in rendered source.
pub const INDENT: &str = "    ";

/// Join a package path and a simple name.
///
/// # Examples
/// ```
/// use immutagen_java::naming::qualify;
/// assert_eq!(qualify(Some("java.util"), "List"), "java.util.List");
/// assert_eq!(qualify(None, "int"), "int");
/// ```
pub fn qualify(package: Option<&str>, name: &str) -> String {
    match package {
        Some(pkg) => format!("{}{}{}", pkg, TYPE_SEPARATOR, name),
        None => name.to_string(),
    }
}

/// Check whether a name is one of the Java primitive keywords (including `void`).
pub fn is_primitive(name: &str) -> bool {
    matches!(
        name,
        "boolean" | "byte" | "char" | "short" | "int" | "long" | "float" | "double" | "void"
    )
}

/// Check whether a name is a plain Java identifier (letters, digits, `_`, `$`;
/// not starting with a digit).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

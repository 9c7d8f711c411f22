use anyhow::{Context, Result};
use immutagen_java::Type;

/// Parsed components of `signature`, either as JSON or as an aligned
/// `key: value` listing.
pub fn describe(signature: &str, json: bool) -> Result<String> {
    let ty = Type::parse(signature).with_context(|| format!("parsing '{}'", signature))?;
    if json {
        return Ok(serde_json::to_string_pretty(&ty)?);
    }
    Ok(format!(
        "package: {}\nname:    {}\ngeneric: {}\nrender:  {}",
        ty.package().name().unwrap_or("<undefined>"),
        ty.name(),
        ty.generic_declaration().contents().unwrap_or("<undefined>"),
        ty
    ))
}

pub fn run(signature: &str, json: bool) -> Result<()> {
    println!("{}", describe(signature, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use immutagen_api::ModelError;

    #[test]
    fn test_describe_inner_class() {
        let text = describe("java.util.Map$Entry<K, V>", false).unwrap();
        assert_eq!(
            text,
            "package: java.util.Map\nname:    Entry\ngeneric: K, V\nrender:  java.util.Map.Entry<K, V>"
        );
    }

    #[test]
    fn test_describe_primitive_as_json() {
        let json: serde_json::Value =
            serde_json::from_str(&describe("int", true).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "package": null, "name": "int", "generic": null })
        );
    }

    #[test]
    fn test_describe_malformed() {
        let err = describe("java..List", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ModelError>(),
            Some(ModelError::MalformedTypeSignature(_))
        ));
    }
}

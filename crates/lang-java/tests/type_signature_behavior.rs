mod common;

use common::ty;
use immutagen_api::ModelError;
use immutagen_java::{GenericDeclaration, Import, Package, Type};

#[test]
fn qualified_names_round_trip() {
    for input in [
        "java.util.List",
        "java.lang.String",
        "com.acme.v2.Thing2",
        "Point",
        "long",
    ] {
        assert_eq!(ty(input).to_string(), input, "round trip of {}", input);
    }
}

#[test]
fn generic_names_round_trip() {
    assert_eq!(
        ty("java.util.List<java.lang.String>").to_string(),
        "java.util.List<java.lang.String>"
    );
    assert_eq!(
        ty("java.util.Map<String, java.util.List<Integer>>").to_string(),
        "java.util.Map<String, java.util.List<Integer>>"
    );
}

#[test]
fn inner_class_moves_enclosing_class_into_package() {
    let entry = ty("java.util.Map$Entry");
    assert_eq!(entry.package(), &Package::of("java.util.Map").unwrap());
    assert_eq!(entry.name(), "Entry");
    assert_eq!(entry.generic_declaration(), &GenericDeclaration::Undefined);
}

#[test]
fn components_are_exposed() {
    let list = ty("java.util.List<T>");
    assert_eq!(list.package().name(), Some("java.util"));
    assert_eq!(list.name(), "List");
    assert_eq!(list.generic_declaration().contents(), Some("T"));

    let primitive = ty("int");
    assert_eq!(primitive.package(), &Package::Undefined);
    assert!(primitive.is_primitive());
}

#[test]
fn malformed_signatures_are_rejected() {
    for input in ["", " ", "java.util.List<", "java.util.List<>", "java..List", "List[]", "?"] {
        let err = Type::parse(input).unwrap_err();
        assert!(
            matches!(err, ModelError::MalformedTypeSignature(_)),
            "{:?} should be malformed, got {:?}",
            input,
            err
        );
    }
}

#[test]
fn non_ascii_identifiers_are_rejected() {
    for input in ["java.util.Lïst", "com.ącme.Money", "Map<ß, V>"] {
        let err = Type::parse(input).unwrap_err();
        assert!(
            matches!(err, ModelError::MalformedTypeSignature(_)),
            "{:?} should be malformed, got {:?}",
            input,
            err
        );
    }
}

#[test]
fn imports_never_carry_generics() {
    let import = Import::of("java.util.Map<K, V>").unwrap();
    assert_eq!(import.ty().to_string(), "java.util.Map");
    assert_eq!(import, Import::from_type(&ty("java.util.Map")));
}

#[test]
fn types_serialize_as_components() {
    let json = serde_json::to_value(ty("java.util.List<String>")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "package": "java.util",
            "name": "List",
            "generic": "String"
        })
    );

    let json = serde_json::to_value(ty("int")).unwrap();
    assert_eq!(json["package"], serde_json::Value::Null);
    assert_eq!(json["generic"], serde_json::Value::Null);
}

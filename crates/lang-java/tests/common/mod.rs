use immutagen_java::{
    Annotations, Attribute, Clazz, Constructor, Field, Final, Method, Package, Type, Visibility,
};

#[allow(dead_code)]
pub fn ty(signature: &str) -> Type {
    Type::parse(signature).unwrap()
}

#[allow(dead_code)]
pub fn private_final_field(name: &str, signature: &str, annotations: &[&str]) -> Field {
    Field::builder(name, ty(signature))
        .visibility(Visibility::Private)
        .final_(Final::Final)
        .annotations(Annotations::parse(annotations).unwrap())
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn param(name: &str, signature: &str, annotations: &[&str]) -> Attribute {
    Attribute::new(
        name,
        ty(signature),
        Final::Final,
        Annotations::parse(annotations).unwrap(),
    )
    .unwrap()
}

/// The `Point` value class used across rendering tests: two `int` fields
/// and nothing else.
#[allow(dead_code)]
pub fn point() -> Clazz {
    Clazz::builder("Point")
        .package(Package::of("geo").unwrap())
        .visibility(Visibility::Public)
        .final_(Final::Final)
        .field(private_final_field("x", "int", &[]))
        .field(private_final_field("y", "int", &[]))
        .build()
        .unwrap()
}

/// An immutable `Person` touching every import source: class annotation,
/// interface, field, constructor parameter, method return type and method
/// annotation.
#[allow(dead_code)]
pub fn person() -> Clazz {
    let constructor = Constructor::builder("Person")
        .visibility(Visibility::Public)
        .attribute(param("name", "java.lang.String", &["javax.annotation.Nonnull"]))
        .attribute(param("aliases", "java.util.List<String>", &[]))
        .body([
            "this.name = name;",
            "this.aliases = java.util.Collections.unmodifiableList(aliases);",
        ])
        .build()
        .unwrap();

    let name = Method::builder("getName", ty("String"))
        .visibility(Visibility::Public)
        .annotations(Annotations::parse(["javax.annotation.Nonnull"]).unwrap())
        .body(["return name;"])
        .build()
        .unwrap();

    let nickname = Method::builder("findNickname", ty("java.util.Optional<String>"))
        .visibility(Visibility::Public)
        .body(["return aliases.stream().findFirst();"])
        .build()
        .unwrap();

    Clazz::builder("Person")
        .package(Package::of("com.acme.people").unwrap())
        .visibility(Visibility::Public)
        .final_(Final::Final)
        .annotations(Annotations::parse(["javax.annotation.concurrent.Immutable"]).unwrap())
        .interfaces(vec![
            immutagen_java::Interface::parse("java.io.Serializable").unwrap(),
        ])
        .field(private_final_field("name", "String", &["javax.annotation.Nonnull"]))
        .field(private_final_field("aliases", "java.util.List<String>", &[]))
        .constructor(constructor)
        .method(name)
        .method(nickname)
        .build()
        .unwrap()
}

mod common;

use common::{person, point, private_final_field};
use immutagen_api::ModelError;
use immutagen_java::{Abstract, Clazz, Final, Interface, Method, Package, Type, Visibility};

#[test]
fn point_renders_without_imports() {
    let source = point().to_string();
    assert!(source.starts_with("package geo;"));
    assert!(source.contains("class Point"));
    assert!(source.trim_end().ends_with('}'));
    assert_eq!(source.lines().filter(|l| l.starts_with("import ")).count(), 0);
    assert_eq!(
        source,
        "package geo;\n\
         \n\
         \n\
         public final class Point {\n\
         \n\
         \x20   private final int x;\n\
         \n\
         \x20   private final int y;\n\
         \n\
         }\n"
    );
}

#[test]
fn empty_import_block_still_ends_with_blank_line() {
    let source = point().to_string();
    assert!(source.starts_with("package geo;\n\n\npublic final class Point {"));
}

#[test]
fn person_renders_in_canonical_order() {
    let expected = r#"package com.acme.people;

import java.io.Serializable;
import java.lang.String;
import java.util.List;
import java.util.Optional;
import javax.annotation.Nonnull;
import javax.annotation.concurrent.Immutable;

@Immutable
public final class Person implements Serializable {

    @Nonnull
    private final String name;

    private final List<String> aliases;

    public Person(@Nonnull final String name, final List<String> aliases) {
        this.name = name;
        this.aliases = java.util.Collections.unmodifiableList(aliases);
    }

    @Nonnull
    public String getName() {
        return name;
    }

    public Optional<String> findNickname() {
        return aliases.stream().findFirst();
    }

}
"#;
    assert_eq!(person().to_string(), expected);
}

#[test]
fn rendering_is_deterministic() {
    let clazz = person();
    assert_eq!(clazz.to_string(), clazz.to_string());
    assert_eq!(clazz.to_string(), person().to_string());
}

#[test]
fn abstract_and_final_always_conflict() {
    let variants = [
        Clazz::builder("A"),
        Clazz::builder("B").package(Package::of("x.y").unwrap()),
        Clazz::builder("C<T>")
            .visibility(Visibility::Public)
            .field(private_final_field("v", "T", &[])),
    ];
    for builder in variants {
        let err = builder
            .abstract_(Abstract::Abstract)
            .final_(Final::Final)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidClassState(
                "A class can be either abstract or final, not both".to_string()
            )
        );
    }
}

#[test]
fn abstract_class_with_multiple_interfaces() {
    let area = Method::builder("area", Type::parse("double").unwrap())
        .visibility(Visibility::Public)
        .abstract_(Abstract::Abstract)
        .build()
        .unwrap();
    let clazz = Clazz::builder("Shape<T>")
        .visibility(Visibility::Public)
        .abstract_(Abstract::Abstract)
        .interfaces(vec![
            Interface::parse("java.lang.Comparable<T>").unwrap(),
            Interface::parse("java.io.Serializable").unwrap(),
        ])
        .method(area)
        .build()
        .unwrap();

    let source = clazz.to_string();
    assert!(source.starts_with("import java.io.Serializable;\nimport java.lang.Comparable;\n\n"));
    assert!(source.contains(
        "public abstract class Shape<T> implements Comparable<T>, Serializable {\n"
    ));
    assert!(source.contains("    public abstract double area();\n"));
}

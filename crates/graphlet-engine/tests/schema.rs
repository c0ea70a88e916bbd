//! Schema building: registration, extension folding, and the build-time
//! checks.

use graphlet_engine::ast::OperationType;
use graphlet_engine::schema::ExtendedType;
use graphlet_engine::Schema;
use graphlet_engine::SchemaError;
use pretty_assertions::assert_eq;

#[test]
fn root_operations_come_from_the_schema_definition() {
    let schema = Schema::parse(
        "
        schema {
            query: RootQueryCustomType
            mutation: RootMutationCustomType
        }
        type RootQueryCustomType { ping: String }
        type RootMutationCustomType { pong: String }
        ",
    )
    .expect("schema builds");
    assert_eq!(
        schema.root_operation(OperationType::Query),
        Some(&"RootQueryCustomType".to_string())
    );
    assert_eq!(
        schema.root_operation(OperationType::Mutation),
        Some(&"RootMutationCustomType".to_string())
    );
    assert_eq!(schema.root_operation(OperationType::Subscription), None);
}

#[test]
fn conventional_root_types_apply_without_a_schema_definition() {
    let schema = Schema::parse("type Query { ping: String }").expect("schema builds");
    assert_eq!(
        schema.root_operation(OperationType::Query),
        Some(&"Query".to_string())
    );
    assert_eq!(schema.root_operation(OperationType::Mutation), None);
}

#[test]
fn built_in_scalars_are_always_registered() {
    let schema = Schema::parse("type Query { ping: String }").expect("schema builds");
    for name in ["Int", "Float", "String", "Boolean", "ID"] {
        assert!(
            matches!(schema.types.get(name), Some(ExtendedType::Scalar(_))),
            "missing built-in scalar {name}"
        );
    }
}

#[test]
fn types_may_be_referenced_before_they_are_defined() {
    let schema = Schema::parse(
        "
        type Query { me: User }
        type User { name: String }
        ",
    )
    .expect("schema builds");
    assert!(schema.get_object("User").is_some());
}

#[test]
fn extensions_fold_into_their_type() {
    let schema = Schema::parse(
        "
        type Query { ping: String }
        extend type Query { version: Int }
        enum Status { ACTIVE }
        extend enum Status { INACTIVE }
        union Pet = Dog
        extend union Pet = Cat
        type Dog { barks: Boolean }
        type Cat { meows: Boolean }
        ",
    )
    .expect("schema builds");

    let query = schema.get_object("Query").expect("Query exists");
    assert!(query.fields.contains_key("version"));

    let status = schema.get_enum("Status").expect("Status exists");
    assert_eq!(
        status.values.keys().cloned().collect::<Vec<_>>(),
        vec!["ACTIVE".to_string(), "INACTIVE".to_string()]
    );

    let pet = schema.get_union("Pet").expect("Pet exists");
    assert!(pet.members.contains("Cat"));
}

#[test]
fn an_extension_may_precede_its_definition() {
    let schema = Schema::parse(
        "
        extend type Query { version: Int }
        type Query { ping: String }
        ",
    )
    .expect("schema builds");
    let query = schema.get_object("Query").expect("Query exists");
    assert!(query.fields.contains_key("ping"));
    assert!(query.fields.contains_key("version"));
}

#[test]
fn duplicate_type_names_are_rejected() {
    let err = Schema::parse(
        "
        type Query { ping: String }
        type Thing { a: Int }
        enum Thing { A }
        ",
    )
    .expect_err("duplicate definition");
    assert_eq!(err, SchemaError::DuplicateTypeName("Thing".to_string()));
}

#[test]
fn extending_a_missing_type_is_rejected_at_build_time() {
    let err = Schema::parse(
        "
        type Query { ping: String }
        extend type Missing { a: Int }
        ",
    )
    .expect_err("orphan extension");
    assert_eq!(err, SchemaError::OrphanExtension("Missing".to_string()));
}

#[test]
fn extending_with_the_wrong_kind_is_rejected() {
    let err = Schema::parse(
        "
        type Query { ping: String }
        enum Status { ACTIVE }
        extend type Status { a: Int }
        ",
    )
    .expect_err("kind mismatch");
    assert_eq!(err, SchemaError::ExtensionKindMismatch("Status".to_string()));
}

#[test]
fn undefined_type_references_are_rejected_at_build_time() {
    let err = Schema::parse("type Query { me: Ghost }").expect_err("undefined reference");
    assert_eq!(err, SchemaError::UndefinedType("Ghost".to_string()));
}

#[test]
fn duplicate_root_operations_are_rejected() {
    let err = Schema::parse(
        "
        schema {
            query: A
            query: B
        }
        type A { ping: String }
        type B { ping: String }
        ",
    )
    .expect_err("duplicate root");
    assert_eq!(err, SchemaError::DuplicateRootOperation("query"));
}

#[test]
fn executable_definitions_are_rejected_in_schema_documents() {
    let err = Schema::parse(
        "
        type Query { ping: String }
        query Probe { ping }
        ",
    )
    .expect_err("executable definition");
    assert_eq!(err, SchemaError::UnexpectedExecutableDefinition);
}

#[test]
fn syntax_errors_surface_through_schema_parse() {
    let err = Schema::parse("type Query { ping: String").expect_err("syntax error");
    assert!(matches!(err, SchemaError::Parse(_)));
}

#[test]
fn field_definitions_expose_their_arguments() {
    let schema = Schema::parse(
        "
        type Query {
            search(term: String = \"*\", first: Int): [String]
        }
        ",
    )
    .expect("schema builds");
    let field = schema.type_field("Query", "search").expect("field exists");
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(field.arguments[0].name, "term");
    assert!(field.arguments[0].default_value.is_some());
    assert_eq!(field.arguments[1].ty.to_string(), "Int");
}

#[test]
fn built_in_directives_are_registered() {
    let schema = Schema::parse("type Query { ping: String }").expect("schema builds");
    for name in ["skip", "include", "deprecated"] {
        assert!(
            schema.directive_definitions.contains_key(name),
            "missing built-in directive @{name}"
        );
    }
}

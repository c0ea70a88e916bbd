//! End-to-end execution: field collection, result coercion, null
//! bubbling, and response ordering.

use crate::variables;
use graphlet_engine::execute;
use graphlet_engine::ExecutableDocument;
use graphlet_engine::JsonMap;
use graphlet_engine::ResolveError;
use graphlet_engine::ResolvedValue;
use graphlet_engine::Resolver;
use graphlet_engine::Response;
use graphlet_engine::Schema;
use pretty_assertions::assert_eq;
use serde_json::json;

const SDL: &str = r#"
schema {
    query: Query
    mutation: Mutation
}

type Query {
    hero: Character
    heroes: [Character!]
    color: Color
    badColor: Color
    requiredCount: Int!
    brokenCount: Int!
    wrapper: Wrapper
}

type Mutation {
    bump: Int
}

type Wrapper {
    requiredHero: Character!
}

type Character {
    name: String
    friends: [Character]
}

enum Color {
    RED
    GREEN
}
"#;

struct Character {
    name: &'static str,
    friends: Vec<Character>,
}

impl Resolver for Character {
    fn type_name(&self) -> &str {
        "Character"
    }

    fn resolve_field<'a>(
        &'a self,
        field_name: &'a str,
        _arguments: &'a JsonMap,
    ) -> Result<ResolvedValue<'a>, ResolveError> {
        match field_name {
            "name" => Ok(ResolvedValue::leaf(self.name)),
            "friends" => Ok(ResolvedValue::list(
                self.friends.iter().map(|friend| {
                    ResolvedValue::object(Character {
                        name: friend.name,
                        friends: Vec::new(),
                    })
                }),
            )),
            _ => Err(ResolveError::unknown_field(field_name, self)),
        }
    }
}

struct QueryRoot;

impl Resolver for QueryRoot {
    fn type_name(&self) -> &str {
        "Query"
    }

    fn resolve_field<'a>(
        &'a self,
        field_name: &'a str,
        _arguments: &'a JsonMap,
    ) -> Result<ResolvedValue<'a>, ResolveError> {
        match field_name {
            "hero" => Ok(ResolvedValue::object(Character {
                name: "R2-D2",
                friends: vec![
                    Character {
                        name: "Luke",
                        friends: Vec::new(),
                    },
                    Character {
                        name: "Leia",
                        friends: Vec::new(),
                    },
                ],
            })),
            "heroes" => Ok(ResolvedValue::List(Box::new(
                [
                    Ok(ResolvedValue::object(Character {
                        name: "Luke",
                        friends: Vec::new(),
                    })),
                    Err(ResolveError::new("droid offline")),
                ]
                .into_iter(),
            ))),
            "color" => Ok(ResolvedValue::leaf("RED")),
            "badColor" => Ok(ResolvedValue::leaf("MAGENTA")),
            "requiredCount" => Ok(ResolvedValue::leaf(7)),
            "brokenCount" => Ok(ResolvedValue::null()),
            "wrapper" => Ok(ResolvedValue::object(Wrapper)),
            _ => Err(ResolveError::unknown_field(field_name, self)),
        }
    }
}

struct Wrapper;

impl Resolver for Wrapper {
    fn type_name(&self) -> &str {
        "Wrapper"
    }

    fn resolve_field<'a>(
        &'a self,
        field_name: &'a str,
        _arguments: &'a JsonMap,
    ) -> Result<ResolvedValue<'a>, ResolveError> {
        match field_name {
            "requiredHero" => Ok(ResolvedValue::null()),
            _ => Err(ResolveError::unknown_field(field_name, self)),
        }
    }
}

struct MutationRoot {
    counter: std::cell::Cell<i64>,
}

impl Resolver for MutationRoot {
    fn type_name(&self) -> &str {
        "Mutation"
    }

    fn resolve_field<'a>(
        &'a self,
        field_name: &'a str,
        _arguments: &'a JsonMap,
    ) -> Result<ResolvedValue<'a>, ResolveError> {
        match field_name {
            "bump" => {
                self.counter.set(self.counter.get() + 1);
                Ok(ResolvedValue::leaf(self.counter.get()))
            }
            _ => Err(ResolveError::unknown_field(field_name, self)),
        }
    }
}

fn run(query: &str) -> Response {
    run_with(query, None, &QueryRoot)
}

fn run_with(query: &str, vars: Option<serde_json::Value>, root: &dyn Resolver) -> Response {
    let schema = Schema::parse(SDL).expect("test schema builds");
    let document = ExecutableDocument::parse(query).expect("test query parses");
    let vars = vars.map(variables).unwrap_or_default();
    execute(&schema, &document, None, &vars, root)
}

fn json(response: &Response) -> serde_json::Value {
    serde_json::to_value(response).expect("response serializes")
}

#[test]
fn nested_selection_sets_execute() {
    let response = run("{ hero { name friends { name } } }");
    assert_eq!(
        json(&response),
        json!({
            "data": {
                "hero": {
                    "name": "R2-D2",
                    "friends": [{"name": "Luke"}, {"name": "Leia"}],
                }
            }
        })
    );
}

#[test]
fn response_keys_keep_selection_order() {
    let response = run("{ color hero { name } requiredCount }");
    let data = serde_json::to_string(&response.data).expect("data serializes");
    let color = data.find("color").expect("color key");
    let hero = data.find("hero").expect("hero key");
    let count = data.find("requiredCount").expect("requiredCount key");
    assert!(color < hero && hero < count, "selection order lost: {data}");
}

#[test]
fn aliases_rename_response_keys() {
    let response = run("{ main: hero { name } again: hero { name } }");
    assert_eq!(
        json(&response),
        json!({
            "data": {
                "main": {"name": "R2-D2"},
                "again": {"name": "R2-D2"},
            }
        })
    );
}

#[test]
fn typename_resolves_without_a_field_definition() {
    let response = run("{ hero { __typename name } }");
    assert_eq!(
        json(&response),
        json!({"data": {"hero": {"__typename": "Character", "name": "R2-D2"}}})
    );
}

#[test]
fn skip_and_include_honor_literals_and_variables() {
    let response = run("{ color @skip(if: true) requiredCount }");
    assert_eq!(json(&response), json!({"data": {"requiredCount": 7}}));

    let response = run_with(
        "query ($keep: Boolean) { color @include(if: $keep) requiredCount }",
        Some(json!({"keep": false})),
        &QueryRoot,
    );
    assert_eq!(json(&response), json!({"data": {"requiredCount": 7}}));
}

#[test]
fn fragments_expand_into_the_selection() {
    let response = run(
        "
        { hero { ...characterFields } }
        fragment characterFields on Character { name }
        ",
    );
    assert_eq!(json(&response), json!({"data": {"hero": {"name": "R2-D2"}}}));
}

#[test]
fn enum_results_are_checked_against_members() {
    let response = run("{ color }");
    assert_eq!(json(&response), json!({"data": {"color": "RED"}}));

    let response = run("{ badColor }");
    assert_eq!(
        serde_json::to_value(&response.data).expect("data serializes"),
        json!({"badColor": null})
    );
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("expected enum Color"));
}

#[test]
fn a_null_non_null_field_bubbles_to_the_root() {
    let response = run("{ brokenCount }");
    assert_eq!(response.data, None);
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0]
        .message
        .contains("Non-null type Int! resolved to null"));
}

#[test]
fn bubbling_stops_at_the_nearest_nullable_ancestor() {
    let response = run("{ wrapper { requiredHero { name } } color }");
    assert_eq!(
        serde_json::to_value(&response.data).expect("data serializes"),
        json!({"wrapper": null, "color": "RED"})
    );
    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        serde_json::to_value(&response.errors[0].path).expect("path serializes"),
        json!(["wrapper", "requiredHero"])
    );
}

#[test]
fn a_failing_list_item_nullifies_the_list() {
    let response = run("{ heroes { name } color }");
    // Character! items cannot hold the null, [Character!] can.
    assert_eq!(
        serde_json::to_value(&response.data).expect("data serializes"),
        json!({"heroes": null, "color": "RED"})
    );
    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        serde_json::to_value(&response.errors[0].path).expect("path serializes"),
        json!(["heroes", 1])
    );
    assert!(response.errors[0].message.contains("droid offline"));
}

#[test]
fn sibling_fields_survive_a_field_error() {
    let response = run("{ badColor color }");
    assert_eq!(
        serde_json::to_value(&response.data).expect("data serializes"),
        json!({"badColor": null, "color": "RED"})
    );
}

#[test]
fn mutations_execute_their_root_fields_in_order() {
    let root = MutationRoot {
        counter: std::cell::Cell::new(0),
    };
    let response = run_with(
        "mutation { first: bump second: bump third: bump }",
        None,
        &root,
    );
    assert_eq!(
        json(&response),
        json!({"data": {"first": 1, "second": 2, "third": 3}})
    );
}

#[test]
fn unnamed_operation_selection_requires_a_single_operation() {
    let schema = Schema::parse(SDL).expect("test schema builds");
    let document = ExecutableDocument::parse(
        "query A { color } query B { requiredCount }",
    )
    .expect("test document parses");
    let response = execute(&schema, &document, None, &JsonMap::new(), &QueryRoot);
    assert_eq!(response.data, None);
    assert_eq!(response.errors.len(), 1);

    let response = execute(&schema, &document, Some("B"), &JsonMap::new(), &QueryRoot);
    assert_eq!(json(&response), json!({"data": {"requiredCount": 7}}));
}

#[test]
fn the_errors_key_is_omitted_when_empty() {
    let response = run("{ color }");
    let serialized = serde_json::to_string(&response).expect("response serializes");
    assert!(!serialized.contains("errors"), "{serialized}");
}

use crate::parser::grammar::{argument, description, input_value, name};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

const EXECUTABLE_LOCATIONS: [&str; 7] = [
    "QUERY",
    "MUTATION",
    "SUBSCRIPTION",
    "FIELD",
    "FRAGMENT_DEFINITION",
    "FRAGMENT_SPREAD",
    "INLINE_FRAGMENT",
];

const TYPE_SYSTEM_LOCATIONS: [&str; 11] = [
    "SCHEMA",
    "SCALAR",
    "OBJECT",
    "FIELD_DEFINITION",
    "ARGUMENT_DEFINITION",
    "INTERFACE",
    "UNION",
    "ENUM",
    "ENUM_VALUE",
    "INPUT_OBJECT",
    "INPUT_FIELD_DEFINITION",
];

/// *Directives*: Directive+
pub(crate) fn directives(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::DIRECTIVES);
    while p.at(TokenKind::At) {
        directive(p)?;
    }
    Ok(())
}

/// *Directive*: **@** Name Arguments?
fn directive(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::DIRECTIVE);
    p.bump(SyntaxKind::AT);
    name::name(p)?;
    if p.at(TokenKind::LParen) {
        argument::arguments(p)?;
    }
    Ok(())
}

/// *DirectiveDefinition*:
///     Description? **directive** **@** Name ArgumentsDefinition?
///     **on** DirectiveLocations
///
/// A directive definition has no body; `directive @x { … }` is a parse
/// error at the `{`.
pub(crate) fn directive_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::DIRECTIVE_DEFINITION);
    description::description(p);
    p.bump(SyntaxKind::directive_KW);
    p.expect(
        TokenKind::At,
        SyntaxKind::AT,
        "expected `@` before the directive name",
    )?;
    name::name(p)?;
    if p.at(TokenKind::LParen) {
        input_value::arguments_definition(p)?;
    }
    p.expect_word(
        "on",
        SyntaxKind::on_KW,
        "expected `on` before the directive locations",
    )?;
    directive_locations(p)
}

/// *DirectiveLocations*: **|**? DirectiveLocation (**|** DirectiveLocation)*
fn directive_locations(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::DIRECTIVE_LOCATIONS);
    if p.at(TokenKind::Pipe) {
        p.bump(SyntaxKind::PIPE);
    }
    directive_location(p)?;
    while p.at(TokenKind::Pipe) {
        p.bump(SyntaxKind::PIPE);
        directive_location(p)?;
    }
    Ok(())
}

fn directive_location(p: &mut Parser) -> Result<(), SyntaxError> {
    if p.at(TokenKind::Name) {
        let data = p.peek_data();
        if EXECUTABLE_LOCATIONS.contains(&data) {
            p.bump(SyntaxKind::EXECUTABLE_DIRECTIVE_LOCATION);
            return Ok(());
        }
        if TYPE_SYSTEM_LOCATIONS.contains(&data) {
            p.bump(SyntaxKind::TYPE_SYSTEM_DIRECTIVE_LOCATION);
            return Ok(());
        }
    }
    Err(p.unexpected("expected a directive location"))
}

#[cfg(test)]
mod test {
    use crate::parser::utils;
    use crate::SyntaxErrorKind::*;

    #[test]
    fn it_parses_a_directive_definition() {
        utils::check_shape(
            "
            directive @test(var1: Int = -42, var4: [String]) on FIELD_DEFINITION | SCHEMA
            ",
            r#"
            - document
                - type_system_definition
                    - directive_definition
                        - DIRECTIVE "directive"
                        - name
                            - IDENT "test"
                        - arguments_definition
                            - input_value_definition
                                - name
                                    - IDENT "var1"
                                - type
                                    - named_type
                                        - name
                                            - IDENT "Int"
                                - default_value
                                    - value
                                        - int_value
                                            - SIGNED_INT "-42"
                            - input_value_definition
                                - name
                                    - IDENT "var4"
                                - type
                                    - list_type
                                        - type
                                            - named_type
                                                - name
                                                    - IDENT "String"
                        - ON "on"
                        - directive_locations
                            - TYPE_SYSTEM_DIRECTIVE_LOCATION "FIELD_DEFINITION"
                            - TYPE_SYSTEM_DIRECTIVE_LOCATION "SCHEMA"
            "#,
        );
    }

    #[test]
    fn it_keeps_reserved_words_usable_as_directive_names() {
        utils::check_shape(
            "\u{FEFF}
            schema @true {
                query: RootQueryCustomType
            }
            ",
            r#"
            - document
                - type_system_definition
                    - schema_definition
                        - SCHEMA "schema"
                        - directives
                            - directive
                                - name
                                    - IDENT "true"
                        - query_operation_type_definition
                            - QUERY "query"
                            - named_type
                                - name
                                    - IDENT "RootQueryCustomType"
            "#,
        );
    }

    #[test]
    fn it_rejects_a_directive_without_a_name() {
        utils::check_error(
            "
            schema @ {
                mutation: RootMutationCustomType
            }
            ",
            UnexpectedCharacters,
        );
    }

    #[test]
    fn it_rejects_a_body_on_a_directive_definition() {
        utils::check_error(
            "
            directive @test {
                unknownArg: Int
            }
            ",
            UnexpectedToken,
        );
    }
}

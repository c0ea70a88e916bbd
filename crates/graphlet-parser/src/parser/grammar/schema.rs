use crate::parser::grammar::{directive, ty};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *SchemaDefinition*:
///     **schema** Directives? **{** OperationTypeDefinition+ **}**
pub(crate) fn schema_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::SCHEMA_DEFINITION);
    p.bump(SyntaxKind::schema_KW);
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    p.expect(
        TokenKind::LCurly,
        SyntaxKind::L_CURLY,
        "expected `{` to open the schema definition",
    )?;
    operation_type_definition(p)?;
    loop {
        match p.peek() {
            TokenKind::RCurly => {
                p.bump(SyntaxKind::R_CURLY);
                break;
            }
            TokenKind::Name => operation_type_definition(p)?,
            _ => return Err(p.unexpected("expected `}` to close the schema definition")),
        }
    }
    Ok(())
}

/// *OperationTypeDefinition*: OperationType **:** NamedType
fn operation_type_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let (node, keyword) = match p.peek_data() {
        "query" => (
            SyntaxKind::QUERY_OPERATION_TYPE_DEFINITION,
            SyntaxKind::query_KW,
        ),
        "mutation" => (
            SyntaxKind::MUTATION_OPERATION_TYPE_DEFINITION,
            SyntaxKind::mutation_KW,
        ),
        "subscription" => (
            SyntaxKind::SUBSCRIPTION_OPERATION_TYPE_DEFINITION,
            SyntaxKind::subscription_KW,
        ),
        _ => return Err(p.unexpected("expected a root operation type definition")),
    };
    let _g = p.start_node(node);
    p.bump(keyword);
    p.expect(
        TokenKind::Colon,
        SyntaxKind::COLON,
        "expected `:` after the operation type",
    )?;
    ty::named_type(p)
}

#[cfg(test)]
mod test {
    use crate::parser::utils;
    use crate::SyntaxErrorKind::*;

    #[test]
    fn it_parses_a_minimal_schema_with_a_bom() {
        utils::check_shape(
            "\u{FEFF}
            schema {
                query: RootQueryCustomType
            }
            ",
            r#"
            - document
                - type_system_definition
                    - schema_definition
                        - SCHEMA "schema"
                        - query_operation_type_definition
                            - QUERY "query"
                            - named_type
                                - name
                                    - IDENT "RootQueryCustomType"
            "#,
        );
    }

    #[test]
    fn it_rejects_a_schema_with_a_missing_closing_brace() {
        utils::check_error("schema { query: RootQueryCustomType", UnexpectedToken);
    }

    #[test]
    fn it_rejects_a_schema_without_an_opening_brace() {
        utils::check_error(
            "schema query: RootQueryCustomType }",
            UnexpectedCharacters,
        );
    }

    #[test]
    fn it_rejects_arguments_on_the_schema_keyword() {
        utils::check_error(
            r#"
            schema (arg: "invalid") {
                mutation: RootMutationCustomType
            }
            "#,
            UnexpectedCharacters,
        );
    }
}

use crate::parser::grammar::{description, directive, name};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *ScalarTypeDefinition*:
///     Description? **scalar** Name Directives?
pub(crate) fn scalar_type_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::SCALAR_TYPE_DEFINITION);
    description::description(p);
    p.bump(SyntaxKind::scalar_KW);
    name::name(p)?;
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::parser::utils;
    use crate::SyntaxErrorKind::*;

    #[test]
    fn it_parses_a_scalar_with_a_description_and_directives() {
        utils::check_shape(
            r#"
            """
            This is to store DateTime objects
            """
            scalar Date @format(type: "iso")
            "#,
            r#"
            - document
                - type_system_definition
                    - type_definition
                        - scalar_type_definition
                            - description
                                - LONG_STRING "\"\"\"\n            This is to store DateTime objects\n            \"\"\""
                            - SCALAR "scalar"
                            - name
                                - IDENT "Date"
                            - directives
                                - directive
                                    - name
                                        - IDENT "format"
                                    - arguments
                                        - argument
                                            - name
                                                - TYPE "type"
                                            - value
                                                - string_value
                                                    - STRING "\"iso\""
            "#,
        );
    }

    #[test]
    fn it_parses_a_bare_scalar_definition() {
        utils::check_shape(
            "scalar Date",
            r#"
            - document
                - type_system_definition
                    - type_definition
                        - scalar_type_definition
                            - SCALAR "scalar"
                            - name
                                - IDENT "Date"
            "#,
        );
    }

    #[test]
    fn it_rejects_a_list_in_scalar_name_position() {
        utils::check_error("scalar [Custom]", UnexpectedCharacters);
    }

    #[test]
    fn it_rejects_a_body_on_a_scalar_definition() {
        utils::check_error(
            "
            scalar Custom {
                anInt: Int
            }
            ",
            UnexpectedToken,
        );
    }
}

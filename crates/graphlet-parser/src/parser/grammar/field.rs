use crate::parser::grammar::{description, directive, input_value, name, ty};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *FieldsDefinition*: **{** FieldDefinition+ **}**
pub(crate) fn fields_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::FIELDS_DEFINITION);
    p.bump(SyntaxKind::L_CURLY);
    let mut parsed_any = false;
    loop {
        match p.peek() {
            TokenKind::RCurly if parsed_any => {
                p.bump(SyntaxKind::R_CURLY);
                break;
            }
            TokenKind::Name | TokenKind::StringValue | TokenKind::BlockStringValue => {
                field_definition(p)?;
                parsed_any = true;
            }
            _ => return Err(p.unexpected("expected a field definition")),
        }
    }
    Ok(())
}

/// *FieldDefinition*:
///     Description? Name ArgumentsDefinition? **:** Type Directives?
fn field_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::FIELD_DEFINITION);
    description::description(p);
    name::name(p)?;
    if p.at(TokenKind::LParen) {
        input_value::arguments_definition(p)?;
    }
    p.expect(
        TokenKind::Colon,
        SyntaxKind::COLON,
        "expected `:` between a field name and its type",
    )?;
    ty::ty(p)?;
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
    fn it_parses_field_descriptions_arguments_and_directives() {
        utils::check_shape(
            r#"
            type Something {
                " Describe an Int !"
                anInt(canBeZero: Boolean): Int @test(some: 10) @foo(again: "hovercraft")
                aLst: [String]
            }
            "#,
            r#"
            - document
                - type_system_definition
                    - type_definition
                        - object_type_definition
                            - TYPE "type"
                            - name
                                - IDENT "Something"
                            - fields_definition
                                - field_definition
                                    - description
                                        - STRING "\" Describe an Int !\""
                                    - name
                                        - IDENT "anInt"
                                    - arguments_definition
                                        - input_value_definition
                                            - name
                                                - IDENT "canBeZero"
                                            - type
                                                - named_type
                                                    - name
                                                        - IDENT "Boolean"
                                    - type
                                        - named_type
                                            - name
                                                - IDENT "Int"
                                    - directives
                                        - directive
                                            - name
                                                - IDENT "test"
                                            - arguments
                                                - argument
                                                    - name
                                                        - IDENT "some"
                                                    - value
                                                        - int_value
                                                            - SIGNED_INT "10"
                                        - directive
                                            - name
                                                - IDENT "foo"
                                            - arguments
                                                - argument
                                                    - name
                                                        - IDENT "again"
                                                    - value
                                                        - string_value
                                                            - STRING "\"hovercraft\""
                                - field_definition
                                    - name
                                        - IDENT "aLst"
                                    - type
                                        - list_type
                                            - type
                                                - named_type
                                                    - name
                                                        - IDENT "String"
            "#,
        );
    }

    #[test]
    fn it_rejects_directives_before_the_field_type() {
        utils::check_error(
            "
            type Something {
                anInt @test(some: Boolean): Int
            }
            ",
            UnexpectedToken,
        );
    }
}

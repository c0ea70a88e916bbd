use crate::parser::grammar::{description, directive, name, value};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *EnumTypeDefinition*:
///     Description? **enum** Name Directives? EnumValuesDefinition?
pub(crate) fn enum_type_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::ENUM_TYPE_DEFINITION);
    description::description(p);
    p.bump(SyntaxKind::enum_KW);
    name::name(p)?;
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    if p.at(TokenKind::LCurly) {
        enum_values_definition(p)?;
    }
    Ok(())
}

/// *EnumValuesDefinition*: **{** EnumValueDefinition+ **}**
///
/// Each enum value is a single name: consecutive names are separate
/// values, so `NOT FOUND` parses as two. A later validation pass owns any
/// complaint about that.
pub(crate) fn enum_values_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::ENUM_VALUES_DEFINITION);
    p.bump(SyntaxKind::L_CURLY);
    let mut parsed_any = false;
    loop {
        match p.peek() {
            TokenKind::RCurly if parsed_any => {
                p.bump(SyntaxKind::R_CURLY);
                break;
            }
            TokenKind::Name | TokenKind::StringValue | TokenKind::BlockStringValue => {
                enum_value_definition(p)?;
                parsed_any = true;
            }
            _ => return Err(p.unexpected("expected an enum value definition")),
        }
    }
    Ok(())
}

/// *EnumValueDefinition*: Description? EnumValue Directives?
fn enum_value_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::ENUM_VALUE_DEFINITION);
    description::description(p);
    value::enum_value(p)?;
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
    fn it_parses_enum_values_with_directives() {
        utils::check_shape(
            r#"
            enum UserStatus {
                NOT_FOUND
                ACTIVE @cache(duration: "30s")
                INACTIVE
            }
            "#,
            r#"
            - document
                - type_system_definition
                    - type_definition
                        - enum_type_definition
                            - ENUM "enum"
                            - name
                                - IDENT "UserStatus"
                            - enum_values_definition
                                - enum_value_definition
                                    - enum_value
                                        - name
                                            - IDENT "NOT_FOUND"
                                - enum_value_definition
                                    - enum_value
                                        - name
                                            - IDENT "ACTIVE"
                                    - directives
                                        - directive
                                            - name
                                                - IDENT "cache"
                                            - arguments
                                                - argument
                                                    - name
                                                        - IDENT "duration"
                                                    - value
                                                        - string_value
                                                            - STRING "\"30s\""
                                - enum_value_definition
                                    - enum_value
                                        - name
                                            - IDENT "INACTIVE"
            "#,
        );
    }

    #[test]
    fn it_splits_adjacent_names_into_separate_enum_values() {
        utils::check_shape(
            "
            enum UserStatus {
                ACTIVE,
                NOT FOUND,
            }
            ",
            r#"
            - document
                - type_system_definition
                    - type_definition
                        - enum_type_definition
                            - ENUM "enum"
                            - name
                                - IDENT "UserStatus"
                            - enum_values_definition
                                - enum_value_definition
                                    - enum_value
                                        - name
                                            - IDENT "ACTIVE"
                                - enum_value_definition
                                    - enum_value
                                        - name
                                            - IDENT "NOT"
                                - enum_value_definition
                                    - enum_value
                                        - name
                                            - IDENT "FOUND"
            "#,
        );
    }

    #[test]
    fn it_rejects_types_or_values_on_enum_values() {
        utils::check_error(
            "
            enum UserStatus {
                NOT_FOUND: Int
            }
            ",
            UnexpectedToken,
        );
        utils::check_error(
            "
            enum UserStatus {
                NOT_FOUND: 42
            }
            ",
            UnexpectedToken,
        );
    }

    #[test]
    fn it_rejects_parens_in_place_of_braces() {
        utils::check_error(
            "
            enum UserStatus (
                NOT_FOUND
            )
            ",
            UnexpectedToken,
        );
    }
}

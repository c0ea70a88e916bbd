use crate::parser::grammar::{description, directive, field, name, ty};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *ObjectTypeDefinition*:
///     Description? **type** Name ImplementsInterfaces? Directives?
///     FieldsDefinition?
pub(crate) fn object_type_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::OBJECT_TYPE_DEFINITION);
    description::description(p);
    p.bump(SyntaxKind::type_KW);
    name::name(p)?;
    if p.at_word("implements") {
        implements_interfaces(p)?;
    }
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    if p.at(TokenKind::LCurly) {
        field::fields_definition(p)?;
    }
    Ok(())
}

/// *ImplementsInterfaces*:
///     **implements** **&**? NamedType (**&** NamedType)*
///
/// The keyword appears once; members are `&`-separated. A repeated
/// `implements` is consumed as an interface *name*, which makes the next
/// token the offending one.
pub(crate) fn implements_interfaces(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::IMPLEMENTS_INTERFACES);
    p.bump(SyntaxKind::implements_KW);
    if p.at(TokenKind::Amp) {
        p.bump(SyntaxKind::AMP);
    }
    ty::named_type(p)?;
    while p.at(TokenKind::Amp) {
        p.bump(SyntaxKind::AMP);
        ty::named_type(p)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::parser::utils;
    use crate::SyntaxErrorKind::*;

    #[test]
    fn it_parses_objects_implementing_interfaces() {
        utils::check_shape(
            "
            type Ship implements Driver {
                wheel: String
            }
            type Car implements Driver & Viewer {
                wheel: String
            }
            ",
            r#"
            - document
                - type_system_definition
                    - type_definition
                        - object_type_definition
                            - TYPE "type"
                            - name
                                - IDENT "Ship"
                            - implements_interfaces
                                - IMPLEMENTS "implements"
                                - named_type
                                    - name
                                        - IDENT "Driver"
                            - fields_definition
                                - field_definition
                                    - name
                                        - IDENT "wheel"
                                    - type
                                        - named_type
                                            - name
                                                - IDENT "String"
                - type_system_definition
                    - type_definition
                        - object_type_definition
                            - TYPE "type"
                            - name
                                - IDENT "Car"
                            - implements_interfaces
                                - IMPLEMENTS "implements"
                                - named_type
                                    - name
                                        - IDENT "Driver"
                                - named_type
                                    - name
                                        - IDENT "Viewer"
                            - fields_definition
                                - field_definition
                                    - name
                                        - IDENT "wheel"
                                    - type
                                        - named_type
                                            - name
                                                - IDENT "String"
            "#,
        );
    }

    #[test]
    fn it_rejects_a_repeated_implements_keyword() {
        utils::check_error(
            "
            type Car implements Driver & implements Viewer {
                wheel: String
            }
            ",
            UnexpectedToken,
        );
    }

    #[test]
    fn it_rejects_type_modifiers_on_the_declared_name() {
        utils::check_error(
            "
            type Something! {
                aNonNullStringNonNullList: [String]
            }
            ",
            UnexpectedToken,
        );
        utils::check_error(
            "
            type [Something] {
                aNonNullStringNonNullList: [String]
            }
            ",
            UnexpectedCharacters,
        );
    }
}

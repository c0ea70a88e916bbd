use crate::parser::grammar::{directive, enum_, field, input, name, object, union_};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *TypeExtension*:
///     ScalarTypeExtension | ObjectTypeExtension | InterfaceTypeExtension |
///     UnionTypeExtension | EnumTypeExtension | InputObjectTypeExtension
///
/// Whether the extended type exists is checked when the schema is built,
/// not here.
pub(crate) fn type_extension(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::TYPE_EXTENSION);
    match p.peek_data_n(2) {
        Some("scalar") => scalar_type_extension(p),
        Some("type") => object_type_extension(p),
        Some("interface") => interface_type_extension(p),
        Some("union") => union_type_extension(p),
        Some("enum") => enum_type_extension(p),
        Some("input") => input_object_type_extension(p),
        _ => {
            p.bump(SyntaxKind::extend_KW);
            Err(p.unexpected("expected a type extension"))
        }
    }
}

/// *ScalarTypeExtension*: **extend** **scalar** Name Directives?
fn scalar_type_extension(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::SCALAR_TYPE_EXTENSION);
    p.bump(SyntaxKind::extend_KW);
    p.bump(SyntaxKind::scalar_KW);
    name::name(p)?;
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    Ok(())
}

/// *ObjectTypeExtension*:
///     **extend** **type** Name ImplementsInterfaces? Directives?
///     FieldsDefinition?
fn object_type_extension(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::OBJECT_TYPE_EXTENSION);
    p.bump(SyntaxKind::extend_KW);
    p.bump(SyntaxKind::type_KW);
    name::name(p)?;
    if p.at_word("implements") {
        object::implements_interfaces(p)?;
    }
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    if p.at(TokenKind::LCurly) {
        field::fields_definition(p)?;
    }
    Ok(())
}

/// *InterfaceTypeExtension*:
///     **extend** **interface** Name Directives? FieldsDefinition?
fn interface_type_extension(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::INTERFACE_TYPE_EXTENSION);
    p.bump(SyntaxKind::extend_KW);
    p.bump(SyntaxKind::interface_KW);
    name::name(p)?;
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    if p.at(TokenKind::LCurly) {
        field::fields_definition(p)?;
    }
    Ok(())
}

/// *UnionTypeExtension*:
///     **extend** **union** Name Directives? UnionMemberTypes?
fn union_type_extension(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::UNION_TYPE_EXTENSION);
    p.bump(SyntaxKind::extend_KW);
    p.bump(SyntaxKind::union_KW);
    name::name(p)?;
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    if p.at(TokenKind::Eq) {
        union_::union_member_types(p)?;
    }
    Ok(())
}

/// *EnumTypeExtension*:
///     **extend** **enum** Name Directives? EnumValuesDefinition?
fn enum_type_extension(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::ENUM_TYPE_EXTENSION);
    p.bump(SyntaxKind::extend_KW);
    p.bump(SyntaxKind::enum_KW);
    name::name(p)?;
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    if p.at(TokenKind::LCurly) {
        enum_::enum_values_definition(p)?;
    }
    Ok(())
}

/// *InputObjectTypeExtension*:
///     **extend** **input** Name Directives? InputFieldsDefinition?
fn input_object_type_extension(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::INPUT_OBJECT_TYPE_EXTENSION);
    p.bump(SyntaxKind::extend_KW);
    p.bump(SyntaxKind::input_KW);
    name::name(p)?;
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    if p.at(TokenKind::LCurly) {
        input::input_fields_definition(p)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::parser::utils;

    #[test]
    fn it_parses_every_extension_kind() {
        utils::check_shape(
            r#"
            extend scalar Date @control
            extend type Something implements Some & More @hidden {
                aField: Int
            }
            extend interface Viewer @append {
                hasEye: Boolean
            }
            extend union Car = Driveable | Transportable
            extend enum UserStates {
                NOT_AVAILABLE
            }
            extend input UserFilter @acl(role: "can-filter") {
                moreFields: [CustomField]!
            }
            "#,
            r#"
            - document
                - type_system_definition
                    - type_extension
                        - scalar_type_extension
                            - EXTEND "extend"
                            - SCALAR "scalar"
                            - name
                                - IDENT "Date"
                            - directives
                                - directive
                                    - name
                                        - IDENT "control"
                - type_system_definition
                    - type_extension
                        - object_type_extension
                            - EXTEND "extend"
                            - TYPE "type"
                            - name
                                - IDENT "Something"
                            - implements_interfaces
                                - IMPLEMENTS "implements"
                                - named_type
                                    - name
                                        - IDENT "Some"
                                - named_type
                                    - name
                                        - IDENT "More"
                            - directives
                                - directive
                                    - name
                                        - IDENT "hidden"
                            - fields_definition
                                - field_definition
                                    - name
                                        - IDENT "aField"
                                    - type
                                        - named_type
                                            - name
                                                - IDENT "Int"
                - type_system_definition
                    - type_extension
                        - interface_type_extension
                            - EXTEND "extend"
                            - INTERFACE "interface"
                            - name
                                - IDENT "Viewer"
                            - directives
                                - directive
                                    - name
                                        - IDENT "append"
                            - fields_definition
                                - field_definition
                                    - name
                                        - IDENT "hasEye"
                                    - type
                                        - named_type
                                            - name
                                                - IDENT "Boolean"
                - type_system_definition
                    - type_extension
                        - union_type_extension
                            - EXTEND "extend"
                            - UNION "union"
                            - name
                                - IDENT "Car"
                            - union_member_types
                                - named_type
                                    - name
                                        - IDENT "Driveable"
                                - named_type
                                    - name
                                        - IDENT "Transportable"
                - type_system_definition
                    - type_extension
                        - enum_type_extension
                            - EXTEND "extend"
                            - ENUM "enum"
                            - name
                                - IDENT "UserStates"
                            - enum_values_definition
                                - enum_value_definition
                                    - enum_value
                                        - name
                                            - IDENT "NOT_AVAILABLE"
                - type_system_definition
                    - type_extension
                        - input_object_type_extension
                            - EXTEND "extend"
                            - INPUT "input"
                            - name
                                - IDENT "UserFilter"
                            - directives
                                - directive
                                    - name
                                        - IDENT "acl"
                                    - arguments
                                        - argument
                                            - name
                                                - IDENT "role"
                                            - value
                                                - string_value
                                                    - STRING "\"can-filter\""
                            - input_fields_definition
                                - input_value_definition
                                    - name
                                        - IDENT "moreFields"
                                    - type
                                        - non_null_type
                                            - list_type
                                                - type
                                                    - named_type
                                                        - name
                                                            - IDENT "CustomField"
            "#,
        );
    }
}

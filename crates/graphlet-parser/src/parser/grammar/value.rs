use crate::parser::grammar::{name, variable};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *Value*:
///     Variable | IntValue | FloatValue | StringValue | BooleanValue |
///     NullValue | EnumValue | ListValue | ObjectValue
///
/// Every value gets an outer `value` wrapper; the one place a bare value
/// node appears without it is `enum_value_definition`.
pub(crate) fn value(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::VALUE);
    value_inner(p)
}

fn value_inner(p: &mut Parser) -> Result<(), SyntaxError> {
    match p.peek() {
        TokenKind::Dollar => variable::variable(p),
        TokenKind::Int => {
            let _g = p.start_node(SyntaxKind::INT_VALUE);
            p.bump(SyntaxKind::SIGNED_INT);
            Ok(())
        }
        TokenKind::Float => {
            let _g = p.start_node(SyntaxKind::FLOAT_VALUE);
            p.bump(SyntaxKind::SIGNED_FLOAT);
            Ok(())
        }
        TokenKind::StringValue => {
            let _g = p.start_node(SyntaxKind::STRING_VALUE);
            p.bump(SyntaxKind::STRING);
            Ok(())
        }
        TokenKind::BlockStringValue => {
            let _g = p.start_node(SyntaxKind::STRING_VALUE);
            p.bump(SyntaxKind::LONG_STRING);
            Ok(())
        }
        TokenKind::Name => match p.peek_data() {
            "true" => {
                let _g = p.start_node(SyntaxKind::TRUE_VALUE);
                p.bump(SyntaxKind::true_KW);
                Ok(())
            }
            "false" => {
                let _g = p.start_node(SyntaxKind::FALSE_VALUE);
                p.bump(SyntaxKind::false_KW);
                Ok(())
            }
            "null" => {
                let _g = p.start_node(SyntaxKind::NULL_VALUE);
                p.bump(SyntaxKind::null_KW);
                Ok(())
            }
            _ => enum_value(p),
        },
        TokenKind::LBracket => list_value(p),
        TokenKind::LCurly => object_value(p),
        _ => Err(p.unexpected("expected a value")),
    }
}

/// *EnumValue*: Name
///
/// `true`/`false`/`null` never reach here from value position; whether an
/// enum *member* may collide with them is left to later validation.
pub(crate) fn enum_value(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::ENUM_VALUE);
    name::name(p)
}

/// *ListValue*:
///     **[** **]** | **[** Value+ **]**
fn list_value(p: &mut Parser) -> Result<(), SyntaxError> {
    if p.recursion_limit.check_and_increment() {
        return Err(p.limit_error());
    }
    let _g = p.start_node(SyntaxKind::LIST_VALUE);
    p.bump(SyntaxKind::L_BRACKET);
    loop {
        match p.peek() {
            TokenKind::RBracket => {
                p.bump(SyntaxKind::R_BRACKET);
                break;
            }
            TokenKind::Eof => return Err(p.unexpected("expected `]` to close the list value")),
            _ => value(p)?,
        }
    }
    p.recursion_limit.decrement();
    Ok(())
}

/// *ObjectValue*:
///     **{** **}** | **{** ObjectField+ **}**
fn object_value(p: &mut Parser) -> Result<(), SyntaxError> {
    if p.recursion_limit.check_and_increment() {
        return Err(p.limit_error());
    }
    let _g = p.start_node(SyntaxKind::OBJECT_VALUE);
    p.bump(SyntaxKind::L_CURLY);
    loop {
        match p.peek() {
            TokenKind::RCurly => {
                p.bump(SyntaxKind::R_CURLY);
                break;
            }
            TokenKind::Name => object_field(p)?,
            _ => return Err(p.unexpected("expected an object field")),
        }
    }
    p.recursion_limit.decrement();
    Ok(())
}

/// *ObjectField*: Name **:** Value
fn object_field(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::OBJECT_FIELD);
    name::name(p)?;
    p.expect(
        TokenKind::Colon,
        SyntaxKind::COLON,
        "expected `:` between an object field name and its value",
    )?;
    value(p)
}

/// *DefaultValue*: **=** Value
pub(crate) fn default_value(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::DEFAULT_VALUE);
    p.bump(SyntaxKind::EQ);
    value(p)
}

#[cfg(test)]
mod test {
    use crate::parser::utils;

    #[test]
    fn it_parses_every_value_shape_in_directive_arguments() {
        utils::check_shape(
            r#"
            schema
            @test(str: "test", int: 14, float: 17.3, bool: true, empty: null,
            lst: [], obj: {name: 99}) {
                mutation: RootMutationCustomType # some random comment
            #} And more comments here :D @directive() key: 10
            }
            "#,
            r#"
            - document
                - type_system_definition
                    - schema_definition
                        - SCHEMA "schema"
                        - directives
                            - directive
                                - name
                                    - IDENT "test"
                                - arguments
                                    - argument
                                        - name
                                            - IDENT "str"
                                        - value
                                            - string_value
                                                - STRING "\"test\""
                                    - argument
                                        - name
                                            - IDENT "int"
                                        - value
                                            - int_value
                                                - SIGNED_INT "14"
                                    - argument
                                        - name
                                            - IDENT "float"
                                        - value
                                            - float_value
                                                - SIGNED_FLOAT "17.3"
                                    - argument
                                        - name
                                            - IDENT "bool"
                                        - value
                                            - true_value
                                                - TRUE "true"
                                    - argument
                                        - name
                                            - IDENT "empty"
                                        - value
                                            - null_value
                                                - NULL "null"
                                    - argument
                                        - name
                                            - IDENT "lst"
                                        - value
                                            - list_value
                                    - argument
                                        - name
                                            - IDENT "obj"
                                        - value
                                            - object_value
                                                - object_field
                                                    - name
                                                        - IDENT "name"
                                                    - value
                                                        - int_value
                                                            - SIGNED_INT "99"
                        - mutation_operation_type_definition
                            - MUTATION "mutation"
                            - named_type
                                - name
                                    - IDENT "RootMutationCustomType"
            "#,
        );
    }
}

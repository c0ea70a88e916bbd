use crate::parser::grammar::name;
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *Type*:
///     NamedType | ListType | NonNullType
///
/// The postfix `!` cannot be parsed top-down, so the named or list type is
/// parsed behind a checkpoint and retroactively wrapped in a
/// `non_null_type` node when a `!` follows. `!!` is rejected because the
/// wrapping consumes exactly one `!`, and whatever follows the complete
/// type cannot start with another.
pub(crate) fn ty(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::TYPE);
    ty_inner(p)
}

fn ty_inner(p: &mut Parser) -> Result<(), SyntaxError> {
    let checkpoint = p.checkpoint_node();
    match p.peek() {
        TokenKind::LBracket => {
            if p.recursion_limit.check_and_increment() {
                return Err(p.limit_error());
            }
            let result = list_type(p);
            p.recursion_limit.decrement();
            result?;
        }
        TokenKind::Name => {
            let _g = p.start_node(SyntaxKind::NAMED_TYPE);
            name::name(p)?;
        }
        _ => return Err(p.unexpected("expected a type")),
    }

    if p.at(TokenKind::Bang) {
        let _g = checkpoint.wrap_node(SyntaxKind::NON_NULL_TYPE);
        p.bump(SyntaxKind::BANG);
    }
    Ok(())
}

/// *ListType*: **[** Type **]**
///
/// The brackets must enclose exactly one type; `[]` and `[A, B]` are
/// syntax errors in type position.
fn list_type(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::LIST_TYPE);
    p.bump(SyntaxKind::L_BRACKET);
    ty(p)?;
    p.expect(
        TokenKind::RBracket,
        SyntaxKind::R_BRACKET,
        "expected `]` to close the list type",
    )
}

/// *NamedType*: Name
pub(crate) fn named_type(p: &mut Parser) -> Result<(), SyntaxError> {
    if !p.at(TokenKind::Name) {
        return Err(p.unexpected("expected a type name"));
    }
    let _g = p.start_node(SyntaxKind::NAMED_TYPE);
    name::name(p)
}

#[cfg(test)]
mod test {
    use crate::parser::utils;
    use crate::SyntaxErrorKind::*;

    #[test]
    fn it_wraps_types_per_modifier() {
        utils::check_shape(
            "
            type Something {
                aNullableStringList: [String]
                aNonNullString: String!
                aNullableStringNonNullList: [String]!
                aNonNullStringNonNullList: [String!]!
            }
            ",
            "
            - document
                - type_system_definition
                    - type_definition
                        - object_type_definition
                            - TYPE \"type\"
                            - name
                                - IDENT \"Something\"
                            - fields_definition
                                - field_definition
                                    - name
                                        - IDENT \"aNullableStringList\"
                                    - type
                                        - list_type
                                            - type
                                                - named_type
                                                    - name
                                                        - IDENT \"String\"
                                - field_definition
                                    - name
                                        - IDENT \"aNonNullString\"
                                    - type
                                        - non_null_type
                                            - named_type
                                                - name
                                                    - IDENT \"String\"
                                - field_definition
                                    - name
                                        - IDENT \"aNullableStringNonNullList\"
                                    - type
                                        - non_null_type
                                            - list_type
                                                - type
                                                    - named_type
                                                        - name
                                                            - IDENT \"String\"
                                - field_definition
                                    - name
                                        - IDENT \"aNonNullStringNonNullList\"
                                    - type
                                        - non_null_type
                                            - list_type
                                                - type
                                                    - non_null_type
                                                        - named_type
                                                            - name
                                                                - IDENT \"String\"
            ",
        );
    }

    #[test]
    fn it_rejects_double_bang() {
        utils::check_error(
            "
            type Something {
                aNonNullString: String!!
            }
            ",
            UnexpectedCharacters,
        );
        utils::check_error(
            "
            type Something {
                aNullableStringList: [String]!!
            }
            ",
            UnexpectedCharacters,
        );
    }

    #[test]
    fn it_rejects_prefix_bang() {
        utils::check_error(
            "
            type Something {
                aNonNullStringNonNullList: [!String]!
            }
            ",
            UnexpectedCharacters,
        );
    }

    #[test]
    fn it_rejects_empty_and_mixed_lists_in_type_position() {
        utils::check_error(
            "
            type Something {
                aLst: []
            }
            ",
            UnexpectedCharacters,
        );
        utils::check_error(
            "
            type Something {
                aLst: [String, Int]
            }
            ",
            UnexpectedToken,
        );
    }

    #[test]
    fn it_rejects_values_in_type_position() {
        utils::check_error(
            "
            type Something {
                anInt: 10
            }
            ",
            UnexpectedCharacters,
        );
    }
}

use crate::parser::grammar::{argument, directive, fragment, name};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *SelectionSet*: **{** Selection+ **}**
pub(crate) fn selection_set(p: &mut Parser) -> Result<(), SyntaxError> {
    if p.recursion_limit.check_and_increment() {
        return Err(p.limit_error());
    }
    let _g = p.start_node(SyntaxKind::SELECTION_SET);
    p.expect(
        TokenKind::LCurly,
        SyntaxKind::L_CURLY,
        "expected `{` to open a selection set",
    )?;
    let mut parsed_any = false;
    loop {
        match p.peek() {
            TokenKind::RCurly if parsed_any => {
                p.bump(SyntaxKind::R_CURLY);
                break;
            }
            TokenKind::Name => {
                field(p)?;
                parsed_any = true;
            }
            TokenKind::Spread => {
                fragment::fragment_spread_or_inline_fragment(p)?;
                parsed_any = true;
            }
            _ => return Err(p.unexpected("expected a selection")),
        }
    }
    p.recursion_limit.decrement();
    Ok(())
}

/// *Field*:
///     Alias? Name Arguments? Directives? SelectionSet?
fn field(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::FIELD);

    if p.peek_token_n(2).map(|token| token.kind()) == Some(TokenKind::Colon) {
        let _a = p.start_node(SyntaxKind::ALIAS);
        name::name(p)?;
        p.bump(SyntaxKind::COLON);
    }
    name::name(p)?;

    if p.at(TokenKind::LParen) {
        argument::arguments(p)?;
    }
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    if p.at(TokenKind::LCurly) {
        selection_set(p)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::parser::utils;

    #[test]
    fn it_parses_nested_selections_with_aliases_and_arguments() {
        utils::check_shape(
            r#"
            query {
                luke: human(id: "1000") {
                    name
                    friends {
                        name
                    }
                }
            }
            "#,
            r#"
            - document
                - operation_definition
                    - QUERY "query"
                    - selection_set
                        - field
                            - alias
                                - name
                                    - IDENT "luke"
                            - name
                                - IDENT "human"
                            - arguments
                                - argument
                                    - name
                                        - IDENT "id"
                                    - value
                                        - string_value
                                            - STRING "\"1000\""
                            - selection_set
                                - field
                                    - name
                                        - IDENT "name"
                                - field
                                    - name
                                        - IDENT "friends"
                                    - selection_set
                                        - field
                                            - name
                                                - IDENT "name"
            "#,
        );
    }
}

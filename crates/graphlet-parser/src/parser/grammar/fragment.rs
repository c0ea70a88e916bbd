use crate::parser::grammar::{directive, name, selection, ty};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *FragmentDefinition*:
///     **fragment** FragmentName TypeCondition Directives? SelectionSet
pub(crate) fn fragment_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::FRAGMENT_DEFINITION);
    p.bump(SyntaxKind::fragment_KW);
    fragment_name(p)?;
    type_condition(p)?;
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    selection::selection_set(p)
}

/// *FragmentName*: Name but not **on**
fn fragment_name(p: &mut Parser) -> Result<(), SyntaxError> {
    if p.at_word("on") {
        return Err(p.unexpected("expected a fragment name"));
    }
    name::name(p)
}

/// *TypeCondition*: **on** NamedType
fn type_condition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::TYPE_CONDITION);
    p.expect_word(
        "on",
        SyntaxKind::on_KW,
        "expected `on` before the fragment type condition",
    )?;
    ty::named_type(p)
}

/// *FragmentSpread*: **...** FragmentName Directives?
/// *InlineFragment*: **...** TypeCondition? Directives? SelectionSet
///
/// Both start with a spread; which one follows is decided by the next
/// token.
pub(crate) fn fragment_spread_or_inline_fragment(p: &mut Parser) -> Result<(), SyntaxError> {
    let is_spread = matches!(p.peek_token_n(2), Some(token)
        if token.kind() == TokenKind::Name && token.data() != "on");

    if is_spread {
        let _g = p.start_node(SyntaxKind::FRAGMENT_SPREAD);
        p.bump(SyntaxKind::SPREAD);
        name::name(p)?;
        if p.at(TokenKind::At) {
            directive::directives(p)?;
        }
        Ok(())
    } else {
        let _g = p.start_node(SyntaxKind::INLINE_FRAGMENT);
        p.bump(SyntaxKind::SPREAD);
        if p.at_word("on") {
            type_condition(p)?;
        }
        if p.at(TokenKind::At) {
            directive::directives(p)?;
        }
        selection::selection_set(p)
    }
}

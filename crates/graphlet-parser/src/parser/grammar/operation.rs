use crate::parser::grammar::{directive, name, selection, variable};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *OperationDefinition*:
///     OperationType Name? VariableDefinitions? Directives? SelectionSet
///     SelectionSet (query shorthand)
pub(crate) fn operation_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::OPERATION_DEFINITION);

    if p.at(TokenKind::LCurly) {
        return selection::selection_set(p);
    }

    let keyword = match p.peek_data() {
        "query" => SyntaxKind::query_KW,
        "mutation" => SyntaxKind::mutation_KW,
        "subscription" => SyntaxKind::subscription_KW,
        _ => return Err(p.unexpected("expected an operation definition")),
    };
    p.bump(keyword);

    if p.at(TokenKind::Name) {
        name::name(p)?;
    }
    if p.at(TokenKind::LParen) {
        variable::variable_definitions(p)?;
    }
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    selection::selection_set(p)
}

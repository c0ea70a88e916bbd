use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *Name*: `[A-Za-z_][A-Za-z0-9_]*`
///
/// Reserved words are allowed wherever a name is: their token keeps its
/// keyword kind inside the `name` node, and only the grammatical position
/// promotes it to a name. Words that are keywords solely in value position
/// (`true`, `false`, `null`) record as plain idents here, as does
/// `implements`.
pub(crate) fn name(p: &mut Parser) -> Result<(), SyntaxError> {
    if !p.at(TokenKind::Name) {
        return Err(p.unexpected("expected a name"));
    }
    let _g = p.start_node(SyntaxKind::NAME);
    let kind = keyword_kind(p.peek_data()).unwrap_or(SyntaxKind::IDENT);
    p.bump_as_name(kind);
    Ok(())
}

fn keyword_kind(word: &str) -> Option<SyntaxKind> {
    match word {
        "schema" => Some(SyntaxKind::schema_KW),
        "query" => Some(SyntaxKind::query_KW),
        "mutation" => Some(SyntaxKind::mutation_KW),
        "subscription" => Some(SyntaxKind::subscription_KW),
        "type" => Some(SyntaxKind::type_KW),
        "interface" => Some(SyntaxKind::interface_KW),
        "union" => Some(SyntaxKind::union_KW),
        "enum" => Some(SyntaxKind::enum_KW),
        "scalar" => Some(SyntaxKind::scalar_KW),
        "input" => Some(SyntaxKind::input_KW),
        "extend" => Some(SyntaxKind::extend_KW),
        "directive" => Some(SyntaxKind::directive_KW),
        "on" => Some(SyntaxKind::on_KW),
        _ => None,
    }
}

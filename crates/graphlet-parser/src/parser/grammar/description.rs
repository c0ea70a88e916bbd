use crate::{Parser, SyntaxKind, TokenKind};

/// *Description*: StringValue
///
/// Optional; when present it becomes the first child of the definition or
/// member it precedes.
pub(crate) fn description(p: &mut Parser) {
    if matches!(
        p.peek(),
        TokenKind::StringValue | TokenKind::BlockStringValue
    ) {
        let _g = p.start_node(SyntaxKind::DESCRIPTION);
        let kind = if p.at(TokenKind::StringValue) {
            SyntaxKind::STRING
        } else {
            SyntaxKind::LONG_STRING
        };
        p.bump(kind);
    }
}

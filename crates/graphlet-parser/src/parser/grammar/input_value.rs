use crate::parser::grammar::{description, directive, name, ty, value};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *ArgumentsDefinition*: **(** InputValueDefinition+ **)**
pub(crate) fn arguments_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::ARGUMENTS_DEFINITION);
    p.bump(SyntaxKind::L_PAREN);
    input_value_definition(p)?;
    loop {
        match p.peek() {
            TokenKind::RParen => {
                p.bump(SyntaxKind::R_PAREN);
                break;
            }
            TokenKind::Name | TokenKind::StringValue | TokenKind::BlockStringValue => {
                input_value_definition(p)?
            }
            _ => return Err(p.unexpected("expected `)` to close the arguments definition")),
        }
    }
    Ok(())
}

/// *InputValueDefinition*:
///     Description? Name **:** Type DefaultValue? Directives?
pub(crate) fn input_value_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::INPUT_VALUE_DEFINITION);
    description::description(p);
    name::name(p)?;
    p.expect(
        TokenKind::Colon,
        SyntaxKind::COLON,
        "expected `:` between an argument name and its type",
    )?;
    ty::ty(p)?;
    if p.at(TokenKind::Eq) {
        value::default_value(p)?;
    }
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    Ok(())
}

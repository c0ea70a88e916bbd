use crate::parser::grammar::{name, ty, value};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *Variable*: **$** Name
pub(crate) fn variable(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::VARIABLE);
    p.bump(SyntaxKind::DOLLAR);
    name::name(p)
}

/// *VariableDefinitions*: **(** VariableDefinition+ **)**
pub(crate) fn variable_definitions(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::VARIABLE_DEFINITIONS);
    p.bump(SyntaxKind::L_PAREN);
    variable_definition(p)?;
    loop {
        match p.peek() {
            TokenKind::RParen => {
                p.bump(SyntaxKind::R_PAREN);
                break;
            }
            TokenKind::Dollar => variable_definition(p)?,
            _ => return Err(p.unexpected("expected `)` to close the variable definitions")),
        }
    }
    Ok(())
}

/// *VariableDefinition*: Variable **:** Type DefaultValue?
fn variable_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::VARIABLE_DEFINITION);
    if !p.at(TokenKind::Dollar) {
        return Err(p.unexpected("expected a variable"));
    }
    variable(p)?;
    p.expect(
        TokenKind::Colon,
        SyntaxKind::COLON,
        "expected `:` between a variable and its type",
    )?;
    ty::ty(p)?;
    if p.at(TokenKind::Eq) {
        value::default_value(p)?;
    }
    Ok(())
}

use crate::parser::grammar::{description, directive, field, name};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *InterfaceTypeDefinition*:
///     Description? **interface** Name Directives? FieldsDefinition?
///
/// Interfaces do not implement other interfaces in this grammar, so
/// `interface A & B { … }` fails at the `&`.
pub(crate) fn interface_type_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::INTERFACE_TYPE_DEFINITION);
    description::description(p);
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

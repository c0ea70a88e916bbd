use crate::parser::grammar::{description, directive, input_value, name};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *InputObjectTypeDefinition*:
///     Description? **input** Name Directives? InputFieldsDefinition?
pub(crate) fn input_object_type_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::INPUT_OBJECT_TYPE_DEFINITION);
    description::description(p);
    p.bump(SyntaxKind::input_KW);
    name::name(p)?;
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    if p.at(TokenKind::LCurly) {
        input_fields_definition(p)?;
    }
    Ok(())
}

/// *InputFieldsDefinition*: **{** InputValueDefinition+ **}**
pub(crate) fn input_fields_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::INPUT_FIELDS_DEFINITION);
    p.bump(SyntaxKind::L_CURLY);
    let mut parsed_any = false;
    loop {
        match p.peek() {
            TokenKind::RCurly if parsed_any => {
                p.bump(SyntaxKind::R_CURLY);
                break;
            }
            TokenKind::Name | TokenKind::StringValue | TokenKind::BlockStringValue => {
                input_value::input_value_definition(p)?;
                parsed_any = true;
            }
            _ => return Err(p.unexpected("expected an input value definition")),
        }
    }
    Ok(())
}

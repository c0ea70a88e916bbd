use crate::parser::grammar::{name, value};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *Arguments*: **(** Argument+ **)**
///
/// Empty `()` is a parse error.
pub(crate) fn arguments(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::ARGUMENTS);
    p.bump(SyntaxKind::L_PAREN);
    argument(p)?;
    loop {
        match p.peek() {
            TokenKind::RParen => {
                p.bump(SyntaxKind::R_PAREN);
                break;
            }
            TokenKind::Name => argument(p)?,
            _ => return Err(p.unexpected("expected `)` to close the arguments")),
        }
    }
    Ok(())
}

/// *Argument*: Name **:** Value
fn argument(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::ARGUMENT);
    name::name(p)?;
    p.expect(
        TokenKind::Colon,
        SyntaxKind::COLON,
        "expected `:` between an argument name and its value",
    )?;
    value::value(p)
}

#[cfg(test)]
mod test {
    use crate::parser::utils;
    use crate::SyntaxErrorKind::*;

    #[test]
    fn it_rejects_empty_arguments() {
        utils::check_error(
            "
            type Something @test() {
                aLst: [String]
            }
            ",
            UnexpectedCharacters,
        );
    }

    #[test]
    fn it_rejects_an_argument_without_a_value() {
        utils::check_error(
            "
            schema @test(arg) {
                mutation: RootMutationCustomType
            }
            ",
            UnexpectedToken,
        );
    }

    #[test]
    fn it_rejects_equals_in_place_of_colon() {
        utils::check_error(
            "
            schema @test(arg = 10) {
                mutation: RootMutationCustomType
            }
            ",
            UnexpectedToken,
        );
    }
}

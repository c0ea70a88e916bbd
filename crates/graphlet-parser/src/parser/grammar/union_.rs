use crate::parser::grammar::{description, directive, name, ty};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *UnionTypeDefinition*:
///     Description? **union** Name Directives? UnionMemberTypes?
///
/// Directives must appear before the `=`; a directive after the member
/// list belongs to nothing and fails at the `@`.
pub(crate) fn union_type_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::UNION_TYPE_DEFINITION);
    description::description(p);
    p.bump(SyntaxKind::union_KW);
    name::name(p)?;
    if p.at(TokenKind::At) {
        directive::directives(p)?;
    }
    if p.at(TokenKind::Eq) {
        union_member_types(p)?;
    }
    Ok(())
}

/// *UnionMemberTypes*:
///     **=** **|**? NamedType (**|** NamedType)*
pub(crate) fn union_member_types(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::UNION_MEMBER_TYPES);
    p.bump(SyntaxKind::EQ);
    if p.at(TokenKind::Pipe) {
        p.bump(SyntaxKind::PIPE);
    }
    ty::named_type(p)?;
    while p.at(TokenKind::Pipe) {
        p.bump(SyntaxKind::PIPE);
        ty::named_type(p)?;
    }
    Ok(())
}

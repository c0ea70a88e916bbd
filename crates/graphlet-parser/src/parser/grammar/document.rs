use crate::parser::grammar::{
    directive, enum_, extensions, fragment, input, interface, object, operation, scalar, schema,
    union_,
};
use crate::{Parser, SyntaxError, SyntaxKind, TokenKind};

/// *Document*:
///     Definition+
///
/// Type-system definitions are each wrapped in a `type_system_definition`
/// node; operations and fragments appear directly under `document`.
pub(crate) fn document(p: &mut Parser) -> Result<(), SyntaxError> {
    let doc = p.start_node(SyntaxKind::DOCUMENT);

    let mut is_first_definition = true;
    loop {
        match p.peek() {
            TokenKind::Eof => break,
            TokenKind::StringValue | TokenKind::BlockStringValue => type_system_definition(p)?,
            // The query shorthand may only be the whole document's single
            // operation; a brace after another definition is an error.
            TokenKind::LCurly if is_first_definition => operation::operation_definition(p)?,
            TokenKind::Name => match p.peek_data() {
                "schema" | "type" | "interface" | "union" | "enum" | "scalar" | "input"
                | "extend" | "directive" => type_system_definition(p)?,
                "query" | "mutation" | "subscription" => operation::operation_definition(p)?,
                "fragment" => fragment::fragment_definition(p)?,
                _ => return Err(p.unexpected("expected a definition")),
            },
            _ => return Err(p.unexpected("expected a definition")),
        }
        is_first_definition = false;
    }

    p.flush_trivia();
    doc.finish_node();
    Ok(())
}

/// *TypeSystemDefinition*:
///     SchemaDefinition | TypeDefinition | TypeExtension | DirectiveDefinition
pub(crate) fn type_system_definition(p: &mut Parser) -> Result<(), SyntaxError> {
    let _g = p.start_node(SyntaxKind::TYPE_SYSTEM_DEFINITION);

    // A description string may precede a type or directive definition,
    // but not a schema definition or an extension.
    let has_description = matches!(
        p.peek(),
        TokenKind::StringValue | TokenKind::BlockStringValue
    );
    let keyword = if has_description {
        p.peek_data_n(2)
    } else {
        Some(p.peek_data())
    };

    match keyword {
        Some("schema") if !has_description => schema::schema_definition(p),
        Some("directive") => directive::directive_definition(p),
        Some("extend") if !has_description => extensions::type_extension(p),
        Some("scalar" | "type" | "interface" | "union" | "enum" | "input") => {
            let _t = p.start_node(SyntaxKind::TYPE_DEFINITION);
            match keyword {
                Some("scalar") => scalar::scalar_type_definition(p),
                Some("type") => object::object_type_definition(p),
                Some("interface") => interface::interface_type_definition(p),
                Some("union") => union_::union_type_definition(p),
                Some("enum") => enum_::enum_type_definition(p),
                Some("input") => input::input_object_type_definition(p),
                _ => unreachable!("matched above"),
            }
        }
        _ => Err(p.unexpected("expected a type system definition")),
    }
}

//! Every token kind and rule label that can appear in the syntax tree.

/// The kind of a node or token in the syntax tree.
///
/// Token kinds come first: trivia, punctuators, literal tokens, keyword
/// tokens (`*_KW`), directive-location tokens. Rule labels follow. Keyword
/// kinds are recorded per grammatical position: a word like `type` is
/// `type_KW` both when it introduces an object type definition and when it
/// occurs as a name, while words that are only meaningful in value position
/// (`true`, `false`, `null`) fall back to [`IDENT`] when used as names.
///
/// [`IDENT`]: SyntaxKind::IDENT
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
#[allow(clippy::upper_case_acronyms)]
pub enum SyntaxKind {
    // trivia
    WHITESPACE = 0,
    COMMENT,
    COMMA,
    // punctuators
    BANG,
    DOLLAR,
    AMP,
    L_PAREN,
    R_PAREN,
    SPREAD,
    COLON,
    EQ,
    AT,
    L_BRACKET,
    R_BRACKET,
    L_CURLY,
    R_CURLY,
    PIPE,
    // literal tokens
    IDENT,
    STRING,
    LONG_STRING,
    SIGNED_INT,
    SIGNED_FLOAT,
    // keyword tokens
    schema_KW,
    query_KW,
    mutation_KW,
    subscription_KW,
    type_KW,
    interface_KW,
    union_KW,
    enum_KW,
    scalar_KW,
    input_KW,
    extend_KW,
    implements_KW,
    directive_KW,
    on_KW,
    fragment_KW,
    true_KW,
    false_KW,
    null_KW,
    // directive location tokens
    EXECUTABLE_DIRECTIVE_LOCATION,
    TYPE_SYSTEM_DIRECTIVE_LOCATION,
    // rule labels
    DOCUMENT,
    TYPE_SYSTEM_DEFINITION,
    SCHEMA_DEFINITION,
    QUERY_OPERATION_TYPE_DEFINITION,
    MUTATION_OPERATION_TYPE_DEFINITION,
    SUBSCRIPTION_OPERATION_TYPE_DEFINITION,
    TYPE_DEFINITION,
    SCALAR_TYPE_DEFINITION,
    OBJECT_TYPE_DEFINITION,
    INTERFACE_TYPE_DEFINITION,
    UNION_TYPE_DEFINITION,
    ENUM_TYPE_DEFINITION,
    INPUT_OBJECT_TYPE_DEFINITION,
    TYPE_EXTENSION,
    SCALAR_TYPE_EXTENSION,
    OBJECT_TYPE_EXTENSION,
    INTERFACE_TYPE_EXTENSION,
    UNION_TYPE_EXTENSION,
    ENUM_TYPE_EXTENSION,
    INPUT_OBJECT_TYPE_EXTENSION,
    DIRECTIVE_DEFINITION,
    DIRECTIVE_LOCATIONS,
    DESCRIPTION,
    NAME,
    IMPLEMENTS_INTERFACES,
    FIELDS_DEFINITION,
    FIELD_DEFINITION,
    ARGUMENTS_DEFINITION,
    INPUT_VALUE_DEFINITION,
    INPUT_FIELDS_DEFINITION,
    ENUM_VALUES_DEFINITION,
    ENUM_VALUE_DEFINITION,
    ENUM_VALUE,
    UNION_MEMBER_TYPES,
    DIRECTIVES,
    DIRECTIVE,
    ARGUMENTS,
    ARGUMENT,
    TYPE,
    NAMED_TYPE,
    LIST_TYPE,
    NON_NULL_TYPE,
    DEFAULT_VALUE,
    VALUE,
    INT_VALUE,
    FLOAT_VALUE,
    STRING_VALUE,
    TRUE_VALUE,
    FALSE_VALUE,
    NULL_VALUE,
    LIST_VALUE,
    OBJECT_VALUE,
    OBJECT_FIELD,
    VARIABLE,
    OPERATION_DEFINITION,
    VARIABLE_DEFINITIONS,
    VARIABLE_DEFINITION,
    SELECTION_SET,
    FIELD,
    ALIAS,
    FRAGMENT_DEFINITION,
    FRAGMENT_SPREAD,
    INLINE_FRAGMENT,
    TYPE_CONDITION,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::WHITESPACE | SyntaxKind::COMMENT | SyntaxKind::COMMA
        )
    }

    pub fn is_punctuator(self) -> bool {
        matches!(
            self,
            SyntaxKind::BANG
                | SyntaxKind::DOLLAR
                | SyntaxKind::AMP
                | SyntaxKind::L_PAREN
                | SyntaxKind::R_PAREN
                | SyntaxKind::SPREAD
                | SyntaxKind::COLON
                | SyntaxKind::EQ
                | SyntaxKind::AT
                | SyntaxKind::L_BRACKET
                | SyntaxKind::R_BRACKET
                | SyntaxKind::L_CURLY
                | SyntaxKind::R_CURLY
                | SyntaxKind::PIPE
        )
    }

    pub fn is_token(self) -> bool {
        self <= SyntaxKind::TYPE_SYSTEM_DIRECTIVE_LOCATION
    }

    /// The label used when rendering the logical tree shape: rule labels in
    /// lowercase, token kinds in uppercase with the `_KW` suffix removed.
    pub fn label(self) -> String {
        let name = format!("{self:?}");
        if self.is_token() {
            name.trim_end_matches("_KW").to_uppercase()
        } else {
            name.to_lowercase()
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

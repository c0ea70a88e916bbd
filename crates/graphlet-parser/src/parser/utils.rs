use crate::{Parser, SyntaxErrorKind};
use pretty_assertions::assert_eq;
use unindent::unindent;

/// Parse `input` and compare the logical tree shape against `expected`.
pub(crate) fn check_shape(input: &str, expected: &str) {
    let tree = match Parser::new(input).parse() {
        Ok(tree) => tree,
        Err(err) => panic!("expected {input:?} to parse, got {err:?}"),
    };
    assert_eq!(
        tree.shape().trim_end(),
        unindent(expected).trim_end(),
        "shape mismatch for {input:?}"
    );
}

/// Parse `input` and require a syntax error of the given kind.
pub(crate) fn check_error(input: &str, expected: SyntaxErrorKind) {
    match Parser::new(input).parse() {
        Ok(tree) => panic!("expected {input:?} to fail, got:\n{}", tree.shape()),
        Err(err) => assert_eq!(
            err.kind(),
            expected,
            "error kind mismatch for {input:?}: {err:?}"
        ),
    }
}

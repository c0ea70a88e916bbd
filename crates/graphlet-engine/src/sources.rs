/// A 1-based line/column position in a parsed source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub line: usize,
    pub column: usize,
}

/// Maps byte offsets of a source text to line/column positions.
///
/// Line terminators are `\n`, `\r\n` and a lone `\r`; columns count
/// characters, not bytes.
#[derive(Debug, Clone)]
pub(crate) struct LineIndex {
    text: String,
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        let mut chars = text.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            match c {
                '\n' => line_starts.push(offset + 1),
                '\r' => {
                    if chars.peek().map(|(_, next)| *next) == Some('\n') {
                        chars.next();
                        line_starts.push(offset + 2);
                    } else {
                        line_starts.push(offset + 1);
                    }
                }
                _ => {}
            }
        }
        Self { text, line_starts }
    }

    pub(crate) fn span_at(&self, offset: usize) -> SourceSpan {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let column = self
            .text
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);
        SourceSpan {
            line: line + 1,
            column: column + 1,
        }
    }
}

//! Source line excerpts shown under a diagnostic.

/// One source line with a caret underline.
///
/// # Examples
///
/// ```
/// use schemac_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("<size:u9>", 1, 7, 9);
/// assert_eq!(snippet.format(), "  1 | <size:u9>\n    |       ^^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line, without its terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// First underlined column (1-based)
    pub start_column: usize,
    /// Column after the underline (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Renders the numbered line and a caret line beneath it.
    ///
    /// The gutter is at least three columns wide. At least one caret is
    /// drawn, even for an empty range.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let start = self.start_column.saturating_sub(1);
        let carets = self.end_column.saturating_sub(self.start_column).max(1);

        format!(
            "{:>width$} | {}\n{:>width$} | {}{}",
            self.line_number,
            self.line,
            "",
            " ".repeat(start),
            "^".repeat(carets),
        )
    }
}

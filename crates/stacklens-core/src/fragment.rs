//! Fragment model - classified, atomic runs of report text

/// Semantic classification of a piece of rendered text.
///
/// Purely descriptive: the layout engine treats every kind identically and
/// downstream consumers may use it for styling. Carries no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Box borders and horizontal separator runs
    Border,
    /// Group header text
    Header,
    /// Captured exception type name
    ExceptionType,
    /// Captured exception message
    ExceptionMessage,
    /// Unparsed stack frame text
    StackFrame,
    /// Namespace segment of a qualified name
    Namespace,
    /// Type segment of a qualified name
    TypeName,
    /// Method segment of a qualified name
    MethodName,
    /// Punctuation between tokens: `.`, `<`, `>`, `,`, parentheses, `": "`
    Separator,
    /// Plain report text (summary lines, labels, counts)
    Text,
    /// Argument name in a signature
    Argument,
    /// Parameter-passing modifier keyword
    ArgumentModifier,
}

/// An atomic, classified run of text - the indivisible unit of layout.
///
/// A fragment's text is never split across two physical lines, even when it
/// is wider than the configured box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Plain-text fragment
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(FragmentKind::Text, text)
    }

    /// Separator fragment
    pub fn separator(text: impl Into<String>) -> Self {
        Self::new(FragmentKind::Separator, text)
    }

    /// Printed width in character cells
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

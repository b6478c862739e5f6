use std::fmt::Display;

/// A single position in the input text.
/// `index` is a byte offset, `line` and `column` are 1-based and counted in characters.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord)]
pub struct LocationInfo {
    pub index: usize,
    pub line: usize,
    pub column: usize,
    pub eof: bool,
}

impl LocationInfo {
    pub fn new(index: usize, line: usize, column: usize) -> Self {
        Self {
            index,
            line,
            column,
            eof: false,
        }
    }

    pub fn eof(index: usize, line: usize, column: usize) -> Self {
        Self {
            index,
            line,
            column,
            eof: true,
        }
    }
}

impl Default for LocationInfo {
    fn default() -> Self {
        Self {
            index: 0,
            line: 1,
            column: 1,
            eof: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord)]
pub struct LineInfo {
    pub start: LocationInfo,
    pub end: LocationInfo,
}

impl LineInfo {
    pub fn new(start: LocationInfo, end: LocationInfo) -> Self {
        Self { start, end }
    }

    /// The byte range covered, usable for slicing the input and for reports.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.index..self.end.index
    }

    pub fn join(&self, other: &LineInfo) -> LineInfo {
        let start = if self.start.index < other.start.index {
            self.start.clone()
        } else {
            other.start.clone()
        };
        let end = if self.end.index > other.end.index {
            self.end.clone()
        } else {
            other.end.clone()
        };

        LineInfo { start, end }
    }
}

impl Display for LineInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.end.eof && self.start.index == self.end.index {
            write!(f, "end of input")
        } else {
            write!(f, "line {}, column {}", self.start.line, self.start.column)
        }
    }
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord)]
pub struct BaseErrorLabel {
    pub message: String,
    pub info: LineInfo,
}

/// The shared payload of every error the core reports:
/// a message, where it happened and optional hints for the user.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord)]
pub struct BaseError {
    pub message: String,
    pub info: LineInfo,
    pub hint: Option<String>,
    pub labels: Vec<BaseErrorLabel>,
}

impl BaseError {
    pub fn new(message: String, info: LineInfo) -> Self {
        Self {
            message,
            info,
            hint: None,
            labels: Vec::new(),
        }
    }

    pub fn with_hint(self, hint: String) -> Self {
        Self {
            hint: Some(hint),
            ..self
        }
    }

    pub fn with_label(self, message: String, info: LineInfo) -> Self {
        let mut labels = self.labels;
        labels.push(BaseErrorLabel { message, info });
        Self { labels, ..self }
    }
}

impl Display for BaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.message, self.info)
    }
}

/// Implemented by every error wrapping a [`BaseError`].
pub trait BaseErrorExt: Sized {
    fn new(message: String, info: LineInfo) -> Self;
    fn with_hint(self, hint: String) -> Self;
    fn with_label(self, message: String, info: LineInfo) -> Self;
    fn base(&self) -> &BaseError;
    fn to_base(self) -> BaseError;

    fn message(&self) -> &str {
        &self.base().message
    }

    fn info(&self) -> &LineInfo {
        &self.base().info
    }
}

//! Contains all kinds of lexical diagnostics that can be reported while tokenizing the source
//! code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use void_base::{
    log::{Message, Severity, SourceLineDisplay},
    source_file::Location,
};

/// The source code contains a `/*` comment that is never closed by `*/`.
///
/// The comment is still emitted and runs to the end of the file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedComment {
    /// The location of the `/` that opens the comment.
    pub location: Location,

    /// The full text of the line the comment opens on.
    pub line: String,
}

impl Display for UnterminatedComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Warning,
                "found an unclosed `/*` comment, it runs to the end of the file"
            ),
            SourceLineDisplay::new(
                &self.location,
                &self.line,
                Some("this comment is never closed by `*/`")
            )
        )
    }
}

/// Is an enumeration containing all kinds of lexical diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnterminatedComment(UnterminatedComment),
}

impl Error {
    /// Gets the severity the diagnostic should be reported with.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnterminatedComment(..) => Severity::Warning,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedComment(err) => write!(f, "{err}"),
        }
    }
}

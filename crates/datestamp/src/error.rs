// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::layout::ParseError;

/// The result for fallible operations that use the [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced when text does not conform to the layout of a format.
///
/// Parsing is the only fallible operation on [`Formatted`][crate::Formatted];
/// rendering and construction always succeed. The error keeps the layout that
/// was expected, the text that was offered and the diagnostic of the layout
/// engine.
///
/// # Examples
///
/// ```
/// use datestamp::format::DateOnly;
/// use datestamp::{Error, Formatted};
///
/// let err = "2024/01/01".parse::<Formatted<DateOnly>>().unwrap_err();
/// assert!(matches!(err, Error::FormatMismatch { .. }));
/// assert_eq!(err.layout(), "2006-01-02");
/// assert_eq!(err.text(), "2024/01/01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The text does not match the layout of the format.
    #[error("failed to parse time in {:?} format: {source}", .source.layout())]
    FormatMismatch {
        /// The diagnostic of the layout engine.
        #[source]
        source: ParseError,
    },
}

impl Error {
    pub(crate) const fn format_mismatch(source: ParseError) -> Self {
        Self::FormatMismatch { source }
    }

    /// The layout that the text was expected to match.
    #[must_use]
    pub fn layout(&self) -> &str {
        match self {
            Self::FormatMismatch { source } => source.layout(),
        }
    }

    /// The offending text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::FormatMismatch { source } => source.value(),
        }
    }

    /// The diagnostic of the layout engine.
    #[must_use]
    pub const fn parse_error(&self) -> &ParseError {
        match self {
            Self::FormatMismatch { source } => source,
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::format_mismatch(error)
    }
}

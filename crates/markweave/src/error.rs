//! Error types for rendering.
//!
//! [`RenderError`] is the single error type returned by every render entry
//! point. A failed render leaves whatever was already written in the
//! [`OutputBuffer`](crate::OutputBuffer); callers discard it with
//! [`clear`](crate::OutputBuffer::clear) before retrying.

use std::error::Error as StdError;

use thiserror::Error;

/// Error type for render operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested output cannot be produced in the active serialization
    /// mode, e.g. an XML-only doctype rendered with SGML syntax.
    #[error("{0}")]
    Configuration(String),

    /// A value required for output was missing or has no textual form.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error from a file-backed closure or from flushing a buffer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by caller code running inside a closure.
    ///
    /// The renderer never creates this variant; it only carries it out of
    /// nested renders untouched.
    #[error(transparent)]
    Application(Box<dyn StdError + Send + Sync + 'static>),
}

impl RenderError {
    /// Wraps an error raised by caller logic inside a closure body.
    pub fn application<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        RenderError::Application(err.into())
    }

    /// Returns `true` for [`RenderError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, RenderError::Configuration(_))
    }

    /// Returns `true` for [`RenderError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RenderError::InvalidArgument(_))
    }

    /// Returns the caller error carried by [`RenderError::Application`], if any.
    pub fn as_application(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            RenderError::Application(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("quota exceeded")]
    struct QuotaError;

    #[test]
    fn test_error_display() {
        let err = RenderError::Configuration(
            "Doctype 'mobile' incompatible with non-XML syntax".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Doctype 'mobile' incompatible with non-XML syntax"
        );

        let err = RenderError::InvalidArgument("missing value".to_string());
        assert!(err.to_string().contains("missing value"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let render_err: RenderError = io_err.into();
        assert!(matches!(render_err, RenderError::Io(_)));
    }

    #[test]
    fn test_application_error_is_transparent() {
        let err = RenderError::application(QuotaError);
        assert_eq!(err.to_string(), "quota exceeded");
        assert!(err
            .as_application()
            .and_then(|e| e.downcast_ref::<QuotaError>())
            .is_some());
    }

    #[test]
    fn test_application_from_string() {
        let err = RenderError::application("lookup failed");
        assert_eq!(err.to_string(), "lookup failed");
        assert!(!err.is_configuration());
        assert!(!err.is_invalid_argument());
    }
}

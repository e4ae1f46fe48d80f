use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for wikitoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for wikitoc operations
#[derive(Debug)]
pub enum TocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Layout template error
    Template(String),
    /// Page lookup error
    Page(String),
    /// The page holding an indirect page list does not exist
    IndirectPage(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocError::Template(msg) => write!(f, "Template error: {}", msg),
            TocError::Page(msg) => write!(f, "Page error: {}", msg),
            TocError::IndirectPage(name) => write!(f, "Indirect page '{}' does not exist.", name),
            TocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocError {}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}

impl From<String> for TocError {
    fn from(msg: String) -> Self {
        TocError::Generic(msg)
    }
}

impl From<&str> for TocError {
    fn from(msg: &str) -> Self {
        TocError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indirect_page_message() {
        let err = TocError::IndirectPage("TOC/Guide".to_string());
        assert_eq!(err.to_string(), "Indirect page 'TOC/Guide' does not exist.");
    }

    #[test]
    fn test_boxed_conversion() {
        let result: BoxResult<()> = Err(TocError::Config("bad depth".to_string()).into());
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: bad depth");
    }

    #[test]
    fn test_from_io() {
        let err: TocError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, TocError::Io(_)));
    }
}

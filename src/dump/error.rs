use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ParseError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// A captured line does not reach the value columns.
    ShortLine {
        path: PathBuf,
        line: usize,
        content: String,
    },
    /// The start tag of a required block never appears.
    MissingBlock {
        path: PathBuf,
        block: &'static str,
    },
}

impl ParseError {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        ParseError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            ParseError::ShortLine {
                path,
                line,
                content,
            } => write!(
                f,
                "{}:{}: line too short to hold a byte value: {:?}",
                path.display(),
                line,
                content
            ),
            ParseError::MissingBlock { path, block } => {
                write!(f, "{}: no block starting with {} found", path.display(), block)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io { source, .. } => Some(source),
            ParseError::ShortLine { .. } | ParseError::MissingBlock { .. } => None,
        }
    }
}

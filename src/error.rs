use std::{error::Error as StdError, fmt, io, path::Path, result::Result as StdResult, sync::Arc};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// the header could not be opened or read
    OpenError,
    /// the block marker never appeared, so nothing was collected
    MarkerNotFound,
    /// the instance type list has no sentinel entry
    SentinelNotFound,
    /// a computed code does not fit in a byte
    CodeOverflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::OpenError => "OpenError",
            ErrorKind::MarkerNotFound => "MarkerNotFound",
            ErrorKind::SentinelNotFound => "SentinelNotFound",
            ErrorKind::CodeOverflow => "CodeOverflow",
        })
    }
}

pub enum ErrorValue {
    None,
    String(String),
    External(Arc<dyn StdError + Send + Sync>),
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> StdResult<(), fmt::Error> {
        match self {
            ErrorValue::None => f.write_str(""),
            ErrorValue::String(s) => f.write_str(s),
            ErrorValue::External(e) => e.fmt(f),
        }
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> StdResult<(), fmt::Error> {
        fmt::Display::fmt(self, f)
    }
}

pub struct Error {
    pub kind: ErrorKind,
    pub value: ErrorValue,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            kind,
            value: ErrorValue::None,
        }
    }

    pub fn with_str<T: AsRef<str>>(kind: ErrorKind, message: T) -> Error {
        Error {
            kind,
            value: ErrorValue::String(message.as_ref().to_string()),
        }
    }

    pub fn with_external<T: Into<Box<dyn StdError + Send + Sync>>>(kind: ErrorKind, external: T) -> Error {
        Error {
            kind,
            value: ErrorValue::External(external.into().into()),
        }
    }

    pub(crate) fn open(path: &Path, e: io::Error) -> Error {
        Error::with_external(ErrorKind::OpenError, OpenError { path: path.display().to_string(), source: e })
    }

    pub(crate) fn marker_not_found(marker: &str) -> Error {
        Error::with_str(ErrorKind::MarkerNotFound, format!("no line contains {:?}", marker))
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::MarkerNotFound | ErrorKind::SentinelNotFound)
    }
}

#[derive(Debug)]
struct OpenError {
    path: String,
    source: io::Error,
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}: {}", self.path, self.source))
    }
}

impl StdError for OpenError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.value {
            ErrorValue::External(ref e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> StdResult<(), fmt::Error> {
        match self.value {
            ErrorValue::None => fmt::Display::fmt(&self.kind, f),
            _ => f.write_fmt(format_args!("{}: {}", self.kind, self.value)),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> StdResult<(), fmt::Error> {
        fmt::Display::fmt(self, f)
    }
}

pub type Result<T> = StdResult<T, Error>;

use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by the fallible operations of this crate.
#[derive(Debug)]
pub struct Error {
    kind: Box<ErrorKind>,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// `std::io::Error`
    Io(io::Error),
    /// The requested sequence length was zero or not a number.
    InvalidLength {
        /// The offending input, verbatim.
        input: String,
    },
    /// The identifier contains characters that are not safe as a file
    /// name fragment (anything outside `\w`).
    InvalidIdentifier {
        /// The rejected identifier.
        id: String,
    },
    /// The analyzed sequence contains no A/C/G/T characters, so the
    /// composition percentages are undefined.
    DegenerateSequence,
    /// Hints that destructuring should not be exhaustive,
    /// makes sure that adding new variants will not break the code.
    #[doc(hidden)]
    __Nonexhaustive,
}

impl Error {
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Error {
            kind: Box::new(kind),
        }
    }

    /// Returns a reference to the [`ErrorKind`](ErrorKind)
    /// associated with the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the [`ErrorKind`](ErrorKind) associated with
    /// the error, thereby consuming the error.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        *self.kind
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error {
            kind: Box::new(ErrorKind::Io(e)),
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        io::Error::new(io::ErrorKind::Other, err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(ref e) => e.fmt(f),
            ErrorKind::InvalidLength { input } => write!(
                f,
                "invalid sequence length: '{}' (a positive integer is required)",
                input
            ),
            ErrorKind::InvalidIdentifier { id } => write!(
                f,
                "invalid sequence identifier: '{}' (only letters, digits and underscores are allowed)",
                id
            ),
            ErrorKind::DegenerateSequence => write!(
                f,
                "sequence contains no A/C/G/T characters, composition is undefined"
            ),
            _ => Ok(()),
        }
    }
}

use std::fmt::Display;

pub use showtimes_syntax::error::Error as ParserError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    /// The text of a cell doesn't follow the showtime notation.
    Parser(ParserError),
    /// A theater entry has no `<theater>: ` prefix.
    MissingSeparator(String),
    /// A segment was expected to start with a list of days.
    NotDaySegment(String),
}

impl From<ParserError> for Error {
    fn from(err: ParserError) -> Self {
        Self::Parser(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parser(err) => write!(f, "{err}"),
            Self::MissingSeparator(entry) => {
                write!(f, "missing `: ` between theater and showtimes in `{entry}`")
            }
            Self::NotDaySegment(segment) => {
                write!(f, "`{segment}` doesn't start with a list of days")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parser(err) => Some(err),
            _ => None,
        }
    }
}

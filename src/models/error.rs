use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    LexiconError(String),
    InsufficientRows(usize),
    NoComments,
    DecodeError(std::string::FromUtf8Error),
    IoError(std::io::Error),
    CsvError(csv::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::LexiconError(msg) => write!(f, "Lexicon Error: {}", msg),
            Error::InsufficientRows(lines) => write!(
                f,
                "CSV file must have at least a header and one data row (found {} line(s))",
                lines
            ),
            Error::NoComments => write!(f, "No valid comments found in CSV file"),
            Error::DecodeError(err) => write!(f, "Decode Error: {}", err),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DecodeError(err) => Some(err),
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::ParserError(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::ParserError(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Error {
        Error::DecodeError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Other(err.to_string())
    }
}

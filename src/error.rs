use std::{fmt, io, result};

/// Result alias used throughout this crate.
pub type Result<T> = result::Result<T, Error>;

/// Error variants surfaced by the double-array trie and its codec.
///
/// `AllocationFailure`, as named in the design, has no separate variant
/// here: in a `Vec`-backed implementation the only *recoverable*
/// allocation-shaped failure is running past [`crate::trie::TRIE_MAX_INDEX`],
/// which is [`Error::IndexOverflow`].
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Node-store growth would exceed `TRIE_MAX_INDEX`.
    IndexOverflow(String),
    /// On-disk signature did not match, or a structural field was
    /// out of range (alphabet size, negative length, etc).
    InvalidFormat(String),
    /// A read stopped short of the bytes the header promised.
    TruncatedInput(String),
    /// A size/offset did not fit the target integer type.
    FailConvert(String),
    /// Propagated `std::io::Error`, message pre-rendered so `Error`
    /// can stay `PartialEq`.
    IoError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IndexOverflow(msg) => write!(f, "index-overflow: {}", msg),
            Error::InvalidFormat(msg) => write!(f, "invalid-format: {}", msg),
            Error::TruncatedInput(msg) => write!(f, "truncated-input: {}", msg),
            Error::FailConvert(msg) => write!(f, "fail-convert: {}", msg),
            Error::IoError(msg) => write!(f, "io-error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err.to_string())
    }
}

/// Stamp a module-local error with a formatted message, or adapt a
/// `Result` whose error type implements `Display` into ours.
///
/// ```ignore
/// err_at!(InvalidFormat, msg: "bad signature {:#x}", got)
/// err_at!(FailConvert, usize::try_from(n))
/// ```
#[macro_export]
macro_rules! err_at {
    ($variant:ident, msg: $($arg:tt)*) => {
        Err($crate::error::Error::$variant(format!($($arg)*)))
    };
    ($variant:ident, $e:expr) => {
        match $e {
            Ok(val) => Ok(val),
            Err(err) => Err($crate::error::Error::$variant(format!(
                "{}:{} {}",
                file!(),
                line!(),
                err
            ))),
        }
    };
}

use std::{
    error::Error as StdError,
    fmt,
    io::Error as IoError,
    num::{ParseFloatError, ParseIntError},
};

/// `Result<_, ParseError>`
pub type ParseResult<T> = Result<T, ParseError>;

/// Anything that could go wrong while parsing a [`Beatmap`](crate::Beatmap).
#[derive(Debug)]
pub enum ParseError {
    /// Some IO operation failed.
    IoError(IoError),
    /// The initial data of an `.osu` file was incorrect.
    IncorrectFileHeader,
    /// A line of a key-value section had no `:`.
    BadLine,
    /// A required field of a line was missing.
    MissingField(&'static str),
    /// Failed to parse a float.
    InvalidFloat(ParseFloatError),
    /// A float was NaN or infinite where that's not allowed.
    InvalidFloatingPoint,
    /// Failed to parse an integer.
    InvalidInteger(ParseIntError),
    /// A number exceeded its allowed range.
    NumberOverflow,
    /// The curve points of a slider could not be parsed.
    InvalidCurvePoints,
    /// Path type of a slider was not `B`, `C`, `L`, or `P`.
    InvalidPathType,
    /// A slider had more slides than osu! allows.
    InvalidRepeatCount,
    /// The type flags of a hit object did not contain a known kind.
    UnknownHitObjectKind,
    /// Only osu!standard maps are supported.
    UnsupportedMode(u8),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(_) => f.write_str("IO error"),
            Self::IncorrectFileHeader => {
                f.write_str("expected `osu file format v` at file begin")
            }
            Self::BadLine => f.write_str("line not in `Key:Value` pattern"),
            Self::MissingField(field) => write!(f, "missing field `{field}`"),
            Self::InvalidFloat(_) => f.write_str("failed to parse float"),
            Self::InvalidFloatingPoint => f.write_str("float must be finite"),
            Self::InvalidInteger(_) => f.write_str("failed to parse integer"),
            Self::NumberOverflow => f.write_str("number exceeds its allowed range"),
            Self::InvalidCurvePoints => f.write_str("invalid curve points"),
            Self::InvalidPathType => f.write_str("invalid path type"),
            Self::InvalidRepeatCount => f.write_str("repeat count is way too high"),
            Self::UnknownHitObjectKind => f.write_str("unsupported hitobject kind"),
            Self::UnsupportedMode(mode) => {
                write!(f, "mode {mode} is not supported, only osu!standard is")
            }
        }
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::IoError(inner) => Some(inner),
            Self::InvalidFloat(inner) => Some(inner),
            Self::InvalidInteger(inner) => Some(inner),
            Self::IncorrectFileHeader
            | Self::BadLine
            | Self::MissingField(_)
            | Self::InvalidFloatingPoint
            | Self::NumberOverflow
            | Self::InvalidCurvePoints
            | Self::InvalidPathType
            | Self::InvalidRepeatCount
            | Self::UnknownHitObjectKind
            | Self::UnsupportedMode(_) => None,
        }
    }
}

impl From<IoError> for ParseError {
    fn from(other: IoError) -> Self {
        Self::IoError(other)
    }
}

impl From<ParseFloatError> for ParseError {
    fn from(other: ParseFloatError) -> Self {
        Self::InvalidFloat(other)
    }
}

impl From<ParseIntError> for ParseError {
    fn from(other: ParseIntError) -> Self {
        Self::InvalidInteger(other)
    }
}

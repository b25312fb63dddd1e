//! View queries and picture size parsing (e.g., "640x400").

use std::fmt;
use thiserror::Error;

/// Largest width or height the Street View Static API will serve.
pub const MAX_DIMENSION: u32 = 640;

/// Error parsing a picture size string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid size '{input}' - expected format like '640x640' or '400x300'")]
pub struct SizeParseError {
    input: String,
}

impl SizeParseError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Requested picture dimensions.
///
/// The API caps each dimension at [`MAX_DIMENSION`]; larger values are
/// clamped on construction rather than rejected.
///
/// # Examples
///
/// ```
/// use streetfetch::query::PicSize;
///
/// let size: PicSize = "400x300".parse().unwrap();
/// assert_eq!(size.width(), 400);
/// assert_eq!(size.height(), 300);
/// assert_eq!(size.to_string(), "400x300");
///
/// // Oversized dimensions are clamped to the API cap.
/// assert_eq!(PicSize::new(1280, 720).to_string(), "640x640");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PicSize {
    width: u32,
    height: u32,
}

impl PicSize {
    /// Creates a size, clamping each dimension to the API cap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.min(MAX_DIMENSION),
            height: height.min(MAX_DIMENSION),
        }
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }
}

impl Default for PicSize {
    /// The largest size the API serves, `640x640`.
    fn default() -> Self {
        Self {
            width: MAX_DIMENSION,
            height: MAX_DIMENSION,
        }
    }
}

impl fmt::Display for PicSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parse a `"WxH"` size string into a [`PicSize`].
///
/// Supports:
/// - Lowercase or uppercase `x` separator
/// - Whitespace around and between the numbers
///
/// Dimensions above the API cap are clamped rather than rejected.
///
/// # Examples
///
/// ```
/// use streetfetch::query::parse_size;
///
/// assert_eq!(parse_size("640x400").unwrap().to_string(), "640x400");
/// assert_eq!(parse_size("400 X 300").unwrap().to_string(), "400x300");
/// assert_eq!(parse_size("1280x720").unwrap().to_string(), "640x640");
/// assert!(parse_size("640").is_err());
/// ```
pub fn parse_size(s: &str) -> Result<PicSize, SizeParseError> {
    let trimmed = s.trim();
    let (w, h) = trimmed.split_once(['x', 'X']).ok_or_else(|| SizeParseError::new(s))?;

    let width: u32 = w.trim().parse().map_err(|_| SizeParseError::new(s))?;
    let height: u32 = h.trim().parse().map_err(|_| SizeParseError::new(s))?;

    Ok(PicSize::new(width, height))
}

impl std::str::FromStr for PicSize {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_size(s)
    }
}

/// The location and picture size for one Street View lookup.
///
/// The location string is sent to the API verbatim; it is only sanitised
/// when artifact file names are derived from it (see [`crate::paths`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    /// Free-form location (address, landmark, or "lat,lng")
    pub location: String,
    /// Requested picture dimensions
    pub size: PicSize,
}

impl ViewQuery {
    /// Creates a query for a location with the given picture size.
    pub fn new(location: impl Into<String>, size: PicSize) -> Self {
        Self {
            location: location.into(),
            size,
        }
    }
}

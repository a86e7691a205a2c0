// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Frame(FrameError),
}

/// Reasons a frame value could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Width or height is zero.
    ZeroDimensions,

    /// Pixel buffer length does not match width × height × 4.
    PixelBufferMismatch { expected: usize, actual: usize },

    /// Width × height × 4 does not fit in memory addressing.
    TooLarge,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::ZeroDimensions => write!(f, "Frame has zero width or height"),
            FrameError::PixelBufferMismatch { expected, actual } => write!(
                f,
                "Pixel buffer holds {} bytes, expected {}",
                actual, expected
            ),
            FrameError::TooLarge => write!(f, "Frame dimensions overflow"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Frame(e) => write!(f, "Frame Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FrameError> for Error {
    fn from(err: FrameError) -> Self {
        Error::Frame(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_error = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = toml_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn frame_error_wraps_into_error() {
        let err: Error = FrameError::PixelBufferMismatch {
            expected: 16,
            actual: 8,
        }
        .into();
        assert_eq!(
            format!("{}", err),
            "Frame Error: Pixel buffer holds 8 bytes, expected 16"
        );
    }

    #[test]
    fn frame_error_display() {
        assert!(format!("{}", FrameError::ZeroDimensions).contains("zero"));
        assert!(format!("{}", FrameError::TooLarge).contains("overflow"));
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Jbig2Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("Pix error: {0}")]
    PixError(String),

    #[error("JBIG2 encode error: {0}")]
    Jbig2EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Generates factory methods for [`Jbig2Error`] variants that wrap a `String`.
macro_rules! error_constructors {
    ($(
        $(#[doc = $doc:expr])*
        $method:ident => $variant:ident
    ),* $(,)?) => {
        impl Jbig2Error {
            $(
                $(#[doc = $doc])*
                pub fn $method(msg: impl Into<String>) -> Self {
                    Self::$variant(msg.into())
                }
            )*
        }
    };
}

error_constructors! {
    /// Create a configuration error.
    config => ConfigError,
    /// Create an image decoding error.
    image => ImageError,
    /// Create a leptonica Pix error.
    pix => PixError,
    /// Create a JBIG2 encode error.
    jbig2_encode => Jbig2EncodeError,
}

impl From<serde_yml::Error> for Jbig2Error {
    fn from(e: serde_yml::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}

impl From<image::ImageError> for Jbig2Error {
    fn from(e: image::ImageError) -> Self {
        Self::ImageError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Jbig2Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_pick_matching_variant() {
        assert!(matches!(Jbig2Error::config("x"), Jbig2Error::ConfigError(_)));
        assert!(matches!(Jbig2Error::image("x"), Jbig2Error::ImageError(_)));
        assert!(matches!(Jbig2Error::pix("x"), Jbig2Error::PixError(_)));
        assert!(matches!(
            Jbig2Error::jbig2_encode("x"),
            Jbig2Error::Jbig2EncodeError(_)
        ));
    }

    #[test]
    fn test_display_includes_message() {
        let err = Jbig2Error::jbig2_encode("encoder returned NULL");
        assert_eq!(err.to_string(), "JBIG2 encode error: encoder returned NULL");
    }

    #[test]
    fn test_yaml_error_converts_to_config_error() {
        let yaml_err = serde_yml::from_str::<u8>("not a number").unwrap_err();
        let err: Jbig2Error = yaml_err.into();
        assert!(matches!(err, Jbig2Error::ConfigError(_)));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Jbig2Error = io.into();
        assert!(matches!(err, Jbig2Error::IoError(_)));
    }
}

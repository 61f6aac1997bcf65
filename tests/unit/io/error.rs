//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use gaussmask::NoiseError;
    use gaussmask::io::error::{invalid_covariance, invalid_parameter, shape_error};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = NoiseError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("granularity", &-0.5, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("granularity"));
        assert!(message.contains("-0.5"));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests covariance errors carry their reason
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_covariance_error() {
        let error = invalid_covariance(&"matrix must be symmetric");

        assert!(matches!(error, NoiseError::InvalidCovariance { .. }));
        assert!(error.to_string().contains("matrix must be symmetric"));
    }

    // Tests shape errors report the operation and both shapes
    // Verified by omitting the found shape
    #[test]
    fn test_shape_error() {
        let error = shape_error("overlay", &[200, 200], &[200, 300, 3]);

        let message = error.to_string();
        assert!(message.contains("overlay"));
        assert!(message.contains("[200, 200]"));
        assert!(message.contains("[200, 300, 3]"));
    }

    // Tests ImageLoad error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_load_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = NoiseError::ImageLoad {
            path: PathBuf::from("/restricted/input.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/input.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests render errors name the output path
    // Verified by omitting the path from the message
    #[test]
    fn test_render_error() {
        let error = NoiseError::Render {
            path: PathBuf::from("out/mask.png"),
            reason: "backend failure".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("out/mask.png"));
        assert!(message.contains("backend failure"));
    }

    // Tests conversion from io errors
    // Verified by converting into a render error
    #[test]
    fn test_from_io_error() {
        let error: NoiseError = std::io::Error::other("boom").into();

        assert!(matches!(error, NoiseError::FileSystem { .. }));
    }
}

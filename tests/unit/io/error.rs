//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use gridkit::GridError;
    use gridkit::io::error::{WithOperation, invalid_parameter, out_of_bounds, validation_error};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GridError::Io {
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(validation_error(&"bad").source().is_none());
    }

    // Tests out-of-bounds messages name the coordinate and shape
    // Verified by omitting dimensions from message
    #[test]
    fn test_out_of_bounds_message() {
        let message = out_of_bounds(4, 7, (3, 5)).to_string();
        assert!(message.contains("(4, 7)"));
        assert!(message.contains("3x5"));

        let split = GridError::IndexOutOfBounds {
            row: 0,
            column: 1,
            index: Some(2),
            dimensions: (2, 2),
        };
        assert!(split.to_string().contains("(0, 1, 2)"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("field_delimiter", &"", &"must not be empty");
        let message = error.to_string();

        assert!(message.contains("field_delimiter"));
        assert!(message.contains("must not be empty"));
    }

    // Tests parse errors carry the offending field
    // Verified by dropping the field text from message
    #[test]
    fn test_parse_error_message() {
        let error = GridError::Parse {
            row: 1,
            column: 2,
            field: "x7".to_string(),
            reason: "invalid digit".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("'x7'"));
        assert!(message.contains("(1, 2)"));
    }

    // Tests conversions from library errors
    // Verified by mapping serde errors to Validation
    #[test]
    fn test_from_conversions() {
        let json_error = serde_json::from_str::<u8>("not json").err();
        assert!(matches!(
            json_error.map(GridError::from),
            Some(GridError::Serialization { .. })
        ));

        let io_error = std::io::Error::other("boom");
        assert!(matches!(
            GridError::from(io_error),
            GridError::Io { operation: "unknown", .. }
        ));
    }

    // Tests operation names attach to I/O failures
    // Verified by keeping the default operation name
    #[test]
    fn test_with_operation() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::other("disk"));
        let error = result.with_operation("writing delimited text").err();

        assert!(matches!(
            error,
            Some(GridError::Io { operation: "writing delimited text", .. })
        ));
    }
}

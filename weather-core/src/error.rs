use thiserror::Error;

/// The only failure a user ever sees from a search.
///
/// Network failures, unknown cities and malformed payloads all collapse into
/// `NotFound`; the underlying cause is logged, not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("No City Found. Please Enter Correct City Name.")]
    NotFound,
}

/// Returned when a CLI string does not name a known unit, field or reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'. Expected one of: {expected}.")]
pub struct ParseError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self { kind, value: value.to_string(), expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_user_facing() {
        assert_eq!(
            QueryError::NotFound.to_string(),
            "No City Found. Please Enter Correct City Name."
        );
    }

    #[test]
    fn parse_error_lists_expected_values() {
        let err = ParseError::new("wind unit", "knots", "m/s, mph");
        assert_eq!(err.to_string(), "Unknown wind unit 'knots'. Expected one of: m/s, mph.");
    }
}

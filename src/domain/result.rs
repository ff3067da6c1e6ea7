//! Result type alias for bizdir
//!
//! This module provides a convenient Result type alias that uses BizdirError
//! as the error type.

use super::errors::BizdirError;

/// Result type alias for bizdir operations
///
/// # Examples
///
/// ```
/// use bizdir::domain::result::Result;
/// use bizdir::domain::errors::BizdirError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(BizdirError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BizdirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(BizdirError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}

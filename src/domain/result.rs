//! Result type alias for cosmos-crud

use super::errors::CrudError;

/// Result type alias using [`CrudError`] as the error type
///
/// # Examples
///
/// ```
/// use cosmos_crud::domain::result::Result;
/// use cosmos_crud::domain::errors::CrudError;
///
/// fn failing_function() -> Result<()> {
///     Err(CrudError::Configuration("missing environment variable: DOCUMENT_DB_URI".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CrudError>;

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
}

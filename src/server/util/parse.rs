use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a value stored as text into its domain type.
///
/// Used at the repository boundary when converting entity models, so a corrupted
/// row surfaces as an internal error instead of a panic.
///
/// # Arguments
/// - `entity` - Table name, used in the error message
/// - `field` - Column name, used in the error message
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(InvalidStoredValue))` - Value outside the allowed set
pub fn parse_stored<T: FromStr>(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<T, AppError> {
    let parsed = value
        .parse::<T>()
        .map_err(|_| InternalError::InvalidStoredValue {
            entity,
            field,
            value: value.to_string(),
        })?;

    Ok(parsed)
}

/// Parses an optional stored value, keeping `None` as `None`.
pub fn parse_stored_opt<T: FromStr>(
    entity: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<T>, AppError> {
    value
        .map(|value| parse_stored(entity, field, value))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::auth::Role;

    #[test]
    fn parses_known_value() {
        let role: Role = parse_stored("user", "role", "admin").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn rejects_unknown_value_as_internal_error() {
        let result = parse_stored::<Role>("user", "role", "superuser");
        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::InvalidStoredValue { field: "role", .. }))
        ));
    }

    #[test]
    fn keeps_none() {
        let method: Option<Role> = parse_stored_opt("user", "role", None).unwrap();
        assert!(method.is_none());
    }
}

//! Field assertions.
//!
//! These return [`HarnessError`]s instead of panicking so scenarios can use
//! `?` and report which field failed.

use serde_json::Value;

use crate::error::{HarnessError, HarnessResult};

/// Checks that a field holds exactly the expected value.
pub fn expect_eq(field: &str, actual: &str, expected: &str) -> HarnessResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::FieldMismatch {
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// Checks that a field is not empty.
pub fn expect_not_empty(field: &str, actual: &str) -> HarnessResult<()> {
    if actual.is_empty() {
        Err(HarnessError::EmptyField {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Gets a value from a JSON object using a simple path notation.
///
/// Supports:
/// - `field` - Direct field access
/// - `field.nested` - Nested field access
/// - `field[0]` - Array index access
pub fn json_path_get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for part in path.split('.') {
        if let Some(bracket_pos) = part.find('[') {
            let field_name = &part[..bracket_pos];
            let index: usize = part[bracket_pos + 1..].strip_suffix(']')?.parse().ok()?;

            if !field_name.is_empty() {
                current = current.get(field_name)?;
            }
            current = current.get(index)?;
        } else {
            current = current.get(part)?;
        }
    }

    Some(current)
}

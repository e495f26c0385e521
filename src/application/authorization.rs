//! Ownership-based authorization checks.
//!
//! Mutations on owned resources (houses, user profiles) all funnel through
//! [`ensure_owner`] so the principal-vs-owner comparison lives in one place
//! instead of being duplicated per handler.

use serde_json::json;

use crate::error::AppError;

/// Verifies that the authenticated principal owns the resource.
///
/// # Errors
///
/// Returns [`AppError::Unauthorized`] when `principal` differs from `owner`.
pub fn ensure_owner(principal: i64, owner: i64) -> Result<(), AppError> {
    if principal != owner {
        return Err(AppError::unauthorized(
            "You do not own this resource",
            json!({ "principal": principal }),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_passes() {
        assert!(ensure_owner(7, 7).is_ok());
    }

    #[test]
    fn test_non_owner_is_unauthorized() {
        let err = ensure_owner(7, 8).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }
}

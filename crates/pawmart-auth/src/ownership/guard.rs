//! Ownership guard.
//!
//! Mutations follow a fixed order: the resource must exist (`NotFound`), the
//! caller must be its recorded owner (`Forbidden`), and only then may the
//! store be written.

use tracing::warn;

use pawmart_core::error::AppError;
use pawmart_core::traits::Owned;

/// Checks an owner claim from a request body against the authenticated identity.
///
/// A claim never grants ownership: at most it can agree with `identity`.
/// When `required` is set an absent claim is a validation error.
pub fn verify_claimed_owner(
    identity: &str,
    claimed: Option<&str>,
    required: bool,
) -> Result<(), AppError> {
    match claimed {
        Some(claimed) if claimed == identity => Ok(()),
        Some(claimed) => {
            warn!(identity, claimed, "Owner claim does not match identity");
            Err(AppError::forbidden(
                "Owner in request does not match the authenticated identity",
            ))
        }
        None if required => Err(AppError::validation("Owner (email) is required")),
        None => Ok(()),
    }
}

/// Resolves a fetched resource for mutation by `identity`.
///
/// `what` names the resource kind in error messages.
pub fn require_owner<R: Owned>(
    identity: &str,
    resource: Option<R>,
    what: &str,
) -> Result<R, AppError> {
    let resource = resource.ok_or_else(|| AppError::not_found(format!("{what} not found")))?;

    if !resource.is_owned_by(identity) {
        warn!(
            identity,
            owner = resource.owner(),
            resource = what,
            "Ownership check failed"
        );
        return Err(AppError::forbidden(format!(
            "Only the owner may modify this {}",
            what.to_lowercase()
        )));
    }

    Ok(resource)
}

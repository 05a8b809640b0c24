//! Ownership guard for mutating account operations.
//!
//! Ownership is the only access rule in this domain: a caller may act on
//! their own account and nothing else.

use tracing::warn;

use crate::domain::{AccountError, UserId};

/// Allow an action on `target` only when it is the caller's own account.
///
/// # Examples
/// ```
/// use accounts::domain::{AccountError, UserId, authorize_self_action};
///
/// let seven = UserId::new(7).unwrap();
/// let nine = UserId::new(9).unwrap();
/// assert!(authorize_self_action(seven, seven).is_ok());
/// assert_eq!(authorize_self_action(seven, nine), Err(AccountError::Forbidden));
/// ```
pub fn authorize_self_action(target: UserId, caller: UserId) -> Result<(), AccountError> {
    if target == caller {
        Ok(())
    } else {
        warn!(%target, %caller, "caller attempted to act on another account");
        Err(AccountError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn id(raw: u64) -> UserId {
        UserId::new(raw).expect("fixture id")
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(7, 7, true)]
    #[case(7, 9, false)]
    #[case(9, 7, false)]
    #[case(u64::MAX, 1, false)]
    fn allows_only_matching_ids(#[case] target: u64, #[case] caller: u64, #[case] allowed: bool) {
        let result = authorize_self_action(id(target), id(caller));
        assert_eq!(result.is_ok(), allowed);
        if !allowed {
            assert_eq!(result, Err(AccountError::Forbidden));
        }
    }
}

use cosmwasm_std::{Addr, Storage};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::state::{PARTICIPANTS, STATE_V1};
use crate::core::types::asset_operation::AssetOperation;
use crate::core::types::caller_identity::CallerIdentity;
use crate::util::aliases::AssetResult;

/// Supplies the verified identity of the sender of each message.
pub trait IdentityProvider {
    /// Resolves the sender into its [CallerIdentity](crate::core::types::caller_identity::CallerIdentity).
    /// Senders that were never issued an identity are denied the attempted operation.
    ///
    /// # Parameters
    ///
    /// * `sender` The chain-verified address of the sender.
    /// * `operation` The operation the sender is attempting.
    fn resolve_caller(&self, sender: &Addr, operation: AssetOperation)
        -> AssetResult<CallerIdentity>;
}

/// Looks the sender up in the participant registry.  Shared by the execute routes, which hold a
/// mutable storage, and the query routes, which do not.
///
/// # Parameters
///
/// * `storage` A reference to the contract's internal storage.
/// * `sender` The address to resolve.
/// * `operation` The operation being attempted, reported in the denial when the sender is unknown.
pub fn resolve_registered_caller(
    storage: &dyn Storage,
    sender: &Addr,
    operation: AssetOperation,
) -> AssetResult<CallerIdentity> {
    match PARTICIPANTS.may_load(storage, sender)? {
        Some(participant) => participant.to_caller_identity().to_ok(),
        None => ContractError::AccessDenied {
            operation: operation.name().to_string(),
            allowed_roles: STATE_V1.load(storage)?.role_policy.allowed_roles(operation),
            explanation: "caller is not a registered participant".to_string(),
        }
        .to_err(),
    }
}

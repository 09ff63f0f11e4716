//! Contains all structs used to drive core functionality throughout the contract.

/// The decision a single required approval role has recorded in the current review cycle.
pub mod approval_state;
/// The public asset record and its approval bookkeeping.
pub mod asset;
/// A committed version of an asset, as exposed by the history query.
pub mod asset_history_entry;
/// Names every operation that passes through the access policy.
pub mod asset_operation;
/// The lifecycle statuses of an asset and the transition table between them.
pub mod asset_status;
pub mod caller_identity;
pub mod participant;
pub mod private_asset_record;
pub mod private_collection;
/// Defines the injected role configuration used by the access policy.
pub mod role_policy;
pub mod transaction_context;

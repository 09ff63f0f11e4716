//! The pure decision logic of the contract.  Nothing in this module touches storage: every function
//! receives the current record, the caller and the transaction facts, and returns either the next
//! record or an error.

/// Evaluates role and ownership rules of the injected [RolePolicy](crate::core::types::role_policy::RolePolicy).
pub mod access_policy;
/// The asset lifecycle: one pure function per state-changing operation, plus a dispatch table.
pub mod asset_state_machine;
/// Decoding of the transient private payload and the access rules of the private partition.
pub mod private_data_partition;

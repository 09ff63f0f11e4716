//! Functionality used to ensure the logical integrity of received external values.

/// Syntactic rules for individual fields: asset ids, free text and labels.
pub mod field_validation;
/// Validates the integrity of an intercepted [ExecuteMsg](crate::core::msg::ExecuteMsg) variant.
pub mod validate_execute_msg;
/// Validates the integrity of an intercepted [InitMsg](crate::core::msg::InitMsg), including its
/// [RolePolicy](crate::core::types::role_policy::RolePolicy) and initial participants.
pub mod validate_init_msg;

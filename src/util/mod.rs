//! Miscellaneous functionalities that do not logically belong to a concrete group.

/// Defines various types with type aliases to shorten syntax used elsewhere in the contract code.
pub mod aliases;
/// Defines all global constant values used throughout the contract.
pub mod constants;
/// Functions that perform common actions for the [execute](crate::contract::execute), [query](crate::contract::query),
/// [instantiate](crate::contract::instantiate), and [migrate](crate::contract::migrate) functions.
pub mod contract_helpers;
/// Helpers to ensure that emitting event attributes on [execute](crate::contract::execute) calls
/// occurs with standard values throughout the contract.
pub mod event_attributes;
/// Miscellaneous functions to use in various scenarios throughout the contract's execution.
pub mod functions;

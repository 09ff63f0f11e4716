//! Complex structs used to perform storage-backed operations in a centralized location.

/// Defines the trait used for fetching, persisting and listing public asset records.
pub mod asset_repository;
/// Ties all service code together into a cohesive struct used by the execute routes.
pub mod asset_service;
/// Allows dynamic delegation of a cosmwasm [DepsMut](cosmwasm_std::DepsMut) to prevent
/// common issues that arise when the struct is moved.
pub mod deps_manager;
/// Defines the trait used to resolve a message sender into its verified identity.
pub mod identity_provider;
/// Defines the trait used for the restricted partition that holds confidential records.
pub mod private_data_repository;

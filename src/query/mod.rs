//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.

pub mod query_asset;
pub mod query_asset_history;
pub mod query_assets;
pub mod query_participant;
pub mod query_state;
pub mod query_version;

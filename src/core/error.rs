use cosmwasm_std::StdError;
use thiserror::Error;

use super::types::asset_status::AssetStatus;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    #[error("Access denied for operation [{operation}], allowed roles {allowed_roles:?}: {explanation}")]
    AccessDenied {
        operation: String,
        allowed_roles: Vec<String>,
        explanation: String,
    },

    #[error("Role [{role}] has already acted on asset [{asset_id}] in the current review cycle")]
    AlreadyActed { asset_id: String, role: String },

    #[error("Asset [{asset_id}] already exists")]
    AssetAlreadyExists { asset_id: String },

    #[error("Asset [{asset_id}] not found")]
    AssetNotFound { asset_id: String },

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },

    #[error("{0}")]
    InvalidFunds(String),

    #[error("Message of type [{message_type}] was invalid. Invalid fields: {invalid_fields:?}")]
    InvalidMessageFields {
        message_type: String,
        invalid_fields: Vec<String>,
    },

    #[error("Invalid message type provided. Expected message type {expected_message_type}")]
    InvalidMessageType { expected_message_type: String },

    #[error("Operation [{operation}] cannot move an asset from status [{current}] to [{requested}]")]
    InvalidStateTransition {
        operation: String,
        current: AssetStatus,
        requested: AssetStatus,
    },

    #[error("Participant [{address}] already exists")]
    ParticipantAlreadyExists { address: String },

    #[error("Participant [{address}] not found")]
    ParticipantNotFound { address: String },

    #[error("Private data for asset [{asset_id}] not found")]
    PrivateDataNotFound { asset_id: String },

    #[error("Unauthorized: {explanation}")]
    Unauthorized { explanation: String },

    #[error("Unexpected state: {explanation}")]
    UnexpectedState { explanation: String },
}

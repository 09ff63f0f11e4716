use cosmwasm_std::Binary;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::types::asset::AssetV1;
use crate::core::types::asset_history_entry::AssetHistoryEntry;
use crate::core::types::asset_status::AssetStatus;
use crate::core::types::participant::ParticipantInput;
use crate::core::types::private_collection::PrivateCollectionConfig;
use crate::core::types::role_policy::RolePolicy;

/// The struct used to instantiate the contract.  Utilized in the core [contract file](crate::contract::instantiate).
///
/// # Parameters
///
/// * `role_policy` The role configuration used for every access decision.  Cannot be changed
/// after instantiation.
/// * `private_collection` The membership configuration of the private partition.
/// * `participants` The participants to register alongside instantiation.  More can be added by
/// the admin later through [AddParticipant](self::ExecuteMsg::AddParticipant).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct InitMsg {
    pub role_policy: RolePolicy,
    pub private_collection: PrivateCollectionConfig,
    pub participants: Vec<ParticipantInput>,
}

/// The enum of all execution routes, used in the core [contract file](crate::contract::execute).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Creates a new asset owned by the sender.  Only available to the owner role.
    ///
    /// # Parameters
    ///
    /// * `asset_id` The unique identifier of the new asset.
    /// * `description` The asset's description.
    /// * `private_payload` An optional base64-encoded json
    /// [PrivateAssetInput](crate::core::types::private_asset_record::PrivateAssetInput) that is
    /// written to the private partition and never to the public record.
    CreateAsset {
        asset_id: String,
        description: String,
        private_payload: Option<Binary>,
    },
    /// Moves a created or rejected asset into review, resetting every approval to pending.
    SubmitForApproval { asset_id: String },
    /// Records the sender's role approval.  The asset becomes approved in the same transaction that
    /// records the final required approval.
    ApproveAsset { asset_id: String },
    /// Records the sender's role rejection and immediately rejects the asset.
    RejectAsset { asset_id: String, reason: String },
    /// Activates an approved asset.
    ActivateAsset { asset_id: String },
    /// Replaces the description of a created or rejected asset.
    UpdateAsset {
        asset_id: String,
        description: String,
    },
    /// Soft-deletes an asset that is not under review.
    DeleteAsset { asset_id: String },
    /// Returns the asset's confidential record as the response data.
    ReadPrivateAsset { asset_id: String },
    /// Registers a new participant.  Admin only.
    AddParticipant {
        address: String,
        role: String,
        org_label: String,
    },
    /// Removes a registered participant.  Admin only.
    RemoveParticipant { address: String },
}

/// The enum of all query routes, used in the core [contract file](crate::contract::query).
///
/// Smart queries carry no signer, so `caller` is an asserted participant address that must be
/// registered.  Confidential data is only served through [ExecuteMsg::ReadPrivateAsset](self::ExecuteMsg::ReadPrivateAsset).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Fetches a single asset.  Deleted assets are hidden unless `include_deleted` is true.
    QueryAsset {
        asset_id: String,
        caller: String,
        include_deleted: Option<bool>,
    },
    /// Lists assets, optionally filtered by status and owner fingerprint.
    QueryAssets {
        caller: String,
        status: Option<AssetStatus>,
        owner: Option<String>,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Fetches every committed version of an asset, oldest first.
    QueryAssetHistory { asset_id: String, caller: String },
    /// Fetches a registered participant by address.
    QueryParticipant { address: String },
    /// Fetches the contract's stored configuration.
    QueryState {},
    /// Fetches the contract's stored version information.
    QueryVersion {},
}

/// The enum of all migration routes, used in the core [contract file](crate::contract::migrate).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    /// Runs a standard migration, verifying the contract name and version before storing the new
    /// version info.
    ContractUpgrade {},
}

/// The response payload of [QueryMsg::QueryAssets](self::QueryMsg::QueryAssets).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct AssetsResponse {
    pub assets: Vec<AssetV1>,
}

/// The response payload of [QueryMsg::QueryAssetHistory](self::QueryMsg::QueryAssetHistory).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct AssetHistoryResponse {
    pub asset_id: String,
    pub history: Vec<AssetHistoryEntry>,
}

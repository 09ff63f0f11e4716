use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::util::aliases::AssetResult;
use crate::validation::field_validation::{
    asset_id_errors, description_errors, label_errors, rejection_reason_errors,
};

use result_extensions::ResultExtensions;

/// Validates that an execute message's fields are syntactically valid before any storage is
/// touched.  Shape checks that depend on stored state are left to the engine.
///
/// # Parameters
///
/// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
pub fn validate_execute_msg(msg: &ExecuteMsg) -> AssetResult<()> {
    match msg {
        ExecuteMsg::CreateAsset {
            asset_id,
            description,
            ..
        } => validate_create_asset(asset_id, description),
        ExecuteMsg::SubmitForApproval { asset_id } => {
            validate_asset_id_only("ExecuteMsg::SubmitForApproval", asset_id)
        }
        ExecuteMsg::ApproveAsset { asset_id } => {
            validate_asset_id_only("ExecuteMsg::ApproveAsset", asset_id)
        }
        ExecuteMsg::RejectAsset { asset_id, reason } => validate_reject_asset(asset_id, reason),
        ExecuteMsg::ActivateAsset { asset_id } => {
            validate_asset_id_only("ExecuteMsg::ActivateAsset", asset_id)
        }
        ExecuteMsg::UpdateAsset {
            asset_id,
            description,
        } => validate_update_asset(asset_id, description),
        ExecuteMsg::DeleteAsset { asset_id } => {
            validate_asset_id_only("ExecuteMsg::DeleteAsset", asset_id)
        }
        ExecuteMsg::ReadPrivateAsset { asset_id } => {
            validate_asset_id_only("ExecuteMsg::ReadPrivateAsset", asset_id)
        }
        ExecuteMsg::AddParticipant {
            address,
            role,
            org_label,
        } => validate_add_participant(address, role, org_label),
        ExecuteMsg::RemoveParticipant { address } => validate_remove_participant(address),
    }
}

fn validate_create_asset(asset_id: &str, description: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    invalid_fields.append(&mut asset_id_errors("asset_id", asset_id));
    invalid_fields.append(&mut description_errors("description", description));
    gather_errors("ExecuteMsg::CreateAsset", invalid_fields)
}

fn validate_reject_asset(asset_id: &str, reason: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    invalid_fields.append(&mut asset_id_errors("asset_id", asset_id));
    invalid_fields.append(&mut rejection_reason_errors("reason", reason));
    gather_errors("ExecuteMsg::RejectAsset", invalid_fields)
}

fn validate_update_asset(asset_id: &str, description: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    invalid_fields.append(&mut asset_id_errors("asset_id", asset_id));
    invalid_fields.append(&mut description_errors("description", description));
    gather_errors("ExecuteMsg::UpdateAsset", invalid_fields)
}

fn validate_asset_id_only(message_type: &str, asset_id: &str) -> AssetResult<()> {
    gather_errors(message_type, asset_id_errors("asset_id", asset_id))
}

fn validate_add_participant(address: &str, role: &str, org_label: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if address.is_empty() {
        invalid_fields.push("address: must not be blank".to_string());
    }
    invalid_fields.append(&mut label_errors("role", role));
    invalid_fields.append(&mut label_errors("org_label", org_label));
    gather_errors("ExecuteMsg::AddParticipant", invalid_fields)
}

fn validate_remove_participant(address: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if address.is_empty() {
        invalid_fields.push("address: must not be blank".to_string());
    }
    gather_errors("ExecuteMsg::RemoveParticipant", invalid_fields)
}

fn gather_errors(message_type: &str, invalid_fields: Vec<String>) -> AssetResult<()> {
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: message_type.to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}

use cosmwasm_std::Binary;
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::types::asset::AssetV1;
use crate::core::types::asset_operation::AssetOperation;
use crate::core::types::caller_identity::CallerIdentity;
use crate::core::types::private_asset_record::{PrivateAssetInput, PrivateAssetRecordV1};
use crate::core::types::private_collection::PrivateCollectionConfig;
use crate::core::types::role_policy::RolePolicy;
use crate::engine::access_policy::AccessPolicyEvaluator;
use crate::util::aliases::AssetResult;
use crate::util::constants::MAX_DESCRIPTION_LENGTH;
use crate::validation::field_validation::text_errors;

const PAYLOAD_MESSAGE_TYPE: &str = "ExecuteMsg::CreateAsset";
const INTERNAL_VALUE_KEY: &str = "\"internal_value\"";

/// Decodes the transient private payload supplied with a create request.  The payload is json
/// encoded as base64 and must describe a [PrivateAssetInput](crate::core::types::private_asset_record::PrivateAssetInput).
///
/// # Parameters
///
/// * `payload` The raw payload bytes from the request.
pub fn parse_private_payload(payload: &Binary) -> AssetResult<PrivateAssetInput> {
    let input = serde_json_wasm::from_slice::<PrivateAssetInput>(payload.as_slice()).map_err(
        |e| {
            let invalid_field = if has_fractional_number(payload.as_slice(), INTERNAL_VALUE_KEY) {
                "private_payload.internal_value: must be an integer".to_string()
            } else {
                format!("private_payload: could not be decoded: {}", e)
            };
            ContractError::InvalidMessageFields {
                message_type: PAYLOAD_MESSAGE_TYPE.to_string(),
                invalid_fields: vec![invalid_field],
            }
        },
    )?;
    let invalid_fields = text_errors(
        "private_payload.confidential_notes",
        &input.confidential_notes,
        MAX_DESCRIPTION_LENGTH,
    );
    if !invalid_fields.is_empty() {
        return ContractError::InvalidMessageFields {
            message_type: PAYLOAD_MESSAGE_TYPE.to_string(),
            invalid_fields,
        }
        .to_err();
    }
    input.to_ok()
}

/// The json decoder has no float support, so a fractional or exponent number fails as a syntax
/// error.  Looks at the number following the key to name the rule that was actually broken.
fn has_fractional_number(payload: &[u8], key: &str) -> bool {
    let text = match std::str::from_utf8(payload) {
        Ok(text) => text,
        Err(_) => return false,
    };
    let after_key = match text.find(key) {
        Some(index) => &text[index + key.len()..],
        None => return false,
    };
    let value = match after_key.trim_start().strip_prefix(':') {
        Some(value) => value.trim_start(),
        None => return false,
    };
    let number: String = value
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
        .collect();
    number.chars().any(|c| c.is_ascii_digit()) && number.contains(['.', 'e', 'E'])
}

/// Runs the engine's side of a confidential read.  The public record must exist before the role
/// check is applied, so every caller gets the same answer for an unknown id.  Collection
/// membership and the presence of the private record are checked afterwards by the partition
/// itself.
pub fn authorize_private_read(
    policy: &RolePolicy,
    caller: &CallerIdentity,
    asset_id: &str,
    public_record: Option<&AssetV1>,
) -> AssetResult<()> {
    if public_record.is_none() {
        return ContractError::AssetNotFound {
            asset_id: asset_id.to_string(),
        }
        .to_err();
    }
    AccessPolicyEvaluator::new(policy).check_role(AssetOperation::ReadPrivate, caller)
}

/// The partition's own read policy.  Denies non-members before revealing whether a record exists.
pub fn read_from_collection(
    collection: &PrivateCollectionConfig,
    caller: &CallerIdentity,
    asset_id: &str,
    record: Option<PrivateAssetRecordV1>,
) -> AssetResult<PrivateAssetRecordV1> {
    if !collection.is_member(&caller.role) {
        return ContractError::AccessDenied {
            operation: AssetOperation::ReadPrivate.name().to_string(),
            allowed_roles: collection.member_roles.to_owned(),
            explanation: format!(
                "caller role [{}] is not a member of collection [{}]",
                caller.role, collection.name
            ),
        }
        .to_err();
    }
    match record {
        Some(record) => record.to_ok(),
        None => ContractError::PrivateDataNotFound {
            asset_id: asset_id.to_string(),
        }
        .to_err(),
    }
}

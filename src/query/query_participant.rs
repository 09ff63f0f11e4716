use cosmwasm_std::{to_json_binary, Binary};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::state::PARTICIPANTS;
use crate::util::aliases::{AssetResult, DepsC};

/// A query that fetches a registered [ParticipantV1](crate::core::types::participant::ParticipantV1)
/// by address.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `address` The bech32 address of the participant.
pub fn query_participant<S: Into<String>>(deps: &DepsC, address: S) -> AssetResult<Binary> {
    let address = deps.api.addr_validate(&address.into())?;
    match PARTICIPANTS.may_load(deps.storage, &address)? {
        Some(participant) => to_json_binary(&participant)?.to_ok(),
        None => ContractError::ParticipantNotFound {
            address: address.to_string(),
        }
        .to_err(),
    }
}

use cosmwasm_std::{to_json_binary, Binary};
use result_extensions::ResultExtensions;

use crate::{
    core::state::STATE_V1,
    util::aliases::{AssetResult, DepsC},
};

/// A query that directly returns the contract's stored [StateV1](crate::core::state::StateV1) value.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn query_state(deps: &DepsC) -> AssetResult<Binary> {
    let state = STATE_V1.load(deps.storage)?;
    to_json_binary(&state)?.to_ok()
}

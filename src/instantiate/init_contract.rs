use crate::core::msg::InitMsg;
use crate::core::state::{StateV1, PARTICIPANTS, STATE_V1};
use crate::core::types::participant::ParticipantV1;
use crate::migrate::version_info::migrate_version_info;
use crate::util::aliases::{DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use cosmwasm_std::{Env, MessageInfo, Response};
use result_extensions::ResultExtensions;

/// The main functionality executed when the smart contract is first instantiated.  This creates
/// the internal contract [StateV1](crate::core::state::StateV1) value, holding the role policy and
/// private collection configuration, and registers every participant provided in the init msg.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `_env` An environment object provided by the cosmwasm framework.  Describes the contract's
/// details, as well as blockchain information at the time of the transaction.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(
    deps: DepsMutC,
    _env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    // Participants may be empty here, in which case the admin registers them later
    for input in msg.participants.iter() {
        let address = deps.api.addr_validate(&input.address)?;
        PARTICIPANTS.save(
            deps.storage,
            &address,
            &ParticipantV1::new(address.to_owned(), &input.role, &input.org_label),
        )?;
    }
    let state = StateV1::new(&msg, info.sender);
    STATE_V1.save(deps.storage, &state)?;
    migrate_version_info(deps.storage)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::InstantiateContract)
                .set_new_value(msg.participants.len()),
        )
        .to_ok()
}

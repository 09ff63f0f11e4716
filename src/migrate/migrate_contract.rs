use cosmwasm_std::{Response, Storage};
use result_extensions::ResultExtensions;
use semver::Version;

use crate::core::error::ContractError;
use crate::core::state::STATE_V1;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::event_attributes::{EventAttributes, EventType};

use super::version_info::{
    get_version_info, migrate_version_info, parse_sem_ver, CONTRACT_NAME, CONTRACT_VERSION,
};

/// Upgrades the stored cw2 version to the running package after checking that the deployment is
/// the same contract, is not being downgraded, and still holds its approval configuration.
/// Assets, history, participants and the role policy are carried over untouched.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn migrate_contract(deps: DepsMutC) -> EntryPointResponse {
    check_upgrade_target(deps.storage)?;
    check_approval_config_present(deps.storage)?;
    let upgraded = migrate_version_info(deps.storage)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::MigrateContract).set_new_value(&upgraded.version),
        )
        .to_ok()
}

fn check_upgrade_target(storage: &dyn Storage) -> AssetResult<()> {
    let stored = get_version_info(storage)?;
    if stored.contract != CONTRACT_NAME {
        return ContractError::InvalidContractName {
            current_contract: stored.contract,
            migration_contract: CONTRACT_NAME.to_string(),
        }
        .to_err();
    }
    if parse_sem_ver(&stored)? > CONTRACT_VERSION.parse::<Version>()? {
        return ContractError::InvalidContractVersion {
            current_version: stored.version,
            migration_version: CONTRACT_VERSION.to_string(),
        }
        .to_err();
    }
    Ok(())
}

// Stored assets reference the role policy captured at instantiation
fn check_approval_config_present(storage: &dyn Storage) -> AssetResult<()> {
    if STATE_V1.may_load(storage)?.is_none() {
        return ContractError::UnexpectedState {
            explanation: "no role policy is stored, so there is no approval contract to upgrade"
                .to_string(),
        }
        .to_err();
    }
    Ok(())
}

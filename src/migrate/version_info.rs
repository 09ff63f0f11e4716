use cosmwasm_std::Storage;
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use result_extensions::ResultExtensions;
use semver::Version;

use crate::util::aliases::AssetResult;

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses the semantic version out of a stored [ContractVersion](cw2::ContractVersion).
pub fn parse_sem_ver(version_info: &ContractVersion) -> AssetResult<Version> {
    version_info.version.parse::<Version>()?.to_ok()
}

/// Stores the given version info in the cw2 version store.
pub fn set_version_info<S1: Into<String>, S2: Into<String>>(
    storage: &mut dyn Storage,
    contract: S1,
    version: S2,
) -> AssetResult<()> {
    set_contract_version(storage, contract, version)?;
    Ok(())
}

/// Fetches the version info currently held in the cw2 version store.
pub fn get_version_info(storage: &dyn Storage) -> AssetResult<ContractVersion> {
    get_contract_version(storage)?.to_ok()
}

/// Stores the name and version of the running package, returning the stored value.
pub fn migrate_version_info(storage: &mut dyn Storage) -> AssetResult<ContractVersion> {
    set_version_info(storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    get_version_info(storage)
}

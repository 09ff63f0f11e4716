use crate::core::error::ContractError;
use crate::core::state::STATE_V1;
use crate::core::types::asset_operation::AssetOperation;
use crate::core::types::caller_identity::CallerIdentity;
use crate::engine::access_policy::AccessPolicyEvaluator;
use crate::service::identity_provider::resolve_registered_caller;
use crate::util::aliases::{AssetResult, DepsC};

use cosmwasm_std::MessageInfo;
use result_extensions::ResultExtensions;

/// Ensures that only the admin of the contract can call into a route.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use asset_approval_smart_contract::core::state::STATE_V1;
/// use asset_approval_smart_contract::core::types::private_collection::PrivateCollectionConfig;
/// use asset_approval_smart_contract::core::types::role_policy::RolePolicy;
/// use asset_approval_smart_contract::core::state::StateV1;
/// use asset_approval_smart_contract::util::contract_helpers::check_admin_only;
/// use cosmwasm_std::Addr;
/// use cosmwasm_std::testing::{mock_dependencies, mock_info};
///
/// let mut deps = mock_dependencies();
/// let state = StateV1 {
///     admin: Addr::unchecked("admin-name"),
///     role_policy: RolePolicy::new("owner", vec!["auditor"], vec!["owner", "auditor"]),
///     private_collection: PrivateCollectionConfig::new("collection", vec!["owner", "auditor"]),
/// };
/// STATE_V1.save(deps.as_mut().storage, &state).expect("expected state to save successfully");
/// let info = mock_info("admin-name", &[]);
/// check_admin_only(&deps.as_ref(), &info).expect("admin-name was used as the admin and should return a success");
/// ```
pub fn check_admin_only(deps: &DepsC, info: &MessageInfo) -> AssetResult<()> {
    let state = STATE_V1.load(deps.storage)?;
    if info.sender != state.admin {
        ContractError::Unauthorized {
            explanation: "admin required".to_string(),
        }
        .to_err()
    } else {
        Ok(())
    }
}

/// Ensures that the info provided to the route does not include any funds.
///
/// # Parameters
///
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use asset_approval_smart_contract::util::contract_helpers::check_funds_are_empty;
/// use cosmwasm_std::testing::mock_info;
///
/// let info = mock_info("admin-name", &[]);
/// check_funds_are_empty(&info).expect("no coin provided in info - should be success");
/// ```
pub fn check_funds_are_empty(info: &MessageInfo) -> AssetResult<()> {
    if !info.funds.is_empty() {
        ContractError::InvalidFunds("route requires no funds be present".to_string()).to_err()
    } else {
        Ok(())
    }
}

/// Resolves the participant address asserted in a query and verifies that its role may perform
/// the query's operation.  Queries carry no signer, so the address is only trusted to the extent
/// that it must belong to a registered participant.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.
/// * `caller` The asserted participant address.
/// * `operation` The read operation being performed.
pub fn resolve_query_caller<S: Into<String>>(
    deps: &DepsC,
    caller: S,
    operation: AssetOperation,
) -> AssetResult<CallerIdentity> {
    let address = deps.api.addr_validate(&caller.into())?;
    let identity = resolve_registered_caller(deps.storage, &address, operation)?;
    let state = STATE_V1.load(deps.storage)?;
    AccessPolicyEvaluator::new(&state.role_policy).check_role(operation, &identity)?;
    identity.to_ok()
}

use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::types::approval_state::ApprovalState;
use crate::core::types::asset::AssetV1;
use crate::core::types::asset_operation::AssetOperation;
use crate::core::types::asset_status::AssetStatus;
use crate::core::types::caller_identity::CallerIdentity;
use crate::core::types::role_policy::RolePolicy;
use crate::core::types::transaction_context::TransactionContext;
use crate::engine::access_policy::AccessPolicyEvaluator;
use crate::util::aliases::AssetResult;

/// A state-changing request against a single asset.  Paired with the asset id, the currently
/// stored record, the caller and the transaction context, a command fully determines the new
/// record: [apply_command](self::apply_command) never reads anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetCommand {
    Create { description: String },
    SubmitForApproval,
    Approve,
    Reject { reason: String },
    Activate,
    Update { description: String },
    Delete,
}
impl AssetCommand {
    pub fn operation(&self) -> AssetOperation {
        match self {
            Self::Create { .. } => AssetOperation::Create,
            Self::SubmitForApproval => AssetOperation::SubmitForApproval,
            Self::Approve => AssetOperation::Approve,
            Self::Reject { .. } => AssetOperation::Reject,
            Self::Activate => AssetOperation::Activate,
            Self::Update { .. } => AssetOperation::Update,
            Self::Delete => AssetOperation::Delete,
        }
    }
}

/// Dispatches a command to the pure function implementing it.
///
/// # Parameters
///
/// * `policy` The contract's role policy.
/// * `caller` The verified identity of the sender.
/// * `asset_id` The id of the targeted asset.
/// * `current` The asset currently stored under `asset_id`, if any.
/// * `command` The requested change.
/// * `tx` The agreed transaction facts used for timestamps.
pub fn apply_command(
    policy: &RolePolicy,
    caller: &CallerIdentity,
    asset_id: &str,
    current: Option<AssetV1>,
    command: AssetCommand,
    tx: &TransactionContext,
) -> AssetResult<AssetV1> {
    let asset = match command {
        AssetCommand::Create { description } => {
            create_asset(policy, caller, asset_id, &description, current.as_ref(), tx)
        }
        AssetCommand::SubmitForApproval => {
            submit_for_approval(policy, caller, asset_id, current, tx)
        }
        AssetCommand::Approve => approve_asset(policy, caller, asset_id, current, tx),
        AssetCommand::Reject { reason } => {
            reject_asset(policy, caller, asset_id, current, &reason, tx)
        }
        AssetCommand::Activate => activate_asset(policy, caller, asset_id, current, tx),
        AssetCommand::Update { description } => {
            update_asset(policy, caller, asset_id, current, &description, tx)
        }
        AssetCommand::Delete => delete_asset(policy, caller, asset_id, current, tx),
    }?;
    check_invariants(&asset)?;
    asset.to_ok()
}

/// Creates a new asset owned by the caller, with every required approval pending.
pub fn create_asset(
    policy: &RolePolicy,
    caller: &CallerIdentity,
    asset_id: &str,
    description: &str,
    existing: Option<&AssetV1>,
    tx: &TransactionContext,
) -> AssetResult<AssetV1> {
    AccessPolicyEvaluator::new(policy).check_role(AssetOperation::Create, caller)?;
    if existing.is_some() {
        return ContractError::AssetAlreadyExists {
            asset_id: asset_id.to_string(),
        }
        .to_err();
    }
    AssetV1::new(
        asset_id,
        description,
        &caller.fingerprint,
        &caller.org_label,
        &policy.required_approvals,
        tx.timestamp,
    )
    .to_ok()
}

/// Starts a fresh review cycle for a created or rejected asset.
pub fn submit_for_approval(
    policy: &RolePolicy,
    caller: &CallerIdentity,
    asset_id: &str,
    current: Option<AssetV1>,
    tx: &TransactionContext,
) -> AssetResult<AssetV1> {
    let operation = AssetOperation::SubmitForApproval;
    let mut asset = load_authorized(policy, operation, caller, asset_id, current)?;
    check_transition(operation, &asset, AssetStatus::PendingApproval)?;
    asset.reset_approvals();
    asset.status = AssetStatus::PendingApproval;
    asset.updated_at = tx.timestamp;
    asset.to_ok()
}

/// Records the caller's role approval.  When it is the last outstanding approval, the asset moves
/// to approved within this same call.
pub fn approve_asset(
    policy: &RolePolicy,
    caller: &CallerIdentity,
    asset_id: &str,
    current: Option<AssetV1>,
    tx: &TransactionContext,
) -> AssetResult<AssetV1> {
    let operation = AssetOperation::Approve;
    let mut asset = load_authorized(policy, operation, caller, asset_id, current)?;
    check_transition(operation, &asset, AssetStatus::Approved)?;
    check_not_yet_acted(&asset, &caller.role)?;
    asset
        .approvals
        .insert(caller.role.to_owned(), ApprovalState::Approved);
    if asset.is_fully_approved() {
        asset.status = AssetStatus::Approved;
    }
    asset.updated_at = tx.timestamp;
    asset.to_ok()
}

/// Records the caller's role rejection and rejects the asset immediately, regardless of any other
/// approvals still pending.
pub fn reject_asset(
    policy: &RolePolicy,
    caller: &CallerIdentity,
    asset_id: &str,
    current: Option<AssetV1>,
    reason: &str,
    tx: &TransactionContext,
) -> AssetResult<AssetV1> {
    let operation = AssetOperation::Reject;
    let mut asset = load_authorized(policy, operation, caller, asset_id, current)?;
    check_transition(operation, &asset, AssetStatus::Rejected)?;
    check_not_yet_acted(&asset, &caller.role)?;
    asset.approvals.insert(
        caller.role.to_owned(),
        ApprovalState::rejected(reason, tx.timestamp),
    );
    asset.status = AssetStatus::Rejected;
    asset.updated_at = tx.timestamp;
    asset.to_ok()
}

pub fn activate_asset(
    policy: &RolePolicy,
    caller: &CallerIdentity,
    asset_id: &str,
    current: Option<AssetV1>,
    tx: &TransactionContext,
) -> AssetResult<AssetV1> {
    let operation = AssetOperation::Activate;
    let mut asset = load_authorized(policy, operation, caller, asset_id, current)?;
    check_transition(operation, &asset, AssetStatus::Active)?;
    asset.status = AssetStatus::Active;
    asset.updated_at = tx.timestamp;
    asset.to_ok()
}

/// Replaces the description of an asset that is not under review and has not been approved.
/// Status and approvals are left untouched.
pub fn update_asset(
    policy: &RolePolicy,
    caller: &CallerIdentity,
    asset_id: &str,
    current: Option<AssetV1>,
    description: &str,
    tx: &TransactionContext,
) -> AssetResult<AssetV1> {
    let operation = AssetOperation::Update;
    let mut asset = load_authorized(policy, operation, caller, asset_id, current)?;
    if !matches!(asset.status, AssetStatus::Created | AssetStatus::Rejected) {
        return ContractError::InvalidStateTransition {
            operation: operation.name().to_string(),
            current: asset.status,
            requested: asset.status,
        }
        .to_err();
    }
    asset.description = description.to_string();
    asset.updated_at = tx.timestamp;
    asset.to_ok()
}

/// Soft-deletes the asset.  Never legal while a review is in progress.
pub fn delete_asset(
    policy: &RolePolicy,
    caller: &CallerIdentity,
    asset_id: &str,
    current: Option<AssetV1>,
    tx: &TransactionContext,
) -> AssetResult<AssetV1> {
    let operation = AssetOperation::Delete;
    let mut asset = load_authorized(policy, operation, caller, asset_id, current)?;
    check_transition(operation, &asset, AssetStatus::Deleted)?;
    asset.status = AssetStatus::Deleted;
    asset.updated_at = tx.timestamp;
    asset.to_ok()
}

/// Role check, then existence, then ownership.  The role check runs first so that a caller without
/// the role learns nothing about whether the asset exists.
fn load_authorized(
    policy: &RolePolicy,
    operation: AssetOperation,
    caller: &CallerIdentity,
    asset_id: &str,
    current: Option<AssetV1>,
) -> AssetResult<AssetV1> {
    let evaluator = AccessPolicyEvaluator::new(policy);
    evaluator.check_role(operation, caller)?;
    let asset = match current {
        Some(asset) => asset,
        None => {
            return ContractError::AssetNotFound {
                asset_id: asset_id.to_string(),
            }
            .to_err()
        }
    };
    evaluator.check_ownership(operation, caller, &asset)?;
    asset.to_ok()
}

fn check_transition(
    operation: AssetOperation,
    asset: &AssetV1,
    requested: AssetStatus,
) -> AssetResult<()> {
    if asset.status.can_transition_to(requested) {
        Ok(())
    } else {
        ContractError::InvalidStateTransition {
            operation: operation.name().to_string(),
            current: asset.status,
            requested,
        }
        .to_err()
    }
}

fn check_not_yet_acted(asset: &AssetV1, role: &str) -> AssetResult<()> {
    match asset.approvals.get(role) {
        Some(ApprovalState::Pending) => Ok(()),
        Some(_) => ContractError::AlreadyActed {
            asset_id: asset.asset_id.to_owned(),
            role: role.to_string(),
        }
        .to_err(),
        None => ContractError::UnexpectedState {
            explanation: format!(
                "asset [{}] has no approval entry for required role [{}]",
                asset.asset_id, role
            ),
        }
        .to_err(),
    }
}

fn check_invariants(asset: &AssetV1) -> AssetResult<()> {
    if !asset.has_consistent_approvals() {
        return ContractError::UnexpectedState {
            explanation: format!(
                "asset [{}] approvals do not match its required approvals",
                asset.asset_id
            ),
        }
        .to_err();
    }
    if asset.status == AssetStatus::PendingApproval && asset.is_fully_approved() {
        return ContractError::UnexpectedState {
            explanation: format!(
                "asset [{}] is fully approved but still pending",
                asset.asset_id
            ),
        }
        .to_err();
    }
    Ok(())
}

//! Contains all execution routes used by the [contract file](crate::contract).

/// Contains the functionality used by the [ActivateAsset](crate::core::msg::ExecuteMsg::ActivateAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod activate_asset;
/// Contains the functionality used by the [AddParticipant](crate::core::msg::ExecuteMsg::AddParticipant)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod add_participant;
/// Contains the functionality used by the [ApproveAsset](crate::core::msg::ExecuteMsg::ApproveAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod approve_asset;
/// The shared resolve, apply and persist pipeline used by every asset lifecycle route.
pub mod command_runner;
/// Contains the functionality used by the [CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod create_asset;
/// Contains the functionality used by the [DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod delete_asset;
/// Contains the functionality used by the [ReadPrivateAsset](crate::core::msg::ExecuteMsg::ReadPrivateAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod read_private_asset;
/// Contains the functionality used by the [RejectAsset](crate::core::msg::ExecuteMsg::RejectAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod reject_asset;
/// Contains the functionality used by the [RemoveParticipant](crate::core::msg::ExecuteMsg::RemoveParticipant)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod remove_participant;
/// Contains the functionality used by the [SubmitForApproval](crate::core::msg::ExecuteMsg::SubmitForApproval)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod submit_for_approval;
/// Contains the functionality used by the [UpdateAsset](crate::core::msg::ExecuteMsg::UpdateAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod update_asset;

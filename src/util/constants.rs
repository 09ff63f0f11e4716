// Execution output attributes.  All should be prefixed with "asset_" to make them easy to
// discern when observed in the event stream

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EventType enum into String values (String)
pub const ASSET_EVENT_TYPE_KEY: &str = "asset_event_type";
/// Value = The unique identifier of the asset targeted by the event (String)
pub const ASSET_ID_KEY: &str = "asset_id";
/// Value = The status of the asset after the event was applied (String)
pub const ASSET_STATUS_KEY: &str = "asset_status";
/// Value = The role that the calling participant acted under (String)
pub const CALLER_ROLE_KEY: &str = "asset_caller_role";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "asset_new_value";
/// Value = The address of a participant added to or removed from the registry (String)
pub const PARTICIPANT_ADDRESS_KEY: &str = "asset_participant_address";

//////////////////////
// Field Limits     //
//////////////////////

/// The maximum amount of characters allowed in an asset id.
pub const MAX_ASSET_ID_LENGTH: usize = 64;
/// The maximum amount of characters allowed in an asset description.
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;
/// The maximum amount of characters allowed in a rejection reason.
pub const MAX_REJECTION_REASON_LENGTH: usize = 512;
/// The maximum amount of characters allowed in a role name or organization label.
pub const MAX_LABEL_LENGTH: usize = 64;

//////////////////////
// Query Pagination //
//////////////////////

/// The amount of assets returned by a listing query when no limit is provided.
pub const DEFAULT_QUERY_LIMIT: u32 = 10;
/// The maximum amount of assets that a single listing query can return.
pub const MAX_QUERY_LIMIT: u32 = 30;

/// All addresses in these test constants are short lowercase names accepted by the mock api
/// This address should be used for the contract administrator address in state
pub const DEFAULT_ADMIN_ADDRESS: &str = "admin";
/// Use this address in a circumstance that is testing the owner of an asset
pub const DEFAULT_OWNER_ADDRESS: &str = "owner1";
/// A second address holding the owner role, used to verify that ownership is tied to a single participant
pub const SECOND_OWNER_ADDRESS: &str = "owner2";
/// Use this address in a circumstance that is testing the auditor's review
pub const DEFAULT_AUDITOR_ADDRESS: &str = "auditor1";
/// Use this address in a circumstance that is testing the regulator's review
pub const DEFAULT_REGULATOR_ADDRESS: &str = "regulator1";
pub const DEFAULT_OWNER_ORG: &str = "org-owner";
pub const SECOND_OWNER_ORG: &str = "org-owner-2";
pub const DEFAULT_AUDITOR_ORG: &str = "org-auditor";
pub const DEFAULT_REGULATOR_ORG: &str = "org-regulator";
pub const DEFAULT_OWNER_ROLE: &str = "owner";
pub const DEFAULT_AUDITOR_ROLE: &str = "auditor";
pub const DEFAULT_REGULATOR_ROLE: &str = "regulator";
/// The name of the private collection configured by the default init msg
pub const DEFAULT_COLLECTION_NAME: &str = "asset_private_details";
/// The asset created by test_create_default_asset should be expected to use this id
pub const DEFAULT_ASSET_ID: &str = "A1";
pub const DEFAULT_DESCRIPTION: &str = "desc";
pub const DEFAULT_CONFIDENTIAL_NOTES: &str = "appraised under seal";
pub const DEFAULT_INTERNAL_VALUE: i64 = 250_000;

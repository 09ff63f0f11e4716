use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use asset_approval_smart_contract::core::msg::{
    AssetHistoryResponse, AssetsResponse, ExecuteMsg, InitMsg, MigrateMsg, QueryMsg,
};
use asset_approval_smart_contract::core::state::StateV1;
use asset_approval_smart_contract::core::types::asset::AssetV1;
use asset_approval_smart_contract::core::types::asset_history_entry::AssetHistoryEntry;
use asset_approval_smart_contract::core::types::participant::ParticipantV1;
use asset_approval_smart_contract::core::types::private_asset_record::{
    PrivateAssetInput, PrivateAssetRecordV1,
};
use asset_approval_smart_contract::core::types::role_policy::RolePolicy;

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(InitMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(AssetV1), &out_dir);
    export_schema(&schema_for!(AssetHistoryEntry), &out_dir);
    export_schema(&schema_for!(AssetsResponse), &out_dir);
    export_schema(&schema_for!(AssetHistoryResponse), &out_dir);
    export_schema(&schema_for!(ParticipantV1), &out_dir);
    export_schema(&schema_for!(PrivateAssetInput), &out_dir);
    export_schema(&schema_for!(PrivateAssetRecordV1), &out_dir);
    export_schema(&schema_for!(RolePolicy), &out_dir);
    export_schema(&schema_for!(StateV1), &out_dir);
}

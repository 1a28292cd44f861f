use crate::tests::*;
use mb_battle::BattleOptions;
use parity_scale_codec::{Decode, Encode};

use crate::snapshot::GameSnapshot;

#[test]
fn test_snapshot_json_shape() {
    let manager = test_manager();
    let json = serde_json::to_value(manager.get_state()).unwrap();

    assert_eq!(json["phase"], "prepare");
    assert_eq!(json["turn"], 1);
    assert_eq!(json["coins"], 50);
    assert!(json["lastBattleResult"].is_null());

    let bench = json["bench"].as_array().unwrap();
    assert_eq!(bench.len(), 8);
    assert!(bench.iter().all(serde_json::Value::is_null));

    let entry = &json["shop"][0];
    assert!(entry["price"].is_u64());
    assert_eq!(entry["unit"]["tier"], 1);
    assert!(entry["unit"]["maxHealth"].is_i64());
    assert!(entry["unit"]["mergeTag"].is_string());
}

#[test]
fn test_snapshot_is_detached_from_live_state() {
    let mut manager = test_manager();
    let before = manager.get_state();
    manager.buy_from_shop(0).unwrap();

    assert!(before.bench[0].is_none(), "old snapshot does not see the purchase");
    assert!(manager.get_state().bench[0].is_some());
}

#[test]
fn test_snapshot_scale_round_trip_after_battle() {
    let mut manager = soldier_manager(rich_config());
    manager.buy_from_shop(0).unwrap();
    manager.move_bench_to_team(0, 0).unwrap();
    manager.next_turn(&BattleOptions::default()).unwrap();

    let snapshot = manager.get_state();
    assert!(snapshot.last_battle_result.is_some());

    let bytes = snapshot.encode();
    let decoded = GameSnapshot::decode(&mut &bytes[..]).unwrap();
    assert_eq!(decoded, snapshot);
}

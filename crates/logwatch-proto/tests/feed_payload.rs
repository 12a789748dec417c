//! Feed payload validation — the discard-on-malformed contract the client
//! relies on.

use logwatch_proto::protocol::{parse_feed_payload, UNIDENTIFIED_CATEGORY};
use serde_json::json;

#[test]
fn well_formed_array_is_accepted_and_normalized() {
    let payload = json!([
        {"id": 1, "category": "AUTH", "message": "fail", "created_at": "2026-08-06T18:00:00Z"},
        {"id": 2, "message": "no category here"},
    ]);

    let batch = parse_feed_payload(payload).unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].category, "AUTH");
    assert_eq!(batch[1].category, UNIDENTIFIED_CATEGORY);
    assert_eq!(batch[1].created_at, "");
}

#[test]
fn empty_array_is_an_empty_batch() {
    assert_eq!(parse_feed_payload(json!([])).unwrap(), vec![]);
}

#[test]
fn error_object_is_discarded() {
    assert!(parse_feed_payload(json!({"error": "since must be an integer"})).is_none());
}

#[test]
fn non_array_scalars_are_discarded() {
    assert!(parse_feed_payload(json!(null)).is_none());
    assert!(parse_feed_payload(json!("oops")).is_none());
    assert!(parse_feed_payload(json!(42)).is_none());
}

#[test]
fn row_without_id_discards_the_whole_payload() {
    let payload = json!([
        {"id": 1, "category": "A", "message": "ok"},
        {"category": "B", "message": "no id"},
    ]);
    assert!(parse_feed_payload(payload).is_none());
}

#[test]
fn order_is_preserved_as_delivered() {
    let payload = json!([{"id": 5, "category": "X"}, {"id": 4, "category": "Y"}]);
    let batch = parse_feed_payload(payload).unwrap();
    assert_eq!(batch[0].id, 5);
    assert_eq!(batch[1].id, 4);
}

//! Tests for the edge model (NodeId, EdgeId, EdgeCandidate).

use super::edge_store::EdgeStore;
use super::types::{EdgeCandidate, EdgeId, NodeId};
use crate::error::{GraphError, MissingEndpoint};
use serde_json::json;

#[test]
fn test_validate_both_endpoints_present() {
    let validated = EdgeCandidate::new("A", "B").validate().unwrap();
    assert_eq!(validated.source().as_str(), "A");
    assert_eq!(validated.destination().as_str(), "B");
    assert!(validated.explicit_id().is_none());
}

#[test]
fn test_validate_missing_source() {
    let err = EdgeCandidate::default()
        .with_destination("C")
        .with_id("2")
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        GraphError::MissingEndpoint {
            missing: MissingEndpoint::Source
        }
    ));
}

#[test]
fn test_validate_missing_destination() {
    let err = EdgeCandidate::default()
        .with_source("A")
        .with_id("3")
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        GraphError::MissingEndpoint {
            missing: MissingEndpoint::Destination
        }
    ));
}

#[test]
fn test_validate_missing_both() {
    let err = EdgeCandidate::default().validate().unwrap_err();
    assert!(matches!(
        err,
        GraphError::MissingEndpoint {
            missing: MissingEndpoint::Both
        }
    ));
}

#[test]
fn test_validate_empty_string_counts_as_missing() {
    let err = EdgeCandidate::new("", "B").validate().unwrap_err();
    assert!(matches!(err, GraphError::MissingEndpoint { .. }));
}

#[test]
fn test_self_loop_is_valid() {
    assert!(EdgeCandidate::new("A", "A").validate().is_ok());
}

#[test]
fn test_validate_keeps_explicit_id() {
    let validated = EdgeCandidate::new("A", "B")
        .with_id(42i64)
        .validate()
        .unwrap();
    assert_eq!(validated.explicit_id(), Some(&EdgeId::Int(42)));
}

#[test]
fn test_candidate_deserialize_canonical_names() {
    let candidate: EdgeCandidate = serde_json::from_value(json!({
        "source": "1A1zP1",
        "destination": "12c6DS",
        "id": 7,
        "timestamp": 1_231_469_665,
        "value": 50.0
    }))
    .unwrap();

    let validated = candidate.validate().unwrap();
    assert_eq!(validated.source(), &NodeId::new("1A1zP1"));
    assert_eq!(validated.explicit_id(), Some(&EdgeId::Int(7)));
}

#[test]
fn test_candidate_deserialize_short_names() {
    let candidate: EdgeCandidate = serde_json::from_value(json!({
        "src": "A",
        "dst": "B",
        "edge": "13",
        "time": 444
    }))
    .unwrap();

    assert_eq!(candidate, EdgeCandidate::new("A", "B").with_id("13").with_timestamp(444));
}

#[test]
fn test_candidate_deserialize_collects_attributes() {
    let candidate: EdgeCandidate = serde_json::from_value(json!({
        "src": "A",
        "dst": "B",
        "txid": "f4184fc5",
        "value": 10
    }))
    .unwrap();

    let expected = EdgeCandidate::new("A", "B")
        .with_attribute("txid", json!("f4184fc5"))
        .with_attribute("value", json!(10));
    assert_eq!(candidate, expected);
}

#[test]
fn test_candidate_deserialize_null_endpoint_is_missing() {
    let candidate: EdgeCandidate =
        serde_json::from_value(json!({ "src": null, "dst": "B" })).unwrap();
    assert!(candidate.validate().is_err());
}

#[test]
fn test_edge_id_display() {
    assert_eq!(EdgeId::Int(12).to_string(), "12");
    assert_eq!(EdgeId::from("tx-9").to_string(), "tx-9");
}

#[test]
fn test_edge_id_untagged_serde() {
    assert_eq!(serde_json::to_value(EdgeId::Int(3)).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(EdgeId::from("3")).unwrap(), json!("3"));
    let parsed: EdgeId = serde_json::from_value(json!("abc")).unwrap();
    assert_eq!(parsed, EdgeId::from("abc"));
}

#[test]
fn test_node_id_transparent_serde() {
    let node = NodeId::new("1BoatSLR");
    assert_eq!(serde_json::to_value(&node).unwrap(), json!("1BoatSLR"));
    assert_eq!(node.to_string(), "1BoatSLR");
}

#[test]
fn test_candidate_deserialize_negative_integer_id() {
    let candidate: EdgeCandidate = serde_json::from_value(json!({
        "source": "A",
        "destination": "B",
        "id": -5
    }))
    .unwrap();
    assert_eq!(candidate.id(), Some(&EdgeId::Int(-5)));

    let validated = candidate.validate().unwrap();
    assert_eq!(validated.explicit_id(), Some(&EdgeId::Int(-5)));
}

#[test]
fn test_validate_drops_attributes_shadowing_edge_fields() {
    let candidate = EdgeCandidate::new("A", "B")
        .with_attribute("source", json!(99))
        .with_attribute("target", json!(99))
        .with_attribute("id", json!("forged"))
        .with_attribute("value", json!(5));

    let mut store = EdgeStore::new();
    store.add(candidate).unwrap();
    let edge = store.iter().next().unwrap();

    assert_eq!(edge.attributes().len(), 1);
    assert_eq!(edge.attribute("value"), Some(&json!(5)));
    assert_eq!(
        serde_json::to_value(edge).unwrap(),
        json!({ "id": 1, "source": "A", "destination": "B", "value": 5 })
    );
}

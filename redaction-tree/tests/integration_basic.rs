//! End-to-end tests for the public redaction API.
//!
//! These tests exercise the integration of:
//! - argument lists and derived composites,
//! - exclusion matching at every level, and
//! - traversal of common standard library containers.

use std::collections::{BTreeMap, HashMap};

use redaction_tree::{Arguments, ExclusionSet, Inspect, Node, Redactor, Tree};

fn redactor(max_depth: usize, excluded: &[&str]) -> Redactor {
    Redactor::new(max_depth, ExclusionSet::new(excluded).unwrap())
}

#[derive(Inspect)]
struct Address {
    street: String,
    city: String,
    postcode: Option<String>,
}

#[derive(Inspect)]
struct Customer {
    id: u64,
    name: String,
    email: String,
    password: String,
    address: Address,
    tags: Vec<String>,
}

fn customer() -> Customer {
    Customer {
        id: 42,
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: "hunter2".into(),
        address: Address {
            street: "1 Main St".into(),
            city: "Leeds".into(),
            postcode: None,
        },
        tags: vec!["vip".into(), "beta".into()],
    }
}

#[test]
fn test_flat_map_renders_exactly() {
    let map = BTreeMap::from([("a", 1), ("b", 2)]);
    let tree = redactor(1, &[]).redact(&map).unwrap();
    assert_eq!(tree.to_string(), r#"{ "a": "1", "b": "2" }"#);
}

#[test]
fn test_excluded_key_is_dropped() {
    let (password, id) = ("secret", 5);
    let arguments = Arguments::new()
        .with("password", &password)
        .with("id", &id);
    let tree = redactor(4, &["password"]).redact_arguments(&arguments);
    assert_eq!(tree.to_string(), r#"{ "id": "5" }"#);
}

#[test]
fn test_default_redactor_drops_credentials_everywhere() {
    let customer = customer();
    let tree = Redactor::default()
        .redact_arguments(&Arguments::new().with("customer", &customer));

    assert_eq!(
        tree.to_string(),
        concat!(
            r#"{ "customer": { "id": "42", "name": "Ada", "#,
            r#""address": { "street": "1 Main St", "city": "Leeds" }, "#,
            r#""tags": [ "vip", "beta" ] } }"#
        )
    );
}

#[test]
fn test_composite_root_becomes_top_level() {
    let tree = Redactor::default().redact(&customer()).unwrap();
    assert_eq!(
        tree.keys().collect::<Vec<_>>(),
        vec!["id", "name", "address", "tags"]
    );
}

#[test]
fn test_nested_exclusion_drops_whole_subtree() {
    let customer = customer();
    let tree = redactor(8, &["ADDRESS"]).redact(&customer).unwrap();
    assert!(!tree.contains_key("address"));
    assert!(tree.contains_key("email"));
}

#[test]
fn test_depth_limit_cuts_nested_levels() {
    let customer = customer();
    let arguments = Arguments::new().with("customer", &customer);

    let shallow = redactor(2, &[]).redact_arguments(&arguments);
    let customer_node = shallow.get("customer").and_then(Node::as_mapping).unwrap();
    assert!(customer_node.contains_key("id"));
    assert!(!customer_node.contains_key("address"));
    assert!(!customer_node.contains_key("tags"));

    let deep = redactor(3, &[]).redact_arguments(&arguments);
    let customer_node = deep.get("customer").and_then(Node::as_mapping).unwrap();
    assert!(customer_node.contains_key("address"));
    assert!(customer_node.contains_key("tags"));
}

#[test]
fn test_maps_nested_in_arguments() {
    let mut headers: HashMap<String, String> = HashMap::new();
    headers.insert("Authorization-Token".into(), "abc".into());
    headers.insert("Accept".into(), "application/json".into());

    let tree = Redactor::default().redact_arguments(&Arguments::new().with("headers", &headers));
    assert_eq!(
        tree.to_string(),
        r#"{ "headers": { "Accept": "application/json" } }"#
    );
}

#[test]
fn test_sequence_of_composites() {
    let addresses = vec![
        Address {
            street: "a".into(),
            city: "x".into(),
            postcode: Some("AB1".into()),
        },
        Address {
            street: "b".into(),
            city: "y".into(),
            postcode: None,
        },
    ];
    let tree = redactor(4, &["street"]).redact_arguments(&Arguments::new().with("all", &addresses));
    assert_eq!(
        tree.to_string(),
        r#"{ "all": [ { "city": "x", "postcode": "AB1" }, { "city": "y" } ] }"#
    );
}

#[test]
fn test_redacted_tree_is_redactable_again() {
    let map = BTreeMap::from([("id", "1"), ("name", "widget")]);
    let redactor = redactor(4, &["secret"]);
    let once = redactor.redact(&map).unwrap();
    let twice = redactor.redact(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_manual_tree_construction_matches_rendering() {
    let tree: Tree = [
        ("id", Node::scalar("1")),
        ("roles", Node::Sequence(vec![Node::scalar("admin")])),
    ]
    .into_iter()
    .collect();
    assert_eq!(tree.to_string(), r#"{ "id": "1", "roles": [ "admin" ] }"#);
}

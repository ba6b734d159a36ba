#![cfg(feature = "serde")]

use failable::Failable;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Quote {
    symbol: String,
    price_cents: u64,
}

#[test]
fn success_serializes_externally_tagged() {
    let value: Failable<Quote, String> = Failable::success(Quote {
        symbol: "ACME".into(),
        price_cents: 1250,
    });
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"Success":{"symbol":"ACME","price_cents":1250}}"#);
}

#[test]
fn failure_deserializes_into_failure_variant() {
    let json = r#"{"Failure":"market closed"}"#;
    let value: Failable<Quote, String> = serde_json::from_str(json).unwrap();
    assert_eq!(value, Failable::failure("market closed".to_string()));
}

#[test]
fn unknown_variant_is_rejected() {
    let json = r#"{"Pending":null}"#;
    let value: Result<Failable<Quote, String>, _> = serde_json::from_str(json);
    assert!(value.is_err());
}

use serde_json::{Value, json};

use otpcodes::routes::hotp::parse_counter;

#[test]
fn accepts_non_negative_numbers() {
    assert_eq!(parse_counter(&json!(0)).unwrap(), 0);
    assert_eq!(parse_counter(&json!(17)).unwrap(), 17);
    assert_eq!(parse_counter(&json!(u64::MAX)).unwrap(), u64::MAX);
    assert_eq!(parse_counter(&json!(3.9)).unwrap(), 3);
    assert_eq!(parse_counter(&json!(-0.5)).unwrap(), 0);
    assert_eq!(parse_counter(&json!(1e19)).unwrap(), 10_000_000_000_000_000_000);
}

#[test]
fn accepts_integer_prefixed_strings() {
    assert_eq!(parse_counter(&json!("12")).unwrap(), 12);
    assert_eq!(parse_counter(&json!("  7 ")).unwrap(), 7);
    assert_eq!(parse_counter(&json!("+5")).unwrap(), 5);
    assert_eq!(parse_counter(&json!("42abc")).unwrap(), 42);
    assert_eq!(parse_counter(&json!("3.7")).unwrap(), 3);
    assert_eq!(parse_counter(&json!("0x1f")).unwrap(), 31);
    assert_eq!(parse_counter(&json!("-0")).unwrap(), 0);
}

#[test]
fn rejects_negative_or_non_numeric_values() {
    for value in [
        json!(-1),
        json!(-2.5),
        json!("-3"),
        json!(""),
        json!("abc"),
        json!("0x"),
        json!("99999999999999999999999"),
        json!(null),
        json!(false),
        json!([1]),
        json!(1e20),
        serde_json::from_str::<Value>("18446744073709551616").unwrap(),
    ] {
        assert!(parse_counter(&value).is_err(), "value {value}");
    }
}

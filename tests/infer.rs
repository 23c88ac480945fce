use csvdoc::{ConverterConfig, EmptyField, Value, infer_value, is_boolean_string, round};

#[test]
fn boolean_string_detection() {
    assert!(is_boolean_string("true"));
    assert!(is_boolean_string("false"));
    assert!(is_boolean_string("TRuE"));
    assert!(is_boolean_string("fAlse"));
    assert!(!is_boolean_string("1"));
    assert!(!is_boolean_string("何"));
    assert!(!is_boolean_string(" true"));
    assert!(!is_boolean_string(""));
}

#[test]
fn rounding_truncates_then_corrects() {
    assert_eq!(round(4.4443323, 3), 4.444);
    assert_eq!(round(4.4474324, 2), 4.45);
    assert_eq!(round(4.99999, 1), 5.0);
    assert_eq!(round(69.21342344, 5), 69.21342);
}

#[test]
fn rounding_exact_half_is_not_bumped() {
    assert_eq!(round(7.5, 0), 7.0);
    assert_eq!(round(0.25, 1), 0.2);
}

#[test]
fn rounding_negative_numbers_truncates_toward_zero() {
    assert_eq!(round(-4.96, 1), -4.9);
    assert_eq!(round(-7.6, 0), -7.0);
    assert_eq!(round(-1.23456, 4), -1.2345);
}

#[test]
fn rounding_keeps_non_finite_values() {
    assert!(round(f64::NAN, 2).is_nan());
    assert_eq!(round(f64::INFINITY, 2), f64::INFINITY);
    assert_eq!(round(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
}

#[test]
fn rounding_out_of_range_precision_is_identity() {
    assert_eq!(round(1.5, 400), 1.5);
    assert_eq!(round(1.5, u32::MAX), 1.5);
    assert_eq!(round(1e300, 10), 1e300);
    assert_eq!(round(-1e300, 10), -1e300);
}

#[test]
fn booleans_win_over_everything() {
    let cfg = ConverterConfig::default();
    assert_eq!(infer_value("TRUE", &cfg), Value::Bool(true));
    assert_eq!(infer_value("False", &cfg), Value::Bool(false));
}

#[test]
fn numbers_accept_float_notation() {
    let cfg = ConverterConfig::default();
    assert_eq!(infer_value("1", &cfg), Value::Number(1.0));
    assert_eq!(infer_value("-2.5", &cfg), Value::Number(-2.5));
    assert_eq!(infer_value("1e3", &cfg), Value::Number(1000.0));
    assert_eq!(infer_value(".5", &cfg), Value::Number(0.5));
    assert_eq!(infer_value("0.123456", &cfg), Value::Number(0.1235));
}

#[test]
fn overflowing_literal_stays_text() {
    let cfg = ConverterConfig::default();
    assert_eq!(infer_value("1e400", &cfg), Value::from("1e400"));
    assert_eq!(infer_value("-1e400", &cfg), Value::from("-1e400"));
    assert_eq!(infer_value("inf", &cfg), Value::Number(f64::INFINITY));
    assert_eq!(infer_value("-Infinity", &cfg), Value::Number(f64::NEG_INFINITY));
    assert!(infer_value("NaN", &cfg).as_f64().is_some_and(f64::is_nan));
}

#[test]
fn precision_comes_from_config() {
    let cfg = ConverterConfig::default().with_precision(2);
    assert_eq!(infer_value("1.23456", &cfg), Value::Number(1.23));
}

#[test]
fn empty_field_policy() {
    let cfg = ConverterConfig::default();
    assert_eq!(infer_value("", &cfg), Value::Null);

    let cfg = cfg.with_empty_field(EmptyField::Text);
    assert_eq!(infer_value("", &cfg), Value::Text(String::new()));
}

#[test]
fn everything_else_is_text() {
    let cfg = ConverterConfig::default();
    assert_eq!(infer_value("na", &cfg), Value::from("na"));
    assert_eq!(infer_value("1.2.3", &cfg), Value::from("1.2.3"));
    assert_eq!(infer_value("yes", &cfg), Value::from("yes"));
    assert_eq!(infer_value("x ", &cfg), Value::from("x "));
}

#[test]
fn value_accessors() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Number(2.0).as_f64(), Some(2.0));
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert!(Value::Null.is_null());
    assert_eq!(Value::Null.as_str(), None);
    assert_eq!(Value::Number(1.5).to_string(), "1.5");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Text("x".into()).kind(), "text");
}

#[test]
fn value_json_shapes() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&Value::Bool(false))?, "false");
    assert_eq!(serde_json::to_string(&Value::Null)?, "null");
    assert_eq!(serde_json::to_string(&Value::from("1"))?, r#""1""#);

    let back: Value = serde_json::from_str("null")?;
    assert_eq!(back, Value::Null);
    let back: Value = serde_json::from_str("3")?;
    assert_eq!(back, Value::Number(3.0));
    let back: Value = serde_json::from_str(r#""true""#)?;
    assert_eq!(back, Value::from("true"));
    Ok(())
}

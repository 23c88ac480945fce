use csvdoc::{
    Alignment, ConvertError, Converter, ConverterConfig, EmptyField, MAX_PRECISION, Value,
};
use std::fs;

#[test]
fn defaults() {
    let cfg = ConverterConfig::default();
    assert_eq!(cfg.header, None);
    assert_eq!(cfg.precision, 4);
    assert_eq!(cfg.delimiter, ',');
    assert_eq!(cfg.comment, None);
    assert_eq!(cfg.alignment, Alignment::Strict);
    assert_eq!(cfg.empty_field, EmptyField::Null);
    assert!(cfg.validate().is_ok());
}

#[test]
fn json_keeps_defaults_for_missing_keys() -> anyhow::Result<()> {
    let cfg = ConverterConfig::from_json_str(r##"{"delimiter": ";", "comment": "#"}"##)?;
    assert_eq!(cfg.delimiter, ';');
    assert_eq!(cfg.comment, Some('#'));
    assert_eq!(cfg.precision, 4);
    assert_eq!(cfg.alignment, Alignment::Strict);
    Ok(())
}

#[test]
fn json_full_config() -> anyhow::Result<()> {
    let cfg = ConverterConfig::from_json_str(
        r#"{
            "header": ["x", "y"],
            "precision": 1,
            "delimiter": "\t",
            "alignment": "lenient",
            "empty_field": "text"
        }"#,
    )?;
    assert_eq!(
        cfg,
        ConverterConfig::default()
            .with_header(["x", "y"])
            .with_precision(1)
            .with_delimiter('\t')
            .with_alignment(Alignment::Lenient)
            .with_empty_field(EmptyField::Text)
    );

    let out = Converter::with_config("1.26\t\tignored", cfg).parse()?;
    assert_eq!(out.documents[0]["x"], Value::Number(1.3));
    assert_eq!(out.documents[0]["y"], Value::from(""));
    assert_eq!(out.documents[0].len(), 2);
    Ok(())
}

#[test]
fn json_rejects_bad_markers() {
    assert!(ConverterConfig::from_json_str(r#"{"delimiter": "é"}"#).is_err());
    assert!(ConverterConfig::from_json_str(r#"{"delimiter": ";;"}"#).is_err());
    assert!(ConverterConfig::from_json_str(r#"{"precision": -1}"#).is_err());
}

#[test]
fn precision_is_capped() {
    assert!(
        ConverterConfig::default()
            .with_precision(MAX_PRECISION)
            .validate()
            .is_ok()
    );
    let err = ConverterConfig::default()
        .with_precision(MAX_PRECISION + 1)
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConvertError::InvalidConfig(_)));
    assert!(ConverterConfig::from_json_str(r#"{"precision": 400}"#).is_err());

    let cfg = ConverterConfig::default().with_precision(400);
    let err = Converter::with_config("a\n1.5", cfg).parse().unwrap_err();
    assert!(matches!(err, ConvertError::InvalidConfig(_)));
}

#[test]
fn validate_rejects_reserved_and_clashing_markers() {
    let err = ConverterConfig::default()
        .with_delimiter('"')
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConvertError::InvalidConfig(_)));

    let err = ConverterConfig::default()
        .with_comment(',')
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("equals the delimiter"));

    assert!(
        ConverterConfig::default()
            .with_delimiter('\n')
            .validate()
            .is_err()
    );
}

#[test]
fn load_from_file() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("csvdoc.json");
    fs::write(&path, r#"{"precision": 2, "comment": "%"}"#)?;

    let cfg = ConverterConfig::from_json_file(&path)?;
    assert_eq!(cfg.precision, 2);
    assert_eq!(cfg.comment, Some('%'));
    Ok(())
}

#[test]
fn load_from_missing_file_names_path() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("missing.json");
    let err = ConverterConfig::from_json_file(&path).unwrap_err();
    assert!(format!("{err:?}").contains("missing.json"));
    Ok(())
}

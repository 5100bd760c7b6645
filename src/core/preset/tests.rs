use super::*;

#[test]
fn test_default_library_contains_builtins() {
    let library = PresetLibrary::default();
    assert_eq!(library.get("Default"), Some(BezierCurve::DEFAULT));
    assert_eq!(library.get("Linear"), Some(BezierCurve::LINEAR));
    assert_eq!(library.len(), builtin_presets().len());
}

#[test]
fn test_save_trims_and_rejects_duplicates() {
    let mut library = PresetLibrary::empty();
    let name = library
        .save("  Snappy  ", BezierCurve::new(0.1, 0.9, 0.2, 1.0))
        .expect("Name ist gültig");
    assert_eq!(name, "Snappy");

    let err = library.save("Snappy", BezierCurve::LINEAR).unwrap_err();
    assert!(matches!(err, PresetError::DuplicateName(n) if n == "Snappy"));
    assert_eq!(library.get("Snappy"), Some(BezierCurve::new(0.1, 0.9, 0.2, 1.0)));
}

#[test]
fn test_save_validates_name_length() {
    let mut library = PresetLibrary::empty();
    assert!(matches!(
        library.save("   ", BezierCurve::LINEAR),
        Err(PresetError::EmptyName)
    ));
    let exactly_30 = "a".repeat(PRESET_NAME_MAX_CHARS);
    assert!(library.save(&exactly_30, BezierCurve::LINEAR).is_ok());
    let too_long = "ä".repeat(PRESET_NAME_MAX_CHARS + 1);
    assert!(matches!(
        library.save(&too_long, BezierCurve::LINEAR),
        Err(PresetError::NameTooLong(_))
    ));
}

#[test]
fn test_rename_keeps_position() {
    let mut library = PresetLibrary::default();
    library.rename("Ease", "Soft").expect("Umbenennen muss klappen");
    let names: Vec<&str> = library.names().collect();
    assert_eq!(names[2], "Soft");
    assert!(library.get("Ease").is_none());
    assert_eq!(library.get("Soft"), Some(BezierCurve::new(0.25, 0.1, 0.25, 1.0)));
}

#[test]
fn test_rename_errors() {
    let mut library = PresetLibrary::default();
    assert!(matches!(
        library.rename("Nope", "X"),
        Err(PresetError::NotFound(_))
    ));
    assert!(matches!(
        library.rename("Ease", "Linear"),
        Err(PresetError::DuplicateName(_))
    ));
    assert_eq!(library.rename("Ease", "Ease").ok().as_deref(), Some("Ease"));
}

#[test]
fn test_delete_and_clear() {
    let mut library = PresetLibrary::default();
    assert_eq!(library.delete("Linear").ok(), Some(BezierCurve::LINEAR));
    assert!(library.delete("Linear").is_err());
    library.clear();
    assert!(library.is_empty());
}

#[test]
fn test_json_roundtrip_is_flat_object() {
    let mut library = PresetLibrary::empty();
    library
        .save("Snappy", BezierCurve::new(0.1, 0.9, 0.2, 1.0))
        .expect("Name ist gültig");
    let json = library.to_json();
    assert_eq!(json, serde_json::json!({ "Snappy": [0.1f32, 0.9f32, 0.2f32, 1.0f32] }));
    assert_eq!(PresetLibrary::from_json(json).expect("gültiges JSON"), library);
}

#[test]
fn test_merge_overwrites_and_skips_invalid_names() {
    let mut library = PresetLibrary::default();
    let incoming = serde_json::json!({
        "Linear": [0.2, 0.2, 0.8, 0.8],
        "Fresh": [0.3, 0.0, 0.7, 1.0],
        "": [0.0, 0.0, 1.0, 1.0],
    });
    let merged = library.merge_json(incoming).expect("gültiges JSON");
    assert_eq!(merged, 2);
    assert_eq!(library.get("Linear"), Some(BezierCurve::new(0.2, 0.2, 0.8, 0.8)));
    assert!(library.get("Fresh").is_some());
}

#[test]
fn test_merge_rejects_malformed_json() {
    let mut library = PresetLibrary::default();
    let before = library.clone();
    assert!(matches!(
        library.merge_json(serde_json::json!({ "Bad": [1.0, 2.0] })),
        Err(PresetError::Json(_))
    ));
    assert_eq!(library, before);
}

use lint_core::{AceAnnotation, LintPosition, ace_annotations};
use lint_core_ace::{
    AceLintError, annotations_to_value, lint_item_from_value, lint_items_from_value,
    markers_to_annotations_value, parse_lint_markers,
};
use serde_json::json;

#[test]
fn test_lint_item_from_value_reads_all_six_fields() {
    let marker = json!({
        "start.row": 2,
        "start.column": 5,
        "end.row": 2,
        "end.column": 9,
        "text": "unused variable",
        "type": "warning"
    });

    let item = lint_item_from_value(&marker).unwrap();
    assert_eq!(item.span.start, LintPosition::new(2, 5));
    assert_eq!(item.span.end, LintPosition::new(2, 9));
    assert_eq!(item.text, "unused variable");
    assert_eq!(item.typ, "warning");
}

#[test]
fn test_lint_items_from_value_preserves_order() {
    let payload = json!([
        {
            "start.row": 0, "start.column": 1,
            "end.row": 0, "end.column": 4,
            "text": "first", "type": "error"
        },
        {
            "start.row": 7, "start.column": 0,
            "end.row": 8, "end.column": 2,
            "text": "second", "type": "style"
        }
    ]);

    let items = lint_items_from_value(&payload).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].text, "first");
    assert_eq!(items[0].span.start, LintPosition::new(0, 1));
    assert_eq!(items[1].text, "second");
    assert_eq!(items[1].span.end, LintPosition::new(8, 2));
}

#[test]
fn test_missing_field_fails_fast() {
    let marker = json!({
        "start.row": 2,
        "start.column": 5,
        "end.row": 2,
        "text": "unused variable",
        "type": "warning"
    });

    match lint_item_from_value(&marker) {
        Err(AceLintError::MissingField(field)) => assert_eq!(field, "end.column"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_mistyped_and_negative_fields_are_rejected() {
    let mistyped = json!({
        "start.row": "2",
        "start.column": 5,
        "end.row": 2,
        "end.column": 9,
        "text": "unused variable",
        "type": "warning"
    });
    match lint_item_from_value(&mistyped) {
        Err(AceLintError::InvalidField { field, .. }) => assert_eq!(field, "start.row"),
        other => panic!("unexpected result: {:?}", other),
    }

    let negative = json!({
        "start.row": 2,
        "start.column": -5,
        "end.row": 2,
        "end.column": 9,
        "text": "unused variable",
        "type": "warning"
    });
    match lint_item_from_value(&negative) {
        Err(AceLintError::InvalidField { field, .. }) => assert_eq!(field, "start.column"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_non_array_and_non_object_payloads_are_rejected() {
    match lint_items_from_value(&json!({ "markers": [] })) {
        Err(AceLintError::ExpectedArray) => {}
        other => panic!("unexpected result: {:?}", other),
    }

    match lint_items_from_value(&json!([42])) {
        Err(AceLintError::ExpectedObject { index }) => assert_eq!(index, 0),
        other => panic!("unexpected result: {:?}", other),
    }

    match parse_lint_markers("not json") {
        Err(AceLintError::Json(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_malformed_element_produces_no_partial_output() {
    let payload = json!([
        {
            "start.row": 0, "start.column": 0,
            "end.row": 0, "end.column": 1,
            "text": "ok", "type": "info"
        },
        { "text": "broken" }
    ]);

    assert!(lint_items_from_value(&payload).is_err());
}

#[test]
fn test_annotations_to_value_uses_exact_output_keys() {
    let annotations = vec![
        AceAnnotation::new(2, 5, "unused variable", "warning"),
        AceAnnotation::new(0, 0, "syntax error", "error"),
    ];

    assert_eq!(
        annotations_to_value(&annotations),
        json!([
            { "row": 2, "column": 5, "text": "unused variable", "type": "warning" },
            { "row": 0, "column": 0, "text": "syntax error", "type": "error" }
        ])
    );
}

#[test]
fn test_markers_to_annotations_value_end_to_end() {
    let payload = r#"[
        { "start.row": 2, "start.column": 5,
          "end.row": 2, "end.column": 9,
          "text": "unused variable", "type": "warning" }
    ]"#;

    // The end position is dropped; only the four anchor keys appear.
    assert_eq!(
        markers_to_annotations_value(payload).unwrap(),
        json!([
            { "row": 2, "column": 5, "text": "unused variable", "type": "warning" }
        ])
    );

    assert_eq!(markers_to_annotations_value("[]").unwrap(), json!([]));
}

#[test]
fn test_parse_then_convert_matches_wire_contract() {
    let payload = r#"[
        { "start.row": 1, "start.column": 0,
          "end.row": 3, "end.column": 7,
          "text": "multi-line finding", "type": "deprecation" }
    ]"#;

    let items = parse_lint_markers(payload).unwrap();
    let annotations = ace_annotations(&items);
    assert_eq!(annotations.len(), 1);
    // Unknown labels pass through verbatim.
    assert_eq!(annotations[0].typ, "deprecation");
    assert_eq!(annotations[0].row, 1);
    assert_eq!(annotations[0].column, 0);
}

use currency_exchange::{extract_dst, extract_src, has_error, FxError, ServiceResponse};

#[test]
fn test_documented_reply_shapes() {
    let spaced = r#"{"success": true, "src": "2 United States Dollars", "dst": "1.772814 Euros", "error": ""}"#;
    let compact = r#"{"success":true,"src":"2 United States Dollars","dst":"1.772814 Euros","error":""}"#;
    let failed = r#"{"success":false,"src":"","dst":"","error":"Source currency code is invalid."}"#;

    assert_eq!(extract_src(spaced).unwrap(), "2 United States Dollars");
    assert_eq!(extract_dst(compact).unwrap(), "1.772814 Euros");
    assert!(has_error(failed).unwrap());
    assert!(!has_error(spaced).unwrap());

    let parsed = ServiceResponse::parse(failed).unwrap();
    assert_eq!(parsed.src.as_deref(), Some(""));
    assert_eq!(parsed.dst, "");
    assert_eq!(parsed.error, "Source currency code is invalid.");
}

#[test]
fn test_record_agrees_with_single_field_readers() {
    let replies = [
        r#"{"success": true, "src": "10 Japanese Yen", "dst": "0.067 United States Dollars", "error": ""}"#,
        r#"{"success":false,"src":"","dst":"","error":"Target currency code is invalid."}"#,
        r#"{"error":"", "dst":  "3 Euros", "src":"3 Euros", "success":true}"#,
    ];

    for reply in replies {
        let parsed = ServiceResponse::parse(reply).unwrap();
        assert_eq!(parsed.src.as_deref(), Some(extract_src(reply).unwrap()));
        assert_eq!(parsed.dst, extract_dst(reply).unwrap());
        assert_eq!(parsed.has_error(), has_error(reply).unwrap());
    }
}

#[test]
fn test_empty_body_reports_missing_marker() {
    assert!(matches!(
        ServiceResponse::parse(""),
        Err(FxError::MarkerNotFound { ref marker }) if marker == "\"dst\""
    ));
    assert!(matches!(
        extract_src(""),
        Err(FxError::MarkerNotFound { ref marker }) if marker == "\"src\":"
    ));
}

#[test]
fn test_unpaired_quote_in_src_leaves_other_fields_readable() {
    let reply = r#"{"success": true, "src": "2 "Dollars", "dst": "1.772814 Euros", "error": ""}"#;
    assert_eq!(extract_dst(reply).unwrap(), "1.772814 Euros");
    assert!(!has_error(reply).unwrap());
}

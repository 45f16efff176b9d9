use ipo_lookup::record::IpoRecord;
use ipo_lookup::view::{render, Slot};
use serde_json::json;

fn acme() -> IpoRecord {
    let body = r#"{"ipo_name":"Acme Corp","status":"Listed","gmp":"N/A","price_high":"120","issue_size":"N/A","retail_subscription":"3.2x","hni_subscription":"N/A","qib_subscription":"N/A","listing_gain":"N/A","best_category":"N/A"}"#;
    IpoRecord::from_json(serde_json::from_str(body).expect("Should be valid JSON"))
}

#[test]
fn test_acme_record_hides_not_available_rows() {
    let view = render(&acme());

    for (slot, text) in [
        (Slot::IpoName, "Acme Corp"),
        (Slot::Status, "Listed"),
        (Slot::PriceHigh, "120"),
        (Slot::RetailSubscription, "3.2x"),
    ] {
        let row = view.get(slot).expect("Every slot should be rendered");
        assert!(row.visible, "{} should be visible", slot.id());
        assert_eq!(row.text, text);
    }

    for slot in [
        Slot::Gmp,
        Slot::IssueSize,
        Slot::HniSubscription,
        Slot::QibSubscription,
        Slot::ListingGain,
        Slot::BestCategory,
    ] {
        assert!(
            !view.get(slot).expect("Every slot should be rendered").visible,
            "{} should be hidden",
            slot.id()
        );
    }

    assert_eq!(view.visible().count(), 4);
}

#[test]
fn test_gmp_row_follows_sentinel() {
    let mut record = IpoRecord {
        ipo_name: "Northwind".to_string(),
        gmp: Some("N/A".to_string()),
        ..Default::default()
    };
    assert!(!render(&record).get(Slot::Gmp).unwrap().visible);

    record.gmp = Some("250".to_string());
    let view = render(&record);
    let gmp = view.get(Slot::Gmp).unwrap();
    assert!(gmp.visible);
    assert_eq!(gmp.text, "250");
}

#[test]
fn test_rendering_twice_is_identical() {
    let record = acme();
    assert_eq!(render(&record), render(&record));
}

#[test]
fn test_name_and_status_are_never_suppressed() {
    let record = IpoRecord {
        ipo_name: "N/A".to_string(),
        status: Some("N/A".to_string()),
        ..Default::default()
    };
    let view = render(&record);

    assert!(view.get(Slot::IpoName).unwrap().visible);
    let status = view.get(Slot::Status).unwrap();
    assert!(status.visible);
    assert_eq!(status.text, "N/A");
}

#[test]
fn test_sentinel_match_is_exact() {
    let record = IpoRecord {
        ipo_name: "Globex".to_string(),
        gmp: Some("n/a".to_string()),
        listing_gain: Some(" N/A".to_string()),
        ..Default::default()
    };
    let view = render(&record);

    assert!(view.get(Slot::Gmp).unwrap().visible);
    assert!(view.get(Slot::ListingGain).unwrap().visible);
}

#[test]
fn test_missing_and_null_fields_render_empty_and_visible() {
    let record = IpoRecord::from_json(json!({ "ipo_name": "Initech", "gmp": null }));
    let view = render(&record);

    let gmp = view.get(Slot::Gmp).unwrap();
    assert_eq!(gmp.text, "");
    assert!(gmp.visible);
    let best = view.get(Slot::BestCategory).unwrap();
    assert_eq!(best.text, "");
    assert!(best.visible);
}

#[test]
fn test_numbers_render_as_text() {
    let record = IpoRecord::from_json(json!({
        "ipo_name": "Globex",
        "gmp": 45,
        "price_high": 310.5,
        "status": true
    }));

    assert_eq!(record.gmp.as_deref(), Some("45"));
    assert_eq!(record.price_high.as_deref(), Some("310.5"));
    assert_eq!(record.status.as_deref(), Some("true"));
}

#[test]
fn test_non_object_body_renders_empty_record() {
    let record = IpoRecord::from_json(json!(["Acme Corp", "Listed"]));
    assert_eq!(record, IpoRecord::default());

    let view = render(&record);
    assert_eq!(view.slots.len(), Slot::ALL.len());
    assert!(view.slots.iter().all(|row| row.text.is_empty() && row.visible));
}

#[test]
fn test_absent_values_serialize_as_sentinel() {
    let record = IpoRecord {
        ipo_name: "Acme Corp".to_string(),
        price_high: Some("120".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&record).expect("Should serialize");

    assert_eq!(value["ipo_name"], "Acme Corp");
    assert_eq!(value["price_high"], "120");
    assert_eq!(value["gmp"], "N/A");
    assert_eq!(value["best_category"], "N/A");
}

use super::*;

#[test]
fn all_has_four_variants() {
    assert_eq!(Status::all().len(), 4);
}

#[test]
fn display_names_round_trip() {
    for &status in Status::all() {
        let parsed: Status = status.display_name().parse().unwrap();
        assert_eq!(parsed, status, "round-trip failed for {:?}", status);
    }
}

#[test]
fn short_name_is_first_alias() {
    for &status in Status::all() {
        assert_eq!(status.short_name(), status.aliases()[0]);
    }
}

#[test]
fn parsing_is_case_insensitive_and_trimmed() {
    assert_eq!(
        "  available NATIVELY ".parse::<Status>().unwrap(),
        Status::AvailableNatively
    );
    assert_eq!(
        "AvailableViaEmulation".parse::<Status>().unwrap(),
        Status::AvailableViaEmulation
    );
    assert_eq!("not_available".parse::<Status>().unwrap(), Status::NotAvailable);
}

#[test]
fn strict_parse_rejects_unknown_spelling() {
    assert!("Foo".parse::<Status>().is_err());
}

#[test]
fn normalize_maps_unrecognized_to_unknown() {
    assert_eq!(Status::normalize(Some("Foo")), Status::Unknown);
    assert_eq!(Status::normalize(Some("")), Status::Unknown);
    assert_eq!(Status::normalize(None), Status::Unknown);
    assert_eq!(
        Status::normalize(Some("Available Natively")),
        Status::AvailableNatively
    );
}

#[test]
fn deserialize_never_fails_on_strings() {
    let s: Status = serde_json::from_str("\"Something Else\"").unwrap();
    assert_eq!(s, Status::Unknown);
    let s: Status = serde_json::from_str("null").unwrap();
    assert_eq!(s, Status::Unknown);
}

#[test]
fn serializes_as_display_name() {
    let json = serde_json::to_string(&Status::AvailableViaEmulation).unwrap();
    assert_eq!(json, "\"Available via Emulation\"");
}

#[test]
fn availability() {
    assert!(Status::AvailableNatively.is_available());
    assert!(Status::AvailableViaEmulation.is_available());
    assert!(!Status::NotAvailable.is_available());
    assert!(!Status::Unknown.is_available());
}

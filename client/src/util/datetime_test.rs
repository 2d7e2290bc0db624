use super::*;
use time::macros::{datetime, offset};

fn brasilia(_: PrimitiveDateTime) -> UtcOffset {
    offset!(-3)
}

#[test]
fn offset_from_js_minutes_inverts_sign() {
    assert_eq!(offset_from_js_minutes(180.0), offset!(-3));
    assert_eq!(offset_from_js_minutes(-60.0), offset!(+1));
    assert_eq!(offset_from_js_minutes(0.0), UtcOffset::UTC);
}

#[test]
fn parse_instant_reads_rfc3339() {
    let instant = parse_instant_with("2026-10-16T17:30:00Z", brasilia).unwrap();
    assert_eq!(instant, datetime!(2026-10-16 17:30 UTC));
    let instant = parse_instant_with("2026-10-16T17:30:00.123+00:00", brasilia).unwrap();
    assert_eq!(instant.minute(), 30);
}

#[test]
fn parse_instant_treats_naive_strings_as_local() {
    let instant = parse_instant_with("2026-10-16T14:30:00", brasilia).unwrap();
    assert_eq!(instant.to_offset(UtcOffset::UTC), datetime!(2026-10-16 17:30 UTC));
    let instant = parse_instant_with("2026-10-16T14:30", brasilia).unwrap();
    assert_eq!(instant.to_offset(UtcOffset::UTC), datetime!(2026-10-16 17:30 UTC));
}

#[test]
fn parse_instant_rejects_garbage() {
    assert!(parse_instant_with("", brasilia).is_none());
    assert!(parse_instant_with("amanhã", brasilia).is_none());
}

#[test]
fn format_pt_br_uses_local_wall_clock() {
    let instant = datetime!(2026-10-16 17:30 UTC);
    assert_eq!(format_pt_br(instant, offset!(-3)), "16 de out. de 2026, 14:30");
    assert_eq!(format_pt_br(instant, UtcOffset::UTC), "16 de out. de 2026, 17:30");
}

#[test]
fn format_pt_br_crosses_day_boundary() {
    let instant = datetime!(2026-01-01 01:05 UTC);
    assert_eq!(format_pt_br(instant, offset!(-3)), "31 de dez. de 2025, 22:05");
}

#[test]
fn to_input_value_pads_fields() {
    let instant = datetime!(2026-03-05 12:07 UTC);
    assert_eq!(to_input_value(instant, offset!(-3)), "2026-03-05T09:07");
}

#[test]
fn input_to_utc_iso_converts_local_to_utc() {
    assert_eq!(
        input_to_utc_iso_with("2026-10-16T14:30", brasilia).as_deref(),
        Some("2026-10-16T17:30:00.000Z")
    );
}

#[test]
fn input_to_utc_iso_rejects_blank() {
    assert!(input_to_utc_iso_with("", brasilia).is_none());
    assert!(input_to_utc_iso_with("16/10/2026 14:30", brasilia).is_none());
}

#[test]
fn input_value_round_trips_through_iso() {
    let iso = input_to_utc_iso_with("2026-10-16T14:30", brasilia).unwrap();
    let instant = parse_instant_with(&iso, brasilia).unwrap();
    assert_eq!(to_input_value(instant, offset!(-3)), "2026-10-16T14:30");
}

#[test]
fn display_handles_missing_values() {
    assert_eq!(display(None), NOT_AVAILABLE);
    assert_eq!(display(Some("not a date")), NOT_AVAILABLE);
}

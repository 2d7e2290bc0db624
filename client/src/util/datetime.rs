//! Date/time conversions between the backend, the table and
//! `datetime-local` inputs.
//!
//! The backend exchanges UTC ISO-8601 instants; people read and type local
//! wall-clock time. The pure functions take explicit offsets; the browser
//! wrappers resolve the local offset per instant so DST is respected.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const MONTHS_PT_BR: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Placeholder for missing or unreadable instants.
pub const NOT_AVAILABLE: &str = "N/A";

/// Convert `Date.getTimezoneOffset()` minutes (UTC minus local) to an offset.
#[allow(clippy::cast_possible_truncation)]
pub fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    UtcOffset::from_whole_seconds(-(minutes.round() as i32) * 60).unwrap_or(UtcOffset::UTC)
}

/// Parse a backend instant. Strings without an offset are local wall-clock
/// time and get the offset `local` resolves for them.
pub fn parse_instant_with<F>(raw: &str, local: F) -> Option<OffsetDateTime>
where
    F: Fn(PrimitiveDateTime) -> UtcOffset,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(instant) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(instant);
    }
    let naive = parse_naive(raw)?;
    Some(naive.assume_offset(local(naive)))
}

fn parse_naive(raw: &str) -> Option<PrimitiveDateTime> {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
    );
    PrimitiveDateTime::parse(raw, format).ok()
}

/// pt-BR short form, e.g. `16 de out. de 2026, 14:30`.
pub fn format_pt_br(instant: OffsetDateTime, offset: UtcOffset) -> String {
    let local = instant.to_offset(offset);
    let month = MONTHS_PT_BR[usize::from(u8::from(local.month())) - 1];
    format!(
        "{} de {} de {}, {:02}:{:02}",
        local.day(),
        month,
        local.year(),
        local.hour(),
        local.minute()
    )
}

/// Value for a `datetime-local` input: `YYYY-MM-DDTHH:MM`.
pub fn to_input_value(instant: OffsetDateTime, offset: UtcOffset) -> String {
    let local = instant.to_offset(offset);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}",
        local.year(),
        u8::from(local.month()),
        local.day(),
        local.hour(),
        local.minute()
    )
}

/// Convert a `datetime-local` value to a UTC ISO-8601 string with
/// millisecond precision, e.g. `2026-10-16T17:30:00.000Z`.
pub fn input_to_utc_iso_with<F>(value: &str, local: F) -> Option<String>
where
    F: Fn(PrimitiveDateTime) -> UtcOffset,
{
    let naive = parse_naive(value.trim())?;
    let utc = naive.assume_offset(local(naive)).to_offset(UtcOffset::UTC);
    utc.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .ok()
}

/// Browser offset in effect at a UTC instant.
pub fn offset_at(instant: OffsetDateTime) -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_precision_loss)]
        let millis = (instant.unix_timestamp_nanos() / 1_000_000) as f64;
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
        offset_from_js_minutes(date.get_timezone_offset())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = instant;
        UtcOffset::UTC
    }
}

/// Browser offset in effect at a local wall-clock time.
pub fn offset_for_local(naive: PrimitiveDateTime) -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_sign_loss)]
        let date = js_sys::Date::new_with_year_month_day_hr_min(
            naive.year() as u32,
            i32::from(u8::from(naive.month())) - 1,
            i32::from(naive.day()),
            i32::from(naive.hour()),
            i32::from(naive.minute()),
        );
        offset_from_js_minutes(date.get_timezone_offset())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = naive;
        UtcOffset::UTC
    }
}

pub fn parse_instant(raw: &str) -> Option<OffsetDateTime> {
    parse_instant_with(raw, offset_for_local)
}

/// Table cell text for an optional backend instant.
pub fn display(raw: Option<&str>) -> String {
    raw.and_then(parse_instant)
        .map_or_else(|| NOT_AVAILABLE.to_owned(), |instant| format_pt_br(instant, offset_at(instant)))
}

/// `datetime-local` value for an optional backend instant; empty if absent.
pub fn input_value(raw: Option<&str>) -> String {
    raw.and_then(parse_instant)
        .map(|instant| to_input_value(instant, offset_at(instant)))
        .unwrap_or_default()
}

pub fn input_to_utc_iso(value: &str) -> Option<String> {
    input_to_utc_iso_with(value, offset_for_local)
}

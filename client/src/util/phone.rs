//! Phone number entry helpers for the WhatsApp login.
//!
//! Covers the countries offered on the login page. Validation and E.164
//! conversion go through `phonenumber` (libphonenumber metadata); only the
//! as-you-type display grouping is done here.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Country {
    Us,
    #[default]
    Br,
    Pt,
}

impl Country {
    /// Selector order on the login page.
    pub const ALL: [Self; 3] = [Self::Us, Self::Br, Self::Pt];

    /// ISO 3166 alpha-2 code, used as the `<option>` value.
    pub fn iso_code(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Br => "BR",
            Self::Pt => "PT",
        }
    }

    pub fn from_iso_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.iso_code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn calling_code(self) -> &'static str {
        match self {
            Self::Us => "1",
            Self::Br => "55",
            Self::Pt => "351",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Us => "🇺🇸 USA (+1)",
            Self::Br => "🇧🇷 Brasil (+55)",
            Self::Pt => "🇵🇹 Portugal (+351)",
        }
    }

    fn region(self) -> phonenumber::country::Id {
        match self {
            Self::Us => phonenumber::country::Id::US,
            Self::Br => phonenumber::country::Id::BR,
            Self::Pt => phonenumber::country::Id::PT,
        }
    }

    /// Longest national significant number.
    pub fn max_digits(self) -> usize {
        match self {
            Self::Us => 10,
            Self::Br => 11,
            Self::Pt => 9,
        }
    }
}

pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Keep only digits. Room is left for a pasted calling code on top of the
/// longest national number.
pub fn clamp_input(country: Country, input: &str) -> String {
    let mut digits = digits_only(input);
    digits.truncate(country.calling_code().len() + country.max_digits());
    digits
}

/// Display form of a partially typed number. Input longer than a national
/// number that starts with the calling code is shown as `+CC <national>`.
pub fn format_as_you_type(country: Country, input: &str) -> String {
    let digits = clamp_input(country, input);
    if digits.len() <= country.max_digits() {
        return format_national(country, &digits);
    }
    match digits.strip_prefix(country.calling_code()) {
        Some(national) => format!("+{} {}", country.calling_code(), format_national(country, national)),
        None => digits,
    }
}

fn format_national(country: Country, digits: &str) -> String {
    let n = digits.len();
    match country {
        Country::Us => match n {
            0..=3 => digits.to_owned(),
            4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
            _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        },
        Country::Br => match n {
            0..=2 => digits.to_owned(),
            3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
            7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
            _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        },
        Country::Pt => digits
            .as_bytes()
            .chunks(3)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Parse `digits` in the country's numbering plan; `Some` only for a valid
/// number that belongs to that country.
fn parse_valid(country: Country, digits: &str) -> Option<String> {
    if digits.is_empty() {
        return None;
    }
    let number = phonenumber::parse(Some(country.region()), digits).ok()?;
    if !phonenumber::is_valid(&number) {
        return None;
    }
    let e164 = number.format().mode(phonenumber::Mode::E164).to_string();
    e164.starts_with(&format!("+{}", country.calling_code())).then_some(e164)
}

/// Whether `digits` is a valid national number for `country`.
pub fn is_valid_national(country: Country, digits: &str) -> bool {
    parse_valid(country, digits).is_some()
}

/// Convert user input to E.164, accepting an already typed calling code or a
/// Brazilian trunk prefix.
pub fn to_e164(country: Country, input: &str) -> Option<String> {
    let digits = digits_only(input);
    let mut candidates = vec![digits.as_str()];
    if let Some(rest) = digits.strip_prefix(country.calling_code()) {
        candidates.push(rest);
    }
    if country == Country::Br {
        if let Some(rest) = digits.strip_prefix('0') {
            candidates.push(rest);
        }
    }
    candidates.into_iter().find_map(|national| parse_valid(country, national))
}

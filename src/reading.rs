//! Raw readings as entered by the user, and the lenient parsing rule that
//! turns them into numbers.
//!
//! ## Parsing policy
//! A reading never fails to parse. The longest leading decimal literal is
//! used (so `"12abc"` reads as 12.0, like a browser's `parseFloat`), and
//! anything without one (missing, empty, `"abc"`, `"-"`) reads as 0.0.
//! `"Infinity"` and literals too large for `f64` (`"1e400"`) read as
//! infinity and classify as high. Discarded or partially used text is
//! logged at debug level so masked typos remain visible in the logs.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::standards::Pollutant;

const INFINITY: &str = "Infinity";

/// Raw text per pollutant, as typed into the form. Absent keys are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReading {
    values: FxHashMap<Pollutant, String>,
}

impl RawReading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary string keys. Keys that are not pollutant
    /// identifiers are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut reading = Self::new();
        for (key, value) in pairs {
            match key.as_ref().parse::<Pollutant>() {
                Ok(pollutant) => reading.set(pollutant, value),
                Err(e) => tracing::debug!("Ignoring field: {}", e),
            }
        }
        reading
    }

    /// Builder-style setter
    pub fn with(mut self, pollutant: Pollutant, raw: impl Into<String>) -> Self {
        self.set(pollutant, raw);
        self
    }

    pub fn set(&mut self, pollutant: Pollutant, raw: impl Into<String>) {
        self.values.insert(pollutant, raw.into());
    }

    /// Raw text for a pollutant, if any was entered
    pub fn get(&self, pollutant: Pollutant) -> Option<&str> {
        self.values.get(&pollutant).map(|s| s.as_str())
    }

    /// Parsed value for a pollutant (0.0 when missing or unparseable)
    pub fn value_of(&self, pollutant: Pollutant) -> f64 {
        parse_reading(self.get(pollutant))
    }
}

/// Parse a raw reading, defaulting to 0.0 on anything unparseable.
pub fn parse_reading(raw: Option<&str>) -> f64 {
    let Some(text) = raw else {
        return 0.0;
    };

    let trimmed = text.trim();
    let literal = leading_decimal(text.trim_start());
    let value = literal.parse::<f64>().ok().filter(|v| !v.is_nan());

    match value {
        Some(v) => {
            let dropped = dropped_suffix(trimmed, literal);
            if !dropped.is_empty() {
                tracing::debug!(
                    "Reading {:?} has trailing text {:?}, using {}",
                    text,
                    dropped,
                    literal
                );
            }
            // Normalise -0.0 so it displays as "0"
            if v == 0.0 { 0.0 } else { v }
        }
        None => {
            if !trimmed.is_empty() {
                tracing::debug!("Reading {:?} is not numeric, treating as 0.0", text);
            }
            0.0
        }
    }
}

/// Text after the parsed literal, ignored by `parse_reading`
fn dropped_suffix<'a>(trimmed: &'a str, literal: &str) -> &'a str {
    trimmed.get(literal.len()..).unwrap_or("")
}

/// Longest prefix of `s` that forms a decimal literal:
/// `[+-]? digits [. digits]? ([eE] [+-]? digits)?` with at least one mantissa digit,
/// or `[+-]? Infinity`.
fn leading_decimal(s: &str) -> &str {
    let bytes = s.as_bytes();
    let unsigned = s.trim_start_matches(['+', '-']);
    let sign_len = s.len() - unsigned.len();
    if sign_len <= 1 && unsigned.starts_with(INFINITY) {
        return &s[..sign_len + INFINITY.len()];
    }

    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        // A dangling exponent marker is not part of the literal
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    &s[..end]
}

impl Serialize for RawReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for pollutant in Pollutant::ALL {
            if let Some(raw) = self.values.get(&pollutant) {
                map.serialize_entry(pollutant.id(), raw)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RawReading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawReadingVisitor)
    }
}

struct RawReadingVisitor;

impl<'de> Visitor<'de> for RawReadingVisitor {
    type Value = RawReading;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping pollutant identifiers to readings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawReading, A::Error> {
        let mut reading = RawReading::new();
        while let Some(key) = access.next_key::<String>()? {
            let value: serde_json::Value = access.next_value()?;
            let Ok(pollutant) = key.parse::<Pollutant>() else {
                tracing::debug!("Ignoring unknown key {:?}", key);
                continue;
            };
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => reading.set(pollutant, s),
                serde_json::Value::Number(n) => reading.set(pollutant, n.to_string()),
                other => {
                    return Err(de::Error::invalid_type(
                        de::Unexpected::Other(json_kind(&other)),
                        &"a string, number or null",
                    ))
                }
            }
        }
        Ok(reading)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
        _ => "value",
    }
}

use analysis::{analyze, AnalyzeError, TextProperties};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serde adapter pinning `created_at` to the wire format
/// `YYYY-MM-DDTHH:MM:SSZ` (second precision, literal `Z`), independent of
/// chrono's default RFC 3339 rendering.
mod created_at_serde {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub(super) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&text, FORMAT).map_err(DeError::custom)?;
        Ok(naive.and_utc())
    }
}

/// A stored string together with its derived properties.
///
/// This is the unit of storage and the unit of the HTTP wire contract. The
/// `id` is the lowercase hex SHA-256 digest of `value` and doubles as the
/// deduplication key; `properties.sha256_hash` always equals `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedString {
    /// Content hash of `value`; primary key.
    pub id: String,
    /// The original string, unmodified: not trimmed, not case-folded.
    pub value: String,
    /// Derived properties, computed once at insertion.
    pub properties: TextProperties,
    /// UTC insertion timestamp, fixed to second precision on the wire.
    #[serde(with = "created_at_serde")]
    pub created_at: DateTime<Utc>,
}

impl AnalyzedString {
    /// Analyze `value` and build the full record, stamping `created_at` with
    /// the current UTC time.
    ///
    /// Fails with [`AnalyzeError::BlankValue`] when the value is empty after
    /// whitespace stripping; no record is created in that case.
    pub fn analyze(value: impl Into<String>) -> Result<Self, AnalyzeError> {
        let value = value.into();
        let properties = analyze(&value)?;
        Ok(Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        })
    }
}

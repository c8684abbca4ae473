//! Yes/No answers as stored and served by the back office.
//!
//! Several record fields are two-valued radio groups whose wire and storage
//! representation is the literal string `"Yes"` or `"No"`. Input is accepted
//! leniently (case-insensitive words, `y`/`n`, `true`/`false`, `1`/`0`, JSON
//! booleans); output is always the canonical string.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// A normalized Yes/No answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Canonical string form, as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    /// Normalize free-form input. Blank input means "unset" and yields `None`,
    /// as does anything unrecognized.
    pub fn normalize(input: &str) -> Option<YesNo> {
        match input.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "1" | "on" => Some(YesNo::Yes),
            "no" | "n" | "false" | "0" | "off" => Some(YesNo::No),
            _ => None,
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("'{0}' is not a Yes/No answer")]
pub struct ParseYesNoError(String);

impl FromStr for YesNo {
    type Err = ParseYesNoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YesNo::normalize(s).ok_or_else(|| ParseYesNoError(s.to_string()))
    }
}

impl Serialize for YesNo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for YesNo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match deserializer.deserialize_any(YesNoVisitor)? {
            Some(value) => Ok(value),
            None => Err(de::Error::custom("expected a Yes/No answer")),
        }
    }
}

/// Deserialize an optional Yes/No field where `null` and `""` mean unset.
///
/// Use with `#[serde(default, deserialize_with = "...")]` on `Option<YesNo>`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<YesNo>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(YesNoVisitor)
}

struct YesNoVisitor;

impl<'de> Visitor<'de> for YesNoVisitor {
    type Value = Option<YesNo>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"Yes\", \"No\", a boolean, or an empty value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(YesNo::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Some(YesNo::No)),
            1 => Ok(Some(YesNo::Yes)),
            _ => Err(E::custom(format!("{v} is not a Yes/No answer"))),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Some(YesNo::No)),
            1 => Ok(Some(YesNo::Yes)),
            _ => Err(E::custom(format!("{v} is not a Yes/No answer"))),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.trim().is_empty() {
            return Ok(None);
        }
        YesNo::normalize(v)
            .map(Some)
            .ok_or_else(|| E::custom(format!("'{v}' is not a Yes/No answer")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(YesNoVisitor)
    }
}

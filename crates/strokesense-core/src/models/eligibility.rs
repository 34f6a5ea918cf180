use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// tPA eligibility.
///
/// On the wire this is a JSON boolean or the literal string `"uncertain"`,
/// so it carries hand-written serde impls instead of a derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Eligibility {
    Eligible,
    Contraindicated,
    #[default]
    Uncertain,
}

impl Eligibility {
    /// Interpret any JSON value a model might put in the `eligible` slot.
    ///
    /// Only an explicit boolean (or its string spelling) is taken at face
    /// value; everything else, including `"unknown"`, is `Uncertain`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Bool(true) => Eligibility::Eligible,
            Value::Bool(false) => Eligibility::Contraindicated,
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Eligibility::Eligible,
                "false" => Eligibility::Contraindicated,
                _ => Eligibility::Uncertain,
            },
            _ => Eligibility::Uncertain,
        }
    }
}

impl Serialize for Eligibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Eligibility::Eligible => serializer.serialize_bool(true),
            Eligibility::Contraindicated => serializer.serialize_bool(false),
            Eligibility::Uncertain => serializer.serialize_str("uncertain"),
        }
    }
}

impl<'de> Deserialize<'de> for Eligibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Eligibility::from_json(&value))
    }
}

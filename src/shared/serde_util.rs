//! Custom serde helpers for Subscan wire formats.

/// Serializes a `bool` as the integer flag `0` / `1` the API expects.
///
/// Accepts either an integer or a JSON boolean when deserializing.
pub mod bool_as_int {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Int(u8),
            Bool(bool),
        }

        match Flag::deserialize(deserializer)? {
            Flag::Int(0) => Ok(false),
            Flag::Int(1) => Ok(true),
            Flag::Int(other) => Err(serde::de::Error::custom(format!(
                "Invalid flag: {}, expected 0 or 1",
                other
            ))),
            Flag::Bool(b) => Ok(b),
        }
    }
}

/// Same as [`bool_as_int`] for optional flags. Pair with
/// `skip_serializing_if = "Option::is_none"`.
pub mod option_bool_as_int {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(flag) => super::bool_as_int::serialize(flag, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "super::bool_as_int")] bool);

        Option::<Wrapper>::deserialize(deserializer).map(|w| w.map(|Wrapper(flag)| flag))
    }
}

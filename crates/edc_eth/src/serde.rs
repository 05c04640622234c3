//! Helper utilities for serde

use serde::{de::DeserializeOwned, ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

/// Helper module for (de)serializing a `u64` from/to its quantity
/// encoding.
pub mod u64 {
    use super::{Deserialize, Deserializer, Serializer};
    use crate::codec;

    /// Helper function for deserializing a `u64` from its quantity
    /// encoding.
    pub fn deserialize<'de, DeserializerT>(d: DeserializerT) -> Result<u64, DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
    {
        let value = String::deserialize(d)?;
        codec::decode_quantity_u64(&value).map_err(serde::de::Error::custom)
    }

    /// Helper function for serializing a `u64` into its quantity
    /// encoding.
    pub fn serialize<SerializerT>(
        value: &u64,
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
    {
        s.serialize_str(&codec::encode_quantity_u64(*value))
    }
}

/// Helper module for (de)serializing an `Option<u64>` from/to its
/// quantity encoding.
pub mod optional_u64 {
    use super::{Deserialize, Deserializer, Serializer};
    use crate::codec;

    /// Helper function for deserializing an `Option<u64>` from its
    /// quantity encoding.
    pub fn deserialize<'de, DeserializerT>(
        d: DeserializerT,
    ) -> Result<Option<u64>, DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
    {
        Option::<String>::deserialize(d)?
            .map(|value| codec::decode_quantity_u64(&value).map_err(serde::de::Error::custom))
            .transpose()
    }

    /// Helper function for serializing an `Option<u64>` into its
    /// quantity encoding.
    pub fn serialize<SerializerT>(
        value: &Option<u64>,
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
    {
        match value {
            Some(value) => s.serialize_str(&crate::codec::encode_quantity_u64(*value)),
            None => s.serialize_none(),
        }
    }
}

/// Helper module mapping `()` to the empty parameter list `[]` of
/// methods that take no arguments.
pub mod empty_params {
    use super::{Deserialize, Deserializer, Serialize, SerializeSeq, Serializer};

    /// Deserializes `()` from an empty (or absent) parameter list.
    pub fn deserialize<'de, DeserializerT>(d: DeserializerT) -> Result<(), DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
    {
        let params = Option::<Vec<()>>::deserialize(d)?.unwrap_or_default();
        if !params.is_empty() {
            return Err(serde::de::Error::custom(format!(
                "the parameter list should be empty, but it holds {} entries",
                params.len()
            )));
        }
        Ok(())
    }

    /// Serializes `()` as the empty parameter list.
    pub fn serialize<SerializerT, T>(
        _value: &T,
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
        T: Serialize,
    {
        s.serialize_seq(Some(0))?.end()
    }
}

/// Helper module mapping a single value to the one-element parameter
/// list of methods that take one argument.
pub mod sequence {
    use super::{Deserialize, DeserializeOwned, Deserializer, Serialize, SerializeSeq, Serializer};

    /// Deserializes a value from a one-element parameter list.
    pub fn deserialize<'de, T, DeserializerT>(d: DeserializerT) -> Result<T, DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let mut params = Vec::<T>::deserialize(d)?;
        if params.len() != 1 {
            return Err(serde::de::Error::custom(format!(
                "the parameter list should hold one entry, but it holds {}",
                params.len()
            )));
        }
        Ok(params.remove(0))
    }

    /// Serializes a value as a one-element parameter list.
    pub fn serialize<SerializerT, T>(
        value: &T,
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
        T: Serialize,
    {
        let mut params = s.serialize_seq(Some(1))?;
        params.serialize_element(value)?;
        params.end()
    }
}

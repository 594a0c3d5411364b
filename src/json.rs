use log::trace;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{OResult, OptionalError};
use crate::Optional;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_option() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Both `null` and a missing struct field land on the `None` arm here, so
/// decoding only ever produces a present container.
impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(Optional::present(value.unwrap_or_default()))
    }
}

impl<T> Optional<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    /// Decodes a JSON payload.
    ///
    /// An empty slice is treated as "no input" and, like the literal `null`,
    /// yields a present container holding `T::default()`.
    pub fn from_json(bytes: &[u8]) -> OResult<Self> {
        if bytes.is_empty() {
            return Ok(Optional::present(T::default()));
        }

        serde_json::from_slice(bytes).map_err(|e| {
            trace!("rejected optional payload of {} bytes: {}", bytes.len(), e);
            OptionalError::Decode(e)
        })
    }

    /// Decodes `bytes` into `self`, replacing the whole container.
    ///
    /// On error `self` is left absent.
    pub fn decode_into(&mut self, bytes: &[u8]) -> OResult<()> {
        *self = Optional::absent();
        *self = Self::from_json(bytes)?;
        Ok(())
    }
}

impl<T: Serialize> Optional<T> {
    /// Encodes as JSON. Absent containers become `null`.
    pub fn to_json(&self) -> OResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(OptionalError::Encode)
    }
}

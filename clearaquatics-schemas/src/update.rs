use serde::{Deserialize, Deserializer};

/// Reads a clearable field of a partial update: an absent key stays `None`
/// (via `#[serde(default)]`), an explicit `null` becomes `Some(None)`.
pub(crate) fn clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

use serde::{Deserialize, Deserializer};

/// Deserialize into `Some(Option<T>)` so a present-but-null field is
/// distinguishable from an absent one. Combine with `#[serde(default)]`:
/// absent => `None`, null => `Some(None)`, value => `Some(Some(v))`.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

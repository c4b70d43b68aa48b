use serde::de::DeserializeOwned;

/// Parse a SCREAMING_SNAKE_CASE enum value leniently: `in-progress`,
/// `in_progress` and `IN_PROGRESS` all resolve to the same variant.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

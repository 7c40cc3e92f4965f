/// A scanned item converted to plain JSON.
///
/// Keys are attribute names; values are any JSON value, nested as deep as
/// the stored attribute.
pub type Item = serde_json::Map<String, serde_json::Value>;

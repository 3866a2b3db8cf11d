use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Shallowest depth a heading can have and still take part in a ToC
pub const MIN_DEPTH: i64 = 1;
/// Deepest depth a heading can have and still take part in a ToC
pub const MAX_DEPTH: i64 = 10;

/// A titled section marker as handed to the ToC builder.
///
/// `depth` is `None` when the source record had no usable integer depth.
/// Every field the builder does not interpret ends up in `extra` and is
/// written back verbatim on the output node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    #[serde(
        default,
        deserialize_with = "lenient_depth",
        skip_serializing_if = "Option::is_none"
    )]
    pub depth: Option<i64>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Heading {
    pub fn new(depth: i64, slug: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            depth: Some(depth),
            slug: slug.into(),
            text: text.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Heading whose source carried no usable depth
    pub fn without_depth(slug: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            depth: None,
            slug: slug.into(),
            text: text.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Attach a passthrough field
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The depth, if it is an integer within `MIN_DEPTH..=MAX_DEPTH`
    pub fn valid_depth(&self) -> Option<i64> {
        self.depth.filter(|depth| (MIN_DEPTH..=MAX_DEPTH).contains(depth))
    }
}

// Anything that is not a whole number (strings, fractions, null) reads as "no depth"
// so one bad record cannot fail the whole list. `2.0` counts as whole.
fn lenient_depth<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| value.as_f64().and_then(whole_number)))
}

fn whole_number(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

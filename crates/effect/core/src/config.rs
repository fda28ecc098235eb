/// Aggregation configuration.
///
/// Loaded from TOML by the content loaders; every field has a default so an
/// empty file is a valid configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AggregationConfig {
    /// Reject rule tables that produce any lint instead of only logging them.
    pub deny_lints: bool,
}

impl AggregationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that treats every lint as a fatal error.
    pub fn strict() -> Self {
        Self { deny_lints: true }
    }
}

use serde::{Deserialize, Serialize};

/// Knobs of a [`Validator`](crate::Validator).
///
/// Deserializable with every field optional, so it can sit inside an
/// application's own configuration:
///
/// ```
/// # use phi::{MapKeyOrder, ValidateOptions};
/// let options: ValidateOptions = serde_json::from_str(r#"{ "map_key_order": "iteration" }"#).unwrap();
/// assert_eq!(options.map_key_order, MapKeyOrder::Iteration);
/// assert!(options.empty_containers_are_missing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateOptions {
    /// Order in which map entries are visited, and therefore reported.
    pub map_key_order: MapKeyOrder,
    /// Whether a required `Vec`/map field with no elements counts as missing.
    pub empty_containers_are_missing: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            map_key_order: MapKeyOrder::default(),
            empty_containers_are_missing: true,
        }
    }
}

impl ValidateOptions {
    pub fn with_map_key_order(mut self, order: MapKeyOrder) -> Self {
        self.map_key_order = order;
        self
    }

    pub fn with_empty_containers_are_missing(mut self, missing: bool) -> Self {
        self.empty_containers_are_missing = missing;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapKeyOrder {
    /// Entries sorted by their rendered key, so reports are reproducible
    /// whatever the map's own iteration order.
    #[default]
    Sorted,
    /// Entries in the order the map yields them. For `HashMap` this differs
    /// between runs.
    Iteration,
}

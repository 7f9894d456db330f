use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

///
/// CollectionConfig
///
/// Partial presentation record for one collection's listing: which
/// properties are shown, in what order, at what widths, and the preferred
/// row size. Every field is optional and omitted from the persisted JSON
/// when unset, so the default config serializes to `{}`.
///
/// Unknown fields land in `extra` and survive a save/load round trip; the
/// store never interprets the record beyond (de)serializing it.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    /// Preferred row size of the listing table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_size: Option<CollectionSize>,

    /// Visible property keys, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,

    /// Property keys hidden from the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_properties: Option<Vec<String>>,

    /// Per-property column width, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<BTreeMap<String, u32>>,

    /// Fields this version of the model does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CollectionConfig {
    /// True when no preference is set, i.e. the record serializes to `{}`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.default_size.is_none()
            && self.properties.is_none()
            && self.excluded_properties.is_none()
            && self.column_widths.is_none()
            && self.extra.is_empty()
    }
}

///
/// CollectionSize
///
/// Row size of a collection listing, smallest to largest.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionSize {
    Xs,
    S,
    M,
    L,
    Xl,
}

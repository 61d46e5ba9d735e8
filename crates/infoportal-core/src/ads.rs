//! Ad slot configuration: built-in defaults, the stored-over-default merge,
//! and the article > global > default override chain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::article::Article;

/// Well-known slot names recognized by the frontend placements.
pub mod slot {
    pub const LEADERBOARD: &str = "leaderboard";
    pub const FOOTER_BANNER: &str = "footerBanner";
    pub const ARTICLE_RECTANGLE: &str = "articleRectangle";
    pub const ARTICLE_SIDEBAR: &str = "articleSidebar";
}

/// Well-known page-level script names.
pub mod script {
    pub const SOCIAL_BAR: &str = "socialBar";
    pub const POPUNDER: &str = "popunder";
}

/// A named placement for a third-party ad widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdSlot {
    /// Ad-network placement id; empty string means the slot is unset.
    pub key: String,
    pub width: u32,
    pub height: u32,
}

impl AdSlot {
    #[must_use]
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    /// A slot participates in resolution only when its placement key is set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.key.is_empty()
    }
}

/// An externally sourced script injected into every page when enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageScript {
    pub src: String,
    pub enabled: bool,
}

/// The full ad configuration document stored under the `adConfig` key.
///
/// `{}` deserializes to two empty maps, which callers treat as "use the
/// built-in defaults".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdConfigState {
    #[serde(default)]
    pub slots: BTreeMap<String, AdSlot>,
    #[serde(default)]
    pub page_scripts: BTreeMap<String, PageScript>,
}

/// The built-in default configuration. Slot dimensions mirror the frontend
/// placements; placement keys start out empty and page scripts disabled.
#[must_use]
pub fn default_config() -> AdConfigState {
    let mut slots = BTreeMap::new();
    slots.insert(slot::LEADERBOARD.to_string(), AdSlot::new("", 728, 90));
    slots.insert(slot::FOOTER_BANNER.to_string(), AdSlot::new("", 728, 90));
    slots.insert(slot::ARTICLE_RECTANGLE.to_string(), AdSlot::new("", 336, 280));
    slots.insert(slot::ARTICLE_SIDEBAR.to_string(), AdSlot::new("", 300, 600));

    let mut page_scripts = BTreeMap::new();
    page_scripts.insert(script::SOCIAL_BAR.to_string(), PageScript::default());
    page_scripts.insert(script::POPUNDER.to_string(), PageScript::default());

    AdConfigState {
        slots,
        page_scripts,
    }
}

/// Shallow-merges a stored configuration over the defaults, per top-level map.
///
/// Stored entries override defaults by name; default entries absent from
/// storage survive; names the defaults do not know are kept as stored.
#[must_use]
pub fn merge_with_defaults(stored: AdConfigState) -> AdConfigState {
    let mut merged = default_config();
    merged.slots.extend(stored.slots);
    merged.page_scripts.extend(stored.page_scripts);
    merged
}

/// Resolves an ordered chain of optional slot sources, first-non-empty wins.
#[must_use]
pub fn resolve_slot<'a, I>(sources: I) -> Option<&'a AdSlot>
where
    I: IntoIterator<Item = Option<&'a AdSlot>>,
{
    sources.into_iter().flatten().find(|s| s.is_set())
}

/// The effective slot for an article placement: article override > global
/// configuration > built-in default. An unknown name yields an unset slot.
#[must_use]
pub fn effective_slot(article: &Article, config: &AdConfigState, name: &str) -> AdSlot {
    let defaults = default_config();
    let article_level = article.ad_config.as_ref().and_then(|o| o.slot(name));

    resolve_slot([article_level, config.slots.get(name), defaults.slots.get(name)])
        .or_else(|| config.slots.get(name))
        .or_else(|| defaults.slots.get(name))
        .cloned()
        .unwrap_or_default()
}

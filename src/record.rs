use std::collections::BTreeMap;

use serde::Serialize;

/// Normalized output of one decoded build. Constructed fresh per
/// extraction and handed to storage as-is.
#[derive(Debug, Default, Serialize)]
pub struct BuildRecord {
    pub build_info: BuildInfo,
    pub stats: BTreeMap<String, String>,
    pub gems: BTreeMap<String, Vec<GemInfo>>,
    pub items: Vec<ItemInfo>,
}

/// The fixed attribute set read off the `Build` element. Every field is
/// always present in the serialized output; an attribute missing from
/// the source serializes as an explicit null.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub level: Option<String>,
    pub target_version: Option<String>,
    pub pantheon_major_god: Option<String>,
    pub pantheon_minor_god: Option<String>,
    pub bandit: Option<String>,
    pub class_name: Option<String>,
    pub ascend_class_name: Option<String>,
    pub character_level_auto_mode: Option<String>,
    pub main_socket_group: Option<String>,
    pub view_mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GemInfo {
    pub name: Option<String>,
    pub level: Option<String>,
    pub gem_id: Option<String>,
    pub variant_id: Option<String>,
    pub skill_id: Option<String>,
    pub quality: Option<String>,
    pub quality_id: Option<String>,
    pub enabled: bool,
}

/// One `Item` element. Rarity/name/base stay unset when the item body
/// had fewer than 3 lines; the item is still emitted.
#[derive(Debug, Serialize)]
pub struct ItemInfo {
    pub id: Option<String>,
    pub rarity: Option<String>,
    pub name: Option<String>,
    pub base: Option<String>,
    pub properties: Vec<String>,
}

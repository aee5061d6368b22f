use std::collections::BTreeMap;

use crate::parser::dom::Element;

/// Collect `PlayerStat` entries from the direct children of `Build`.
/// Entries missing either attribute (or carrying an empty one) are
/// skipped; repeated stat names keep the later value.
pub fn extract(build: &Element) -> BTreeMap<String, String> {
    let mut stats = BTreeMap::new();

    for player_stat in build.children_named("PlayerStat") {
        let name = player_stat.attr("stat");
        let value = player_stat.attr("value");
        if let (Some(name), Some(value)) = (name, value) {
            if !name.is_empty() && !value.is_empty() {
                stats.insert(name.to_string(), value.to_string());
            }
        }
    }

    stats
}

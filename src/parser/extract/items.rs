use tracing::warn;

use crate::parser::dom::Element;
use crate::record::ItemInfo;

/// Collect `Item` elements under `Items` in document order. Each item
/// body is a free-text blob with positional semantics: rarity line,
/// name line, base type line, then property lines. Bodies with fewer
/// than 3 lines are logged and emitted with only the id set — an item
/// is never dropped, and one bad body never aborts its siblings.
pub fn extract(root: &Element) -> Vec<ItemInfo> {
    let mut items = Vec::new();

    let Some(container) = root.child("Items") else {
        return items;
    };

    for item in container.children_named("Item") {
        let id = item.attr("id").map(str::to_string);

        let body = item.text.trim();
        let lines: Vec<&str> = body.lines().collect();
        if lines.len() < 3 {
            warn!(
                "Item with id {} has fewer than 3 lines.",
                id.as_deref().unwrap_or("<none>")
            );
            items.push(ItemInfo {
                id,
                rarity: None,
                name: None,
                base: None,
                properties: Vec::new(),
            });
            continue;
        }

        // Line 0 is "Rarity: <value>"; a line without the separator
        // leaves rarity unset rather than failing the item.
        let rarity = lines[0]
            .split_once(": ")
            .map(|(_, value)| value.trim().to_string());

        items.push(ItemInfo {
            id,
            rarity,
            name: Some(lines[1].trim().to_string()),
            base: Some(lines[2].trim().to_string()),
            properties: lines[3..].iter().map(|l| l.trim().to_string()).collect(),
        });
    }

    items
}

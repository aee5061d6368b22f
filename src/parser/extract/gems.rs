use std::collections::BTreeMap;

use crate::parser::dom::Element;
use crate::record::GemInfo;

/// Slot label used when a `Skill` carries no `slot` attribute.
const UNRECOGNIZED_SLOT: &str = "notRecognizedSlot";

/// The source schema spells enablement as a string attribute. Only the
/// exact lowercase literal counts; "True", "1" etc. are treated as
/// disabled, matching the upstream writer.
const ENABLED_LITERAL: &str = "true";

/// Group gems by skill slot across every `SkillSet` of the `Skills`
/// element. A slot key exists only once at least one gem was appended
/// under it; SkillSet-level attributes (e.g. which set is active) are
/// not captured.
pub fn extract(root: &Element) -> BTreeMap<String, Vec<GemInfo>> {
    let mut gems = BTreeMap::new();

    let Some(skills) = root.child("Skills") else {
        return gems;
    };

    for skill_set in skills.children_named("SkillSet") {
        for skill in skill_set.children_named("Skill") {
            let slot = skill.attr("slot").unwrap_or(UNRECOGNIZED_SLOT);

            for gem in skill.children_named("Gem") {
                let get = |name: &str| gem.attr(name).map(str::to_string);
                gems.entry(slot.to_string())
                    .or_default()
                    .push(GemInfo {
                        name: get("nameSpec"),
                        level: get("level"),
                        gem_id: get("gemId"),
                        variant_id: get("variantId"),
                        skill_id: get("skillId"),
                        quality: get("quality"),
                        quality_id: get("qualityId"),
                        enabled: gem.attr("enabled") == Some(ENABLED_LITERAL),
                    });
            }
        }
    }

    gems
}

use crate::parser::dom::Element;
use crate::record::BuildInfo;

/// Read the fixed metadata attribute set off the `Build` element.
/// Attributes missing from the source stay None; the record always
/// carries all ten fields.
pub fn extract(build: &Element) -> BuildInfo {
    let get = |name: &str| build.attr(name).map(str::to_string);

    BuildInfo {
        level: get("level"),
        target_version: get("targetVersion"),
        pantheon_major_god: get("pantheonMajorGod"),
        pantheon_minor_god: get("pantheonMinorGod"),
        bandit: get("bandit"),
        class_name: get("className"),
        ascend_class_name: get("ascendClassName"),
        character_level_auto_mode: get("characterLevelAutoMode"),
        main_socket_group: get("mainSocketGroup"),
        view_mode: get("viewMode"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::dom;

    #[test]
    fn reads_present_attributes() {
        let build = dom::parse(
            "<Build level=\"92\" className=\"Ranger\" ascendClassName=\"Deadeye\" viewMode=\"TREE\"/>",
        )
        .unwrap();
        let info = extract(&build);
        assert_eq!(info.level.as_deref(), Some("92"));
        assert_eq!(info.class_name.as_deref(), Some("Ranger"));
        assert_eq!(info.ascend_class_name.as_deref(), Some("Deadeye"));
        assert_eq!(info.view_mode.as_deref(), Some("TREE"));
        assert_eq!(info.bandit, None);
        assert_eq!(info.pantheon_major_god, None);
    }

    #[test]
    fn empty_attribute_is_present_but_empty() {
        let build = dom::parse("<Build bandit=\"\"/>").unwrap();
        let info = extract(&build);
        // "present but empty" stays distinguishable from "absent"
        assert_eq!(info.bandit.as_deref(), Some(""));
        assert_eq!(info.level, None);
    }
}

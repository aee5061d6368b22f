pub mod dom;
pub mod extract;

use tracing::{debug, error, info};

use crate::record::BuildRecord;

/// Two-pass pipeline: XML text → element tree → extracted record.
///
/// Never fails past this boundary: a document that does not parse, or
/// that carries no `Build` element, is logged and yields the default
/// (empty) record so one bad build cannot abort a batch.
pub fn parse_build(xml: &str) -> BuildRecord {
    info!("Starting to parse XML data...");

    let root = match dom::parse(xml) {
        Ok(root) => root,
        Err(e) => {
            error!("Failed to parse XML data: {:#}", e);
            return BuildRecord::default();
        }
    };

    let Some(build) = root.child("Build") else {
        error!("Build element not found in XML.");
        return BuildRecord::default();
    };

    let record = BuildRecord {
        build_info: extract::build_info::extract(build),
        stats: extract::stats::extract(build),
        gems: extract::gems::extract(&root),
        items: extract::items::extract(&root),
    };

    debug!(
        "Extracted {} stats, {} gem slots, {} items",
        record.stats.len(),
        record.gems.len(),
        record.items.len()
    );
    info!("Finished parsing XML data.");
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_xml_yields_empty_record() {
        let record = parse_build("<Build><unclosed>");
        assert!(record.build_info.level.is_none());
        assert!(record.stats.is_empty());
        assert!(record.gems.is_empty());
        assert!(record.items.is_empty());
    }

    #[test]
    fn missing_build_element_yields_empty_record() {
        let record = parse_build("<PathOfBuilding><Skills/></PathOfBuilding>");
        assert!(record.stats.is_empty());
        assert!(record.gems.is_empty());
        assert!(record.items.is_empty());
        assert!(record.build_info.class_name.is_none());
    }

    #[test]
    fn build_without_skills_or_items_keeps_record_shape() {
        let record = parse_build("<PathOfBuilding><Build level=\"12\"/></PathOfBuilding>");
        assert_eq!(record.build_info.level.as_deref(), Some("12"));
        assert!(record.gems.is_empty());
        assert!(record.items.is_empty());
    }

    #[test]
    fn full_document() {
        let xml = std::fs::read_to_string("tests/fixtures/ranger.xml").unwrap();
        let record = parse_build(&xml);
        assert_eq!(record.build_info.class_name.as_deref(), Some("Ranger"));
        assert!(!record.stats.is_empty());
        assert!(!record.gems.is_empty());
        assert_eq!(record.items.len(), 3);
    }
}

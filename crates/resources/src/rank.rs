//! Relevance re-ranking and grouping.

use studygate_core::{RelatedResource, ResourceType};

/// Default number of resources surfaced to the caller.
pub const DEFAULT_RESOURCE_LIMIT: usize = 5;

/// Relevance boost for resources owned by the section being read.
pub const SECTION_BOOST: u8 = 20;

/// Re-rank resources for the section the learner is currently reading.
///
/// Resources whose `section_id` matches the current section get a
/// [`SECTION_BOOST`] capped at 100, then the list is sorted descending by
/// relevance and truncated to `limit`. The sort is stable: ties keep
/// their original relative order. The input is never mutated; boosted
/// scores live only in the returned copies.
pub fn relevant_resources(
    resources: &[RelatedResource],
    current_section: Option<&str>,
    limit: usize,
) -> Vec<RelatedResource> {
    let mut ranked: Vec<RelatedResource> = resources
        .iter()
        .map(|resource| {
            let mut copy = resource.clone();
            if let (Some(current), Some(owner)) = (current_section, copy.section_id.as_deref()) {
                if owner == current {
                    copy.relevance = copy.relevance.saturating_add(SECTION_BOOST).min(100);
                }
            }
            copy
        })
        .collect();

    ranked.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    ranked.truncate(limit);
    ranked
}

/// Partition resources by type.
///
/// One entry per enumerated type in [`ResourceType::ALL`] order, present
/// even when its group is empty; input order is preserved within each
/// group.
pub fn group_by_type(
    resources: &[RelatedResource],
) -> Vec<(ResourceType, Vec<RelatedResource>)> {
    ResourceType::ALL
        .iter()
        .map(|&ty| {
            let group: Vec<RelatedResource> = resources
                .iter()
                .filter(|r| r.resource_type == ty)
                .cloned()
                .collect();
            (ty, group)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: &str, relevance: u8, section_id: Option<&str>) -> RelatedResource {
        RelatedResource {
            id: id.to_string(),
            title: format!("{id} title"),
            url: format!("https://example.com/{id}"),
            description: String::new(),
            resource_type: ResourceType::Other,
            relevance,
            section_id: section_id.map(str::to_string),
            tags: vec![],
        }
    }

    #[test]
    fn test_section_match_boosts_and_caps() {
        let list = vec![
            resource("a", 90, None),
            resource("b", 85, Some("sec-1")),
            resource("c", 80, Some("sec-2")),
        ];

        let ranked = relevant_resources(&list, Some("sec-1"), 2);
        assert_eq!(ranked.len(), 2);
        // 85 + 20 caps at 100 and wins over the unboosted 90.
        assert_eq!(ranked[0].id, "b");
        assert_eq!(ranked[0].relevance, 100);
        assert_eq!(ranked[1].id, "a");
        assert_eq!(ranked[1].relevance, 90);

        // Input stays untouched.
        assert_eq!(list[1].relevance, 85);
    }

    #[test]
    fn test_no_section_means_no_boost() {
        let list = vec![resource("a", 60, Some("sec-1")), resource("b", 70, None)];
        let ranked = relevant_resources(&list, None, 5);
        assert_eq!(ranked[0].id, "b");
        assert_eq!(ranked[1].relevance, 60);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let list = vec![
            resource("first", 70, None),
            resource("second", 70, None),
            resource("third", 70, None),
        ];

        let ranked = relevant_resources(&list, None, DEFAULT_RESOURCE_LIMIT);
        let ids: Vec<_> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_truncation_to_limit() {
        let list: Vec<_> = (0..10)
            .map(|i| resource(&format!("r{i}"), 50 + i as u8, None))
            .collect();
        let ranked = relevant_resources(&list, None, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].id, "r9");
    }

    #[test]
    fn test_group_by_type_covers_every_type() {
        let mut a = resource("a", 80, None);
        a.resource_type = ResourceType::Video;
        let mut b = resource("b", 70, None);
        b.resource_type = ResourceType::Video;
        let mut c = resource("c", 60, None);
        c.resource_type = ResourceType::Book;

        let groups = group_by_type(&[a, b, c]);
        assert_eq!(groups.len(), ResourceType::ALL.len());

        let videos = &groups
            .iter()
            .find(|(ty, _)| *ty == ResourceType::Video)
            .unwrap()
            .1;
        let ids: Vec<_> = videos.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);

        let tutorials = &groups
            .iter()
            .find(|(ty, _)| *ty == ResourceType::Tutorial)
            .unwrap()
            .1;
        assert!(tutorials.is_empty());
    }
}

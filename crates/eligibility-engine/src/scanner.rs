//! Per-page scanning: apply every catalog pattern to one page of text

use crate::extractors::CharMap;
use crate::patterns::{is_college_requirement, PatternCatalog, PatternGroup};
use shared_types::{EducationMatchRecord, MatchRecord};

/// Matches found on a single page, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMatches {
    pub stem: Vec<MatchRecord>,
    pub education: Vec<EducationMatchRecord>,
}

impl PageMatches {
    pub fn is_empty(&self) -> bool {
        self.stem.is_empty() && self.education.is_empty()
    }
}

/// Scan one page. `page_number` is 1-based.
///
/// Each pattern contributes all of its non-overlapping matches left to right
/// before the next pattern in the group is tried.
pub fn scan_page(catalog: &PatternCatalog, page_number: u32, text: &str) -> PageMatches {
    if text.is_empty() {
        return PageMatches::default();
    }

    let map = CharMap::new(text);
    let stem = find_matches(catalog.stem(), page_number, &map);
    let education = find_matches(catalog.education(), page_number, &map)
        .into_iter()
        .map(|record| {
            let is_college_requirement = is_college_requirement(&record.matched_text);
            EducationMatchRecord {
                record,
                is_college_requirement,
            }
        })
        .collect();

    PageMatches { stem, education }
}

fn find_matches(group: &PatternGroup, page_number: u32, map: &CharMap<'_>) -> Vec<MatchRecord> {
    let text = map.text();
    let mut records = Vec::new();

    for pattern in group.patterns() {
        for m in pattern.find_iter(text) {
            let start_offset = map.char_offset(m.start());
            let end_offset = map.char_offset(m.end());
            records.push(MatchRecord {
                matched_text: m.as_str().to_string(),
                page_number,
                start_offset,
                end_offset,
                context: map.context(start_offset, end_offset).to_string(),
            });
        }
    }

    records
}

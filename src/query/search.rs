// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::RegexBuilder;

use crate::guide::Guide;
use crate::model::SectionId;
use crate::render::render_panel_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Substring,
    Regex,
}

/// One matching line of a rendered (unwrapped) panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub section_id: SectionId,
    pub line: usize,
    pub text: String,
}

/// Searches every routed panel in registry order. Sections without a panel are skipped.
pub fn search_guide(
    guide: &Guide,
    needle: &str,
    mode: SearchMode,
    case_insensitive: bool,
) -> Result<Vec<SearchHit>, regex::Error> {
    let matcher: Box<dyn Fn(&str) -> bool> = match mode {
        SearchMode::Substring => {
            if needle.is_empty() {
                return Ok(Vec::new());
            }
            if case_insensitive {
                let needle_lower = needle.to_lowercase();
                Box::new(move |line: &str| line.to_lowercase().contains(&needle_lower))
            } else {
                let needle = needle.to_owned();
                Box::new(move |line: &str| line.contains(&needle))
            }
        }
        SearchMode::Regex => {
            let regex = RegexBuilder::new(needle).case_insensitive(case_insensitive).build()?;
            Box::new(move |line: &str| regex.is_match(line))
        }
    };

    let mut hits = Vec::new();
    for section in guide.sections() {
        let Some(panel) = guide.router().route(section.id().as_str()) else {
            continue;
        };
        for (line, rendered) in render_panel_lines(&panel, None).into_iter().enumerate() {
            if matcher(&rendered.text) {
                hits.push(SearchHit {
                    section_id: section.id().clone(),
                    line,
                    text: rendered.text,
                });
            }
        }
    }
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::{search_guide, SearchMode};
    use crate::guide::utils_guide;

    fn section_ids(hits: &[super::SearchHit]) -> Vec<&str> {
        let mut ids = hits.iter().map(|hit| hit.section_id.as_str()).collect::<Vec<_>>();
        ids.dedup();
        ids
    }

    #[test]
    fn substring_search_is_case_insensitive_when_asked() {
        let guide = utils_guide();
        let hits = search_guide(&guide, "OPTIN", SearchMode::Substring, true).expect("search");
        assert_eq!(section_ids(&hits), vec!["asset"]);

        let hits = search_guide(&guide, "OPTIN", SearchMode::Substring, false).expect("search");
        assert!(hits.is_empty());
    }

    #[test]
    fn hits_follow_registry_order() {
        let guide = utils_guide();
        let hits = search_guide(&guide, "algorand.send", SearchMode::Substring, false)
            .expect("search");
        assert_eq!(section_ids(&hits), vec!["transaction", "asset"]);
        assert!(hits.windows(2).all(|pair| pair[0].section_id != pair[1].section_id
            || pair[0].line < pair[1].line));
    }

    #[test]
    fn regex_mode_matches_and_reports_invalid_patterns() {
        let guide = utils_guide();
        let hits =
            search_guide(&guide, r"^\s*npm install", SearchMode::Regex, false).expect("search");
        assert_eq!(section_ids(&hits), vec!["introduction"]);

        let err = search_guide(&guide, "(", SearchMode::Regex, true).unwrap_err();
        assert!(err.to_string().to_lowercase().contains("regex"));
    }

    #[test]
    fn empty_substring_finds_nothing() {
        let hits = search_guide(&utils_guide(), "", SearchMode::Substring, true).expect("search");
        assert!(hits.is_empty());
    }
}

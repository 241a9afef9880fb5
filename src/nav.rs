// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation view model: one control per registry section, in registry order.

use crate::model::{SectionId, SectionRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub title: String,
    /// True iff `id` equals the current id byte for byte.
    pub active: bool,
}

pub fn nav_items(registry: &SectionRegistry, current: &SectionId) -> Vec<NavItem> {
    registry
        .iter()
        .map(|section| NavItem {
            id: section.id().clone(),
            title: section.title().to_owned(),
            active: section.id() == current,
        })
        .collect()
}

/// Index of the active control, if any.
pub fn active_index(items: &[NavItem]) -> Option<usize> {
    items.iter().position(|item| item.active)
}

#[cfg(test)]
mod tests {
    use super::{active_index, nav_items};
    use crate::model::{Section, SectionId, SectionRegistry};

    fn registry() -> SectionRegistry {
        SectionRegistry::new(vec![
            Section::new("introduction", "Introduction"),
            Section::new("account", "Account Management"),
        ])
        .expect("registry")
    }

    #[test]
    fn items_follow_registry_order_and_titles() {
        let items = nav_items(&registry(), &SectionId::new("introduction"));
        let titles = items.iter().map(|item| item.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Introduction", "Account Management"]);
        assert_eq!(active_index(&items), Some(0));
    }

    #[test]
    fn active_match_is_case_and_whitespace_sensitive() {
        for current in ["Account", "account ", " account", "ACCOUNT"] {
            let items = nav_items(&registry(), &SectionId::new(current));
            assert_eq!(active_index(&items), None, "{current:?} must not match");
        }
        let items = nav_items(&registry(), &SectionId::new("account"));
        assert_eq!(active_index(&items), Some(1));
    }
}

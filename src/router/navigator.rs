// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Panel, Section, SectionId, SectionRegistry};
use crate::nav::{nav_items, NavItem};

use super::{ActiveSection, ContentRouter, SelectionError, SelectionPolicy};

/// The state holder a view owns: registry, active section, and content router.
///
/// This is the whole surface a rendering layer needs: list the sections, read the current id,
/// and request a selection.
#[derive(Debug, Clone)]
pub struct Navigator {
    registry: SectionRegistry,
    router: ContentRouter,
    state: ActiveSection,
}

impl Navigator {
    pub fn new(
        registry: SectionRegistry,
        router: ContentRouter,
        default_id: impl Into<SectionId>,
        policy: SelectionPolicy,
    ) -> Result<Self, SelectionError> {
        let state = ActiveSection::with_policy(default_id, policy, &registry)?;
        Ok(Self { registry, router, state })
    }

    pub fn sections(&self) -> &[Section] {
        self.registry.sections()
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn current_id(&self) -> &SectionId {
        self.state.current()
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.state.policy()
    }

    pub fn rev(&self) -> u64 {
        self.state.rev()
    }

    pub fn select_section(
        &mut self,
        id: impl Into<SectionId>,
    ) -> Result<&SectionId, SelectionError> {
        self.state.select(id, &self.registry)
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        nav_items(&self.registry, self.state.current())
    }

    /// The panel for the current id, or `None` when nothing matches.
    pub fn active_panel(&self) -> Option<Panel> {
        self.router.route(self.state.current().as_str())
    }

    /// The panel for an arbitrary id, without touching the selection.
    pub fn panel_for(&self, id: &str) -> Option<Panel> {
        self.router.route(id)
    }

    /// The current section's registry entry, if the current id is a registered one.
    pub fn active_section(&self) -> Option<&Section> {
        self.registry.get(self.state.current().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Navigator;
    use crate::model::{Panel, Section, SectionRegistry};
    use crate::router::{ContentRouter, PanelSource, SelectionPolicy};

    fn navigator(policy: SelectionPolicy) -> Navigator {
        let registry = SectionRegistry::new(vec![
            Section::new("introduction", "Introduction"),
            Section::new("account", "Account Management"),
            Section::new("draft", "Draft (no panel yet)"),
        ])
        .expect("registry");
        let router = ContentRouter::new()
            .with_panel("introduction", PanelSource::Static(Panel::new("Introduction")))
            .with_panel("account", PanelSource::Static(Panel::new("Account Management")));
        Navigator::new(registry, router, "introduction", policy).expect("navigator")
    }

    #[test]
    fn every_registered_section_routes_to_its_own_panel() {
        let mut nav = navigator(SelectionPolicy::Permissive);
        for (id, heading) in [("account", "Account Management"), ("introduction", "Introduction")]
        {
            nav.select_section(id).expect("select");
            assert_eq!(nav.active_panel().map(|panel| panel.heading).as_deref(), Some(heading));
        }
    }

    #[test]
    fn exactly_one_nav_item_is_active_for_registered_ids() {
        let mut nav = navigator(SelectionPolicy::Permissive);
        let ids = nav.sections().iter().map(|s| s.id().clone()).collect::<Vec<_>>();
        for id in ids {
            nav.select_section(id.clone()).expect("select");
            let active = nav.nav_items().into_iter().filter(|item| item.active).collect::<Vec<_>>();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].id, id);
        }
    }

    #[test]
    fn registered_section_without_panel_routes_to_empty() {
        let mut nav = navigator(SelectionPolicy::Strict);
        nav.select_section("draft").expect("draft is registered");
        assert!(nav.active_section().is_some());
        assert!(nav.active_panel().is_none());
    }

    #[test]
    fn unknown_selection_clears_content_and_nav_highlight() {
        let mut nav = navigator(SelectionPolicy::Permissive);
        nav.select_section("nonexistent-id").expect("permissive");
        assert_eq!(nav.current_id(), "nonexistent-id");
        assert!(nav.active_panel().is_none());
        assert!(nav.active_section().is_none());
        assert!(nav.nav_items().iter().all(|item| !item.active));
    }

    #[test]
    fn strict_navigator_keeps_previous_panel_on_unknown_id() {
        let mut nav = navigator(SelectionPolicy::Strict);
        nav.select_section("account").expect("select");
        nav.select_section("nonexistent-id").unwrap_err();
        assert_eq!(nav.current_id(), "account");
        assert_eq!(nav.panel_for("account"), nav.active_panel());
    }
}

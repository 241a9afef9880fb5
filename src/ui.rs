// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared UI state for cross-component coordination.
//!
//! The interactive TUI publishes the section a human is looking at; programmatic clients (MCP)
//! post selection requests that the TUI applies while follow-AI is enabled.

use crate::model::SectionId;

/// A selection posted by an agent, tagged with the revision it was posted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    pub rev: u64,
    pub section_id: SectionId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    rev: u64,
    human_active_section: Option<SectionId>,
    agent_request: Option<AgentRequest>,
    follow_ai: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { rev: 0, human_active_section: None, agent_request: None, follow_ai: true }
    }
}

impl UiState {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn human_active_section(&self) -> Option<&SectionId> {
        self.human_active_section.as_ref()
    }

    pub fn agent_request(&self) -> Option<&AgentRequest> {
        self.agent_request.as_ref()
    }

    pub fn follow_ai(&self) -> bool {
        self.follow_ai
    }

    pub fn set_human_active_section(&mut self, section_id: SectionId) {
        if self.human_active_section.as_ref() == Some(&section_id) {
            return;
        }
        self.human_active_section = Some(section_id);
        self.rev = self.rev.wrapping_add(1);
    }

    /// Posts a selection request; each call gets a fresh revision even for the same id.
    pub fn request_selection(&mut self, section_id: SectionId) -> u64 {
        self.rev = self.rev.wrapping_add(1);
        self.agent_request = Some(AgentRequest { rev: self.rev, section_id });
        self.rev
    }

    pub fn set_follow_ai(&mut self, follow_ai: bool) {
        if self.follow_ai == follow_ai {
            return;
        }
        self.follow_ai = follow_ai;
        self.rev = self.rev.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::UiState;
    use crate::model::SectionId;

    #[test]
    fn human_selection_only_bumps_rev_on_change() {
        let mut state = UiState::default();
        state.set_human_active_section(SectionId::new("introduction"));
        let rev = state.rev();
        state.set_human_active_section(SectionId::new("introduction"));
        assert_eq!(state.rev(), rev);
        state.set_human_active_section(SectionId::new("account"));
        assert_eq!(state.rev(), rev + 1);
    }

    #[test]
    fn repeated_agent_requests_get_distinct_revs() {
        let mut state = UiState::default();
        let first = state.request_selection(SectionId::new("asset"));
        let second = state.request_selection(SectionId::new("asset"));
        assert!(second > first);
        assert_eq!(state.agent_request().map(|req| req.rev), Some(second));
    }

    #[test]
    fn follow_ai_defaults_on() {
        let mut state = UiState::default();
        assert!(state.follow_ai());
        state.set_follow_ai(false);
        assert!(!state.follow_ai());
    }
}

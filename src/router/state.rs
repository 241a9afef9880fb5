// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{SectionId, SectionRegistry};

/// How `select` treats ids that are not in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Any id is stored verbatim; unknown ids route to an empty panel.
    #[default]
    Permissive,
    /// Unknown ids are rejected and the current selection is kept.
    Strict,
}

impl SelectionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }
}

/// The single currently selected section.
///
/// There is no "nothing selected" state: a default id is chosen at construction and every
/// later change goes through [`ActiveSection::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSection {
    current: SectionId,
    policy: SelectionPolicy,
    rev: u64,
}

impl ActiveSection {
    /// Permissive state starting at `default_id`.
    pub fn initialize(default_id: impl Into<SectionId>) -> Self {
        Self { current: default_id.into(), policy: SelectionPolicy::Permissive, rev: 0 }
    }

    /// State starting at `default_id` under `policy`; strict mode validates the default too.
    pub fn with_policy(
        default_id: impl Into<SectionId>,
        policy: SelectionPolicy,
        registry: &SectionRegistry,
    ) -> Result<Self, SelectionError> {
        let current = default_id.into();
        if policy == SelectionPolicy::Strict && !registry.contains(current.as_str()) {
            return Err(SelectionError::InvalidSelection { id: current });
        }
        Ok(Self { current, policy, rev: 0 })
    }

    pub fn current(&self) -> &SectionId {
        &self.current
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Bumped on every accepted selection, including re-selecting the current id.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn select(
        &mut self,
        id: impl Into<SectionId>,
        registry: &SectionRegistry,
    ) -> Result<&SectionId, SelectionError> {
        let id = id.into();
        let known = registry.contains(id.as_str());
        if !known {
            if self.policy == SelectionPolicy::Strict {
                tracing::debug!(section_id = %id, "rejected selection of unknown section");
                return Err(SelectionError::InvalidSelection { id });
            }
            tracing::debug!(section_id = %id, "selected unknown section; content will be empty");
        }

        if self.current != id {
            tracing::trace!(from = %self.current, to = %id, "active section changed");
        }
        self.current = id;
        self.rev = self.rev.wrapping_add(1);
        Ok(&self.current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    InvalidSelection { id: SectionId },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelection { id } => write!(f, "unknown section: {id}"),
        }
    }
}

impl std::error::Error for SelectionError {}

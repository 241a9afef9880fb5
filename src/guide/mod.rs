// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Guides: a registry of sections, their panels, and the chrome text around them.

use std::fmt;

use crate::model::{Section, SectionId, SectionRegistry};
use crate::router::{ContentRouter, Navigator, SelectionError, SelectionPolicy};

mod builtin;

pub use builtin::{brochure_guide, builtin_guide, utils_guide, BUILTIN_GUIDE_NAMES};

/// Header and footer text shown around the section content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuideMeta {
    pub title: String,
    pub subtitle: Option<String>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Guide {
    meta: GuideMeta,
    registry: SectionRegistry,
    router: ContentRouter,
    default_section: SectionId,
}

impl Guide {
    pub fn new(
        meta: GuideMeta,
        registry: SectionRegistry,
        router: ContentRouter,
        default_section: impl Into<SectionId>,
    ) -> Self {
        Self { meta, registry, router, default_section: default_section.into() }
    }

    pub fn meta(&self) -> &GuideMeta {
        &self.meta
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn router(&self) -> &ContentRouter {
        &self.router
    }

    pub fn sections(&self) -> &[Section] {
        self.registry.sections()
    }

    pub fn default_section(&self) -> &SectionId {
        &self.default_section
    }

    /// Overrides the section selected when a view starts.
    pub fn set_default_section(&mut self, id: impl Into<SectionId>) {
        self.default_section = id.into();
    }

    /// A fresh navigator positioned at the default section.
    pub fn navigator(&self, policy: SelectionPolicy) -> Result<Navigator, SelectionError> {
        Navigator::new(
            self.registry.clone(),
            self.router.clone(),
            self.default_section.clone(),
            policy,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGuideError {
    pub name: String,
}

impl fmt::Display for UnknownGuideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown built-in guide '{}' (expected one of: {})",
            self.name,
            BUILTIN_GUIDE_NAMES.join(", ")
        )
    }
}

impl std::error::Error for UnknownGuideError {}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Section routing: the active-section state machine and the id → panel dispatch table.

use std::collections::HashMap;

use crate::model::{Panel, SectionId};

mod navigator;
mod state;

pub use navigator::Navigator;
pub use state::{ActiveSection, SelectionError, SelectionPolicy};

/// How a panel is produced when its section is routed to.
#[derive(Debug, Clone)]
pub enum PanelSource {
    Builtin(fn() -> Panel),
    Static(Panel),
}

impl PanelSource {
    pub fn build(&self) -> Panel {
        match self {
            Self::Builtin(make) => make(),
            Self::Static(panel) => panel.clone(),
        }
    }
}

/// Maps section ids to panels. Exactly one panel, or none, is produced per lookup.
#[derive(Debug, Clone, Default)]
pub struct ContentRouter {
    panels: HashMap<SectionId, PanelSource>,
}

impl ContentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_panel(mut self, id: impl Into<SectionId>, source: PanelSource) -> Self {
        self.insert(id, source);
        self
    }

    /// Registers `source` for `id`, returning the source it replaced.
    pub fn insert(&mut self, id: impl Into<SectionId>, source: PanelSource) -> Option<PanelSource> {
        self.panels.insert(id.into(), source)
    }

    pub fn has_panel(&self, id: &str) -> bool {
        self.panels.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Builds the panel whose id equals `current` exactly. Unknown ids yield `None`;
    /// there is no fallback panel.
    pub fn route(&self, current: &str) -> Option<Panel> {
        self.panels.get(current).map(PanelSource::build)
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A guide is an ordered registry of sections; each section id may map to a content panel.

pub mod ids;
pub mod panel;
pub mod section;

pub use ids::SectionId;
pub use panel::{Block, Bullet, Feature, Panel};
pub use section::{RegistryError, Section, SectionRegistry};

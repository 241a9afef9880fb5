// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Guides on disk.
//!
//! A guide file is a single JSON document holding the chrome text, the default section, and
//! the ordered sections with their panels.

pub mod guide_file;

pub use guide_file::{parse_guide, GuideDocument, GuideFile, SectionDocument, StoreError};

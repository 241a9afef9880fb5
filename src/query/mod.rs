// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over guides: panel text search and section jump ranking.

pub mod jump;
pub mod search;

pub use jump::{ranked_sections, JumpKind};
pub use search::{search_guide, SearchHit, SearchMode};

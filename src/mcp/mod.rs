// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Model Context Protocol (MCP) server surface.
//!
//! The MCP layer gives programmatic clients the same navigation core the TUI uses: list sections,
//! read the current one, select a section, and read or search panels.

mod server;
mod types;

pub use server::DocdeckMcp;

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Docdeck: a terminal documentation guide browser.
//!
//! A guide is an ordered registry of sections. Exactly one section is current at a time; the
//! navigation view marks it active and the content router shows its panel. The TUI and the MCP
//! server are two views over the same [`router::Navigator`].

pub mod guide;
pub mod mcp;
pub mod model;
pub mod nav;
pub mod query;
pub mod render;
pub mod router;
pub mod store;
pub mod telemetry;
pub mod tui;
pub mod ui;

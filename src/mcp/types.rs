// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Block, Bullet, Feature, Panel};
use crate::query::{SearchHit, SearchMode};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadContext {
    pub current_section_id: String,
    pub human_active_section: Option<String>,
    pub follow_ai: Option<bool>,
    pub ui_rev: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GuideMetaResponse {
    pub title: String,
    pub subtitle: Option<String>,
    pub footer: Option<String>,
    pub default_section_id: String,
    pub policy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SectionSummary {
    pub section_id: String,
    pub title: String,
    pub active: bool,
    pub has_panel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListSectionsResponse {
    pub sections: Vec<SectionSummary>,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CurrentSectionResponse {
    pub section_id: String,
    /// Registry title, absent when the current id is not a registered section.
    pub title: Option<String>,
    pub panel_found: bool,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SectionSelectParams {
    pub section_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SectionSelectResponse {
    pub section_id: String,
    pub registered: bool,
    pub panel_found: bool,
    /// False when an attached UI has follow-AI off and the current section did not change.
    pub applied: bool,
    /// Revision of the selection request posted to the interactive UI, if one is attached.
    pub ui_request_rev: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PanelReadParams {
    /// Defaults to the current section.
    pub section_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpBullet {
    pub label: Option<String>,
    pub text: String,
}

impl From<&Bullet> for McpBullet {
    fn from(bullet: &Bullet) -> Self {
        Self { label: bullet.label.clone(), text: bullet.text.clone() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum McpBlock {
    Paragraph { text: String },
    Bullets { items: Vec<McpBullet> },
    Code { code: String, language: Option<String> },
}

impl From<&Block> for McpBlock {
    fn from(block: &Block) -> Self {
        match block {
            Block::Paragraph { text } => Self::Paragraph { text: text.clone() },
            Block::Bullets { items } => Self::Bullets { items: items.iter().map(Into::into).collect() },
            Block::Code { code, language } => {
                Self::Code { code: code.clone(), language: language.clone() }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpFeature {
    pub title: String,
    pub blocks: Vec<McpBlock>,
}

impl From<&Feature> for McpFeature {
    fn from(feature: &Feature) -> Self {
        Self { title: feature.title.clone(), blocks: feature.blocks.iter().map(Into::into).collect() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpPanel {
    pub heading: String,
    pub intro: Vec<String>,
    pub features: Vec<McpFeature>,
}

impl From<&Panel> for McpPanel {
    fn from(panel: &Panel) -> Self {
        Self {
            heading: panel.heading.clone(),
            intro: panel.intro.clone(),
            features: panel.features.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PanelReadResponse {
    pub section_id: String,
    /// Absent when no panel is routed for `section_id`; views show an empty content area.
    pub panel: Option<McpPanel>,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PanelRenderTextParams {
    pub section_id: Option<String>,
    /// Wrap width in columns; unwrapped when omitted.
    pub width: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PanelRenderTextResponse {
    pub section_id: String,
    pub panel_found: bool,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum McpSearchMode {
    #[default]
    Substring,
    Regex,
}

impl From<McpSearchMode> for SearchMode {
    fn from(mode: McpSearchMode) -> Self {
        match mode {
            McpSearchMode::Substring => SearchMode::Substring,
            McpSearchMode::Regex => SearchMode::Regex,
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GuideSearchParams {
    pub needle: String,
    #[serde(default)]
    pub mode: Option<McpSearchMode>,
    /// Case-insensitive unless set.
    #[serde(default)]
    pub case_sensitive: Option<bool>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpSearchHit {
    pub section_id: String,
    pub line: u64,
    pub text: String,
}

impl From<SearchHit> for McpSearchHit {
    fn from(hit: SearchHit) -> Self {
        Self { section_id: hit.section_id.as_str().to_owned(), line: hit.line as u64, text: hit.text }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GuideSearchResponse {
    pub hits: Vec<McpSearchHit>,
    pub truncated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FollowAiReadResponse {
    pub enabled: bool,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FollowAiSetParams {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FollowAiSetResponse {
    pub enabled: bool,
}

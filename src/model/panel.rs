// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// Rendered content for one section: a heading, lead paragraphs, and feature cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub heading: String,
    #[serde(default)]
    pub intro: Vec<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    Bullets { items: Vec<Bullet> },
    Code {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

impl Panel {
    pub fn new(heading: impl Into<String>) -> Self {
        Self { heading: heading.into(), intro: Vec::new(), features: Vec::new() }
    }

    pub fn with_intro(mut self, paragraph: impl Into<String>) -> Self {
        self.intro.push(paragraph.into());
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// All code blocks in display order.
    pub fn code_snippets(&self) -> Vec<&str> {
        self.features
            .iter()
            .flat_map(|feature| feature.blocks.iter())
            .filter_map(|block| match block {
                Block::Code { code, .. } => Some(code.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Feature {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), blocks: Vec::new() }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph { text: text.into() });
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.blocks.push(Block::Code { code: code.into(), language: None });
        self
    }

    pub fn code_in(mut self, language: &str, code: impl Into<String>) -> Self {
        self.blocks.push(Block::Code { code: code.into(), language: Some(language.to_owned()) });
        self
    }

    pub fn bullets(mut self, items: impl IntoIterator<Item = Bullet>) -> Self {
        self.blocks.push(Block::Bullets { items: items.into_iter().collect() });
        self
    }
}

impl Bullet {
    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self { label: Some(label.into()), text: text.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self { label: None, text: text.into() }
    }
}

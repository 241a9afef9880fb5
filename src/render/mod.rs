// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering for panels.
//!
//! Panels are flattened into tagged lines; the TUI styles them per kind and the MCP surface
//! joins them into plain text.

use crate::model::{Block, Panel};

const CODE_INDENT: &str = "    ";
const BULLET: &str = "• ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLineKind {
    Heading,
    Text,
    FeatureTitle,
    Bullet,
    Code,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLine {
    pub kind: PanelLineKind,
    pub text: String,
    /// Index of the logical (unwrapped) line this display line belongs to.
    pub source: usize,
}

#[derive(Default)]
struct LineSink {
    lines: Vec<PanelLine>,
    next_source: usize,
}

impl LineSink {
    fn push(&mut self, kind: PanelLineKind, text: impl Into<String>) {
        self.lines.push(PanelLine { kind, text: text.into(), source: self.next_source });
        self.next_source += 1;
    }

    fn blank(&mut self) {
        self.push(PanelLineKind::Blank, String::new());
    }

    fn push_wrapped(
        &mut self,
        kind: PanelLineKind,
        first_prefix: &str,
        text: &str,
        width: Option<usize>,
    ) {
        let source = self.next_source;
        self.next_source += 1;
        let prefix_len = first_prefix.chars().count();
        let Some(width) = width.filter(|width| *width > prefix_len + 1) else {
            self.lines.push(PanelLine { kind, text: format!("{first_prefix}{text}"), source });
            return;
        };

        let hang = " ".repeat(prefix_len);
        let mut line = String::from(first_prefix);
        let mut line_len = prefix_len;
        let mut has_word = false;
        for word in text.split_whitespace() {
            let word_len = word.chars().count();
            if has_word && line_len + 1 + word_len > width {
                self.lines.push(PanelLine { kind, text: std::mem::take(&mut line), source });
                line.push_str(&hang);
                line_len = prefix_len;
                has_word = false;
            }
            if has_word {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(word);
            line_len += word_len;
            has_word = true;
        }
        self.lines.push(PanelLine { kind, text: line, source });
    }
}

/// Flattens `panel` into display lines. Prose wraps at `width` columns when given; code is
/// never wrapped.
pub fn render_panel_lines(panel: &Panel, width: Option<usize>) -> Vec<PanelLine> {
    let mut sink = LineSink::default();
    sink.push(PanelLineKind::Heading, panel.heading.clone());
    sink.blank();

    for paragraph in &panel.intro {
        sink.push_wrapped(PanelLineKind::Text, "", paragraph, width);
        sink.blank();
    }

    for feature in &panel.features {
        sink.push(PanelLineKind::FeatureTitle, format!("▌ {}", feature.title));
        for block in &feature.blocks {
            match block {
                Block::Paragraph { text } => {
                    sink.push_wrapped(PanelLineKind::Text, "", text, width);
                }
                Block::Bullets { items } => {
                    for item in items {
                        let text = match &item.label {
                            Some(label) => format!("{label}: {}", item.text),
                            None => item.text.clone(),
                        };
                        sink.push_wrapped(PanelLineKind::Bullet, BULLET, &text, width);
                    }
                }
                Block::Code { code, .. } => {
                    for line in code.lines() {
                        let text = if line.is_empty() {
                            String::new()
                        } else {
                            format!("{CODE_INDENT}{line}")
                        };
                        sink.push(PanelLineKind::Code, text);
                    }
                }
            }
        }
        sink.blank();
    }

    let mut out = sink.lines;
    while out.last().is_some_and(|line| line.kind == PanelLineKind::Blank) {
        out.pop();
    }
    out
}

/// Plain text for a routed panel; an absent panel renders as the empty string.
pub fn render_panel_text(panel: Option<&Panel>, width: Option<usize>) -> String {
    let Some(panel) = panel else {
        return String::new();
    };
    render_panel_lines(panel, width)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// First display line that belongs to logical line `source`.
pub fn display_line_for_source(lines: &[PanelLine], source: usize) -> Option<usize> {
    lines.iter().position(|line| line.source == source)
}

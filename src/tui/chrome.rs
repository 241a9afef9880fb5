// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, and help helpers used by TUI rendering.
fn stack_nav_vertically(area: Rect) -> bool {
    area.width < STACK_BELOW_WIDTH
}

fn header_height(meta: &GuideMeta) -> u16 {
    if meta.subtitle.is_some() {
        3
    } else {
        2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Nav,
    Content,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Nav => Self::Content,
            Self::Content => Self::Nav,
        }
    }
}

fn view_title(label: &str, key: char, tail: Option<&str>) -> String {
    let mut title = format!("─[{key}]─ {label}");
    if let Some(tail) = tail.map(str::trim).filter(|tail| !tail.is_empty()) {
        title.push(' ');
        title.push_str(tail);
    }
    title.push(' ');
    title
}

fn section_counter_label(index: Option<usize>, total: usize) -> String {
    if total == 0 {
        return "[0/0]".to_owned();
    }
    let width = total.to_string().len();
    match index {
        Some(index) => format!("[{:0width$}/{total}]", index + 1),
        None => format!("[{}/{total}]", "-".repeat(width)),
    }
}

fn header_lines(meta: &GuideMeta, theme: &TuiTheme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(meta.title.clone(), theme.header_style()))];
    if let Some(subtitle) = &meta.subtitle {
        lines.push(Line::from(Span::styled(subtitle.clone(), theme.subtitle_style())));
    }
    lines
}

fn nav_item_line(
    item: &NavItem,
    index: usize,
    hint_label: Option<&str>,
    theme: &TuiTheme,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(4);
    if let Some(label) = hint_label {
        spans.push(Span::styled(format!("{label:<2}"), theme.hint_style()));
        spans.push(Span::raw(" "));
    } else if index < 9 {
        spans.push(Span::styled(format!("{} ", index + 1), theme.muted_style()));
    } else {
        spans.push(Span::raw("  "));
    }
    spans.push(Span::raw(if item.active { "▸ " } else { "  " }));
    spans.push(Span::raw(item.title.clone()));
    Line::from(spans)
}

fn content_line(line: &PanelLine, highlighted: bool, theme: &TuiTheme) -> Line<'static> {
    let style =
        if highlighted { theme.search_match_style() } else { theme.line_style(line.kind) };
    Line::from(Span::styled(line.text.clone(), style))
}

fn footer_key_spans(theme: &TuiTheme, pairs: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(pairs.len() * 3);
    for (idx, (key, label)) in pairs.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled((*key).to_owned(), theme.footer_key_style()));
        spans.push(Span::styled(format!(" {label}"), theme.footer_label_style()));
    }
    spans
}

fn footer_help_line(app: &App, toast_suffix: &str, compact: bool) -> Line<'static> {
    let pairs: &[(&str, &str)] = if compact {
        &[("q", "quit"), ("?", "help"), ("⏎", "open")]
    } else {
        &[
            ("q", "quit"),
            ("?", "help"),
            ("Tab", "focus"),
            ("⏎", "open"),
            ("/", "search"),
            ("\\", "jump"),
            ("f", "hint"),
            ("y", "yank"),
        ]
    };
    let mut spans = footer_key_spans(&app.theme, pairs);
    if !app.follow_ai {
        spans.push(Span::styled("  [follow-AI off]".to_owned(), app.theme.muted_style()));
    }
    if !toast_suffix.is_empty() {
        spans.push(Span::raw(toast_suffix.to_owned()));
    }
    Line::from(spans)
}

fn prompt_footer_line(app: &App, kind: PromptKind, toast_suffix: &str) -> Line<'static> {
    let sigil = match kind {
        PromptKind::Search => '/',
        PromptKind::Jump => '\\',
    };
    let mut spans = vec![
        Span::styled(sigil.to_string(), app.theme.footer_key_style()),
        Span::raw(app.prompt_query.clone()),
    ];
    if !toast_suffix.is_empty() {
        spans.push(Span::raw(toast_suffix.to_owned()));
    }
    Line::from(spans)
}

fn results_footer_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let total = app.search_hits.len();
    let current = if total == 0 { 0 } else { app.search_hit_index + 1 };
    let mut spans = vec![
        Span::styled("/".to_owned(), app.theme.footer_key_style()),
        Span::raw(format!("{} [{current}/{total}]  ", app.prompt_query)),
    ];
    spans.extend(footer_key_spans(&app.theme, &[("n", "next"), ("N", "prev"), ("Esc", "clear")]));
    if !toast_suffix.is_empty() {
        spans.push(Span::raw(toast_suffix.to_owned()));
    }
    Line::from(spans)
}

fn footer_brand_line(meta: &GuideMeta, theme: &TuiTheme) -> Line<'static> {
    let text = meta.footer.clone().unwrap_or_else(|| FOOTER_BRAND.to_owned());
    Line::from(Span::styled(text, theme.muted_style()))
}

fn help_lines() -> Vec<Line<'static>> {
    let rows: &[(&str, &str)] = &[
        ("q", "Quit"),
        ("?", "Toggle this help"),
        ("Tab / h / l", "Focus navigation or content"),
        ("j / k, ↑ / ↓", "Move the navigation cursor or scroll content"),
        ("PgUp / PgDn", "Scroll content by a page"),
        ("Home / End", "First/last section or top/bottom of content"),
        ("Enter / Space", "Open the section under the cursor"),
        ("1 – 9", "Open the nth section"),
        ("click", "Open the clicked section"),
        ("f", "Show hint labels, then type a label to open"),
        ("\\", "Fuzzy jump to a section by name"),
        ("/", "Search all panels; n / N cycle matches"),
        ("y", "Copy the current panel's code snippets (OSC 52)"),
        ("a", "Toggle follow-AI (apply agent selections)"),
    ];
    rows.iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:>14}"), Style::default().fg(Color::Cyan)),
                Span::raw("  "),
                Span::raw((*desc).to_owned()),
            ])
        })
        .collect()
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_help(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let lines = help_lines();
    let popup = centered_rect(area, 72, lines.len() as u16 + 2);
    let max_scroll = (lines.len() as u16).saturating_sub(popup.height.saturating_sub(2));
    app.help_scroll = app.help_scroll.min(max_scroll);
    frame.render_widget(Clear, popup);
    let help = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Help", '?', None))
                .border_style(app.theme.panel_border_style(true)),
        )
        .scroll((app.help_scroll, 0));
    frame.render_widget(help, popup);
}

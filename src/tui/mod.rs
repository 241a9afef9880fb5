// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive guide shell (ratatui + crossterm): a header, a navigation sidebar with
//! one control per section, the routed content panel, and a footer.

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use tokio::sync::Mutex;

use crate::guide::{Guide, GuideMeta};
use crate::model::SectionId;
use crate::nav::{active_index, NavItem};
use crate::query::{ranked_sections, search_guide, JumpKind, SearchHit, SearchMode};
use crate::render::{display_line_for_source, render_panel_lines, PanelLine};
use crate::router::{Navigator, SelectionError, SelectionPolicy};
use crate::ui::UiState;

mod hints;
mod theme;

use theme::TuiTheme;

const FOOTER_BRAND: &str = "docdeck";
const HINT_CHARS: &str = "asdfghl";
const NAV_WIDTH: u16 = 34;
const STACK_BELOW_WIDTH: u16 = 80;
const COMPACT_FOOTER_BELOW_WIDTH: u16 = 100;
const TOAST_TTL: Duration = Duration::from_secs(2);

include!("chrome.rs");

/// Runs the interactive terminal UI for `guide`.
pub fn run(guide: Guide, policy: SelectionPolicy) -> Result<(), Box<dyn Error>> {
    run_with_ui_state(guide, policy, None)
}

/// Runs the TUI while sharing selection state with a programmatic client.
pub fn run_with_ui_state(
    guide: Guide,
    policy: SelectionPolicy,
    ui_state: Option<Arc<Mutex<UiState>>>,
) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut app = App::new(guide, policy)?;
    app.theme = theme;
    app.ui_state = ui_state;
    app.publish_to_ui_state();

    let mut terminal = TerminalSession::new()?;
    while !app.should_quit {
        app.sync_from_ui_state();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if let Some(text) = app.take_pending_yank() {
            match copy_to_clipboard(&text) {
                Ok(backend) => app.set_toast(format!("Yanked code snippets ({backend})")),
                Err(err) => app.set_toast(format!("Clipboard error: {err}")),
            }
        }
    }

    tracing::debug!("tui exited");
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height(app.guide.meta())),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let (header_area, main_area, footer_area) = (layout[0], layout[1], layout[2]);

    let header = Paragraph::new(Text::from(header_lines(app.guide.meta(), &app.theme)))
        .block(Block::default().borders(Borders::BOTTOM).border_style(app.theme.muted_style()));
    frame.render_widget(header, header_area);

    let (nav_area, content_area) = if stack_nav_vertically(main_area) {
        let nav_height =
            cell_count(app.navigator.sections().len()).saturating_add(2).min(main_area.height / 2);
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(nav_height), Constraint::Min(0)])
            .split(main_area);
        (split[0], split[1])
    } else {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(NAV_WIDTH), Constraint::Min(0)])
            .split(main_area);
        (split[0], split[1])
    };

    render_nav(frame, app, nav_area);
    render_content(frame, app, content_area);
    render_footer(frame, app, footer_area);

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

fn render_nav(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    app.nav_area = Some(area);
    let items = app.navigator.nav_items();
    let labels = app.hint_labels_by_index(items.len());
    let list_items = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let line = nav_item_line(item, idx, labels.get(idx).map(String::as_str), &app.theme);
            let item_widget = ListItem::new(line);
            if item.active {
                item_widget.style(app.theme.active_nav_style())
            } else {
                item_widget
            }
        })
        .collect::<Vec<_>>();

    let counter = section_counter_label(active_index(&items), items.len());
    let focused = app.focus == Focus::Nav;
    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Sections", 's', Some(&counter)))
                .border_style(app.theme.panel_border_style(focused)),
        )
        .highlight_style(if focused { app.theme.cursor_style() } else { Style::default() });
    frame.render_stateful_widget(list, area, &mut app.nav_state);
}

fn render_content(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let inner_width = usize::from(area.width.saturating_sub(2)).max(1);
    let viewport_height = area.height.saturating_sub(2);
    app.content_viewport_height = viewport_height;

    let panel = app.navigator.active_panel();
    let lines: Vec<PanelLine> =
        panel.as_ref().map(|panel| render_panel_lines(panel, Some(inner_width))).unwrap_or_default();

    if let Some(source) = app.pending_scroll_source.take() {
        if let Some(display) = display_line_for_source(&lines, source) {
            let centered = display.saturating_sub(usize::from(viewport_height) / 3);
            app.content_scroll = u16::try_from(centered).unwrap_or(u16::MAX);
        }
    }
    let max_scroll = lines.len().saturating_sub(usize::from(viewport_height));
    app.content_scroll = app.content_scroll.min(u16::try_from(max_scroll).unwrap_or(u16::MAX));
    app.content_line_count = lines.len();

    let highlighted_source = app.highlighted_hit_line();
    let text = Text::from(
        lines
            .iter()
            .map(|line| content_line(line, highlighted_source == Some(line.source), &app.theme))
            .collect::<Vec<_>>(),
    );

    let tail = app.navigator.active_section().map(|section| section.title().to_owned());
    let focused = app.focus == Focus::Content;
    let content = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Content", 'c', tail.as_deref()))
                .border_style(app.theme.panel_border_style(focused)),
        )
        .scroll((app.content_scroll, 0));
    frame.render_widget(content, area);
}

fn render_footer(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    if app.toast.as_ref().is_some_and(|toast| toast.expires_at <= Instant::now()) {
        app.toast = None;
    }
    let toast_suffix =
        app.toast.as_ref().map(|toast| format!(" | {}", toast.message)).unwrap_or_default();

    let compact = area.width < COMPACT_FOOTER_BELOW_WIDTH;
    let left = match app.prompt {
        PromptMode::Editing(kind) => prompt_footer_line(app, kind, &toast_suffix),
        PromptMode::Results => results_footer_line(app, &toast_suffix),
        PromptMode::Inactive => footer_help_line(app, &toast_suffix, compact),
    };
    let brand = footer_brand_line(app.guide.meta(), &app.theme);
    let brand_width = cell_count(brand.width()).min(area.width / 2);

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(brand_width)])
        .split(area);
    frame.render_widget(Paragraph::new(left), split[0]);
    frame.render_widget(Paragraph::new(brand).alignment(Alignment::Right), split[1]);

    if let PromptMode::Editing(_) = app.prompt {
        let typed = cell_count(app.prompt_query.chars().count());
        let x = area.x.saturating_add(1).saturating_add(typed);
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), area.y));
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    Search,
    Jump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptMode {
    Inactive,
    Editing(PromptKind),
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HintMode {
    Inactive,
    Active { typed: String, labels: Vec<String> },
}

struct App {
    guide: Guide,
    navigator: Navigator,
    theme: TuiTheme,
    focus: Focus,
    nav_state: ListState,
    nav_area: Option<Rect>,
    content_scroll: u16,
    content_line_count: usize,
    content_viewport_height: u16,
    pending_scroll_source: Option<usize>,
    prompt: PromptMode,
    prompt_query: String,
    search_hits: Vec<SearchHit>,
    search_hit_index: usize,
    hint_mode: HintMode,
    show_help: bool,
    help_scroll: u16,
    toast: Option<Toast>,
    ui_state: Option<Arc<Mutex<UiState>>>,
    last_agent_rev: Option<u64>,
    follow_ai: bool,
    pending_yank: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(guide: Guide, policy: SelectionPolicy) -> Result<Self, SelectionError> {
        let navigator = guide.navigator(policy)?;
        let mut nav_state = ListState::default();
        if !navigator.sections().is_empty() {
            let active = navigator.registry().position(navigator.current_id().as_str());
            nav_state.select(Some(active.unwrap_or(0)));
        }

        Ok(Self {
            guide,
            navigator,
            theme: TuiTheme::default(),
            focus: Focus::Nav,
            nav_state,
            nav_area: None,
            content_scroll: 0,
            content_line_count: 0,
            content_viewport_height: 0,
            pending_scroll_source: None,
            prompt: PromptMode::Inactive,
            prompt_query: String::new(),
            search_hits: Vec::new(),
            search_hit_index: 0,
            hint_mode: HintMode::Inactive,
            show_help: false,
            help_scroll: 0,
            toast: None,
            ui_state: None,
            last_agent_rev: None,
            follow_ai: true,
            pending_yank: None,
            should_quit: false,
        })
    }

    /// Selects `id` and brings the sidebar cursor along when the id is registered.
    fn select(&mut self, id: SectionId) -> bool {
        let previous = self.navigator.current_id().clone();
        match self.navigator.select_section(id) {
            Ok(current) => {
                let current = current.clone();
                if current != previous {
                    self.content_scroll = 0;
                }
                if let Some(index) = self.navigator.registry().position(current.as_str()) {
                    self.nav_state.select(Some(index));
                }
                self.publish_to_ui_state();
                true
            }
            Err(err) => {
                self.set_toast(err.to_string());
                false
            }
        }
    }

    fn select_index(&mut self, index: usize) -> bool {
        let Some(id) = self.navigator.sections().get(index).map(|section| section.id().clone())
        else {
            return false;
        };
        self.select(id)
    }

    fn activate_cursor(&mut self) {
        if let Some(index) = self.nav_state.selected() {
            self.select_index(index);
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.navigator.sections().len();
        if len == 0 {
            return;
        }
        let current = self.nav_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.nav_state.select(Some(next));
    }

    fn scroll_content(&mut self, delta: i32) {
        let next = i32::from(self.content_scroll) + delta;
        let max_scroll = self.content_line_count.saturating_sub(usize::from(self.content_viewport_height));
        let max_scroll = i32::try_from(max_scroll).unwrap_or(i32::MAX);
        self.content_scroll = u16::try_from(next.clamp(0, max_scroll)).unwrap_or(u16::MAX);
    }

    fn page_size(&self) -> i32 {
        i32::from(self.content_viewport_height.max(2) - 1)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Applies one key press; returns true when the app should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Char('q') => return true,
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Down | KeyCode::Char('j') => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                _ => {}
            }
            return false;
        }

        if matches!(self.hint_mode, HintMode::Active { .. }) {
            self.handle_hint_key(code);
            return false;
        }

        if let PromptMode::Editing(kind) = self.prompt {
            self.handle_prompt_key(kind, code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Esc => self.clear_search(),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Left | KeyCode::Char('h') => self.focus = Focus::Nav,
            KeyCode::Right | KeyCode::Char('l') => self.focus = Focus::Content,
            KeyCode::Down | KeyCode::Char('j') => match self.focus {
                Focus::Nav => self.move_cursor(1),
                Focus::Content => self.scroll_content(1),
            },
            KeyCode::Up | KeyCode::Char('k') => match self.focus {
                Focus::Nav => self.move_cursor(-1),
                Focus::Content => self.scroll_content(-1),
            },
            KeyCode::PageDown => self.scroll_content(self.page_size()),
            KeyCode::PageUp => self.scroll_content(-self.page_size()),
            KeyCode::Home | KeyCode::Char('g') => match self.focus {
                Focus::Nav => self.move_cursor(isize::MIN),
                Focus::Content => self.content_scroll = 0,
            },
            KeyCode::End | KeyCode::Char('G') => match self.focus {
                Focus::Nav => self.move_cursor(isize::MAX),
                Focus::Content => self.scroll_content(i32::MAX / 2),
            },
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cursor(),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                self.select_index(index);
            }
            KeyCode::Char('f') => self.enter_hint_mode(),
            KeyCode::Char('/') => self.start_prompt(PromptKind::Search),
            KeyCode::Char('\\') => self.start_prompt(PromptKind::Jump),
            KeyCode::Char('n') => self.step_search_hit(1),
            KeyCode::Char('N') => self.step_search_hit(-1),
            KeyCode::Char('y') => self.yank_active_code(),
            KeyCode::Char('a') => self.toggle_follow_ai(),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.nav_index_at(mouse.column, mouse.row) {
                    self.focus = Focus::Nav;
                    self.nav_state.select(Some(index));
                    self.select_index(index);
                }
            }
            MouseEventKind::ScrollDown => self.scroll_content(3),
            MouseEventKind::ScrollUp => self.scroll_content(-3),
            _ => {}
        }
    }

    /// Maps a terminal cell to the nav row drawn there during the last frame.
    fn nav_index_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.nav_area?;
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = usize::from(row - inner.y) + self.nav_state.offset();
        (index < self.navigator.sections().len()).then_some(index)
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.cancel_hint_mode();
            self.help_scroll = 0;
        }
    }

    fn toggle_follow_ai(&mut self) {
        self.follow_ai = !self.follow_ai;
        self.publish_to_ui_state();
        self.set_toast(if self.follow_ai { "Follow AI enabled" } else { "Follow AI disabled" });
    }

    fn hint_labels_by_index(&self, count: usize) -> Vec<String> {
        match &self.hint_mode {
            HintMode::Active { labels, .. } => labels.iter().take(count).cloned().collect(),
            HintMode::Inactive => Vec::new(),
        }
    }

    fn enter_hint_mode(&mut self) {
        let count = self.navigator.sections().len();
        if count == 0 {
            self.set_toast("No sections");
            return;
        }
        self.hint_mode = HintMode::Active { typed: String::new(), labels: hint_labels(count) };
    }

    fn cancel_hint_mode(&mut self) {
        self.hint_mode = HintMode::Inactive;
    }

    fn handle_hint_key(&mut self, code: KeyCode) {
        let HintMode::Active { typed, labels } = &mut self.hint_mode else {
            return;
        };
        match code {
            KeyCode::Esc => {
                self.hint_mode = HintMode::Inactive;
                return;
            }
            KeyCode::Backspace => {
                typed.pop();
                return;
            }
            KeyCode::Char(ch) => typed.push(ch.to_ascii_lowercase()),
            _ => return,
        }

        let exact = labels.iter().position(|label| label.as_str() == typed.as_str());
        let viable = labels.iter().any(|label| label.starts_with(typed.as_str()));
        match exact {
            Some(index) => {
                self.hint_mode = HintMode::Inactive;
                self.select_index(index);
            }
            None if !viable => {
                self.hint_mode = HintMode::Inactive;
                self.set_toast("No such hint");
            }
            None => {}
        }
    }

    fn start_prompt(&mut self, kind: PromptKind) {
        self.prompt = PromptMode::Editing(kind);
        self.prompt_query.clear();
        self.search_hits.clear();
        self.search_hit_index = 0;
    }

    fn handle_prompt_key(&mut self, kind: PromptKind, code: KeyCode) {
        match code {
            KeyCode::Esc => self.clear_search(),
            KeyCode::Backspace => {
                self.prompt_query.pop();
            }
            KeyCode::Enter => match kind {
                PromptKind::Search => self.submit_search(),
                PromptKind::Jump => self.submit_jump(),
            },
            KeyCode::Char(ch) => self.prompt_query.push(ch),
            _ => {}
        }
    }

    fn clear_search(&mut self) {
        self.prompt = PromptMode::Inactive;
        self.prompt_query.clear();
        self.search_hits.clear();
        self.search_hit_index = 0;
    }

    fn submit_search(&mut self) {
        if self.prompt_query.trim().is_empty() {
            self.clear_search();
            return;
        }
        let hits = match search_guide(&self.guide, &self.prompt_query, SearchMode::Substring, true)
        {
            Ok(hits) => hits,
            Err(err) => {
                self.set_toast(format!("Search failed: {err}"));
                self.clear_search();
                return;
            }
        };
        if hits.is_empty() {
            self.set_toast(format!("No matches for {}", self.prompt_query));
            self.clear_search();
            return;
        }
        self.search_hits = hits;
        self.search_hit_index = 0;
        self.prompt = PromptMode::Results;
        self.goto_search_hit();
    }

    fn submit_jump(&mut self) {
        let query = std::mem::take(&mut self.prompt_query);
        self.prompt = PromptMode::Inactive;
        if query.trim().is_empty() {
            return;
        }
        match ranked_sections(self.navigator.registry(), &query, JumpKind::Fuzzy).into_iter().next()
        {
            Some(id) => {
                self.select(id);
            }
            None => self.set_toast(format!("No section matches {query}")),
        }
    }

    fn step_search_hit(&mut self, delta: isize) {
        if self.prompt != PromptMode::Results || self.search_hits.is_empty() {
            return;
        }
        let len = self.search_hits.len() as isize;
        let next = (self.search_hit_index as isize + delta).rem_euclid(len);
        self.search_hit_index = next as usize;
        self.goto_search_hit();
    }

    fn goto_search_hit(&mut self) {
        let Some(hit) = self.search_hits.get(self.search_hit_index).cloned() else {
            return;
        };
        if self.navigator.current_id() != &hit.section_id {
            self.select(hit.section_id.clone());
        }
        self.focus = Focus::Content;
        self.pending_scroll_source = Some(hit.line);
    }

    /// The logical panel line of the current search hit, when it belongs to the shown section.
    fn highlighted_hit_line(&self) -> Option<usize> {
        if self.prompt != PromptMode::Results {
            return None;
        }
        let hit = self.search_hits.get(self.search_hit_index)?;
        (hit.section_id == *self.navigator.current_id()).then_some(hit.line)
    }

    fn yank_active_code(&mut self) {
        let Some(panel) = self.navigator.active_panel() else {
            self.set_toast("No content to yank");
            return;
        };
        let snippets = panel.code_snippets();
        if snippets.is_empty() {
            self.set_toast("No code snippets in this section");
            return;
        }
        self.pending_yank = Some(snippets.join("\n\n"));
    }

    fn take_pending_yank(&mut self) -> Option<String> {
        self.pending_yank.take()
    }

    fn publish_to_ui_state(&mut self) {
        let Some(ui_state) = self.ui_state.as_ref() else {
            return;
        };
        let mut ui_state = ui_state.blocking_lock();
        ui_state.set_follow_ai(self.follow_ai);
        ui_state.set_human_active_section(self.navigator.current_id().clone());
    }

    /// Pulls follow-AI and pending agent selections posted by programmatic clients.
    fn sync_from_ui_state(&mut self) {
        let Some(ui_state) = self.ui_state.as_ref() else {
            return;
        };
        let (follow_ai, request) = {
            let ui_state = ui_state.blocking_lock();
            (ui_state.follow_ai(), ui_state.agent_request().cloned())
        };
        self.follow_ai = follow_ai;

        let Some(request) = request else {
            return;
        };
        if self.last_agent_rev == Some(request.rev) {
            return;
        }
        self.last_agent_rev = Some(request.rev);
        if !self.follow_ai {
            return;
        }
        tracing::debug!(section_id = %request.section_id, "applying agent selection");
        if self.select(request.section_id.clone()) {
            self.set_toast(format!("Agent opened {}", request.section_id));
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_TTL });
    }
}

/// Labels for `count` nav rows, all of one length so no label is a prefix of another.
/// `count` labels of one shared length, so no label is a prefix of another.
fn hint_labels(count: usize) -> Vec<String> {
    let alphabet = HINT_CHARS.chars().count();
    // Labels shorter than the chosen length come first in `gen_labels` order; skip them.
    let mut shorter = 0usize;
    let mut capacity = alphabet;
    while capacity < count {
        shorter += capacity;
        capacity = capacity.saturating_mul(alphabet);
    }
    hints::gen_labels(shorter + count, HINT_CHARS).split_off(shorter)
}

fn cell_count(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

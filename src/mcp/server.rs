// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::{Mutex, MutexGuard};

use crate::guide::Guide;
use crate::model::SectionId;
use crate::query::search_guide;
use crate::render::render_panel_text;
use crate::router::{Navigator, SelectionError, SelectionPolicy};
use crate::ui::UiState;

use super::types::*;

#[derive(Debug)]
struct McpState {
    guide: Guide,
    navigator: Navigator,
    // Last human selection adopted from the attached UI.
    adopted_human_section: Option<SectionId>,
}

#[derive(Clone)]
pub struct DocdeckMcp {
    state: Arc<Mutex<McpState>>,
    ui_state: Option<Arc<Mutex<UiState>>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DocdeckMcp {
    pub fn new(guide: Guide, policy: SelectionPolicy) -> Result<Self, SelectionError> {
        Self::new_with_ui_state(guide, policy, None)
    }

    pub fn new_with_ui_state(
        guide: Guide,
        policy: SelectionPolicy,
        ui_state: Option<Arc<Mutex<UiState>>>,
    ) -> Result<Self, SelectionError> {
        let navigator = guide.navigator(policy)?;
        Ok(Self {
            state: Arc::new(Mutex::new(McpState { guide, navigator, adopted_human_section: None })),
            ui_state,
            tool_router: Self::tool_router(),
        })
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    /// Locks the server state after adopting any new human selection from the attached UI, so
    /// reads report the section the terminal shows.
    async fn lock_state_synced(&self) -> MutexGuard<'_, McpState> {
        let human = match self.ui_state.as_ref() {
            Some(ui_state) => ui_state.lock().await.human_active_section().cloned(),
            None => None,
        };
        let mut state = self.state.lock().await;
        let Some(human) = human else {
            return state;
        };
        if state.adopted_human_section.as_ref() == Some(&human) {
            return state;
        }
        state.adopted_human_section = Some(human.clone());
        if state.navigator.current_id() != &human {
            if let Err(err) = state.navigator.select_section(human) {
                tracing::warn!(error = %err, "ui selection not adopted");
            }
        }
        state
    }

    async fn follow_ai_enabled(&self) -> Option<bool> {
        match self.ui_state.as_ref() {
            Some(ui_state) => Some(ui_state.lock().await.follow_ai()),
            None => None,
        }
    }

    async fn read_context(&self, current_section_id: String) -> ReadContext {
        let mut context = ReadContext {
            current_section_id,
            human_active_section: None,
            follow_ai: None,
            ui_rev: None,
        };

        if let Some(ui_state) = self.ui_state.as_ref() {
            let snapshot = ui_state.lock().await.clone();
            context.human_active_section =
                snapshot.human_active_section().map(|id| id.as_str().to_owned());
            context.follow_ai = Some(snapshot.follow_ai());
            context.ui_rev = Some(snapshot.rev());
        }

        context
    }

    /// Guide title, footer, default section, and selection policy.
    #[tool(name = "guide.meta")]
    async fn guide_meta(&self) -> Result<Json<GuideMetaResponse>, ErrorData> {
        let state = self.lock_state_synced().await;
        let meta = state.guide.meta();
        Ok(Json(GuideMetaResponse {
            title: meta.title.clone(),
            subtitle: meta.subtitle.clone(),
            footer: meta.footer.clone(),
            default_section_id: state.guide.default_section().as_str().to_owned(),
            policy: state.navigator.policy().as_str().to_owned(),
        }))
    }

    /// List sections in display order with their active flag; start here, then call
    /// `section.select` or `panel.read`.
    #[tool(name = "section.list")]
    async fn section_list(&self) -> Result<Json<ListSectionsResponse>, ErrorData> {
        let state = self.lock_state_synced().await;
        let sections = state
            .navigator
            .nav_items()
            .into_iter()
            .map(|item| SectionSummary {
                has_panel: state.guide.router().has_panel(item.id.as_str()),
                section_id: item.id.as_str().to_owned(),
                title: item.title,
                active: item.active,
            })
            .collect::<Vec<_>>();
        let current = state.navigator.current_id().as_str().to_owned();
        drop(state);
        let context = self.read_context(current).await;

        Ok(Json(ListSectionsResponse { sections, context }))
    }

    /// Read the current section id. The id may be unregistered when a permissive selection
    /// named an unknown section.
    #[tool(name = "section.current")]
    async fn section_current(&self) -> Result<Json<CurrentSectionResponse>, ErrorData> {
        let state = self.lock_state_synced().await;
        let section_id = state.navigator.current_id().as_str().to_owned();
        let title = state.navigator.active_section().map(|section| section.title().to_owned());
        let panel_found = state.guide.router().has_panel(&section_id);
        drop(state);
        let context = self.read_context(section_id.clone()).await;

        Ok(Json(CurrentSectionResponse { section_id, title, panel_found, context }))
    }

    /// Make `section_id` the current section and ask an attached UI to show it. While an
    /// attached UI has follow-AI off the current section stays put and `applied` is false.
    #[tool(name = "section.select")]
    async fn section_select(
        &self,
        params: Parameters<SectionSelectParams>,
    ) -> Result<Json<SectionSelectResponse>, ErrorData> {
        let SectionSelectParams { section_id } = params.0;
        let invalid = |err: SelectionError| {
            ErrorData::invalid_params(
                err.to_string(),
                Some(serde_json::json!({ "section_id": section_id })),
            )
        };
        let applied = self.follow_ai_enabled().await.unwrap_or(true);

        let mut state = self.lock_state_synced().await;
        let requested = SectionId::from(section_id.as_str());
        if !applied {
            let registered = state.guide.registry().contains(requested.as_str());
            if state.navigator.policy() == SelectionPolicy::Strict && !registered {
                return Err(invalid(SelectionError::InvalidSelection { id: requested }));
            }
            let panel_found = state.guide.router().has_panel(requested.as_str());
            drop(state);
            tracing::debug!(section_id = %requested, "mcp selection held while follow-ai is off");
            return Ok(Json(SectionSelectResponse {
                section_id: requested.as_str().to_owned(),
                registered,
                panel_found,
                applied,
                ui_request_rev: None,
            }));
        }

        let selected = state.navigator.select_section(requested).map_err(invalid)?.clone();
        let registered = state.navigator.active_section().is_some();
        let panel_found = state.guide.router().has_panel(selected.as_str());
        drop(state);

        let ui_request_rev = match self.ui_state.as_ref() {
            Some(ui_state) => Some(ui_state.lock().await.request_selection(selected.clone())),
            None => None,
        };
        tracing::debug!(section_id = %selected, registered, panel_found, "mcp selection");

        Ok(Json(SectionSelectResponse {
            section_id: selected.as_str().to_owned(),
            registered,
            panel_found,
            applied,
            ui_request_rev,
        }))
    }

    /// Read the structured panel for a section (the current one by default).
    #[tool(name = "panel.read")]
    async fn panel_read(
        &self,
        params: Parameters<PanelReadParams>,
    ) -> Result<Json<PanelReadResponse>, ErrorData> {
        let state = self.lock_state_synced().await;
        let section_id = resolve_section_id(&state.navigator, params.0.section_id);
        let panel = state.navigator.panel_for(section_id.as_str()).as_ref().map(McpPanel::from);
        let current = state.navigator.current_id().as_str().to_owned();
        drop(state);
        let context = self.read_context(current).await;

        Ok(Json(PanelReadResponse { section_id: section_id.as_str().to_owned(), panel, context }))
    }

    /// Render a panel to plain text as the terminal view shows it; empty when no panel routes.
    #[tool(name = "panel.render_text")]
    async fn panel_render_text(
        &self,
        params: Parameters<PanelRenderTextParams>,
    ) -> Result<Json<PanelRenderTextResponse>, ErrorData> {
        let PanelRenderTextParams { section_id, width } = params.0;
        if width == Some(0) {
            return Err(ErrorData::invalid_params("width must be greater than zero", None));
        }

        let state = self.lock_state_synced().await;
        let section_id = resolve_section_id(&state.navigator, section_id);
        let panel = state.navigator.panel_for(section_id.as_str());
        let text = render_panel_text(panel.as_ref(), width.map(usize::from));

        Ok(Json(PanelRenderTextResponse {
            section_id: section_id.as_str().to_owned(),
            panel_found: panel.is_some(),
            text,
        }))
    }

    /// Search every panel's rendered lines, in section order.
    #[tool(name = "guide.search")]
    async fn guide_search(
        &self,
        params: Parameters<GuideSearchParams>,
    ) -> Result<Json<GuideSearchResponse>, ErrorData> {
        let GuideSearchParams { needle, mode, case_sensitive, limit } = params.0;
        if needle.is_empty() {
            return Err(ErrorData::invalid_params("needle must not be empty", None));
        }

        let state = self.state.lock().await;
        let hits = search_guide(
            &state.guide,
            &needle,
            mode.unwrap_or_default().into(),
            !case_sensitive.unwrap_or(false),
        )
        .map_err(|err| {
            ErrorData::invalid_params(
                format!("invalid regex: {err}"),
                Some(serde_json::json!({ "needle": needle })),
            )
        })?;
        drop(state);

        let limit = limit.map(|limit| limit as usize).unwrap_or(usize::MAX);
        let truncated = hits.len() > limit;
        let hits = hits.into_iter().take(limit).map(McpSearchHit::from).collect();

        Ok(Json(GuideSearchResponse { hits, truncated }))
    }

    /// Read whether the interactive UI applies `section.select` requests.
    #[tool(name = "follow_ai.read")]
    async fn follow_ai_read(&self) -> Result<Json<FollowAiReadResponse>, ErrorData> {
        let current = self.lock_state_synced().await.navigator.current_id().as_str().to_owned();
        let context = self.read_context(current).await;
        let enabled = context.follow_ai.unwrap_or(true);
        Ok(Json(FollowAiReadResponse { enabled, context }))
    }

    /// Turn follow-AI on or off for an attached interactive UI.
    #[tool(name = "follow_ai.set")]
    async fn follow_ai_set(
        &self,
        params: Parameters<FollowAiSetParams>,
    ) -> Result<Json<FollowAiSetResponse>, ErrorData> {
        let FollowAiSetParams { enabled } = params.0;
        if let Some(ui_state) = self.ui_state.as_ref() {
            ui_state.lock().await.set_follow_ai(enabled);
        }
        Ok(Json(FollowAiSetResponse { enabled }))
    }
}

#[tool_handler]
impl ServerHandler for DocdeckMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Docdeck guide navigation server (tools: guide.meta, section.list, section.current, section.select, panel.read, panel.render_text, guide.search, follow_ai.read, follow_ai.set)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn resolve_section_id(navigator: &Navigator, section_id: Option<String>) -> SectionId {
    section_id.map(SectionId::from).unwrap_or_else(|| navigator.current_id().clone())
}

#[cfg(test)]
mod tests;

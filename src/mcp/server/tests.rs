// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::*;
use crate::guide::{utils_guide, GuideMeta};
use crate::model::{Feature, Panel, Section, SectionRegistry};
use crate::router::{ContentRouter, PanelSource};

fn two_section_guide() -> Guide {
    let registry = SectionRegistry::new(vec![
        Section::new("introduction", "Introduction"),
        Section::new("account", "Account Management"),
    ])
    .expect("registry");
    let router = ContentRouter::new()
        .with_panel(
            "introduction",
            PanelSource::Static(Panel::new("Introduction").with_intro("Welcome.")),
        )
        .with_panel(
            "account",
            PanelSource::Static(
                Panel::new("Account Management")
                    .with_feature(Feature::new("Creating Accounts").code("account.random()")),
            ),
        );
    let meta = GuideMeta { title: "Test Guide".to_owned(), ..GuideMeta::default() };
    Guide::new(meta, registry, router, "introduction")
}

fn server(policy: SelectionPolicy) -> DocdeckMcp {
    DocdeckMcp::new(two_section_guide(), policy).expect("server")
}

fn expect_error<T>(result: Result<T, ErrorData>, what: &str) -> ErrorData {
    match result {
        Ok(_) => panic!("expected {what} error"),
        Err(err) => err,
    }
}

fn select_params(section_id: &str) -> Parameters<SectionSelectParams> {
    Parameters(SectionSelectParams { section_id: section_id.to_owned() })
}

#[tokio::test]
async fn section_list_reports_registry_order_and_default_active() {
    let server = server(SelectionPolicy::Permissive);
    let Json(list) = server.section_list().await.expect("section.list");

    let ids = list.sections.iter().map(|s| s.section_id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["introduction", "account"]);
    assert_eq!(list.sections[1].title, "Account Management");
    assert!(list.sections[0].active);
    assert!(!list.sections[1].active);
    assert!(list.sections.iter().all(|s| s.has_panel));
    assert_eq!(list.context.current_section_id, "introduction");
    assert_eq!(list.context.follow_ai, None);
}

#[tokio::test]
async fn selecting_account_switches_current_and_panel() {
    let server = server(SelectionPolicy::Permissive);
    let Json(selected) = server.section_select(select_params("account")).await.expect("select");
    assert_eq!(selected.section_id, "account");
    assert!(selected.registered);
    assert!(selected.panel_found);
    assert_eq!(selected.ui_request_rev, None);

    let Json(current) = server.section_current().await.expect("section.current");
    assert_eq!(current.section_id, "account");
    assert_eq!(current.title.as_deref(), Some("Account Management"));

    let Json(panel) =
        server.panel_read(Parameters(PanelReadParams { section_id: None })).await.expect("read");
    assert_eq!(panel.panel.expect("panel").heading, "Account Management");

    let Json(list) = server.section_list().await.expect("section.list");
    let active = list.sections.iter().filter(|s| s.active).collect::<Vec<_>>();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].section_id, "account");
}

#[tokio::test]
async fn permissive_select_of_unknown_id_yields_empty_panel() {
    let server = server(SelectionPolicy::Permissive);
    let Json(selected) =
        server.section_select(select_params("nonexistent-id")).await.expect("select");
    assert_eq!(selected.section_id, "nonexistent-id");
    assert!(!selected.registered);
    assert!(!selected.panel_found);

    let Json(current) = server.section_current().await.expect("section.current");
    assert_eq!(current.section_id, "nonexistent-id");
    assert_eq!(current.title, None);

    let Json(text) = server
        .panel_render_text(Parameters(PanelRenderTextParams { section_id: None, width: None }))
        .await
        .expect("render");
    assert!(!text.panel_found);
    assert_eq!(text.text, "");

    let Json(list) = server.section_list().await.expect("section.list");
    assert!(list.sections.iter().all(|s| !s.active));
}

#[tokio::test]
async fn strict_select_of_unknown_id_is_invalid_params_and_keeps_state() {
    let server = server(SelectionPolicy::Strict);
    let err = expect_error(server.section_select(select_params("nonexistent-id")).await, "strict");
    assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("nonexistent-id"));

    let Json(current) = server.section_current().await.expect("section.current");
    assert_eq!(current.section_id, "introduction");

    let Json(meta) = server.guide_meta().await.expect("guide.meta");
    assert_eq!(meta.policy, "strict");
}

#[tokio::test]
async fn reselecting_the_same_section_is_idempotent() {
    let server = server(SelectionPolicy::Permissive);
    let Json(first) = server.section_select(select_params("account")).await.expect("first");
    let Json(second) = server.section_select(select_params("account")).await.expect("second");
    assert_eq!(first.section_id, second.section_id);
    assert_eq!(first.panel_found, second.panel_found);
}

#[tokio::test]
async fn panel_read_accepts_explicit_section_without_selecting_it() {
    let server = server(SelectionPolicy::Permissive);
    let Json(panel) = server
        .panel_read(Parameters(PanelReadParams { section_id: Some("account".to_owned()) }))
        .await
        .expect("read");
    assert_eq!(panel.section_id, "account");
    let panel = panel.panel.expect("panel");
    assert!(matches!(
        panel.features[0].blocks.as_slice(),
        [McpBlock::Code { code, language: None }] if code == "account.random()"
    ));

    let Json(current) = server.section_current().await.expect("section.current");
    assert_eq!(current.section_id, "introduction");
}

#[tokio::test]
async fn render_text_wraps_and_rejects_zero_width() {
    let server = DocdeckMcp::new(utils_guide(), SelectionPolicy::Permissive).expect("server");
    let Json(text) = server
        .panel_render_text(Parameters(PanelRenderTextParams {
            section_id: Some("introduction".to_owned()),
            width: Some(40),
        }))
        .await
        .expect("render");
    assert!(text.panel_found);
    assert!(text.text.starts_with("Introduction to AlgoKit Utils\n"));
    let Json(unwrapped) = server
        .panel_render_text(Parameters(PanelRenderTextParams {
            section_id: Some("introduction".to_owned()),
            width: None,
        }))
        .await
        .expect("render unwrapped");
    assert!(text.text.lines().count() > unwrapped.text.lines().count());

    let err = expect_error(
        server
            .panel_render_text(Parameters(PanelRenderTextParams { section_id: None, width: Some(0) }))
            .await,
        "zero width",
    );
    assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn guide_search_supports_modes_and_limits() {
    let server = DocdeckMcp::new(utils_guide(), SelectionPolicy::Permissive).expect("server");
    let search = |needle: &str, mode, limit| GuideSearchParams {
        needle: needle.to_owned(),
        mode,
        case_sensitive: None,
        limit,
    };

    let Json(all) =
        server.guide_search(Parameters(search("ALGORAND", None, None))).await.expect("search");
    assert!(all.hits.len() > 1);
    assert!(!all.truncated);

    let Json(limited) =
        server.guide_search(Parameters(search("algorand", None, Some(1)))).await.expect("search");
    assert_eq!(limited.hits.len(), 1);
    assert!(limited.truncated);
    assert_eq!(limited.hits[0].section_id, all.hits[0].section_id);

    let Json(regex) = server
        .guide_search(Parameters(search(r"account\.random", Some(McpSearchMode::Regex), None)))
        .await
        .expect("regex search");
    assert!(regex.hits.iter().any(|hit| hit.section_id == "account"));

    let err = expect_error(
        server.guide_search(Parameters(search("(", Some(McpSearchMode::Regex), None))).await,
        "bad regex",
    );
    assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn follow_ai_defaults_without_ui_state() {
    let server = server(SelectionPolicy::Permissive);
    let Json(follow_ai) = server.follow_ai_read().await.expect("follow_ai.read");
    assert!(follow_ai.enabled);
    assert_eq!(follow_ai.context.ui_rev, None);
}

#[tokio::test]
async fn ui_state_receives_selection_requests_and_follow_ai() {
    let ui_state = Arc::new(Mutex::new(UiState::default()));
    ui_state.lock().await.set_human_active_section("introduction".into());
    let server = DocdeckMcp::new_with_ui_state(
        two_section_guide(),
        SelectionPolicy::Permissive,
        Some(ui_state.clone()),
    )
    .expect("server");

    let Json(selected) = server.section_select(select_params("account")).await.expect("select");
    let request = ui_state.lock().await.agent_request().cloned().expect("agent request");
    assert_eq!(request.section_id, "account");
    assert_eq!(selected.ui_request_rev, Some(request.rev));

    assert!(selected.applied);

    let Json(current) = server.section_current().await.expect("section.current");
    assert_eq!(current.section_id, "account");
    assert_eq!(current.context.human_active_section.as_deref(), Some("introduction"));

    let Json(set) =
        server.follow_ai_set(Parameters(FollowAiSetParams { enabled: false })).await.expect("set");
    assert!(!set.enabled);
    let Json(read) = server.follow_ai_read().await.expect("read");
    assert!(!read.enabled);
    assert_eq!(read.context.follow_ai, Some(false));
}

#[tokio::test]
async fn human_selection_becomes_the_current_section() {
    let ui_state = Arc::new(Mutex::new(UiState::default()));
    let server = DocdeckMcp::new_with_ui_state(
        two_section_guide(),
        SelectionPolicy::Permissive,
        Some(ui_state.clone()),
    )
    .expect("server");

    ui_state.lock().await.set_human_active_section("account".into());

    let Json(current) = server.section_current().await.expect("section.current");
    assert_eq!(current.section_id, "account");
    assert_eq!(current.title.as_deref(), Some("Account Management"));
    assert_eq!(current.context.current_section_id, "account");

    let Json(list) = server.section_list().await.expect("section.list");
    let active = list.sections.iter().filter(|s| s.active).map(|s| s.section_id.as_str());
    assert_eq!(active.collect::<Vec<_>>(), vec!["account"]);

    let Json(panel) =
        server.panel_read(Parameters(PanelReadParams { section_id: None })).await.expect("read");
    assert_eq!(panel.section_id, "account");
}

#[tokio::test]
async fn selection_is_held_while_follow_ai_is_off() {
    let ui_state = Arc::new(Mutex::new(UiState::default()));
    ui_state.lock().await.set_human_active_section("introduction".into());
    ui_state.lock().await.set_follow_ai(false);
    let server = DocdeckMcp::new_with_ui_state(
        two_section_guide(),
        SelectionPolicy::Strict,
        Some(ui_state.clone()),
    )
    .expect("server");

    let Json(selected) = server.section_select(select_params("account")).await.expect("select");
    assert!(!selected.applied);
    assert!(selected.registered);
    assert_eq!(selected.ui_request_rev, None);
    assert!(ui_state.lock().await.agent_request().is_none());

    let Json(current) = server.section_current().await.expect("section.current");
    assert_eq!(current.section_id, "introduction");

    let err = expect_error(server.section_select(select_params("ghost")).await, "strict select");
    assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
}

#[test]
fn server_info_lists_tools() {
    let info = server(SelectionPolicy::Permissive).get_info();
    let instructions = info.instructions.expect("instructions");
    for tool in ["section.list", "section.current", "section.select", "panel.read"] {
        assert!(instructions.contains(tool), "{tool}");
    }
    assert!(info.capabilities.tools.is_some());
}

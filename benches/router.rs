// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docdeck::guide::{utils_guide, Guide, GuideMeta};
use docdeck::model::{Bullet, Feature, Panel, Section, SectionRegistry};
use docdeck::query::{ranked_sections, search_guide, JumpKind, SearchMode};
use docdeck::render::render_panel_lines;
use docdeck::router::{ContentRouter, PanelSource, SelectionPolicy};

fn large_guide(sections: usize) -> Guide {
    let mut router = ContentRouter::new();
    let mut rows = Vec::with_capacity(sections);
    for idx in 0..sections {
        let id = format!("section-{idx:04}");
        let panel = Panel::new(format!("Section {idx}"))
            .with_intro("Each section carries a short lead paragraph that wraps a few times.")
            .with_feature(
                Feature::new("Usage")
                    .paragraph("Call the helper and inspect the returned value.")
                    .bullets([Bullet::labeled("input", "any id"), Bullet::plain("no side effects")])
                    .code_in("ts", format!("const value{idx} = helper({idx});")),
            );
        router.insert(id.as_str(), PanelSource::Static(panel));
        rows.push(Section::new(id.as_str(), format!("Topic number {idx}")));
    }
    let registry = SectionRegistry::new(rows).expect("registry");
    Guide::new(GuideMeta::default(), registry, router, "section-0000")
}

// Benchmark identity (keep stable):
// - Group names: `router.select`, `router.render`, `router.query`
fn benches_router(c: &mut Criterion) {
    let guide = large_guide(500);

    let mut group = c.benchmark_group("router.select");
    let mut navigator = guide.navigator(SelectionPolicy::Permissive).expect("navigator");
    group.bench_function("select_and_route_500", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            idx = (idx + 1) % 500;
            navigator.select_section(format!("section-{idx:04}")).expect("select");
            black_box(navigator.active_panel().is_some())
        })
    });
    let mut strict = guide.navigator(SelectionPolicy::Strict).expect("navigator");
    group.bench_function("strict_reject_500", |b| {
        b.iter(|| black_box(strict.select_section(black_box("nonexistent-id")).is_err()))
    });
    group.bench_function("nav_items_500", |b| {
        b.iter(|| black_box(navigator.nav_items().len()))
    });
    group.finish();

    let mut group = c.benchmark_group("router.render");
    let utils = utils_guide();
    let panel = utils.router().route("transaction").expect("transaction panel");
    group.bench_function("transaction_unwrapped", |b| {
        b.iter(|| black_box(render_panel_lines(black_box(&panel), None).len()))
    });
    group.bench_function("transaction_wrapped_60", |b| {
        b.iter(|| black_box(render_panel_lines(black_box(&panel), Some(60)).len()))
    });
    group.finish();

    let mut group = c.benchmark_group("router.query");
    group.bench_function("search_substring_500", |b| {
        b.iter(|| {
            let hits = search_guide(&guide, black_box("helper(42"), SearchMode::Substring, true)
                .expect("search");
            black_box(hits.len())
        })
    });
    group.bench_function("fuzzy_jump_500", |b| {
        b.iter(|| {
            black_box(ranked_sections(guide.registry(), black_box("tpc nmbr 42"), JumpKind::Fuzzy))
        })
    });
    group.finish();
}

criterion_group!(benches, benches_router);
criterion_main!(benches);

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Section, SectionId, SectionRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpKind {
    #[default]
    Regular,
    Fuzzy,
}

/// Lowercased match targets of one section.
struct Candidate {
    id: String,
    title: String,
}

impl Candidate {
    fn new(section: &Section) -> Self {
        Self {
            id: section.id().as_str().to_lowercase(),
            title: section.title().to_lowercase(),
        }
    }

    fn initials(&self) -> String {
        title_words(&self.title)
            .filter_map(|(_, word)| word.chars().next())
            .collect()
    }
}

/// Ranks sections against `query` by id and title, best first. Ties keep registry order.
pub fn ranked_sections(registry: &SectionRegistry, query: &str, kind: JumpKind) -> Vec<SectionId> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut scored = registry
        .iter()
        .enumerate()
        .filter_map(|(idx, section)| {
            let candidate = Candidate::new(section);
            let score = match kind {
                JumpKind::Regular => contiguous_score(&needle, &candidate),
                JumpKind::Fuzzy => fuzzy_score(&needle, &candidate),
            }?;
            Some((score, idx, section.id().clone()))
        })
        .collect::<Vec<_>>();

    scored.sort_by(|(score_a, idx_a, _), (score_b, idx_b, _)| {
        score_b.cmp(score_a).then_with(|| idx_a.cmp(idx_b))
    });
    scored.into_iter().map(|(_, _, id)| id).collect()
}

// Tiers: exact id, id prefix, title word prefix, title substring, id substring.
fn contiguous_score(needle: &str, candidate: &Candidate) -> Option<i64> {
    let id = candidate.id.as_str();
    let leftover = |len: usize| i64::try_from(len.saturating_sub(needle.len())).unwrap_or(i64::MAX);

    if id == needle {
        return Some(500_000);
    }
    if id.starts_with(needle) {
        return Some(400_000 - leftover(id.len()).min(9_999));
    }
    if let Some(word_idx) =
        title_words(&candidate.title).position(|(_, word)| word.starts_with(needle))
    {
        let word_idx = i64::try_from(word_idx).unwrap_or(i64::MAX).min(99);
        return Some(300_000 - word_idx * 1_000 - leftover(candidate.title.len()).min(999));
    }
    if let Some(pos) = candidate.title.find(needle) {
        return Some(200_000 - i64::try_from(pos).unwrap_or(i64::MAX).min(9_999));
    }
    id.find(needle)
        .map(|pos| 100_000 - i64::try_from(pos).unwrap_or(i64::MAX).min(9_999))
}

// Any contiguous hit outranks a title acronym, which outranks a scattered subsequence.
fn fuzzy_score(needle: &str, candidate: &Candidate) -> Option<i64> {
    if let Some(score) = contiguous_score(needle, candidate) {
        return Some(2_000_000 + score);
    }
    let initials = candidate.initials();
    if initials.len() > 1 && initials.starts_with(needle) {
        return Some(1_000_000 + similarity(needle, &initials));
    }

    [candidate.title.as_str(), candidate.id.as_str()]
        .into_iter()
        .filter_map(|field| {
            let runs = matched_runs(needle, field)?;
            let runs = i64::try_from(runs).unwrap_or(i64::MAX).min(99);
            Some(similarity(needle, field) - runs * 50)
        })
        .max()
}

fn similarity(needle: &str, field: &str) -> i64 {
    (rapidfuzz::fuzz::ratio(needle.chars(), field.chars()) * 1000.0).round() as i64
}

/// Number of contiguous runs `needle` splits into when matched greedily as a subsequence of
/// `field`, or `None` when it is not a subsequence.
fn matched_runs(needle: &str, field: &str) -> Option<usize> {
    let mut wanted = needle.chars().peekable();
    let mut runs = 0usize;
    let mut in_run = false;
    for ch in field.chars() {
        let Some(&want) = wanted.peek() else {
            break;
        };
        if ch == want {
            if !in_run {
                runs += 1;
            }
            in_run = true;
            wanted.next();
        } else {
            in_run = false;
        }
    }
    wanted.peek().is_none().then_some(runs)
}

fn title_words(title: &str) -> impl Iterator<Item = (usize, &str)> {
    title
        .split(|ch: char| ch.is_whitespace() || matches!(ch, '-' | '_' | '/' | ':'))
        .filter(|word| !word.is_empty())
        .enumerate()
}

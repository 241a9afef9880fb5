// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::fmt;

use super::ids::SectionId;

/// One documentation topic: a stable id plus the label shown in navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    title: String,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into() }
    }

    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Ordered, read-only list of sections. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(sections.len());
        for (index, section) in sections.iter().enumerate() {
            if section.id.is_empty() {
                return Err(RegistryError::EmptyId { index });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(RegistryError::DuplicateId { id: section.id.clone() });
            }
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == *id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == *id)
    }

    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    EmptyId { index: usize },
    DuplicateId { id: SectionId },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId { index } => write!(f, "section #{index} has an empty id"),
            Self::DuplicateId { id } => write!(f, "duplicate section id: {id}"),
        }
    }
}

impl std::error::Error for RegistryError {}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::guide::{Guide, GuideMeta};
use crate::model::{Panel, RegistryError, Section, SectionId, SectionRegistry};
use crate::router::{ContentRouter, PanelSource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideDocument {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    pub default_section: SectionId,
    pub sections: Vec<SectionDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDocument {
    pub id: SectionId,
    pub title: String,
    /// Sections without a panel are listed in navigation but route to empty content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<Panel>,
}

impl GuideDocument {
    pub fn into_guide(self) -> Result<Guide, RegistryError> {
        let mut sections = Vec::with_capacity(self.sections.len());
        let mut router = ContentRouter::new();
        for section in self.sections {
            if let Some(panel) = section.panel {
                router.insert(section.id.clone(), PanelSource::Static(panel));
            }
            sections.push(Section::new(section.id, section.title));
        }
        let registry = SectionRegistry::new(sections)?;
        let meta = GuideMeta { title: self.title, subtitle: self.subtitle, footer: self.footer };
        Ok(Guide::new(meta, registry, router, self.default_section))
    }

    pub fn from_guide(guide: &Guide) -> Self {
        let meta = guide.meta();
        Self {
            title: meta.title.clone(),
            subtitle: meta.subtitle.clone(),
            footer: meta.footer.clone(),
            default_section: guide.default_section().clone(),
            sections: guide
                .sections()
                .iter()
                .map(|section| SectionDocument {
                    id: section.id().clone(),
                    title: section.title().to_owned(),
                    panel: guide.router().route(section.id().as_str()),
                })
                .collect(),
        }
    }
}

/// A guide JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct GuideFile {
    path: PathBuf,
}

impl GuideFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Guide, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
        let guide = parse_guide(&raw).map_err(|err| err.at_path(&self.path))?;
        tracing::info!(
            path = %self.path.display(),
            sections = guide.sections().len(),
            "loaded guide"
        );
        Ok(guide)
    }

    pub fn save(&self, guide: &Guide) -> Result<(), StoreError> {
        let document = GuideDocument::from_guide(guide);
        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        json.push('\n');
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
        }
        fs::write(&self.path, json)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
        tracing::info!(path = %self.path.display(), "wrote guide");
        Ok(())
    }
}

/// Parses a guide document from JSON text.
pub fn parse_guide(raw: &str) -> Result<Guide, StoreError> {
    let document: GuideDocument = serde_json::from_str(raw)
        .map_err(|source| StoreError::Json { path: PathBuf::new(), source })?;
    document
        .into_guide()
        .map_err(|source| StoreError::Registry { path: PathBuf::new(), source })
}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    Registry { path: PathBuf, source: RegistryError },
}

impl StoreError {
    fn at_path(self, at: &Path) -> Self {
        match self {
            Self::Io { source, .. } => Self::Io { path: at.to_path_buf(), source },
            Self::Json { source, .. } => Self::Json { path: at.to_path_buf(), source },
            Self::Registry { source, .. } => Self::Registry { path: at.to_path_buf(), source },
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::Registry { path, source } => write!(f, "invalid guide at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Registry { source, .. } => Some(source),
        }
    }
}

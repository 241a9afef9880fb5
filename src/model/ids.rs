// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A section identifier as seen by the navigation layer.
///
/// Construction is infallible: selection accepts any token verbatim, including ids that no
/// registry knows about. Registries apply their own rules (non-empty, unique) when built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(SmolStr);

impl SectionId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(SmolStr::new(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        Self(SmolStr::from(value))
    }
}

impl From<&SectionId> for SectionId {
    fn from(value: &SectionId) -> Self {
        value.clone()
    }
}

impl FromStr for SectionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

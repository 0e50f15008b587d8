// lang.rs
// Localized names and flavor text.

use serde::Serialize;

use crate::api::{ApiDescription, ApiFlavorText, ApiGenus, ApiName};
use crate::error::{Error, Result};
use crate::names::api_enum;
use crate::version::{Version, VersionGroup};

api_enum! {
    pub enum Language("language") {
        JapaneseKana => "ja-Hrkt",
        Roomaji => "roomaji",
        Korean => "ko",
        ChineseTraditional => "zh-Hant",
        French => "fr",
        German => "de",
        Spanish => "es",
        Italian => "it",
        English => "en",
        Czech => "cs",
        Japanese => "ja",
        ChineseSimplified => "zh-Hans",
        BrazilianPortuguese => "pt-BR",
    }
}

pub trait Localized {
    fn language(&self) -> Language;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedName {
    language: Language,
    name: String,
}

impl LocalizedName {
    pub fn new(language: Language, name: impl Into<String>) -> Self {
        Self {
            language,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Localized for LocalizedName {
    fn language(&self) -> Language {
        self.language
    }
}

/// Whether a flavor list is keyed by game version or by version group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlavorScope {
    Version,
    VersionGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlavorContext {
    Version(Version),
    VersionGroup(VersionGroup),
}

/// Descriptive text in one language, tied to the game it appeared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flavor {
    language: Language,
    text: String,
    context: FlavorContext,
}

impl Flavor {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn context(&self) -> FlavorContext {
        self.context
    }

    pub fn version(&self) -> Option<Version> {
        match self.context {
            FlavorContext::Version(version) => Some(version),
            FlavorContext::VersionGroup(_) => None,
        }
    }

    pub fn version_group(&self) -> Option<VersionGroup> {
        match self.context {
            FlavorContext::VersionGroup(group) => Some(group),
            FlavorContext::Version(_) => None,
        }
    }
}

impl Localized for Flavor {
    fn language(&self) -> Language {
        self.language
    }
}

/// Entries in source order. Several entries may share a language; lookups
/// return the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalizedList<T> {
    entries: Vec<T>,
}

pub type LocalizedNames = LocalizedList<LocalizedName>;
pub type Flavors = LocalizedList<Flavor>;

impl<T: Localized> LocalizedList<T> {
    pub fn get(&self, language: Language) -> Option<&T> {
        self.entries.iter().find(|entry| entry.language() == language)
    }

    pub fn all(&self, language: Language) -> impl Iterator<Item = &T> {
        self.entries
            .iter()
            .filter(move |entry| entry.language() == language)
    }
}

impl<T> LocalizedList<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for LocalizedList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> FromIterator<T> for LocalizedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a LocalizedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl LocalizedNames {
    pub(crate) fn from_api(names: Vec<ApiName>) -> Result<Self> {
        names
            .into_iter()
            .map(|entry| {
                Ok(LocalizedName::new(
                    Language::from_resource(&entry.language)?,
                    entry.name,
                ))
            })
            .collect()
    }

    pub(crate) fn from_genera(genera: Vec<ApiGenus>) -> Result<Self> {
        genera
            .into_iter()
            .map(|entry| {
                Ok(LocalizedName::new(
                    Language::from_resource(&entry.language)?,
                    entry.genus,
                ))
            })
            .collect()
    }

    pub(crate) fn from_descriptions(descriptions: Vec<ApiDescription>) -> Result<Self> {
        descriptions
            .into_iter()
            .map(|entry| {
                Ok(LocalizedName::new(
                    Language::from_resource(&entry.language)?,
                    entry.description,
                ))
            })
            .collect()
    }
}

impl Flavors {
    pub(crate) fn from_api(
        kind: &'static str,
        entries: Vec<ApiFlavorText>,
        scope: FlavorScope,
    ) -> Result<Self> {
        entries
            .into_iter()
            .map(|entry| {
                let context = match scope {
                    FlavorScope::Version => entry
                        .version
                        .as_ref()
                        .map(|version| Version::from_resource(version).map(FlavorContext::Version))
                        .ok_or_else(|| Error::malformed(kind, "flavor text without a version"))??,
                    FlavorScope::VersionGroup => entry
                        .version_group
                        .as_ref()
                        .map(|group| {
                            VersionGroup::from_resource(group).map(FlavorContext::VersionGroup)
                        })
                        .ok_or_else(|| {
                            Error::malformed(kind, "flavor text without a version group")
                        })??,
                };
                Ok(Flavor {
                    language: Language::from_resource(&entry.language)?,
                    text: entry.flavor_text,
                    context,
                })
            })
            .collect()
    }
}

// Crisis keyword and resource tables
//
// Tables are declarative data (data/crisis_tables.json is compiled in as the
// default). They are validated once when loaded and never mutated afterwards.

use anyhow::{Context, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::category::CrisisCategory;

const BUILTIN_TABLES: &str = include_str!("../../data/crisis_tables.json");

/// Key of the catch-all resource list
pub const GENERAL_KEY: &str = "general";

/// A referral record (hotline or service)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    pub contact: String,
    pub description: String,
}

/// Trigger phrases and referrals for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub category: CrisisCategory,
    pub keywords: Vec<String>,
    /// Falls back to the general list when absent. An explicit `[]` stays
    /// empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceEntry>>,
}

#[derive(Debug, Deserialize)]
struct RawTables {
    categories: Vec<CategoryDefinition>,
    general: Vec<ResourceEntry>,
}

/// Validation failures for a tables file
#[derive(Debug, Error)]
pub enum TablesError {
    #[error("tables file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("category '{0}' is missing from the keyword table")]
    MissingCategory(CrisisCategory),

    #[error("category '{0}' is declared more than once")]
    DuplicateCategory(CrisisCategory),

    #[error("category '{0}' has no trigger phrases")]
    NoKeywords(CrisisCategory),

    #[error("category '{0}' contains an empty trigger phrase")]
    EmptyKeyword(CrisisCategory),

    #[error("category '{category}' lists the phrase '{keyword}' more than once")]
    DuplicateKeyword {
        category: CrisisCategory,
        keyword: String,
    },

    #[error("the general resource list must have at least one entry")]
    EmptyGeneral,
}

/// Validated keyword and resource tables.
///
/// Category definitions keep their declared order, which is both the scan
/// order of the analyzer and the order of `detectedCategories`. Keywords are
/// stored lower-cased.
#[derive(Debug, Clone)]
pub struct CrisisTables {
    categories: Vec<CategoryDefinition>,
    general: Vec<ResourceEntry>,
}

impl CrisisTables {
    /// Tables compiled into the binary
    pub fn builtin() -> Result<Self, TablesError> {
        Self::from_json(BUILTIN_TABLES)
    }

    /// Parse and validate tables from JSON text
    pub fn from_json(json: &str) -> Result<Self, TablesError> {
        let raw: RawTables = serde_json::from_str(json)?;
        Self::new(raw.categories, raw.general)
    }

    /// Load tables from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crisis tables file: {}", path.display()))?;

        Self::from_json(&contents)
            .with_context(|| format!("Invalid crisis tables in {}", path.display()))
    }

    /// Validate category definitions against the category enum
    pub fn new(
        categories: Vec<CategoryDefinition>,
        general: Vec<ResourceEntry>,
    ) -> Result<Self, TablesError> {
        if general.is_empty() {
            return Err(TablesError::EmptyGeneral);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(categories.len());

        for mut definition in categories {
            let category = definition.category;
            if !seen.insert(category) {
                return Err(TablesError::DuplicateCategory(category));
            }
            if definition.keywords.is_empty() {
                return Err(TablesError::NoKeywords(category));
            }

            let mut phrases = HashSet::new();
            for keyword in definition.keywords.iter_mut() {
                *keyword = keyword.to_lowercase();
                if keyword.trim().is_empty() {
                    return Err(TablesError::EmptyKeyword(category));
                }
                if !phrases.insert(keyword.clone()) {
                    return Err(TablesError::DuplicateKeyword {
                        category,
                        keyword: keyword.clone(),
                    });
                }
            }

            normalized.push(definition);
        }

        if let Some(missing) = CrisisCategory::ALL
            .into_iter()
            .find(|category| !seen.contains(category))
        {
            return Err(TablesError::MissingCategory(missing));
        }

        Ok(Self {
            categories: normalized,
            general,
        })
    }

    /// Category definitions in scan order
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    /// Catch-all resources used when nothing is detected
    pub fn general(&self) -> &[ResourceEntry] {
        &self.general
    }

    /// Referrals for a detected category
    pub fn resources_for(&self, category: CrisisCategory) -> &[ResourceEntry] {
        self.categories
            .iter()
            .find(|definition| definition.category == category)
            .and_then(|definition| definition.resources.as_deref())
            .unwrap_or(self.general.as_slice())
    }

    /// Look up a resource list by its wire key (`general` or a category key)
    pub fn resources_by_key(&self, key: &str) -> Option<&[ResourceEntry]> {
        if key == GENERAL_KEY {
            return Some(self.general.as_slice());
        }
        key.parse::<CrisisCategory>()
            .ok()
            .map(|category| self.resources_for(category))
    }

    /// Serializable view of every resource list, keyed by wire key
    pub fn resource_table(&self) -> ResourceTable<'_> {
        ResourceTable { tables: self }
    }
}

/// The full resource table: `general` first, then each category in
/// declared order.
pub struct ResourceTable<'a> {
    tables: &'a CrisisTables,
}

impl Serialize for ResourceTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let categories = self.tables.categories();
        let mut map = serializer.serialize_map(Some(categories.len() + 1))?;
        map.serialize_entry(GENERAL_KEY, self.tables.general())?;
        for definition in categories {
            map.serialize_entry(
                definition.category.as_str(),
                self.tables.resources_for(definition.category),
            )?;
        }
        map.end()
    }
}

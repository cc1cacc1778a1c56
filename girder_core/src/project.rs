//! # Project Data Structures
//!
//! The `Project` struct groups the girder sections of one job. Projects
//! serialize to `.gsp` (girder section project) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: ReportSettings (report title, engineer, job id)
//! └── items: HashMap<Uuid, SectionItem> (labelled girder sections)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use girder_core::calculations::{CrossSectionParams, SectionItem};
//! use girder_core::project::Project;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "County DOT");
//! project.add_item(SectionItem::new("G1", CrossSectionParams::default()));
//!
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("\"G1\""));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{SectionAnalysis, SectionItem};
use crate::errors::SectionResult;
use crate::report::ReportSettings;

/// Current schema version for .gsp files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// File extension for project files
pub const PROJECT_EXTENSION: &str = "gsp";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map so labels can repeat and
/// references stay stable when items are reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    #[serde(default)]
    pub settings: ReportSettings,

    pub items: HashMap<Uuid, SectionItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// The report settings inherit the engineer and job id so a fresh project
    /// prints a complete title block.
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        let engineer = engineer.into();
        let job_id = job_id.into();
        Project {
            settings: ReportSettings {
                engineer: engineer.clone(),
                job_id: job_id.clone(),
                ..ReportSettings::default()
            },
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer,
                job_id,
                client: client.into(),
                created: now,
                modified: now,
            },
            items: HashMap::new(),
        }
    }

    /// Add a section and return the UUID assigned to it.
    pub fn add_item(&mut self, item: SectionItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a section by UUID, returning it if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<SectionItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    pub fn get_item(&self, id: &Uuid) -> Option<&SectionItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a section.
    ///
    /// Marks the project as modified when the item exists.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut SectionItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items sorted by label, then by UUID for equal labels.
    ///
    /// HashMap order is arbitrary; reports and CLI listings use this order.
    pub fn sorted_items(&self) -> Vec<(&Uuid, &SectionItem)> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|a, b| a.1.label.cmp(&b.1.label).then_with(|| a.0.cmp(b.0)));
        items
    }

    /// Run the section pipeline for every item, in [`Project::sorted_items`]
    /// order. Each item carries its own result so one invalid section does
    /// not hide the others.
    pub fn compute_all(&self) -> Vec<(&SectionItem, SectionResult<SectionAnalysis>)> {
        self.sorted_items()
            .into_iter()
            .map(|(_, item)| (item, item.compute()))
            .collect()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

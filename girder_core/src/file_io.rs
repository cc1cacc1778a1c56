//! # File I/O Module
//!
//! Every file this crate writes (project files, DXF, SVG, PDF) goes through
//! [`write_atomic`]: write to a `.tmp` sibling, sync to disk, rename over the
//! target. An interrupted write leaves the previous file intact.
//!
//! Project files are `.gsp` JSON; loading checks the schema version.
//!
//! ## Example
//!
//! ```rust,no_run
//! use girder_core::file_io::{load_project, save_project};
//! use girder_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001", "Client");
//! let path = Path::new("girders.gsp");
//!
//! save_project(&project, path)?;
//! let loaded = load_project(path)?;
//! assert_eq!(loaded.meta.job_id, "25-001");
//! # Ok::<(), girder_core::errors::SectionError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{SectionError, SectionResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Path of the temporary sibling used during an atomic write
/// (`name.ext` → `name.ext.tmp`).
pub fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write bytes to `path` with atomic-replace semantics.
///
/// 1. Write to `path.tmp`
/// 2. Sync to disk (fsync)
/// 3. Rename over `path`
///
/// The temp file is removed if the rename fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> SectionResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        SectionError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        SectionError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        SectionError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        SectionError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(())
}

/// Save a project as pretty-printed JSON with [`write_atomic`].
pub fn save_project(project: &Project, path: &Path) -> SectionResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| SectionError::SerializationError {
        reason: e.to_string(),
    })?;

    write_atomic(path, json.as_bytes())?;
    info!(path = %path.display(), sections = project.item_count(), "project saved");
    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(SectionError::VersionMismatch)` - File version is incompatible
/// * `Err(SectionError::SerializationError)` - Invalid JSON
/// * `Err(SectionError::FileError)` - I/O error
pub fn load_project(path: &Path) -> SectionResult<Project> {
    let mut file = File::open(path)
        .map_err(|e| SectionError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| SectionError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project =
        serde_json::from_str(&contents).map_err(|e| SectionError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    debug!(path = %path.display(), sections = project.item_count(), "project loaded");
    Ok(project)
}

/// Check that a file's schema version can be read by this build.
///
/// The major version must match. While the major version is 0, a file with
/// a newer minor version is rejected as well.
pub fn validate_version(file_version: &str) -> SectionResult<()> {
    let mismatch = || SectionError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .map(|p| p.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| mismatch())?;
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let (Some(&file_major), Some(&current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };

    if file_major != current_major {
        return Err(mismatch());
    }

    if current_major == 0 {
        if let (Some(&file_minor), Some(&current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}

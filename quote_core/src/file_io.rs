//! # File I/O Module
//!
//! Opportunity files and quote exports:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility on load
//! - **Quote export**: Standalone quote JSON documents for download/share
//!
//! ## File Format
//!
//! Opportunities are saved as `.qop` files containing human-readable
//! JSON. Quote exports are plain `.json` documents holding just the
//! itemized quote.
//!
//! ## Example
//!
//! ```rust,no_run
//! use quote_core::file_io::{save_opportunity, load_opportunity};
//! use quote_core::project::{ClientProfile, Opportunity};
//! use std::path::Path;
//!
//! let client = ClientProfile::new("Acme Corporation", "contact@acme.example");
//! let opportunity = Opportunity::new("Dana Analyst", "Sales Dashboard", client);
//! save_opportunity(&opportunity, Path::new("sales.qop"))?;
//!
//! let loaded = load_opportunity(Path::new("sales.qop"))?;
//! # Ok::<(), quote_core::errors::QuoteError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::errors::{QuoteError, QuoteResult};
use crate::project::{Opportunity, SCHEMA_VERSION};
use crate::quote::Quote;

/// Save an opportunity to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize the opportunity to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp to the target (atomic on most filesystems)
///
/// This prevents corruption if the process is interrupted during write.
pub fn save_opportunity(opportunity: &Opportunity, path: &Path) -> QuoteResult<()> {
    let json =
        serde_json::to_string_pretty(opportunity).map_err(|e| QuoteError::SerializationError {
            reason: e.to_string(),
        })?;
    write_atomic(&json, path)
}

/// Load an opportunity from a file.
///
/// # Returns
///
/// * `Ok(Opportunity)` - Successfully loaded
/// * `Err(QuoteError::VersionMismatch)` - File version is incompatible
/// * `Err(QuoteError::SerializationError)` - Invalid JSON
/// * `Err(QuoteError::FileError)` - I/O error
pub fn load_opportunity(path: &Path) -> QuoteResult<Opportunity> {
    let mut file = File::open(path)
        .map_err(|e| QuoteError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| QuoteError::file_error("read", path.display().to_string(), e.to_string()))?;

    let opportunity: Opportunity =
        serde_json::from_str(&contents).map_err(|e| QuoteError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&opportunity.meta.version)?;

    Ok(opportunity)
}

/// Export a quote as a standalone pretty-JSON document.
///
/// This is the downloadable form of a quote: just the itemized amounts,
/// total, and currency tag, with no opportunity context.
pub fn export_quote(quote: &Quote, path: &Path) -> QuoteResult<()> {
    let json = serde_json::to_string_pretty(quote).map_err(|e| QuoteError::SerializationError {
        reason: e.to_string(),
    })?;
    write_atomic(&json, path)
}

/// Write a document to `path` via a temp file and atomic rename.
fn write_atomic(contents: &str, path: &Path) -> QuoteResult<()> {
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    let tmp_path = path.with_extension(extension);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        QuoteError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        QuoteError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        QuoteError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        QuoteError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> QuoteResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(QuoteError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(QuoteError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // For 0.x versions, a newer minor version is a breaking change
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 {
        if file_parts[1] > current_parts[1] {
            return Err(QuoteError::VersionMismatch {
                file_version: file_version.to_string(),
                expected_version: SCHEMA_VERSION.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::generate_quote;
    use crate::project::ClientProfile;
    use crate::requirements::Requirements;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str, ext: &str) -> PathBuf {
        temp_dir().join(format!("quotient_test_{}.{}", name, ext))
    }

    fn sample_opportunity() -> Opportunity {
        let client = ClientProfile::new("Test Client", "client@test.example");
        let mut opportunity = Opportunity::new("Test Analyst", "Test Dashboard", client);
        opportunity.set_requirements(Requirements::builder().with_widgets(5).build());
        opportunity.price();
        opportunity
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip", "qop");

        let opportunity = sample_opportunity();
        save_opportunity(&opportunity, &path).unwrap();

        let loaded = load_opportunity(&path).unwrap();
        assert_eq!(loaded.meta.analyst, "Test Analyst");
        assert_eq!(loaded.quote, opportunity.quote);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_path("atomic", "qop");
        let tmp_path = path.with_extension("qop.tmp");

        save_opportunity(&sample_opportunity(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_export_quote_document() {
        let path = temp_path("export", "json");

        let quote = generate_quote(&Requirements::default());
        export_quote(&quote, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let exported: Quote = serde_json::from_str(&contents).unwrap();
        assert_eq!(exported, quote);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_file_error() {
        let result = load_opportunity(Path::new("/nonexistent/deal.qop"));
        assert!(matches!(result, Err(QuoteError::FileError { .. })));
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}

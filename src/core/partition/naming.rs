//! Output artifact naming
//!
//! `batch.csv` becomes `batch_ok.csv` / `batch_error.csv`; the suffix is
//! inserted before the final extension so artifacts sort next to their
//! source file in listings.

/// Suffix for the success artifact
pub const OK_SUFFIX: &str = "_ok";

/// Suffix for the failure artifact
pub const ERROR_SUFFIX: &str = "_error";

/// Derive an artifact name by inserting a suffix before the extension
///
/// A name without an extension gets the suffix appended. Only the final
/// extension is split, so `export.2025.csv` becomes `export.2025_ok.csv`.
pub fn derive_output_name(original: &str, suffix: &str) -> String {
    match original.rsplit_once('.') {
        Some((base, ext)) => format!("{base}{suffix}.{ext}"),
        None => format!("{original}{suffix}"),
    }
}

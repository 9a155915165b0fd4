//! Validation helpers for palette documents.

use validator::ValidationError;

/// Validates that a palette name can be used as an output file stem.
///
/// # Examples
///
/// ```ignore
/// validate_palette_name("Arne16")     // Ok
/// validate_palette_name("")           // Err - empty
/// validate_palette_name("../escape")  // Err - path separator
/// ```
pub fn validate_palette_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("palette_name_empty");
        err.message = Some("Palette name must not be blank".into());
        return Err(err);
    }

    if name.contains(['/', '\\']) || name == "." || name == ".." || name.contains('\0') {
        let mut err = ValidationError::new("palette_name_path");
        err.message = Some(
            format!("Palette name `{name}` cannot be used as a file name").into(),
        );
        return Err(err);
    }

    Ok(())
}

//! `guidgen inspect` command.

use crate::guid::Guid;

/// Parse `token` and describe its parts.
///
/// # Errors
///
/// Returns an error string if the token does not have the identifier
/// layout for `prefix`.
pub fn run(token: &str, prefix: &str) -> Result<String, String> {
    let guid =
        Guid::parse(token, prefix).map_err(|e| format!("Invalid identifier {token:?}: {e}"))?;
    let created = guid.created_at().map_or_else(
        || "invalid date".to_string(),
        |t| t.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
    );

    Ok(format!(
        "prefix:     {:?}\ntimestamp:  {}\nsuffix:     {}\ncreated at: {created}",
        guid.prefix(),
        guid.timestamp(),
        guid.suffix(),
    ))
}

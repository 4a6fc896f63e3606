//! Output writing: the schema document, pretty-printed, on disk.

use std::path::Path;

use crate::error::Result;
use crate::schema::SchemaNode;

/// Serialize `schema` indented and write it to `path`, creating missing
/// parent directories first.
pub fn write(path: &Path, schema: &SchemaNode) -> Result<()> {
    let rendered = serde_json::to_string_pretty(schema)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, rendered)?;
    Ok(())
}

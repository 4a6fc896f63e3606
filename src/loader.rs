//! Input loading: parse one sample document and hand the engine its
//! `message` sub-tree.

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Top-level key holding the payload to analyze.
const MESSAGE_KEY: &str = "message";

/// Parse the file at `path` and return the value under the top-level
/// `message` key, or an empty object when the key is absent (or the document
/// root is not an object at all).
pub fn load(path: &Path) -> Result<Value> {
    let document = load_document(path)?;
    Ok(extract_message(document))
}

fn load_document(path: &Path) -> Result<Value> {
    let source = std::fs::read_to_string(path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            Error::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(error)
        }
    })?;
    from_str_with_path(&source, path)
}

/// Deserialize with JSON-path context in error messages.
fn from_str_with_path(source: &str, path: &Path) -> Result<Value> {
    let de = &mut serde_json::Deserializer::from_str(source);
    serde_path_to_error::deserialize::<_, Value>(de).map_err(|error| Error::InputMalformed {
        path: path.to_path_buf(),
        json_path: error.path().to_string(),
        source: error.into_inner(),
    })
}

fn extract_message(mut document: Value) -> Value {
    match document.get_mut(MESSAGE_KEY) {
        Some(message) => message.take(),
        None => Value::Object(serde_json::Map::new()),
    }
}

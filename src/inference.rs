//! Structural inference over a single sample payload.
//!
//! Walk one parsed JSON tree and produce a schema tree of the same shape,
//! where every node carries a type tag plus blank annotation slots for later
//! manual curation.
//!
//! Design goals:
//! - Total over the value domain; no error path, no I/O, no state.
//! - Classification is one closed match over the six JSON variants, with an
//!   explicit string catch-all for null.
//! - Arrays get a reading, not a structure dump: all-string lists document a
//!   value set (`enum`), all-object lists collapse to one representative item
//!   schema, anything else is an untyped array.

use serde_json::Value;

use crate::schema::{
    ArraySchema, EnumSchema, ObjectSchema, Properties, ScalarType, SchemaNode,
};

// ------------------------------ Front API --------------------------------- //

/// Infer the schema node for `value` with default options.
///
/// `is_root` marks the outermost call on the document's designated root
/// object: the root result is the bare property mapping itself, with no
/// object wrapper around it.
pub fn infer(value: &Value, is_root: bool) -> SchemaNode {
    Inference::new().infer(value, is_root)
}

/// Inference engine options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inference {
    merge_array_items: bool,
}

impl Inference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union object-array element schemas instead of sampling the first
    /// element. Off by default: single-sample is the contract, and later
    /// element shapes are silently ignored unless this is set.
    #[must_use]
    pub fn with_merged_array_items(mut self, enabled: bool) -> Self {
        self.merge_array_items = enabled;
        self
    }

    pub fn infer(&self, value: &Value, is_root: bool) -> SchemaNode {
        match value {
            Value::Object(map) => self.infer_object(map, is_root),
            Value::Array(items) => self.infer_array(items),
            Value::Bool(_) => SchemaNode::scalar(ScalarType::Boolean),
            Value::Number(n) if n.is_i64() || n.is_u64() => {
                SchemaNode::scalar(ScalarType::Integer)
            }
            Value::Number(_) => SchemaNode::scalar(ScalarType::Float),
            // catch-all: null has no structural reading and maps to string
            Value::String(_) | Value::Null => SchemaNode::scalar(ScalarType::String),
        }
    }

    fn infer_object(&self, map: &serde_json::Map<String, Value>, is_root: bool) -> SchemaNode {
        let mut properties = Properties::new();
        for (key, value) in map {
            properties.insert(key.clone(), self.infer(value, false));
        }
        if is_root {
            SchemaNode::Bare(properties)
        } else {
            SchemaNode::Object(ObjectSchema::new(properties))
        }
    }

    fn infer_array(&self, items: &[Value]) -> SchemaNode {
        if items.iter().all(Value::is_string) {
            // vacuously true for []: an empty list reads as an open value set
            return SchemaNode::Enum(EnumSchema::new());
        }
        if items.iter().all(Value::is_object) {
            let item = if self.merge_array_items {
                self.merge_item_schemas(items)
            } else {
                // only the first element is sampled; later shapes are ignored
                items
                    .first()
                    .map_or_else(SchemaNode::empty, |el| self.infer(el, false))
            };
            return SchemaNode::Array(ArraySchema::new(item));
        }
        SchemaNode::Array(ArraySchema::new(SchemaNode::empty()))
    }

    fn merge_item_schemas(&self, items: &[Value]) -> SchemaNode {
        let mut schemas = items.iter().map(|el| self.infer(el, false));
        match schemas.next() {
            Some(first) => schemas.fold(first, |acc, next| merge(&acc, &next)),
            None => SchemaNode::empty(),
        }
    }
}

// -------------------------------- Merge ----------------------------------- //

/// Join two item schemas into the least shape covering both.
///
/// The empty `{}` placeholder is an identity. Incompatible variants fall
/// back to an arbitrary string, mirroring the scalar catch-all.
fn merge(a: &SchemaNode, b: &SchemaNode) -> SchemaNode {
    match (a, b) {
        (SchemaNode::Bare(ours), _) if ours.is_empty() => b.clone(),
        (_, SchemaNode::Bare(theirs)) if theirs.is_empty() => a.clone(),
        (SchemaNode::Object(ours), SchemaNode::Object(theirs)) => SchemaNode::Object(
            ObjectSchema::new(merge_properties(&ours.properties, &theirs.properties)),
        ),
        (SchemaNode::Bare(ours), SchemaNode::Bare(theirs)) => {
            SchemaNode::Bare(merge_properties(ours, theirs))
        }
        (SchemaNode::Array(ours), SchemaNode::Array(theirs)) => {
            SchemaNode::Array(ArraySchema::new(merge(&ours.items, &theirs.items)))
        }
        (SchemaNode::Enum(_), SchemaNode::Enum(_)) => SchemaNode::Enum(EnumSchema::new()),
        (SchemaNode::Scalar(ours), SchemaNode::Scalar(theirs)) => {
            SchemaNode::scalar(merge_scalar_types(ours.ty, theirs.ty))
        }
        _ => SchemaNode::scalar(ScalarType::String),
    }
}

fn merge_properties(a: &Properties, b: &Properties) -> Properties {
    let mut out = a.clone();
    for (key, theirs) in b {
        let merged = match out.get(key) {
            Some(ours) => merge(ours, theirs),
            None => theirs.clone(),
        };
        // insert keeps the position of an existing key; new keys append
        out.insert(key.clone(), merged);
    }
    out
}

fn merge_scalar_types(a: ScalarType, b: ScalarType) -> ScalarType {
    match (a, b) {
        (x, y) if x == y => x,
        (ScalarType::Integer, ScalarType::Float) | (ScalarType::Float, ScalarType::Integer) => {
            ScalarType::Float
        }
        _ => ScalarType::String,
    }
}

// ------------------------------- Tests ------------------------------------ //

// Strongly-typed schema tree for emission. No serde_json::Value here.

use indexmap::IndexMap;
use serde::Serialize;

/// Insertion-ordered property mapping. Iteration order is the sample
/// document's natural key order.
pub type Properties = IndexMap<String, SchemaNode>;

/// One inferred schema node.
///
/// `Bare` is the wrapperless form: the property mapping emitted at the
/// document root, and the empty `{}` placeholder used as array items when no
/// element structure is available. Every other variant carries its `type`
/// tag plus the blank annotation slots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Bare(Properties),
    Object(ObjectSchema),
    Enum(EnumSchema),
    Array(ArraySchema),
    Scalar(ScalarSchema),
}

impl SchemaNode {
    /// The `{}` placeholder: a bare mapping with no properties.
    pub fn empty() -> Self {
        SchemaNode::Bare(Properties::new())
    }

    pub fn scalar(ty: ScalarType) -> Self {
        SchemaNode::Scalar(ScalarSchema::new(ty))
    }
}

/// Wrapper emitted for every nested (non-root) object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSchema {
    pub properties: Properties,
    pub required: bool,
    #[serde(rename = "type")]
    ty: &'static str,
    pub tag: String,
    pub description: String,
}

impl ObjectSchema {
    pub fn new(properties: Properties) -> Self {
        Self {
            properties,
            required: false,
            ty: "object",
            tag: String::new(),
            description: String::new(),
        }
    }
}

/// An array whose every element is a string: a value set, not a structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumSchema {
    #[serde(rename = "type")]
    ty: &'static str,
    pub tag: String,
    pub description: String,
}

impl EnumSchema {
    pub fn new() -> Self {
        Self {
            ty: "enum",
            tag: String::new(),
            description: String::new(),
        }
    }
}

/// An array described by a single representative item schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArraySchema {
    #[serde(rename = "type")]
    ty: &'static str,
    pub items: Box<SchemaNode>,
    pub tag: String,
    pub description: String,
}

impl ArraySchema {
    pub fn new(items: SchemaNode) -> Self {
        Self {
            ty: "array",
            items: Box::new(items),
            tag: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Boolean,
    Integer,
    Float,
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarSchema {
    #[serde(rename = "type")]
    pub ty: ScalarType,
    pub tag: String,
    pub description: String,
}

impl ScalarSchema {
    pub fn new(ty: ScalarType) -> Self {
        Self {
            ty,
            tag: String::new(),
            description: String::new(),
        }
    }
}

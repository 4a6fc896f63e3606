//! Pipeline driver: load → infer → write, one run per invocation.

use std::path::Path;

use crate::error::Result;
use crate::inference::Inference;
use crate::{loader, writer};

/// Options for one generation run. Paths stay out of here: they are
/// explicit parameters, never ambient state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Union object-array element schemas instead of sampling the first
    /// element.
    pub merge_array_items: bool,
}

/// Infer the schema for the sample document at `input` and write it to
/// `output`. The root call is flagged, so the output's top level is the bare
/// property mapping.
pub fn generate_schema(input: &Path, output: &Path, options: Options) -> Result<()> {
    let message = loader::load(input)?;
    let schema = Inference::new()
        .with_merged_array_items(options.merge_array_items)
        .infer(&message, true);
    writer::write(output, &schema)
}

//! Terraform resource blocks built with `hcl-rs`
//!
//! The generator describes blocks as `hcl` structures; this module owns the
//! few expression shapes it needs and the final formatting of the body.

use crate::domain::{ExportError, ResourceName, Result};
use hcl::expr::{Expression, FuncCall, Traversal, Variable};
use hcl::format::{Format, Formatter};
use hcl::{Attribute, Block, Body};

/// `resource "<type>" "<name>" { ... }`
pub fn resource_block(
    resource_type: &str,
    name: &ResourceName,
    attributes: impl IntoIterator<Item = Attribute>,
) -> Block {
    attributes.into_iter().fold(
        Block::builder("resource")
            .add_label(resource_type)
            .add_label(name.as_str()),
        |builder, attribute| builder.add_attribute(attribute),
    )
    .build()
}

/// Reference to a resource, e.g. `grafana_folder.f1`
pub fn resource_ref(resource_type: &str, name: &ResourceName) -> Traversal {
    Traversal::builder(Variable::unchecked(resource_type))
        .attr(name.as_str())
        .build()
}

/// Reference to a resource attribute, e.g. `grafana_folder.f1.uid`
pub fn resource_attr(resource_type: &str, name: &ResourceName, attr: &str) -> Traversal {
    Traversal::builder(Variable::unchecked(resource_type))
        .attr(name.as_str())
        .attr(attr)
        .build()
}

/// `depends_on = [<refs>]`
pub fn depends_on(refs: impl IntoIterator<Item = Traversal>) -> Attribute {
    Attribute::new(
        "depends_on",
        Expression::Array(refs.into_iter().map(Expression::from).collect()),
    )
}

/// `jsonencode(jsondecode(file("<path>")))`
pub fn json_file(path: &str) -> FuncCall {
    let file = FuncCall::builder("file").arg(path).build();
    let decoded = FuncCall::builder("jsondecode").arg(file).build();
    FuncCall::builder("jsonencode").arg(decoded).build()
}

/// Format blocks as configuration text, with single-line arrays
pub fn to_config_text(blocks: Vec<Block>) -> Result<String> {
    if blocks.is_empty() {
        return Ok(String::new());
    }

    let body = blocks
        .into_iter()
        .fold(Body::builder(), |builder, block| builder.add_block(block))
        .build();

    let mut formatter = Formatter::builder().compact_arrays(true).build_vec();
    body.format_string(&mut formatter)
        .map_err(|e| ExportError::Generation(format!("Failed to format configuration: {e}")))
}

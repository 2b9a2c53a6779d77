/*!
## Rust Machine Module

This Rust module encodes parsed programs into B_code, the flat stream
of numerically tagged pairs.

*/

mod bcode;
mod codegen;

pub use bcode::BCode;
pub use bcode::Item;
pub use bcode::Tag;
pub use codegen::codegen;

use crate::lang::{parse, Error};
use tracing::debug;

/// Parse and encode a complete source text.
pub fn compile(s: &str) -> Result<BCode, Error> {
    let program = parse(s)?;
    let bcode = codegen(&program);
    debug!(lines = program.lines.len(), items = bcode.items().len(), "compiled");
    Ok(bcode)
}

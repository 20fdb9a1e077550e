//! Output formatting for resolved options

use crate::config::{ResolvedMapping, ResolvedVariable};
use crate::error::Result;
use std::io::Write;

/// `name: <key>, is_defaulted: <0|1>, value: <value>`
pub fn format_variable(variable: &ResolvedVariable) -> String {
    format!(
        "name: {}, is_defaulted: {}, value: {}",
        variable.name,
        u8::from(variable.is_defaulted()),
        variable.value
    )
}

/// Write one line per resolved variable, in mapping order.
pub fn write_variables<W: Write>(out: &mut W, mapping: &ResolvedMapping) -> Result<()> {
    for variable in mapping.iter() {
        writeln!(out, "{}", format_variable(variable))?;
    }
    Ok(())
}

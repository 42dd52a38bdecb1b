//! Categories command for listing the category table.

use std::io::Write;

use anyhow::Result;
use clash_core::CategoryLookup;

pub fn run<W: Write>(writer: &mut W, categories: &impl CategoryLookup) -> Result<()> {
    for category in categories.categories() {
        writeln!(
            writer,
            "{:<10} {:<10} {}",
            category.value, category.label, category.color
        )?;
    }
    Ok(())
}

//! `specgate explain`

use std::path::Path;

use specgate_verify::SpecExplainer;

use crate::commands::load_spec;
use crate::error::CliResult;

pub fn execute(path: &Path) -> CliResult<()> {
    let spec = load_spec(path)?;
    print!("{}", SpecExplainer::explain(&spec));
    Ok(())
}

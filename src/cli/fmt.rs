use std::fs;
use std::path::Path;

use crate::cli::{load_program, CliError};
use crate::fmt::format_program;

pub fn handle_fmt(path: &Path, check: bool) -> Result<(), CliError> {
    let (src, program) = load_program(path)?;
    let formatted = format_program(&program);
    if formatted == src {
        return Ok(());
    }
    if check {
        return Err(CliError::NeedsFormat(path.to_path_buf()));
    }
    fs::write(path, formatted).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    println!("Formatted {}", path.display());
    Ok(())
}

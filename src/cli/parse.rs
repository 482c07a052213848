use std::path::Path;

use crate::cli::{load_program, CliError};

pub fn handle_parse(path: &Path, json: bool) -> Result<(), CliError> {
    let (_src, program) = load_program(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&program)?);
    } else {
        println!("{:#?}", program);
    }
    Ok(())
}

use std::path::Path;

use asciifig::wrap::wrap_text;

use crate::shared::read_input;

pub fn run(file: &Path, columns: usize) -> Result<(), i32> {
    let text = read_input(file)?;
    for line in wrap_text(&text, columns) {
        println!("{line}");
    }
    Ok(())
}

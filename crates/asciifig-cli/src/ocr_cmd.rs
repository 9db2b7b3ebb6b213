use std::path::Path;

use asciifig::ocr::parse_account_number;

use crate::shared::read_input;

pub fn run(file: &Path) -> Result<(), i32> {
    let text = read_input(file)?;
    match parse_account_number(&text) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => {
            eprintln!("Error: input is not a readable 3-row digit blob");
            Err(1)
        }
    }
}

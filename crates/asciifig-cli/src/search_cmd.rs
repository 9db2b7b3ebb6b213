use std::path::Path;

use asciifig::wordsearch::find_word;

use crate::shared::read_input;

pub fn run(file: &Path, word: &str) -> Result<(), i32> {
    let text = read_input(file)?;
    let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
    println!("{}", find_word(&rows, word));
    Ok(())
}

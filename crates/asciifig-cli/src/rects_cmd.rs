use std::path::Path;

use asciifig::Figure;

use crate::cli::OutputFormat;
use crate::shared::read_input;

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let text = read_input(file)?;
    let figure = Figure::parse(&text).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    match format {
        OutputFormat::Text => {
            let rects: Vec<String> = figure
                .rectangles()
                .map(|rect| rect.trim_end().to_string())
                .collect();
            println!("{}", rects.join("\n\n"));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(figure.faces()).map_err(|e| {
                eprintln!("Error: failed to serialize faces: {e}");
                1
            })?;
            println!("{json}");
        }
    }
    Ok(())
}

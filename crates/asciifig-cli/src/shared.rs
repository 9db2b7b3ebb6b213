use std::io::Read;
use std::path::Path;

/// Read a subcommand's input from a file, or from stdin when the path
/// is `-`.
///
/// Returns `Err(1)` with a message printed to stderr if the file is
/// missing or unreadable.
pub fn read_input(file: &Path) -> Result<String, i32> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map_err(|e| {
            eprintln!("Error: failed to read stdin: {e}");
            1
        })?;
        return Ok(text);
    }

    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    std::fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })
}

use std::io;
use std::path::Path;

/// Reads shader source text, terminating every line with `\n`.
///
/// A file's own trailing newline does not add an empty line: `"a\n"` reads as
/// `"a\n"` and an empty file reads as `""`. `\r\n` endings become `\n`.
pub fn read_source(path: impl AsRef<Path>) -> io::Result<String> {
    let text = std::fs::read_to_string(path)?;

    let mut out = String::with_capacity(text.len() + 1);
    for line in text.lines() {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

/// Like [`read_source`], but logs the failure and returns an empty string.
///
/// An empty source is handed to the compiler as-is, which then reports its
/// own failure.
pub fn load_source(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match read_source(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::error!("could not read file {}: file does not exist", path.display());
            String::new()
        }
        Err(e) => {
            log::error!("could not read file {}: {e}", path.display());
            String::new()
        }
    }
}

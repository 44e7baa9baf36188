use std::path::{Path, PathBuf};

/// Derive the `<name>_out.<ext>` sibling of a path. Used for both the cut
/// media file and the rewritten key table.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push("_out");
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

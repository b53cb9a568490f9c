//! Default output naming.

use std::path::{Path, PathBuf};

/// Derive the output path for `input` when none was given.
///
/// The file name is split at its first `.` and `separator` plus the
/// uppercased target is inserted there: `image.hdr` becomes
/// `image_HDRI.hdr` and `sky.v2.exr` becomes `sky_LINE.v2.exr`. A name
/// without a `.` gets the suffix appended. The parent directory is kept.
#[must_use]
pub fn derive_output_path(input: &Path, target: &str, separator: &str) -> PathBuf {
    let suffix = format!("{separator}{}", target.to_uppercase());
    let Some(name) = input.file_name() else {
        let mut path = input.as_os_str().to_owned();
        path.push(&suffix);
        return PathBuf::from(path);
    };

    let name = name.to_string_lossy();
    let renamed = match name.split_once('.') {
        Some((stem, rest)) => format!("{stem}{suffix}.{rest}"),
        None => format!("{name}{suffix}"),
    };
    input.with_file_name(renamed)
}

//! Path helpers shared by the scanner and the output writers

use std::borrow::Cow;
use std::path::Path;

/// Final path component of `path`, lossily decoded.
///
/// Paths without a final component (`/`, `..`, empty) yield an empty string.
///
/// # Examples
/// ```
/// use shtags::utils::base_name;
/// use std::path::Path;
///
/// assert_eq!(base_name(Path::new("/src/pkg/configure")), "configure");
/// assert_eq!(base_name(Path::new("run.sh")), "run.sh");
/// ```
pub fn base_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or(Cow::Borrowed(""))
}

/// Path rendered with forward slashes, as written into tag files
pub fn display_path(path: &Path) -> String {
    let shown = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        shown.into_owned()
    } else {
        shown.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_directories() {
        assert_eq!(base_name(Path::new("a/b/configure")), "configure");
        assert_eq!(base_name(Path::new("configure")), "configure");
    }

    #[test]
    fn test_base_name_keeps_extension() {
        assert_eq!(base_name(Path::new("tools/configure.sh")), "configure.sh");
    }

    #[test]
    fn test_base_name_without_file_component() {
        assert_eq!(base_name(Path::new("/")), "");
        assert_eq!(base_name(Path::new("")), "");
        assert_eq!(base_name(Path::new("..")), "");
    }

    #[test]
    fn test_display_path_relative() {
        assert_eq!(display_path(Path::new("scripts/run.sh")), "scripts/run.sh");
    }
}

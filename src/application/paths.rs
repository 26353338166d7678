//! # LPC Path Normalization
//!
//! The driver tools resolve object paths relative to the mudlib root, while clients
//! naturally send absolute filesystem paths. Paths under the configured root are
//! rewritten to root-relative form; anything else passes through untouched.

use std::path::Path;

/// Rewrites `path` relative to `mudlib_root` when it is absolute and lies under it.
///
/// The prefix test is component-wise, so `/mud/library/x.c` is not under `/mud/lib`.
pub fn normalize_lpc_path(path: &str, mudlib_root: Option<&Path>) -> String {
    let Some(root) = mudlib_root else {
        return path.to_string();
    };

    let candidate = Path::new(path);
    if !candidate.is_absolute() {
        return path.to_string();
    }

    match candidate.strip_prefix(root) {
        Ok(relative) => relative
            .to_string_lossy()
            .trim_start_matches(std::path::is_separator)
            .to_string(),
        Err(_) => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_mudlib_root() {
        let root = Path::new("/mud/lib");
        assert_eq!(normalize_lpc_path("/mud/lib/obj/sword.c", Some(root)), "obj/sword.c");
        assert_eq!(normalize_lpc_path("/mud/lib//std/room.c", Some(root)), "std/room.c");
    }

    #[test]
    fn test_root_with_trailing_separator() {
        let root = Path::new("/mud/lib/");
        assert_eq!(normalize_lpc_path("/mud/lib/obj/sword.c", Some(root)), "obj/sword.c");
    }

    #[test]
    fn test_outside_root_unchanged() {
        let root = Path::new("/mud/lib");
        assert_eq!(normalize_lpc_path("/other/file.c", Some(root)), "/other/file.c");
        assert_eq!(normalize_lpc_path("/mud/library/file.c", Some(root)), "/mud/library/file.c");
    }

    #[test]
    fn test_relative_unchanged() {
        let root = Path::new("/mud/lib");
        assert_eq!(normalize_lpc_path("obj/sword.c", Some(root)), "obj/sword.c");
        assert_eq!(normalize_lpc_path("/obj/sword.c", None), "/obj/sword.c");
    }

    #[test]
    fn test_root_itself_is_empty() {
        let root = Path::new("/mud/lib");
        assert_eq!(normalize_lpc_path("/mud/lib", Some(root)), "");
    }
}

/// Path utilities for the route-generation pipeline
///
/// Pure string transforms only: no file-system access, no side effects.
/// Every function accepts both `/` and `\` separators and works on the
/// normalized `/` form internally.
use thiserror::Error;

/// Errors produced by [`relative_path`]
///
/// These are the only failure modes in the whole pipeline; every other
/// operation is total over its documented inputs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// One of the two arguments was the empty string.
    ///
    /// `role` names which one (`"import"` or `"route"`), so the message
    /// reads e.g. `Invalid import path: ""`.
    #[error("Invalid {role} path: \"{path}\"")]
    InvalidInput { role: &'static str, path: String },

    /// The two paths share no common root, so no `../`-chain can
    /// connect them.
    #[error("No relative path between \"{from}\" and \"{to}\"")]
    NoRelation { from: String, to: String },
}

/// Normalizes separators to `/` (Windows inputs included)
pub(crate) fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// Returns the path with its final segment removed
///
/// The containing directory of a bare file name is the empty string.
pub(crate) fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..i],
        None => "",
    }
}

/// Returns the longest common containing directory of the given paths
///
/// An empty input yields `""`. A single path yields its containing
/// directory (the final segment is assumed to be a file name).
///
/// # Examples
///
/// ```
/// use routegen::path::base_url;
///
/// let base = base_url(&[
///     "src/pages/home/index.ts",
///     "src/pages/about/index.ts",
///     "src/pages/blog/post-1.ts",
/// ]);
/// assert_eq!(base, "src/pages");
///
/// assert_eq!(base_url(&["src/pages/home/index.ts"]), "src/pages/home");
/// assert_eq!(
///     base_url(&["src/pages/home/index.ts", "src/pages/home/index.ts"]),
///     "src/pages/home"
/// );
/// assert_eq!(base_url::<&str>(&[]), "");
/// ```
pub fn base_url<S: AsRef<str>>(paths: &[S]) -> String {
    let normalized: Vec<String> = paths.iter().map(|p| normalize(p.as_ref())).collect();

    match normalized.as_slice() {
        [] => String::new(),
        [only] => parent_dir(only).to_string(),
        [first, rest @ ..] => {
            let mut common: Vec<&str> = first.split('/').collect();
            for path in rest {
                let shared = common
                    .iter()
                    .zip(path.split('/'))
                    .take_while(|(a, b)| **a == *b)
                    .count();
                common.truncate(shared);
            }
            // A prefix covering a whole input is that input's file
            // segment; the containing directory is one level up.
            if normalized
                .iter()
                .any(|path| path.split('/').count() == common.len())
            {
                common.pop();
            }
            common.join("/")
        }
    }
}

/// Expresses `to` relative to `from` using `/`-delimited segments
///
/// Both arguments are treated as opaque segment lists; neither is
/// required to exist on disk. Identical paths yield `""`.
///
/// # Errors
///
/// - [`PathError::InvalidInput`] when either argument is empty.
/// - [`PathError::NoRelation`] when the paths share no common root
///   (their first segments already differ), so no relative expression
///   can connect them.
///
/// # Examples
///
/// ```
/// use routegen::path::relative_path;
///
/// assert_eq!(relative_path("src", "src/pages/home/index.ts").unwrap(), "pages/home/index.ts");
/// assert_eq!(relative_path("src/pages/home/index.ts", "src").unwrap(), "../../..");
/// assert_eq!(relative_path("/src/app", "/src/app").unwrap(), "");
/// assert!(relative_path("app", "src/pages/home/index.ts").is_err());
/// ```
pub fn relative_path(from: &str, to: &str) -> Result<String, PathError> {
    if from.is_empty() {
        return Err(PathError::InvalidInput {
            role: "import",
            path: from.to_string(),
        });
    }
    if to.is_empty() {
        return Err(PathError::InvalidInput {
            role: "route",
            path: to.to_string(),
        });
    }

    let from = normalize(from);
    let to = normalize(to);
    if from == to {
        return Ok(String::new());
    }

    let from_segments: Vec<&str> = from.split('/').collect();
    let to_segments: Vec<&str> = to.split('/').collect();
    let shared = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    if shared == 0 {
        return Err(PathError::NoRelation { from, to });
    }

    let ups = from_segments.len() - shared;
    let parts: Vec<&str> = std::iter::repeat("..")
        .take(ups)
        .chain(to_segments[shared..].iter().copied())
        .collect();
    Ok(parts.join("/"))
}

/// Returns the deduplicated containing directories of the given paths
///
/// Order follows first occurrence in the input.
///
/// # Examples
///
/// ```
/// use routegen::path::extract_folders;
///
/// let folders = extract_folders(&[
///     "src/pages/index-page.js",
///     "src/pages/about/about-page.js",
///     "src/pages/about/about-page2.js",
/// ]);
/// assert_eq!(folders, vec!["src/pages", "src/pages/about"]);
/// ```
pub fn extract_folders<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    let mut folders: Vec<String> = Vec::new();
    for path in paths {
        let normalized = normalize(path.as_ref());
        let folder = parent_dir(&normalized).to_string();
        if !folders.contains(&folder) {
            folders.push(folder);
        }
    }
    folders
}

/// Script extensions that count as removable; dotted name parts like
/// `.component` or `.providers` are part of the name, not extensions.
const SCRIPT_EXTENSIONS: [&str; 6] = ["ts", "tsx", "js", "jsx", "mjs", "cjs"];

/// Strips the trailing script extension from a path
///
/// Only a known script extension is removed; any other trailing
/// `.<part>` belongs to the file's name and passes through unchanged.
///
/// # Examples
///
/// ```
/// use routegen::path::remove_extension;
///
/// assert_eq!(
///     remove_extension("src/pages/Teams/team-catalog-page.component.ts"),
///     "src/pages/Teams/team-catalog-page.component"
/// );
/// assert_eq!(remove_extension("index.js"), "index");
/// assert_eq!(remove_extension("README"), "README");
/// assert_eq!(remove_extension(""), "");
/// ```
pub fn remove_extension(path: &str) -> String {
    let normalized = normalize(path);
    for ext in SCRIPT_EXTENSIONS {
        if let Some(stem) = normalized.strip_suffix(ext) {
            if let Some(stem) = stem.strip_suffix('.') {
                if !stem.is_empty() && !stem.ends_with('/') {
                    return stem.to_string();
                }
            }
        }
    }
    normalized
}

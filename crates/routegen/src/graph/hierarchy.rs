/// Flat folder-hierarchy records
///
/// The first pipeline stage: each scanned folder becomes one record
/// carrying its base-relative path, the files that live directly inside
/// it, and a back-reference to its containing folder. Records are kept
/// in a flat ordered list; the tree shape is only recovered later by
/// [`build_folder_tree_from_hierarchy`](crate::graph::build_folder_tree_from_hierarchy).
use tracing::debug;

use crate::path::{normalize, parent_dir, relative_path, PathError};

/// One folder of the page directory, relativized against the base
///
/// `path` is relative to the base directory (the base itself is `""`).
/// `parent` is the relative path of the containing folder, or `None`
/// when the containing folder is the base directory — including the
/// base directory's own record. `files` keeps the paths exactly as
/// supplied (not relativized), in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderMetadata {
    pub path: String,
    pub files: Vec<String>,
    pub parent: Option<String>,
}

/// Builds the flat folder hierarchy for a set of scanned paths
///
/// Produces one [`FolderMetadata`] per entry of `folder_paths`, in
/// input order. A file is attributed to the folder that contains it
/// *directly*; files in deeper subfolders belong to those subfolders'
/// records. An empty `folder_paths` yields an empty list regardless of
/// `file_paths`.
///
/// # Errors
///
/// Propagates [`PathError`] from the relativization of a folder that
/// cannot be expressed relative to `base_url`.
///
/// # Examples
///
/// ```
/// use routegen::graph::generate_folder_hierarchy;
///
/// let hierarchy = generate_folder_hierarchy(
///     &["src/pages", "src/pages/Teams"],
///     "src/pages",
///     &[
///         "src/pages/dashboard-page.component.ts",
///         "src/pages/Teams/team-catalog-page.component.ts",
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(hierarchy.len(), 2);
/// assert_eq!(hierarchy[0].path, "");
/// assert_eq!(hierarchy[1].path, "Teams");
/// assert_eq!(hierarchy[1].parent, None);
/// ```
pub fn generate_folder_hierarchy<F, G>(
    folder_paths: &[F],
    base_url: &str,
    file_paths: &[G],
) -> Result<Vec<FolderMetadata>, PathError>
where
    F: AsRef<str>,
    G: AsRef<str>,
{
    if folder_paths.is_empty() {
        return Ok(Vec::new());
    }

    let base = normalize(base_url);
    let files: Vec<String> = file_paths.iter().map(|f| normalize(f.as_ref())).collect();

    let mut records = Vec::with_capacity(folder_paths.len());
    for folder_path in folder_paths {
        let folder = normalize(folder_path.as_ref());

        let path = if folder == base {
            String::new()
        } else {
            relative_path(&base, &folder)?
        };

        let parent = if folder == base {
            None
        } else {
            let containing = parent_dir(&folder);
            if containing == base {
                None
            } else {
                Some(relative_path(&base, containing)?)
            }
        };

        let own_files: Vec<String> = files
            .iter()
            .filter(|file| parent_dir(file) == folder)
            .cloned()
            .collect();

        records.push(FolderMetadata {
            path,
            files: own_files,
            parent,
        });
    }

    debug!(folders = records.len(), base = %base, "generated folder hierarchy");
    Ok(records)
}

/// Folder graph stages: flat hierarchy, forest construction, layout merging
///
/// The graph stages sit between the raw path lists and the route
/// materializer. All of them are pure transformations over owned data.
use tracing::debug;

pub mod hierarchy;
pub mod tree;

pub use hierarchy::{generate_folder_hierarchy, FolderMetadata};
pub use tree::{build_folder_tree_from_hierarchy, map_nodes, FolderData, FolderNode};

use crate::route::pattern::{classify_segment, SegmentKind};

/// Absorbs layout-group children into their parents
///
/// A folder whose name is wrapped in parentheses (`(team-details)`) is
/// a *layout group*: it configures its enclosing route's rendering but
/// contributes no URL segment. At every level of the forest, the first
/// child whose path contains a parenthesized component is folded into
/// its parent — the parent's `files` are replaced by the child's, and
/// the child is removed.
///
/// Applying this twice yields the same forest as applying it once: the
/// absorbed child is gone, and the parent's own path is untouched.
///
/// # Examples
///
/// ```
/// use routegen::graph::{merge_layout_nodes, FolderData, FolderNode};
///
/// let forest = vec![FolderNode {
///     parent: Some("Teams".into()),
///     data: FolderData { path: "Teams/[id]".into(), files: vec![] },
///     children: vec![FolderNode {
///         parent: Some("Teams/[id]".into()),
///         data: FolderData {
///             path: "Teams/[id]/(team-details)".into(),
///             files: vec!["team-details-layout.component.ts".into()],
///         },
///         children: vec![],
///     }],
/// }];
///
/// let merged = merge_layout_nodes(forest);
/// assert_eq!(merged[0].data.files, vec!["team-details-layout.component.ts"]);
/// assert!(merged[0].children.is_empty());
/// ```
pub fn merge_layout_nodes(forest: Vec<FolderNode>) -> Vec<FolderNode> {
    map_nodes(forest, &|mut node| {
        let layout_index = node
            .children
            .iter()
            .position(|child| has_layout_segment(&child.data.path));

        if let Some(index) = layout_index {
            let layout_child = node.children.remove(index);
            debug!(parent = %node.data.path, layout = %layout_child.data.path, "merged layout node");
            node.data.files = layout_child.data.files;
        }
        node
    })
}

fn has_layout_segment(path: &str) -> bool {
    path.split('/')
        .any(|segment| matches!(classify_segment(segment), SegmentKind::Layout(_)))
}

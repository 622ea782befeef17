//! # Routegen
//!
//! Turns a page directory's folder conventions into a nested route
//! configuration tree:
//!
//! - Dynamic segments (`Teams/[id]` → `:id`)
//! - Catch-all segments (`[...custom]` → `**`, configurable)
//! - Layout groups (`(team-details)` — absorbed, no URL segment)
//! - Index routes via synthesized self nodes (`route: ""`)
//!
//! ## Pipeline
//!
//! The whole crate is a synchronous, I/O-free transformation pipeline
//! over in-memory path lists:
//!
//! flat paths → folder hierarchy → folder forest → layout-merged
//! forest → route forest → flat route list
//!
//! Each stage is a pure function of its inputs; the pipeline may be run
//! repeatedly or in parallel on disjoint inputs without coordination.
//! File-system scanning and output emission are external collaborators
//! (see the `routegen` binary crate).
//!
//! ## Example
//!
//! ```
//! use routegen::generate_route_forest;
//!
//! let routes = generate_route_forest(
//!     &["src/pages", "src/pages/Teams", "src/pages/Teams/[id]"],
//!     "src/pages",
//!     &[
//!         "src/pages/dashboard-page.component.ts",
//!         "src/pages/Teams/team-catalog-page.component.ts",
//!         "src/pages/Teams/[id]/team-overview-page.component.ts",
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(routes[1].route, "Teams");
//! assert_eq!(routes[1].children[1].route, ":id");
//! ```

use tracing::debug;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod graph;
pub mod path;
pub mod route;

// Re-export the pipeline surface at the crate root
pub use graph::{
    build_folder_tree_from_hierarchy, generate_folder_hierarchy, map_nodes, merge_layout_nodes,
    FolderData, FolderMetadata, FolderNode,
};
pub use path::{base_url, extract_folders, relative_path, remove_extension, PathError};
pub use route::{
    classify_segment, component_identifier, flatten_routes, map_nodes_to_routes,
    map_nodes_to_routes_with, CatchAllStyle, FlatRoute, Route, RouteSyntax, SegmentKind,
};

// ============================================================================
// Pipeline
// ============================================================================

/// Runs the full pipeline with default route syntax
///
/// See [`generate_route_forest_with`].
pub fn generate_route_forest<F, G>(
    folder_paths: &[F],
    base_url: &str,
    file_paths: &[G],
) -> Result<Vec<Route>, PathError>
where
    F: AsRef<str>,
    G: AsRef<str>,
{
    generate_route_forest_with(folder_paths, base_url, file_paths, RouteSyntax::default())
}

/// Runs the full pipeline: hierarchy → tree → layout merge → routes
///
/// `folder_paths` must include the base directory itself and every
/// folder in between (a scanner naturally supplies all of them).
/// `file_paths` are attributed to the folder that contains each file
/// directly.
///
/// # Errors
///
/// Propagates [`PathError`] from folder relativization; everything past
/// the hierarchy stage is total.
pub fn generate_route_forest_with<F, G>(
    folder_paths: &[F],
    base_url: &str,
    file_paths: &[G],
    syntax: RouteSyntax,
) -> Result<Vec<Route>, PathError>
where
    F: AsRef<str>,
    G: AsRef<str>,
{
    let hierarchy = generate_folder_hierarchy(folder_paths, base_url, file_paths)?;
    let forest = build_folder_tree_from_hierarchy(&hierarchy);
    let forest = merge_layout_nodes(forest);
    let routes = map_nodes_to_routes_with(&forest, syntax);
    debug!(
        folders = folder_paths.len(),
        files = file_paths.len(),
        roots = routes.len(),
        "generated route forest"
    );
    Ok(routes)
}

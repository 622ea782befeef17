/// Folder forest → route forest conversion
///
/// Derives component identifiers from file names, translates the
/// folder-naming grammar into route segments, and carries the tree
/// shape over unchanged. Layout groups are expected to be merged away
/// before this stage; a `(group)` segment that still reaches it is
/// treated as a literal.
use tracing::debug;

use crate::graph::FolderNode;
use crate::path::remove_extension;
use crate::route::pattern::{classify_segment, SegmentKind};
use crate::route::Route;

/// Target syntax for catch-all segments
///
/// Routing frameworks disagree on the wildcard spelling, so it is a
/// configuration knob rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatchAllStyle {
    /// `**` (Angular-style wildcard)
    #[default]
    DoubleStar,
    /// `*`
    Star,
}

impl CatchAllStyle {
    fn token(self) -> &'static str {
        match self {
            CatchAllStyle::DoubleStar => "**",
            CatchAllStyle::Star => "*",
        }
    }
}

/// Segment-syntax configuration for the target routing framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteSyntax {
    pub catch_all: CatchAllStyle,
}

/// Converts a folder forest into a route forest with default syntax
///
/// See [`map_nodes_to_routes_with`] for the conversion rules.
pub fn map_nodes_to_routes(forest: &[FolderNode]) -> Vec<Route> {
    map_nodes_to_routes_with(forest, RouteSyntax::default())
}

/// Converts a folder forest into a route forest
///
/// Per node:
///
/// - a non-empty `files` list binds `file` to its first entry and
///   `component` to the identifier derived from that file's base name;
///   a `*.providers.*` entry binds the `providers` pair the same way
/// - self nodes get `route: ""`, forest roots keep their full relative
///   path, and every other node gets its final path segment translated
///   through the grammar (`[name]` → `:name`, `[...name]` → the
///   configured wildcard, anything else verbatim)
/// - children are converted recursively, order preserved
///
/// # Examples
///
/// ```
/// use routegen::graph::{FolderData, FolderNode};
/// use routegen::route::map_nodes_to_routes;
///
/// let forest = vec![FolderNode {
///     parent: Some("Teams".into()),
///     data: FolderData {
///         path: "Teams/[id]".into(),
///         files: vec!["src/pages/Teams/[id]/team-overview-page.component.ts".into()],
///     },
///     children: vec![],
/// }];
///
/// let routes = map_nodes_to_routes(&forest);
/// assert_eq!(routes[0].route, ":id");
/// assert_eq!(routes[0].component.as_deref(), Some("TeamOverviewPageComponent"));
/// ```
pub fn map_nodes_to_routes_with(forest: &[FolderNode], syntax: RouteSyntax) -> Vec<Route> {
    let routes: Vec<Route> = forest.iter().map(|node| to_route(node, syntax)).collect();
    debug!(roots = routes.len(), "materialized route forest");
    routes
}

fn to_route(node: &FolderNode, syntax: RouteSyntax) -> Route {
    let (component, file) = component_binding(&node.data.files);
    let (providers, providers_file) = providers_binding(&node.data.files);

    Route {
        component,
        file,
        providers,
        providers_file,
        route: route_segment(node, syntax),
        children: node
            .children
            .iter()
            .map(|child| to_route(child, syntax))
            .collect(),
    }
}

fn component_binding(files: &[String]) -> (Option<String>, Option<String>) {
    match files.first() {
        Some(file) => (Some(component_identifier(file)), Some(file.clone())),
        None => (None, None),
    }
}

fn providers_binding(files: &[String]) -> (Option<String>, Option<String>) {
    match files.iter().find(|file| is_providers_file(file)) {
        Some(file) => (Some(component_identifier(file)), Some(file.clone())),
        None => (None, None),
    }
}

fn is_providers_file(path: &str) -> bool {
    remove_extension(path).ends_with(".providers")
}

fn route_segment(node: &FolderNode, syntax: RouteSyntax) -> String {
    if node.is_self_node() {
        return String::new();
    }

    let segment = match node.parent.as_deref() {
        // Forest roots are single-segment by construction
        None => node.data.path.as_str(),
        Some(parent) => node
            .data
            .path
            .strip_prefix(parent)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(node.data.path.as_str()),
    };

    match classify_segment(segment) {
        SegmentKind::CatchAll(_) => syntax.catch_all.token().to_string(),
        SegmentKind::Dynamic(name) => format!(":{name}"),
        SegmentKind::Layout(_) | SegmentKind::Literal(_) => segment.to_string(),
    }
}

/// Derives a PascalCase identifier from a file path
///
/// The base name is stripped of its extension, split on `-` and `.`,
/// and each token is capitalized and concatenated:
/// `team-catalog-page.component.ts` → `TeamCatalogPageComponent`.
///
/// # Examples
///
/// ```
/// use routegen::route::component_identifier;
///
/// assert_eq!(
///     component_identifier("src/pages/dashboard-page.component.ts"),
///     "DashboardPageComponent"
/// );
/// ```
pub fn component_identifier(path: &str) -> String {
    let stem = remove_extension(path);
    let name = stem.rsplit('/').next().unwrap_or_default();

    name.split(['-', '.'])
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

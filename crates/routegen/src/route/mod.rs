/// Route types and the pre-order flattener
///
/// The route forest is the pipeline's final product, handed to an
/// external emitter. Serialization derives live here so an emitter can
/// dump the forest directly (field names follow the camelCase
/// convention of route-configuration files).
use serde::Serialize;

pub mod materialize;
pub mod pattern;

pub use materialize::{
    component_identifier, map_nodes_to_routes, map_nodes_to_routes_with, CatchAllStyle, RouteSyntax,
};
pub use pattern::{classify_segment, SegmentKind};

/// One node of the route forest
///
/// `route` is a single path segment, except for forest roots whose
/// `route` is their full base-relative path (roots sit one level below
/// the base by construction, so that is still a single segment).
/// `component`/`file` are bound only when the originating folder owned
/// a file; `providers`/`providers_file` follow the same convention for
/// a providers file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers_file: Option<String>,
    pub route: String,
    pub children: Vec<Route>,
}

impl Route {
    /// Total node count of this subtree, the route itself included
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Route::count).sum::<usize>()
    }
}

/// A route with its substructure dropped
///
/// What [`flatten_routes`] emits: the component binding and the segment,
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRoute {
    pub component: Option<String>,
    pub file: Option<String>,
    pub route: String,
}

/// Flattens a route forest depth-first, pre-order
///
/// Each route is emitted before its children; children follow in
/// order. The output length always equals the total node count of the
/// forest.
///
/// # Examples
///
/// ```
/// use routegen::route::{flatten_routes, Route};
///
/// let forest = vec![Route {
///     component: None,
///     file: None,
///     providers: None,
///     providers_file: None,
///     route: "Teams".into(),
///     children: vec![Route {
///         component: Some("TeamCatalogPageComponent".into()),
///         file: Some("src/pages/Teams/team-catalog-page.component.ts".into()),
///         providers: None,
///         providers_file: None,
///         route: "".into(),
///         children: vec![],
///     }],
/// }];
///
/// let flat = flatten_routes(&forest);
/// assert_eq!(flat.len(), 2);
/// assert_eq!(flat[0].route, "Teams");
/// assert_eq!(flat[1].component.as_deref(), Some("TeamCatalogPageComponent"));
/// ```
pub fn flatten_routes(forest: &[Route]) -> Vec<FlatRoute> {
    let mut flat = Vec::new();
    for route in forest {
        flatten_into(route, &mut flat);
    }
    flat
}

fn flatten_into(route: &Route, flat: &mut Vec<FlatRoute>) {
    flat.push(FlatRoute {
        component: route.component.clone(),
        file: route.file.clone(),
        route: route.route.clone(),
    });
    for child in &route.children {
        flatten_into(child, flat);
    }
}

/// Folder forest construction and the generic post-order mapper
///
/// Turns the flat [`FolderMetadata`] list into a forest of
/// [`FolderNode`]s. A folder that owns descendant folders becomes a
/// *container*: its own files move into a synthesized *self node*
/// inserted as the first child, so the folder can act both as a route
/// level and as its own index route.
use super::hierarchy::FolderMetadata;

/// Per-node payload of the folder forest
///
/// Unlike [`FolderMetadata`] this carries no parent link; the tree
/// shape makes it redundant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderData {
    pub path: String,
    pub files: Vec<String>,
}

/// One node of the folder forest
///
/// `parent` is a path back-reference, not a pointer, so the structure
/// stays acyclic and freely clonable. A node whose `parent` equals its
/// own `data.path` is a self node (see [`FolderNode::is_self_node`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    pub parent: Option<String>,
    pub data: FolderData,
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// True for synthesized self nodes (a container's own index entry)
    ///
    /// Self nodes are always leaves and always the first child of their
    /// container.
    pub fn is_self_node(&self) -> bool {
        self.parent.as_deref() == Some(self.data.path.as_str())
    }

    /// Total node count of this subtree, the node itself included
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(FolderNode::count).sum::<usize>()
    }
}

/// Builds the folder forest from the flat hierarchy list
///
/// Roots are the records whose `parent` is `None`, in input order.
/// Each record is consumed exactly once as a node; child lookup is by
/// `parent` path equality, preserving the records' relative order.
///
/// # Examples
///
/// ```
/// use routegen::graph::{build_folder_tree_from_hierarchy, FolderMetadata};
///
/// let forest = build_folder_tree_from_hierarchy(&[
///     FolderMetadata {
///         path: "Teams".into(),
///         files: vec!["src/pages/Teams/team-catalog-page.component.ts".into()],
///         parent: None,
///     },
///     FolderMetadata {
///         path: "Teams/[id]".into(),
///         files: vec!["src/pages/Teams/[id]/team-overview-page.component.ts".into()],
///         parent: Some("Teams".into()),
///     },
/// ]);
///
/// // Container files moved into the synthesized self node
/// assert!(forest[0].data.files.is_empty());
/// assert!(forest[0].children[0].is_self_node());
/// assert_eq!(forest[0].children.len(), 2);
/// ```
pub fn build_folder_tree_from_hierarchy(records: &[FolderMetadata]) -> Vec<FolderNode> {
    records
        .iter()
        .filter(|record| record.parent.is_none())
        .map(|record| build_node(record, records))
        .collect()
}

fn build_node(record: &FolderMetadata, records: &[FolderMetadata]) -> FolderNode {
    let child_records: Vec<&FolderMetadata> = records
        .iter()
        .filter(|other| other.parent.as_deref() == Some(record.path.as_str()))
        .collect();

    if child_records.is_empty() {
        return FolderNode {
            parent: record.parent.clone(),
            data: FolderData {
                path: record.path.clone(),
                files: record.files.clone(),
            },
            children: Vec::new(),
        };
    }

    // The container keeps the route level; its files move into a self
    // node that always sits first among the children.
    let self_node = FolderNode {
        parent: Some(record.path.clone()),
        data: FolderData {
            path: record.path.clone(),
            files: record.files.clone(),
        },
        children: Vec::new(),
    };

    let mut children = Vec::with_capacity(child_records.len() + 1);
    children.push(self_node);
    children.extend(child_records.into_iter().map(|child| build_node(child, records)));

    FolderNode {
        parent: record.parent.clone(),
        data: FolderData {
            path: record.path.clone(),
            files: Vec::new(),
        },
        children,
    }
}

/// Post-order, depth-first transform over a folder forest
///
/// Children are mapped first; `transform` then receives the node with
/// its already-mapped children and its return value replaces the node
/// wholesale. The transform may rewrite `data` and may reorder, insert
/// or delete children. The input forest is consumed; the result is a
/// newly assembled forest.
///
/// # Examples
///
/// ```
/// use routegen::graph::{map_nodes, FolderData, FolderNode};
///
/// let forest = vec![FolderNode {
///     parent: None,
///     data: FolderData { path: "Teams".into(), files: vec![] },
///     children: vec![],
/// }];
///
/// let tagged = map_nodes(forest, &|mut node| {
///     node.data.files.push("extra.ts".into());
///     node
/// });
/// assert_eq!(tagged[0].data.files, vec!["extra.ts"]);
/// ```
pub fn map_nodes<F>(nodes: Vec<FolderNode>, transform: &F) -> Vec<FolderNode>
where
    F: Fn(FolderNode) -> FolderNode,
{
    nodes
        .into_iter()
        .map(|node| {
            let FolderNode {
                parent,
                data,
                children,
            } = node;
            let children = map_nodes(children, transform);
            transform(FolderNode {
                parent,
                data,
                children,
            })
        })
        .collect()
}

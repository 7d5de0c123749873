//! The write-once diagram builder.

use iamgraph_error::{Error, ErrorKind, Result};

use crate::types::{AccessLevel, EdgeColor, EdgeStyle, NodeKind};

/// Identifier of a declared node.
///
/// Handed out by [`Diagram::node`] in declaration order; indexes into the
/// owning diagram's node list. An id is only meaningful for the diagram
/// that produced it, which [`Diagram::validate`] enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Numeric value of the id
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Index into the node list
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

/// A declared node: a labeled vertex representing a group, user or resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Display label, may span multiple lines
    pub label: String,
}

/// Styling of a single edge.
///
/// Constructed through one of the three edge-family constructors rather
/// than field-by-field, so that each family carries consistent styling:
/// invisible ordering edges, bold membership edges, labeled access edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAttrs {
    pub style: EdgeStyle,
    pub color: Option<EdgeColor>,
    pub label: Option<AccessLevel>,
    /// Stroke width; `None` inherits the diagram's edge defaults
    pub penwidth: Option<f32>,
}

impl EdgeAttrs {
    /// An invisible layout-ordering edge. Carries no color, label or width.
    pub fn invisible() -> Self {
        Self {
            style: EdgeStyle::Invisible,
            color: None,
            label: None,
            penwidth: None,
        }
    }

    /// A user-to-group membership edge: bold, colored, unlabeled.
    pub fn membership(color: EdgeColor) -> Self {
        Self {
            style: EdgeStyle::Bold,
            color: Some(color),
            label: None,
            penwidth: Some(3.0),
        }
    }

    /// A group-to-resource access edge: colored and labeled with the
    /// permission level granted.
    pub fn access(color: EdgeColor, level: AccessLevel) -> Self {
        Self {
            style: EdgeStyle::Solid,
            color: Some(color),
            label: Some(level),
            penwidth: Some(2.0),
        }
    }

    /// Override the stroke width
    pub fn with_penwidth(mut self, penwidth: f32) -> Self {
        self.penwidth = Some(penwidth);
        self
    }
}

/// A directed, styled edge between two declared nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub attrs: EdgeAttrs,
}

impl Edge {
    /// Check whether this edge exists only to influence layout ordering
    pub fn is_invisible(&self) -> bool {
        self.attrs.style.is_invisible()
    }
}

/// The in-memory diagram: declared nodes, declared edges, and the three
/// Graphviz default-attribute tables.
///
/// The model is write-once, read-once: declarations only append, nothing
/// is mutated afterwards, and the DOT emitter borrows the finished value.
#[derive(Debug, Default)]
pub struct Diagram {
    title: String,
    graph_attr: Vec<(&'static str, String)>,
    node_attr: Vec<(&'static str, String)>,
    edge_attr: Vec<(&'static str, String)>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Open a new diagram build with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Add a graph-level default attribute.
    pub fn graph_attr(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.graph_attr.push((key, value.into()));
        self
    }

    /// Add a node default attribute.
    pub fn node_attr(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.node_attr.push((key, value.into()));
        self
    }

    /// Add an edge default attribute.
    pub fn edge_attr(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.edge_attr.push((key, value.into()));
        self
    }

    /// Declare a node and return its id.
    pub fn node(&mut self, kind: NodeKind, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            label: label.into(),
        });
        id
    }

    /// Declare a directed edge between two previously declared nodes.
    pub fn edge(&mut self, from: NodeId, to: NodeId, attrs: EdgeAttrs) -> &mut Self {
        self.edges.push(Edge { from, to, attrs });
        self
    }

    /// Declare an invisible ordering chain over sibling nodes, forcing the
    /// given left-to-right layout order.
    pub fn chain(&mut self, ids: &[NodeId]) -> &mut Self {
        for pair in ids.windows(2) {
            self.edge(pair[0], pair[1], EdgeAttrs::invisible());
        }
        self
    }

    /// Diagram title, rendered as the graph label
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Declared nodes, in declaration order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Declared edges, in declaration order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Graph-level default attributes
    pub fn graph_attrs(&self) -> &[(&'static str, String)] {
        &self.graph_attr
    }

    /// Node default attributes
    pub fn node_attrs(&self) -> &[(&'static str, String)] {
        &self.node_attr
    }

    /// Edge default attributes
    pub fn edge_attrs(&self) -> &[(&'static str, String)] {
        &self.edge_attr
    }

    /// Structural check of the declared graph, performable without the
    /// external renderer:
    ///
    /// - every edge endpoint resolves to a declared node
    /// - invisible edges carry no label
    /// - visible edges carry a color
    pub fn validate(&self) -> Result<()> {
        for (idx, edge) in self.edges.iter().enumerate() {
            for (endpoint, id) in [("source", edge.from), ("target", edge.to)] {
                if id.as_usize() >= self.nodes.len() {
                    return Err(Error::new(
                        ErrorKind::InvalidNodeRef,
                        format!("edge endpoint references undeclared node {}", id.as_u32()),
                    )
                    .with_operation("diagram::validate")
                    .with_context("edge", idx.to_string())
                    .with_context("endpoint", endpoint));
                }
            }

            if edge.attrs.style.is_invisible() {
                if edge.attrs.label.is_some() {
                    return Err(Error::new(
                        ErrorKind::GraphInvalid,
                        "invisible edge carries a label",
                    )
                    .with_operation("diagram::validate")
                    .with_context("edge", idx.to_string()));
                }
            } else if edge.attrs.color.is_none() {
                return Err(Error::new(
                    ErrorKind::GraphInvalid,
                    "visible edge carries no color",
                )
                .with_operation("diagram::validate")
                .with_context("edge", idx.to_string()));
            }
        }

        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "diagram validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResourceKind;

    fn two_node_diagram() -> (Diagram, NodeId, NodeId) {
        let mut d = Diagram::new("test");
        let a = d.node(NodeKind::Group, "Admins");
        let b = d.node(NodeKind::User, "alice");
        (d, a, b)
    }

    #[test]
    fn test_ids_follow_declaration_order() {
        let (mut d, a, b) = two_node_diagram();
        let c = d.node(NodeKind::Resource(ResourceKind::Storage), "S3 Bucket");

        assert_eq!(a.as_u32(), 0);
        assert_eq!(b.as_u32(), 1);
        assert_eq!(c.as_u32(), 2);
        assert_eq!(d.nodes().len(), 3);
    }

    #[test]
    fn test_chain_declares_invisible_edges() {
        let mut d = Diagram::new("test");
        let ids: Vec<NodeId> = (0..4)
            .map(|i| d.node(NodeKind::Group, format!("g{i}")))
            .collect();
        d.chain(&ids);

        assert_eq!(d.edges().len(), 3);
        assert!(d.edges().iter().all(Edge::is_invisible));
        assert!(d.edges().iter().all(|e| e.attrs.label.is_none()));
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_well_formed_graph() {
        let (mut d, a, b) = two_node_diagram();
        d.edge(b, a, EdgeAttrs::membership(EdgeColor::Red));
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dangling_endpoint() {
        let (mut d, a, _) = two_node_diagram();
        d.edge(a, NodeId(99), EdgeAttrs::membership(EdgeColor::Blue));

        let err = d.validate().unwrap_err();
        assert_eq!(err.kind(), iamgraph_error::ErrorKind::InvalidNodeRef);
        assert_eq!(err.context()[1], ("endpoint", "target".to_string()));
    }

    #[test]
    fn test_validate_rejects_labeled_invisible_edge() {
        let (mut d, a, b) = two_node_diagram();
        let mut attrs = EdgeAttrs::invisible();
        attrs.label = Some(AccessLevel::ReadOnly);
        d.edge(a, b, attrs);

        let err = d.validate().unwrap_err();
        assert_eq!(err.kind(), iamgraph_error::ErrorKind::GraphInvalid);
    }

    #[test]
    fn test_validate_rejects_colorless_visible_edge() {
        let (mut d, a, b) = two_node_diagram();
        let mut attrs = EdgeAttrs::access(EdgeColor::Green, AccessLevel::ReadOnly);
        attrs.color = None;
        d.edge(a, b, attrs);

        let err = d.validate().unwrap_err();
        assert_eq!(err.kind(), iamgraph_error::ErrorKind::GraphInvalid);
    }

    #[test]
    fn test_edge_family_constructors() {
        let m = EdgeAttrs::membership(EdgeColor::Orange);
        assert_eq!(m.style, EdgeStyle::Bold);
        assert_eq!(m.penwidth, Some(3.0));
        assert!(m.label.is_none());

        let a = EdgeAttrs::access(EdgeColor::Blue, AccessLevel::FullAccess).with_penwidth(2.5);
        assert_eq!(a.penwidth, Some(2.5));
        assert_eq!(a.label, Some(AccessLevel::FullAccess));

        let i = EdgeAttrs::invisible();
        assert!(i.color.is_none());
        assert!(i.penwidth.is_none());
    }
}

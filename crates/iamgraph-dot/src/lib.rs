//! DOT emission for iamgraph diagrams.
//!
//! This crate turns a finished [`Diagram`] into Graphviz DOT text. Emission
//! is deterministic: nodes and edges appear in declaration order, so the
//! same diagram always produces byte-identical output.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities and the [`DotBuilder`]

mod dot;

use iamgraph_model::Diagram;

pub use dot::{DotBuilder, escape_label, fill_for_kind, sanitize_id, shape_for_kind};

// ============================================================================
// Public API
// ============================================================================

/// Render the diagram to DOT format.
///
/// Layout of the emitted text: graph attributes (the diagram title becomes
/// the graph label), node/edge default blocks, all nodes, all edges. Node
/// identifiers are `n{index}` in declaration order.
pub fn render_diagram(diagram: &Diagram) -> String {
    let mut builder = DotBuilder::new(&sanitize_id(diagram.title()));

    for (key, value) in diagram.graph_attrs() {
        builder.attr(key, value);
    }
    builder.attr("label", diagram.title());
    builder.blank();

    let node_defaults = borrow_pairs(diagram.node_attrs());
    let edge_defaults = borrow_pairs(diagram.edge_attrs());
    if !node_defaults.is_empty() {
        builder.node_defaults(&node_defaults);
    }
    if !edge_defaults.is_empty() {
        builder.edge_defaults(&edge_defaults);
    }
    if !node_defaults.is_empty() || !edge_defaults.is_empty() {
        builder.blank();
    }

    for (idx, node) in diagram.nodes().iter().enumerate() {
        builder.node_full(
            &format!("n{idx}"),
            &[
                ("label", node.label.as_str()),
                ("shape", shape_for_kind(node.kind)),
                ("style", "filled"),
                ("fillcolor", fill_for_kind(node.kind)),
            ],
        );
    }
    builder.blank();

    for edge in diagram.edges() {
        let from = format!("n{}", edge.from.as_u32());
        let to = format!("n{}", edge.to.as_u32());

        let penwidth = edge.attrs.penwidth.map(|w| format!("{w}"));
        let mut attrs: Vec<(&str, &str)> = vec![("style", edge.attrs.style.as_str())];
        if let Some(color) = edge.attrs.color {
            attrs.push(("color", color.as_str()));
        }
        if let Some(label) = edge.attrs.label {
            attrs.push(("label", label.as_str()));
        }
        if let Some(ref penwidth) = penwidth {
            attrs.push(("penwidth", penwidth));
        }

        builder.edge(&from, &to, &attrs);
    }

    let output = builder.finish();
    tracing::debug!(
        nodes = diagram.nodes().len(),
        edges = diagram.edges().len(),
        bytes = output.len(),
        "dot emitted"
    );
    output
}

fn borrow_pairs<'a>(attrs: &'a [(&'static str, String)]) -> Vec<(&'a str, &'a str)> {
    attrs.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iamgraph_model::{AccessLevel, EdgeAttrs, EdgeColor, NodeKind, ResourceKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_small_diagram() {
        let mut d = Diagram::new("Demo");
        d.graph_attr("rankdir", "LR");
        let group = d.node(NodeKind::Group, "Admins\n• all services");
        let user = d.node(NodeKind::User, "alice");
        d.edge(user, group, EdgeAttrs::membership(EdgeColor::Red));

        let expected = "digraph Demo {\n\
                        \x20 rankdir=\"LR\";\n\
                        \x20 label=\"Demo\";\n\
                        \n\
                        \x20 n0[label=\"Admins\\n• all services\", shape=\"tab\", style=\"filled\", fillcolor=\"#ffe6cc\"];\n\
                        \x20 n1[label=\"alice\", shape=\"ellipse\", style=\"filled\", fillcolor=\"#dae8fc\"];\n\
                        \n\
                        \x20 n1 -> n0 [style=\"bold\", color=\"red\", penwidth=\"3\"];\n\
                        }\n";
        assert_eq!(render_diagram(&d), expected);
    }

    #[test]
    fn test_invisible_edges_carry_no_label() {
        let mut d = Diagram::new("chain");
        let a = d.node(NodeKind::Resource(ResourceKind::Compute), "EC2 Instances");
        let b = d.node(NodeKind::Resource(ResourceKind::Database), "RDS Database");
        d.chain(&[a, b]);

        let dot = render_diagram(&d);
        assert!(dot.contains("n0 -> n1 [style=\"invis\"];"));
        assert!(!dot.contains("label=\"\""));
    }

    #[test]
    fn test_access_edge_attributes() {
        let mut d = Diagram::new("access");
        let g = d.node(NodeKind::Group, "Developers-Team");
        let s3 = d.node(NodeKind::Resource(ResourceKind::Storage), "S3 Bucket");
        d.edge(g, s3, EdgeAttrs::access(EdgeColor::Green, AccessLevel::ReadWrite));

        let dot = render_diagram(&d);
        assert!(dot.contains(
            "n0 -> n1 [style=\"solid\", color=\"green\", label=\"Read/Write\", penwidth=\"2\"];"
        ));
    }

    #[test]
    fn test_defaults_blocks_emitted() {
        let mut d = Diagram::new("defaults");
        d.node_attr("fontsize", "16").node_attr("fontname", "Arial Bold");
        d.edge_attr("penwidth", "2.0");
        d.node(NodeKind::User, "bob");

        let dot = render_diagram(&d);
        assert!(dot.contains("  node [fontsize=\"16\", fontname=\"Arial Bold\"];\n"));
        assert!(dot.contains("  edge [penwidth=\"2.0\"];\n"));
    }

    #[test]
    fn test_emission_is_deterministic() {
        let mut d = Diagram::new("det");
        let g = d.node(NodeKind::Group, "QA-Team");
        let cw = d.node(NodeKind::Resource(ResourceKind::Monitoring), "CloudWatch");
        d.edge(g, cw, EdgeAttrs::access(EdgeColor::Purple, AccessLevel::Monitoring));

        assert_eq!(render_diagram(&d), render_diagram(&d));
    }
}

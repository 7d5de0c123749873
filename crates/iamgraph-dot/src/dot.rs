//! DOT format utilities for diagram emission.

use std::fmt::Write;

use iamgraph_model::{NodeKind, ResourceKind};

/// Map NodeKind to DOT shape.
///
/// The shape stands in for the original icon set: groups read as folders,
/// users as plain ovals, resources as service-flavored solids.
pub fn shape_for_kind(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Group => "tab",
        NodeKind::User => "ellipse",
        NodeKind::Resource(ResourceKind::Database) => "cylinder",
        NodeKind::Resource(ResourceKind::Storage) => "folder",
        NodeKind::Resource(_) => "box3d",
    }
}

/// Map NodeKind to DOT fill color.
pub fn fill_for_kind(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Group => "#ffe6cc",
        NodeKind::User => "#dae8fc",
        NodeKind::Resource(_) => "#d5e8d4",
    }
}

/// Sanitize a string to be a valid DOT identifier.
/// Replaces any non-alphanumeric character with underscore.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Open a new digraph with the given (already sanitized) name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Add a node default-attribute block.
    pub fn node_defaults(&mut self, attrs: &[(&str, &str)]) -> &mut Self {
        self.defaults_block("node", attrs)
    }

    /// Add an edge default-attribute block.
    pub fn edge_defaults(&mut self, attrs: &[(&str, &str)]) -> &mut Self {
        self.defaults_block("edge", attrs)
    }

    fn defaults_block(&mut self, target: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{target} [");
        write_attr_list(&mut self.output, attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a simple node with just an ID and label.
    pub fn node(&mut self, id: &str, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}[label=\"{}\"];", id, escape_label(label));
        self
    }

    /// Add a node with full attributes.
    pub fn node_full(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{id}[");
        write_attr_list(&mut self.output, attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add an edge, attributed when `attrs` is non-empty.
    pub fn edge(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        if attrs.is_empty() {
            let _ = writeln!(self.output, "{from} -> {to};");
        } else {
            let _ = write!(self.output, "{from} -> {to} [");
            write_attr_list(&mut self.output, attrs);
            self.output.push_str("];\n");
        }
        self
    }

    /// Close the digraph and return the finished DOT text.
    pub fn finish(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

fn write_attr_list(output: &mut String, attrs: &[(&str, &str)]) {
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{}=\"{}\"", key, escape_label(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id("Group6 Platform - IAM"), "Group6_Platform___IAM");
        assert_eq!(sanitize_id("already_fine_42"), "already_fine_42");
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("a\nb"), "a\\nb");
        assert_eq!(escape_label(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_label(r"back\slash"), r"back\\slash");
    }

    #[test]
    fn test_builder_output() {
        let mut b = DotBuilder::new("demo");
        b.attr("rankdir", "LR");
        b.node("n0", "Admins");
        b.edge("n0", "n1", &[("style", "bold"), ("color", "red")]);
        b.edge("n1", "n2", &[]);
        let dot = b.finish();

        assert!(dot.starts_with("digraph demo {\n"));
        assert!(dot.contains("  rankdir=\"LR\";\n"));
        assert!(dot.contains("  n0[label=\"Admins\"];\n"));
        assert!(dot.contains("  n0 -> n1 [style=\"bold\", color=\"red\"];\n"));
        assert!(dot.contains("  n1 -> n2;\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_shape_mapping() {
        assert_eq!(shape_for_kind(NodeKind::Group), "tab");
        assert_eq!(shape_for_kind(NodeKind::Resource(ResourceKind::Database)), "cylinder");
        assert_eq!(shape_for_kind(NodeKind::Resource(ResourceKind::Compute)), "box3d");
    }
}

//! Core types for diagram building.

use strum_macros::{Display, IntoStaticStr};

// Node kinds

/// AWS service category represented by a resource node.
///
/// The category determines the Graphviz shape the renderer picks for the
/// node, standing in for the original icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// EC2 instances
    Compute,
    /// RDS databases
    Database,
    /// S3 buckets
    Storage,
    /// Elastic load balancers
    LoadBalancer,
    /// Auto scaling groups
    AutoScaling,
    /// CloudWatch
    Monitoring,
    /// CloudTrail
    AuditLog,
}

/// Kind of a diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An IAM permission group
    Group,
    /// An individual account/persona
    User,
    /// An AWS resource category
    Resource(ResourceKind),
}

impl NodeKind {
    /// Check whether this node represents an actor (group or user) rather
    /// than a resource.
    pub fn is_actor(&self) -> bool {
        matches!(self, NodeKind::Group | NodeKind::User)
    }
}

// Edge styling

/// Edge color, encoding the actor category that owns the relationship
/// (red=root, blue=devops, green=developer, purple=QA, orange=security).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EdgeColor {
    Red,
    Blue,
    Green,
    Purple,
    Orange,
}

impl EdgeColor {
    /// Returns the color as the Graphviz color name
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Line style of an edge, in Graphviz `style=` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr, Display)]
pub enum EdgeStyle {
    /// Membership edges
    #[strum(serialize = "bold")]
    Bold,
    /// Access-grant edges
    #[default]
    #[strum(serialize = "solid")]
    Solid,
    /// Layout-ordering edges, never drawn
    #[strum(serialize = "invis")]
    Invisible,
}

impl EdgeStyle {
    /// Returns the style as the Graphviz `style=` value
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check whether edges of this style are drawn at all
    pub fn is_invisible(&self) -> bool {
        matches!(self, EdgeStyle::Invisible)
    }
}

/// Permission level granted by an access edge, rendered as the edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum AccessLevel {
    #[strum(serialize = "Full Access")]
    FullAccess,
    #[strum(serialize = "Read/Write")]
    ReadWrite,
    #[strum(serialize = "Read Only")]
    ReadOnly,
    #[strum(serialize = "Describe")]
    Describe,
    #[strum(serialize = "Monitoring")]
    Monitoring,
}

impl AccessLevel {
    /// Returns the level as the human-readable edge label
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

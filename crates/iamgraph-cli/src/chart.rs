//! The Group6 Platform IAM structure chart.
//!
//! All content is fixed configuration: five IAM groups, five IAM users,
//! seven AWS resource categories, and the membership and access-grant
//! relationships between them. Invisible chains pin the left-to-right
//! order inside each lane so the admin → devops → developer → QA →
//! security hierarchy reads consistently.

use iamgraph_model::{AccessLevel, Diagram, EdgeAttrs, EdgeColor, NodeKind, ResourceKind};

/// Default output filename, overwritten on each run.
pub const DEFAULT_OUTPUT: &str = "group6_iam_structure.png";

/// Diagram title, rendered as the graph label.
pub const TITLE: &str = "Group6 Platform - IAM Structure";

const GRAPH_ATTR: &[(&str, &str)] = &[
    ("fontsize", "20"),
    ("fontname", "Arial Bold"),
    ("splines", "true"),
    ("overlap", "false"),
    ("rankdir", "LR"),
    ("nodesep", "0.8"),
    ("ranksep", "1.5"),
    ("dpi", "300"),
    ("size", "16,10!"),
    ("ratio", "expand"),
];

const NODE_ATTR: &[(&str, &str)] = &[
    ("fontsize", "16"),
    ("fontname", "Arial Bold"),
    ("width", "1.5"),
    ("height", "1.0"),
];

const EDGE_ATTR: &[(&str, &str)] = &[
    ("fontsize", "14"),
    ("fontname", "Arial Bold"),
    ("penwidth", "2.0"),
    ("arrowsize", "1.2"),
];

/// Build the full IAM structure chart.
pub fn iam_structure() -> Diagram {
    let mut d = Diagram::new(TITLE);
    for (key, value) in GRAPH_ATTR.iter().copied() {
        d.graph_attr(key, value);
    }
    for (key, value) in NODE_ATTR.iter().copied() {
        d.node_attr(key, value);
    }
    for (key, value) in EDGE_ATTR.iter().copied() {
        d.edge_attr(key, value);
    }

    // IAM groups
    let root_admins = d.node(NodeKind::Group, "Root-Admins\n• All AWS Services");
    let devops_team = d.node(NodeKind::Group, "DevOps-Team\n• Infrastructure Automation");
    let developers = d.node(NodeKind::Group, "Developers-Team");
    let qa_team = d.node(NodeKind::Group, "QA-Team");
    let security = d.node(NodeKind::Group, "Security-Experts\n• Security Auditing");

    // IAM users
    let root_user = d.node(NodeKind::User, "group6-root-admin\n(System Administrator)");
    let devops_user = d.node(NodeKind::User, "group6-devops\n(DevOps)");
    let dev_user = d.node(NodeKind::User, "group6-dev\n(Developer)");
    let qa_user = d.node(NodeKind::User, "group6-qa\n(QA)");
    let sec_user = d.node(NodeKind::User, "group6-security-expert\n(Security Specialist)");

    // AWS resources
    let ec2 = d.node(NodeKind::Resource(ResourceKind::Compute), "EC2 Instances");
    let rds = d.node(NodeKind::Resource(ResourceKind::Database), "RDS Database");
    let s3 = d.node(NodeKind::Resource(ResourceKind::Storage), "S3 Bucket");
    let elb = d.node(NodeKind::Resource(ResourceKind::LoadBalancer), "Load Balancer");
    let asg = d.node(NodeKind::Resource(ResourceKind::AutoScaling), "Auto Scaling");
    let cloudwatch = d.node(NodeKind::Resource(ResourceKind::Monitoring), "CloudWatch");
    let cloudtrail = d.node(NodeKind::Resource(ResourceKind::AuditLog), "CloudTrail");

    // Lane ordering
    d.chain(&[root_admins, devops_team, developers, qa_team, security]);
    d.chain(&[root_user, devops_user, dev_user, qa_user, sec_user]);
    d.chain(&[ec2, rds, s3, elb]);

    // Group membership
    d.edge(root_user, root_admins, EdgeAttrs::membership(EdgeColor::Red));
    d.edge(devops_user, devops_team, EdgeAttrs::membership(EdgeColor::Blue));
    d.edge(dev_user, developers, EdgeAttrs::membership(EdgeColor::Green));
    d.edge(qa_user, qa_team, EdgeAttrs::membership(EdgeColor::Purple));
    d.edge(sec_user, security, EdgeAttrs::membership(EdgeColor::Orange));

    // DevOps access (infrastructure)
    for resource in [ec2, elb, asg, rds] {
        d.edge(
            devops_team,
            resource,
            EdgeAttrs::access(EdgeColor::Blue, AccessLevel::FullAccess).with_penwidth(2.5),
        );
    }

    // Developer access (limited)
    d.edge(
        developers,
        s3,
        EdgeAttrs::access(EdgeColor::Green, AccessLevel::ReadWrite),
    );
    d.edge(
        developers,
        ec2,
        EdgeAttrs::access(EdgeColor::Green, AccessLevel::Describe),
    );
    d.edge(
        developers,
        rds,
        EdgeAttrs::access(EdgeColor::Green, AccessLevel::ReadOnly),
    );

    // QA access (monitoring)
    d.edge(
        qa_team,
        s3,
        EdgeAttrs::access(EdgeColor::Purple, AccessLevel::ReadOnly),
    );
    d.edge(
        qa_team,
        rds,
        EdgeAttrs::access(EdgeColor::Purple, AccessLevel::ReadOnly),
    );
    d.edge(
        qa_team,
        cloudwatch,
        EdgeAttrs::access(EdgeColor::Purple, AccessLevel::Monitoring),
    );

    // Security access (audit)
    d.edge(
        security,
        cloudtrail,
        EdgeAttrs::access(EdgeColor::Orange, AccessLevel::FullAccess).with_penwidth(2.5),
    );
    d.edge(
        security,
        cloudwatch,
        EdgeAttrs::access(EdgeColor::Orange, AccessLevel::FullAccess).with_penwidth(2.5),
    );

    d
}

//! Descriptor tree types.

use std::fmt;

/// Keys the resolver gives meaning to.
///
/// Keys are matched case-insensitively; everything else is [`DescriptorKey::Other`]
/// and is skipped during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKey {
    /// `DESCRIPTION_LIST` - several alternative network paths.
    DescriptionList,
    /// `DESCRIPTION` - one network path.
    Description,
    /// `ADDRESS_LIST` - grouping of addresses.
    AddressList,
    /// `ADDRESS` - one host/port pair.
    Address,
    /// `HOST`
    Host,
    /// `PORT`
    Port,
    /// `CONNECT_DATA` - names the logical database.
    ConnectData,
    /// `SERVICE_NAME`
    ServiceName,
    /// `SID`
    Sid,
    /// Any key without special meaning (`LOAD_BALANCE`, `FAILOVER`, `PROTOCOL`, ...).
    Other,
}

impl DescriptorKey {
    const TABLE: [(&'static str, DescriptorKey); 9] = [
        ("DESCRIPTION_LIST", DescriptorKey::DescriptionList),
        ("DESCRIPTION", DescriptorKey::Description),
        ("ADDRESS_LIST", DescriptorKey::AddressList),
        ("ADDRESS", DescriptorKey::Address),
        ("HOST", DescriptorKey::Host),
        ("PORT", DescriptorKey::Port),
        ("CONNECT_DATA", DescriptorKey::ConnectData),
        ("SERVICE_NAME", DescriptorKey::ServiceName),
        ("SID", DescriptorKey::Sid),
    ];

    /// Classify a raw key.
    pub fn from_key(key: &str) -> Self {
        Self::TABLE
            .iter()
            .find(|(literal, _)| literal.eq_ignore_ascii_case(key))
            .map_or(Self::Other, |(_, kind)| *kind)
    }

    /// Canonical spelling, or `None` for [`DescriptorKey::Other`].
    pub fn literal(&self) -> Option<&'static str> {
        Self::TABLE
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(literal, _)| *literal)
    }
}

/// Value of a descriptor node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorValue {
    /// Plain text such as `1521` or `service`.
    Scalar(String),
    /// Nested nodes in source order. May be empty for `(KEY=)`.
    Children(Vec<DescriptorNode>),
}

/// A `(KEY=value)` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorNode {
    key: String,
    value: DescriptorValue,
}

impl DescriptorNode {
    /// Create a node with a scalar value.
    pub fn scalar(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: DescriptorValue::Scalar(value.into()),
        }
    }

    /// Create a node with child nodes.
    pub fn children(key: impl Into<String>, children: Vec<DescriptorNode>) -> Self {
        Self {
            key: key.into(),
            value: DescriptorValue::Children(children),
        }
    }

    /// The key as written in the source.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The recognized kind of this node's key.
    pub fn kind(&self) -> DescriptorKey {
        DescriptorKey::from_key(&self.key)
    }

    /// Check the key against a recognized kind.
    pub fn is(&self, kind: DescriptorKey) -> bool {
        self.kind() == kind
    }

    /// The node value.
    pub fn value(&self) -> &DescriptorValue {
        &self.value
    }

    /// Scalar text, if this node holds one.
    pub fn as_scalar(&self) -> Option<&str> {
        match &self.value {
            DescriptorValue::Scalar(text) => Some(text),
            DescriptorValue::Children(_) => None,
        }
    }

    /// Child nodes; empty for scalar nodes.
    pub fn child_nodes(&self) -> &[DescriptorNode] {
        match &self.value {
            DescriptorValue::Children(children) => children,
            DescriptorValue::Scalar(_) => &[],
        }
    }

    /// Scalar text of the first direct child of the given kind.
    pub fn child_scalar(&self, kind: DescriptorKey) -> Option<&str> {
        self.child_nodes()
            .iter()
            .filter(|child| child.is(kind))
            .find_map(DescriptorNode::as_scalar)
    }
}

impl fmt::Display for DescriptorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}=", self.key)?;
        match &self.value {
            DescriptorValue::Scalar(text) => write!(f, "{}", text)?,
            DescriptorValue::Children(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
            }
        }
        write!(f, ")")
    }
}

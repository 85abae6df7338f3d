//! Classification of a parsed descriptor and extraction of endpoints.

use tracing::trace;

use super::node::{DescriptorKey, DescriptorNode};
use crate::error::{ResolveError, ResolveResult};
use crate::info::Endpoint;

/// What a descriptor tree describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSpec {
    /// A single `DESCRIPTION`.
    Description(Description),
    /// A `DESCRIPTION_LIST` of alternatives.
    DescriptionList(DescriptionList),
}

impl DatabaseSpec {
    /// Classify a root node by its key.
    pub fn classify(root: &DescriptorNode) -> ResolveResult<Self> {
        match root.kind() {
            DescriptorKey::Description => Ok(Self::Description(Description::from_node(root))),
            DescriptorKey::DescriptionList => {
                Ok(Self::DescriptionList(DescriptionList::from_node(root)))
            }
            _ => Err(ResolveError::UnknownTopLevelShape(root.key().to_string())),
        }
    }

    /// All endpoints in source order.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        match self {
            Self::Description(description) => description.endpoints.clone(),
            Self::DescriptionList(list) => list.endpoints(),
        }
    }

    /// The database id, if any description named one.
    pub fn database_id(&self) -> Option<&str> {
        match self {
            Self::Description(description) => description.database_id(),
            Self::DescriptionList(list) => list.database_id(),
        }
    }

    /// Whether the extracted parts are enough to call the descriptor resolved.
    ///
    /// A single description needs a database id. A list without any database
    /// id still counts when it produced at least one endpoint.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Description(description) => description.database_id.is_some(),
            Self::DescriptionList(list) => {
                list.database_id().is_some() || !list.endpoints().is_empty()
            }
        }
    }
}

/// Endpoints and database id of one `DESCRIPTION`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    endpoints: Vec<Endpoint>,
    database_id: Option<String>,
}

impl Description {
    /// Walk a `DESCRIPTION` node depth-first.
    pub fn from_node(node: &DescriptorNode) -> Self {
        let mut description = Self::default();
        description.collect(node);
        trace!(
            endpoints = description.endpoints.len(),
            database_id = ?description.database_id,
            "description extracted"
        );
        description
    }

    fn collect(&mut self, node: &DescriptorNode) {
        for child in node.child_nodes() {
            match child.kind() {
                DescriptorKey::Address => self.endpoints.push(Endpoint::new(
                    child.child_scalar(DescriptorKey::Host).unwrap_or_default(),
                    child.child_scalar(DescriptorKey::Port).unwrap_or_default(),
                )),
                DescriptorKey::ConnectData => {
                    if self.database_id.is_none() {
                        self.database_id = connect_data_id(child).map(str::to_string);
                    }
                }
                // Nested descriptions belong to a list, not to this one.
                DescriptorKey::Description | DescriptorKey::DescriptionList => {}
                _ => self.collect(child),
            }
        }
    }

    /// Endpoints in source order.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// `SERVICE_NAME`, or `SID` when no service name is given.
    pub fn database_id(&self) -> Option<&str> {
        self.database_id.as_deref()
    }
}

fn connect_data_id(connect_data: &DescriptorNode) -> Option<&str> {
    connect_data
        .child_scalar(DescriptorKey::ServiceName)
        .or_else(|| connect_data.child_scalar(DescriptorKey::Sid))
}

/// The `DESCRIPTION` entries of a `DESCRIPTION_LIST`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionList {
    descriptions: Vec<Description>,
}

impl DescriptionList {
    /// Extract every child `DESCRIPTION`, ignoring control keys.
    pub fn from_node(node: &DescriptorNode) -> Self {
        let descriptions = node
            .child_nodes()
            .iter()
            .filter(|child| child.is(DescriptorKey::Description))
            .map(Description::from_node)
            .collect();
        Self { descriptions }
    }

    /// The descriptions in list order.
    pub fn descriptions(&self) -> &[Description] {
        &self.descriptions
    }

    /// Endpoints of every description, concatenated in list order.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.descriptions
            .iter()
            .flat_map(|description| description.endpoints.iter().cloned())
            .collect()
    }

    /// Database id of the first description that has one.
    pub fn database_id(&self) -> Option<&str> {
        self.descriptions
            .iter()
            .find_map(Description::database_id)
    }
}

//! Parenthesized connect descriptors.
//!
//! A descriptor is a tree of `(KEY=value)` nodes:
//!
//! ```text
//! (DESCRIPTION=
//!   (ADDRESS=(PROTOCOL=TCP)(HOST=1.2.3.4)(PORT=1521))
//!   (CONNECT_DATA=(SERVICE_NAME=service)))
//! ```
//!
//! [`parse_descriptor`] builds the tree and [`DatabaseSpec::classify`] turns it
//! into endpoints and a database id.
//!
//! ```rust
//! use tnsurl_core::descriptor::{DatabaseSpec, parse_descriptor};
//!
//! let root = parse_descriptor(
//!     "(DESCRIPTION=(ADDRESS=(HOST=db1)(PORT=8629))(CONNECT_DATA=(SID=tibero)))",
//! )
//! .unwrap();
//! let spec = DatabaseSpec::classify(&root).unwrap();
//! assert_eq!(spec.endpoints()[0].to_string(), "db1:8629");
//! assert_eq!(spec.database_id(), Some("tibero"));
//! ```

mod node;
mod parser;
mod spec;

pub use node::{DescriptorKey, DescriptorNode, DescriptorValue};
pub use parser::{DescriptorParser, MAX_DEPTH, MAX_DEPTH_LIMIT, parse_descriptor};
pub use spec::{DatabaseSpec, Description, DescriptionList};

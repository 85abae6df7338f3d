//! # tnsurl
//!
//! Resolve Tibero JDBC connect strings into the endpoints and database id
//! they name.
//!
//! tnsurl provides:
//! - Flat URL resolution (`jdbc:tibero:thin:@host:port:SID`)
//! - TNS descriptor parsing (`DESCRIPTION`, `DESCRIPTION_LIST`, `ADDRESS_LIST`)
//! - A total resolver: bad input yields an incomplete result, never a panic
//! - `tnsurl.toml` configuration and a pluggable URL parser registry
//!
//! ## Quick Start
//!
//! ```rust
//! use tnsurl::prelude::*;
//!
//! let info = resolve(Some("jdbc:tibero:thin:scott/tiger@db.internal:8629/orders"));
//!
//! assert!(info.is_complete());
//! assert_eq!(info.endpoints(), &[Endpoint::new("db.internal", "8629")]);
//! assert_eq!(info.database_id(), "orders");
//! assert_eq!(info.service_type(), ServiceType::TIBERO);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Descriptor trees and their classification.
pub mod descriptor {
    pub use tnsurl_core::descriptor::*;
}

/// `tnsurl.toml` loading and environment expansion.
pub mod config {
    pub use tnsurl_core::config::*;
}

/// Logging setup.
pub mod logging {
    pub use tnsurl_core::logging::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tnsurl_core::prelude::*;
}

// Re-export key types at the crate root
pub use tnsurl_core::{
    Config, ConfigError, Cursor, Endpoint, JdbcUrlParser, ParserRegistry, ResolveError,
    ResolvedDescriptor, Resolver, ServiceType, TiberoConfig, TiberoJdbcUrlParser, TiberoPlugin,
    URL_PREFIX, resolve,
};

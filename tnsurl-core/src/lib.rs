//! # tnsurl-core
//!
//! Resolver for Tibero JDBC URLs.
//!
//! This crate turns a connect string into the endpoints and database id it
//! names:
//! - Flat URLs (`jdbc:tibero:thin:@host:port:SID`, `.../serviceName`)
//! - TNS descriptors (`(DESCRIPTION=...)`, `(DESCRIPTION_LIST=...)`)
//! - Credentials before `@` are skipped and never copied into the result
//!
//! ## Resolving
//!
//! ```rust
//! use tnsurl_core::resolve;
//!
//! let info = resolve(Some(
//!     "jdbc:tibero:thin:@(DESCRIPTION=(ADDRESS=(HOST=10.0.0.1)(PORT=8629))\
//!      (ADDRESS=(HOST=10.0.0.2)(PORT=8629))(CONNECT_DATA=(SERVICE_NAME=orders)))",
//! ));
//!
//! assert!(info.is_complete());
//! assert_eq!(info.multiple_hosts(), "10.0.0.1:8629,10.0.0.2:8629");
//! assert_eq!(info.database_id(), "orders");
//! ```
//!
//! ## Failures
//!
//! [`resolve`] never panics and never returns an error. A URL that cannot be
//! parsed comes back incomplete, with the reason attached:
//!
//! ```rust
//! use tnsurl_core::{resolve, ResolveError, ServiceType};
//!
//! let info = resolve(Some("jdbc:tibero:thin:@(DESCRIPTION=(ADDRESS=(HOST=h)"));
//! assert!(!info.is_complete());
//! assert!(info.endpoints().is_empty());
//! assert!(matches!(info.failure(), Some(ResolveError::UnbalancedDescriptor { .. })));
//!
//! let info = resolve(Some("jdbc:mysql://localhost/db"));
//! assert_eq!(info.service_type(), ServiceType::UNKNOWN_DB);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use tnsurl_core::config::{Config, MapEnvSource};
//! use tnsurl_core::plugin::{ParserRegistry, TiberoPlugin};
//! use tnsurl_core::Resolver;
//!
//! let config = Config::parse_with_env(
//!     "[jdbc.tibero]\nenable = ${TIBERO:-true}\n",
//!     &MapEnvSource::new(),
//! )
//! .unwrap();
//!
//! let mut registry = ParserRegistry::new();
//! TiberoPlugin::with_resolver(Resolver::from_config(&config.resolver))
//!     .setup(config.tibero(), &mut registry);
//! assert_eq!(registry.len(), 1);
//! ```

pub mod config;
pub mod cursor;
pub mod descriptor;
pub mod error;
pub mod info;
pub mod logging;
pub mod plugin;
pub mod resolver;

pub use config::{Config, ConfigError, ConfigResult, TiberoConfig};
pub use cursor::Cursor;
pub use descriptor::{DatabaseSpec, DescriptorNode, parse_descriptor};
pub use error::{ResolveError, ResolveResult};
pub use info::{Endpoint, ResolvedDescriptor, ServiceType};
pub use plugin::{JdbcUrlParser, ParserRegistry, TiberoJdbcUrlParser, TiberoPlugin};
pub use resolver::{Resolver, URL_PREFIX, resolve};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{Config, TiberoConfig};
    pub use crate::error::{ResolveError, ResolveResult};
    pub use crate::info::{Endpoint, ResolvedDescriptor, ServiceType};
    pub use crate::plugin::{JdbcUrlParser, ParserRegistry, TiberoJdbcUrlParser, TiberoPlugin};
    pub use crate::resolver::{Resolver, resolve};
}

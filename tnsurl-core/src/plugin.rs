//! URL parser seam and plugin registration.
//!
//! A host that recognizes several database URL dialects keeps a
//! [`ParserRegistry`] and lets each plugin add its parser during setup:
//!
//! ```rust
//! use tnsurl_core::config::TiberoConfig;
//! use tnsurl_core::plugin::{ParserRegistry, TiberoPlugin};
//!
//! let config = TiberoConfig { enable: true, ..TiberoConfig::default() };
//! let mut registry = ParserRegistry::new();
//! TiberoPlugin::new().setup(&config, &mut registry);
//!
//! let info = registry.parse(Some("jdbc:tibero:thin:@db1:8629:prod"));
//! assert_eq!(info.multiple_hosts(), "db1:8629");
//! ```

use std::sync::Arc;

use tracing::info;

use crate::config::TiberoConfig;
use crate::error::ResolveError;
use crate::info::{ResolvedDescriptor, ServiceType};
use crate::resolver::{Resolver, URL_PREFIX};

/// Turns a JDBC URL into a [`ResolvedDescriptor`].
///
/// Implementations must not panic and must not fail; an unparseable URL is
/// reported through an incomplete result.
pub trait JdbcUrlParser: Send + Sync {
    /// Parse a URL, `None` standing for a missing one.
    fn parse(&self, url: Option<&str>) -> ResolvedDescriptor;

    /// Service type of the databases this parser recognizes.
    fn service_type(&self) -> ServiceType;

    /// Name of this parser (for logging).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A parser that can be shared across threads.
pub type SharedParser = Arc<dyn JdbcUrlParser>;

/// Parser for `jdbc:tibero:` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiberoJdbcUrlParser {
    resolver: Resolver,
}

impl TiberoJdbcUrlParser {
    /// Create a parser with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser backed by a configured resolver.
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl JdbcUrlParser for TiberoJdbcUrlParser {
    fn parse(&self, url: Option<&str>) -> ResolvedDescriptor {
        self.resolver.resolve(url)
    }

    fn service_type(&self) -> ServiceType {
        ServiceType::TIBERO
    }

    fn name(&self) -> &'static str {
        "TiberoJdbcUrlParser"
    }
}

/// Ordered set of URL parsers.
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: Vec<SharedParser>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parser; earlier parsers are tried first.
    pub fn add_parser<P: JdbcUrlParser + 'static>(&mut self, parser: P) -> &mut Self {
        self.parsers.push(Arc::new(parser));
        self
    }

    /// Parse with the first parser that resolves the URL.
    ///
    /// When none does, the first parser's unresolved result is returned. An
    /// empty registry reports an unknown database.
    pub fn parse(&self, url: Option<&str>) -> ResolvedDescriptor {
        let mut fallback = None;
        for parser in &self.parsers {
            let resolved = parser.parse(url);
            if resolved.is_complete() {
                return resolved;
            }
            fallback.get_or_insert(resolved);
        }
        fallback.unwrap_or_else(|| match url {
            None => ResolvedDescriptor::unresolved("", ResolveError::NullInput),
            Some(url) => ResolvedDescriptor::unresolved(
                url,
                ResolveError::PrefixMismatch {
                    expected: URL_PREFIX,
                },
            ),
        })
    }

    /// Names of the registered parsers, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|parser| parser.name()).collect()
    }

    /// Number of registered parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Whether no parser is registered.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &self.names())
            .finish()
    }
}

/// Registers the Tibero URL parser when the plugin is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiberoPlugin {
    resolver: Resolver,
}

impl TiberoPlugin {
    /// Create the plugin with a default resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a configured resolver for the registered parser.
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }

    /// Add the parser to `registry` unless `config.enable` is off.
    ///
    /// Returns whether the parser was registered.
    pub fn setup(&self, config: &TiberoConfig, registry: &mut ParserRegistry) -> bool {
        if !config.enable {
            info!("TiberoPlugin disabled");
            return false;
        }
        info!(config = %config, "TiberoPlugin config");

        registry.add_parser(TiberoJdbcUrlParser::with_resolver(self.resolver));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptAll;

    impl JdbcUrlParser for AcceptAll {
        fn parse(&self, url: Option<&str>) -> ResolvedDescriptor {
            ResolvedDescriptor::resolved(url.unwrap_or_default(), Vec::new(), "any")
        }

        fn service_type(&self) -> ServiceType {
            ServiceType::UNKNOWN_DB
        }
    }

    fn enabled() -> TiberoConfig {
        TiberoConfig {
            enable: true,
            ..TiberoConfig::default()
        }
    }

    #[test]
    fn test_tibero_parser() {
        let parser = TiberoJdbcUrlParser::new();
        assert_eq!(parser.service_type(), ServiceType::TIBERO);
        assert_eq!(parser.name(), "TiberoJdbcUrlParser");

        let info = parser.parse(Some("jdbc:tibero:thin:@localhost:8629:tibero"));
        assert!(info.is_complete());
        assert_eq!(info.database_id(), "tibero");
    }

    #[test]
    fn test_setup_disabled() {
        let mut registry = ParserRegistry::new();
        assert!(!TiberoPlugin::new().setup(&TiberoConfig::default(), &mut registry));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_setup_enabled() {
        let mut registry = ParserRegistry::new();
        assert!(TiberoPlugin::new().setup(&enabled(), &mut registry));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["TiberoJdbcUrlParser"]);
    }

    #[test]
    fn test_plugin_uses_configured_resolver() {
        let mut registry = ParserRegistry::new();
        let plugin = TiberoPlugin::with_resolver(Resolver::new().with_max_depth(1));
        plugin.setup(&enabled(), &mut registry);

        let info = registry.parse(Some(
            "jdbc:tibero:thin:@(DESCRIPTION=(CONNECT_DATA=(SID=s)))",
        ));
        assert_eq!(
            info.failure(),
            Some(&ResolveError::NestingTooDeep { limit: 1 })
        );
    }

    #[test]
    fn test_registry_first_complete_wins() {
        let mut registry = ParserRegistry::new();
        registry.add_parser(TiberoJdbcUrlParser::new()).add_parser(AcceptAll);

        let info = registry.parse(Some("jdbc:tibero:thin:@h:1:db"));
        assert_eq!(info.database_id(), "db");

        let info = registry.parse(Some("jdbc:mysql://h/db"));
        assert_eq!(info.database_id(), "any");
    }

    #[test]
    fn test_registry_falls_back_to_first_failure() {
        let mut registry = ParserRegistry::new();
        registry
            .add_parser(TiberoJdbcUrlParser::new())
            .add_parser(TiberoJdbcUrlParser::with_resolver(Resolver::new()));

        let info = registry.parse(Some("jdbc:tibero:thin:@h:1"));
        assert!(!info.is_complete());
        assert!(matches!(
            info.failure(),
            Some(ResolveError::FlatGrammarAmbiguous(_))
        ));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ParserRegistry::new();
        let info = registry.parse(Some("jdbc:tibero:thin:@h:1:db"));
        assert!(!info.is_complete());
        assert_eq!(info.service_type(), ServiceType::UNKNOWN_DB);
        assert_eq!(info.source_text(), "jdbc:tibero:thin:@h:1:db");

        let info = registry.parse(None);
        assert_eq!(info.failure(), Some(&ResolveError::NullInput));
    }
}

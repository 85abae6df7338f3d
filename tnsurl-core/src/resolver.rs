//! Tibero JDBC URL resolver.
//!
//! Two URL dialects share the `jdbc:tibero:` prefix:
//!
//! ```text
//! jdbc:tibero:thin:@host:port:SID
//! jdbc:tibero:thin:@host:port/serviceName
//! jdbc:tibero:thin:user/password@host:port:SID
//! jdbc:tibero:thin:@(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=p))(CONNECT_DATA=(SERVICE_NAME=s)))
//! jdbc:tibero:thin:@(DESCRIPTION_LIST=(DESCRIPTION=...)(DESCRIPTION=...))
//! ```
//!
//! Resolution never fails: anything that cannot be parsed comes back as an
//! incomplete [`ResolvedDescriptor`] carrying the original text.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, info, trace};

use crate::config::ResolverConfig;
use crate::cursor::Cursor;
use crate::descriptor::{DatabaseSpec, DescriptorParser, MAX_DEPTH, MAX_DEPTH_LIMIT};
use crate::error::{ResolveError, ResolveResult};
use crate::info::{Endpoint, ResolvedDescriptor};

/// Scheme every Tibero JDBC URL starts with.
pub const URL_PREFIX: &str = "jdbc:tibero:";

/// Resolve a URL with the default settings.
///
/// # Examples
///
/// ```rust
/// use tnsurl_core::resolve;
///
/// let info = resolve(Some("jdbc:tibero:thin:@localhost:8629:tibero"));
/// assert!(info.is_complete());
/// assert_eq!(info.hosts(), vec!["localhost:8629"]);
/// assert_eq!(info.database_id(), "tibero");
///
/// let info = resolve(Some("jdbc:mysql://localhost/db"));
/// assert!(!info.is_complete());
/// ```
pub fn resolve(raw: Option<&str>) -> ResolvedDescriptor {
    Resolver::new().resolve(raw)
}

/// Stateless resolver; one instance can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    max_depth: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Create a resolver with the default descriptor depth limit.
    pub fn new() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }

    /// Create a resolver from the `[resolver]` config table.
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new().with_max_depth(config.max_depth)
    }

    /// Override the descriptor depth limit, clamped to [`MAX_DEPTH_LIMIT`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    /// Resolve a connect string.
    pub fn resolve(&self, raw: Option<&str>) -> ResolvedDescriptor {
        let Some(url) = raw else {
            info!("jdbc url must not be null");
            return ResolvedDescriptor::unresolved("", ResolveError::NullInput);
        };

        debug!(url_len = url.len(), "Resolver::resolve()");
        match guard(|| self.resolve_url(url)) {
            Ok(resolved) => {
                debug!(
                    endpoints = resolved.endpoints().len(),
                    database_id = resolved.database_id(),
                    "jdbc url resolved"
                );
                resolved
            }
            Err(error) => {
                info!(url, error = %error, "jdbc url could not be resolved");
                ResolvedDescriptor::unresolved(url, error)
            }
        }
    }

    fn resolve_url(&self, url: &str) -> ResolveResult<ResolvedDescriptor> {
        if url.is_empty() {
            return Err(ResolveError::EmptyInput);
        }
        if !url.starts_with(URL_PREFIX) {
            return Err(ResolveError::PrefixMismatch {
                expected: URL_PREFIX,
            });
        }

        let mut cursor = Cursor::new(url);
        // Passwords may contain '@'; descriptor values may too.
        cursor.after_literal(URL_PREFIX).after(':');
        let description = cursor.after_last_until('@', '(').value().trim();

        if description.starts_with('(') {
            debug!("descriptor url");
            self.resolve_descriptor(url, description)
        } else {
            debug!("flat url");
            resolve_flat(url, &mut cursor)
        }
    }

    fn resolve_descriptor(
        &self,
        url: &str,
        description: &str,
    ) -> ResolveResult<ResolvedDescriptor> {
        let root = DescriptorParser::new(description)
            .with_max_depth(self.max_depth)
            .parse()?;
        let spec = DatabaseSpec::classify(&root)?;
        if !spec.is_complete() {
            return Err(ResolveError::MissingDatabaseId);
        }

        let database_id = spec.database_id().unwrap_or_default().to_string();
        Ok(ResolvedDescriptor::resolved(url, spec.endpoints(), database_id))
    }
}

/// `host:port:SID` or `host:port/serviceName`, read from the cursor position.
fn resolve_flat(url: &str, cursor: &mut Cursor<'_>) -> ResolveResult<ResolvedDescriptor> {
    let host = cursor.before(&[':']).value();
    let port = cursor.next().after(':').before(&[':', '/']).value();
    let database_id = cursor.next().after_last(&[':', '/']).value();
    trace!(host, port, database_id, "flat url split");

    if database_id.is_empty() {
        return Err(ResolveError::FlatGrammarAmbiguous(format!(
            "no database id after host `{}` and port `{}`",
            host, port
        )));
    }

    Ok(ResolvedDescriptor::resolved(
        url,
        vec![Endpoint::new(host, port)],
        database_id,
    ))
}

/// Run a resolution step, turning a panic into a [`ResolveError::Panicked`].
fn guard<T, F>(f: F) -> ResolveResult<T>
where
    F: FnOnce() -> ResolveResult<T>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(ResolveError::Panicked(panic_message(payload))),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::ServiceType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_flat_sid() {
        let info = resolve(Some("jdbc:tibero:thin:@localhost:8629:tibero"));
        assert!(info.is_complete());
        assert_eq!(info.endpoints(), &[Endpoint::new("localhost", "8629")]);
        assert_eq!(info.database_id(), "tibero");
        assert_eq!(info.source_text(), "jdbc:tibero:thin:@localhost:8629:tibero");
        assert_eq!(info.service_type(), ServiceType::TIBERO);
    }

    #[test]
    fn test_resolve_flat_placeholder_names() {
        let info = resolve(Some("jdbc:tibero:thin:@hostname:port:SID"));
        assert!(info.is_complete());
        assert_eq!(info.hosts(), vec!["hostname:port"]);
        assert_eq!(info.database_id(), "SID");
    }

    #[test]
    fn test_resolve_flat_service_name() {
        let info = resolve(Some("jdbc:tibero:thin:@hostname:port/serviceName"));
        assert!(info.is_complete());
        assert_eq!(info.endpoints(), &[Endpoint::new("hostname", "port")]);
        assert_eq!(info.database_id(), "serviceName");
    }

    #[test]
    fn test_resolve_flat_credentials_ignored() {
        let url = "jdbc:tibero:thin:MYWORKSPACE/qwerty@localhost:1521:XE";
        let info = resolve(Some(url));
        assert!(info.is_complete());
        assert_eq!(info.hosts(), vec!["localhost:1521"]);
        assert_eq!(info.database_id(), "XE");
        assert_eq!(info.source_text(), url);
        for field in [info.database_id(), info.endpoints()[0].host(), info.endpoints()[0].port()] {
            assert!(!field.contains("qwerty"));
            assert!(!field.contains("MYWORKSPACE"));
        }
    }

    #[test]
    fn test_resolve_password_containing_at() {
        let info = resolve(Some("jdbc:tibero:thin:scott/p@ss@dbhost:1521:XE"));
        assert!(info.is_complete());
        assert_eq!(info.endpoints(), &[Endpoint::new("dbhost", "1521")]);
        assert_eq!(info.database_id(), "XE");

        let info = resolve(Some(
            "jdbc:tibero:thin:scott/p@ss@(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=1))\
             (CONNECT_DATA=(SERVICE_NAME=svc@site)))",
        ));
        assert!(info.is_complete());
        assert_eq!(info.endpoints(), &[Endpoint::new("h", "1")]);
        assert_eq!(info.database_id(), "svc@site");
    }

    #[test]
    fn test_resolve_flat_without_at() {
        let info = resolve(Some("jdbc:tibero:thin:localhost:1521:XE"));
        assert!(info.is_complete());
        assert_eq!(info.hosts(), vec!["localhost:1521"]);
        assert_eq!(info.database_id(), "XE");
    }

    #[test]
    fn test_resolve_flat_missing_database() {
        let info = resolve(Some("jdbc:tibero:thin:@localhost:8629"));
        assert!(!info.is_complete());
        assert!(matches!(
            info.failure(),
            Some(ResolveError::FlatGrammarAmbiguous(_))
        ));
        assert_eq!(info.service_type(), ServiceType::TIBERO);
    }

    #[test]
    fn test_resolve_description() {
        let url = "jdbc:tibero:thin:@(DESCRIPTION=(LOAD_BALANCE=on)\
                   (ADDRESS=(PROTOCOL=TCP)(HOST=1.2.3.4) (PORT=1521))\
                   (ADDRESS=(PROTOCOL=TCP)(HOST=1.2.3.5) (PORT=1522))\
                   (CONNECT_DATA=(SERVICE_NAME=service)))";
        let info = resolve(Some(url));
        assert!(info.is_complete());
        assert_eq!(info.hosts(), vec!["1.2.3.4:1521", "1.2.3.5:1522"]);
        assert_eq!(info.database_id(), "service");
        assert_eq!(info.source_text(), url);
    }

    #[test]
    fn test_resolve_description_list() {
        let url = "jdbc:tibero:thin:@(DESCRIPTION_LIST=\
                   (LOAD_BALANCE=off)(FAILOVER=on)\
                   (DESCRIPTION=(LOAD_BALANCE=on)\
                   (ADDRESS=(PROTOCOL=tcp)(HOST=1.2.3.4)(PORT=1521))\
                   (ADDRESS=(PROTOCOL=tcp)(HOST=1.2.3.5)(PORT=1521))\
                   (CONNECT_DATA=(SERVER=DEDICATED)(SERVICE_NAME=service_test)))\
                   (DESCRIPTION=(LOAD_BALANCE=on)\
                   (ADDRESS=(PROTOCOL=tcp)(HOST=2.3.4.5)(PORT=1521))\
                   (ADDRESS=(PROTOCOL=tcp)(HOST=2.3.4.6)(PORT=1521))\
                   (CONNECT_DATA=(SERVER=DEDICATED)(SERVICE_NAME=service_test))))";
        let info = resolve(Some(url));
        assert!(info.is_complete());
        assert_eq!(
            info.hosts(),
            vec![
                "1.2.3.4:1521",
                "1.2.3.5:1521",
                "2.3.4.5:1521",
                "2.3.4.6:1521"
            ]
        );
        assert_eq!(info.database_id(), "service_test");
    }

    #[test]
    fn test_resolve_description_list_without_database_id() {
        let info = resolve(Some(
            "jdbc:tibero:thin:@(DESCRIPTION_LIST=(DESCRIPTION=(ADDRESS=(HOST=a)(PORT=1))))",
        ));
        assert!(info.is_complete());
        assert_eq!(info.hosts(), vec!["a:1"]);
        assert_eq!(info.database_id(), "");
    }

    #[test]
    fn test_resolve_null_and_empty() {
        let info = resolve(None);
        assert!(!info.is_complete());
        assert_eq!(info.source_text(), "");
        assert_eq!(info.service_type(), ServiceType::UNKNOWN_DB);
        assert_eq!(info.failure(), Some(&ResolveError::NullInput));

        let info = resolve(Some(""));
        assert!(!info.is_complete());
        assert_eq!(info.failure(), Some(&ResolveError::EmptyInput));
    }

    #[test]
    fn test_resolve_foreign_prefix() {
        let url = "jdbc:mysql:thin:@hostname:port:SID";
        let info = resolve(Some(url));
        assert!(!info.is_complete());
        assert_eq!(info.source_text(), url);
        assert_eq!(info.service_type(), ServiceType::UNKNOWN_DB);

        // prefix match is case-sensitive
        assert!(!resolve(Some("JDBC:TIBERO:thin:@h:1:db")).is_complete());
    }

    #[test]
    fn test_resolve_descriptor_failures() {
        let cases = [
            "jdbc:tibero:thin:@(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=1))",
            "jdbc:tibero:thin:@(Description1=(ADDRESS=(HOST=h)(PORT=1)))",
            "jdbc:tibero:thin:@(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=1)))",
            "jdbc:tibero:thin:@(=x)",
        ];
        for url in cases {
            let info = resolve(Some(url));
            assert!(!info.is_complete(), "{url}");
            assert_eq!(info.source_text(), url);
            assert!(info.endpoints().is_empty());
            assert_eq!(info.service_type(), ServiceType::TIBERO);
        }
    }

    #[test]
    fn test_resolve_depth_limit() {
        let mut url = String::from("jdbc:tibero:thin:@");
        url.push_str(&"(DESCRIPTION=".repeat(10));
        url.push_str(&")".repeat(10));

        let info = Resolver::new().with_max_depth(4).resolve(Some(&url));
        assert_eq!(
            info.failure(),
            Some(&ResolveError::NestingTooDeep { limit: 4 })
        );
    }

    #[test]
    fn test_oversized_depth_limit_is_clamped() {
        let url = format!(
            "jdbc:tibero:thin:@{}v{}",
            "(K=".repeat(200_000),
            ")".repeat(200_000)
        );

        let resolver = Resolver::from_config(&ResolverConfig {
            max_depth: 10_000_000,
        });
        let info = resolver.resolve(Some(&url));
        assert!(!info.is_complete());
        assert_eq!(
            info.failure(),
            Some(&ResolveError::NestingTooDeep {
                limit: MAX_DEPTH_LIMIT
            })
        );
    }

    #[test]
    fn test_resolver_from_config() {
        let resolver = Resolver::from_config(&ResolverConfig { max_depth: 2 });
        let info = resolver.resolve(Some(
            "jdbc:tibero:thin:@(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=1))(CONNECT_DATA=(SID=s)))",
        ));
        assert_eq!(
            info.failure(),
            Some(&ResolveError::NestingTooDeep { limit: 2 })
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = Resolver::new();
        for url in [
            "jdbc:tibero:thin:@localhost:8629:tibero",
            "jdbc:tibero:thin:@(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=1))(CONNECT_DATA=(SID=s)))",
            "jdbc:tibero:thin:@(",
            "garbage",
        ] {
            assert_eq!(resolver.resolve(Some(url)), resolver.resolve(Some(url)));
        }
    }

    #[test]
    fn test_guard_catches_panic() {
        let result: ResolveResult<()> = guard(|| panic!("boom"));
        assert_eq!(result, Err(ResolveError::Panicked("boom".to_string())));

        let result: ResolveResult<u8> = guard(|| Ok(1));
        assert_eq!(result, Ok(1));
    }
}

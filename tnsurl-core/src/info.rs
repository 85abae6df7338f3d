//! Resolution results.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::ResolveError;

/// A `host:port` pair taken verbatim from the connect string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    host: String,
    port: String,
}

impl Endpoint {
    /// Create an endpoint.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// The host text.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port text. Not validated as a number.
    pub fn port(&self) -> &str {
        &self.port
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Service type recorded alongside a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ServiceType {
    code: u16,
    name: &'static str,
}

impl ServiceType {
    /// Tibero database.
    pub const TIBERO: ServiceType = ServiceType::new(2420, "TIBERO");
    /// Query executed against Tibero.
    pub const TIBERO_EXECUTE_QUERY: ServiceType = ServiceType::new(2421, "TIBERO_EXECUTE_QUERY");
    /// A database the resolver does not know.
    pub const UNKNOWN_DB: ServiceType = ServiceType::new(2050, "UNKNOWN_DB");
    /// Query executed against an unknown database.
    pub const UNKNOWN_DB_EXECUTE_QUERY: ServiceType =
        ServiceType::new(2051, "UNKNOWN_DB_EXECUTE_QUERY");

    const fn new(code: u16, name: &'static str) -> Self {
        Self { code, name }
    }

    /// Numeric code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.code)
    }
}

/// Normalized description of a connect string.
///
/// An incomplete result means parsing failed; its endpoints and database id
/// must not be merged with other data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDescriptor {
    source_text: String,
    endpoints: Vec<Endpoint>,
    database_id: String,
    complete: bool,
    service_type: ServiceType,
    #[serde(rename = "error", serialize_with = "serialize_failure")]
    failure: Option<ResolveError>,
}

fn serialize_failure<S: Serializer>(
    failure: &Option<ResolveError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match failure {
        Some(error) => serializer.serialize_some(&error.to_string()),
        None => serializer.serialize_none(),
    }
}

impl ResolvedDescriptor {
    /// A fully resolved connect string.
    pub fn resolved(
        source_text: impl Into<String>,
        endpoints: Vec<Endpoint>,
        database_id: impl Into<String>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            endpoints,
            database_id: database_id.into(),
            complete: true,
            service_type: ServiceType::TIBERO,
            failure: None,
        }
    }

    /// A connect string that could not be resolved.
    pub fn unresolved(source_text: impl Into<String>, failure: ResolveError) -> Self {
        let service_type = if failure.is_foreign() {
            ServiceType::UNKNOWN_DB
        } else {
            ServiceType::TIBERO
        };
        Self {
            source_text: source_text.into(),
            endpoints: Vec::new(),
            database_id: String::new(),
            complete: false,
            service_type,
            failure: Some(failure),
        }
    }

    /// The input exactly as given (empty for a missing input).
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Endpoints in source order.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// SID or service name; empty when unknown.
    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// Whether parsing succeeded.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Service type of the database.
    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Service type of queries run against the database.
    pub fn execute_query_type(&self) -> ServiceType {
        if self.service_type == ServiceType::TIBERO {
            ServiceType::TIBERO_EXECUTE_QUERY
        } else {
            ServiceType::UNKNOWN_DB_EXECUTE_QUERY
        }
    }

    /// Why resolution failed, for unresolved results.
    pub fn failure(&self) -> Option<&ResolveError> {
        self.failure.as_ref()
    }

    /// Endpoints formatted as `host:port`.
    pub fn hosts(&self) -> Vec<String> {
        self.endpoints.iter().map(Endpoint::to_string).collect()
    }

    /// All endpoints joined with `,`.
    pub fn multiple_hosts(&self) -> String {
        self.hosts().join(",")
    }
}

//! Provider configuration: credential attribute validation and the shared
//! client-secret credential.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::diagnostics::Diagnostics;

/// A configuration attribute value as seen by the host.
///
/// `Unknown` models a value the host has not resolved yet (e.g. it depends
/// on another resource that has not been applied); `Null` models an unset
/// attribute. Both fail validation, with different messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue<T> {
    /// The host knows the attribute exists but not its value yet.
    Unknown,
    /// The attribute was not set.
    Null,
    /// A concrete, known value.
    Value(T),
}

impl<T> ConfigValue<T> {
    /// Returns `true` for an unresolved value.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl ConfigValue<String> {
    /// Returns the contained string, or `""` for null/unknown values.
    #[must_use]
    pub fn value_or_default(&self) -> &str {
        match self {
            Self::Value(s) => s,
            Self::Unknown | Self::Null => "",
        }
    }
}

impl<T> From<Option<T>> for ConfigValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

/// Provider-level configuration: the four service-principal attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderModel {
    /// Client ID of the service principal.
    pub clientid: ConfigValue<String>,
    /// Client secret of the service principal.
    pub clientsecret: ConfigValue<String>,
    /// Subscription in which managed resources live.
    pub subscriptionid: ConfigValue<String>,
    /// Tenant the service principal belongs to.
    pub tenantid: ConfigValue<String>,
}

impl ProviderModel {
    fn attributes(&self) -> [(&'static str, &ConfigValue<String>); 4] {
        [
            ("clientid", &self.clientid),
            ("clientsecret", &self.clientsecret),
            ("subscriptionid", &self.subscriptionid),
            ("tenantid", &self.tenantid),
        ]
    }
}

/// Client-secret credential derived from a valid provider configuration.
///
/// Constructed exactly once at configure time and shared read-only with
/// every data source and resource instance for the provider's lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecretCredential {
    /// Tenant the credential authenticates against.
    pub tenant_id: String,
    /// Client ID of the service principal.
    pub client_id: String,
    /// Client secret of the service principal.
    pub client_secret: String,
}

impl fmt::Debug for ClientSecretCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSecretCredential")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// The provider: validates configuration and issues the shared credential.
pub struct Provider {
    version: String,
}

impl Provider {
    /// Creates a provider with the given version string.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into() }
    }

    /// The provider version, as reported to the host.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Validates the configuration and builds the shared credential.
    ///
    /// All four attributes must be known and non-empty. Validation reports
    /// one attribute-scoped error per offending field and accumulates them;
    /// unknown values are reported before empty ones. Any error aborts with
    /// `None` and no credential is issued.
    #[must_use]
    pub fn configure(
        &self,
        config: &ProviderModel,
        diags: &mut Diagnostics,
    ) -> Option<Arc<ClientSecretCredential>> {
        for (name, value) in config.attributes() {
            if value.is_unknown() {
                diags.add_attribute_error(
                    name,
                    format!("Unknown {name}"),
                    format!(
                        "The provider cannot build its credential because {name} is an unknown \
                         configuration value. Apply the source of the value first or set it \
                         statically in the configuration."
                    ),
                );
            }
        }
        if diags.has_errors() {
            return None;
        }

        for (name, value) in config.attributes() {
            if value.value_or_default().is_empty() {
                diags.add_attribute_error(
                    name,
                    format!("Missing {name}"),
                    format!(
                        "The provider cannot build its credential because {name} is missing or \
                         empty. Set it in the configuration and ensure the value is not empty."
                    ),
                );
            }
        }
        if diags.has_errors() {
            return None;
        }

        debug!(
            subscription_id = config.subscriptionid.value_or_default(),
            version = %self.version,
            "provider configured"
        );

        Some(Arc::new(ClientSecretCredential {
            tenant_id: config.tenantid.value_or_default().to_string(),
            client_id: config.clientid.value_or_default().to_string(),
            client_secret: config.clientsecret.value_or_default().to_string(),
        }))
    }
}

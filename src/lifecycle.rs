//! Host-dispatch lifecycle traits.
//!
//! The hosting side drives everything through these five capability methods;
//! there is no independent process loop. The host guarantees at most one
//! in-flight lifecycle call per instance, so implementations hold no mutable
//! state beyond the read-only credential set at configure time.

use std::sync::Arc;

use async_trait::async_trait;

use crate::diagnostics::Diagnostics;
use crate::provider::ClientSecretCredential;

/// A read-only data source.
#[async_trait]
pub trait DataSource {
    /// Configuration the host supplies for a read.
    type Config: Send + Sync;
    /// Computed output written back to the host.
    type Output: Send;

    /// Receives the provider's shared credential.
    fn configure(&mut self, credential: Arc<ClientSecretCredential>);

    /// Produces the data source's output for the given configuration.
    ///
    /// Returns `None` when a blocking diagnostic was recorded.
    async fn read(&self, config: &Self::Config, diags: &mut Diagnostics) -> Option<Self::Output>;
}

/// A managed resource with full create/read/update/delete lifecycle.
#[async_trait]
pub trait ManagedResource {
    /// The plan/state record the host persists for this resource.
    type Model: Send + Sync;

    /// Receives the provider's shared credential.
    fn configure(&mut self, credential: Arc<ClientSecretCredential>);

    /// Creates the remote object from a plan and returns the state to
    /// persist, or `None` when a blocking diagnostic was recorded.
    async fn create(&self, plan: &Self::Model, diags: &mut Diagnostics) -> Option<Self::Model>;

    /// Refreshes a previously persisted state record.
    async fn read(&self, state: &Self::Model, diags: &mut Diagnostics) -> Option<Self::Model>;

    /// Re-applies the plan over an existing remote object.
    async fn update(&self, plan: &Self::Model, diags: &mut Diagnostics) -> Option<Self::Model>;

    /// Removes the remote object. Failures are reported through `diags`.
    async fn delete(&self, state: &Self::Model, diags: &mut Diagnostics);
}

// clarity-core/src/ports/fixture_source.rs

// What the pages need from "the backend": a named JSON document.
// Whether it is compiled in, read from disk or delayed is an adapter concern.

use async_trait::async_trait;
use tracing::instrument;

use crate::domain::fixtures::{Fixture, FixtureKind};
use crate::error::ClarityError;
use crate::infrastructure::error::InfrastructureError;

#[async_trait]
pub trait FixtureSource: Send + Sync {
    /// Returns the untyped document for `kind`.
    async fn load_raw(&self, kind: FixtureKind) -> Result<serde_json::Value, ClarityError>;
}

#[async_trait]
impl<S: FixtureSource + ?Sized> FixtureSource for std::sync::Arc<S> {
    async fn load_raw(&self, kind: FixtureKind) -> Result<serde_json::Value, ClarityError> {
        (**self).load_raw(kind).await
    }
}

#[async_trait]
impl<S: FixtureSource + ?Sized> FixtureSource for Box<S> {
    async fn load_raw(&self, kind: FixtureKind) -> Result<serde_json::Value, ClarityError> {
        (**self).load_raw(kind).await
    }
}

/// Loads and shape-checks a typed fixture document.
#[instrument(skip(source), fields(fixture = %T::KIND))]
pub async fn load_fixture<T: Fixture>(source: &dyn FixtureSource) -> Result<T, ClarityError> {
    let raw = source.load_raw(T::KIND).await?;
    serde_json::from_value(raw).map_err(|e| {
        ClarityError::Infrastructure(InfrastructureError::FixtureShape {
            fixture: T::KIND.to_string(),
            source: e,
        })
    })
}

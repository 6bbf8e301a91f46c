use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthGate = Arc<dyn AuthGateTrait + Send + Sync>;

/// Outcome of the external admin gate. `Checking` is the transient state
/// while the gate has not settled yet; callers treat it as "not yet allowed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Checking,
    Allowed,
    Denied,
}

/// The catalog core trusts this decision and performs no authorization
/// checks of its own.
#[async_trait]
pub trait AuthGateTrait {
    async fn authorize(&self) -> AuthDecision;
}

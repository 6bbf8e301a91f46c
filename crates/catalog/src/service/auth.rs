use crate::abstract_trait::{AuthDecision, AuthGateTrait};
use async_trait::async_trait;

/// Gate with a fixed decision, for wiring environments where the real
/// admin check lives outside the catalog core.
#[derive(Debug, Clone)]
pub struct StaticAuthGate {
    decision: AuthDecision,
}

impl StaticAuthGate {
    pub fn new(decision: AuthDecision) -> Self {
        Self { decision }
    }

    pub fn allowed() -> Self {
        Self::new(AuthDecision::Allowed)
    }

    pub fn denied() -> Self {
        Self::new(AuthDecision::Denied)
    }
}

#[async_trait]
impl AuthGateTrait for StaticAuthGate {
    async fn authorize(&self) -> AuthDecision {
        self.decision
    }
}

mod gateway_tests;

use crate::SessionTicket;
use crate::core::domain::gateway::{GatewayFactory, ProxmoxGateway};
use std::sync::Arc;

/// Factory stub that hands out the same gateway for every endpoint.
pub(crate) struct StubGatewayFactory {
    gateway: Arc<dyn ProxmoxGateway>,
}

impl StubGatewayFactory {
    pub(crate) fn wrap(gateway: impl ProxmoxGateway + 'static) -> Arc<Self> {
        Arc::new(Self {
            gateway: Arc::new(gateway),
        })
    }
}

impl GatewayFactory for StubGatewayFactory {
    fn open(&self, _endpoint: &str) -> Arc<dyn ProxmoxGateway> {
        Arc::clone(&self.gateway)
    }
}

pub(crate) fn test_session() -> SessionTicket {
    SessionTicket::new(
        "PVE:root@pam:4EEC61E2::sig",
        Some("4EEC61E2:token".to_string()),
    )
}

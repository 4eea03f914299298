//! HTTP gateway adapter over the Proxmox VE JSON API.
//!
//! One factory holds a shared reqwest client; `open` binds it to a base
//! endpoint per call. Authentication posts form-encoded credentials to
//! `access/ticket`; every other call is an authenticated GET carrying the
//! `PVEAuthCookie` cookie. All responses arrive in the `{ "data": ... }`
//! envelope.

use crate::config::GatewayConfig;
use crate::core::domain::error::{FleetError, FleetResult};
use crate::core::domain::gateway::{GatewayFactory, ProxmoxGateway};
use crate::core::domain::model::disk::DiskRecord;
use crate::core::domain::model::node::NodeRef;
use crate::core::domain::model::node_status::NodeStatusData;
use crate::core::domain::model::resource::ResourceRecord;
use crate::core::domain::model::session::SessionTicket;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Builds [`HttpGateway`] instances bound to arbitrary endpoints.
#[derive(Debug, Clone)]
pub struct HttpGatewayFactory {
    http: Client,
}

impl HttpGatewayFactory {
    /// Creates the factory and its shared HTTP client.
    ///
    /// # Errors
    /// Returns `FleetError::Connection` if the HTTP client cannot be built.
    pub fn new(config: GatewayConfig) -> FleetResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| FleetError::Connection(e.to_string()))?;
        Ok(Self { http })
    }
}

impl GatewayFactory for HttpGatewayFactory {
    fn open(&self, endpoint: &str) -> Arc<dyn ProxmoxGateway> {
        Arc::new(HttpGateway {
            http: self.http.clone(),
            base: endpoint.trim_end_matches('/').to_string(),
        })
    }
}

/// Gateway bound to one cluster's base endpoint.
#[derive(Debug)]
pub struct HttpGateway {
    http: Client,
    base: String,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct TicketData {
    #[serde(default)]
    ticket: String,
    #[serde(rename = "CSRFPreventionToken", default)]
    csrf_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VersionData {
    version: String,
}

impl HttpGateway {
    /// Performs an authenticated GET and unwraps the response envelope.
    async fn get_json<T>(&self, session: &SessionTicket, path: &str) -> FleetResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base, path);
        let response = self
            .http
            .get(&url)
            .header("Cookie", session.as_cookie_header())
            .send()
            .await
            .map_err(|e| FleetError::Connection(format!("request to {} failed: {}", path, e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(FleetError::Authentication(format!(
                "ticket rejected for {}",
                path
            )));
        }
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(FleetError::Connection(format!(
                "api error ({}) on {}: {}",
                status, path, text
            )));
        }

        response
            .json::<Envelope<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| {
                FleetError::Connection(format!("failed to parse response from {}: {}", path, e))
            })
    }
}

#[async_trait]
impl ProxmoxGateway for HttpGateway {
    async fn authenticate(&self, username: &str, password: &str) -> FleetResult<SessionTicket> {
        let url = format!("{}/api2/json/access/ticket", self.base);
        let response = self
            .http
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| FleetError::Connection(format!("authentication request failed: {}", e)))?;

        match response.status() {
            StatusCode::OK => {
                let body: Envelope<TicketData> = response.json().await.map_err(|e| {
                    FleetError::Connection(format!(
                        "failed to parse authentication response: {}",
                        e
                    ))
                })?;
                if body.data.ticket.is_empty() {
                    return Err(FleetError::Authentication(
                        "no ticket in authentication response".to_string(),
                    ));
                }
                Ok(SessionTicket::new(body.data.ticket, body.data.csrf_token))
            }
            StatusCode::UNAUTHORIZED => Err(FleetError::Authentication(
                "invalid credentials provided".to_string(),
            )),
            status => {
                let text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown".to_string());
                Err(FleetError::Connection(format!(
                    "unexpected authentication status {}: {}",
                    status, text
                )))
            }
        }
    }

    async fn version(&self, session: &SessionTicket) -> FleetResult<String> {
        let data: VersionData = self.get_json(session, "/api2/json/version").await?;
        Ok(data.version)
    }

    async fn node_count(&self, session: &SessionTicket) -> FleetResult<usize> {
        let nodes: Vec<NodeRef> = self.get_json(session, "/api2/json/nodes").await?;
        Ok(nodes.len())
    }

    async fn list_nodes(&self, session: &SessionTicket) -> FleetResult<Vec<NodeRef>> {
        self.get_json(session, "/api2/json/nodes").await
    }

    async fn list_node_disks(
        &self,
        session: &SessionTicket,
        node: &str,
    ) -> FleetResult<Vec<DiskRecord>> {
        self.get_json(session, &format!("/api2/json/nodes/{}/disks/list", node))
            .await
    }

    async fn node_status(
        &self,
        session: &SessionTicket,
        node: &str,
    ) -> FleetResult<NodeStatusData> {
        self.get_json(session, &format!("/api2/json/nodes/{}/status", node))
            .await
    }

    async fn cluster_resources(
        &self,
        session: &SessionTicket,
    ) -> FleetResult<Vec<ResourceRecord>> {
        self.get_json(session, "/api2/json/cluster/resources").await
    }
}

use crate::core::domain::gateway::{GatewayFactory, ProxmoxGateway};
use crate::tests::test_session;
use crate::{FleetError, GatewayConfig, HttpGatewayFactory, ResourceKind};
use std::sync::Arc;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> Arc<dyn ProxmoxGateway> {
    let factory = HttpGatewayFactory::new(GatewayConfig::default()).unwrap();
    factory.open(&server.uri())
}

#[tokio::test]
async fn authenticate_posts_form_credentials_and_returns_the_ticket() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api2/json/access/ticket"))
        .and(body_string_contains("username=root%40pam"))
        .and(body_string_contains("password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "ticket": "PVE:root@pam:4EEC61E2::sig",
                "CSRFPreventionToken": "4EEC61E2:token"
            }
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let session = gateway.authenticate("root@pam", "secret").await.unwrap();
    assert_eq!(session.ticket(), "PVE:root@pam:4EEC61E2::sig");
    assert_eq!(session.csrf_token(), Some("4EEC61E2:token"));
}

#[tokio::test]
async fn authenticate_maps_unauthorized_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api2/json/access/ticket"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let result = gateway.authenticate("root@pam", "wrong").await;
    assert!(matches!(result, Err(FleetError::Authentication(_))));
}

#[tokio::test]
async fn authenticate_rejects_a_success_body_without_a_ticket() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api2/json/access/ticket"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": { "ticket": "" } })),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let result = gateway.authenticate("root@pam", "secret").await;
    assert!(matches!(result, Err(FleetError::Authentication(_))));
}

#[tokio::test]
async fn version_sends_the_ticket_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/json/version"))
        .and(header("Cookie", "PVEAuthCookie=PVE:root@pam:4EEC61E2::sig"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "version": "8.1.4", "release": "8.1" }
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let version = gateway.version(&test_session()).await.unwrap();
    assert_eq!(version, "8.1.4");
}

#[tokio::test]
async fn node_listing_preserves_remote_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "node": "pve3", "status": "online" },
                { "node": "pve1", "status": "offline" },
                { "node": "pve2", "status": "online" }
            ]
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let nodes = gateway.list_nodes(&test_session()).await.unwrap();
    let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["pve3", "pve1", "pve2"]);
    assert_eq!(nodes[1].status, "offline");

    let count = gateway.node_count(&test_session()).await.unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn disk_listing_handles_every_wearout_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/disks/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "devpath": "/dev/nvme0n1",
                    "type": "nvme",
                    "size": 512110190592_u64,
                    "model": "SAMSUNG MZVL2512",
                    "serial": "S676NF0R",
                    "vendor": "unknown",
                    "wearout": 93,
                    "health": "PASSED",
                    "used": "LVM"
                },
                {
                    "devpath": "/dev/sda",
                    "type": "hdd",
                    "size": 4000787030016_u64,
                    "model": "WDC WD40EFRX",
                    "serial": "WD-WCC4E",
                    "vendor": "ATA",
                    "wearout": "N/A",
                    "health": "PASSED",
                    "used": "ZFS"
                },
                {
                    "devpath": "/dev/sdb",
                    "type": "hdd",
                    "size": 2000398934016_u64
                }
            ]
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let disks = gateway
        .list_node_disks(&test_session(), "pve1")
        .await
        .unwrap();
    assert_eq!(disks.len(), 3);
    assert_eq!(disks[0].wearout, Some(93.0));
    assert_eq!(disks[1].wearout, None);
    assert_eq!(disks[2].wearout, None);
    assert_eq!(disks[1].used, "ZFS");
    assert_eq!(disks[2].model, "");
}

#[tokio::test]
async fn node_status_parses_counters_and_defaults_missing_swap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "cpu": 0.22,
                "memory": {
                    "total": 17179869184_u64,
                    "used": 8589934592_u64,
                    "free": 8589934592_u64
                },
                "uptime": 1234567,
                "loadavg": [1.2, 0.8, 0.5]
            }
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let status = gateway.node_status(&test_session(), "pve1").await.unwrap();
    assert_eq!(status.cpu, 0.22);
    assert_eq!(status.memory.total, 17179869184);
    assert_eq!(status.memory.used, 8589934592);
    assert_eq!(status.swap.total, 0);
    assert_eq!(status.uptime, 1234567);
    assert_eq!(status.loadavg, vec![1.2, 0.8, 0.5]);
}

#[tokio::test]
async fn cluster_resources_map_unknown_types_to_other() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/resources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "id": "qemu/100", "type": "qemu", "node": "pve1", "status": "running", "name": "web" },
                { "id": "lxc/200", "type": "lxc", "node": "pve1", "status": "stopped" },
                { "id": "storage/local", "type": "storage", "node": "pve1", "status": "available" },
                { "id": "node/pve1", "type": "node", "status": "online" },
                { "id": "sdn/zone1", "type": "sdn", "status": "ok" }
            ]
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let resources = gateway.cluster_resources(&test_session()).await.unwrap();
    assert_eq!(resources.len(), 5);
    assert_eq!(resources[0].kind, ResourceKind::Qemu);
    assert!(resources[0].is_running());
    assert_eq!(resources[1].kind, ResourceKind::Lxc);
    assert!(!resources[1].is_running());
    assert_eq!(resources[4].kind, ResourceKind::Other);
}

#[tokio::test]
async fn authenticated_calls_map_rejected_tickets_and_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api2/json/version"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    assert!(matches!(
        gateway.list_nodes(&test_session()).await,
        Err(FleetError::Authentication(_))
    ));
    assert!(matches!(
        gateway.version(&test_session()).await,
        Err(FleetError::Connection(_))
    ));
}

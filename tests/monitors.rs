//! Monitor, monitor group, and component service tests.

use serde_json::json;
use statusgator::{
    Client, CustomMonitorRequest, ListOptions, MonitorGroupRequest, MonitorStatus,
    WebsiteMonitorRequest,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::builder("test-token")
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn monitor_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "display_name": format!("monitor {id}"),
        "monitor_type": "ServiceMonitor",
        "filtered_status": status,
        "unfiltered_status": status,
        "filter_count": 0,
        "icon_url": "https://example.com/icon.png",
        "early_warning_signal": false,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    })
}

#[tokio::test]
async fn list_monitors_with_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/monitors"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [monitor_json("m1", "up"), monitor_json("m2", "down")],
            "pagination": {"current_page": 1, "total_count": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (monitors, pagination) = client
        .monitors()
        .list("b1", Some(ListOptions::default()))
        .await
        .unwrap();

    assert_eq!(monitors.len(), 2);
    assert_eq!(monitors[1].filtered_status, MonitorStatus::Down);
    assert_eq!(pagination.total_count, 2);
    assert!(!pagination.has_next_page());
}

#[tokio::test]
async fn list_monitors_by_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/monitors"))
        .and(query_param("status", "down"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [monitor_json("m2", "down")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let monitors = client
        .monitors()
        .list_by_status("b1", MonitorStatus::Down)
        .await
        .unwrap();
    assert_eq!(monitors.len(), 1);
    assert_eq!(monitors[0].id, "m2");
}

#[tokio::test]
async fn delete_monitor() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/boards/b1/monitors/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.monitors().delete("b1", "m1").await.unwrap();
}

#[tokio::test]
async fn empty_monitor_id_fails_before_any_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.monitors().delete("b1", "").await.unwrap_err();
    assert!(matches!(err, statusgator::Error::EmptyId { .. }));
    let err = client
        .website_monitors()
        .pause("", "m1")
        .await
        .unwrap_err();
    assert!(matches!(err, statusgator::Error::EmptyId { .. }));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_website_monitor_sends_only_set_fields() {
    let server = MockServer::start().await;
    let mut data = monitor_json("wm1", "up");
    data["monitor_type"] = json!("WebsiteMonitor");
    data["url"] = json!("https://example.com");
    data["check_interval"] = json!(60);
    Mock::given(method("POST"))
        .and(path("/boards/b1/website_monitors"))
        .and(body_json(json!({
            "name": "Homepage",
            "url": "https://example.com",
            "check_interval": 60
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"success": true, "data": data})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let req = WebsiteMonitorRequest {
        name: Some("Homepage".into()),
        url: Some("https://example.com".into()),
        check_interval: Some(60),
        ..WebsiteMonitorRequest::default()
    };
    let created = client.website_monitors().create("b1", &req).await.unwrap();
    assert_eq!(created.url, "https://example.com");
    assert_eq!(created.monitor.id, "wm1");
}

#[tokio::test]
async fn pause_and_unpause_website_monitor() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/boards/b1/website_monitors/wm1/pause"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/boards/b1/website_monitors/wm1/unpause"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.website_monitors().pause("b1", "wm1").await.unwrap();
    client
        .website_monitors()
        .unpause("b1", "wm1")
        .await
        .unwrap();
}

#[tokio::test]
async fn custom_monitor_set_status_patches_status_only() {
    let server = MockServer::start().await;
    let mut data = monitor_json("cm1", "down");
    data["monitor_type"] = json!("CustomMonitor");
    Mock::given(method("PATCH"))
        .and(path("/boards/b1/custom_monitors/cm1"))
        .and(body_json(json!({"status": "down"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": data})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .custom_monitors()
        .set_status("b1", "cm1", MonitorStatus::Down)
        .await
        .unwrap();
}

#[tokio::test]
async fn create_custom_monitor() {
    let server = MockServer::start().await;
    let mut data = monitor_json("cm1", "up");
    data["monitor_type"] = json!("CustomMonitor");
    Mock::given(method("POST"))
        .and(path("/boards/b1/custom_monitors"))
        .and(body_json(json!({"name": "Backups", "description": "Nightly job"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"success": true, "data": data})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let req = CustomMonitorRequest {
        name: Some("Backups".into()),
        description: Some("Nightly job".into()),
        ..CustomMonitorRequest::default()
    };
    let created = client.custom_monitors().create("b1", &req).await.unwrap();
    assert_eq!(created.monitor.id, "cm1");
}

#[tokio::test]
async fn monitor_group_crud() {
    let server = MockServer::start().await;
    let group = json!({
        "id": "g1",
        "name": "Databases",
        "position": 1,
        "collapsed": false,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    });
    Mock::given(method("POST"))
        .and(path("/boards/b1/monitor_groups"))
        .and(body_json(json!({"name": "Databases"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"success": true, "data": group.clone()})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/monitor_groups"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": [group]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/boards/b1/monitor_groups/g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let req = MonitorGroupRequest {
        name: Some("Databases".into()),
        ..MonitorGroupRequest::default()
    };
    let created = client.monitor_groups().create("b1", &req).await.unwrap();
    assert_eq!(created.name, "Databases");

    let groups = client.monitor_groups().list("b1").await.unwrap();
    assert_eq!(groups.len(), 1);

    client.monitor_groups().delete("b1", "g1").await.unwrap();
}

#[tokio::test]
async fn components_list_by_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/monitors/m1/components"))
        .and(query_param("status", "down,warn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": "c1",
                "name": "API",
                "group_name": "Core",
                "service_id": "s1",
                "status": "down",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-02T00:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let components = client
        .components()
        .list_by_status("b1", "m1", "down,warn")
        .await
        .unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].status, MonitorStatus::Down);
}

#[tokio::test]
async fn components_list_all_for_monitor_walks_pages() {
    let server = MockServer::start().await;
    let comp = |id: &str| {
        json!({
            "id": id,
            "name": format!("component {id}"),
            "status": "up",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        })
    };
    Mock::given(method("GET"))
        .and(path("/boards/b1/monitors/m1/components"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [comp("c1")],
            "pagination": {"current_page": 1, "next_page": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/monitors/m1/components"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [comp("c2")],
            "pagination": {"current_page": 2, "next_page": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let components = client
        .components()
        .list_all_for_monitor("b1", "m1")
        .await
        .unwrap();
    let ids: Vec<&str> = components.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
}

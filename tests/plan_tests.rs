//! End-to-end tests for plan resources and the server-enforced
//! single-default invariant.

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use threescale_api::rest::resources::DefaultPlan;
use threescale_api::rest::{Create, Read, Resource};
use threescale_api::{AdminEndpoint, Client, Fields, ProviderKey, ThreeScaleConfig};

fn client_for(server: &MockServer) -> Client {
    let config = ThreeScaleConfig::builder()
        .endpoint(AdminEndpoint::new(server.uri()).unwrap())
        .provider_key(ProviderKey::new("test-key").unwrap())
        .build()
        .unwrap();
    Client::new(&config)
}

fn attrs(value: Value) -> Fields {
    value.as_object().cloned().expect("object literal")
}

#[tokio::test]
async fn test_account_plan_crud_round_trip() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let plans = client.account_plans();

    let p1 = json!({"account_plan": {"id": 1, "name": "P1", "default": false}});

    Mock::given(method("POST"))
        .and(path("/admin/api/account_plans.json"))
        .and(body_partial_json(json!({"name": "P1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(&p1))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/api/account_plans/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&p1))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/account_plans/1.json"))
        .and(body_partial_json(json!({"id": 1, "name": "P1-renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"account_plan": {"id": 1, "name": "P1-renamed", "default": false}}),
        ))
        .mount(&server)
        .await;

    let mut plan = plans.create(attrs(json!({"name": "P1"}))).await.unwrap();
    assert_eq!(plan.get("name"), Some(&json!("P1")));

    let read_back = plans.read(1).await.unwrap();
    assert_eq!(read_back.get("name"), Some(&json!("P1")));

    plan.set("name", json!("P1-renamed"));
    plan.update().await.unwrap();
    assert_eq!(plan.get("name"), Some(&json!("P1-renamed")));
}

#[tokio::test]
async fn test_single_default_is_server_enforced_and_faithfully_reflected() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let plans = client.account_plans();

    // set_default is a bare PUT on the default sub-path.
    Mock::given(method("PUT"))
        .and(path("/admin/api/account_plans/1/default.json"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"account_plan": {"id": 1, "name": "P1", "default": true}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/account_plans/2/default.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"account_plan": {"id": 2, "name": "P2", "default": true}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    // Before P2 is defaulted, reading P1 shows default = true...
    Mock::given(method("GET"))
        .and(path("/admin/api/account_plans/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"account_plan": {"id": 1, "name": "P1", "default": true}}),
        ))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    // ...afterwards the server has flipped it; the client just reflects it.
    Mock::given(method("GET"))
        .and(path("/admin/api/account_plans/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"account_plan": {"id": 1, "name": "P1", "default": false}}),
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/api/account_plans.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plans": [
                {"account_plan": {"id": 1, "name": "P1", "default": false}},
                {"account_plan": {"id": 2, "name": "P2", "default": true}},
            ]
        })))
        .mount(&server)
        .await;

    let defaulted = plans.set_default(1).await.unwrap();
    assert_eq!(defaulted.get("default"), Some(&json!(true)));
    assert_eq!(plans.read(1).await.unwrap().get("default"), Some(&json!(true)));

    plans.set_default(2).await.unwrap();

    // P1 lost its default on the server; the next read shows it.
    assert_eq!(
        plans.read(1).await.unwrap().get("default"),
        Some(&json!(false))
    );

    let current = plans.get_default().await.unwrap().expect("a default plan");
    assert_eq!(current.id(), Some(2));
}

#[tokio::test]
async fn test_entity_set_default_uses_the_entity_id() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let plans = client.account_plans();

    Mock::given(method("PUT"))
        .and(path("/admin/api/account_plans/9/default.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"account_plan": {"id": 9, "default": true}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let plan = Resource::new(&plans, Some(attrs(json!({"id": 9, "default": false}))));
    let defaulted = plan.set_default().await.unwrap();
    assert_eq!(defaulted.get("default"), Some(&json!(true)));
}

#[tokio::test]
async fn test_application_plans_nest_under_their_service() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let services = client.services();

    Mock::given(method("POST"))
        .and(path("/admin/api/services/7/application_plans.json"))
        .and(body_partial_json(json!({"name": "basic"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            json!({"application_plan": {"id": 3, "name": "basic", "default": false}}),
        ))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/services/7/application_plans/3/default.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"application_plan": {"id": 3, "name": "basic", "default": true}}),
        ))
        .mount(&server)
        .await;

    let service = Resource::new(&services, Some(attrs(json!({"id": 7}))));
    let plans = service.application_plans().unwrap();

    let plan = plans
        .create(attrs(json!({"name": "basic", "system_name": "basic"})))
        .await
        .unwrap();
    let defaulted = plan.set_default().await.unwrap();
    assert_eq!(defaulted.get("default"), Some(&json!(true)));
}

#[tokio::test]
async fn test_plan_limits_compose_plan_and_metric_ids() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let services = client.services();

    Mock::given(method("POST"))
        .and(path("/admin/api/application_plans/3/metrics/21/limits.json"))
        .and(body_partial_json(json!({"period": "minute", "value": 10})))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            json!({"limit": {"id": 100, "period": "minute", "value": 10}}),
        ))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/application_plans/3/metrics/21/limits/100.json"))
        .and(body_partial_json(json!({"id": 100, "value": 100})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"limit": {"id": 100, "period": "minute", "value": 100}}),
        ))
        .mount(&server)
        .await;

    let service = Resource::new(&services, Some(attrs(json!({"id": 7}))));
    let plan_manager = service.application_plans().unwrap();
    let plan = Resource::new(&plan_manager, Some(attrs(json!({"id": 3}))));
    let metric_manager = service.metrics().unwrap();
    let metric = Resource::new(&metric_manager, Some(attrs(json!({"id": 21}))));

    let limits = plan.limits(&metric).unwrap();
    let mut limit = limits
        .create(attrs(json!({"period": "minute", "value": 10})))
        .await
        .unwrap();
    assert_eq!(limit.get("value"), Some(&json!(10)));

    limit.set("value", json!(100));
    limit.update().await.unwrap();
    assert_eq!(limit.get("value"), Some(&json!(100)));
}

#[tokio::test]
async fn test_service_plans_list_all_hits_the_flat_endpoint() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let services = client.services();

    Mock::given(method("GET"))
        .and(path("/admin/api/service_plans.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plans": [
                {"service_plan": {"id": 1, "name": "default"}},
                {"service_plan": {"id": 2, "name": "premium"}},
            ]
        })))
        .mount(&server)
        .await;

    let service = Resource::new(&services, Some(attrs(json!({"id": 7}))));
    let plans = service.service_plans().unwrap();
    let all = plans.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
}

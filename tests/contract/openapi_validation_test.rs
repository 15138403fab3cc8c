/// OpenAPI 3.0 contract checks
///
/// Keeps specs/001-credit-request-api/contracts/openapi.yaml in step with the
/// routes and DTOs the service actually exposes.
use credit_request_system::credits::CreditStatus;
use serde_json::Value;
use std::collections::HashSet;

const OPENAPI_YAML: &str =
    include_str!("../../specs/001-credit-request-api/contracts/openapi.yaml");

fn contract() -> Value {
    serde_yaml::from_str(OPENAPI_YAML).expect("Failed to parse OpenAPI YAML")
}

#[test]
fn test_openapi_version_is_3_0_x() {
    let contract = contract();
    let version = contract["openapi"]
        .as_str()
        .expect("OpenAPI version should be a string");

    assert!(
        version.starts_with("3.0"),
        "OpenAPI version should be 3.0.x, got: {}",
        version
    );
}

#[test]
fn test_openapi_has_info_and_servers() {
    let contract = contract();

    assert!(contract["info"]["title"].is_string(), "Info.title should be present");
    assert!(contract["info"]["version"].is_string(), "Info.version should be present");

    let servers = contract["servers"].as_array().expect("Servers should be an array");
    assert!(!servers.is_empty(), "At least one server should be defined");
}

#[test]
fn test_openapi_routes_match_service() {
    let contract = contract();
    let paths = contract["paths"].as_object().expect("Paths should be an object");

    let required = [
        ("/api/customers", "post"),
        ("/api/customers", "patch"),
        ("/api/customers/{id}", "get"),
        ("/api/customers/{id}", "delete"),
        ("/api/credits", "post"),
        ("/api/credits", "get"),
        ("/api/credits/{creditCode}", "get"),
        ("/health", "get"),
        ("/ready", "get"),
    ];

    for (path, method) in required {
        assert!(
            paths.get(path).and_then(|p| p.get(method)).is_some(),
            "{} {} should be defined",
            method.to_uppercase(),
            path
        );
    }
}

#[test]
fn test_openapi_operation_ids_are_unique() {
    let contract = contract();
    let paths = contract["paths"].as_object().expect("Paths should be an object");
    let mut operation_ids = HashSet::new();

    for (path, path_item) in paths {
        let Some(obj) = path_item.as_object() else {
            continue;
        };
        for (method, operation) in obj {
            if !["get", "post", "put", "patch", "delete"].contains(&method.as_str()) {
                continue;
            }
            let id = operation["operationId"]
                .as_str()
                .unwrap_or_else(|| panic!("{} {} has no operationId", method, path));
            assert!(
                operation_ids.insert(id.to_string()),
                "Duplicate operationId {}",
                id
            );
            assert!(
                operation["responses"].is_object(),
                "{} {} should declare responses",
                method,
                path
            );
        }
    }
}

#[test]
fn test_openapi_credit_status_enum_matches_implementation() {
    let contract = contract();
    let values: HashSet<String> = contract["components"]["schemas"]["CreditView"]["properties"]
        ["status"]["enum"]
        .as_array()
        .expect("CreditView.status should be an enum")
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();

    let implemented: HashSet<String> = [
        CreditStatus::InProgress,
        CreditStatus::Approved,
        CreditStatus::Rejected,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    assert_eq!(values, implemented);
}

#[test]
fn test_openapi_customer_view_has_no_password() {
    let contract = contract();
    let properties = contract["components"]["schemas"]["CustomerView"]["properties"]
        .as_object()
        .expect("CustomerView should have properties");

    assert!(!properties.contains_key("password"));
    assert!(properties.contains_key("cpf"));
}

use badgewall::core::CourseSource;
use badgewall::{BadgeError, CliConfig, JsonpClient};
use httpmock::prelude::*;

fn config_for(server: &MockServer) -> CliConfig {
    CliConfig {
        endpoint: server.base_url(),
        user: "sergiocruz".to_string(),
        callback: "showCourses".to_string(),
        output_path: "./output".to_string(),
        config: None,
        verbose: false,
    }
}

#[tokio::test]
async fn test_fetch_hits_user_endpoint_with_callback_param() {
    let server = MockServer::start();
    let mock_payload = serde_json::json!({
        "courses": {
            "completed": [
                {"title": "Ruby Bootcamp", "badge": "https://example.com/badge1.png", "url": "https://example.com/courses/ruby"}
            ]
        }
    });

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/sergiocruz.json")
            .query_param("callback", "showCourses");
        then.status(200)
            .header("Content-Type", "application/javascript")
            .body(format!("showCourses({});", mock_payload));
    });

    let client = JsonpClient::new(config_for(&server));
    let response = client.completed_courses().await.unwrap();

    api_mock.assert();
    assert_eq!(response.courses.completed.len(), 1);
    assert_eq!(response.courses.completed[0].title, "Ruby Bootcamp");
    assert_eq!(
        response.courses.completed[0].badge,
        "https://example.com/badge1.png"
    );
    assert_eq!(
        response.courses.completed[0].url,
        "https://example.com/courses/ruby"
    );
}

#[tokio::test]
async fn test_fetch_accepts_empty_completed_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/sergiocruz.json");
        then.status(200)
            .header("Content-Type", "application/javascript")
            .body(r#"showCourses({"courses":{"completed":[]}});"#);
    });

    let client = JsonpClient::new(config_for(&server));
    let response = client.completed_courses().await.unwrap();

    assert!(response.courses.completed.is_empty());
}

#[tokio::test]
async fn test_fetch_issues_exactly_one_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/users/sergiocruz.json");
        then.status(200)
            .header("Content-Type", "application/javascript")
            .body(r#"showCourses({"courses":{"completed":[]}});"#);
    });

    let client = JsonpClient::new(config_for(&server));
    client.completed_courses().await.unwrap();

    api_mock.assert_hits(1);
}

#[tokio::test]
async fn test_fetch_rejects_wrong_callback_wrapper() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/sergiocruz.json");
        then.status(200)
            .header("Content-Type", "application/javascript")
            .body(r#"someOtherCallback({"courses":{"completed":[]}});"#);
    });

    let client = JsonpClient::new(config_for(&server));
    let err = client.completed_courses().await.unwrap_err();

    assert!(matches!(err, BadgeError::PayloadError { .. }));
}

#[tokio::test]
async fn test_fetch_rejects_non_json_argument() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/sergiocruz.json");
        then.status(200)
            .header("Content-Type", "application/javascript")
            .body("showCourses(undefined);");
    });

    let client = JsonpClient::new(config_for(&server));
    let err = client.completed_courses().await.unwrap_err();

    assert!(matches!(err, BadgeError::SerializationError(_)));
}

#[tokio::test]
async fn test_fetch_surfaces_not_found_user() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/sergiocruz.json");
        then.status(404);
    });

    let client = JsonpClient::new(config_for(&server));
    let err = client.completed_courses().await.unwrap_err();

    assert!(matches!(err, BadgeError::ApiError(_)));
}

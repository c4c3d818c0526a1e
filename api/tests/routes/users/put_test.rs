#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, json_request, make_test_app, seed_users};
    use axum::http::StatusCode;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn admin_promotes_student_to_teacher() {
        let (app, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let auth = bearer(&app_state, &users.admin);

        let uri = format!("/api/users/{}", users.student.id);
        let body = json!({ "role": "TEACHER", "name": "Sam Teacher" });
        let response = app
            .oneshot(json_request("PUT", &uri, Some(&auth), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["role"], "TEACHER");
        assert_eq!(json["data"]["name"], "Sam Teacher");
        assert_eq!(json["data"]["email"], "sam@school.test");
    }

    #[tokio::test]
    #[serial]
    async fn email_taken_by_someone_else_conflicts() {
        let (app, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let auth = bearer(&app_state, &users.admin);

        let uri = format!("/api/users/{}", users.student.id);
        let body = json!({ "email": "sue@school.test" });
        let response = app
            .oneshot(json_request("PUT", &uri, Some(&auth), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    #[serial]
    async fn missing_user_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let auth = bearer(&app_state, &users.admin);

        let body = json!({ "name": "Nobody" });
        let response = app
            .oneshot(json_request("PUT", "/api/users/9999", Some(&auth), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn student_cannot_update_users() {
        let (app, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let auth = bearer(&app_state, &users.student);

        let uri = format!("/api/users/{}", users.student.id);
        let body = json!({ "role": "ADMIN" });
        let response = app
            .oneshot(json_request("PUT", &uri, Some(&auth), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

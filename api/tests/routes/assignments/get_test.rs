#[cfg(test)]
mod tests {
    use super::super::common::setup_test_data;
    use crate::helpers::{bearer, get_json_body, json_request, make_test_app};
    use axum::http::StatusCode;
    use db::models::submission::Model as SubmissionModel;
    use serial_test::serial;
    use tower::ServiceExt;

    // --- GET /api/assignments/{assignment_id} ---

    #[tokio::test]
    #[serial]
    async fn members_read_assignment() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let uri = format!("/api/assignments/{}", data.open.id);

        for user in [&data.users.admin, &data.users.teacher, &data.users.student] {
            let auth = bearer(&app_state, user);
            let response = app
                .clone()
                .oneshot(json_request("GET", &uri, Some(&auth), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = get_json_body(response).await;
            assert_eq!(json["data"]["title"], "Lab report");
            assert_eq!(json["data"]["description"], "Osmosis");
        }

        for user in [&data.users.other_teacher, &data.users.other_student] {
            let auth = bearer(&app_state, user);
            let response = app
                .clone()
                .oneshot(json_request("GET", &uri, Some(&auth), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }
    }

    #[tokio::test]
    #[serial]
    async fn missing_assignment_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let auth = bearer(&app_state, &data.users.admin);

        let response = app
            .oneshot(json_request("GET", "/api/assignments/9999", Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // --- GET /api/assignments/{assignment_id}/submissions ---

    #[tokio::test]
    #[serial]
    async fn owner_lists_submissions() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        SubmissionModel::submit(app_state.db(), data.open.id, data.users.student.id, "done")
            .await
            .unwrap();
        let uri = format!("/api/assignments/{}/submissions", data.open.id);

        let auth = bearer(&app_state, &data.users.teacher);
        let response = app
            .clone()
            .oneshot(json_request("GET", &uri, Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        let items = json["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["student_id"], data.users.student.id);

        for user in [&data.users.other_teacher, &data.users.student] {
            let auth = bearer(&app_state, user);
            let response = app
                .clone()
                .oneshot(json_request("GET", &uri, Some(&auth), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }
    }

    // --- GET /api/assignments/{assignment_id}/submissions/me ---

    #[tokio::test]
    #[serial]
    async fn student_reads_own_submission() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let auth = bearer(&app_state, &data.users.student);
        let uri = format!("/api/assignments/{}/submissions/me", data.open.id);

        let response = app
            .clone()
            .oneshot(json_request("GET", &uri, Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        SubmissionModel::submit(app_state.db(), data.open.id, data.users.student.id, "mine")
            .await
            .unwrap();
        let response = app
            .clone()
            .oneshot(json_request("GET", &uri, Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["content"], "mine");

        let teacher = bearer(&app_state, &data.users.teacher);
        let response = app
            .oneshot(json_request("GET", &uri, Some(&teacher), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::setup_test_data;
    use crate::helpers::{bearer, get_json_body, json_request, make_test_app};
    use axum::http::StatusCode;
    use db::models::submission::Model as SubmissionModel;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    // --- PUT /api/assignments/{assignment_id} ---

    #[tokio::test]
    #[serial]
    async fn owner_updates_and_clears_due_date() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let auth = bearer(&app_state, &data.users.teacher);
        let uri = format!("/api/assignments/{}", data.closed.id);

        let body = json!({ "title": "Quiz (extended)", "due_date": null, "max_score": 20 });
        let response = app
            .oneshot(json_request("PUT", &uri, Some(&auth), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["title"], "Quiz (extended)");
        assert!(json["data"]["due_date"].is_null());
        assert_eq!(json["data"]["max_score"], 20);
    }

    #[tokio::test]
    #[serial]
    async fn update_forbidden_for_non_owner() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let uri = format!("/api/assignments/{}", data.open.id);

        for user in [&data.users.other_teacher, &data.users.student] {
            let auth = bearer(&app_state, user);
            let response = app
                .clone()
                .oneshot(json_request("PUT", &uri, Some(&auth), Some(json!({ "title": "x" }))))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }
    }

    #[tokio::test]
    #[serial]
    async fn max_score_cannot_drop_below_awarded_grades() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let submission =
            SubmissionModel::submit(app_state.db(), data.open.id, data.users.student.id, "done")
                .await
                .unwrap();
        SubmissionModel::grade(app_state.db(), submission.id, 45, None)
            .await
            .unwrap();
        let auth = bearer(&app_state, &data.users.teacher);
        let uri = format!("/api/assignments/{}", data.open.id);

        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, Some(&auth), Some(json!({ "max_score": 10 }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(json_request("GET", &uri, Some(&auth), None))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["max_score"], 50);

        // equal to the highest grade is fine
        let response = app
            .oneshot(json_request("PUT", &uri, Some(&auth), Some(json!({ "max_score": 45 }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["max_score"], 45);
    }

    // --- PUT /api/assignments/{assignment_id}/submissions/{submission_id}/grade ---

    #[tokio::test]
    #[serial]
    async fn owner_grades_submission() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let submission =
            SubmissionModel::submit(app_state.db(), data.open.id, data.users.student.id, "done")
                .await
                .unwrap();
        let auth = bearer(&app_state, &data.users.teacher);
        let uri = format!(
            "/api/assignments/{}/submissions/{}/grade",
            data.open.id, submission.id
        );

        let body = json!({ "score": 45, "feedback": "Nice" });
        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, Some(&auth), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["score"], 45);
        assert_eq!(json["data"]["feedback"], "Nice");
        assert!(json["data"]["graded_at"].is_string());

        // the student sees the grade
        let student = bearer(&app_state, &data.users.student);
        let me = format!("/api/assignments/{}/submissions/me", data.open.id);
        let response = app
            .oneshot(json_request("GET", &me, Some(&student), None))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["score"], 45);
    }

    #[tokio::test]
    #[serial]
    async fn grade_rules() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let submission =
            SubmissionModel::submit(app_state.db(), data.open.id, data.users.student.id, "done")
                .await
                .unwrap();
        let teacher = bearer(&app_state, &data.users.teacher);
        let uri = format!(
            "/api/assignments/{}/submissions/{}/grade",
            data.open.id, submission.id
        );

        // above max_score (50) and negative
        for score in [51, -1] {
            let response = app
                .clone()
                .oneshot(json_request("PUT", &uri, Some(&teacher), Some(json!({ "score": score }))))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "score {score}");
        }

        // submission belongs to a different assignment
        let wrong = format!(
            "/api/assignments/{}/submissions/{}/grade",
            data.closed.id, submission.id
        );
        let response = app
            .clone()
            .oneshot(json_request("PUT", &wrong, Some(&teacher), Some(json!({ "score": 5 }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // students cannot grade
        let student = bearer(&app_state, &data.users.student);
        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, Some(&student), Some(json!({ "score": 50 }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        // other teachers cannot grade
        let other = bearer(&app_state, &data.users.other_teacher);
        let response = app
            .oneshot(json_request("PUT", &uri, Some(&other), Some(json!({ "score": 50 }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

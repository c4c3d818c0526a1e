#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, json_request, make_test_app, seed_users};
    use axum::http::StatusCode;
    use db::models::class::Model as ClassModel;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn owner_renames_and_clears_description() {
        let (app, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let class = ClassModel::create(app_state.db(), "Biology", Some("Cells"), users.teacher.id)
            .await
            .unwrap();
        let auth = bearer(&app_state, &users.teacher);

        let uri = format!("/api/classes/{}", class.id);
        let body = json!({ "name": "Biology II", "description": null });
        let response = app
            .oneshot(json_request("PUT", &uri, Some(&auth), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["name"], "Biology II");
        assert!(json["data"]["description"].is_null());
    }

    #[tokio::test]
    #[serial]
    async fn omitted_description_is_kept() {
        let (app, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let class = ClassModel::create(app_state.db(), "Biology", Some("Cells"), users.teacher.id)
            .await
            .unwrap();
        let auth = bearer(&app_state, &users.teacher);

        let uri = format!("/api/classes/{}", class.id);
        let response = app
            .oneshot(json_request("PUT", &uri, Some(&auth), Some(json!({ "name": "Bio" }))))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["description"], "Cells");
    }

    #[tokio::test]
    #[serial]
    async fn only_admin_can_reassign() {
        let (app, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let class = ClassModel::create(app_state.db(), "Biology", None, users.teacher.id)
            .await
            .unwrap();
        let uri = format!("/api/classes/{}", class.id);
        let body = json!({ "teacher_id": users.other_teacher.id });

        let teacher = bearer(&app_state, &users.teacher);
        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, Some(&teacher), Some(body.clone())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let admin = bearer(&app_state, &users.admin);
        let response = app
            .oneshot(json_request("PUT", &uri, Some(&admin), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["teacher_id"], users.other_teacher.id);
    }

    #[tokio::test]
    #[serial]
    async fn non_owner_and_student_are_forbidden() {
        let (app, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let class = ClassModel::create(app_state.db(), "Biology", None, users.teacher.id)
            .await
            .unwrap();
        let uri = format!("/api/classes/{}", class.id);

        for user in [&users.other_teacher, &users.student] {
            let auth = bearer(&app_state, user);
            let response = app
                .clone()
                .oneshot(json_request("PUT", &uri, Some(&auth), Some(json!({ "name": "Mine" }))))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }
    }
}

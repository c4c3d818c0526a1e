#[cfg(test)]
mod tests {
    use crate::helpers::{TestUsers, bearer, get_json_body, json_request, make_test_app, seed_users};
    use axum::http::StatusCode;
    use db::models::{
        assignment::Model as AssignmentModel, class::Model as ClassModel,
        class_enrollment::Model as EnrollmentModel,
    };
    use sea_orm::DatabaseConnection;
    use serial_test::serial;
    use tower::ServiceExt;

    struct TestData {
        users: TestUsers,
        biology: ClassModel,
        chemistry: ClassModel,
    }

    /// Tess teaches Biology (Sam enrolled), Otto teaches Chemistry (nobody enrolled).
    async fn setup_test_data(db: &DatabaseConnection) -> TestData {
        let users = seed_users(db).await;
        let biology = ClassModel::create(db, "Biology", Some("Cells"), users.teacher.id)
            .await
            .unwrap();
        let chemistry = ClassModel::create(db, "Chemistry", None, users.other_teacher.id)
            .await
            .unwrap();
        EnrollmentModel::enroll(db, biology.id, users.student.id)
            .await
            .unwrap();
        TestData {
            users,
            biology,
            chemistry,
        }
    }

    fn names(json: &serde_json::Value) -> Vec<String> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect()
    }

    // --- GET /api/classes ---

    #[tokio::test]
    #[serial]
    async fn list_is_scoped_by_role() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let cases = [
            (&data.users.admin, vec!["Biology", "Chemistry"]),
            (&data.users.teacher, vec!["Biology"]),
            (&data.users.other_teacher, vec!["Chemistry"]),
            (&data.users.student, vec!["Biology"]),
            (&data.users.other_student, vec![]),
        ];

        for (user, expected) in cases {
            let auth = bearer(&app_state, user);
            let response = app
                .clone()
                .oneshot(json_request("GET", "/api/classes", Some(&auth), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let mut got = names(&get_json_body(response).await);
            got.sort();
            assert_eq!(got, expected, "classes for {}", user.name);
        }
    }

    #[tokio::test]
    #[serial]
    async fn list_requires_token() {
        let (app, _) = make_test_app().await;
        let response = app
            .oneshot(json_request("GET", "/api/classes", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // --- GET /api/classes/{class_id} ---

    #[tokio::test]
    #[serial]
    async fn members_can_read_a_class() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let uri = format!("/api/classes/{}", data.biology.id);

        for user in [&data.users.admin, &data.users.teacher, &data.users.student] {
            let auth = bearer(&app_state, user);
            let response = app
                .clone()
                .oneshot(json_request("GET", &uri, Some(&auth), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = get_json_body(response).await;
            assert_eq!(json["data"]["teacher_id"], data.users.teacher.id);
            assert_eq!(json["data"]["description"], "Cells");
        }
    }

    #[tokio::test]
    #[serial]
    async fn outsiders_cannot_read_a_class() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let uri = format!("/api/classes/{}", data.biology.id);

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
    async fn missing_class_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let auth = bearer(&app_state, &data.users.admin);

        let response = app
            .oneshot(json_request("GET", "/api/classes/9999", Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // --- GET /api/classes/{class_id}/students ---

    #[tokio::test]
    #[serial]
    async fn owner_lists_students() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let auth = bearer(&app_state, &data.users.teacher);

        let uri = format!("/api/classes/{}/students", data.biology.id);
        let response = app
            .oneshot(json_request("GET", &uri, Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(names(&json), vec!["Sam Student"]);
    }

    #[tokio::test]
    #[serial]
    async fn roster_is_closed_to_students_and_other_teachers() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let uri = format!("/api/classes/{}/students", data.biology.id);

        let student = bearer(&app_state, &data.users.student);
        let response = app
            .clone()
            .oneshot(json_request("GET", &uri, Some(&student), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let other = bearer(&app_state, &data.users.other_teacher);
        let response = app
            .oneshot(json_request("GET", &uri, Some(&other), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    // --- GET /api/classes/{class_id}/assignments ---

    #[tokio::test]
    #[serial]
    async fn enrolled_student_lists_assignments() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        AssignmentModel::create(app_state.db(), data.biology.id, "Lab 1", None, None, 10)
            .await
            .unwrap();
        AssignmentModel::create(app_state.db(), data.chemistry.id, "Titration", None, None, 10)
            .await
            .unwrap();

        let auth = bearer(&app_state, &data.users.student);
        let uri = format!("/api/classes/{}/assignments", data.biology.id);
        let response = app
            .clone()
            .oneshot(json_request("GET", &uri, Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        let items = json["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Lab 1");
        assert_eq!(items[0]["max_score"], 10);

        let uri = format!("/api/classes/{}/assignments", data.chemistry.id);
        let response = app
            .oneshot(json_request("GET", &uri, Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

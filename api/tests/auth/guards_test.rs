#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, make_test_app, seed_users};
    use api::auth::{
        AuthUser,
        guards::{allow_admin, allow_authenticated, allow_student, allow_teacher},
    };
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
    };
    use serial_test::serial;
    use tower::ServiceExt;
    use util::state::AppState;

    async fn whoami(Extension(user): Extension<AuthUser>) -> String {
        user.id().to_string()
    }

    fn guarded(app_state: &AppState) -> Router {
        Router::new()
            .route(
                "/any",
                get(whoami).route_layer(from_fn_with_state(app_state.clone(), allow_authenticated)),
            )
            .route(
                "/admin",
                get(whoami).route_layer(from_fn_with_state(app_state.clone(), allow_admin)),
            )
            .route(
                "/teacher",
                get(whoami).route_layer(from_fn_with_state(app_state.clone(), allow_teacher)),
            )
            .route(
                "/student",
                get(whoami).route_layer(from_fn_with_state(app_state.clone(), allow_student)),
            )
            .with_state(app_state.clone())
    }

    async fn status_for(app: &Router, path: &str, auth: Option<&str>) -> StatusCode {
        let mut req = Request::builder().uri(path);
        if let Some(auth) = auth {
            req = req.header("Authorization", auth);
        }
        app.clone()
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    #[serial]
    async fn missing_or_bad_token_is_unauthorized_everywhere() {
        let (_, app_state) = make_test_app().await;
        let app = guarded(&app_state);

        for path in ["/any", "/admin", "/teacher", "/student"] {
            assert_eq!(status_for(&app, path, None).await, StatusCode::UNAUTHORIZED);
            assert_eq!(
                status_for(&app, path, Some("Bearer not.a.jwt")).await,
                StatusCode::UNAUTHORIZED
            );
            assert_eq!(
                status_for(&app, path, Some("Basic dXNlcjpwYXNz")).await,
                StatusCode::UNAUTHORIZED
            );
        }
    }

    #[tokio::test]
    #[serial]
    async fn role_matrix() {
        let (_, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let app = guarded(&app_state);

        let admin = bearer(&app_state, &users.admin);
        let teacher = bearer(&app_state, &users.teacher);
        let student = bearer(&app_state, &users.student);

        let cases = [
            ("/any", &admin, StatusCode::OK),
            ("/any", &teacher, StatusCode::OK),
            ("/any", &student, StatusCode::OK),
            ("/admin", &admin, StatusCode::OK),
            ("/admin", &teacher, StatusCode::FORBIDDEN),
            ("/admin", &student, StatusCode::FORBIDDEN),
            ("/teacher", &admin, StatusCode::OK),
            ("/teacher", &teacher, StatusCode::OK),
            ("/teacher", &student, StatusCode::FORBIDDEN),
            ("/student", &admin, StatusCode::FORBIDDEN),
            ("/student", &teacher, StatusCode::FORBIDDEN),
            ("/student", &student, StatusCode::OK),
        ];

        for (path, auth, expected) in cases {
            assert_eq!(
                status_for(&app, path, Some(auth.as_str())).await,
                expected,
                "{path} with {auth}"
            );
        }
    }

    #[tokio::test]
    #[serial]
    async fn token_signed_with_another_secret_is_rejected() {
        let (_, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let app = guarded(&app_state);

        let foreign = util::state::JwtKeys::new("some-other-secret", 60);
        let (token, _) =
            api::auth::generate_jwt(&foreign, users.admin.id, users.admin.role).unwrap();

        assert_eq!(
            status_for(&app, "/admin", Some(&format!("Bearer {token}"))).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    #[serial]
    async fn expired_token_is_rejected() {
        let (_, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let app = guarded(&app_state);

        // Beyond jsonwebtoken's default 60s leeway.
        let claims = api::auth::Claims {
            sub: users.student.id,
            role: users.student.role,
            exp: (chrono::Utc::now() - chrono::Duration::minutes(5)).timestamp() as usize,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(
                crate::helpers::app::TEST_JWT_SECRET.as_bytes(),
            ),
        )
        .unwrap();

        assert_eq!(
            status_for(&app, "/any", Some(&format!("Bearer {token}"))).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    #[serial]
    async fn guard_exposes_caller_to_handler() {
        let (_, app_state) = make_test_app().await;
        let users = seed_users(app_state.db()).await;
        let app = guarded(&app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/teacher")
                    .header("Authorization", bearer(&app_state, &users.teacher))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, users.teacher.id.to_string());
    }
}

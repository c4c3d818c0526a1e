use crate::helpers::{TestUsers, seed_users};
use chrono::{Duration, Utc};
use db::models::{
    assignment::Model as AssignmentModel, class::Model as ClassModel,
    class_enrollment::Model as EnrollmentModel,
};
use sea_orm::DatabaseConnection;

pub struct TestData {
    pub users: TestUsers,
    pub class: ClassModel,
    pub open: AssignmentModel,
    pub closed: AssignmentModel,
}

/// Tess teaches Biology with Sam enrolled. `open` is due next week, `closed`
/// was due yesterday. Sue is not enrolled anywhere.
pub async fn setup_test_data(db: &DatabaseConnection) -> TestData {
    let users = seed_users(db).await;
    let class = ClassModel::create(db, "Biology", None, users.teacher.id)
        .await
        .unwrap();
    EnrollmentModel::enroll(db, class.id, users.student.id)
        .await
        .unwrap();

    let open = AssignmentModel::create(
        db,
        class.id,
        "Lab report",
        Some("Osmosis"),
        Some(Utc::now() + Duration::days(7)),
        50,
    )
    .await
    .unwrap();
    let closed = AssignmentModel::create(
        db,
        class.id,
        "Quiz",
        None,
        Some(Utc::now() - Duration::days(1)),
        10,
    )
    .await
    .unwrap();

    TestData {
        users,
        class,
        open,
        closed,
    }
}

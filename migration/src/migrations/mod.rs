pub mod m202601100001_create_users;
pub mod m202601100002_create_classes;
pub mod m202601100003_create_class_enrollments;
pub mod m202601100004_create_assignments;
pub mod m202601100005_create_submissions;

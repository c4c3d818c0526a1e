pub mod assignment;
pub mod class;
pub mod class_enrollment;
pub mod submission;
pub mod user;

pub use assignment::Entity as Assignment;
pub use class::Entity as Class;
pub use class_enrollment::Entity as ClassEnrollment;
pub use submission::Entity as Submission;
pub use user::Entity as User;

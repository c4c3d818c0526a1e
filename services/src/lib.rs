//! Controllers for the classroom API.
//!
//! Each service exposes async associated functions taking a database handle and,
//! where ownership matters, the [`Actor`] making the request. Route handlers in
//! the `api` crate stay thin and delegate everything here.

pub mod actor;
pub mod assignment_service;
pub mod class_service;
pub mod error;
pub mod user_service;

pub use actor::Actor;
pub use error::ServiceError;

pub mod health;
pub mod persons;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use persons::{create_person, delete_person, get_person, list_persons, update_person};

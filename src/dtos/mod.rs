pub mod persons;

pub use persons::{CreatePersonRequest, PersonListResponse, PersonResponse, UpdatePersonRequest};

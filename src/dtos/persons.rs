use crate::models::Person;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub name: String,
    pub occupation: String,
    pub address: String,
}

/// Partial update. A field left out of the request body stays untouched;
/// a field that is present replaces the stored value, even when it is an
/// empty string.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePersonRequest {
    pub name: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<String>,
}

impl UpdatePersonRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.occupation.is_none() && self.address.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: String,
    pub name: String,
    pub occupation: String,
    pub address: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.to_hex(),
            name: person.name,
            occupation: person.occupation,
            address: person.address,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PersonListResponse {
    pub persons: Vec<PersonResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_as_none() {
        let req: UpdatePersonRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
        assert!(req.occupation.is_none());
        assert!(req.address.is_none());
        assert!(req.is_empty());
    }

    #[test]
    fn empty_string_is_a_provided_value() {
        let req: UpdatePersonRequest = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some(""));
        assert!(req.occupation.is_none());
        assert!(!req.is_empty());
    }

    #[test]
    fn partial_body_leaves_other_fields_absent() {
        let req: UpdatePersonRequest =
            serde_json::from_str(r#"{"occupation": "plumber"}"#).unwrap();
        assert!(req.name.is_none());
        assert_eq!(req.occupation.as_deref(), Some("plumber"));
        assert!(req.address.is_none());
    }
}

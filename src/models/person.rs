use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A person record as stored in the `people` collection.
///
/// The `_id` is assigned when the record is built for insertion and never
/// changes afterwards. The hex form of the ObjectId is what callers see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub occupation: String,
    pub address: String,
}

impl Person {
    pub fn new(name: String, occupation: String, address: String) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            occupation,
            address,
        }
    }
}

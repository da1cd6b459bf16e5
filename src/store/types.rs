use serde::{Deserialize, Serialize};

/// A single user profile as stored in the dataset and returned on the wire.
///
/// Field names are fixed by the dataset schema; the only one that differs
/// from the Rust spelling is `isActive`. `balance` is currency-formatted
/// text and is never parsed numerically. Equality is structural over all
/// fields, which the filter relies on for deduplication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub guid: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub balance: String,
    pub picture: String,
    pub age: i32,
    pub eye_color: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub about: String,
    pub registered: String,
    pub favorite_fruit: String,
}

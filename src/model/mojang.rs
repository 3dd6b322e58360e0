use serde::{Deserialize, Serialize};

/// Body of `GET /users/profiles/minecraft/{name}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileDTO {
    /// Undashed UUID.
    pub id: String,
    /// Name with the owner's capitalization.
    pub name: String,
}

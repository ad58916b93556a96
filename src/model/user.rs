use serde::{Deserialize, Serialize};

/// The two account roles the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Patient,
    Doctor,
}

/// A user account, tagged by role.
///
/// Doctor-only fields (`specialization`, `experience`, `rating`) live on the
/// `Doctor` variant so they cannot exist on a patient record. The enum is
/// internally tagged on `role`, which keeps the persisted JSON flat:
/// `{"id":"patient1","role":"patient",...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum User {
    Patient {
        id: String,
        email: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        avatar: Option<String>,
    },
    Doctor {
        id: String,
        email: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        avatar: Option<String>,
        specialization: String,
        experience: u32,
        rating: f64,
    },
}

impl User {
    pub fn id(&self) -> &str {
        match self {
            User::Patient { id, .. } | User::Doctor { id, .. } => id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            User::Patient { email, .. } | User::Doctor { email, .. } => email,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            User::Patient { name, .. } | User::Doctor { name, .. } => name,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            User::Patient { .. } => UserRole::Patient,
            User::Doctor { .. } => UserRole::Doctor,
        }
    }
}

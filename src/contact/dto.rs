use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::form::{lenient_text, present};

pub const INITIAL_STATUS: &str = "new";
pub const DEFAULT_PREFERRED_CONTACT: &str = "email";

/// POST /api/contact/submit body.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(
        default,
        rename = "preferredContact",
        alias = "preferred_contact",
        deserialize_with = "lenient_text"
    )]
    pub preferred_contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub preferred_contact: String,
}

impl TryFrom<ContactRequest> for NewContact {
    type Error = ApiError;

    fn try_from(req: ContactRequest) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(message)) =
            (present(req.name), present(req.email), present(req.message))
        else {
            return Err(ApiError::BadRequest("Name, email, and message are required"));
        };

        Ok(Self {
            name,
            email,
            phone: present(req.phone),
            service: present(req.service),
            message,
            preferred_contact: present(req.preferred_contact)
                .unwrap_or_else(|| DEFAULT_PREFERRED_CONTACT.into()),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmittedResponse {
    pub success: bool,
    pub message: &'static str,
    pub submission_id: i64,
}

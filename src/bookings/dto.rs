use serde::{Deserialize, Serialize};

use crate::bookings::repo_types::{Booking, NewBooking};
use crate::error::ApiError;
use crate::form::{lenient_id, lenient_text, present};

/// POST /api/bookings body. Any `status` key is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub service_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub service_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub preferred_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub preferred_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,
}

impl TryFrom<CreateBookingRequest> for NewBooking {
    type Error = ApiError;

    fn try_from(req: CreateBookingRequest) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(phone)) =
            (present(req.name), present(req.email), present(req.phone))
        else {
            return Err(ApiError::BadRequest("Name, email, and phone are required"));
        };

        Ok(Self {
            name,
            email,
            phone,
            service_id: req.service_id,
            service_name: present(req.service_name),
            preferred_date: present(req.preferred_date),
            preferred_time: present(req.preferred_time),
            message: present(req.message),
            address: present(req.address),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct BookingList {
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub success: bool,
    pub data: BookingList,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub booking_id: i64,
}

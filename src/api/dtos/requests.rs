use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct BookingRequest {
    pub class_id: i64,
    pub client_name: String,
    pub client_email: String,
}

#[derive(Deserialize, Debug)]
pub struct BookingsQuery {
    pub email: Option<String>,
}

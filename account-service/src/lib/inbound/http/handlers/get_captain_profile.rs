use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use super::CaptainData;
use crate::captain::models::Captain;
use crate::inbound::http::middleware::Authenticated;

pub async fn get_captain_profile(
    Extension(Authenticated(captain)): Extension<Authenticated<Captain>>,
) -> ApiSuccess<CaptainProfileResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        CaptainProfileResponseData {
            captain: (&captain).into(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptainProfileResponseData {
    pub captain: CaptainData,
}

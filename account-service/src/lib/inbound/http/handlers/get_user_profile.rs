use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::middleware::Authenticated;
use crate::user::models::User;

pub async fn get_user_profile(
    Extension(Authenticated(user)): Extension<Authenticated<User>>,
) -> ApiSuccess<UserProfileResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        UserProfileResponseData {
            user: (&user).into(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfileResponseData {
    pub user: UserData,
}

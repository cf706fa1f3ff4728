use contracts::shared::ListQuery;
use contracts::system::users::{CreateUserDto, UpdateUserDto, UserDto};

use super::model::User;
use crate::shared::http::{ApiClient, ApiError, Method, RequestOptions};
use crate::shared::resource::{fetch_page, item_path, Page};

const USERS_PATH: &str = "/users/";

/// Fetch all users
pub async fn fetch_users(client: &ApiClient, token: &str) -> Result<Page<User>, ApiError> {
    let page: Page<UserDto> = fetch_page(client, USERS_PATH, &ListQuery::default(), token).await?;
    Ok(page.map(User::from))
}

/// Fetch one user by id
pub async fn fetch_user(client: &ApiClient, id: &str, token: &str) -> Result<User, ApiError> {
    let dto: UserDto = client
        .request(
            Method::Get,
            &item_path(USERS_PATH, id),
            RequestOptions::new().bearer(token),
        )
        .await?;
    Ok(dto.into())
}

/// Create new user
pub async fn create_user(
    client: &ApiClient,
    dto: &CreateUserDto,
    token: &str,
) -> Result<User, ApiError> {
    let options = RequestOptions::new().bearer(token).json(dto)?;
    let created: UserDto = client.request(Method::Post, USERS_PATH, options).await?;
    log::debug!("user created: {}", created.id);
    Ok(created.into())
}

/// Update user (the id travels in the payload)
pub async fn update_user(
    client: &ApiClient,
    dto: &UpdateUserDto,
    token: &str,
) -> Result<User, ApiError> {
    let options = RequestOptions::new().bearer(token).json(dto)?;
    let updated: UserDto = client
        .request(Method::Put, &item_path(USERS_PATH, &dto.id), options)
        .await?;
    Ok(updated.into())
}

/// Delete user
pub async fn delete_user(client: &ApiClient, id: &str, token: &str) -> Result<(), ApiError> {
    client
        .execute(
            Method::Delete,
            &item_path(USERS_PATH, id),
            RequestOptions::new().bearer(token),
        )
        .await?;
    Ok(())
}

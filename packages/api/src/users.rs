//! Users and roles endpoints used by the admin screens.

use store::{form::UserForm, GridParams, PaginatedList, Role, SubmitMode, User, UserPayload};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

const USERS: &str = "/users";
const ROLES: &str = "/roles";

pub struct UsersService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> UsersService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn fetch_list(&self, grid: &GridParams) -> Result<PaginatedList<User>, ApiError> {
        self.client.get(USERS, grid.to_query()).await
    }

    pub async fn fetch_one(&self, id: &str) -> Result<User, ApiError> {
        self.client.get(&format!("{USERS}/{id}"), Vec::new()).await
    }

    pub async fn add(&self, user: &UserPayload) -> Result<(), ApiError> {
        self.client.post(USERS, user).await?;
        tracing::info!("user {} created", user.email);
        Ok(())
    }

    pub async fn update(&self, id: &str, user: &UserPayload) -> Result<(), ApiError> {
        self.client.put(&format!("{USERS}/{id}"), user).await?;
        tracing::info!("user {id} updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{USERS}/{id}")).await?;
        tracing::info!("user {id} deleted");
        Ok(())
    }

    pub async fn save(&self, mode: &SubmitMode, form: &UserForm) -> Result<(), ApiError> {
        let payload = form.to_payload();
        match mode {
            SubmitMode::Create => self.add(&payload).await,
            SubmitMode::Update(id) => self.update(id, &payload).await,
        }
    }
}

pub struct RolesService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> RolesService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn fetch_list(&self) -> Result<Vec<Role>, ApiError> {
        self.client.get(ROLES, Vec::new()).await
    }
}

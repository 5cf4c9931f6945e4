// CRUD calls for the `/api/users` resource.

use super::{ApiClient, ApiError};
use crate::models::User;

pub struct UserApi {
    api: ApiClient,
    base_url: String,
}

impl UserApi {
    pub fn new(api: ApiClient) -> Self {
        let base_url = format!("{}/users", api.base_url());
        UserApi { api, base_url }
    }

    pub fn find_by_id(&self, id: i64) -> Result<User, ApiError> {
        let body = self.api.get(&format!("{}/{}", self.base_url, id))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// An empty collection deserializes to an empty vec; it is not an error.
    pub fn obtain_all(&self) -> Result<Vec<User>, ApiError> {
        let body = self.api.get(&self.base_url)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The server assigns `id` and `timestamp`; the payload carries neither.
    pub fn create(&self, user: &User) -> Result<(), ApiError> {
        let body = serde_json::to_string(user)?;
        self.api.post(body, &self.base_url)
    }

    pub fn update(&self, id: i64, user: &User) -> Result<(), ApiError> {
        let body = serde_json::to_string(user)?;
        self.api.put(body, &format!("{}/{}", self.base_url, id))?;
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}", self.base_url, id))?;
        Ok(())
    }
}

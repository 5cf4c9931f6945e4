// CRUD calls for the `/api/contacts` resource.

use super::{ApiClient, ApiError};
use crate::models::Contact;

pub struct ContactApi {
    api: ApiClient,
    base_url: String,
}

impl ContactApi {
    pub fn new(api: ApiClient) -> Self {
        let base_url = format!("{}/contacts", api.base_url());
        ContactApi { api, base_url }
    }

    pub fn find_by_id(&self, id: i64) -> Result<Contact, ApiError> {
        let body = self.api.get(&format!("{}/{}", self.base_url, id))?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn obtain_all(&self) -> Result<Vec<Contact>, ApiError> {
        let body = self.api.get(&self.base_url)?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn create(&self, contact: &Contact) -> Result<(), ApiError> {
        let body = serde_json::to_string(contact)?;
        self.api.post(body, &self.base_url)
    }

    pub fn update(&self, id: i64, contact: &Contact) -> Result<(), ApiError> {
        let body = serde_json::to_string(contact)?;
        self.api.put(body, &format!("{}/{}", self.base_url, id))?;
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}", self.base_url, id))?;
        Ok(())
    }
}

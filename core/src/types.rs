//! Domain records for the two resources the front-end manages.
//!
//! JSON field names follow the remote API. Fields missing from a response
//! fall back to their defaults, and unknown fields (the public API returns
//! far more for users) are ignored.

use serde::{Deserialize, Serialize};

use crate::entity::{unknown_field, Entity};
use crate::error::ApiError;

/// A user row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Entity for User {
    const RESOURCE: &'static str = "users";
    const KIND: &'static str = "user";
    const FIELDS: &'static [&'static str] = &["name", "email"];

    fn id(&self) -> Option<u64> {
        self.id.filter(|id| *id != 0)
    }

    fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), ApiError> {
        match name {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            _ => return Err(unknown_field::<Self>(name)),
        }
        Ok(())
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("name", self.name.as_str()), ("email", self.email.as_str())]
    }
}

/// A post row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "postId", default)]
    pub post_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Post {
    pub fn new(post_id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            post_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Entity for Post {
    const RESOURCE: &'static str = "posts";
    const KIND: &'static str = "post";
    const FIELDS: &'static [&'static str] = &["postId", "title", "body"];

    fn id(&self) -> Option<u64> {
        self.id.filter(|id| *id != 0)
    }

    fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "postId" => Some(self.post_id.to_string()),
            "title" => Some(self.title.clone()),
            "body" => Some(self.body.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), ApiError> {
        match name {
            "postId" => {
                let trimmed = value.trim();
                self.post_id = if trimmed.is_empty() {
                    0
                } else {
                    trimmed
                        .parse()
                        .map_err(|_| ApiError::validation("postId must be a whole number"))?
                };
            }
            "title" => self.title = value.to_string(),
            "body" => self.body = value.to_string(),
            _ => return Err(unknown_field::<Self>(name)),
        }
        Ok(())
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("title", self.title.as_str()), ("body", self.body.as_str())]
    }
}

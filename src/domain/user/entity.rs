// src/domain/user/entity.rs
use crate::domain::user::value_objects::{
    Capability, Email, PasswordHash, PhotoFilename, Pseudonym, Roles, UserId,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub pseudonym: Pseudonym,
    pub password_hash: PasswordHash,
    pub roles: Roles,
    pub registration_date: DateTime<Utc>,
    pub photo: Option<PhotoFilename>,
}

impl User {
    pub fn capabilities(&self) -> HashSet<Capability> {
        self.roles.capabilities()
    }

    pub fn set_photo(&mut self, photo: Option<PhotoFilename>) -> Option<PhotoFilename> {
        std::mem::replace(&mut self.photo, photo)
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub pseudonym: Pseudonym,
    pub password_hash: PasswordHash,
    pub roles: Roles,
    pub registration_date: DateTime<Utc>,
}

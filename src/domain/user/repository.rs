use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{Email, PhotoFilename, UserId},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    /// Inserts a self-registered account. When the store holds no account
    /// yet it is granted `admin`; the emptiness check and the insert happen
    /// as one atomic step.
    async fn insert_registered(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Loads several users at once; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>>;

    async fn set_photo(&self, id: UserId, photo: Option<PhotoFilename>) -> DomainResult<User>;
}

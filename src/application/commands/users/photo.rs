use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PhotoUpload, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::PhotoFilename,
};
use uuid::Uuid;

pub struct ChangePhotoCommand {
    pub upload: PhotoUpload,
}

impl UserCommandService {
    /// Stores the new photo under a fresh random name, records it on the
    /// account and then discards the previous file.
    pub async fn change_photo(
        &self,
        actor: &AuthenticatedUser,
        command: ChangePhotoCommand,
    ) -> ApplicationResult<UserDto> {
        let extension = command
            .upload
            .validate(self.photo_max_bytes)
            .map_err(ApplicationError::validation)?;

        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let file_name = self.unused_photo_name(extension).await?;
        self.photo_storage
            .store(&file_name, command.upload.data)
            .await?;

        let updated = match self
            .user_repo
            .set_photo(user.id, Some(file_name.clone()))
            .await
        {
            Ok(updated) => updated,
            Err(err) => {
                if let Err(cleanup) = self.photo_storage.remove(&file_name).await {
                    tracing::warn!(
                        user_id = i64::from(user.id),
                        photo = %file_name,
                        error = %cleanup,
                        "failed to remove unrecorded photo"
                    );
                }
                return Err(err.into());
            }
        };

        if let Some(previous) = user.photo {
            if let Err(err) = self.photo_storage.remove(&previous).await {
                tracing::warn!(
                    user_id = i64::from(user.id),
                    photo = %previous,
                    error = %err,
                    "failed to remove previous photo"
                );
            }
        }
        tracing::info!(user_id = i64::from(user.id), photo = %file_name, "profile photo changed");

        Ok(updated.into())
    }

    async fn unused_photo_name(&self, extension: &str) -> ApplicationResult<PhotoFilename> {
        loop {
            let seed = Uuid::new_v4();
            let digest = blake3::hash(seed.as_bytes()).to_hex();
            let candidate = PhotoFilename::new(format!("{}.{extension}", &digest[..32]))?;
            if !self.photo_storage.exists(&candidate).await? {
                return Ok(candidate);
            }
        }
    }
}

// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::{DeletionOutcome, capability::ensure_capability},
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::security::CsrfIntent,
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
    pub csrf_token: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<DeletionOutcome> {
        ensure_capability(actor, "articles", "delete")?;

        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !self
            .csrf
            .verify(CsrfIntent::DeleteArticle(article.id), actor, &command.csrf_token)
        {
            tracing::warn!(
                article_id = %article.id,
                actor_id = i64::from(actor.id),
                "rejected article deletion with invalid csrf token"
            );
            return Ok(DeletionOutcome::InvalidCsrfToken);
        }

        self.write_repo.delete(article.id).await?;
        tracing::info!(
            article_id = %article.id,
            actor_id = i64::from(actor.id),
            "article deleted"
        );
        Ok(DeletionOutcome::Deleted)
    }
}

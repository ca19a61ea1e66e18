use super::CommentCommandService;
use crate::{
    application::{
        commands::{DeletionOutcome, capability::ensure_capability},
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::security::CsrfIntent,
    },
    domain::{
        article::{ArticleId, ArticleSlug},
        comment::CommentId,
    },
};

pub struct DeleteCommentCommand {
    pub id: i64,
    pub csrf_token: String,
}

/// Where the caller goes back to (the parent article) and what happened.
#[derive(Debug, Clone)]
pub struct CommentDeletion {
    pub article_id: ArticleId,
    pub article_slug: ArticleSlug,
    pub outcome: DeletionOutcome,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<CommentDeletion> {
        ensure_capability(actor, "comments", "delete")?;

        let id = CommentId::new(command.id)
            .map_err(|_| ApplicationError::not_found("comment not found"))?;
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        let article = self
            .article_repo
            .find_by_id(comment.article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let outcome = if self
            .csrf
            .verify(CsrfIntent::DeleteComment(comment.id), actor, &command.csrf_token)
        {
            self.comment_repo.delete(comment.id).await?;
            tracing::info!(
                comment_id = %comment.id,
                article_id = %article.id,
                actor_id = i64::from(actor.id),
                "comment deleted"
            );
            DeletionOutcome::Deleted
        } else {
            tracing::warn!(
                comment_id = %comment.id,
                actor_id = i64::from(actor.id),
                "rejected comment deletion with invalid csrf token"
            );
            DeletionOutcome::InvalidCsrfToken
        };

        Ok(CommentDeletion {
            article_id: article.id,
            article_slug: article.slug,
            outcome,
        })
    }
}

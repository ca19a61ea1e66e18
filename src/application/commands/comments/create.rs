use super::CommentCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CommentDto, CommentForm},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, comment::NewComment},
};

pub struct AddCommentCommand {
    pub article_id: i64,
    pub slug: String,
    pub form: CommentForm,
}

/// The stored comment plus a blank form so the caller can post another one
/// straight away.
#[derive(Debug, Clone)]
pub struct CommentAdded {
    pub comment: CommentDto,
    pub next_form: CommentForm,
}

impl CommentCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentAdded> {
        ensure_capability(actor, "comments", "create")?;

        let article_id = ArticleId::new(command.article_id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .filter(|article| article.matches_route(&command.slug))
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let content = command.form.parse().map_err(ApplicationError::validation)?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                content,
                publication_date: self.clock.now(),
                author_id: actor.id,
                article_id: article.id,
            })
            .await?;
        tracing::info!(
            comment_id = %comment.id,
            article_id = %article.id,
            author_id = i64::from(actor.id),
            "comment published"
        );

        Ok(CommentAdded {
            comment: comment.into(),
            next_form: CommentForm::default(),
        })
    }
}

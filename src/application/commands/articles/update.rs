use super::{ArticleCommandService, derive_slug};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{ArticleDto, ArticleForm, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub form: ArticleForm,
}

impl ArticleCommandService {
    /// Overwrites title and content and recomputes the slug. Publication date
    /// and author stay as they were at creation.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "update")?;

        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let (title, content) = command.form.parse().map_err(ApplicationError::validation)?;
        let slug = derive_slug(self.slugger.as_ref(), &title)?;
        article.revise(title, slug, content);

        let updated = self.write_repo.update(ArticleUpdate::from(&article)).await?;
        tracing::info!(
            article_id = %updated.id,
            editor_id = i64::from(actor.id),
            slug = %updated.slug,
            "article edited"
        );
        Ok(updated.into())
    }
}

// src/application/commands/articles/create.rs
use super::{ArticleCommandService, derive_slug};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{ArticleDto, ArticleForm, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::NewArticle,
};

pub struct CreateArticleCommand {
    pub form: ArticleForm,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let (title, content) = command.form.parse().map_err(ApplicationError::validation)?;
        let slug = derive_slug(self.slugger.as_ref(), &title)?;

        let new_article = NewArticle {
            title,
            slug,
            content,
            publication_date: self.clock.now(),
            author_id: actor.id,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = %created.id,
            author_id = i64::from(actor.id),
            slug = %created.slug,
            "article published"
        );
        Ok(created.into())
    }
}

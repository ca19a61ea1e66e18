use super::ArticleQueryService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{
            ArticleDto, ArticleForm, ArticleViewDto, AuthenticatedUser, CommentForm,
            CommentViewDto,
        },
        error::{ApplicationError, ApplicationResult},
        ports::security::CsrfIntent,
    },
    domain::article::{Article, ArticleId},
};
use serde::Serialize;
use utoipa::ToSchema;

pub struct ViewArticleQuery {
    pub id: i64,
    pub slug: String,
}

/// Article being edited together with the form prefilled from it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleEditView {
    pub article: ArticleDto,
    pub form: ArticleForm,
}

impl ArticleQueryService {
    pub async fn view_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ViewArticleQuery,
    ) -> ApplicationResult<ArticleViewDto> {
        let article = self
            .load(query.id)
            .await?
            .filter(|article| article.matches_route(&query.slug))
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let comments = self.comment_repo.list_by_article(article.id).await?;
        let authors = self
            .authors(
                comments
                    .iter()
                    .map(|c| c.author_id)
                    .chain(std::iter::once(article.author_id)),
            )
            .await?;

        let can_delete_comments = actor.filter(|a| a.has_capability("comments", "delete"));
        let comments = comments
            .into_iter()
            .map(|comment| CommentViewDto {
                author: authors.get(&comment.author_id).cloned(),
                delete_token: can_delete_comments
                    .map(|a| self.csrf.issue(CsrfIntent::DeleteComment(comment.id), a)),
                comment: comment.into(),
            })
            .collect();

        let delete_token = actor
            .filter(|a| a.has_capability("articles", "delete"))
            .map(|a| self.csrf.issue(CsrfIntent::DeleteArticle(article.id), a));

        Ok(ArticleViewDto {
            author: authors.get(&article.author_id).cloned(),
            comments,
            delete_token,
            comment_form: actor.map(|_| CommentForm::default()),
            article: article.into(),
        })
    }

    /// Blank form for a new article.
    pub fn new_article_form(&self, actor: &AuthenticatedUser) -> ApplicationResult<ArticleForm> {
        ensure_capability(actor, "articles", "create")?;
        Ok(ArticleForm::default())
    }

    pub async fn edit_form(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<ArticleEditView> {
        ensure_capability(actor, "articles", "update")?;

        let article = self
            .load(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let form = ArticleForm {
            title: article.title.as_str().to_string(),
            content: article.content.as_str().to_string(),
        };

        Ok(ArticleEditView {
            article: article.into(),
            form,
        })
    }

    async fn load(&self, id: i64) -> ApplicationResult<Option<Article>> {
        match ArticleId::new(id) {
            Ok(id) => Ok(self.article_repo.find_by_id(id).await?),
            Err(_) => Ok(None),
        }
    }
}

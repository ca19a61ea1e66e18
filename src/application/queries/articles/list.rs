use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleSearch,
        pagination::{ARTICLES_PER_PAGE, PageNumber, PageRequest},
    },
};

pub struct ListArticlesQuery {
    pub page: i64,
}

pub struct SearchArticlesQuery {
    /// Substring looked up in titles and contents; empty matches everything.
    pub text: String,
    pub page: i64,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PageDto<ArticleSummaryDto>> {
        self.page_of(ArticleSearch::all(), query.page).await
    }

    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<PageDto<ArticleSummaryDto>> {
        self.page_of(ArticleSearch::containing(query.text), query.page)
            .await
    }

    /// Latest articles for the landing page.
    pub async fn home(&self) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let articles = self.article_repo.latest(self.home_count).await?;
        self.summarize(articles).await
    }

    async fn page_of(
        &self,
        search: ArticleSearch,
        page: i64,
    ) -> ApplicationResult<PageDto<ArticleSummaryDto>> {
        let page = PageNumber::new(page)
            .map_err(|err| ApplicationError::invalid_page(err.to_string()))?;
        let request = PageRequest::new(page, ARTICLES_PER_PAGE);

        let page = self.article_repo.list_page(&search, request).await?;
        let authors = self.authors(page.items.iter().map(|a| a.author_id)).await?;

        Ok(PageDto::from_page(page, |article| {
            let author = authors.get(&article.author_id).cloned();
            ArticleSummaryDto::new(article, author)
        }))
    }
}

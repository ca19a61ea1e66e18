use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSearch, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::{Email, NewUser, PhotoFilename, Roles, User, UserId, UserRepository};
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, Comment>,
    next_user_id: i64,
    next_article_id: i64,
    next_comment_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

/// Process-local store backing every repository trait. Each call takes the
/// single lock once, so a call is applied atomically.
#[derive(Default)]
pub struct InMemoryContentStore {
    state: Mutex<State>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory store lock poisoned".into()))
    }
}

fn insert_user(state: &mut State, new_user: NewUser) -> DomainResult<User> {
    if state.users.values().any(|u| u.email == new_user.email) {
        return Err(DomainError::Conflict("email already registered".into()));
    }
    let id = next_id(&mut state.next_user_id);
    let user = User {
        id: UserId::new(id)?,
        email: new_user.email,
        pseudonym: new_user.pseudonym,
        password_hash: new_user.password_hash,
        roles: new_user.roles,
        registration_date: new_user.registration_date,
        photo: None,
    };
    state.users.insert(id, user.clone());
    Ok(user)
}

fn newest_first(articles: &mut [Article]) {
    articles.sort_by_key(|a| Reverse((a.publication_date, i64::from(a.id))));
}

#[async_trait]
impl UserRepository for InMemoryContentStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        insert_user(&mut *self.lock()?, new_user)
    }

    async fn insert_registered(&self, mut new_user: NewUser) -> DomainResult<User> {
        let mut state = self.lock()?;
        if state.users.is_empty() {
            new_user.roles = Roles::admin();
        }
        insert_user(&mut state, new_user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.lock()?;
        Ok(state.users.values().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock()?.users.get(&i64::from(id)).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let state = self.lock()?;
        Ok(ids
            .iter()
            .filter_map(|id| state.users.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn set_photo(&self, id: UserId, photo: Option<PhotoFilename>) -> DomainResult<User> {
        let mut state = self.lock()?;
        let user = state
            .users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.set_photo(photo);
        Ok(user.clone())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryContentStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.lock()?;
        if !state.users.contains_key(&i64::from(article.author_id)) {
            return Err(DomainError::NotFound("author not found".into()));
        }
        let id = next_id(&mut state.next_article_id);
        let article = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            content: article.content,
            publication_date: article.publication_date,
            author_id: article.author_id,
        };
        state.articles.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.lock()?;
        let article = state
            .articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.revise(update.title, update.slug, update.content);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.lock()?;
        if state.articles.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.comments.retain(|_, comment| comment.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryContentStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.lock()?.articles.get(&i64::from(id)).cloned())
    }

    async fn list_page(
        &self,
        search: &ArticleSearch,
        page: PageRequest,
    ) -> DomainResult<Page<Article>> {
        let mut matching: Vec<Article> = self
            .lock()?
            .articles
            .values()
            .filter(|article| search.matches(article))
            .cloned()
            .collect();
        newest_first(&mut matching);
        Ok(page.slice(&matching))
    }

    async fn latest(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let mut articles: Vec<Article> = self.lock()?.articles.values().cloned().collect();
        newest_first(&mut articles);
        articles.truncate(limit as usize);
        Ok(articles)
    }
}

#[async_trait]
impl CommentRepository for InMemoryContentStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.lock()?;
        if !state.articles.contains_key(&i64::from(comment.article_id)) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        let id = next_id(&mut state.next_comment_id);
        let comment = Comment {
            id: CommentId::new(id)?,
            content: comment.content,
            publication_date: comment.publication_date,
            author_id: comment.author_id,
            article_id: comment.article_id,
        };
        state.comments.insert(id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.lock()?.comments.get(&i64::from(id)).cloned())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .lock()?
            .comments
            .values()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.publication_date, i64::from(c.id)));
        Ok(comments)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.lock()?;
        state
            .comments
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))
    }
}

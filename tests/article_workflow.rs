mod support;

use quill_blog::application::{
    commands::{
        DeletionOutcome,
        articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
        comments::AddCommentCommand,
    },
    error::ApplicationError,
    ports::security::CsrfIntent,
    queries::articles::{ListArticlesQuery, SearchArticlesQuery, ViewArticleQuery},
};
use quill_blog::domain::{
    article::{ArticleId, ArticleReadRepository, ArticleSlug},
    comment::{CommentId, CommentRepository},
};
use support::{TestApp, admin_actor, article_form, comment_form, user_actor};

#[tokio::test]
async fn publishing_derives_slug_and_lists_article_first() {
    let app = TestApp::seeded().await;
    app.insert_article("Older post", "Body", -60).await;

    let created = app
        .services
        .article_commands
        .create_article(
            &admin_actor(),
            CreateArticleCommand {
                form: article_form("Hello World!", "First content"),
            },
        )
        .await
        .unwrap();
    assert_eq!(created.slug, "hello-world");
    assert_eq!(created.author_id, 1);

    let page = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: 1 })
        .await
        .unwrap();
    assert_eq!(page.total_items, 2);
    assert_eq!(page.items[0].id, created.id);
    assert_eq!(page.items[0].author.as_ref().unwrap().pseudonym, "Admin");
}

#[tokio::test]
async fn identical_titles_share_a_slug() {
    let app = TestApp::seeded().await;
    let commands = &app.services.article_commands;
    let first = commands
        .create_article(&admin_actor(), CreateArticleCommand { form: article_form("Same", "a") })
        .await
        .unwrap();
    let second = commands
        .create_article(&admin_actor(), CreateArticleCommand { form: article_form("Same", "b") })
        .await
        .unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(first.slug, second.slug);
}

#[tokio::test]
async fn long_non_latin_title_publishes_with_bounded_slug() {
    let app = TestApp::seeded().await;
    let title = "漢".repeat(150);

    let created = app
        .services
        .article_commands
        .create_article(
            &admin_actor(),
            CreateArticleCommand { form: article_form(&title, "Body") },
        )
        .await
        .unwrap();
    assert_eq!(created.title, title);
    assert!(!created.slug.is_empty());
    assert!(created.slug.len() <= ArticleSlug::MAX_BYTES);
    assert!(!created.slug.ends_with('-'));

    let view = app
        .services
        .article_queries
        .view_article(None, ViewArticleQuery { id: created.id, slug: created.slug.clone() })
        .await
        .unwrap();
    assert_eq!(view.article.id, created.id);
}

#[tokio::test]
async fn listing_pages_hold_ten_articles_newest_first() {
    let app = TestApp::seeded().await;
    for minute in 0..23 {
        app.insert_article(&format!("Post {minute}"), "Body", minute).await;
    }
    let queries = &app.services.article_queries;

    let first = queries.list_articles(ListArticlesQuery { page: 1 }).await.unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_items, 23);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items[0].title, "Post 22");
    assert_eq!(first.items[9].title, "Post 13");
    assert!(first.has_next);

    let last = queries.list_articles(ListArticlesQuery { page: 3 }).await.unwrap();
    assert_eq!(
        last.items.iter().map(|a| a.title.as_str()).collect::<Vec<_>>(),
        vec!["Post 2", "Post 1", "Post 0"]
    );

    let past_end = queries.list_articles(ListArticlesQuery { page: 4 }).await.unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total_items, 23);
}

#[tokio::test]
async fn same_publication_date_orders_by_id_descending() {
    let app = TestApp::seeded().await;
    let (first, _) = app.insert_article("First", "Body", 5).await;
    let (second, _) = app.insert_article("Second", "Body", 5).await;

    let page = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: 1 })
        .await
        .unwrap();
    let ids: Vec<i64> = page.items.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[tokio::test]
async fn non_positive_page_is_rejected() {
    let app = TestApp::seeded().await;
    let queries = &app.services.article_queries;

    let err = queries.list_articles(ListArticlesQuery { page: 0 }).await.unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidPage(_)));

    let err = queries
        .search_articles(SearchArticlesQuery { text: "x".into(), page: -1 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidPage(_)));
}

#[tokio::test]
async fn empty_search_matches_the_plain_listing() {
    let app = TestApp::seeded().await;
    for minute in 0..12 {
        app.insert_article(&format!("Entry {minute}"), "Body", minute).await;
    }
    let queries = &app.services.article_queries;

    let listed = queries.list_articles(ListArticlesQuery { page: 2 }).await.unwrap();
    let searched = queries
        .search_articles(SearchArticlesQuery { text: String::new(), page: 2 })
        .await
        .unwrap();
    let ids = |items: &[quill_blog::application::dto::ArticleSummaryDto]| {
        items.iter().map(|a| a.id).collect::<Vec<_>>()
    };
    assert_eq!(ids(&listed.items), ids(&searched.items));
    assert_eq!(listed.total_items, searched.total_items);
}

#[tokio::test]
async fn search_is_case_sensitive_over_title_and_content() {
    let app = TestApp::seeded().await;
    let (in_title, _) = app.insert_article("Learning Rust", "notes", 1).await;
    let (in_content, _) = app.insert_article("Weekly", "more Rust tips", 2).await;
    app.insert_article("Lowercase", "rust is not a match", 3).await;
    app.insert_article("Literal", "100% done", 4).await;

    let queries = &app.services.article_queries;
    let found = queries
        .search_articles(SearchArticlesQuery { text: "Rust".into(), page: 1 })
        .await
        .unwrap();
    let ids: Vec<i64> = found.items.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![in_content, in_title]);

    let percent = queries
        .search_articles(SearchArticlesQuery { text: "0%".into(), page: 1 })
        .await
        .unwrap();
    assert_eq!(percent.total_items, 1);
}

#[tokio::test]
async fn editing_recomputes_slug_but_keeps_date_and_author() {
    let app = TestApp::seeded().await;
    let (id, _) = app.insert_article("Draft title", "Body", 0).await;
    let before = ArticleReadRepository::find_by_id(app.store.as_ref(), ArticleId::new(id).unwrap())
        .await
        .unwrap()
        .unwrap();

    let updated = app
        .services
        .article_commands
        .update_article(
            &admin_actor(),
            UpdateArticleCommand {
                id,
                form: article_form("Final Title", "New body"),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.slug, "final-title");
    assert_eq!(updated.content, "New body");
    assert_eq!(updated.publication_date, before.publication_date);
    assert_eq!(updated.author_id, 1);

    let queries = &app.services.article_queries;
    let stale = queries
        .view_article(None, ViewArticleQuery { id, slug: "draft-title".into() })
        .await
        .unwrap_err();
    assert!(matches!(stale, ApplicationError::NotFound(_)));
    assert!(
        queries
            .view_article(None, ViewArticleQuery { id, slug: "final-title".into() })
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn invalid_edit_reports_fields_and_keeps_article() {
    let app = TestApp::seeded().await;
    let (id, _) = app.insert_article("Kept", "Body", 0).await;

    let err = app
        .services
        .article_commands
        .update_article(&admin_actor(), UpdateArticleCommand { id, form: article_form("", "") })
        .await
        .unwrap_err();
    let ApplicationError::Validation(fields) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(fields.has_field("title"));
    assert!(fields.has_field("content"));

    let edit = app.services.article_queries.edit_form(&admin_actor(), id).await.unwrap();
    assert_eq!(edit.form.title, "Kept");
}

#[tokio::test]
async fn readers_cannot_write_articles() {
    let app = TestApp::seeded().await;
    let (id, _) = app.insert_article("Owned", "Body", 0).await;
    let commands = &app.services.article_commands;

    let err = commands
        .create_article(&user_actor(), CreateArticleCommand { form: article_form("T", "C") })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = commands
        .update_article(&user_actor(), UpdateArticleCommand { id, form: article_form("T", "C") })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = app.services.article_queries.new_article_form(&user_actor()).unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn missing_capability_wins_over_missing_article() {
    let app = TestApp::seeded().await;
    let err = app
        .services
        .article_commands
        .delete_article(
            &user_actor(),
            DeleteArticleCommand { id: 999, csrf_token: String::new() },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = app
        .services
        .article_commands
        .delete_article(
            &admin_actor(),
            DeleteArticleCommand { id: 999, csrf_token: String::new() },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn wrong_csrf_token_leaves_article_in_place() {
    let app = TestApp::seeded().await;
    let (id, _) = app.insert_article("Keep me", "Body", 0).await;
    let (other, _) = app.insert_article("Other", "Body", 1).await;
    let token_for_other =
        app.csrf_token(CsrfIntent::DeleteArticle(ArticleId::new(other).unwrap()), &admin_actor());

    let outcome = app
        .services
        .article_commands
        .delete_article(&admin_actor(), DeleteArticleCommand { id, csrf_token: token_for_other })
        .await
        .unwrap();
    assert_eq!(outcome, DeletionOutcome::InvalidCsrfToken);

    let page = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: 1 })
        .await
        .unwrap();
    assert_eq!(page.total_items, 2);
}

#[tokio::test]
async fn deleting_an_article_removes_it_and_its_comments() {
    let app = TestApp::seeded().await;
    let (id, slug) = app.insert_article("Doomed", "Body", 0).await;
    app.insert_article("Survivor", "Body", 1).await;
    let added = app
        .services
        .comment_commands
        .add_comment(
            &user_actor(),
            AddCommentCommand { article_id: id, slug, form: comment_form("Nice") },
        )
        .await
        .unwrap();

    let token = app.csrf_token(CsrfIntent::DeleteArticle(ArticleId::new(id).unwrap()), &admin_actor());
    let outcome = app
        .services
        .article_commands
        .delete_article(&admin_actor(), DeleteArticleCommand { id, csrf_token: token })
        .await
        .unwrap();
    assert!(outcome.is_deleted());

    let page = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: 1 })
        .await
        .unwrap();
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].title, "Survivor");

    let comment = CommentRepository::find_by_id(
        app.store.as_ref(),
        CommentId::new(added.comment.id).unwrap(),
    )
    .await
    .unwrap();
    assert!(comment.is_none());
}

#[tokio::test]
async fn home_shows_the_latest_articles() {
    let app = TestApp::seeded().await;
    for minute in 0..5 {
        app.insert_article(&format!("Item {minute}"), "Body", minute).await;
    }

    let latest = app.services.article_queries.home().await.unwrap();
    let titles: Vec<&str> = latest.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Item 4", "Item 3", "Item 2"]);
}

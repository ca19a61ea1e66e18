mod support;

use quill_blog::application::{
    commands::{
        DeletionOutcome,
        comments::{AddCommentCommand, DeleteCommentCommand},
    },
    error::ApplicationError,
    ports::security::CsrfIntent,
    queries::articles::ViewArticleQuery,
};
use quill_blog::domain::comment::CommentId;
use support::{TestApp, admin_actor, comment_form, user_actor};

async fn comment(app: &TestApp, article_id: i64, slug: &str, content: &str) -> i64 {
    app.services
        .comment_commands
        .add_comment(
            &user_actor(),
            AddCommentCommand {
                article_id,
                slug: slug.into(),
                form: comment_form(content),
            },
        )
        .await
        .unwrap()
        .comment
        .id
}

#[tokio::test]
async fn adding_a_comment_returns_a_blank_form() {
    let app = TestApp::seeded().await;
    let (id, slug) = app.insert_article("Open thread", "Body", 0).await;

    let added = app
        .services
        .comment_commands
        .add_comment(
            &user_actor(),
            AddCommentCommand { article_id: id, slug, form: comment_form("First!") },
        )
        .await
        .unwrap();
    assert_eq!(added.comment.content, "First!");
    assert_eq!(added.comment.article_id, id);
    assert_eq!(added.comment.author_id, 2);
    assert!(added.next_form.content.is_empty());
}

#[tokio::test]
async fn comments_stay_on_their_own_article_oldest_first() {
    let app = TestApp::seeded().await;
    let (first, first_slug) = app.insert_article("First", "Body", 0).await;
    let (second, second_slug) = app.insert_article("Second", "Body", 1).await;
    let a = comment(&app, first, &first_slug, "one").await;
    comment(&app, second, &second_slug, "elsewhere").await;
    let b = comment(&app, first, &first_slug, "two").await;

    let view = app
        .services
        .article_queries
        .view_article(None, ViewArticleQuery { id: first, slug: first_slug })
        .await
        .unwrap();
    let ids: Vec<i64> = view.comments.iter().map(|c| c.comment.id).collect();
    assert_eq!(ids, vec![a, b]);
    assert_eq!(view.comments[0].author.as_ref().unwrap().pseudonym, "Reader");
}

#[tokio::test]
async fn comment_on_mismatched_slug_is_not_found() {
    let app = TestApp::seeded().await;
    let (id, _) = app.insert_article("Right slug", "Body", 0).await;

    let err = app
        .services
        .comment_commands
        .add_comment(
            &user_actor(),
            AddCommentCommand {
                article_id: id,
                slug: "wrong-slug".into(),
                form: comment_form("Hi"),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn empty_comment_is_a_validation_error() {
    let app = TestApp::seeded().await;
    let (id, slug) = app.insert_article("Quiet", "Body", 0).await;

    let err = app
        .services
        .comment_commands
        .add_comment(
            &user_actor(),
            AddCommentCommand { article_id: id, slug, form: comment_form("   ") },
        )
        .await
        .unwrap_err();
    let ApplicationError::Validation(fields) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(fields.has_field("content"));
}

#[tokio::test]
async fn wrong_token_keeps_comment_and_points_back_to_article() {
    let app = TestApp::seeded().await;
    let (id, slug) = app.insert_article("Guarded", "Body", 0).await;
    let comment_id = comment(&app, id, &slug, "stay").await;

    let deletion = app
        .services
        .comment_commands
        .delete_comment(
            &admin_actor(),
            DeleteCommentCommand { id: comment_id, csrf_token: "forged".into() },
        )
        .await
        .unwrap();
    assert_eq!(deletion.outcome, DeletionOutcome::InvalidCsrfToken);
    assert_eq!(i64::from(deletion.article_id), id);
    assert_eq!(deletion.article_slug.as_str(), slug);

    let view = app
        .services
        .article_queries
        .view_article(None, ViewArticleQuery { id, slug })
        .await
        .unwrap();
    assert_eq!(view.comments.len(), 1);
}

#[tokio::test]
async fn valid_token_deletes_only_that_comment() {
    let app = TestApp::seeded().await;
    let (id, slug) = app.insert_article("Moderated", "Body", 0).await;
    let doomed = comment(&app, id, &slug, "spam").await;
    let kept = comment(&app, id, &slug, "useful").await;

    let token = app.csrf_token(
        CsrfIntent::DeleteComment(CommentId::new(doomed).unwrap()),
        &admin_actor(),
    );
    let deletion = app
        .services
        .comment_commands
        .delete_comment(&admin_actor(), DeleteCommentCommand { id: doomed, csrf_token: token })
        .await
        .unwrap();
    assert!(deletion.outcome.is_deleted());

    let view = app
        .services
        .article_queries
        .view_article(None, ViewArticleQuery { id, slug })
        .await
        .unwrap();
    let ids: Vec<i64> = view.comments.iter().map(|c| c.comment.id).collect();
    assert_eq!(ids, vec![kept]);
}

#[tokio::test]
async fn readers_cannot_delete_comments() {
    let app = TestApp::seeded().await;
    let (id, slug) = app.insert_article("Thread", "Body", 0).await;
    let comment_id = comment(&app, id, &slug, "mine").await;

    let err = app
        .services
        .comment_commands
        .delete_comment(
            &user_actor(),
            DeleteCommentCommand { id: comment_id, csrf_token: String::new() },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn view_exposes_tokens_and_form_by_capability() {
    let app = TestApp::seeded().await;
    let (id, slug) = app.insert_article("Visible", "Body", 0).await;
    comment(&app, id, &slug, "hello").await;
    let queries = &app.services.article_queries;
    let query = || ViewArticleQuery { id, slug: slug.clone() };

    let anonymous = queries.view_article(None, query()).await.unwrap();
    assert!(anonymous.delete_token.is_none());
    assert!(anonymous.comment_form.is_none());
    assert!(anonymous.comments[0].delete_token.is_none());

    let reader = user_actor();
    let as_reader = queries.view_article(Some(&reader), query()).await.unwrap();
    assert!(as_reader.delete_token.is_none());
    assert!(as_reader.comment_form.is_some());
    assert!(as_reader.comments[0].delete_token.is_none());

    let admin = admin_actor();
    let as_admin = queries.view_article(Some(&admin), query()).await.unwrap();
    assert!(as_admin.delete_token.is_some());
    assert!(as_admin.comments[0].delete_token.is_some());
}

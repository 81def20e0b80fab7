/// Feed page integration tests
///
/// Drives `FeedPage` against a mocked API: loading, pagination, card actions
/// and new-post submission.
mod common;

use common::{context, listing, post, server_error, MockApi};
use mockall::predicate::eq;
use network_api::{ApiError, EditPostResponse, EditedPost, LikeToggle};
use network_client::loaders::{EMPTY_FEED_MESSAGE, EMPTY_POST_MESSAGE, SUBMIT_FAILED_MESSAGE};
use network_client::pages::{FeedPage, PageController};
use network_client::view::EditState;
use network_client::{ClientError, Viewer};
use tokio_test::{assert_err, assert_ok};

fn three_posts() -> Vec<network_api::Post> {
    vec![
        post(30, "alice", "newest"),
        post(20, "bob", "middle"),
        post(10, "carol", "oldest"),
    ]
}

// ============================================
// Loading
// ============================================

#[tokio::test]
async fn test_bootstrap_renders_one_card_per_post_in_order() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(listing(three_posts(), 1, true, false)));

    let (ctx, _) = context(api, Viewer::authenticated("alice"));
    let page = FeedPage::bootstrap(&ctx).await;

    let ids: Vec<_> = page
        .view()
        .posts
        .cards()
        .iter()
        .map(|card| card.post_id())
        .collect();
    assert_eq!(ids, vec![30, 20, 10]);
    assert_eq!(page.view().posts.empty_message(), None);
    assert_eq!(page.view().pagination.current_page(), Some(1));
    assert!(page.view().pagination.is_next_visible());
    assert!(!page.view().pagination.is_previous_visible());
}

#[tokio::test]
async fn test_empty_page_shows_message_and_no_cards() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(vec![], 1, false, false)));

    let (ctx, _) = context(api, Viewer::anonymous());
    let page = FeedPage::bootstrap(&ctx).await;

    assert!(page.view().posts.is_empty());
    assert_eq!(page.view().posts.empty_message(), Some(EMPTY_FEED_MESSAGE));
    assert!(page.render().contains("No posts to display."));
}

#[tokio::test]
async fn test_controls_follow_viewer_identity() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    let (ctx, _) = context(api, Viewer::authenticated("bob"));
    let page = FeedPage::bootstrap(&ctx).await;

    for card in page.view().posts.cards() {
        assert!(card.like_control().is_some());
        assert_eq!(card.has_edit_control(), card.author() == "bob");
    }

    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    let (ctx, _) = context(api, Viewer::anonymous());
    let page = FeedPage::bootstrap(&ctx).await;

    for card in page.view().posts.cards() {
        assert!(card.like_control().is_none());
        assert!(!card.has_edit_control());
    }
}

#[tokio::test]
async fn test_failed_load_leaves_previous_list_untouched() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .with(eq(1))
        .returning(|_| Ok(listing(three_posts(), 1, true, false)));
    api.expect_list_posts()
        .with(eq(2))
        .times(1)
        .returning(|_| Err(ApiError::Transport("connection reset".to_string())));

    let (ctx, alerts) = context(api, Viewer::anonymous());
    let mut page = FeedPage::bootstrap(&ctx).await;
    let before = page.view().posts.clone();

    assert_err!(page.next().await);

    assert_eq!(page.view().posts, before);
    assert_eq!(page.view().pagination.current_page(), Some(1));
    // read failures never alert
    assert!(alerts.messages().is_empty());
}

#[tokio::test]
async fn test_failed_bootstrap_stays_unloaded() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Err(server_error(500, None)));

    let (ctx, _) = context(api, Viewer::anonymous());
    let page = FeedPage::bootstrap(&ctx).await;

    assert_eq!(page.view().posts, network_client::view::PostList::Unloaded);
    assert_eq!(page.view().pagination.current_page(), None);
}

// ============================================
// Pagination
// ============================================

#[tokio::test]
async fn test_last_page_previous_reloads_page_one() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .with(eq(1))
        .times(2)
        .returning(|_| Ok(listing(three_posts(), 1, true, false)));
    api.expect_list_posts()
        .with(eq(2))
        .times(1)
        .returning(|_| Ok(listing(vec![post(5, "dave", "old")], 2, false, true)));

    let (ctx, _) = context(api, Viewer::anonymous());
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_ok!(page.next().await);
    assert_eq!(page.view().pagination.current_page(), Some(2));
    assert!(!page.view().pagination.is_next_visible());
    assert!(page.view().pagination.is_previous_visible());
    assert_eq!(page.view().pagination.activate_previous(), Some(1));

    assert_ok!(page.previous().await);
    assert_eq!(page.view().pagination.current_page(), Some(1));
    assert_eq!(page.view().posts.len(), 3);
}

#[tokio::test]
async fn test_hidden_control_is_not_activatable() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .times(1)
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));

    let (ctx, _) = context(api, Viewer::anonymous());
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_eq!(
        page.next().await,
        Err(ClientError::ControlUnavailable("next page"))
    );
    assert_eq!(
        page.previous().await,
        Err(ClientError::ControlUnavailable("previous page"))
    );
}

// ============================================
// Likes
// ============================================

#[tokio::test]
async fn test_like_overwrites_label_and_count_from_server() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    api.expect_toggle_like()
        .with(eq(20))
        .times(1)
        .returning(|_| {
            Ok(LikeToggle {
                liked: true,
                likes_count: 5,
            })
        });

    let (ctx, _) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_ok!(page.toggle_like(20).await);

    let card = page.view().posts.card(20).unwrap();
    let control = card.like_control().unwrap();
    assert_eq!(control.label(), "Unlike");
    assert_eq!(control.emphasis().css_class(), "btn-primary");
    assert_eq!(card.likes_text(), "5 likes");
}

#[tokio::test]
async fn test_unlike_to_single_like_uses_singular() {
    let mut api = MockApi::new();
    api.expect_list_posts().returning(|_| {
        let mut liked = post(1, "bob", "hi");
        liked.likes_count = 2;
        liked.liked_by_user = true;
        Ok(listing(vec![liked], 1, false, false))
    });
    api.expect_toggle_like().returning(|_| {
        Ok(LikeToggle {
            liked: false,
            likes_count: 1,
        })
    });

    let (ctx, _) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_ok!(page.toggle_like(1).await);

    let card = page.view().posts.card(1).unwrap();
    assert_eq!(card.like_control().unwrap().label(), "Like");
    assert_eq!(card.likes_text(), "1 like");
}

#[tokio::test]
async fn test_failed_like_leaves_card_unchanged() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    api.expect_toggle_like()
        .returning(|_| Err(server_error(403, Some("You must be logged in."))));

    let (ctx, alerts) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;
    let before = page.view().posts.card(10).unwrap().clone();

    assert_err!(page.toggle_like(10).await);

    assert_eq!(page.view().posts.card(10).unwrap(), &before);
    assert!(alerts.messages().is_empty());
}

#[tokio::test]
async fn test_anonymous_like_never_reaches_server() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    api.expect_toggle_like().never();

    let (ctx, _) = context(api, Viewer::anonymous());
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_eq!(
        page.toggle_like(10).await,
        Err(ClientError::ControlUnavailable("like"))
    );
}

// ============================================
// Editing
// ============================================

#[tokio::test]
async fn test_edit_then_cancel_restores_original_text() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    api.expect_edit_post().never();

    let (ctx, _) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_ok!(page.toggle_edit(30));
    assert_ok!(page.edit_text(30, "rewritten"));
    assert_eq!(page.view().posts.card(30).unwrap().content(), "rewritten");
    assert!(page.view().posts.card(30).unwrap().has_save_control());

    assert_ok!(page.toggle_edit(30));

    let card = page.view().posts.card(30).unwrap();
    assert_eq!(card.content(), "newest");
    assert_eq!(card.edit_label(), Some("Edit"));
    assert!(!card.has_save_control());
}

#[tokio::test]
async fn test_edit_not_offered_on_other_authors_posts() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));

    let (ctx, _) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_eq!(
        page.toggle_edit(20),
        Err(ClientError::ControlUnavailable("edit"))
    );
}

#[tokio::test]
async fn test_save_success_shows_server_content() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    api.expect_edit_post()
        .with(eq(30), eq("rewritten"))
        .times(1)
        .returning(|id, _| {
            Ok(EditPostResponse {
                post: EditedPost {
                    id: Some(id),
                    content: "rewritten (trimmed by server)".to_string(),
                },
            })
        });

    let (ctx, _) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_ok!(page.toggle_edit(30));
    assert_ok!(page.edit_text(30, "rewritten"));
    assert_ok!(page.save_edit(30).await);

    let card = page.view().posts.card(30).unwrap();
    assert_eq!(card.edit_state(), Some(&EditState::Viewing));
    assert_eq!(card.content(), "rewritten (trimmed by server)");
    assert!(!card.has_save_control());
}

#[tokio::test]
async fn test_save_failure_stays_in_editing() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    api.expect_edit_post()
        .returning(|_, _| Err(server_error(403, Some("You can only edit your own posts."))));

    let (ctx, alerts) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_ok!(page.toggle_edit(30));
    assert_ok!(page.edit_text(30, "rewritten"));
    assert_err!(page.save_edit(30).await);

    let card = page.view().posts.card(30).unwrap();
    assert!(card.is_editing());
    assert_eq!(card.content(), "rewritten");
    assert!(card.has_save_control());
    assert!(alerts.messages().is_empty());
}

// ============================================
// New posts
// ============================================

#[tokio::test]
async fn test_blank_submit_alerts_without_request() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    api.expect_create_post().never();

    let (ctx, alerts) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;

    let result = page.submit_post("   \n\t ").await;

    assert!(matches!(result, Err(ClientError::Validation(_))));
    assert_eq!(alerts.messages(), vec![EMPTY_POST_MESSAGE.to_string()]);
}

#[tokio::test]
async fn test_server_rejection_alerts_message_and_keeps_input() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    api.expect_create_post()
        .times(1)
        .returning(|_| Err(server_error(400, Some("Post content cannot be empty."))));

    let (ctx, alerts) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_err!(page.submit_post("something").await);

    let messages = alerts.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Post content cannot be empty."));
    assert_eq!(page.composer().unwrap().text(), "something");
}

#[tokio::test]
async fn test_transport_failure_alerts_generic_message() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(three_posts(), 1, false, false)));
    api.expect_create_post()
        .returning(|_| Err(ApiError::Transport("connection refused".to_string())));

    let (ctx, alerts) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert_err!(page.submit_post("hello").await);

    assert_eq!(alerts.messages(), vec![SUBMIT_FAILED_MESSAGE.to_string()]);
    assert_eq!(page.composer().unwrap().text(), "hello");
}

#[tokio::test]
async fn test_successful_submit_clears_input_and_returns_to_page_one() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .with(eq(1))
        .times(2)
        .returning(|_| Ok(listing(three_posts(), 1, true, false)));
    api.expect_list_posts()
        .with(eq(2))
        .times(1)
        .returning(|_| Ok(listing(vec![post(5, "dave", "old")], 2, false, true)));
    api.expect_create_post()
        .with(eq("hello world"))
        .times(1)
        .returning(|_| Ok(()));

    let (ctx, alerts) = context(api, Viewer::authenticated("alice"));
    let mut page = FeedPage::bootstrap(&ctx).await;
    assert_ok!(page.next().await);

    // surrounding whitespace is trimmed before sending
    page.composer_mut().unwrap().set_text("  hello world  ");
    assert_ok!(page.submit().await);

    assert_eq!(page.composer().unwrap().text(), "");
    assert_eq!(page.view().pagination.current_page(), Some(1));
    assert_eq!(page.view().posts.len(), 3);
    assert!(alerts.messages().is_empty());
}

#[tokio::test]
async fn test_anonymous_viewer_has_no_composer() {
    let mut api = MockApi::new();
    api.expect_list_posts()
        .returning(|_| Ok(listing(vec![], 1, false, false)));
    api.expect_create_post().never();

    let (ctx, _) = context(api, Viewer::anonymous());
    let mut page = FeedPage::bootstrap(&ctx).await;

    assert!(page.composer().is_none());
    assert_eq!(
        page.submit_post("hello").await,
        Err(ClientError::ControlUnavailable("new post"))
    );
}

//! Repository behavior against a mock backend.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{post_json, repositories, signed_in, user_json, TOKEN};
use ripple::api::{ApiError, ImageAttachment};
use ripple::models::SearchScope;
use ripple::session::SessionContext;
use serde_json::json;

#[tokio::test]
async fn login_stores_session_and_sends_credentials() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!({
            "token": "fresh",
            "user": user_json("u9", "eva"),
        })))
        .await;

    let session = SessionContext::in_memory();
    let repos = repositories(&backend, session.clone());
    let user = repos.auth.login(" eva@example.com ", "secreto").await.unwrap();

    assert_eq!(user.username, "eva");
    assert_eq!(session.token().unwrap().expose(), "fresh");
    assert_eq!(session.user_id().as_deref(), Some("u9"));

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/auth/login");
    assert!(requests[0].header("authorization").is_none());
    assert_eq!(
        requests[0].body_json(),
        json!({ "email": "eva@example.com", "password": "secreto" })
    );
}

#[tokio::test]
async fn non_2xx_is_an_error_with_server_message() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::failure(401, "Contraseña incorrecta"))
        .await;

    let repos = repositories(&backend, SessionContext::in_memory());
    let err = repos.auth.login("eva@example.com", "secreto").await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Unauthorized {
            status: 401,
            message: "Contraseña incorrecta".to_string()
        }
    );
}

#[tokio::test]
async fn plain_text_error_body_is_used_as_message() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::text(500, "Base de datos caída"))
        .await;

    let repos = repositories(&backend, signed_in());
    let err = repos.posts.list_posts(1).await.unwrap_err();
    assert_eq!(err.to_string(), "Base de datos caída");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn success_false_envelope_is_a_server_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"success":false,"message":"No permitido"}"#,
        ))
        .await;

    let repos = repositories(&backend, signed_in());
    let err = repos.posts.delete_post("p1").await.unwrap_err();
    assert_eq!(err.to_string(), "No permitido");
}

#[tokio::test]
async fn authenticated_calls_carry_bearer_token() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!([post_json("p1"), post_json("p2")])))
        .await;

    let repos = repositories(&backend, signed_in());
    let page = repos.posts.list_posts(1).await.unwrap();

    assert_eq!(page.posts.len(), 2);
    assert!(page.has_more, "a full bare page may have more");

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/api/post");
    assert_eq!(requests[0].query.as_deref(), Some("page=1&limit=2"));
    assert_eq!(
        requests[0].header("authorization"),
        Some(format!("Bearer {}", TOKEN).as_str())
    );
}

#[tokio::test]
async fn data_is_unwrapped_exactly_once() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!({
            "posts": [post_json("p3")],
            "page": 2,
            "hasMore": false
        })))
        .await;

    let repos = repositories(&backend, signed_in());
    let page = repos.posts.list_posts(2).await.unwrap();
    assert_eq!(page.page, 2);
    assert!(!page.has_more);
    assert_eq!(page.posts[0].author.username, "luis");
}

#[tokio::test]
async fn update_post_puts_content_and_returns_data() {
    let backend = MockBackend::start().await;
    let mut updated = post_json("p1");
    updated["content"] = json!("editado");
    backend.enqueue_response(MockResponse::data(updated)).await;

    let repos = repositories(&backend, signed_in());
    let post = repos.posts.update_post("p1", "editado").await.unwrap();
    assert_eq!(post.id, "p1");
    assert_eq!(post.content, "editado");
    assert_eq!(post.author.username, "luis");

    let request = &backend.captured_requests().await[0];
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/post/p1");
    assert_eq!(request.body_json(), json!({ "content": "editado" }));
    assert_eq!(
        request.header("authorization"),
        Some(format!("Bearer {}", TOKEN).as_str())
    );
}

#[tokio::test]
async fn ids_cannot_escape_their_path_segment() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::data(json!(null))).await;
    backend
        .enqueue_response(MockResponse::data(json!({ "following": true })))
        .await;

    let repos = repositories(&backend, signed_in());
    repos.posts.delete_post("../auth/login").await.unwrap();
    repos.follow.toggle_follow("u1?x=1").await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/post/..%2Fauth%2Flogin");
    assert_eq!(requests[1].path, "/api/social/follow/u1%3Fx=1");
    assert_eq!(requests[1].query, None);
}

#[tokio::test]
async fn dot_segment_id_is_rejected_locally() {
    let backend = MockBackend::start().await;
    let repos = repositories(&backend, signed_in());

    let err = repos.users.get_user("..").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { .. }));
    assert!(backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn follow_without_session_makes_no_request() {
    let backend = MockBackend::start().await;
    let repos = repositories(&backend, SessionContext::in_memory());

    let err = repos.follow.toggle_follow("u2").await.unwrap_err();
    assert_eq!(err, ApiError::Unauthenticated);
    assert_eq!(err.to_string(), "No autenticado");
    assert!(backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn create_post_sends_caption_and_numbered_images() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(post_json("new")))
        .await;

    let repos = repositories(&backend, signed_in());
    let images = [
        ImageAttachment::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg"),
        ImageAttachment::new(vec![0x89, 0x50, 0x4E, 0x47], "image/png"),
    ];
    let post = repos.posts.create_post("Atardecer", &images).await.unwrap();
    assert_eq!(post.id, "new");

    let requests = backend.captured_requests().await;
    let request = &requests[0];
    assert_eq!(request.path, "/api/post");
    assert!(request
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data"));

    let body = request.body_text();
    assert_eq!(body.matches("name=\"content\"").count(), 1);
    assert_eq!(body.matches("name=\"images\"").count(), 2);
    assert!(body.contains("filename=\"image_1.jpg\""));
    assert!(body.contains("filename=\"image_2.png\""));
    assert!(body.contains("Atardecer"));
}

#[tokio::test]
async fn like_returns_server_confirmation() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!({ "liked": true, "likesCount": 8 })))
        .await;

    let repos = repositories(&backend, signed_in());
    let status = repos.posts.toggle_like("p1").await.unwrap();
    assert!(status.liked);
    assert_eq!(status.likes_count, Some(8));
    assert_eq!(backend.captured_requests().await[0].path, "/api/post/p1/like");
}

#[tokio::test]
async fn comments_accept_bare_author_ids() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!([
            { "_id": "c1", "author": "u5", "content": "genial" },
            { "_id": "c2", "author": user_json("u6", "rosa"), "text": "¡bien!" }
        ])))
        .await;

    let repos = repositories(&backend, signed_in());
    let comments = repos.posts.get_comments("p1").await.unwrap();
    assert_eq!(comments.len(), 2);
    assert!(comments[0].author.is_placeholder());
    assert_eq!(comments[0].author.id, "u5");
    assert_eq!(comments[1].content, "¡bien!");
}

#[tokio::test]
async fn scoped_search_hits_scoped_endpoint() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!([{ "name": "playa", "count": 12 }])))
        .await;

    let repos = repositories(&backend, signed_in());
    let results = repos
        .search
        .search(SearchScope::Tags, " playa ")
        .await
        .unwrap();

    assert_eq!(results.tags.len(), 1);
    assert_eq!(results.tags[0].posts_count, 12);
    assert!(results.users.is_empty());

    let request = &backend.captured_requests().await[0];
    assert_eq!(request.path, "/api/search/tags");
    assert_eq!(request.query.as_deref(), Some("q=playa"));
}

#[tokio::test]
async fn profile_reads_hit_user_endpoints() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(user_json("u1", "ana")))
        .await;
    backend
        .enqueue_response(MockResponse::data(json!([post_json("p1")])))
        .await;

    let repos = repositories(&backend, signed_in());
    let me = repos.users.me().await.unwrap();
    let posts = repos.users.user_posts(&me.id).await.unwrap();
    assert_eq!(posts.len(), 1);

    let paths: Vec<_> = backend
        .captured_requests()
        .await
        .into_iter()
        .map(|r| r.path)
        .collect();
    assert_eq!(paths, ["/api/user/me", "/api/user/u1/posts"]);
}

#[tokio::test]
async fn favorites_round_trip() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::data(json!({ "isFavorite": true })))
        .await;
    backend
        .enqueue_response(MockResponse::data(json!([post_json("p1")])))
        .await;

    let repos = repositories(&backend, signed_in());
    assert!(repos.favorites.toggle_favorite("p1").await.unwrap().favorited);
    assert_eq!(repos.favorites.list_favorites().await.unwrap().len(), 1);
}

#[tokio::test]
async fn logout_is_local_only() {
    let backend = MockBackend::start().await;
    let session = signed_in();
    let repos = repositories(&backend, session.clone());

    repos.auth.logout();
    assert!(!session.is_authenticated());
    assert!(backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn change_password_sends_camel_case_body() {
    let backend = MockBackend::start().await;
    let repos = repositories(&backend, signed_in());

    repos
        .auth
        .change_password("viejo123", "nuevo123")
        .await
        .unwrap();

    let request = &backend.captured_requests().await[0];
    assert_eq!(request.path, "/api/auth/change-password");
    assert_eq!(
        request.body_json(),
        json!({ "currentPassword": "viejo123", "newPassword": "nuevo123" })
    );
}

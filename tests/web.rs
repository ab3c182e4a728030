#![forbid(unsafe_code)]
#![cfg(feature = "web")]
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use nightrelcalc::web::form::{build_calc_url, FormFields};
use nightrelcalc::web::page::escape_html;
use nightrelcalc::web::{create_router, listen_urls, AppState};
use nightrelcalc::Defaults;
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::new(Defaults::default()))
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get(uri: &str) -> (StatusCode, String) {
    let resp = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    (status, body_text(resp).await)
}

async fn post_calc(form: &str) -> axum::response::Response {
    app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calc")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn index_computes_with_defaults() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="18:30""#));
    assert!(body.contains("14:00 -&gt; 22:30"));
    assert!(body.contains("og:description"));
    assert!(body.contains(concat!("nightrelcalc v", env!("CARGO_PKG_VERSION"))));
}

#[tokio::test]
async fn index_reads_query_parameters() {
    let (status, body) = get("/?start=20%3A00&length=5&combine=2&normal_end=17%3A00").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Full day + 2.00h + 3.00h"));
    assert!(body.contains("14:00 -&gt; 01:00 (+1d)"));
}

#[tokio::test]
async fn index_shows_core_errors_inline() {
    let (status, body) = get("/?normal_start=17%3A00&normal_end=09%3A00").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<div class="err">normal day must be within same day"#));
    assert!(!body.contains("og:description"));
}

#[tokio::test]
async fn index_falls_back_on_invalid_limits() {
    // min_rest invalide -> défaut 11h, donc lendemain à 09:30
    let (_, body) = get("/?min_rest=abc&combine=-3").await;
    assert!(body.contains("09:30 (+1d) -&gt; 18:00 (+1d)"));
    assert!(!body.contains("h + "));
}

#[tokio::test]
async fn submit_redirects_with_only_non_default_fields() {
    let resp = post_calc(
        "start=20%3A00&length=5&combine=&normal_start=09%3A00&normal_end=17%3A30&min_rest=11&max_overtime=4",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()[header::LOCATION], "/?start=20%3A00&length=5");

    let resp = post_calc("start=20%3A00&length=5&combine=2&min_rest=8").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers()[header::LOCATION],
        "/?start=20%3A00&length=5&combine=2&min_rest=8"
    );
}

#[tokio::test]
async fn submit_rerenders_on_validation_error() {
    let resp = post_calc("start=&length=4").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("release start is required (HH:MM)"));

    let resp = post_calc("start=18%3A30&length=abc").await;
    assert!(body_text(resp).await.contains("release length must be &gt; 0"));

    let resp = post_calc("start=18%3A30&length=4&max_overtime=-1").await;
    assert!(body_text(resp).await.contains("max overtime must be &gt;= 0 (hours, default 4)"));

    let resp = post_calc("start=18%3A30&length=4&combine=x").await;
    assert!(body_text(resp).await.contains("combine must be &gt;= 0 (hours) or empty"));

    let resp = post_calc("start=99%3A00&length=4").await;
    let body = body_text(resp).await;
    assert!(body.contains("invalid release start"));
    assert!(body.contains(r#"value="99:00""#));
}

#[tokio::test]
async fn unknown_path_serves_the_form() {
    let (status, body) = get("/share?start=20%3A00&length=5").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="20:00""#));
    assert!(body.contains("og:description"));
}

#[tokio::test]
async fn calc_accepts_query_fields_on_get() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/calc?start=20%3A00&length=5&combine=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers()[header::LOCATION],
        "/?start=20%3A00&length=5&combine=2"
    );
}

#[test]
fn calc_url_skips_defaults() {
    let defaults = Defaults::default();
    let fields = FormFields {
        start: "18:30".into(),
        length: "4".into(),
        normal_start: "09:00".into(),
        normal_end: "18:00".into(),
        max_overtime: "4".into(),
        ..FormFields::default()
    };
    assert_eq!(
        build_calc_url(&fields, &defaults),
        "/?start=18%3A30&length=4&normal_end=18%3A00"
    );
}

#[test]
fn html_is_escaped() {
    assert_eq!(
        escape_html(r#"<b a="1">&'"#),
        "&lt;b a=&quot;1&quot;&gt;&amp;&#39;"
    );
}

#[test]
fn loopback_url_comes_first() {
    assert_eq!(listen_urls(8484)[0], "http://127.0.0.1:8484/");
}

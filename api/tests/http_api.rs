use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use nutrivision_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};

// Nothing listens on the discard port, so Gemini calls fail fast.
const UNREACHABLE_GEMINI: &str = "http://127.0.0.1:9";

fn test_server(extra_args: &[&str]) -> TestServer {
    let mut argv = vec![
        "nutrivision-api",
        "--metrics-enabled",
        "false",
        "--gemini-base-url",
        UNREACHABLE_GEMINI,
    ];
    argv.extend_from_slice(extra_args);

    let args = Arc::new(Args::parse_from(argv));
    let app = router(state(args)).expect("router should build");

    TestServer::new(app).expect("test server should start")
}

struct ApiContext {
    server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> ApiContext {
        ApiContext {
            server: test_server(&["--gemini-api-key", "test-key"]),
        }
    }
}

#[test_context(ApiContext)]
#[tokio::test]
async fn session_starts_on_home(ctx: &mut ApiContext) {
    let response = ctx.server.get("/session").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["current_view"], "HOME");
    assert_eq!(body["data"]["fitness_guide_enabled"], false);
    assert!(body["data"]["analysis"].is_null());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn fitness_guide_requires_an_analysis(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/session/navigate")
        .json(&json!({ "view": "FITNESS_GUIDE" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["current_view"], "HOME");

    let response = ctx.server.post("/fitness-plan").await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "Analyze a food item first to enable this feature."
    );

    ctx.server
        .get("/fitness-plan")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn navigate_rejects_unknown_views(ctx: &mut ApiContext) {
    ctx.server
        .post("/session/navigate")
        .json(&json!({ "view": "SETTINGS" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn meal_log_totals_and_resets_when_leaving_tracker(ctx: &mut ApiContext) {
    ctx.server
        .post("/session/navigate")
        .json(&json!({ "view": "HEALTH_TRACKER" }))
        .await
        .assert_status_ok();

    for (name, calories) in [("Oatmeal", 300), ("Salad", 450)] {
        ctx.server
            .post("/meals")
            .json(&json!({ "name": name, "calories": calories }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let body: Value = ctx.server.get("/meals").await.json();
    assert_eq!(body["data"]["total_calories"], 750);
    assert_eq!(body["data"]["meals"][0]["name"], "Oatmeal");
    assert_eq!(body["data"]["meals"][1]["name"], "Salad");

    ctx.server
        .post("/session/navigate")
        .json(&json!({ "view": "HOME" }))
        .await
        .assert_status_ok();

    let body: Value = ctx.server.get("/meals").await.json();
    assert_eq!(body["data"]["total_calories"], 0);
    assert_eq!(body["data"]["meals"], json!([]));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn meal_log_rejects_invalid_entries(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/meals")
        .json(&json!({ "name": "", "calories": 0 }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["field"], "calories");
    assert_eq!(body["errors"][1]["field"], "name");

    ctx.server
        .post("/meals")
        .json(&json!({ "name": "   ", "calories": 100 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    ctx.server
        .post("/meals")
        .json(&json!({ "name": "Soup", "calories": -5 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = ctx.server.get("/meals").await.json();
    assert_eq!(body["data"]["meals"], json!([]));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn clearing_meals_returns_no_content(ctx: &mut ApiContext) {
    ctx.server
        .post("/meals")
        .json(&json!({ "name": "Apple", "calories": 95 }))
        .await
        .assert_status(StatusCode::CREATED);

    ctx.server
        .delete("/meals")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let body: Value = ctx.server.get("/meals").await.json();
    assert_eq!(body["data"]["total_calories"], 0);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn recipe_requires_a_prompt(ctx: &mut ApiContext) {
    ctx.server
        .post("/recipes")
        .json(&json!({ "prompt": "" }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = ctx
        .server
        .post("/recipes")
        .json(&json!({ "prompt": "   " }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Please describe the recipe you want.");

    ctx.server
        .get("/recipes/current")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn recipe_reports_unreachable_ai_service(ctx: &mut ApiContext) {
    ctx.server
        .post("/recipes")
        .json(&json!({ "prompt": "a quick vegan lunch" }))
        .await
        .assert_status(StatusCode::BAD_GATEWAY);

    ctx.server
        .get("/recipes/current")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn food_analysis_validates_the_upload(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/food-analysis/image")
        .multipart(MultipartForm::new().add_text("note", "no image here"))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Please select an image first.");

    let gif = Part::bytes(b"GIF89a".to_vec())
        .file_name("food.gif")
        .mime_type("image/gif");
    ctx.server
        .post("/food-analysis/image")
        .multipart(MultipartForm::new().add_part("image", gif))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    ctx.server
        .get("/food-analysis")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn food_analysis_reports_unreachable_ai_service(ctx: &mut ApiContext) {
    let png = Part::bytes(vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a])
        .file_name("plate.png")
        .mime_type("image/png");

    ctx.server
        .post("/food-analysis/image")
        .multipart(MultipartForm::new().add_part("image", png))
        .await
        .assert_status(StatusCode::BAD_GATEWAY);

    let body: Value = ctx.server.get("/session").await.json();
    assert_eq!(body["data"]["fitness_guide_enabled"], false);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn health_and_config_endpoints(ctx: &mut ApiContext) {
    let body: Value = ctx.server.get("/health/live").await.json();
    assert_eq!(body["status"], "ok");

    let body: Value = ctx.server.get("/health/ready").await.json();
    assert_eq!(body["data"]["llm_configured"], true);

    let body: Value = ctx.server.get("/config").await.json();
    assert_eq!(body["gemini_model"], "gemini-2.5-flash");
    assert_eq!(
        body["accepted_image_types"],
        json!(["image/jpeg", "image/png"])
    );
}

#[tokio::test]
async fn readiness_fails_without_api_key() {
    let server = test_server(&["--gemini-api-key="]);

    server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    server.get("/health/live").await.assert_status_ok();
}

#[tokio::test]
async fn routes_honor_the_root_path() {
    let server = test_server(&["--server-root-path", "/api"]);

    server.get("/api/health/live").await.assert_status_ok();
    server.get("/api/session").await.assert_status_ok();
    server
        .get("/session")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn food_analysis_rejects_more_than_one_image(ctx: &mut ApiContext) {
    let part = || {
        Part::bytes(vec![0xff, 0xd8, 0xff, 0xe0])
            .file_name("meal.jpg")
            .mime_type("image/jpeg")
    };

    let response = ctx
        .server
        .post("/food-analysis/image")
        .multipart(
            MultipartForm::new()
                .add_part("image", part())
                .add_part("image", part()),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Please upload a single image.");
}

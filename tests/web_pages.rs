mod common;

use axum::http::StatusCode;
use serde::Serialize;
use sqlx::PgPool;

#[derive(Serialize)]
struct LoginForm<'a> {
    email: &'a str,
    password: &'a str,
}

#[sqlx::test]
async fn test_marketing_pages_render(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = common::make_app_server(state);

    for path in [
        "/", "/about", "/services", "/faq", "/contact", "/shipping", "/refunds", "/privacy",
        "/terms", "/cookies", "/tracking", "/login",
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert!(response.text().contains("FastRocket"), "missing brand on {path}");
    }
}

#[sqlx::test]
async fn test_contact_page_has_site_key(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = common::make_app_server(state);

    let html = server.get("/contact").await.text();

    assert!(html.contains("test-site-key"));
}

#[sqlx::test]
async fn test_tracking_page_found(pool: PgPool) {
    common::create_test_shipment(&pool, "FR500000001", "out_for_delivery").await;
    let (state, _rx) = common::create_test_state(pool);
    let server = common::make_app_server(state);

    let response = server
        .get("/tracking")
        .add_query_param("id", "FR500000001")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("FR500000001"));
    assert!(html.contains("OUT FOR DELIVERY"));
    assert!(html.contains("Lagos"));
}

#[sqlx::test]
async fn test_tracking_page_unknown_number(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = common::make_app_server(state);

    let response = server
        .get("/tracking")
        .add_query_param("id", "NOPE")
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_unknown_path_renders_not_found(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = common::make_app_server(state);

    let response = server.get("/no-such-page").await;

    response.assert_status_not_found();
    assert!(response.text().contains("/no-such-page"));
}

#[sqlx::test]
async fn test_sitemap(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = common::make_app_server(state);

    let response = server.get("/sitemap.xml").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/xml");
    assert!(response.text().contains("<loc>http://localhost:3000/tracking</loc>"));
}

// ─── ADMIN ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_admin_redirects_to_login(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = common::make_app_server(state);

    let response = server.get("/admin").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[sqlx::test]
async fn test_login_form_sets_cookie_and_redirects(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = common::make_app_server(state);

    let response = server
        .post("/login")
        .form(&LoginForm {
            email: common::ADMIN_EMAIL,
            password: common::ADMIN_PASSWORD,
        })
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/admin");
    assert!(
        response
            .header("set-cookie")
            .to_str()
            .unwrap()
            .starts_with("auth_token=")
    );
}

#[sqlx::test]
async fn test_login_form_wrong_password(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = common::make_app_server(state);

    let response = server
        .post("/login")
        .form(&LoginForm {
            email: common::ADMIN_EMAIL,
            password: "wrong",
        })
        .await;

    response.assert_status_unauthorized();
    assert!(response.text().contains("Invalid email or password"));
}

#[sqlx::test]
async fn test_dashboard_lists_shipments(pool: PgPool) {
    common::create_test_shipment(&pool, "FR600000001", "in_transit").await;
    common::create_test_shipment(&pool, "FR600000002", "delivered").await;
    let (state, _rx) = common::create_test_state(pool);
    let token = common::admin_token(&state).await;
    let server = common::make_app_server(state);

    let response = server
        .get("/admin")
        .add_header("Cookie", format!("auth_token={token}"))
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("FR600000001"));
    assert!(html.contains("FR600000002"));
}

#[sqlx::test]
async fn test_dashboard_cards_show_status_counts(pool: PgPool) {
    common::create_test_shipment(&pool, "FR650000001", "in_transit").await;
    common::create_test_shipment(&pool, "FR650000002", "in_transit").await;
    common::create_test_shipment(&pool, "FR650000003", "in_transit").await;
    common::create_test_shipment(&pool, "FR650000004", "delivered").await;
    let (state, _rx) = common::create_test_state(pool);
    let token = common::admin_token(&state).await;
    let server = common::make_app_server(state);

    let html = server
        .get("/admin")
        .add_query_param("q", "FR650000004")
        .add_header("Cookie", format!("auth_token={token}"))
        .await
        .text();

    assert!(html.contains("Total Shipments</p><h3>4</h3>"));
    assert!(html.contains("In Transit</p><h3>3</h3>"));
    assert!(html.contains("Delivered</p><h3>1</h3>"));
    assert!(html.contains("Pending</p><h3>0</h3>"));
}

#[sqlx::test]
async fn test_dashboard_search_filters_rows(pool: PgPool) {
    common::create_test_shipment(&pool, "FR700000001", "pending").await;
    common::create_test_shipment(&pool, "ZZ700000002", "pending").await;
    let (state, _rx) = common::create_test_state(pool);
    let token = common::admin_token(&state).await;
    let server = common::make_app_server(state);

    let html = server
        .get("/admin")
        .add_query_param("q", "fr7")
        .add_header("Cookie", format!("auth_token={token}"))
        .await
        .text();

    assert!(html.contains("FR700000001"));
    assert!(!html.contains("ZZ700000002"));
}

#[sqlx::test]
async fn test_admin_update_form_redirects_with_notice(pool: PgPool) {
    common::create_test_shipment(&pool, "FR800000001", "pending").await;
    let (state, mut rx) = common::create_test_state(pool.clone());
    let token = common::admin_token(&state).await;
    let server = common::make_app_server(state);

    let response = server
        .post("/admin/update")
        .add_header("Cookie", format!("auth_token={token}"))
        .form(&[
            ("trackingNumber", "FR800000001"),
            ("status", "delivered"),
            ("location", ""),
            ("description", ""),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/admin?notice=updated");
    assert_eq!(common::count_events(&pool, "FR800000001").await, 2);
    assert_eq!(rx.try_recv().unwrap().status, "delivered");
}

#[sqlx::test]
async fn test_admin_update_form_unknown_shipment(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let token = common::admin_token(&state).await;
    let server = common::make_app_server(state);

    let response = server
        .post("/admin/update")
        .add_header("Cookie", format!("auth_token={token}"))
        .form(&[("trackingNumber", "NOPE"), ("status", "delivered")])
        .await;

    assert_eq!(response.header("location"), "/admin?notice=not_found");
}

#[sqlx::test]
async fn test_admin_create_page_prefills_tracking_number(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let token = common::admin_token(&state).await;
    let server = common::make_app_server(state);

    let response = server
        .get("/admin/create")
        .add_header("Cookie", format!("auth_token={token}"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"name="trackingNumber" value="FR"#));
}

#[sqlx::test]
async fn test_admin_create_form(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let token = common::admin_token(&state).await;
    let server = common::make_app_server(state);

    let response = server
        .post("/admin/create")
        .add_header("Cookie", format!("auth_token={token}"))
        .form(&[
            ("trackingNumber", "FR900000001"),
            ("senderName", "Alice"),
            ("senderAddress", "1 Main St, Accra"),
            ("senderEmail", ""),
            ("receiverName", "Bob"),
            ("receiverAddress", "2 Side St, Paris"),
            ("weight", "4"),
            ("serviceType", "express"),
            ("status", "pending"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/admin?notice=created");
    assert_eq!(common::count_events(&pool, "FR900000001").await, 1);
}

#[sqlx::test]
async fn test_admin_create_form_rerenders_on_error(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let token = common::admin_token(&state).await;
    let server = common::make_app_server(state);

    let response = server
        .post("/admin/create")
        .add_header("Cookie", format!("auth_token={token}"))
        .form(&[("trackingNumber", "FR900000002"), ("senderName", "")])
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("FR900000002"));
}

//! HTTP-level fixtures: create principals and log them in through the API.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{test, Error};
use backend_test_support::unique_helpers::unique_email;
use serde_json::{json, Value};

pub const PASSWORD: &str = "p1-correct-horse";

pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}

/// A created principal and a token for it.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub token: String,
}

async fn post_json<S>(app: &S, uri: &str, body: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "POST {uri} -> {}", resp.status());
    test::read_body_json(resp).await
}

async fn create_and_login<S>(app: &S, create_uri: &str, login_uri: &str, mut body: Value) -> Account
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let email = body["email"].as_str().unwrap_or_default().to_string();
    body["password"] = json!(PASSWORD);

    let created = post_json(app, create_uri, body).await;
    let id = created["id"].as_i64().expect("created record has an id");

    let login = post_json(
        app,
        login_uri,
        json!({ "email": email, "password": PASSWORD }),
    )
    .await;
    let token = login["access_token"]
        .as_str()
        .expect("login returns access_token")
        .to_string();

    Account { id, email, token }
}

pub async fn student<S>(app: &S) -> Account
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let body = json!({ "name": "Student", "email": unique_email("student") });
    create_and_login(app, "/students", "/auth/student/login", body).await
}

pub async fn faculty<S>(app: &S) -> Account
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let body = json!({ "name": "Faculty", "email": unique_email("faculty") });
    create_and_login(app, "/faculty", "/auth/faculty/login", body).await
}

pub async fn admin<S>(app: &S) -> Account
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let body = json!({ "name": "Admin", "email": unique_email("admin") });
    create_and_login(app, "/admin", "/admin/login", body).await
}

/// POST as `token`, returning the raw response.
pub async fn post_as<S>(app: &S, token: &str, uri: &str, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .insert_header(bearer(token))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn get_as<S>(app: &S, token: &str, uri: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header(bearer(token))
        .to_request();
    test::call_service(app, req).await
}

pub async fn get<S>(app: &S, uri: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    test::call_service(app, test::TestRequest::get().uri(uri).to_request()).await
}

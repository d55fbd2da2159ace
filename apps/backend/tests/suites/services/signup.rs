use college_backend::auth::subject::Role;
use college_backend::db::require_db;
use college_backend::error::AppError;
use college_backend::repos::principals::Principal;
use college_backend::services::auth::{signup, Signup};

use crate::support::sqlite_state;

fn request(role: Role, email: &str, mobile: Option<&str>) -> Signup {
    Signup {
        role,
        name: "Grace".to_string(),
        email: email.to_string(),
        mobile: mobile.map(str::to_string),
        password: "plain-text-pw".to_string(),
    }
}

#[actix_web::test]
async fn stores_a_bcrypt_digest_not_the_password() {
    let state = sqlite_state().await;
    let db = require_db(&state).unwrap();

    let created = signup(db, &state.security, request(Role::Faculty, "grace@college.test", None))
        .await
        .unwrap();

    assert_ne!(created.password_hash(), "plain-text-pw");
    assert!(created.password_hash().starts_with("$2"));
}

#[actix_web::test]
async fn mobile_is_kept_for_students_only() {
    let state = sqlite_state().await;
    let db = require_db(&state).unwrap();

    let student = signup(
        db,
        &state.security,
        request(Role::Student, "s@college.test", Some("555-0100")),
    )
    .await
    .unwrap();
    let admin = signup(
        db,
        &state.security,
        request(Role::Admin, "a@college.test", Some("555-0101")),
    )
    .await
    .unwrap();

    match student {
        Principal::Student(model) => assert_eq!(model.mobile.as_deref(), Some("555-0100")),
        other => panic!("expected a student, got {other:?}"),
    }
    assert_eq!(admin.role(), Role::Admin);
}

#[actix_web::test]
async fn duplicate_email_in_same_role_is_rejected() {
    let state = sqlite_state().await;
    let db = require_db(&state).unwrap();

    signup(db, &state.security, request(Role::Admin, "dup@college.test", None))
        .await
        .unwrap();
    let err = signup(db, &state.security, request(Role::Admin, "dup@college.test", None))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::AlreadyExists { .. }));
    assert_eq!(err.status().as_u16(), 400);
}

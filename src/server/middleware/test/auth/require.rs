use super::*;

/// Tests a teacher passes the content management check.
///
/// Expected: Ok(AuthUser) carrying the token subject and role
#[test]
fn grants_content_management_to_teacher() {
    let keys = keys();
    let headers = headers_with(&token::bearer(&token::mint("teacher-1", "teacher")));

    let user = AuthGuard::new(&keys, &headers)
        .require(&[Permission::ManageContent])
        .unwrap();

    assert_eq!(user.id, "teacher-1");
    assert_eq!(user.role, Role::Teacher);
}

/// Tests an admin passes the content management check.
#[test]
fn grants_content_management_to_admin() {
    let keys = keys();
    let headers = headers_with(&token::bearer(&token::mint("admin-1", "admin")));

    let result = AuthGuard::new(&keys, &headers).require(&[Permission::ManageContent]);

    assert!(result.is_ok());
}

/// Tests students and tutors are denied content management.
///
/// Expected: Err(AuthError::AccessDenied) naming the subject
#[test]
fn denies_content_management_to_student_and_tutor() {
    let keys = keys();

    for role in ["student", "tutor"] {
        let headers = headers_with(&token::bearer(&token::mint("user-1", role)));

        let result = AuthGuard::new(&keys, &headers).require(&[Permission::ManageContent]);

        match result {
            Err(AppError::AuthErr(AuthError::AccessDenied(sub, _))) => assert_eq!(sub, "user-1"),
            other => panic!("expected AccessDenied for {}, got {:?}", role, other),
        }
    }
}

/// Tests any valid token satisfies an empty permission list.
#[test]
fn grants_authenticated_access_to_student() {
    let keys = keys();
    let headers = headers_with(&token::bearer(&token::mint("student-1", "student")));

    let user = AuthGuard::new(&keys, &headers).require(&[]).unwrap();

    assert_eq!(user.role, Role::Student);
}

/// Tests requests without an Authorization header are rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_token() {
    let keys = keys();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&keys, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a non-bearer Authorization scheme counts as a missing token.
#[test]
fn rejects_non_bearer_scheme() {
    let keys = keys();
    let headers = headers_with("Basic dXNlcjpwYXNz");

    let result = AuthGuard::new(&keys, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests expired tokens are rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_expired_token() {
    let keys = keys();
    let headers = headers_with(&token::bearer(&token::mint_expired("teacher-1", "teacher")));

    let result = AuthGuard::new(&keys, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests tokens signed with another secret are rejected.
#[test]
fn rejects_token_with_foreign_signature() {
    let keys = keys();
    let headers = headers_with(&token::bearer(&token::mint_foreign("admin-1", "admin")));

    let result = AuthGuard::new(&keys, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests tokens carrying an unknown role are rejected.
#[test]
fn rejects_token_with_unknown_role() {
    let keys = keys();
    let headers = headers_with(&token::bearer(&token::mint("root-1", "root")));

    let result = AuthGuard::new(&keys, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

use dbtap::{AuthContext, Credential, DbtapError, Role};

fn credential(role: Role, username: &str, password: &str) -> Credential {
    Credential {
        role,
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn test_from_credentials_encodes_user_colon_password() {
    let ctx = AuthContext::from_credentials(&[credential(Role::Owner, "admin", "admin123")]);

    // base64("admin:admin123")
    assert_eq!(ctx.token_for(Role::Owner).expect("token"), "YWRtaW46YWRtaW4xMjM=");
}

#[test]
fn test_registered_token_is_kept_verbatim() {
    let ctx = AuthContext::new().token(Role::DataWrite, "opaque-token-from-elsewhere");

    assert_eq!(
        ctx.token_for(Role::DataWrite).expect("token"),
        "opaque-token-from-elsewhere"
    );
}

#[test]
fn test_token_for_unknown_role_fails() {
    let ctx = AuthContext::new().token(Role::Owner, "t");

    let err = ctx.token_for(Role::DataRead).unwrap_err();
    assert!(matches!(err, DbtapError::AuthError(_)));
    assert!(err.to_string().contains("data_read"));
}

#[test]
fn test_role_serde_names() {
    assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), r#""owner""#);
    assert_eq!(serde_json::to_string(&Role::DbAdmin).unwrap(), r#""db_admin""#);
    assert_eq!(serde_json::to_string(&Role::DataWrite).unwrap(), r#""data_write""#);
    assert_eq!(serde_json::to_string(&Role::DataRead).unwrap(), r#""data_read""#);

    let parsed: Role = serde_json::from_str(r#""db_admin""#).unwrap();
    assert_eq!(parsed, Role::DbAdmin);
}

#[test]
fn test_role_display_matches_serde_names() {
    assert_eq!(Role::Owner.to_string(), "owner");
    assert_eq!(Role::DataRead.to_string(), "data_read");
}

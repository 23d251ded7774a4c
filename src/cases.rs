//! The user-list and login checks.
//!
//! Every case is independent: it issues its own requests, decodes its own
//! responses and only reads the shared settings.

use crate::fixture::locate_user;
use crate::harness::{
    CaseContext, CaseError, TestCase, expect_empty, expect_eq, expect_gt, expect_status,
};
use crate::http::HttpResult;
use crate::json;
use crate::models::{LoginCredentials, LoginError, LoginToken, UserListPage, UserRecord};

pub const USERS_PATH: &str = "/api/users";
pub const LOGIN_PATH: &str = "/api/login";

/// Page that contains the fixture user.
const FIXTURE_PAGE_PATH: &str = "/api/users?page=2";
/// Page past the last one, expected to be empty.
const EMPTY_PAGE_PATH: &str = "/api/users?page=4";
const PER_PAGE_PATH: &str = "/api/users?per_page=2";

/// An email address the service does not know.
const UNKNOWN_EMAIL: &str = "111111";

const OK: u16 = 200;
const BAD_REQUEST: u16 = 400;

/// All cases, in their reporting order.
pub fn all() -> Vec<TestCase> {
    vec![
        TestCase::new("get_user_list", get_user_list),
        TestCase::new("get_page_user_list", get_page_user_list),
        TestCase::new("empty_page_user_list", empty_page_user_list),
        TestCase::new("user_list_per_page", user_list_per_page),
        TestCase::new("email_from_user_list", email_from_user_list),
        TestCase::new("id_from_user_list", id_from_user_list),
        TestCase::new("first_name_from_user_list", first_name_from_user_list),
        TestCase::new("last_name_from_user_list", last_name_from_user_list),
        TestCase::new("avatar_from_user_list", avatar_from_user_list),
        TestCase::new("successful_login", successful_login),
        TestCase::new("login_without_email", login_without_email),
        TestCase::new("login_without_password", login_without_password),
        TestCase::new("login_with_unknown_email", login_with_unknown_email),
    ]
}

fn fetch_page(ctx: &CaseContext<'_>, path: &str) -> Result<UserListPage, CaseError> {
    let result = ctx.client.get(path)?;
    expect_status(&result, OK)?;
    Ok(json::from_body(&result.body)?)
}

fn fixture_user(ctx: &CaseContext<'_>) -> Result<UserRecord, CaseError> {
    let page = fetch_page(ctx, FIXTURE_PAGE_PATH)?;
    Ok(locate_user(&page, ctx.settings.test_user_id)?.clone())
}

fn login(ctx: &CaseContext<'_>, email: &str, password: &str) -> Result<HttpResult, CaseError> {
    let body = json::to_body(&LoginCredentials::new(email, password))?;
    Ok(ctx.client.post_json(LOGIN_PATH, &body)?)
}

fn expect_login_rejected(
    ctx: &CaseContext<'_>,
    email: &str,
    password: &str,
    expected_error: &str,
) -> Result<(), CaseError> {
    let result = login(ctx, email, password)?;
    expect_status(&result, BAD_REQUEST)?;

    let error: LoginError = json::from_body(&result.body)?;
    expect_eq("login error", expected_error, error.error.as_str())
}

fn get_user_list(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    let page = fetch_page(ctx, USERS_PATH)?;
    expect_gt("record count", 0, page.len())
}

fn get_page_user_list(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    let page = fetch_page(ctx, FIXTURE_PAGE_PATH)?;
    expect_eq("page", 2, page.page)
}

fn empty_page_user_list(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    let page = fetch_page(ctx, EMPTY_PAGE_PATH)?;
    expect_empty("record count", page.len())
}

fn user_list_per_page(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    let page = fetch_page(ctx, PER_PAGE_PATH)?;
    expect_eq("record count", 2, page.len())
}

fn email_from_user_list(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    let user = fixture_user(ctx)?;
    expect_eq("email", ctx.settings.test_user_email.as_str(), user.email.as_str())
}

fn id_from_user_list(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    let user = fixture_user(ctx)?;
    expect_eq("id", ctx.settings.test_user_id, user.id)
}

fn first_name_from_user_list(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    let user = fixture_user(ctx)?;
    expect_eq(
        "first name",
        ctx.settings.test_user_first_name.as_str(),
        user.first_name.as_str(),
    )
}

fn last_name_from_user_list(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    let user = fixture_user(ctx)?;
    expect_eq(
        "last name",
        ctx.settings.test_user_last_name.as_str(),
        user.last_name.as_str(),
    )
}

fn avatar_from_user_list(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    let user = fixture_user(ctx)?;
    expect_eq(
        "avatar",
        ctx.settings.test_user_avatar_url.as_str(),
        user.avatar_url.as_str(),
    )
}

fn successful_login(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    let settings = ctx.settings;
    let result = login(ctx, &settings.test_user_email, &settings.test_user_password)?;
    expect_status(&result, OK)?;

    let token: LoginToken = json::from_body(&result.body)?;
    expect_eq(
        "token",
        settings.test_user_login_token.as_str(),
        token.token.as_str(),
    )
}

fn login_without_email(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    expect_login_rejected(
        ctx,
        "",
        &ctx.settings.test_user_password,
        "Missing email or username",
    )
}

fn login_without_password(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    expect_login_rejected(ctx, &ctx.settings.test_user_email, "", "Missing password")
}

fn login_with_unknown_email(ctx: &CaseContext<'_>) -> Result<(), CaseError> {
    expect_login_rejected(
        ctx,
        UNKNOWN_EMAIL,
        &ctx.settings.test_user_password,
        "user not found",
    )
}

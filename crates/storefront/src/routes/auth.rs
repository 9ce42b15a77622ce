//! Simulated login and logout.
//!
//! Login does not authenticate anyone. The form fields are stored in the
//! session as the user identity and the visitor is redirected back to where
//! they came from - enough to demonstrate login-state tagging.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use url::Url;

use tagshop_core::User;

use crate::error::Result;
use crate::filters;
use crate::models;
use crate::routes::PageContext;
use crate::state::AppState;

/// Where a redirect lands when the requested target is missing or unsafe.
const DEFAULT_REDIRECT: &str = "/";

/// Login form data - taken verbatim, never verified.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// Query parameters carrying the post-login/logout redirect target.
#[derive(Debug, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub next: String,
}

/// Display the login page.
#[instrument(skip(state, session))]
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<NextQuery>,
) -> LoginTemplate {
    LoginTemplate {
        ctx: PageContext::load(&state, &session).await,
        next: safe_redirect_target(query.next.as_deref()),
    }
}

/// Handle login form submission.
///
/// Saves the submitted identity into the session and redirects to the
/// `next` location.
#[instrument(skip(session, form))]
pub async fn login(
    session: Session,
    Query(query): Query<NextQuery>,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let user = User {
        user_id: form.user_id,
        name: form.name,
        email: form.email,
    };
    models::session::set_current_user(&session, &user).await?;

    Ok(Redirect::to(&safe_redirect_target(query.next.as_deref())))
}

/// Remove the user from the session and redirect to the `next` location.
#[instrument(skip(session))]
pub async fn logout(session: Session, Query(query): Query<NextQuery>) -> Result<Redirect> {
    models::session::clear_current_user(&session).await?;

    Ok(Redirect::to(&safe_redirect_target(query.next.as_deref())))
}

/// Resolve a client-supplied redirect target to something safe.
///
/// Only same-site relative paths pass; anything absolute, protocol-relative,
/// or disguised with backslashes falls back to the home page.
fn safe_redirect_target(next: Option<&str>) -> String {
    match next {
        Some(target) if is_safe_redirect(target) => target.to_owned(),
        _ => DEFAULT_REDIRECT.to_owned(),
    }
}

/// Returns true if `target` stays on this site.
fn is_safe_redirect(target: &str) -> bool {
    // Browsers treat backslashes in URLs as forward slashes.
    let normalized = target.replace('\\', "/");
    if !normalized.starts_with('/') || normalized.starts_with("//") {
        return false;
    }
    // A target the URL parser can resolve without a base carries its own
    // scheme or host and would leave the site.
    matches!(
        Url::parse(&normalized),
        Err(url::ParseError::RelativeUrlWithoutBase)
    )
}

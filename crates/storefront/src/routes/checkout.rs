//! Order confirmation route handler.
//!
//! There is no payment step on this demo: "checkout" is the confirmation
//! page, which fires the purchase dataLayer event the tag manager is here
//! to observe.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use crate::error::Result;
use crate::filters;
use crate::models;
use crate::routes::PageContext;
use crate::routes::basket::BasketView;
use crate::state::AppState;

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "order_confirmation.html")]
pub struct OrderConfirmationTemplate {
    pub ctx: PageContext,
    pub basket: BasketView,
    pub transaction_id: String,
}

/// Display the order confirmation page.
///
/// The basket is popped from the session, so the confirmation - and its
/// purchase event - renders exactly once. Without a non-empty basket there
/// is nothing to confirm and the visitor is sent home.
#[instrument(skip(state, session))]
pub async fn thank_you(State(state): State<AppState>, session: Session) -> Result<Response> {
    let Some(basket) = models::session::take_basket(&session).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    if basket.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    let template = OrderConfirmationTemplate {
        ctx: PageContext::load(&state, &session).await,
        basket: BasketView::from_basket(&basket, &state.config().currency),
        transaction_id: Uuid::new_v4().to_string(),
    };
    Ok(template.into_response())
}

//! Basket route handlers.
//!
//! The storefront JS posts JSON mutations to `POST /basket`; the page at
//! `GET /basket` redisplays the session's basket without consulting the
//! catalog - each line carries its own product data.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tagshop_core::{Basket, Currency, Operation};

use crate::error::Result;
use crate::filters;
use crate::models;
use crate::routes::PageContext;
use crate::state::AppState;

/// Basket line display data for templates.
#[derive(Clone)]
pub struct BasketLineView {
    pub sku: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub unit_amount: String,
    pub line_total: String,
    pub image: Option<String>,
}

/// Basket display data for templates.
#[derive(Clone)]
pub struct BasketView {
    pub lines: Vec<BasketLineView>,
    pub total: String,
    pub total_amount: String,
    pub item_count: u32,
}

impl BasketView {
    /// Build the display form of a basket, lines sorted by SKU.
    #[must_use]
    pub fn from_basket(basket: &Basket, currency: &Currency) -> Self {
        let lines = basket
            .sorted_lines()
            .into_iter()
            .map(|line| BasketLineView {
                sku: line.product().sku().to_owned(),
                name: line.product().name().to_owned(),
                quantity: line.quantity(),
                unit_price: line.product().formatted_price(&currency.symbol),
                unit_amount: format!("{:.2}", line.product().price()),
                line_total: line.formatted_total(&currency.symbol),
                image: line.product().image().map(str::to_owned),
            })
            .collect();

        Self {
            lines,
            total: basket.formatted_total(&currency.symbol),
            total_amount: format!("{:.2}", basket.total_price()),
            item_count: basket.total_quantity(),
        }
    }

    /// Returns true if the basket has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Basket mutation payload.
///
/// The operation defaults to increase and the delta to 1, so the common
/// "add to basket" button posts nothing but a SKU.
#[derive(Debug, Deserialize)]
pub struct UpdateBasketRequest {
    pub sku: String,
    #[serde(default)]
    pub operation: Operation,
    #[serde(default = "default_change_quantity")]
    pub change_quantity: u32,
}

const fn default_change_quantity() -> u32 {
    1
}

/// Basket page template.
#[derive(Template, WebTemplate)]
#[template(path = "basket/show.html")]
pub struct BasketShowTemplate {
    pub ctx: PageContext,
    pub basket: BasketView,
}

/// Display the basket page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<BasketShowTemplate> {
    let basket = models::session::load_basket(&session).await?;

    Ok(BasketShowTemplate {
        ctx: PageContext::load(&state, &session).await,
        basket: BasketView::from_basket(&basket, &state.config().currency),
    })
}

/// Apply a quantity change to the session's basket.
///
/// An unknown SKU is silently ignored: the basket is saved back unchanged
/// and the response is still 204. The storefront treats mutation as
/// fire-and-forget.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdateBasketRequest>,
) -> Result<StatusCode> {
    let mut basket = models::session::load_basket(&session).await?;
    basket.apply(
        state.catalog(),
        &request.sku,
        request.operation,
        request.change_quantity,
    );
    models::session::save_basket(&session, &basket).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Drop all lines from the session's basket.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<StatusCode> {
    models::session::clear_basket(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Home page
//! GET  /health         - Health check
//!
//! # Catalog
//! GET  /products       - Product listing
//! GET  /product/{sku}  - Product detail
//!
//! # Basket
//! GET  /basket         - Basket page
//! POST /basket         - Mutate the basket (JSON payload)
//! POST /clear-basket   - Drop all basket lines
//!
//! # Checkout
//! GET  /thank-you      - Order confirmation (pops the basket)
//!
//! # Simulated auth
//! GET  /login          - Login form
//! POST /login          - Store submitted identity, redirect to `next`
//! GET  /logout         - Forget identity, redirect to `next`
//! ```

pub mod auth;
pub mod basket;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::config::TagManagerConfig;
use crate::models;
use crate::state::AppState;
use tagshop_core::{Currency, User};

/// Template context shared by every page.
///
/// Mirrors what the original site injects globally: the GTM container, the
/// display currency, and the logged-in user (if any) for the top bar.
pub struct PageContext {
    pub tags: TagManagerConfig,
    pub currency: Currency,
    pub user: Option<User>,
}

impl PageContext {
    /// Assemble the shared context for one request.
    pub async fn load(state: &AppState, session: &Session) -> Self {
        Self {
            tags: state.config().tags.clone(),
            currency: state.config().currency.clone(),
            user: models::session::current_user(session).await,
        }
    }
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/products", get(products::index))
        .route("/product/{sku}", get(products::show))
        .route("/basket", get(basket::show).post(basket::update))
        .route("/clear-basket", post(basket::clear))
        .route("/thank-you", get(checkout::thank_you))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
}

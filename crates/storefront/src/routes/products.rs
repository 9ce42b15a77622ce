//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tower_sessions::Session;
use tracing::instrument;

use tagshop_core::{Currency, Product};

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::PageContext;
use crate::state::AppState;

/// Product display data for templates.
///
/// Prices come pre-formatted: `price` with the currency symbol for visible
/// text, `price_amount` as a bare two-decimal string for dataLayer events.
#[derive(Clone)]
pub struct ProductView {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub price_amount: String,
    pub image: Option<String>,
}

impl ProductView {
    /// Build the display form of a product.
    #[must_use]
    pub fn new(product: &Product, currency: &Currency) -> Self {
        Self {
            sku: product.sku().to_owned(),
            name: product.name().to_owned(),
            description: product.description().to_owned(),
            price: product.formatted_price(&currency.symbol),
            price_amount: format!("{:.2}", product.price()),
            image: product.image().map(str::to_owned),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub ctx: PageContext,
    pub products: Vec<ProductView>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub ctx: PageContext,
    pub product: ProductView,
}

/// Display the product listing page.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> ProductsIndexTemplate {
    let currency = &state.config().currency;
    let products = state
        .catalog()
        .products()
        .iter()
        .map(|product| ProductView::new(product, currency))
        .collect();

    ProductsIndexTemplate {
        ctx: PageContext::load(&state, &session).await,
        products,
    }
}

/// Display the product detail page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(sku): Path<String>,
) -> Result<ProductShowTemplate> {
    let product = state
        .catalog()
        .get(&sku)
        .ok_or_else(|| AppError::NotFound(format!("no product with SKU {sku}")))?;

    Ok(ProductShowTemplate {
        ctx: PageContext::load(&state, &session).await,
        product: ProductView::new(product, &state.config().currency),
    })
}

//! Typed access to session-stored state.
//!
//! The session is the only storage this demo has: the basket and the
//! simulated login identity live in the signed session cookie between
//! requests. These helpers are the deserialize/validate boundary - handlers
//! never unpack raw session values themselves.

use tagshop_core::{Basket, User};
use tower_sessions::Session;

use crate::error::Result;

/// Session keys for storefront state.
pub mod session_keys {
    /// Key for the serialized basket.
    pub const BASKET: &str = "basket";

    /// Key for the simulated login identity.
    pub const USER: &str = "user";
}

/// Load the session's basket, or an empty one if none is stored.
///
/// # Errors
///
/// Returns an error if the session store fails or the stored value does not
/// deserialize into a valid basket.
pub async fn load_basket(session: &Session) -> Result<Basket> {
    Ok(session
        .get::<Basket>(session_keys::BASKET)
        .await?
        .unwrap_or_default())
}

/// Serialize the basket back into the session.
///
/// Called after every mutation; the session layer writes the cookie out when
/// the response is built.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_basket(session: &Session, basket: &Basket) -> Result<()> {
    session.insert(session_keys::BASKET, basket).await?;
    Ok(())
}

/// Remove and return the session's basket.
///
/// The order confirmation page uses this: the basket renders exactly once
/// and is gone afterwards.
///
/// # Errors
///
/// Returns an error if the session store fails or the stored value does not
/// deserialize into a valid basket.
pub async fn take_basket(session: &Session) -> Result<Option<Basket>> {
    Ok(session.remove::<Basket>(session_keys::BASKET).await?)
}

/// Drop the session's basket, if any.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn clear_basket(session: &Session) -> Result<()> {
    session.remove_value(session_keys::BASKET).await?;
    Ok(())
}

/// Get the logged-in user from the session.
pub async fn current_user(session: &Session) -> Option<User> {
    session.get::<User>(session_keys::USER).await.ok().flatten()
}

/// Store the logged-in user in the session.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn set_current_user(session: &Session, user: &User) -> Result<()> {
    session.insert(session_keys::USER, user).await?;
    Ok(())
}

/// Remove the logged-in user from the session, if any.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn clear_current_user(session: &Session) -> Result<()> {
    session.remove_value(session_keys::USER).await?;
    Ok(())
}

//! Client-side storefront state.
//!
//! These are plain values with an immutable-update discipline: every
//! operation returns a new value and leaves the receiver untouched, so a
//! snapshot handed to a renderer never changes underneath it.
//!
//! - `CartState`, `CartAction`, `cart_totals`
//! - `Favorites`
//! - `Preferences`, `apply_preferences`

pub mod cart;
pub mod favorites;
pub mod preferences;

pub use cart::{cart_totals, CartAction, CartItem, CartState, CartTotals};
pub use favorites::Favorites;
pub use preferences::{apply_preferences, Preferences, SortType, ViewType};

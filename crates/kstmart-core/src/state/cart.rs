use serde::{Deserialize, Serialize};

/// A line in the shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct CartItem {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub qty: u32,
}

/// Cart contents, keyed by product id and kept in insertion order.
///
/// Every operation returns a new `CartState`; the receiver is never modified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartItem>,
}

/// Cart mutations, for callers that dispatch actions instead of calling methods.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Upsert(CartItem),
    Remove(i64),
    Clear,
    Increment(i64),
    Decrement(i64),
}

/// Aggregate of the cart: item count and price total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CartTotals {
    pub count: u64,
    pub sum: f64,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert `item`, or replace the line with the same id in place.
    /// A zero quantity is stored as 1.
    pub fn upsert(&self, item: CartItem) -> Self {
        let item = CartItem {
            qty: item.qty.max(1),
            ..item
        };
        let mut items = self.items.clone();
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        Self { items }
    }

    pub fn remove(&self, id: i64) -> Self {
        Self {
            items: self.items.iter().filter(|i| i.id != id).cloned().collect(),
        }
    }

    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Add one to the quantity of `id`. No-op when absent.
    pub fn increment(&self, id: i64) -> Self {
        self.map_qty(id, |qty| qty.saturating_add(1))
    }

    /// Take one from the quantity of `id`, never going below 1.
    pub fn decrement(&self, id: i64) -> Self {
        self.map_qty(id, |qty| if qty > 1 { qty - 1 } else { qty })
    }

    pub fn apply(&self, action: CartAction) -> Self {
        match action {
            CartAction::Upsert(item) => self.upsert(item),
            CartAction::Remove(id) => self.remove(id),
            CartAction::Clear => self.clear(),
            CartAction::Increment(id) => self.increment(id),
            CartAction::Decrement(id) => self.decrement(id),
        }
    }

    fn map_qty(&self, id: i64, f: impl Fn(u32) -> u32) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|i| {
                    if i.id == id {
                        CartItem { qty: f(i.qty), ..i.clone() }
                    } else {
                        i.clone()
                    }
                })
                .collect(),
        }
    }
}

/// Total quantity and total price of the cart.
pub fn cart_totals(cart: &CartState) -> CartTotals {
    cart.items().iter().fold(CartTotals::default(), |acc, item| CartTotals {
        count: acc.count.saturating_add(u64::from(item.qty)),
        sum: acc.sum + f64::from(item.qty) * item.price,
    })
}

use serde::{Deserialize, Serialize};

/// Favorited product ids, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: Vec<i64>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Remove `id` if present, otherwise append it.
    pub fn toggle(&self, id: i64) -> Self {
        let ids = if self.contains(id) {
            self.ids.iter().copied().filter(|&i| i != id).collect()
        } else {
            let mut ids = self.ids.clone();
            ids.push(id);
            ids
        };
        Self { ids }
    }

    pub fn clear(&self) -> Self {
        Self::default()
    }
}

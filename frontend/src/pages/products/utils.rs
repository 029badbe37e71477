use crate::api::{Product, RecordId};

pub const BEST_SELLER_THRESHOLD: u64 = 500;

pub fn is_best_seller(product: &Product) -> bool {
    product.sales > BEST_SELLER_THRESHOLD
}

/// Page-local selection of product ids, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<RecordId>,
}

impl Cart {
    /// Adds the id when absent, removes it when present.
    pub fn toggle(&mut self, id: &RecordId) {
        if let Some(pos) = self.items.iter().position(|item| item == id) {
            self.items.remove(pos);
        } else {
            self.items.push(id.clone());
        }
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.items.contains(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn category_icon(category: &str) -> &'static str {
    if category.eq_ignore_ascii_case("subscription") {
        "fa-layer-group"
    } else {
        "fa-box"
    }
}

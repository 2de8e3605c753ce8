//! The session cart: ordered, append-only, in memory only.

use crate::product::Product;

/// A cart entry is a full product snapshot taken at add time. A later
/// catalog refresh does not rewrite entries already in the cart.
pub type CartEntry = Product;

/// Ordered, append-only collection of cart entries.
///
/// Adding is the only mutation. Duplicates are allowed and meaningful:
/// adding the same product twice yields two entries. Insertion order is
/// preserved and is what the cart panel renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product snapshot. Never fails, never deduplicates.
    pub fn add(&mut self, product: Product) {
        self.entries.push(product);
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{AssetRef, ProductId};
    use chrono::Utc;

    fn test_product(name: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(format!("prod-{name}")),
            doc_type: "products".to_string(),
            name: name.to_string(),
            description: String::new(),
            category: "tshirts".to_string(),
            price,
            discount_percent: 0.0,
            is_new: false,
            colors: vec![],
            sizes: vec![],
            image: AssetRef::new("image-aaaa-100x100-png"),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            rev: "rev-1".to_string(),
        }
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert!(cart.entries().is_empty());
    }

    #[test]
    fn add_appends_in_order() {
        let mut cart = Cart::new();
        cart.add(test_product("alpha", 10.0));
        cart.add(test_product("beta", 20.0));
        cart.add(test_product("gamma", 30.0));

        let names: Vec<&str> = cart.entries().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn duplicate_adds_keep_both_entries() {
        let mut cart = Cart::new();
        let product = test_product("alpha", 10.0);
        cart.add(product.clone());
        cart.add(product);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.entries()[0], cart.entries()[1]);
    }

    #[test]
    fn entries_snapshot_survives_later_changes_to_source() {
        let mut cart = Cart::new();
        let mut product = test_product("alpha", 10.0);
        cart.add(product.clone());

        // Mutating the caller's copy must not reach into the cart.
        product.price = 99.0;
        assert_eq!(cart.entries()[0].price, 10.0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: after N adds the cart holds exactly N entries,
            /// in add order.
            #[test]
            fn one_entry_per_add_in_order(
                names in proptest::collection::vec("[a-z]{1,12}", 0..40)
            ) {
                let mut cart = Cart::new();
                for name in &names {
                    cart.add(test_product(name, 5.0));
                }

                prop_assert_eq!(cart.len(), names.len());
                prop_assert_eq!(cart.is_empty(), names.is_empty());

                let ordered: Vec<&str> =
                    cart.entries().iter().map(|p| p.name.as_str()).collect();
                let expected: Vec<&str> =
                    names.iter().map(String::as_str).collect();
                prop_assert_eq!(ordered, expected);
            }
        }
    }
}

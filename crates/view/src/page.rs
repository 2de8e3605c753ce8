use vitrine_catalog::{Cart, Product, ProductId};

/// Lifecycle phase of a page instance.
///
/// A page mounts in `Loading` and moves to `Loaded` exactly once, when the
/// automatic fetch settles, whether or not it brought records back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
}

impl Phase {
    /// Marker value rendered into the page markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Loading => "loading",
            Phase::Loaded => "loaded",
        }
    }
}

/// Messages the page store reduces.
#[derive(Debug, Clone, PartialEq)]
pub enum PageMsg {
    /// The automatic fetch resolved; replace the catalog wholesale.
    ProductsLoaded(Vec<Product>),
    /// The automatic fetch failed. The error was already logged at the
    /// fetch boundary; the page keeps its empty catalog.
    FetchFailed,
    /// A card's add button was pressed. Carries a full product snapshot.
    AddToCart(Product),
}

/// User-visible acknowledgment produced by a cart add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
}

impl Notice {
    fn added_to_cart(name: &str) -> Self {
        Self {
            message: format!("{name} has been added to your cart!"),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// State of one mounted product page: the displayed catalog plus the
/// session cart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsPage {
    phase: Phase,
    products: Vec<Product>,
    cart: Cart,
}

impl ProductsPage {
    /// A freshly mounted page: loading, nothing displayed, empty cart.
    pub fn mounted() -> Self {
        Self {
            phase: Phase::Loading,
            products: Vec::new(),
            cart: Cart::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Products currently on display, in fetch order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Look up a displayed product by its identifier.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Reduce one message into the state.
    ///
    /// Returns the acknowledgment the message produced, if any. Only cart
    /// adds produce one; fetch completion is silent either way.
    pub fn update(&mut self, msg: PageMsg) -> Option<Notice> {
        match msg {
            PageMsg::ProductsLoaded(products) => {
                self.products = products;
                self.phase = Phase::Loaded;
                None
            }
            PageMsg::FetchFailed => {
                self.phase = Phase::Loaded;
                None
            }
            PageMsg::AddToCart(product) => {
                let notice = Notice::added_to_cart(&product.name);
                self.cart.add(product);
                Some(notice)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vitrine_catalog::AssetRef;

    fn test_product(name: &str) -> Product {
        Product {
            id: ProductId::new(format!("prod-{name}")),
            doc_type: "products".to_string(),
            name: name.to_string(),
            description: "A plain description.".to_string(),
            category: "tshirts".to_string(),
            price: 25.0,
            discount_percent: 0.0,
            is_new: false,
            colors: vec!["Black".to_string()],
            sizes: vec!["M".to_string()],
            image: AssetRef::new("image-aaaa-100x100-png"),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            rev: "rev-1".to_string(),
        }
    }

    #[test]
    fn mounted_page_is_loading_and_empty() {
        let page = ProductsPage::mounted();
        assert_eq!(page.phase(), Phase::Loading);
        assert!(page.products().is_empty());
        assert!(page.cart().is_empty());
    }

    #[test]
    fn products_loaded_completes_loading_and_keeps_order() {
        let mut page = ProductsPage::mounted();
        let notice = page.update(PageMsg::ProductsLoaded(vec![
            test_product("alpha"),
            test_product("beta"),
        ]));

        assert!(notice.is_none());
        assert_eq!(page.phase(), Phase::Loaded);
        let names: Vec<&str> = page.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn fetch_failure_completes_loading_with_empty_catalog() {
        let mut page = ProductsPage::mounted();
        let notice = page.update(PageMsg::FetchFailed);

        assert!(notice.is_none());
        assert_eq!(page.phase(), Phase::Loaded);
        assert!(page.products().is_empty());
        assert!(page.cart().is_empty());
    }

    #[test]
    fn add_to_cart_acknowledges_by_name() {
        let mut page = ProductsPage::mounted();
        page.update(PageMsg::ProductsLoaded(vec![test_product("Trail Jacket")]));

        let notice = page
            .update(PageMsg::AddToCart(test_product("Trail Jacket")))
            .expect("add produced no notice");

        assert_eq!(notice.message(), "Trail Jacket has been added to your cart!");
        assert_eq!(page.cart().len(), 1);
    }

    #[test]
    fn repeated_adds_accumulate_entries_and_notices() {
        let mut page = ProductsPage::mounted();
        page.update(PageMsg::ProductsLoaded(vec![test_product("alpha")]));

        for expected_len in 1..=3 {
            let notice = page.update(PageMsg::AddToCart(test_product("alpha")));
            assert!(notice.is_some());
            assert_eq!(page.cart().len(), expected_len);
        }
    }

    #[test]
    fn adding_leaves_the_displayed_catalog_alone() {
        let mut page = ProductsPage::mounted();
        page.update(PageMsg::ProductsLoaded(vec![
            test_product("alpha"),
            test_product("beta"),
        ]));

        page.update(PageMsg::AddToCart(test_product("alpha")));
        assert_eq!(page.products().len(), 2);
    }

    #[test]
    fn lookup_finds_displayed_products_only() {
        let mut page = ProductsPage::mounted();
        page.update(PageMsg::ProductsLoaded(vec![test_product("alpha")]));

        assert!(page.product(&ProductId::new("prod-alpha")).is_some());
        assert!(page.product(&ProductId::new("prod-zulu")).is_none());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every add is acknowledged with the product's name
            /// and grows the cart by exactly one entry.
            #[test]
            fn every_add_is_acknowledged(
                names in proptest::collection::vec("[A-Za-z ]{1,20}", 1..30)
            ) {
                let mut page = ProductsPage::mounted();
                page.update(PageMsg::ProductsLoaded(vec![]));

                for (i, name) in names.iter().enumerate() {
                    let notice = page
                        .update(PageMsg::AddToCart(test_product(name)))
                        .expect("add produced no notice");
                    let expected = format!("{name} has been added to your cart!");
                    prop_assert_eq!(notice.message(), expected.as_str());
                    prop_assert_eq!(page.cart().len(), i + 1);
                }
            }

            /// Property: the loading phase transition is monotonic across
            /// any message sequence once the fetch settled.
            #[test]
            fn loaded_phase_is_sticky(add_count in 0usize..20) {
                let mut page = ProductsPage::mounted();
                prop_assert_eq!(page.phase(), Phase::Loading);

                page.update(PageMsg::ProductsLoaded(vec![test_product("alpha")]));
                prop_assert_eq!(page.phase(), Phase::Loaded);

                for _ in 0..add_count {
                    page.update(PageMsg::AddToCart(test_product("alpha")));
                    prop_assert_eq!(page.phase(), Phase::Loaded);
                }
            }
        }
    }
}

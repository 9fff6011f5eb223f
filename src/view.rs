// src/view.rs
//
// View layer over the loaded products.
//
// - ViewState: what the user asked for (search text, size chips, sort mode).
// - recompute(): pure (products, state) → visible list.
// - Catalog: owns the canonical product list, the ViewState and the cached
//   visible list. Every mutator recomputes; the product list itself is only
//   ever replaced wholesale by a successful load.

use crate::core::sizes::distinct_sizes;
use crate::core::sizes_match;
use crate::feed::Product;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Feed order
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Default, SortMode::PriceAsc, SortMode::PriceDesc];

    pub fn key(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    /// Insertion order, unique by exact text (chip display order)
    selected_sizes: Vec<String>,
    pub sort_mode: SortMode,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_sizes(&self) -> &[String] {
        &self.selected_sizes
    }

    pub fn is_size_selected(&self, size: &str) -> bool {
        self.selected_sizes.iter().any(|s| s == size)
    }

    /// Add if absent, remove if present. Returns whether the size is now selected.
    pub fn toggle_size(&mut self, size: &str) -> bool {
        if self.remove_size(size) {
            false
        } else {
            self.selected_sizes.push(s!(size));
            true
        }
    }

    /// Returns whether anything was removed.
    pub fn remove_size(&mut self, size: &str) -> bool {
        let before = self.selected_sizes.len();
        self.selected_sizes.retain(|s| s != size);
        self.selected_sizes.len() != before
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// `needle` must already be lower-case.
pub fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle) || product.sku.to_lowercase().contains(needle)
}

/// No selection matches everything; otherwise any selected size against any stocked size.
pub fn matches_sizes(product: &Product, selected: &[String]) -> bool {
    selected.is_empty()
        || selected
            .iter()
            .any(|want| product.sizes.iter().any(|e| sizes_match(want, &e.size)))
}

/// Stable: equal prices keep feed order.
pub fn sort_products(products: &mut [Product], mode: SortMode) {
    match mode {
        SortMode::Default => {}
        SortMode::PriceAsc => products.sort_by(|a, b| a.price_value().total_cmp(&b.price_value())),
        SortMode::PriceDesc => products.sort_by(|a, b| b.price_value().total_cmp(&a.price_value())),
    }
}

/// The visible list for `view` over `all`. Never mutates `all`.
pub fn recompute(all: &[Product], view: &ViewState) -> Vec<Product> {
    let needle = view.search_term.to_lowercase();
    let mut out: Vec<Product> = all
        .iter()
        .filter(|p| matches_search(p, &needle) && matches_sizes(p, &view.selected_sizes))
        .cloned()
        .collect();
    sort_products(&mut out, view.sort_mode);
    out
}

/// Single owner of products + view state for one front end.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    all: Vec<Product>,
    view: ViewState,
    visible: Vec<Product>,
    size_options: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let mut catalog = Self::default();
        catalog.replace_products(products);
        catalog
    }

    pub fn all(&self) -> &[Product] {
        &self.all
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// Distinct stocked sizes for the size filter panel.
    pub fn size_options(&self) -> &[String] {
        &self.size_options
    }

    pub fn selected_sizes(&self) -> &[String] {
        self.view.selected_sizes()
    }

    /// Fresh load: drop the cached view and rebuild it against the new list.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.all = products;
        self.size_options = distinct_sizes(
            self.all
                .iter()
                .flat_map(|p| p.sizes.iter().map(|e| e.size.as_str())),
        );
        self.refresh();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
        self.refresh();
    }

    pub fn toggle_size(&mut self, size: &str) {
        let on = self.view.toggle_size(size);
        logd!("View: size {} → {}", size, if on { "on" } else { "off" });
        self.refresh();
    }

    pub fn remove_size(&mut self, size: &str) {
        if self.view.remove_size(size) {
            self.refresh();
        }
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.view.sort_mode = mode;
        self.refresh();
    }

    /// Back to no search, no sizes, feed order.
    pub fn reset(&mut self) {
        self.view = ViewState::default();
        self.refresh();
    }

    /// Replace the whole view state at once (CLI).
    pub fn apply(&mut self, view: ViewState) {
        self.view = view;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = recompute(&self.all, &self.view);
        logd!(
            "View: {} of {} product(s) visible (sort={})",
            self.visible.len(),
            self.all.len(),
            self.view.sort_mode.key()
        );
    }
}

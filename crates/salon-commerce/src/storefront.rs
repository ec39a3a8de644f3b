//! Storefront session.
//!
//! Owns the catalog, the facet index, the cart and the checkout form for one
//! shopping session. Every user action is a method call that runs to
//! completion; the catalog load is the only asynchronous step and happens
//! outside, before `finish_load` is called.

use crate::cart::{AddedLine, CartStore};
use crate::catalog::{CatalogStore, LoadReport, ParsedCatalog, Product};
use crate::checkout::{CheckoutFlow, CustomerFields, FormState, Order};
use crate::error::{CheckoutError, CommerceError, LoadError, SelectionError};
use crate::ids::{CartLineId, ProductId};
use crate::money::Currency;
use crate::search::{FilterIndex, FilterSelection};

/// Where the catalog load stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// The fetch has not completed yet.
    Loading,
    /// The catalog is in place.
    Ready(LoadReport),
    /// The load failed; the catalog stays empty for the session.
    Failed(LoadError),
}

/// A message for the shopper after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A size was added to the cart.
    Added {
        cart_id: CartLineId,
        product_name: String,
        size: String,
        quantity: u32,
    },
    /// An order was submitted.
    OrderPlaced {
        customer_name: Option<String>,
        total: u64,
    },
    /// The action was refused.
    Rejected(CommerceError),
}

impl From<&AddedLine> for Notice {
    fn from(added: &AddedLine) -> Self {
        Notice::Added {
            cart_id: added.cart_id.clone(),
            product_name: added.product_name.clone(),
            size: added.size.clone(),
            quantity: added.quantity,
        }
    }
}

impl From<&Order> for Notice {
    fn from(order: &Order) -> Self {
        Notice::OrderPlaced {
            customer_name: order.customer_name().map(str::to_string),
            total: order.total.amount,
        }
    }
}

impl From<CommerceError> for Notice {
    fn from(err: CommerceError) -> Self {
        Notice::Rejected(err)
    }
}

impl From<SelectionError> for Notice {
    fn from(err: SelectionError) -> Self {
        Notice::Rejected(err.into())
    }
}

impl From<CheckoutError> for Notice {
    fn from(err: CheckoutError) -> Self {
        Notice::Rejected(err.into())
    }
}

/// One shopping session.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: CatalogStore,
    index: FilterIndex,
    cart: CartStore,
    checkout: CheckoutFlow,
    status: CatalogStatus,
    currency: Currency,
}

impl Storefront {
    /// Create a session waiting for its catalog.
    pub fn new(currency: Currency) -> Self {
        Self {
            catalog: CatalogStore::default(),
            index: FilterIndex::default(),
            cart: CartStore::new(),
            checkout: CheckoutFlow::new(),
            status: CatalogStatus::Loading,
            currency,
        }
    }

    /// Create a session from an already parsed catalog.
    pub fn with_catalog(parsed: ParsedCatalog, currency: Currency) -> Self {
        let mut shop = Self::new(currency);
        shop.finish_load(Ok(parsed));
        shop
    }

    /// Install the outcome of the catalog load.
    ///
    /// On success the catalog and facet index are built. On failure the
    /// catalog stays empty. Only the first call has any effect; later calls
    /// return `false`.
    pub fn finish_load(&mut self, result: Result<ParsedCatalog, LoadError>) -> bool {
        if self.status != CatalogStatus::Loading {
            tracing::warn!("catalog already loaded, ignoring second load result");
            return false;
        }

        match result {
            Ok(parsed) => {
                self.catalog = CatalogStore::new(parsed.products);
                self.index = FilterIndex::build(self.catalog.products());
                tracing::info!(
                    products = self.catalog.len(),
                    skipped = parsed.report.skipped.len(),
                    "catalog loaded"
                );
                self.status = CatalogStatus::Ready(parsed.report);
            }
            Err(err) => {
                tracing::error!(error = %err, "catalog load failed");
                self.status = CatalogStatus::Failed(err);
            }
        }
        true
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn filter_index(&self) -> &FilterIndex {
        &self.index
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn form_state(&self) -> FormState {
        self.checkout.state()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// Products matching the selection, in catalog order.
    pub fn apply_filters(&self, selection: &FilterSelection) -> Vec<&Product> {
        selection.apply(self.catalog.products())
    }

    /// Clear every filter: the whole catalog.
    pub fn reset_filters(&self) -> Vec<&Product> {
        self.apply_filters(&FilterSelection::any())
    }

    /// Add one unit of a product in the given size to the cart.
    pub fn select_size(
        &mut self,
        product_id: &ProductId,
        size: Option<&str>,
    ) -> Result<AddedLine, SelectionError> {
        self.cart.select_size(&self.catalog, product_id, size)
    }

    /// Open the order form. Refused for an empty cart.
    pub fn show_form(&mut self) -> Result<(), CheckoutError> {
        self.checkout.show_form(&self.cart)
    }

    pub fn hide_form(&mut self) {
        self.checkout.hide_form();
    }

    /// Submit the order form, emptying the cart.
    pub fn submit_order(&mut self, customer: CustomerFields) -> Result<Order, CheckoutError> {
        self.checkout.submit(customer, &mut self.cart, self.currency)
    }
}

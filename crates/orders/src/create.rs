use std::collections::HashSet;

use thiserror::Error;

use orderdesk_core::RepositoryError;
use orderdesk_customers::{CustomerId, CustomerLookup};
use orderdesk_products::{OrderedProduct, ProductCatalog, ProductId};

use crate::order::{NewOrder, Order, OrderLineItem, OrderStore};

/// Order creation failure.
///
/// Every variant is terminal; nothing here is retried and no partial order
/// survives a failed validation. Collaborator failures pass through
/// unmodified.
#[derive(Debug, Error)]
pub enum CreateOrderError {
    /// The customer identifier does not resolve.
    #[error("Customer doesn't exist.")]
    InvalidCustomer,

    /// One or more requested product identifiers do not exist in the catalog.
    #[error("Invalid product cannot be added to your order.")]
    InvalidProduct,

    /// A requested quantity exceeds the stock available at validation time.
    #[error("Not enough stock to fulfill your order")]
    InsufficientStock,

    /// Requested quantities must be positive.
    #[error("quantity must be positive for product {0}")]
    QuantityNotPositive(ProductId),

    /// A product may appear at most once per request.
    #[error("duplicate product in request: {0}")]
    DuplicateProduct(ProductId),

    /// The catalog resolved a product during validation but produced no
    /// snapshot for it during assembly. Unreachable through the public
    /// contract once validation has passed; a line item is never priced
    /// without a snapshot.
    #[error("no catalog snapshot for product {0}")]
    PriceSnapshotMissing(ProductId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// The "create order" use case.
///
/// Collaborators are constructor-injected contracts; this type holds no state
/// of its own and performs no IO beyond the collaborator calls.
pub struct CreateOrder<C, P, O> {
    customers: C,
    catalog: P,
    orders: O,
}

impl<C, P, O> CreateOrder<C, P, O>
where
    C: CustomerLookup,
    P: ProductCatalog,
    O: OrderStore,
{
    pub fn new(customers: C, catalog: P, orders: O) -> Self {
        Self {
            customers,
            catalog,
            orders,
        }
    }

    /// Create an order for `customer_id` covering `products`.
    ///
    /// Control flow is strictly linear: validate the request, resolve the
    /// customer, resolve the products, check existence and stock, assemble
    /// priced line items, persist, decrement stock. No side effects occur
    /// unless every check passes. The order is persisted before stock is
    /// decremented; there is no compensation if the decrement fails
    /// afterwards.
    #[tracing::instrument(
        skip(self, products),
        fields(customer_id = %customer_id, product_count = products.len())
    )]
    pub async fn execute(
        &self,
        customer_id: CustomerId,
        products: Vec<OrderedProduct>,
    ) -> Result<Order, CreateOrderError> {
        validate_request(&products)?;

        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or(CreateOrderError::InvalidCustomer)?;

        let existing = self.catalog.find_all_by_id(&products).await?;

        if existing.len() < products.len() {
            return Err(CreateOrderError::InvalidProduct);
        }

        // First violation wins, in catalog resolution order.
        for product in &existing {
            if let Some(requested) = products.iter().find(|p| p.id == product.id) {
                if requested.quantity > product.quantity {
                    return Err(CreateOrderError::InsufficientStock);
                }
            }
        }

        let line_items = products
            .iter()
            .map(|requested| {
                let snapshot = existing
                    .iter()
                    .find(|p| p.id == requested.id)
                    .ok_or(CreateOrderError::PriceSnapshotMissing(requested.id))?;

                Ok(OrderLineItem {
                    product_id: requested.id,
                    unit_price: snapshot.price,
                    quantity: requested.quantity,
                })
            })
            .collect::<Result<Vec<_>, CreateOrderError>>()?;

        let order = self
            .orders
            .create(NewOrder {
                customer,
                line_items,
            })
            .await?;

        tracing::debug!(order_id = %order.id, "order persisted, decrementing stock");

        self.catalog.update_quantity(&products).await?;

        Ok(order)
    }
}

/// Reject requests the collaborator contracts assume never reach them:
/// non-positive quantities and repeated product identifiers.
fn validate_request(products: &[OrderedProduct]) -> Result<(), CreateOrderError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if product.quantity <= 0 {
            return Err(CreateOrderError::QuantityNotPositive(product.id));
        }
        if !seen.insert(product.id) {
            return Err(CreateOrderError::DuplicateProduct(product.id));
        }
    }
    Ok(())
}

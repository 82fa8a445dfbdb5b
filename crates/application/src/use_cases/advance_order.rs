//! Owner order-workflow use case.

use pindrop_domain::OrderStatus;
use thiserror::Error;

use crate::api::PindropApi;
use crate::error::ApiError;

/// Errors from advancing an order.
#[derive(Debug, Error)]
pub enum AdvanceOrderError {
    /// The owner may not move the order to the requested status.
    #[error("cannot move order {order_id} from {from} to {to}")]
    InvalidTransition {
        /// Order id.
        order_id: i64,
        /// Current status.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
    },

    /// The order was not found in the owner's order list.
    #[error("order {0} not found")]
    NotFound(i64),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Input for advancing an order.
#[derive(Debug, Clone)]
pub struct AdvanceOrderInput {
    /// Order to update.
    pub order_id: i64,
    /// Requested status.
    pub next: OrderStatus,
}

/// Use case for applying one step of the owner workflow.
pub struct AdvanceOrder<'a> {
    api: &'a PindropApi,
}

impl<'a> AdvanceOrder<'a> {
    /// Creates a new `AdvanceOrder` use case.
    #[must_use]
    pub const fn new(api: &'a PindropApi) -> Self {
        Self { api }
    }

    /// Looks up the order's current status and applies the transition if
    /// the owner workflow allows it. Returns the status the order left.
    ///
    /// # Errors
    ///
    /// - [`AdvanceOrderError::NotFound`] if the order is not listed
    /// - [`AdvanceOrderError::InvalidTransition`] if the step is not allowed
    /// - [`AdvanceOrderError::Api`] if a call fails
    pub async fn execute(&self, input: AdvanceOrderInput) -> Result<OrderStatus, AdvanceOrderError> {
        let owner = self.api.owner();
        let current = owner
            .orders()
            .await?
            .into_iter()
            .find(|o| o.id == input.order_id)
            .map(|o| o.order_status)
            .ok_or(AdvanceOrderError::NotFound(input.order_id))?;

        if !current.owner_can_transition_to(&input.next) {
            return Err(AdvanceOrderError::InvalidTransition {
                order_id: input.order_id,
                from: current,
                to: input.next,
            });
        }

        owner
            .update_order_status(input.order_id, &input.next)
            .await?;
        Ok(current)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::testing::api_as;
    use pindrop_domain::Role;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn orders(status: &str) -> serde_json::Value {
        json!([{"id": 5, "total_amount": 120.0, "order_status": status}])
    }

    #[tokio::test]
    async fn test_allowed_step_is_sent() {
        let (transport, api) = api_as(Some(Role::Owner));
        transport.respond(200, orders("Placed"));

        let from = AdvanceOrder::new(&api)
            .execute(AdvanceOrderInput {
                order_id: 5,
                next: OrderStatus::Accepted,
            })
            .await
            .unwrap();

        assert_eq!(from, OrderStatus::Placed);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path, "/owner/orders/5/status");
        assert_eq!(sent.body, Some(json!({"status": "Accepted"})));
    }

    #[tokio::test]
    async fn test_skipping_a_step_is_rejected() {
        let (transport, api) = api_as(Some(Role::Owner));
        transport.respond(200, orders("Placed"));

        let error = AdvanceOrder::new(&api)
            .execute(AdvanceOrderInput {
                order_id: 5,
                next: OrderStatus::OutForDelivery,
            })
            .await
            .unwrap_err();

        assert!(matches!(error, AdvanceOrderError::InvalidTransition { .. }));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_order() {
        let (transport, api) = api_as(Some(Role::Owner));
        transport.respond(200, json!([]));

        let error = AdvanceOrder::new(&api)
            .execute(AdvanceOrderInput {
                order_id: 99,
                next: OrderStatus::Accepted,
            })
            .await
            .unwrap_err();

        assert!(matches!(error, AdvanceOrderError::NotFound(99)));
    }
}

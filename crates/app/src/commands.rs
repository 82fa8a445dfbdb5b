//! Command dispatch.
//!
//! Every command runs as the page it stands in for: the route guard decides
//! whether it may run, API failures go through the session-expiry boundary,
//! and user-facing messages prefer the server's detail over the page's own
//! fallback text.

use std::sync::Arc;

use pindrop_application::ports::Navigator;
use pindrop_application::use_cases::{
    AdvanceOrder, AdvanceOrderError, AdvanceOrderInput, SignIn, SignInInput, ViewCart,
};
use pindrop_application::{ApiError, ApiResult, PindropApi, SessionExpiryBoundary};
use pindrop_domain::{
    ComplaintStatus, NewDish, NewRestaurant, OrderStatus, RegisterRequest, RestaurantStatus, Role,
    RouteAccess, Session, access_for,
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::cli::{AdminCommand, CareCommand, Command, CustomerCommand, DeliveryCommand, OwnerCommand};

/// Failure of a command, phrased for the user.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No stored session.
    #[error("You are not logged in. Run `pindrop login` first.")]
    NotSignedIn,

    /// The session's role may not open the page.
    #[error("Signed in as {role}; {route} is not available to this account.")]
    Forbidden {
        /// Signed-in role.
        role: Role,
        /// Requested page.
        route: String,
    },

    /// The session was rejected by the server and has been cleared.
    #[error("Session expired. Please log in again.")]
    SessionExpired,

    /// An API call failed.
    #[error("{message}")]
    Api {
        /// Message shown to the user.
        message: String,
        /// Underlying failure.
        #[source]
        source: ApiError,
    },

    /// A workflow rule rejected the request.
    #[error("{0}")]
    Rejected(String),

    /// An argument could not be used.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The result could not be rendered.
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CommandError {
    fn from_api(source: ApiError, fallback: &str) -> Self {
        if source.is_authentication_expired() {
            return Self::SessionExpired;
        }
        Self::Api {
            message: source.detail_or(fallback),
            source,
        }
    }
}

/// Runs commands against the API on behalf of one page.
pub struct App {
    api: PindropApi,
    boundary: SessionExpiryBoundary,
    navigator: Arc<dyn Navigator>,
}

impl App {
    /// Creates the app. `navigator` holds the page the command runs as.
    pub fn new(api: PindropApi, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            boundary: SessionExpiryBoundary::new(navigator.clone()),
            navigator,
        }
    }

    /// Path the app ends on; `/login` after an expired session.
    pub fn location(&self) -> String {
        self.navigator.current_path()
    }

    /// Applies the route guard for `command`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NotSignedIn`] or [`CommandError::Forbidden`].
    pub fn authorize(&self, command: &Command) -> Result<(), CommandError> {
        let session = self.api.session().current();
        if command.requires_session() && session.is_none() {
            return Err(CommandError::NotSignedIn);
        }
        let Some(route) = command.route() else {
            return Ok(());
        };

        let mut target = route;
        loop {
            match access_for(session.as_ref(), &target) {
                RouteAccess::Allow => return Ok(()),
                RouteAccess::Forward(next) => target = next.to_string(),
                RouteAccess::RedirectToLogin => return Err(CommandError::NotSignedIn),
                RouteAccess::RedirectToDefault | RouteAccess::NotFound => {
                    return Err(CommandError::Forbidden {
                        role: session.as_ref().map_or(Role::Customer, Session::role),
                        route: target,
                    });
                }
            }
        }
    }

    /// Runs `command` and returns its JSON output.
    ///
    /// # Errors
    ///
    /// Returns a user-facing error.
    pub async fn run(&self, command: Command) -> Result<Value, CommandError> {
        self.authorize(&command)?;
        match command {
            Command::Login { email, password } => {
                let result = SignIn::new(&self.api)
                    .execute(SignInInput::Login { email, password })
                    .await;
                let output = self.page(result, "Check your email and password.")?;
                Ok(json!({"user": output.session.user, "home": output.home_route}))
            }
            Command::Register(args) => {
                let account = RegisterRequest {
                    name: args.name,
                    email: args.email,
                    password: args.password,
                    role: args.role,
                    pin_code: args.pin_code,
                };
                let result = SignIn::new(&self.api)
                    .execute(SignInInput::Register(account))
                    .await;
                let output = self.page(result, "Registration failed. Try again.")?;
                Ok(json!({"user": output.session.user, "home": output.home_route}))
            }
            Command::Logout => Ok(json!({"logged_out": self.api.auth().logout()})),
            Command::Whoami { remote } => {
                if remote {
                    let result = self.api.auth().me().await;
                    return render(self.page(result, "Failed to load your profile.")?);
                }
                let session = self.api.session().current().ok_or(CommandError::NotSignedIn)?;
                Ok(json!({
                    "user": session.user,
                    "home": session.role().home_route(),
                    "menu": session.role().nav_links(),
                }))
            }
            Command::Notifications { mark_read } => {
                let notes = self.api.auth().notifications().await;
                let notes = self.page(notes, "Failed to load notifications.")?;
                if mark_read {
                    let result = self.api.auth().mark_notifications_read().await;
                    self.page(result, "Failed to mark notifications as read.")?;
                }
                render(notes)
            }
            Command::Customer(cmd) => self.customer(cmd).await,
            Command::Owner(cmd) => self.owner(cmd).await,
            Command::Delivery(cmd) => self.delivery(cmd).await,
            Command::Admin(cmd) => self.admin(cmd).await,
            Command::Care(cmd) => self.care(cmd).await,
        }
    }

    async fn customer(&self, command: CustomerCommand) -> Result<Value, CommandError> {
        let api = self.api.customer();
        match command {
            CustomerCommand::Restaurants => render(self.page(
                api.restaurants().await,
                "Failed to load restaurants. Please try refreshing.",
            )?),
            CustomerCommand::Menu { restaurant_id } => {
                render(self.page(api.menu(restaurant_id).await, "Failed to load menu.")?)
            }
            CustomerCommand::Cart => {
                let cart = self.page(ViewCart::new(&self.api).execute().await, "Failed to load your cart.")?;
                Ok(json!({"items": cart.items, "summary": cart.summary}))
            }
            CustomerCommand::Add { dish_id, quantity } => render(self.page(
                api.add_to_cart(dish_id, quantity).await,
                "Could not add to cart",
            )?),
            CustomerCommand::Remove { item_id } => {
                let result = api.remove_from_cart(item_id).await;
                render(self.page_without_detail(result, "Failed to remove item.")?)
            }
            CustomerCommand::ClearCart => {
                render(self.page(api.clear_cart().await, "Failed to clear cart.")?)
            }
            CustomerCommand::Offers { restaurant_id } => {
                render(self.page(api.offers(restaurant_id).await, "Failed to load offers.")?)
            }
            CustomerCommand::Checkout { payment, offer } => render(self.page(
                api.checkout(payment, offer).await,
                "Checkout failed.",
            )?),
            CustomerCommand::Orders => {
                render(self.page(api.orders().await, "Failed to load your orders.")?)
            }
            CustomerCommand::Reorder { order_id } => {
                render(self.page(api.reorder(order_id).await, "Failed to reorder.")?)
            }
            CustomerCommand::Complain {
                order_id,
                description,
            } => {
                if description.trim().is_empty() {
                    return Err(CommandError::InvalidInput(
                        "describe the problem with the order".to_string(),
                    ));
                }
                render(self.page(
                    api.raise_complaint(order_id, &description).await,
                    "Could not file complaint.",
                )?)
            }
        }
    }

    async fn owner(&self, command: OwnerCommand) -> Result<Value, CommandError> {
        let api = self.api.owner();
        match command {
            OwnerCommand::Restaurant => {
                let result = api.restaurant().await;
                render(self.page_or_not_found(
                    result,
                    "No restaurant is linked to your account. Contact Admin.",
                    "Failed to load restaurant details.",
                )?)
            }
            OwnerCommand::Dishes => render(self.page_or_not_found(
                api.dishes().await,
                "No restaurant is linked to your account. Contact Admin.",
                "Failed to load menu.",
            )?),
            OwnerCommand::AddDish {
                name,
                price,
                description,
                image,
                unavailable,
            } => {
                let restaurant = self.page_or_not_found(
                    api.restaurant().await,
                    "No restaurant is linked to your account. Contact Admin.",
                    "Failed to add dish.",
                )?;
                let dish = NewDish {
                    restaurant_id: restaurant.id,
                    name,
                    description,
                    price,
                    availability: !unavailable,
                    image_path: image.filter(|url| !url.trim().is_empty()),
                };
                render(self.page(api.add_dish(&dish).await, "Failed to add dish.")?)
            }
            OwnerCommand::ToggleDish { dish_id } => {
                let dishes = self.page(api.dishes().await, "Failed to load menu.")?;
                let dish = dishes
                    .into_iter()
                    .find(|d| d.id == dish_id)
                    .ok_or_else(|| CommandError::InvalidInput(format!("no dish {dish_id} on your menu")))?;
                let toggled = dish.toggled();
                self.page_without_detail(api.update_dish(&toggled).await, "Failed to toggle status.")?;
                render(toggled)
            }
            OwnerCommand::Orders => render(self.page_or_not_found(
                api.orders().await,
                "Account not linked.",
                "Failed to load orders.",
            )?),
            OwnerCommand::Advance { order_id, status } => {
                let input = AdvanceOrderInput {
                    order_id,
                    next: OrderStatus::from(status),
                };
                match AdvanceOrder::new(&self.api).execute(input.clone()).await {
                    Ok(from) => Ok(json!({"order_id": order_id, "from": from, "to": input.next})),
                    Err(AdvanceOrderError::Api(e)) => {
                        self.page_without_detail(Err(e), "Failed to update status.")
                    }
                    Err(e) => Err(CommandError::Rejected(e.to_string())),
                }
            }
            OwnerCommand::Offers => {
                render(self.page(api.offers().await, "Failed to load offers.")?)
            }
            OwnerCommand::CreateOffer { json } => {
                let offer = parse_object(&json)?;
                render(self.page(api.create_offer(&offer).await, "Failed to create offer.")?)
            }
        }
    }

    async fn delivery(&self, command: DeliveryCommand) -> Result<Value, CommandError> {
        let api = self.api.delivery();
        match command {
            DeliveryCommand::Status => {
                render(self.page(api.status().await, "Failed to load your status.")?)
            }
            DeliveryCommand::Toggle => render(self.page_without_detail(
                api.toggle_availability().await,
                "Failed to toggle status.",
            )?),
            DeliveryCommand::Orders => render(self.page(
                api.assigned_orders().await,
                "Failed to load assigned orders.",
            )?),
            DeliveryCommand::Deliver { order_id } => render(self.page(
                api.mark_delivered(order_id).await,
                "Failed to mark as delivered.",
            )?),
        }
    }

    async fn admin(&self, command: AdminCommand) -> Result<Value, CommandError> {
        let api = self.api.admin();
        match command {
            AdminCommand::Stats => render(self.page_without_detail(
                api.stats().await,
                "Failed to load platform statistics.",
            )?),
            AdminCommand::Restaurants => render(self.page_without_detail(
                api.restaurants().await,
                "Failed to load restaurants.",
            )?),
            AdminCommand::AddRestaurant {
                name,
                owner_id,
                pin_code,
                fee,
                inactive,
            } => {
                let mut restaurant = NewRestaurant::new(name, owner_id, pin_code);
                if let Some(fee) = fee {
                    restaurant.restaurant_fee = fee;
                }
                if inactive {
                    restaurant.status = RestaurantStatus::Inactive;
                }
                render(self.page(
                    api.add_restaurant(&restaurant).await,
                    "Failed to add restaurant. Check if the Owner ID is correct.",
                )?)
            }
            AdminCommand::Offers => {
                render(self.page(api.platform_offers().await, "Failed to load offers.")?)
            }
            AdminCommand::CreateOffer { json } => {
                let offer = parse_object(&json)?;
                render(self.page(
                    api.create_platform_offer(&offer).await,
                    "Failed to create offer.",
                )?)
            }
        }
    }

    async fn care(&self, command: CareCommand) -> Result<Value, CommandError> {
        let api = self.api.care();
        match command {
            CareCommand::Complaints => render(self.page_without_detail(
                api.complaints().await,
                "Failed to load customer complaints.",
            )?),
            CareCommand::Update {
                complaint_id,
                status,
                notes,
            } => render(self.page(
                api.update_complaint(complaint_id, ComplaintStatus::from(status), notes)
                    .await,
                "Failed to update status.",
            )?),
            CareCommand::Cancel { order_id } => {
                self.page(
                    api.cancel_order(order_id).await,
                    "Could not cancel order. It may already be delivered or cancelled.",
                )?;
                Ok(json!({
                    "message": format!("Order #{order_id} successfully cancelled and driver freed.")
                }))
            }
        }
    }

    /// Passes `result` through the boundary; failures use the server's
    /// detail, or `fallback` without one.
    fn page<T>(&self, result: ApiResult<T>, fallback: &str) -> Result<T, CommandError> {
        self.boundary
            .handle(result)
            .map_err(|e| CommandError::from_api(e, fallback))
    }

    /// Like [`page`](Self::page) but always shows `fallback`.
    fn page_without_detail<T>(&self, result: ApiResult<T>, fallback: &str) -> Result<T, CommandError> {
        self.boundary
            .handle(result)
            .map_err(|e| fail_without_detail(e, fallback))
    }

    /// Like [`page_without_detail`](Self::page_without_detail) with a
    /// dedicated message for 404.
    fn page_or_not_found<T>(
        &self,
        result: ApiResult<T>,
        not_found: &str,
        fallback: &str,
    ) -> Result<T, CommandError> {
        self.boundary.handle(result).map_err(|e| {
            let message = if e.is_not_found() { not_found } else { fallback };
            fail_without_detail(e, message)
        })
    }

}

/// Maps a failure that already went through the boundary, ignoring the
/// server's detail.
fn fail_without_detail(source: ApiError, message: &str) -> CommandError {
    if source.is_authentication_expired() {
        return CommandError::SessionExpired;
    }
    CommandError::Api {
        message: message.to_string(),
        source,
    }
}

fn render<T: Serialize>(value: T) -> Result<Value, CommandError> {
    Ok(serde_json::to_value(value)?)
}

fn parse_object(raw: &str) -> Result<Value, CommandError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(_) => Err(CommandError::InvalidInput("offer must be a JSON object".to_string())),
        Err(e) => Err(CommandError::InvalidInput(format!("offer is not valid JSON: {e}"))),
    }
}

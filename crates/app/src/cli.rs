//! Command-line definitions.
//!
//! Each role group mirrors the pages of that role's dashboard; every
//! subcommand knows the route of the page it stands in for, which is what
//! the route guard checks before the command runs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pindrop_domain::{PaymentMode, Role};

/// PinDrop marketplace client.
#[derive(Debug, Parser)]
#[command(name = "pindrop", author, version, about)]
pub struct Cli {
    /// API base URL (overrides configuration).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory holding the session state file (overrides configuration).
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session.
    Login {
        /// Account email.
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Create an account and store the session.
    Register(RegisterArgs),
    /// Clear the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami {
        /// Ask the server instead of reading the stored session.
        #[arg(long)]
        remote: bool,
    },
    /// List notifications.
    Notifications {
        /// Mark all notifications as read afterwards.
        #[arg(long)]
        mark_read: bool,
    },
    /// Customer pages.
    #[command(subcommand)]
    Customer(CustomerCommand),
    /// Restaurant-owner pages.
    #[command(subcommand)]
    Owner(OwnerCommand),
    /// Delivery-partner pages.
    #[command(subcommand)]
    Delivery(DeliveryCommand),
    /// Platform-admin pages.
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Customer-care pages.
    #[command(subcommand)]
    Care(CareCommand),
}

/// Arguments of `register`.
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
    /// Role: customer, owner, delivery, admin or care.
    #[arg(long, default_value = "customer")]
    pub role: Role,
    /// Pin code the account operates in.
    #[arg(long)]
    pub pin_code: String,
}

/// Customer commands.
#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Restaurants serving your pin code.
    Restaurants,
    /// A restaurant's menu.
    Menu {
        /// Restaurant id.
        restaurant_id: i64,
    },
    /// Cart contents and bill.
    Cart,
    /// Add a dish to the cart.
    Add {
        /// Dish id.
        dish_id: i64,
        /// Quantity.
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a cart line.
    Remove {
        /// Cart line id.
        item_id: i64,
    },
    /// Empty the cart.
    ClearCart,
    /// Available offers.
    Offers {
        /// Only offers of this restaurant.
        #[arg(long)]
        restaurant_id: Option<i64>,
    },
    /// Place the order for the cart.
    Checkout {
        /// Payment mode: cod, upi or card.
        #[arg(long, default_value = "cod")]
        payment: PaymentMode,
        /// Offer to apply.
        #[arg(long)]
        offer: Option<i64>,
    },
    /// Order history.
    Orders,
    /// Copy a past order into the cart.
    Reorder {
        /// Order id.
        order_id: i64,
    },
    /// Raise a complaint about an order.
    Complain {
        /// Order id.
        order_id: i64,
        /// What went wrong.
        description: String,
    },
}

/// Restaurant-owner commands.
#[derive(Debug, Subcommand)]
pub enum OwnerCommand {
    /// Your restaurant's details.
    Restaurant,
    /// Your menu.
    Dishes,
    /// Add a dish to your menu.
    AddDish {
        /// Dish name.
        name: String,
        /// Unit price.
        price: f64,
        /// Description.
        #[arg(long, default_value = "")]
        description: String,
        /// Image URL.
        #[arg(long)]
        image: Option<String>,
        /// Add the dish as not orderable.
        #[arg(long)]
        unavailable: bool,
    },
    /// Flip a dish between available and sold out.
    ToggleDish {
        /// Dish id.
        dish_id: i64,
    },
    /// Live orders.
    Orders,
    /// Move an order to its next status.
    Advance {
        /// Order id.
        order_id: i64,
        /// Target status, e.g. "Accepted" or "Out for Delivery".
        status: String,
    },
    /// Your restaurant's offers.
    Offers,
    /// Create an offer from a JSON object.
    CreateOffer {
        /// Offer fields as JSON.
        json: String,
    },
}

/// Delivery-partner commands.
#[derive(Debug, Subcommand)]
pub enum DeliveryCommand {
    /// Your availability.
    Status,
    /// Go online or offline.
    Toggle,
    /// Orders assigned to you.
    Orders,
    /// Mark an order delivered.
    Deliver {
        /// Order id.
        order_id: i64,
    },
}

/// Platform-admin commands.
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Platform analytics.
    Stats,
    /// All restaurants.
    Restaurants,
    /// Register a restaurant.
    AddRestaurant {
        /// Restaurant name.
        name: String,
        /// Owner's user id.
        owner_id: i64,
        /// Pin code served.
        pin_code: String,
        /// Per-order restaurant fee.
        #[arg(long)]
        fee: Option<f64>,
        /// Register the restaurant as inactive.
        #[arg(long)]
        inactive: bool,
    },
    /// Platform offers.
    Offers,
    /// Create a platform offer from a JSON object.
    CreateOffer {
        /// Offer fields as JSON.
        json: String,
    },
}

/// Customer-care commands.
#[derive(Debug, Subcommand)]
pub enum CareCommand {
    /// Open complaints.
    Complaints,
    /// Update a complaint's status and notes.
    Update {
        /// Complaint id.
        complaint_id: i64,
        /// New status, e.g. "In Progress" or "Resolved".
        status: String,
        /// Resolution notes.
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Cancel an order on the customer's behalf.
    Cancel {
        /// Order id.
        order_id: i64,
    },
}

impl Command {
    /// Route of the page this command stands in for, if it is gated.
    pub fn route(&self) -> Option<String> {
        match self {
            Self::Login { .. }
            | Self::Register(_)
            | Self::Logout
            | Self::Whoami { .. }
            | Self::Notifications { .. } => None,
            Self::Customer(cmd) => Some(cmd.route()),
            Self::Owner(cmd) => Some(cmd.route().to_string()),
            Self::Delivery(_) => Some("/delivery".to_string()),
            Self::Admin(cmd) => Some(cmd.route().to_string()),
            Self::Care(cmd) => Some(cmd.route().to_string()),
        }
    }

    /// Returns true if the command needs a stored session.
    pub const fn requires_session(&self) -> bool {
        !matches!(self, Self::Login { .. } | Self::Register(_) | Self::Logout)
    }
}

impl CustomerCommand {
    fn route(&self) -> String {
        match self {
            Self::Restaurants | Self::Add { .. } => "/customer".to_string(),
            Self::Menu { restaurant_id } => format!("/customer/restaurants/{restaurant_id}/menu"),
            Self::Cart
            | Self::Remove { .. }
            | Self::ClearCart
            | Self::Offers { .. }
            | Self::Checkout { .. } => "/customer/cart".to_string(),
            Self::Orders | Self::Reorder { .. } => "/customer/orders".to_string(),
            Self::Complain { order_id, .. } => format!("/customer/complaints?orderId={order_id}"),
        }
    }
}

impl OwnerCommand {
    const fn route(&self) -> &'static str {
        match self {
            Self::Restaurant | Self::Offers | Self::CreateOffer { .. } => "/owner",
            Self::Dishes | Self::AddDish { .. } | Self::ToggleDish { .. } => "/owner/dishes",
            Self::Orders | Self::Advance { .. } => "/owner/orders",
        }
    }
}

impl AdminCommand {
    const fn route(&self) -> &'static str {
        match self {
            Self::Stats => "/admin",
            Self::Restaurants | Self::AddRestaurant { .. } => "/admin/restaurants",
            Self::Offers | Self::CreateOffer { .. } => "/admin/offers",
        }
    }
}

impl CareCommand {
    const fn route(&self) -> &'static str {
        match self {
            Self::Complaints | Self::Update { .. } => "/care",
            Self::Cancel { .. } => "/care/orders",
        }
    }
}

//! Response and request shapes for the server-side plugin API.

use serde::{Deserialize, Serialize};

/// `{"data": ...}` wrapper used by the gift card, coupon and ban endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// A purchasable package as the plugin API reports it
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub sale: Option<Sale>,
    #[serde(default)]
    pub expiry_period: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub category: CategoryRef,
    #[serde(default)]
    pub global_limit_period: String,
    #[serde(default)]
    pub user_limit_period: String,
    #[serde(default)]
    pub servers: Option<Vec<GameServer>>,
    #[serde(default)]
    pub show_until: Option<String>,
}

/// Active discount on a package
#[derive(Debug, Clone, Deserialize)]
pub struct Sale {
    pub discount: f64,
    #[serde(default)]
    pub active: bool,
}

/// Category reference embedded in a package
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A store category; subcategories nest arbitrarily deep
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub subcategories: Vec<Category>,
}

/// GET /listing response
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub categories: Vec<Category>,
}

/// GET /information response: the store account plus the requesting server
#[derive(Debug, Clone, Deserialize)]
pub struct StoreInfo {
    pub account: Account,
    pub server: GameServer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub currency: Currency,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub game_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Currency {
    pub symbol: String,
    pub iso_4217: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameServer {
    pub id: i64,
    pub name: String,
}

/// GET /queue response
#[derive(Debug, Clone, Deserialize)]
pub struct CommandQueue {
    pub meta: QueueMeta,
    #[serde(default)]
    pub players: Vec<DuePlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueueMeta {
    pub next_check: i64,
    #[serde(default)]
    pub execute_offline: bool,
}

/// A player with commands waiting to run
#[derive(Debug, Clone, Deserialize)]
pub struct DuePlayer {
    pub id: i64,
    pub name: String,
    pub uuid: String,
}

/// A queued store command
#[derive(Debug, Clone, Deserialize)]
pub struct Command {
    pub id: i64,
    pub command: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfflineCommands {
    #[serde(default)]
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OnlineCommands {
    pub player: OnlinePlayer,
    #[serde(default)]
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OnlinePlayer {
    pub id: String,
    pub username: String,
}

/// A community purchase goal
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityGoal {
    pub id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub account: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub target: f64,
    pub current: f64,
    pub repeatable: i64,
    #[serde(default)]
    pub last_achieved: Option<String>,
    pub times_achieved: i64,
    pub status: String,
    #[serde(default)]
    pub sale: f64,
}

/// A completed or pending store payment
#[derive(Debug, Clone, Deserialize)]
pub struct Payment {
    pub id: i64,
    #[serde(default)]
    pub amount: f64,
    pub status: String,
    pub currency: Currency,
    pub gateway: Gateway,
    #[serde(default)]
    pub email: String,
    pub player: PaymentPlayer,
    #[serde(default)]
    pub packages: Vec<PaymentPackage>,
    #[serde(default)]
    pub notes: Vec<PaymentNote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Gateway {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentPlayer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub uuid: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentPackage {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentNote {
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub created_at: String,
}

/// Paginated payments listing
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentPage {
    pub total: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub last_page: i64,
    pub from: i64,
    pub to: i64,
    pub data: Vec<Payment>,
}

/// POST /checkout response: hosted checkout link for one package
#[derive(Debug, Clone, Deserialize)]
pub struct Checkout {
    pub url: String,
    pub expires: String,
}

/// A gift card and its balance
#[derive(Debug, Clone, Deserialize)]
pub struct GiftCard {
    pub id: i64,
    pub code: String,
    pub balance: GiftCardBalance,
    pub created_at: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GiftCardBalance {
    pub starting: f64,
    pub remaining: f64,
    #[serde(default)]
    pub currency: String,
}

/// A discount coupon
#[derive(Debug, Clone, Deserialize)]
pub struct Coupon {
    pub id: i64,
    pub code: String,
    pub effective: CouponEffective,
    pub discount: CouponDiscount,
    pub expire: CouponExpiry,
    pub basket_type: String,
    pub start_date: String,
    #[serde(default)]
    pub user_limit: i64,
    #[serde(default)]
    pub minimum: f64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CouponEffective {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub packages: Vec<i64>,
    #[serde(default)]
    pub categories: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CouponDiscount {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CouponExpiry {
    #[serde(default)]
    pub redeem_unlimited: bool,
    #[serde(default)]
    pub expire_never: bool,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub date: Option<String>,
}

/// Coupon listing with its pagination header
#[derive(Debug, Clone, Deserialize)]
pub struct CouponPage {
    pub pagination: Pagination,
    pub data: Vec<Coupon>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(alias = "totalResults")]
    pub total_results: i64,
    #[serde(alias = "currentPage")]
    pub current_page: i64,
    #[serde(alias = "lastPage")]
    pub last_page: i64,
}

/// An IP/account ban issued through the store
#[derive(Debug, Clone, Deserialize)]
pub struct Ban {
    pub id: i64,
    pub time: String,
    pub ip: String,
    #[serde(default)]
    pub payment_email: Option<String>,
    pub reason: String,
    pub user: BannedUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BannedUser {
    pub ign: String,
    pub uuid: String,
}

/// A package currently active for a customer
#[derive(Debug, Clone, Deserialize)]
pub struct ActivePackage {
    pub txn_id: String,
    pub date: String,
    pub quantity: i64,
    pub package: PaymentPackage,
}

/// Player join notification sent to the platform
#[derive(Debug, Clone, Serialize)]
pub struct JoinEvent {
    pub username: String,
    pub event_type: String,
    pub ip: String,
}

impl JoinEvent {
    pub fn new(
        username: impl Into<String>,
        event_type: impl Into<String>,
        ip: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            event_type: event_type.into(),
            ip: ip.into(),
        }
    }
}

//! Response and request shapes for the headless storefront API.
//!
//! Only the fields the validators and scenario drivers read are modelled;
//! the platform owns the full wire format.

use serde::{Deserialize, Serialize};

/// Standard `{"data": ...}` wrapper the headless API puts around payloads
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// A purchasable store package
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: CategoryRef,
    pub base_price: f64,
    pub sales_tax: f64,
    pub total_price: f64,
    pub currency: String,
    #[serde(default)]
    pub discount: f64,
    pub disable_quantity: bool,
    pub disable_gifting: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub order: i64,
}

/// Category reference embedded in a package
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A webstore category; `packages` is populated only when requested
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i64,
    pub display_type: String,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub tiered: bool,
    /// Present on tiered categories when queried for a specific user
    #[serde(default)]
    pub active_tier: Option<ActiveTier>,
}

/// A user's active subscription tier within a tiered category
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveTier {
    pub id: i64,
    pub active: bool,
    pub package: Package,
    pub created_at: String,
    pub username_id: i64,
    pub next_payment_date: String,
    pub status: String,
    pub recurring_payment_reference: String,
}

/// A shopping basket
#[derive(Debug, Clone, Deserialize)]
pub struct Basket {
    pub ident: String,
    pub ip: String,
    pub currency: String,
    pub country: String,
    pub base_price: f64,
    pub total_price: f64,
    #[serde(default)]
    pub packages: Vec<BasketPackage>,
}

/// A package row inside a basket
#[derive(Debug, Clone, Deserialize)]
pub struct BasketPackage {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Per-basket quantity and pricing for this row
    #[serde(rename = "in")]
    pub in_basket: InBasket,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InBasket {
    pub quantity: i64,
    pub price: f64,
}

/// Login link offered for basket authentication
#[derive(Debug, Clone, Deserialize)]
pub struct AuthLink {
    pub name: String,
    pub url: String,
}

/// Payload for creating a basket
#[derive(Debug, Clone, Serialize)]
pub struct CreateBasketPayload {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub cancel_url: String,
    pub complete_url: String,
}

impl CreateBasketPayload {
    pub fn new(
        email: impl Into<String>,
        cancel_url: impl Into<String>,
        complete_url: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: None,
            cancel_url: cancel_url.into(),
            complete_url: complete_url.into(),
        }
    }
}

/// Payload for adding a package to a basket
#[derive(Debug, Clone, Serialize)]
pub struct AddPackagePayload {
    pub package_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

impl AddPackagePayload {
    pub fn new(package_id: i64) -> Self {
        Self {
            package_id,
            quantity: None,
        }
    }
}

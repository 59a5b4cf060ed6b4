// Response Fixture Factory
//
// Canned JSON bodies matching the platform's documented response shapes.
// Builders take the identifiers a scenario needs to vary and fill the rest
// with valid defaults, so validator failures in tests point at deliberate
// mutations rather than fixture noise.

use serde_json::{json, Value};
use uuid::Uuid;

use storebridge::headless::models::CreateBasketPayload;

pub struct Fixtures;

impl Fixtures {
    /// Wrap a payload in the platform's `{"data": ...}` envelope.
    pub fn data(payload: Value) -> Value {
        json!({ "data": payload })
    }

    /// Unique basket ident in the platform's format.
    pub fn basket_ident() -> String {
        format!("bkt-{}", Uuid::new_v4().simple())
    }

    pub fn create_basket_payload() -> CreateBasketPayload {
        CreateBasketPayload::new(
            format!("test-{}@storefront.dev", Uuid::new_v4().simple()),
            "https://storefront.dev/cancel",
            "https://storefront.dev/complete",
        )
    }

    // --- Headless shapes ---

    pub fn headless_package(id: i64) -> Value {
        json!({
            "id": id,
            "name": format!("VIP Rank {id}"),
            "description": "Grants the VIP rank on all servers",
            "type": "single",
            "category": { "id": 2710482, "name": "Ranks" },
            "base_price": 9.99,
            "sales_tax": 0.50,
            "total_price": 10.49,
            "currency": "USD",
            "discount": 0.0,
            "disable_quantity": false,
            "disable_gifting": false,
            "created_at": "2024-03-12T09:15:00+00:00",
            "updated_at": "2024-04-02T16:40:00+00:00",
            "order": 1
        })
    }

    pub fn headless_category(id: i64, packages: Vec<Value>) -> Value {
        json!({
            "id": id,
            "name": format!("Category {id}"),
            "slug": format!("category-{id}"),
            "description": "Store category",
            "order": 1,
            "display_type": "grid",
            "packages": packages
        })
    }

    pub fn tiered_category(id: i64, username_id: i64, tier_id: i64) -> Value {
        json!({
            "id": id,
            "name": format!("Subscriptions {id}"),
            "slug": format!("subscriptions-{id}"),
            "description": "Tiered subscription category",
            "order": 1,
            "display_type": "list",
            "packages": [],
            "tiered": true,
            "active_tier": {
                "id": tier_id,
                "active": true,
                "package": Self::headless_package(6834822),
                "created_at": "2024-05-01T12:00:00+00:00",
                "username_id": username_id,
                "next_payment_date": "2024-06-01",
                "status": "active",
                "recurring_payment_reference": format!("rpr-{tier_id}")
            }
        })
    }

    pub fn basket_package(id: i64, quantity: i64, price: f64) -> Value {
        json!({
            "id": id,
            "name": format!("VIP Rank {id}"),
            "description": "Grants the VIP rank on all servers",
            "in": { "quantity": quantity, "price": price }
        })
    }

    pub fn basket(ident: &str, packages: Vec<Value>) -> Value {
        let total: f64 = packages
            .iter()
            .filter_map(|p| p["in"]["price"].as_f64())
            .sum();
        json!({
            "ident": ident,
            "ip": "203.0.113.10",
            "currency": "USD",
            "country": "GB",
            "base_price": total,
            "total_price": total,
            "packages": packages
        })
    }

    pub fn auth_links() -> Value {
        json!([
            { "name": "Steam", "url": "https://storefront.dev/auth/steam" },
            { "name": "Xbox Live", "url": "https://storefront.dev/auth/xbox" }
        ])
    }

    // --- Plugin shapes ---

    pub fn plugin_package(id: i64) -> Value {
        json!({
            "id": id,
            "name": format!("Diamond Kit {id}"),
            "order": 1,
            "image": "https://storefront.dev/images/diamond-kit.png",
            "price": 14.99,
            "expiry_period": "month",
            "type": "single",
            "category": { "id": 81236, "name": "Kits" },
            "global_limit_period": "month",
            "user_limit_period": "month",
            "servers": [ { "id": 1, "name": "Lobby" } ],
            "show_until": "2030-01-01"
        })
    }

    pub fn plugin_category(id: i64, subcategories: Vec<Value>) -> Value {
        json!({
            "id": id,
            "name": format!("Category {id}"),
            "order": 1,
            "packages": [ Self::plugin_package(id * 100) ],
            "subcategories": subcategories
        })
    }

    pub fn listing(categories: Vec<Value>) -> Value {
        json!({ "categories": categories })
    }

    pub fn store_info() -> Value {
        json!({
            "account": {
                "id": 12734,
                "name": "Test Store",
                "currency": { "symbol": "$", "iso_4217": "USD" },
                "domain": "https://teststore.storefront.dev",
                "game_type": "Minecraft"
            },
            "server": { "id": 40812, "name": "Survival" }
        })
    }

    pub fn command_queue() -> Value {
        json!({
            "meta": { "next_check": 45, "execute_offline": true },
            "players": [
                { "id": 1, "name": "TestDev", "uuid": "9e65a968ee4743d19a2a4c9969154491" }
            ]
        })
    }

    pub fn offline_commands() -> Value {
        json!({
            "commands": [
                { "id": 101, "command": "give TestDev diamond 64" }
            ]
        })
    }

    pub fn online_commands() -> Value {
        json!({
            "player": { "id": "76561198042467022", "username": "TestDev" },
            "commands": [
                { "id": 102, "command": "kit diamond TestDev" }
            ]
        })
    }

    pub fn community_goal(id: i64) -> Value {
        json!({
            "id": id,
            "created_at": "2024-02-01T00:00:00+00:00",
            "updated_at": "2024-04-15T08:30:00+00:00",
            "account": 12734,
            "name": format!("Server Upgrade Fund {id}"),
            "description": "Help us move to better hardware",
            "image": "https://storefront.dev/images/goal.png",
            "target": 1000.0,
            "current": 250.0,
            "repeatable": 0,
            "last_achieved": null,
            "times_achieved": 0,
            "status": "Active",
            "sale": 0.0
        })
    }

    pub fn payment(id: i64, txn_id: &str) -> Value {
        json!({
            "id": id,
            "amount": 14.99,
            "status": "Complete",
            "currency": { "symbol": "$", "iso_4217": "USD" },
            "gateway": { "id": 2, "name": "PayPal" },
            "email": "buyer@storefront.dev",
            "player": { "id": 57, "name": "TestDev", "uuid": "9e65a968ee4743d19a2a4c9969154491" },
            "packages": [ { "id": 6051250, "name": "Diamond Kit" } ],
            "notes": [],
            "txn_id": txn_id
        })
    }

    pub fn payment_page(payments: Vec<Value>) -> Value {
        let count = payments.len();
        json!({
            "total": count,
            "per_page": 25,
            "current_page": 1,
            "last_page": 1,
            "from": 1,
            "to": count,
            "data": payments
        })
    }

    pub fn checkout() -> Value {
        json!({
            "url": "https://checkout.storefront.dev/pay/tbx-4014225a",
            "expires": "2024-05-01T13:00:00+00:00"
        })
    }

    pub fn gift_card(id: i64) -> Value {
        json!({
            "id": id,
            "code": "1234567890",
            "balance": { "starting": 50.0, "remaining": 27.0, "currency": "USD" },
            "created_at": "2024-01-10T09:00:00+00:00",
            "expires_at": null,
            "note": "Giveaway prize"
        })
    }

    pub fn coupon(id: i64, code: &str) -> Value {
        json!({
            "id": id,
            "code": code,
            "effective": { "type": "cart", "packages": [], "categories": [] },
            "discount": { "type": "percentage", "percentage": 10.0, "value": 0.0 },
            "expire": { "redeem_unlimited": true, "expire_never": true, "limit": 0, "date": null },
            "basket_type": "single",
            "start_date": "2024-01-01",
            "user_limit": 1,
            "minimum": 0.0,
            "username": "",
            "note": ""
        })
    }

    pub fn coupon_page(coupons: Vec<Value>) -> Value {
        let count = coupons.len();
        json!({
            "pagination": { "total_results": count, "current_page": 1, "last_page": 1 },
            "data": coupons
        })
    }

    pub fn ban(id: i64) -> Value {
        json!({
            "id": id,
            "time": "2024-05-01 10:30:00",
            "ip": "198.51.100.7",
            "payment_email": null,
            "reason": "Chargeback",
            "user": { "ign": "TestDev", "uuid": "9e65a968ee4743d19a2a4c9969154491" }
        })
    }

    pub fn active_package(package_id: i64) -> Value {
        json!({
            "txn_id": "tbx-4014225a79732-70a85f",
            "date": "2024-04-20T11:00:00+00:00",
            "quantity": 1,
            "package": { "id": package_id, "name": "Diamond Kit" }
        })
    }
}

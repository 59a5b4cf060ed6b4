//! Server-side plugin API client.
//!
//! Secret-key authenticated surface used by game servers: store listings,
//! command queues, payments, gift cards, coupons, bans and player package
//! entitlements.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::PluginConfig;
use crate::core::error::ApiResult;
use crate::core::http::{decode, decode_unit};

use super::models::{
    ActivePackage, Ban, Checkout, CommandQueue, CommunityGoal, Coupon, CouponPage, Envelope,
    GiftCard, JoinEvent, Listing, OfflineCommands, OnlineCommands, Package, Payment, PaymentPage,
    StoreInfo,
};

/// Header carrying the store secret key
const SECRET_HEADER: &str = "X-Store-Secret";

/// Server-side plugin API client
#[derive(Clone)]
pub struct PluginApi {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl PluginApi {
    pub fn new(config: PluginConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
            secret_key: config.secret_key,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, %method, "plugin request");
        self.client
            .request(method, url)
            .header(SECRET_HEADER, &self.secret_key)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        decode(response).await
    }

    // --- Store ---

    /// Store account and server details behind the secret key.
    pub async fn get_information(&self) -> ApiResult<StoreInfo> {
        self.get_json("/information").await
    }

    /// Full category/package listing for the store.
    pub async fn get_listing(&self) -> ApiResult<Listing> {
        self.get_json("/listing").await
    }

    // --- Command queue ---

    pub async fn get_command_queue(&self) -> ApiResult<CommandQueue> {
        self.get_json("/queue").await
    }

    pub async fn get_offline_commands(&self) -> ApiResult<OfflineCommands> {
        self.get_json("/queue/offline-commands").await
    }

    pub async fn get_online_commands(&self, player_id: i64) -> ApiResult<OnlineCommands> {
        self.get_json(&format!("/queue/online-commands/{player_id}"))
            .await
    }

    /// Acknowledge executed commands so the platform stops re-issuing them.
    pub async fn delete_commands(&self, command_ids: &[i64]) -> ApiResult<()> {
        let response = self
            .request(Method::DELETE, "/queue")
            .json(&json!({ "ids": command_ids }))
            .send()
            .await?;
        decode_unit(response).await
    }

    /// Notify the platform of players joining the server.
    pub async fn send_join_events(&self, events: &[JoinEvent]) -> ApiResult<()> {
        let response = self
            .request(Method::POST, "/events")
            .json(events)
            .send()
            .await?;
        decode_unit(response).await
    }

    // --- Packages ---

    pub async fn get_all_packages(&self, verbose: bool) -> ApiResult<Vec<Package>> {
        self.get_json(&format!("/packages?verbose={verbose}")).await
    }

    pub async fn get_package(&self, package_id: i64) -> ApiResult<Package> {
        self.get_json(&format!("/packages/{package_id}")).await
    }

    // --- Community goals ---

    pub async fn get_all_community_goals(&self) -> ApiResult<Vec<CommunityGoal>> {
        self.get_json("/community_goals").await
    }

    pub async fn get_community_goal(&self, goal_id: i64) -> ApiResult<CommunityGoal> {
        self.get_json(&format!("/community_goals/{goal_id}")).await
    }

    // --- Payments ---

    pub async fn get_all_payments(&self, limit: u32) -> ApiResult<Vec<Payment>> {
        self.get_json(&format!("/payments?limit={limit}")).await
    }

    pub async fn get_all_payments_paginated(&self, page: u32) -> ApiResult<PaymentPage> {
        self.get_json(&format!("/payments?paged=1&page={page}"))
            .await
    }

    pub async fn get_payment(&self, transaction_id: &str) -> ApiResult<Payment> {
        self.get_json(&format!("/payments/{transaction_id}")).await
    }

    /// Hosted checkout link for one package and username.
    pub async fn create_checkout_url(
        &self,
        package_id: i64,
        username: &str,
    ) -> ApiResult<Checkout> {
        let response = self
            .request(Method::POST, "/checkout")
            .json(&json!({ "package_id": package_id, "username": username }))
            .send()
            .await?;
        decode(response).await
    }

    // --- Gift cards ---

    pub async fn get_all_gift_cards(&self) -> ApiResult<Vec<GiftCard>> {
        let envelope: Envelope<Vec<GiftCard>> = self.get_json("/gift-cards").await?;
        Ok(envelope.data)
    }

    pub async fn get_gift_card(&self, gift_card_id: i64) -> ApiResult<GiftCard> {
        let envelope: Envelope<GiftCard> =
            self.get_json(&format!("/gift-cards/{gift_card_id}")).await?;
        Ok(envelope.data)
    }

    /// Requires a store plan that includes gift card management; without it
    /// the platform answers with a structured client error.
    pub async fn create_gift_card(
        &self,
        amount: f64,
        note: &str,
        expires_at: Option<&str>,
    ) -> ApiResult<GiftCard> {
        let response = self
            .request(Method::POST, "/gift-cards")
            .json(&json!({ "amount": amount, "note": note, "expires_at": expires_at }))
            .send()
            .await?;
        let envelope: Envelope<GiftCard> = decode(response).await?;
        Ok(envelope.data)
    }

    /// Requires a store plan that includes gift card management.
    pub async fn top_up_gift_card(&self, gift_card_id: i64, amount: f64) -> ApiResult<GiftCard> {
        let response = self
            .request(Method::PUT, &format!("/gift-cards/{gift_card_id}"))
            .json(&json!({ "amount": amount }))
            .send()
            .await?;
        let envelope: Envelope<GiftCard> = decode(response).await?;
        Ok(envelope.data)
    }

    pub async fn void_gift_card(&self, gift_card_id: i64) -> ApiResult<GiftCard> {
        let response = self
            .request(Method::DELETE, &format!("/gift-cards/{gift_card_id}"))
            .send()
            .await?;
        let envelope: Envelope<GiftCard> = decode(response).await?;
        Ok(envelope.data)
    }

    // --- Coupons ---

    pub async fn get_all_coupons(&self) -> ApiResult<CouponPage> {
        self.get_json("/coupons").await
    }

    pub async fn get_coupon(&self, coupon_code: &str) -> ApiResult<Coupon> {
        let envelope: Envelope<Coupon> = self.get_json(&format!("/coupons/{coupon_code}")).await?;
        Ok(envelope.data)
    }

    // --- Bans ---

    pub async fn get_all_bans(&self) -> ApiResult<Vec<Ban>> {
        let envelope: Envelope<Vec<Ban>> = self.get_json("/bans").await?;
        Ok(envelope.data)
    }

    pub async fn create_ban(&self, reason: &str, ip: &str, username: &str) -> ApiResult<Ban> {
        let response = self
            .request(Method::POST, "/bans")
            .json(&json!({ "reason": reason, "ip": ip, "user": username }))
            .send()
            .await?;
        let envelope: Envelope<Ban> = decode(response).await?;
        Ok(envelope.data)
    }

    // --- Player entitlements ---

    pub async fn get_active_packages(&self, player_uuid: &str) -> ApiResult<Vec<ActivePackage>> {
        self.get_json(&format!("/player/{player_uuid}/packages"))
            .await
    }

    pub async fn get_active_package_by_id(
        &self,
        player_uuid: &str,
        package_id: i64,
    ) -> ApiResult<ActivePackage> {
        self.get_json(&format!("/player/{player_uuid}/packages/{package_id}"))
            .await
    }
}

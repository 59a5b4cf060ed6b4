//! Headless storefront API client.
//!
//! Public, token-scoped storefront surface: browse packages and categories,
//! build baskets, apply discount codes, inspect subscription tiers. All
//! operations return `Result`; the scenario harness maps the error taxonomy
//! onto its reject path.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::HeadlessConfig;
use crate::core::error::ApiResult;
use crate::core::http::{decode, decode_unit};

use super::models::{
    AddPackagePayload, AuthLink, Basket, Category, CreateBasketPayload, Envelope, Package,
};

/// Headless storefront API client
#[derive(Clone)]
pub struct HeadlessApi {
    client: Client,
    base_url: String,
    public_token: String,
    private_key: Option<String>,
}

impl HeadlessApi {
    pub fn new(config: HeadlessConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
            public_token: config.public_token,
            private_key: config.private_key,
        }
    }

    /// Set the private key used for authenticated basket operations.
    pub fn set_private_key(&mut self, private_key: impl Into<String>) {
        self.private_key = Some(private_key.into());
    }

    fn account_url(&self, path: &str) -> String {
        format!("{}/accounts/{}{}", self.base_url, self.public_token, path)
    }

    fn basket_url(&self, path: &str) -> String {
        format!("{}/baskets{}", self.base_url, path)
    }

    /// Basic auth with the private key, when one is configured.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.private_key {
            Some(key) => request.basic_auth(&self.public_token, Some(key)),
            None => request,
        }
    }

    async fn get_data<T: DeserializeOwned>(&self, url: String) -> ApiResult<T> {
        tracing::debug!(%url, "headless GET");
        let response = self.authorized(self.client.get(&url)).send().await?;
        let envelope: Envelope<T> = decode(response).await?;
        Ok(envelope.data)
    }

    // --- Packages ---

    pub async fn get_all_packages(&self) -> ApiResult<Vec<Package>> {
        self.get_data(self.account_url("/packages")).await
    }

    pub async fn get_package(&self, package_id: i64) -> ApiResult<Package> {
        self.get_data(self.account_url(&format!("/packages/{package_id}")))
            .await
    }

    /// Fetch a package priced in the context of an existing basket.
    pub async fn get_package_for_basket(
        &self,
        package_id: i64,
        basket_ident: &str,
    ) -> ApiResult<Package> {
        self.get_data(self.account_url(&format!(
            "/packages/{package_id}?basketIdent={basket_ident}"
        )))
        .await
    }

    // --- Categories ---

    pub async fn get_all_categories(&self) -> ApiResult<Vec<Category>> {
        self.get_data(self.account_url("/categories")).await
    }

    pub async fn get_all_categories_with_packages(&self) -> ApiResult<Vec<Category>> {
        self.get_data(self.account_url("/categories?includePackages=1"))
            .await
    }

    pub async fn get_category(&self, category_id: i64) -> ApiResult<Category> {
        self.get_data(self.account_url(&format!("/categories/{category_id}")))
            .await
    }

    pub async fn get_category_with_packages(&self, category_id: i64) -> ApiResult<Category> {
        self.get_data(self.account_url(&format!(
            "/categories/{category_id}?includePackages=1"
        )))
        .await
    }

    /// Categories with the user's active tier attached where one exists.
    pub async fn get_tiered_categories_for_user(
        &self,
        username_id: i64,
    ) -> ApiResult<Vec<Category>> {
        self.get_data(self.account_url(&format!(
            "/tiered-categories?usernameId={username_id}"
        )))
        .await
    }

    /// Move an active tier onto a different package.
    pub async fn update_tier(&self, tier_id: i64, package_id: i64) -> ApiResult<()> {
        let url = format!("{}/tiers/{tier_id}", self.base_url);
        tracing::debug!(%url, package_id, "headless tier update");
        let response = self
            .authorized(self.client.patch(&url))
            .json(&json!({ "package_id": package_id }))
            .send()
            .await?;
        decode_unit(response).await
    }

    // --- Baskets ---

    pub async fn create_basket(&self, payload: &CreateBasketPayload) -> ApiResult<Basket> {
        let url = self.account_url("/baskets");
        tracing::debug!(%url, email = %payload.email, "headless basket create");
        let response = self
            .authorized(self.client.post(&url))
            .json(payload)
            .send()
            .await?;
        let envelope: Envelope<Basket> = decode(response).await?;
        Ok(envelope.data)
    }

    pub async fn get_basket(&self, ident: &str) -> ApiResult<Basket> {
        self.get_data(self.account_url(&format!("/baskets/{ident}")))
            .await
    }

    /// Login links a user can follow to authenticate a basket.
    pub async fn get_basket_auth_links(
        &self,
        ident: &str,
        return_url: &str,
    ) -> ApiResult<Vec<AuthLink>> {
        let url = self.account_url(&format!("/baskets/{ident}/auth?returnUrl={return_url}"));
        tracing::debug!(%url, "headless basket auth links");
        let response = self.authorized(self.client.get(&url)).send().await?;
        decode(response).await
    }

    pub async fn add_package(
        &self,
        ident: &str,
        payload: &AddPackagePayload,
    ) -> ApiResult<Basket> {
        let url = self.basket_url(&format!("/{ident}/packages"));
        tracing::debug!(%url, package_id = payload.package_id, "headless basket add");
        let response = self
            .authorized(self.client.post(&url))
            .json(payload)
            .send()
            .await?;
        let envelope: Envelope<Basket> = decode(response).await?;
        Ok(envelope.data)
    }

    pub async fn update_package_quantity(
        &self,
        ident: &str,
        package_id: i64,
        quantity: i64,
    ) -> ApiResult<Basket> {
        let url = self.basket_url(&format!("/{ident}/packages/{package_id}"));
        tracing::debug!(%url, quantity, "headless basket quantity update");
        let response = self
            .authorized(self.client.put(&url))
            .json(&json!({ "quantity": quantity }))
            .send()
            .await?;
        let envelope: Envelope<Basket> = decode(response).await?;
        Ok(envelope.data)
    }

    pub async fn remove_package(&self, ident: &str, package_id: i64) -> ApiResult<Basket> {
        let url = self.basket_url(&format!("/{ident}/packages/remove"));
        tracing::debug!(%url, package_id, "headless basket remove");
        let response = self
            .authorized(self.client.post(&url))
            .json(&json!({ "package_id": package_id }))
            .send()
            .await?;
        let envelope: Envelope<Basket> = decode(response).await?;
        Ok(envelope.data)
    }

    // --- Discounts ---

    pub async fn apply_creator_code(&self, ident: &str, creator_code: &str) -> ApiResult<()> {
        self.post_code(
            &format!("/baskets/{ident}/creator-codes"),
            json!({ "creator_code": creator_code }),
        )
        .await
    }

    pub async fn remove_creator_code(&self, ident: &str) -> ApiResult<()> {
        self.post_code(&format!("/baskets/{ident}/creator-codes/remove"), json!({}))
            .await
    }

    pub async fn apply_gift_card(&self, ident: &str, card_number: &str) -> ApiResult<()> {
        self.post_code(
            &format!("/baskets/{ident}/giftcards"),
            json!({ "card_number": card_number }),
        )
        .await
    }

    pub async fn remove_gift_card(&self, ident: &str, card_number: &str) -> ApiResult<()> {
        self.post_code(
            &format!("/baskets/{ident}/giftcards/remove"),
            json!({ "card_number": card_number }),
        )
        .await
    }

    pub async fn apply_coupon(&self, ident: &str, coupon_code: &str) -> ApiResult<()> {
        self.post_code(
            &format!("/baskets/{ident}/coupons"),
            json!({ "coupon_code": coupon_code }),
        )
        .await
    }

    pub async fn remove_coupon(&self, ident: &str, coupon_code: &str) -> ApiResult<()> {
        self.post_code(
            &format!("/baskets/{ident}/coupons/remove"),
            json!({ "coupon_code": coupon_code }),
        )
        .await
    }

    async fn post_code(&self, path: &str, body: serde_json::Value) -> ApiResult<()> {
        let url = self.account_url(path);
        tracing::debug!(%url, "headless code operation");
        let response = self
            .authorized(self.client.post(&url))
            .json(&body)
            .send()
            .await?;
        decode_unit(response).await
    }
}

//! Public storefront ("headless") API surface.

pub mod client;
pub mod models;

pub use client::HeadlessApi;
pub use models::{
    AddPackagePayload, AuthLink, Basket, BasketPackage, Category, CreateBasketPayload, Package,
};

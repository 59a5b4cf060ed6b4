//! Server-side plugin API surface.

pub mod client;
pub mod models;

pub use client::PluginApi;
pub use models::{
    ActivePackage, Ban, Category, Checkout, CommandQueue, CommunityGoal, Coupon, DuePlayer,
    GiftCard, JoinEvent, Listing, Package, Payment, StoreInfo,
};

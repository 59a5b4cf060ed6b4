//! Validators for headless storefront entities.

use crate::check;
use crate::core::error::ScenarioResult;
use crate::headless::models::{ActiveTier, Basket, Category, Package};

use super::parses_as_timestamp;

pub fn validate_package(package: &Package) -> ScenarioResult<()> {
    check!(package.id > 0, "package id {} is not positive", package.id);
    check!(!package.name.is_empty(), "package name is empty");
    check!(
        !package.description.is_empty(),
        "package {} description is empty",
        package.id
    );
    check!(
        !package.kind.is_empty(),
        "package {} type is empty",
        package.id
    );
    check!(
        package.category.id > 0,
        "package {} category id {} is not positive",
        package.id,
        package.category.id
    );
    check!(
        package.base_price >= 0.0,
        "package {} base price {} is negative",
        package.id,
        package.base_price
    );
    check!(
        package.sales_tax >= 0.0,
        "package {} sales tax {} is negative",
        package.id,
        package.sales_tax
    );
    check!(
        package.total_price >= 0.0,
        "package {} total price {} is negative",
        package.id,
        package.total_price
    );
    check!(
        package.total_price >= package.base_price,
        "package {} total price {} is below base price {}",
        package.id,
        package.total_price,
        package.base_price
    );
    check!(
        !package.currency.is_empty(),
        "package {} currency is empty",
        package.id
    );
    check!(
        package.discount >= 0.0,
        "package {} discount {} is negative",
        package.id,
        package.discount
    );
    check!(
        parses_as_timestamp(&package.created_at),
        "package {} created_at {:?} is not a valid timestamp",
        package.id,
        package.created_at
    );
    check!(
        parses_as_timestamp(&package.updated_at),
        "package {} updated_at {:?} is not a valid timestamp",
        package.id,
        package.updated_at
    );
    check!(
        package.order >= 0,
        "package {} order {} is negative",
        package.id,
        package.order
    );
    Ok(())
}

pub fn validate_category(category: &Category) -> ScenarioResult<()> {
    check!(
        category.id >= 0,
        "category id {} is negative",
        category.id
    );
    check!(!category.name.is_empty(), "category name is empty");
    check!(
        category.order >= 0,
        "category {} order {} is negative",
        category.id,
        category.order
    );
    check!(
        !category.display_type.is_empty(),
        "category {} display type is empty",
        category.id
    );
    for package in &category.packages {
        check!(
            package.id > 0,
            "category {} contains a package with non-positive id {}",
            category.id,
            package.id
        );
        check!(
            !package.name.is_empty(),
            "category {} contains package {} with an empty name",
            category.id,
            package.id
        );
    }
    Ok(())
}

pub fn validate_basket(basket: &Basket) -> ScenarioResult<()> {
    check!(!basket.ident.is_empty(), "basket ident is empty");
    check!(!basket.ip.is_empty(), "basket {} ip is empty", basket.ident);
    check!(
        !basket.currency.is_empty(),
        "basket {} currency is empty",
        basket.ident
    );
    check!(
        !basket.country.is_empty(),
        "basket {} country is empty",
        basket.ident
    );
    for item in &basket.packages {
        check!(
            item.id > 0,
            "basket {} item id {} is not positive",
            basket.ident,
            item.id
        );
        check!(
            !item.name.is_empty(),
            "basket {} item {} name is empty",
            basket.ident,
            item.id
        );
        check!(
            item.in_basket.price >= 0.0,
            "basket {} item {} price {} is negative",
            basket.ident,
            item.id,
            item.in_basket.price
        );
    }
    check!(
        basket.base_price >= 0.0,
        "basket {} base price {} is negative",
        basket.ident,
        basket.base_price
    );
    check!(
        basket.total_price >= 0.0,
        "basket {} total price {} is negative",
        basket.ident,
        basket.total_price
    );
    Ok(())
}

pub fn validate_active_tier(tier: &ActiveTier) -> ScenarioResult<()> {
    check!(tier.id > 0, "tier id {} is not positive", tier.id);
    check!(tier.active, "tier {} is not active", tier.id);
    validate_package(&tier.package)?;
    check!(
        parses_as_timestamp(&tier.created_at),
        "tier {} created_at {:?} is not a valid timestamp",
        tier.id,
        tier.created_at
    );
    check!(
        tier.username_id > 0,
        "tier {} username id {} is not positive",
        tier.id,
        tier.username_id
    );
    check!(
        !tier.next_payment_date.is_empty(),
        "tier {} next payment date is empty",
        tier.id
    );
    check!(!tier.status.is_empty(), "tier {} status is empty", tier.id);
    check!(
        !tier.recurring_payment_reference.is_empty(),
        "tier {} recurring payment reference is empty",
        tier.id
    );
    Ok(())
}

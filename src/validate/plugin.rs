//! Validators for plugin API entities.

use chrono::DateTime;

use crate::check;
use crate::core::error::ScenarioResult;
use crate::plugin::models::{
    ActivePackage, Ban, Category, CommunityGoal, Coupon, DuePlayer, GiftCard, Package, Payment,
};

use super::parses_as_timestamp;

pub fn validate_package(package: &Package) -> ScenarioResult<()> {
    check!(package.id > 0, "package id {} is not positive", package.id);
    check!(!package.name.is_empty(), "package name is empty");
    check!(
        package.order >= -1,
        "package {} order {} is invalid",
        package.id,
        package.order
    );
    check!(
        package.image.is_some(),
        "package {} image is missing",
        package.id
    );
    check!(
        package.price > 0.0,
        "package {} price {} is not positive",
        package.id,
        package.price
    );
    if let Some(sale) = &package.sale {
        check!(
            sale.discount > 0.0,
            "package {} sale discount {} is not positive",
            package.id,
            sale.discount
        );
    }
    check!(
        !package.expiry_period.is_empty(),
        "package {} expiry period is empty",
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
        !package.category.name.is_empty(),
        "package {} category name is empty",
        package.id
    );
    check!(
        !package.global_limit_period.is_empty(),
        "package {} global limit period is empty",
        package.id
    );
    check!(
        !package.user_limit_period.is_empty(),
        "package {} user limit period is empty",
        package.id
    );
    if let Some(servers) = &package.servers {
        for server in servers {
            check!(
                server.id > 0,
                "package {} server id {} is not positive",
                package.id,
                server.id
            );
            check!(
                !server.name.is_empty(),
                "package {} server {} name is empty",
                package.id,
                server.id
            );
        }
    }
    check!(
        package.show_until.is_some(),
        "package {} show_until is missing",
        package.id
    );
    Ok(())
}

/// Validates a category and, transitively, every subcategory beneath it.
/// An invalid leaf fails the top-level validation.
pub fn validate_category(category: &Category) -> ScenarioResult<()> {
    check!(
        category.id > 0,
        "category id {} is not positive",
        category.id
    );
    check!(!category.name.is_empty(), "category name is empty");
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
    for subcategory in &category.subcategories {
        validate_category(subcategory)?;
    }
    Ok(())
}

pub fn validate_due_player(player: &DuePlayer) -> ScenarioResult<()> {
    check!(player.id > 0, "player id {} is not positive", player.id);
    check!(!player.name.is_empty(), "player {} name is empty", player.id);
    check!(!player.uuid.is_empty(), "player {} uuid is empty", player.id);
    Ok(())
}

pub fn validate_community_goal(goal: &CommunityGoal) -> ScenarioResult<()> {
    check!(goal.id > 0, "goal id {} is not positive", goal.id);
    check!(
        parses_as_timestamp(&goal.created_at),
        "goal {} created_at {:?} is not a valid timestamp",
        goal.id,
        goal.created_at
    );
    check!(
        parses_as_timestamp(&goal.updated_at),
        "goal {} updated_at {:?} is not a valid timestamp",
        goal.id,
        goal.updated_at
    );
    if let (Ok(created), Ok(updated)) = (
        DateTime::parse_from_rfc3339(&goal.created_at),
        DateTime::parse_from_rfc3339(&goal.updated_at),
    ) {
        check!(
            updated >= created,
            "goal {} updated_at {} is earlier than created_at {}",
            goal.id,
            goal.updated_at,
            goal.created_at
        );
    }
    check!(
        goal.account > 0,
        "goal {} account id {} is not positive",
        goal.id,
        goal.account
    );
    check!(!goal.name.trim().is_empty(), "goal {} name is blank", goal.id);
    check!(
        goal.target >= 0.0,
        "goal {} target {} is negative",
        goal.id,
        goal.target
    );
    check!(
        goal.current >= 0.0,
        "goal {} current {} is negative",
        goal.id,
        goal.current
    );
    check!(
        goal.current <= goal.target,
        "goal {} current {} exceeds target {}",
        goal.id,
        goal.current,
        goal.target
    );
    check!(
        goal.repeatable == 0 || goal.repeatable == 1,
        "goal {} repeatable {} is not 0 or 1",
        goal.id,
        goal.repeatable
    );
    if let Some(last_achieved) = &goal.last_achieved {
        check!(
            parses_as_timestamp(last_achieved),
            "goal {} last_achieved {:?} is not a valid timestamp",
            goal.id,
            last_achieved
        );
    }
    check!(
        goal.times_achieved >= 0,
        "goal {} times achieved {} is negative",
        goal.id,
        goal.times_achieved
    );
    check!(!goal.status.is_empty(), "goal {} status is empty", goal.id);
    check!(
        goal.sale >= 0.0,
        "goal {} sale {} is negative",
        goal.id,
        goal.sale
    );
    Ok(())
}

pub fn validate_payment(payment: &Payment) -> ScenarioResult<()> {
    check!(payment.id > 0, "payment id {} is not positive", payment.id);
    check!(
        !payment.status.is_empty(),
        "payment {} status is empty",
        payment.id
    );
    check!(
        !payment.currency.iso_4217.is_empty(),
        "payment {} currency code is empty",
        payment.id
    );
    check!(
        payment.player.id > 0,
        "payment {} player id {} is not positive",
        payment.id,
        payment.player.id
    );
    check!(
        !payment.player.name.is_empty(),
        "payment {} player name is empty",
        payment.id
    );
    for package in &payment.packages {
        check!(
            package.id > 0,
            "payment {} contains a package with non-positive id {}",
            payment.id,
            package.id
        );
        check!(
            !package.name.is_empty(),
            "payment {} contains package {} with an empty name",
            payment.id,
            package.id
        );
    }
    Ok(())
}

pub fn validate_gift_card(card: &GiftCard) -> ScenarioResult<()> {
    check!(card.id > 0, "gift card id {} is not positive", card.id);
    check!(!card.code.is_empty(), "gift card {} code is empty", card.id);
    check!(
        card.balance.starting >= 0.0,
        "gift card {} starting balance {} is negative",
        card.id,
        card.balance.starting
    );
    check!(
        card.balance.remaining >= 0.0,
        "gift card {} remaining balance {} is negative",
        card.id,
        card.balance.remaining
    );
    check!(
        parses_as_timestamp(&card.created_at),
        "gift card {} created_at {:?} is not a valid timestamp",
        card.id,
        card.created_at
    );
    if let Some(expires_at) = &card.expires_at {
        check!(
            parses_as_timestamp(expires_at),
            "gift card {} expires_at {:?} is not a valid timestamp",
            card.id,
            expires_at
        );
    }
    Ok(())
}

pub fn validate_coupon(coupon: &Coupon) -> ScenarioResult<()> {
    check!(coupon.id > 0, "coupon id {} is not positive", coupon.id);
    check!(!coupon.code.is_empty(), "coupon {} code is empty", coupon.id);
    check!(
        !coupon.effective.kind.is_empty(),
        "coupon {} effective type is empty",
        coupon.id
    );
    check!(
        !coupon.discount.kind.is_empty(),
        "coupon {} discount type is empty",
        coupon.id
    );
    check!(
        !coupon.basket_type.is_empty(),
        "coupon {} basket type is empty",
        coupon.id
    );
    check!(
        parses_as_timestamp(&coupon.start_date),
        "coupon {} start date {:?} is not a valid timestamp",
        coupon.id,
        coupon.start_date
    );
    check!(
        coupon.user_limit >= 0,
        "coupon {} user limit {} is negative",
        coupon.id,
        coupon.user_limit
    );
    check!(
        coupon.minimum >= 0.0,
        "coupon {} minimum {} is negative",
        coupon.id,
        coupon.minimum
    );
    Ok(())
}

pub fn validate_ban(ban: &Ban) -> ScenarioResult<()> {
    check!(ban.id > 0, "ban id {} is not positive", ban.id);
    check!(!ban.ip.is_empty(), "ban {} ip is empty", ban.id);
    check!(!ban.user.ign.is_empty(), "ban {} username is empty", ban.id);
    check!(!ban.user.uuid.is_empty(), "ban {} uuid is empty", ban.id);
    check!(!ban.reason.is_empty(), "ban {} reason is empty", ban.id);
    check!(!ban.time.is_empty(), "ban {} time is empty", ban.id);
    Ok(())
}

pub fn validate_active_package(active: &ActivePackage) -> ScenarioResult<()> {
    check!(
        active.package.id > 0,
        "active package id {} is not positive",
        active.package.id
    );
    check!(
        !active.package.name.is_empty(),
        "active package {} name is empty",
        active.package.id
    );
    check!(
        !active.txn_id.is_empty(),
        "active package {} transaction id is empty",
        active.package.id
    );
    check!(
        active.quantity >= 0,
        "active package {} quantity {} is negative",
        active.package.id,
        active.quantity
    );
    check!(
        !active.date.is_empty(),
        "active package {} date is empty",
        active.package.id
    );
    Ok(())
}

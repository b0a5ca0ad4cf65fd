//! Subscriptions, referral earnings and withdrawals for the signed-in user.

use hirebase_core::finance::format_inr;
use hirebase_core::models::SubscriptionType;
use hirebase_core::referral::{
    self, FALLBACK_MIN_WITHDRAWAL, can_request_withdrawal, direct_groups, level_reached,
    share_message,
};

use super::{Context, or_dash};
use crate::cli::{ReferralsCommand, SubscriptionsCommand};
use crate::{Error, Result};

pub async fn subscriptions(ctx: &Context, cmd: &SubscriptionsCommand) -> Result<()> {
    ctx.require_authenticated()?;
    let client = ctx.client()?;
    match cmd {
        SubscriptionsCommand::List => {
            let subs = client.my_subscriptions().await?;
            if subs.is_empty() {
                println!("No subscriptions");
            }
            for s in &subs {
                let ends = s
                    .end_date
                    .map(|d| d.date_naive().to_string())
                    .unwrap_or_else(|| "-".into());
                let days = s
                    .days_remaining
                    .map(|d| format!("{d} days left"))
                    .unwrap_or_default();
                println!(
                    "{}\t{}\tends {}\t{}",
                    s.kind,
                    if s.is_active { "active" } else { "inactive" },
                    ends,
                    days
                );
            }
        }
        SubscriptionsCommand::Buy { plan } => {
            let kind = SubscriptionType::parse(&plan.trim().to_ascii_uppercase());
            let Some(price) = kind.price() else {
                return Err(Error::Custom(format!(
                    "Unknown plan {plan}; choose SERVICE_SEARCH, JOB_SEARCH or SERVICE_POST"
                )));
            };
            client.subscribe(kind.clone()).await?;
            log::info!("Subscribed to {kind} (₹{price})");
            for benefit in kind.benefits() {
                println!("- {benefit}");
            }
        }
    }
    Ok(())
}

pub async fn referrals(ctx: &Context, cmd: &ReferralsCommand) -> Result<()> {
    ctx.require_authenticated()?;
    let client = ctx.client()?;
    match cmd {
        ReferralsCommand::Summary { origin } => {
            let summary = client.referral_summary().await?;
            println!("wallet balance:     {}", format_inr(summary.wallet_balance));
            println!("available:          {}", format_inr(summary.available_balance));
            println!("pending withdrawal: {}", format_inr(summary.pending_withdrawal_amount));
            println!("total earned:       {}", format_inr(summary.total_earned));
            println!("referrals:          {}", summary.referral_count);
            println!("level reached:      {}", level_reached(&summary));
            for level in &summary.by_level {
                println!(
                    "  L{:<2} {} from {} commissions",
                    level.level,
                    format_inr(level.total),
                    level.count
                );
            }
            if let (Some(code), Some(origin)) = (&summary.referral_id, origin) {
                println!("{}", share_message(code, origin));
            }
        }
        ReferralsCommand::Tree { page, limit } => {
            let tree = client.referral_tree(*page, *limit).await?;
            for node in direct_groups(&tree.items) {
                println!(
                    "{}\t{}\t{} below",
                    or_dash(node.name.as_deref()),
                    or_dash(node.email.as_deref()),
                    node.descendant_count()
                );
            }
            println!(
                "page {page} of {}",
                referral::total_pages(tree.total, *limit)
            );
        }
        ReferralsCommand::Commissions { page, limit } => {
            let commissions = client.commissions(*page, *limit).await?;
            for c in &commissions.items {
                let source = c
                    .source_user
                    .as_ref()
                    .and_then(|u| u.doc())
                    .and_then(|u| u.name.as_deref());
                let date = c
                    .created_at
                    .map(|d| d.date_naive().to_string())
                    .unwrap_or_else(|| "-".into());
                println!(
                    "{}\tL{}\t{}\t{}",
                    date,
                    c.level,
                    format_inr(c.amount),
                    or_dash(source)
                );
            }
            println!(
                "page {page} of {}",
                referral::total_pages(commissions.total, *limit)
            );
        }
    }
    Ok(())
}

pub async fn withdraw(ctx: &Context) -> Result<()> {
    ctx.require_authenticated()?;
    let client = ctx.client()?;
    let summary = client.referral_summary().await?;
    if !can_request_withdrawal(&summary) {
        if summary.has_pending_withdrawal {
            return Err(Error::Custom(
                "A withdrawal request is already pending.".into(),
            ));
        }
        let min = if summary.min_withdrawal > 0.0 {
            summary.min_withdrawal
        } else {
            FALLBACK_MIN_WITHDRAWAL
        };
        return Err(Error::Custom(format!(
            "Available balance {} is below the minimum withdrawal of {}.",
            format_inr(summary.available_balance),
            format_inr(min)
        )));
    }
    let request = client.request_withdrawal().await?;
    log::info!(
        "Withdrawal of {} requested ({})",
        format_inr(request.amount),
        request.status
    );
    Ok(())
}

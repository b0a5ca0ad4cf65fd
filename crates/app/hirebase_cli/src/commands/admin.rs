//! Admin views. Every handler runs the admin guard before touching the API.

use std::path::Path;

use chrono::Utc;
use hirebase_api_client::endpoints::wallet::PayoutForm;
use hirebase_api_client::{AdminDashboard, ApiError, Client};
use hirebase_core::export::{self, CsvTable, ExportKind, export_file_name};
use hirebase_core::finance::format_inr;
use hirebase_core::models::ReferralSettings;
use hirebase_core::paging::{ADMIN_PAGE_SIZE, filter_rows, paginate};
use hirebase_core::referral::{
    FALLBACK_MIN_WITHDRAWAL, LEVEL_COUNT, format_percent, level_inputs, settings_update,
};

use super::{Context, or_dash};
use crate::cli::AdminCommand;
use crate::{Error, Result};

pub async fn run(ctx: &Context, cmd: &AdminCommand) -> Result<()> {
    ctx.require_admin()?;
    let client = ctx.client()?;
    match cmd {
        AdminCommand::Dashboard => print_dashboard(&client.admin_dashboard().await),
        AdminCommand::Users { search, page } => {
            let users = client.users().await?;
            let rows = filter_rows(&users, search);
            let slice = paginate(&rows, *page, ADMIN_PAGE_SIZE);
            for u in slice.items {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    u.id,
                    or_dash(Some(u.name.as_str())),
                    or_dash(Some(u.email.as_str())),
                    or_dash(u.phone.as_deref()),
                    if u.is_admin { "admin" } else { "user" }
                );
            }
            println!(
                "page {} of {} ({} users)",
                slice.page, slice.total_pages, slice.total
            );
        }
        AdminCommand::Export { kind, search, out } => {
            let table = export_table(&client, *kind, search).await?;
            let path = write_export(out, kind.file_prefix(), &table)?;
            log::info!("Exported {} {kind} rows", table.rows.len());
            println!("{}", path.display());
        }
        AdminCommand::Pay {
            id,
            txn,
            amount,
            mode,
            proof,
        } => {
            let request = client
                .withdrawals()
                .await?
                .into_iter()
                .find(|r| &r.id == id)
                .ok_or_else(|| Error::Custom(format!("Withdrawal request {id} not found")))?;
            let form = PayoutForm {
                txn_id: txn.clone(),
                mode: mode.clone(),
                proof_url: proof.clone(),
                amount: *amount,
            };
            client.pay_withdrawal(&request, &form).await?;
            log::info!("Recorded payout of {} for {id}", format_inr(*amount));
        }
        AdminCommand::Approve { id } => {
            client.approve_withdrawal(id).await?;
            log::info!("Withdrawal {id} approved");
        }
        AdminCommand::ReferralSettings {
            rates,
            min_withdrawal,
        } => {
            let current = client.referral_settings().await?.unwrap_or_default();
            if rates.is_empty() && min_withdrawal.is_none() {
                print_settings(&current);
                return Ok(());
            }
            let mut inputs = level_inputs(&current);
            for (slot, rate) in inputs.iter_mut().zip(rates.iter().take(LEVEL_COUNT)) {
                *slot = rate.clone();
            }
            let min = min_withdrawal.unwrap_or(if current.min_withdrawal > 0.0 {
                current.min_withdrawal
            } else {
                FALLBACK_MIN_WITHDRAWAL
            });
            let update = settings_update(&inputs, min);
            let saved = client.update_referral_settings(&update).await?;
            log::info!("Referral settings saved");
            print_settings(saved.as_ref().unwrap_or(&update));
        }
    }
    Ok(())
}

async fn export_table(
    client: &Client,
    kind: ExportKind,
    search: &str,
) -> core::result::Result<CsvTable, ApiError> {
    let table = match kind {
        ExportKind::Users => export::users_table(filter_rows(&client.users().await?, search)),
        ExportKind::Categories => {
            export::categories_table(filter_rows(&client.categories().await?, search))
        }
        ExportKind::Services => {
            export::services_table(filter_rows(&client.services().await?, search))
        }
        ExportKind::Jobs => export::jobs_table(filter_rows(&client.jobs().await?, search)),
        ExportKind::Subscriptions => {
            let data = client.all_subscriptions().await?;
            export::subscriptions_table(filter_rows(&data.subscriptions, search))
        }
        ExportKind::Payments => {
            let data = client.all_payments().await?;
            export::payments_table(filter_rows(&data.transactions, search))
        }
        ExportKind::Withdrawals => {
            export::withdrawals_table(filter_rows(&client.withdrawals().await?, search))
        }
        ExportKind::Payouts => {
            let data = client.all_wallet_transactions().await?;
            export::payouts_table(filter_rows(&data.transactions, search))
        }
    };
    Ok(table)
}

fn write_export(dir: &Path, prefix: &str, table: &CsvTable) -> Result<std::path::PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(prefix, Utc::now()));
    std::fs::write(&path, table.to_csv())?;
    Ok(path)
}

fn print_dashboard(dashboard: &AdminDashboard) {
    fn line<T>(panel: &str, result: &core::result::Result<T, ApiError>, count: fn(&T) -> usize) {
        match result {
            Ok(v) => println!("{panel:<16}{}", count(v)),
            Err(e) => println!("{panel:<16}error: {}", e.display_message()),
        }
    }
    line("services", &dashboard.services, Vec::len);
    line("jobs", &dashboard.jobs, Vec::len);
    line("companies", &dashboard.companies, Vec::len);
    line("government jobs", &dashboard.government_jobs, Vec::len);
    line("categories", &dashboard.categories, Vec::len);
    line("payments", &dashboard.payments, |p| p.transactions.len());
    line("withdrawals", &dashboard.withdrawals, Vec::len);
    line("payouts", &dashboard.wallet, |w| w.transactions.len());

    let f = dashboard.finance();
    println!();
    println!(
        "incoming        {} ({} of {} payments completed)",
        format_inr(f.incoming_total),
        f.payments_completed,
        f.payments_total
    );
    println!("gst (18%)       {}", format_inr(f.gst_total));
    println!("net payments    {}", format_inr(f.net_payment_total));
    println!("payouts req.    {}", format_inr(f.payouts_requested));
    println!("payouts paid    {}", format_inr(f.payouts_paid));
    println!("net profit      {}", format_inr(f.net_profit));
}

fn print_settings(settings: &ReferralSettings) {
    for (i, rate) in level_inputs(settings).iter().enumerate() {
        println!("L{:<2} {rate}%", i + 1);
    }
    let min = if settings.min_withdrawal > 0.0 {
        settings.min_withdrawal
    } else {
        FALLBACK_MIN_WITHDRAWAL
    };
    println!("min withdrawal {}", format_inr(min));
    if let Some(total) = settings
        .level_rates
        .iter()
        .copied()
        .reduce(|a, b| a + b)
    {
        println!("total payout   {}%", format_percent(total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_is_written_with_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = CsvTable::new(&["Name"]);
        table.push(vec!["Asha".into()]);

        let path = write_export(&dir.path().join("out"), "users_export", &table).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("users_export_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), table.to_csv());
    }
}

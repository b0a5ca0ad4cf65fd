//! CSV export of admin tables.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::finance::{gst_on, net_of_gst};
use crate::models::{
    AdminUser, Category, Job, PaymentTxn, Service, Subscription, UserLite, WalletTxn,
    WithdrawalRequest,
};

/// Header row plus string cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render as CSV. Headers are written bare, every cell is quoted.
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.headers.join(","));
        for row in &self.rows {
            lines.push(
                row.iter()
                    .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        lines.join("\n")
    }
}

/// Tables the admin views can export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Users,
    Categories,
    Services,
    Jobs,
    Subscriptions,
    Payments,
    Withdrawals,
    Payouts,
}

impl ExportKind {
    /// File name prefix used for downloads.
    pub fn file_prefix(self) -> &'static str {
        match self {
            ExportKind::Users => "users_export",
            ExportKind::Categories => "categories_export",
            ExportKind::Services => "services_export",
            ExportKind::Jobs => "jobs_export",
            ExportKind::Subscriptions => "subscriptions_export",
            ExportKind::Payments => "incoming_payments",
            ExportKind::Withdrawals => "withdrawal_requests",
            ExportKind::Payouts => "wallet_payouts",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportKind::Users => "users",
            ExportKind::Categories => "categories",
            ExportKind::Services => "services",
            ExportKind::Jobs => "jobs",
            ExportKind::Subscriptions => "subscriptions",
            ExportKind::Payments => "payments",
            ExportKind::Withdrawals => "withdrawals",
            ExportKind::Payouts => "payouts",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "users" => Ok(ExportKind::Users),
            "categories" => Ok(ExportKind::Categories),
            "services" => Ok(ExportKind::Services),
            "jobs" => Ok(ExportKind::Jobs),
            "subscriptions" => Ok(ExportKind::Subscriptions),
            "payments" => Ok(ExportKind::Payments),
            "withdrawals" => Ok(ExportKind::Withdrawals),
            "payouts" => Ok(ExportKind::Payouts),
            other => Err(format!("unknown export table: {other}")),
        }
    }
}

/// `<prefix>_<ISO timestamp>.csv`
pub fn export_file_name(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}_{}.csv", iso(Some(now)))
}

fn iso(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

fn yes_no(flag: bool) -> String {
    let v = if flag { "Yes" } else { "No" };
    v.to_string()
}

fn text(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

fn contact(user: Option<&UserLite>) -> [String; 3] {
    match user {
        Some(u) => [text(&u.name), text(&u.email), text(&u.phone)],
        None => Default::default(),
    }
}

pub fn users_table<'a>(users: impl IntoIterator<Item = &'a AdminUser>) -> CsvTable {
    let mut table = CsvTable::new(&[
        "Name",
        "Email",
        "Phone",
        "Admin",
        "Referral",
        "ReferralCount",
        "Created",
        "Id",
    ]);
    for u in users {
        table.push(vec![
            u.name.clone(),
            u.email.clone(),
            text(&u.phone),
            yes_no(u.is_admin),
            text(&u.referral_id),
            u.referral_count.to_string(),
            iso(u.created_at),
            u.id.clone(),
        ]);
    }
    table
}

pub fn categories_table<'a>(categories: impl IntoIterator<Item = &'a Category>) -> CsvTable {
    let mut table = CsvTable::new(&["Name", "Type", "Created", "Id"]);
    for c in categories {
        table.push(vec![
            c.name.clone(),
            c.kind.map(|k| k.to_string()).unwrap_or_default(),
            iso(c.created_at),
            c.id.clone(),
        ]);
    }
    table
}

pub fn services_table<'a>(services: impl IntoIterator<Item = &'a Service>) -> CsvTable {
    let mut table = CsvTable::new(&[
        "Categories",
        "Prices",
        "Address",
        "City",
        "District",
        "State",
        "Country",
        "Pincode",
        "UserName",
        "UserEmail",
        "UserPhone",
        "CompanyPost",
        "CreatedAt",
        "Id",
    ]);
    for s in services {
        let cats = s
            .category_prices
            .iter()
            .map(|cp| cp.category.name.as_str())
            .collect::<Vec<_>>()
            .join("|");
        let prices = s
            .category_prices
            .iter()
            .map(|cp| cp.price.to_string())
            .collect::<Vec<_>>()
            .join("|");
        let l = &s.location;
        let mut row = vec![
            cats,
            prices,
            l.address.clone(),
            l.city.clone(),
            l.district.clone(),
            l.state.clone(),
            l.country.clone(),
            l.pincode.clone(),
        ];
        row.extend(contact(s.user.as_ref()));
        row.extend([yes_no(s.is_company_post), iso(s.created_at), s.id.clone()]);
        table.push(row);
    }
    table
}

pub fn jobs_table<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> CsvTable {
    let mut table = CsvTable::new(&[
        "Categories",
        "Address",
        "City",
        "District",
        "State",
        "Country",
        "Pincode",
        "UserName",
        "UserEmail",
        "UserPhone",
        "CompanyPost",
        "CompanyId",
        "CreatedAt",
        "Id",
    ]);
    for j in jobs {
        let cats = j
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join("|");
        let l = &j.location;
        let mut row = vec![
            cats,
            l.address.clone(),
            l.city.clone(),
            l.district.clone(),
            l.state.clone(),
            l.country.clone(),
            l.pincode.clone(),
        ];
        row.extend(contact(j.user.as_ref()));
        row.extend([
            yes_no(j.is_company_post),
            text(&j.company_id),
            iso(j.created_at),
            j.id.clone(),
        ]);
        table.push(row);
    }
    table
}

pub fn subscriptions_table<'a>(subs: impl IntoIterator<Item = &'a Subscription>) -> CsvTable {
    let mut table = CsvTable::new(&[
        "UserName",
        "UserEmail",
        "UserPhone",
        "Type",
        "StartDate",
        "EndDate",
        "Active",
        "DaysRemaining",
        "FreeServicePostUsed",
        "CreatedAt",
        "Id",
    ]);
    for s in subs {
        let mut row = contact(s.user_doc()).to_vec();
        row.extend([
            s.kind.to_string(),
            iso(s.start_date),
            iso(s.end_date),
            yes_no(s.is_active),
            s.days_remaining.map(|d| d.to_string()).unwrap_or_default(),
            yes_no(s.free_service_post_used),
            iso(s.created_at),
            s.id.clone(),
        ]);
        table.push(row);
    }
    table
}

/// Incoming payments with the GST split.
pub fn payments_table<'a>(payments: impl IntoIterator<Item = &'a PaymentTxn>) -> CsvTable {
    let mut table = CsvTable::new(&[
        "UserName",
        "UserEmail",
        "UserPhone",
        "Type",
        "Amount",
        "GST18",
        "Net",
        "PaymentId",
        "OrderId",
        "Status",
        "Created",
        "Id",
    ]);
    for t in payments {
        let mut row = contact(t.user_doc()).to_vec();
        row.extend([
            t.subscription_type
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            t.amount.to_string(),
            gst_on(t.amount).to_string(),
            net_of_gst(t.amount).to_string(),
            t.razorpay_payment_id.clone(),
            t.razorpay_order_id.clone(),
            t.status.clone(),
            iso(t.created_at),
            t.id.clone(),
        ]);
        table.push(row);
    }
    table
}

pub fn withdrawals_table<'a>(
    requests: impl IntoIterator<Item = &'a WithdrawalRequest>,
) -> CsvTable {
    let mut table = CsvTable::new(&[
        "UserName",
        "UserEmail",
        "UserPhone",
        "Amount",
        "Status",
        "RequestedAt",
        "ApprovedAt",
        "PaidAt",
        "Id",
    ]);
    for r in requests {
        let mut row = contact(r.user_doc()).to_vec();
        row.extend([
            r.amount.to_string(),
            r.status.to_string(),
            iso(r.created_at),
            iso(r.approved_at),
            iso(r.paid_at),
            r.id.clone(),
        ]);
        table.push(row);
    }
    table
}

/// Wallet payouts, with the status of the withdrawal each one settles.
pub fn payouts_table<'a>(txns: impl IntoIterator<Item = &'a WalletTxn>) -> CsvTable {
    let mut table = CsvTable::new(&[
        "UserName",
        "UserEmail",
        "UserPhone",
        "Amount",
        "Status",
        "RequestedStatus",
        "Created",
        "Id",
    ]);
    for t in txns {
        let requested_status = t
            .withdrawal_request
            .as_ref()
            .and_then(|w| w.doc())
            .and_then(|w| w.status.clone())
            .unwrap_or_default();
        let mut row = contact(t.user_doc()).to_vec();
        row.extend([
            t.amount.to_string(),
            t.status.clone(),
            requested_status,
            iso(t.created_at),
            t.id.clone(),
        ]);
        table.push(row);
    }
    table
}

//! Client-side filtering and pagination for admin tables.

use crate::models::{
    AdminUser, Category, Company, GovernmentJob, Job, PaymentTxn, Service, Subscription,
    UserLite, WalletTxn, WithdrawalRequest,
};

/// Rows per page on admin tables.
pub const ADMIN_PAGE_SIZE: usize = 10;

/// Number of pages for `total` rows, at least one.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// One page of a row slice.
#[derive(Debug, PartialEq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    /// 1-based page actually shown after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl<T> PageSlice<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice out `page` (1-based, clamped into range) of `rows`.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    let pages = total_pages(rows.len(), page_size);
    let page = page.clamp(1, pages);
    let start = ((page - 1) * page_size).min(rows.len());
    let end = (start + page_size).min(rows.len());
    PageSlice {
        items: &rows[start..end],
        page,
        total_pages: pages,
        total: rows.len(),
    }
}

/// Case-insensitive substring match of `query` against any non-empty field.
/// A blank query matches everything.
pub fn matches_query<S: AsRef<str>>(query: &str, fields: &[S]) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    fields
        .iter()
        .map(|f| -> &str { f.as_ref() })
        .filter(|f| !f.is_empty())
        .any(|f| f.to_lowercase().contains(&q))
}

/// Rows that can be filtered by the admin search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;
}

/// Rows of `rows` matching `query`.
pub fn filter_rows<'a, T: Searchable>(rows: &'a [T], query: &str) -> Vec<&'a T> {
    if query.trim().is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|r| matches_query(query, &r.search_fields()))
        .collect()
}

fn opt(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

fn amount(v: f64) -> String {
    // zero amounts are not searchable
    if v == 0.0 { String::new() } else { v.to_string() }
}

fn contact(user: Option<&UserLite>) -> [String; 3] {
    match user {
        Some(u) => [opt(&u.name), opt(&u.email), opt(&u.phone)],
        None => Default::default(),
    }
}

impl Searchable for AdminUser {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            opt(&self.phone),
            opt(&self.referral_id),
        ]
    }
}

impl Searchable for Subscription {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.kind.to_string()];
        fields.extend(contact(self.user_doc()));
        fields
    }
}

impl Searchable for PaymentTxn {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = contact(self.user_doc()).to_vec();
        fields.extend([
            self.subscription_type
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            self.razorpay_payment_id.clone(),
            self.razorpay_order_id.clone(),
            self.status.clone(),
        ]);
        fields
    }
}

impl Searchable for WithdrawalRequest {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = contact(self.user_doc()).to_vec();
        fields.extend([
            self.status.to_string(),
            amount(self.amount),
            amount(self.paid_amount),
        ]);
        fields
    }
}

impl Searchable for WalletTxn {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = contact(self.user_doc()).to_vec();
        let requested_status = self
            .withdrawal_request
            .as_ref()
            .and_then(|w| w.doc())
            .and_then(|w| w.status.clone())
            .unwrap_or_default();
        fields.extend([self.status.clone(), amount(self.amount), requested_status]);
        fields
    }
}

impl Searchable for GovernmentJob {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.job_title.clone(),
            self.organization_name.clone(),
            self.job_type.clone(),
            self.apply_link.clone(),
        ]
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.kind.map(|k| k.to_string()).unwrap_or_default(),
            self.id.clone(),
        ]
    }
}

fn location_text(l: &crate::geo::Location) -> String {
    [&l.address, &l.city, &l.district, &l.state, &l.country, &l.pincode]
        .map(String::as_str)
        .join(" ")
}

impl Searchable for Service {
    fn search_fields(&self) -> Vec<String> {
        let names = self
            .category_prices
            .iter()
            .map(|cp| cp.category.name.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let prices = self
            .category_prices
            .iter()
            .map(|cp| cp.price.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        vec![
            names,
            prices,
            location_text(&self.location),
            contact(self.user.as_ref()).join(" "),
        ]
    }
}

impl Searchable for Job {
    fn search_fields(&self) -> Vec<String> {
        let names = self
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        vec![
            names,
            location_text(&self.location),
            contact(self.user.as_ref()).join(" "),
            opt(&self.company_id),
        ]
    }
}

impl Searchable for Company {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![opt(&self.name), opt(&self.website)];
        if let Some(l) = &self.location {
            fields.extend([l.city.clone(), l.state.clone(), l.country.clone()]);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn paginate_clamps_page() {
        let rows: Vec<u32> = (1..=25).collect();
        let last = paginate(&rows, 99, 10);
        assert_eq!(last.page, 3);
        assert_eq!(last.items, &[21, 22, 23, 24, 25]);
        assert!(last.has_prev());
        assert!(!last.has_next());

        let first = paginate(&rows, 0, 10);
        assert_eq!(first.page, 1);
        assert_eq!(first.items.len(), 10);
    }

    #[test]
    fn paginate_empty_rows() {
        let rows: Vec<u32> = Vec::new();
        let page = paginate(&rows, 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn query_matching_is_case_insensitive() {
        assert!(matches_query("  ", &["anything"]));
        assert!(matches_query("RAVI", &["", "ravi@example.com"]));
        assert!(!matches_query("meera", &["ravi"]));
    }

    #[test]
    fn admin_users_filter_on_contact_and_referral_id() {
        let users: Vec<AdminUser> = serde_json::from_value(json!([
            { "_id": "1", "name": "Ravi", "email": "r@x.in", "referralId": "RAV123" },
            { "_id": "2", "name": "Meera", "email": "m@x.in", "phone": "98765" }
        ]))
        .unwrap();
        assert_eq!(filter_rows(&users, "rav123").len(), 1);
        assert_eq!(filter_rows(&users, "9876")[0].id, "2");
        assert_eq!(filter_rows(&users, "").len(), 2);
    }

    #[test]
    fn withdrawals_filter_on_amount_and_status() {
        let rows: Vec<WithdrawalRequest> = serde_json::from_value(json!([
            { "_id": "w1", "amount": 500, "status": "requested",
              "user": { "name": "Ravi" } },
            { "_id": "w2", "amount": 120.5, "status": "paid", "user": "u2" }
        ]))
        .unwrap();
        assert_eq!(filter_rows(&rows, "120.5")[0].id, "w2");
        assert_eq!(filter_rows(&rows, "ravi")[0].id, "w1");
        assert_eq!(filter_rows(&rows, "PAID").len(), 1);
    }
}

//! Referral programme derivations: tree grouping, level rates and sharing.

use url::Url;

use crate::models::{ReferralNode, ReferralSettings, ReferralSummary};

/// Commission levels configured by admins.
pub const LEVEL_COUNT: usize = 10;

/// Depth requested when loading the referral tree.
pub const TREE_MAX_DEPTH: u32 = 10;

/// Page size for the referral tree and commission history.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Withdrawal floor used when the backend reports none.
pub const FALLBACK_MIN_WITHDRAWAL: f64 = 200.0;

/// Pages needed for `total` items, at least one.
pub fn total_pages(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 1;
    }
    total.div_ceil(u64::from(limit)).max(1)
}

/// Direct referrals (level 1) at the top of the tree.
pub fn direct_groups(tree: &[ReferralNode]) -> Vec<&ReferralNode> {
    tree.iter().filter(|n| n.level == 1).collect()
}

/// Deepest level that has produced a commission, `0` when none has.
pub fn level_reached(summary: &ReferralSummary) -> u32 {
    summary
        .by_level
        .iter()
        .filter(|l| l.count > 0)
        .map(|l| l.level)
        .max()
        .unwrap_or(0)
}

/// Show a decimal rate as a percentage with up to six decimals.
pub fn format_percent(rate: f64) -> String {
    let v = rate * 100.0;
    if !v.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{v:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

/// Drop everything but digits and dots from a percentage field.
pub fn clean_percent_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parse the leading number of a cleaned percent field, so `"12.5.3"` reads
/// as `12.5`.
fn leading_number(input: &str) -> Option<f64> {
    let mut seen_dot = false;
    let end = input
        .char_indices()
        .find(|&(_, c)| match c {
            '.' if !seen_dot => {
                seen_dot = true;
                false
            }
            c => !c.is_ascii_digit(),
        })
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    input[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert percent inputs into decimal rates. Unparsable inputs become `0`.
pub fn parse_level_rates<S: AsRef<str>>(inputs: &[S]) -> Vec<f64> {
    inputs
        .iter()
        .take(LEVEL_COUNT)
        .map(|s| {
            leading_number(&clean_percent_input(s.as_ref()))
                .map(|n| n / 100.0)
                .unwrap_or(0.0)
        })
        .collect()
}

/// Editable percent strings for every level, padded with `"0"`.
pub fn level_inputs(settings: &ReferralSettings) -> Vec<String> {
    let mut inputs: Vec<String> = settings
        .level_rates
        .iter()
        .take(LEVEL_COUNT)
        .map(|r| format_percent(*r))
        .collect();
    inputs.resize(LEVEL_COUNT, "0".to_string());
    inputs
}

/// Settings body for saving the edited level rates.
pub fn settings_update(inputs: &[String], min_withdrawal: f64) -> ReferralSettings {
    ReferralSettings {
        level_rates: parse_level_rates(inputs),
        min_withdrawal,
        ..Default::default()
    }
}

/// Sign-up link carrying the referral code.
pub fn signup_link(origin: &str, referral_id: &str) -> String {
    match Url::parse(origin).and_then(|u| u.join("/signup")) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("referredBy", referral_id);
            url.to_string()
        }
        Err(_) => format!(
            "{}/signup?referredBy={referral_id}",
            origin.trim_end_matches('/')
        ),
    }
}

/// Text shared to messaging apps.
pub fn share_message(referral_id: &str, origin: &str) -> String {
    format!(
        "Join ServiceInfotek! Use my referral code {referral_id} to sign up: {}",
        signup_link(origin, referral_id)
    )
}

/// Whether the withdrawal button is enabled.
pub fn can_request_withdrawal(summary: &ReferralSummary) -> bool {
    let min = if summary.min_withdrawal > 0.0 {
        summary.min_withdrawal
    } else {
        FALLBACK_MIN_WITHDRAWAL
    };
    !summary.has_pending_withdrawal
        && summary.available_balance > 0.0
        && summary.available_balance >= min
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::LevelEarning;

    #[test]
    fn pages_never_drop_below_one() {
        assert_eq!(total_pages(0, DEFAULT_PAGE_SIZE), 1);
        assert_eq!(total_pages(13, DEFAULT_PAGE_SIZE), 3);
    }

    #[test]
    fn direct_groups_are_level_one() {
        let tree: Vec<ReferralNode> = serde_json::from_value(json!([
            { "id": "a", "level": 1 },
            { "id": "b", "level": 2 },
            { "id": "c", "level": 1 }
        ]))
        .unwrap();
        let ids: Vec<&str> = direct_groups(&tree).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn level_reached_ignores_empty_levels() {
        let summary = ReferralSummary {
            by_level: vec![
                LevelEarning { level: 1, total: 10.0, count: 2 },
                LevelEarning { level: 4, total: 0.0, count: 0 },
                LevelEarning { level: 3, total: 1.0, count: 1 },
            ],
            ..Default::default()
        };
        assert_eq!(level_reached(&summary), 3);
        assert_eq!(level_reached(&ReferralSummary::default()), 0);
    }

    #[test]
    fn percent_formatting_trims_zeros() {
        assert_eq!(format_percent(0.05), "5");
        assert_eq!(format_percent(0.1), "10");
        assert_eq!(format_percent(0.0125), "1.25");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(f64::NAN), "0");
    }

    #[test]
    fn percent_input_cleaning() {
        assert_eq!(clean_percent_input("12,5 %"), "125");
        assert_eq!(clean_percent_input("abc"), "");
        assert_eq!(clean_percent_input("2.5"), "2.5");
    }

    #[test]
    fn rates_parse_to_decimals() {
        let rates = parse_level_rates(&["10", "", "2.5.1", "x"]);
        assert_eq!(rates, vec![0.1, 0.0, 0.025, 0.0]);
    }

    #[test]
    fn inputs_pad_to_level_count() {
        let settings = ReferralSettings {
            level_rates: vec![0.1, 0.05],
            ..Default::default()
        };
        let inputs = level_inputs(&settings);
        assert_eq!(inputs.len(), LEVEL_COUNT);
        assert_eq!(&inputs[..3], ["10", "5", "0"]);
    }

    #[test]
    fn share_message_embeds_code_and_link() {
        assert_eq!(
            share_message("RAV123", "https://app.example.com"),
            "Join ServiceInfotek! Use my referral code RAV123 to sign up: \
             https://app.example.com/signup?referredBy=RAV123"
        );
    }

    #[test]
    fn withdrawal_needs_balance_and_no_pending() {
        let mut summary = ReferralSummary {
            available_balance: 250.0,
            min_withdrawal: 0.0,
            ..Default::default()
        };
        assert!(can_request_withdrawal(&summary));
        summary.available_balance = 150.0;
        assert!(!can_request_withdrawal(&summary));
        summary.min_withdrawal = 100.0;
        assert!(can_request_withdrawal(&summary));
        summary.has_pending_withdrawal = true;
        assert!(!can_request_withdrawal(&summary));
    }
}

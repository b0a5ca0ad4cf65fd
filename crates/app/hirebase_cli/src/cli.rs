use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hirebase_core::export::ExportKind;
use hirebase_core::geo::Location;
use hirebase_core::referral::DEFAULT_PAGE_SIZE;

/// Command line client for the Hirebase marketplace.
#[derive(Parser, Debug)]
#[command(name = "hirebase", about = "Hirebase marketplace command line client")]
pub struct Cli {
    /// Backend API base URL.
    #[arg(long, global = true, env = "HIREBASE_API_BASE_URL")]
    pub api_base: Option<String>,

    /// File holding the persisted session.
    #[arg(long, global = true, env = "HIREBASE_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version
    Version,

    /// Store a bearer token
    Login {
        #[arg(long)]
        token: String,

        /// Mark the session as an admin session.
        #[arg(long)]
        admin: bool,
    },

    /// Forget the stored token and admin flag
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show what opening a dashboard route would do
    Open { path: String },

    /// Service listings
    #[command(subcommand)]
    Services(ServicesCommand),

    /// Private job listings and candidates
    #[command(subcommand)]
    Jobs(JobsCommand),

    /// Government job listings
    #[command(subcommand)]
    GovJobs(GovJobsCommand),

    /// Subscription plans
    #[command(subcommand)]
    Subscriptions(SubscriptionsCommand),

    /// Referral earnings
    #[command(subcommand)]
    Referrals(ReferralsCommand),

    /// Request a payout of the available referral balance
    Withdraw,

    /// Admin tools
    #[command(subcommand)]
    Admin(AdminCommand),

    /// Resolve a location from an address, coordinates or the IP address
    Locate {
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        address: Option<String>,

        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub district: String,
    #[arg(long, default_value = "")]
    pub state: String,
    #[arg(long, default_value = "")]
    pub country: String,
    #[arg(long, default_value = "")]
    pub pincode: String,
}

impl LocationArgs {
    pub fn to_location(&self) -> Location {
        Location {
            address: self.address.clone(),
            city: self.city.clone(),
            district: self.district.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            pincode: self.pincode.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search keyword. Falls back to the address when omitted.
    pub keyword: Option<String>,

    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Subcommand, Debug)]
pub enum ServicesCommand {
    /// Search services by keyword and location
    Search(SearchArgs),
    /// List your own services
    Mine,
    /// Post a service
    Post {
        /// Category and price as `ID=PRICE`. Repeat for several categories.
        #[arg(long = "category", value_parser = parse_category_price)]
        categories: Vec<(String, f64)>,

        /// Post on behalf of this company.
        #[arg(long)]
        company: Option<String>,

        #[command(flatten)]
        location: LocationArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum JobsCommand {
    /// Search private jobs by keyword and location
    Search(SearchArgs),
    /// List your own job posts
    Mine,
    /// Find job seekers interested in the given categories
    Candidates {
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// Post a job
    Post {
        #[arg(long = "category")]
        categories: Vec<String>,

        #[arg(long)]
        company: Option<String>,

        #[command(flatten)]
        location: LocationArgs,
    },
    /// Show or update your job interests
    Interests {
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Resume file to upload.
        #[arg(long)]
        resume: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GovJobsCommand {
    /// List government jobs
    List {
        #[arg(long = "type")]
        job_type: Option<String>,
    },
    /// Search government jobs of one type
    Search {
        keyword: String,

        #[arg(long = "type", default_value = "Govt Jobs")]
        job_type: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SubscriptionsCommand {
    /// List your subscriptions
    List,
    /// Buy a plan: SERVICE_SEARCH, JOB_SEARCH or SERVICE_POST
    Buy { plan: String },
}

#[derive(Subcommand, Debug)]
pub enum ReferralsCommand {
    /// Wallet balance and earnings by level
    Summary {
        /// Web origin used to build the share link.
        #[arg(long, env = "HIREBASE_WEB_ORIGIN")]
        origin: Option<String>,
    },
    /// Your referral tree
    Tree {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,
    },
    /// Commission history
    Commissions {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Finance summary and collection counts
    Dashboard,
    /// Registered users
    Users {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Export a table as CSV
    Export {
        kind: ExportKind,

        /// Only export rows matching this text.
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Record a payout against a withdrawal request
    Pay {
        id: String,
        #[arg(long)]
        txn: String,
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value = "UPI")]
        mode: String,
        #[arg(long, default_value = "")]
        proof: String,
    },
    /// Approve a withdrawal request
    Approve { id: String },
    /// Show or edit referral commission settings
    ReferralSettings {
        /// Percent per level, in level order.
        #[arg(long = "rate")]
        rates: Vec<String>,

        #[arg(long)]
        min_withdrawal: Option<f64>,
    },
}

fn parse_category_price(s: &str) -> Result<(String, f64), String> {
    let (id, price) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=PRICE, got `{s}`"))?;
    let price = price
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid price in `{s}`"))?;
    Ok((id.trim().to_string(), price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn category_price_pairs() {
        assert_eq!(
            parse_category_price("c1=499.5"),
            Ok(("c1".to_string(), 499.5))
        );
        assert!(parse_category_price("c1").is_err());
        assert!(parse_category_price("c1=abc").is_err());
    }

    #[test]
    fn export_kind_parses() {
        let cli = Cli::try_parse_from(["hirebase", "admin", "export", "payouts"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Admin(AdminCommand::Export {
                kind: ExportKind::Payouts,
                ..
            })
        ));
        assert!(Cli::try_parse_from(["hirebase", "admin", "export", "nope"]).is_err());
    }
}

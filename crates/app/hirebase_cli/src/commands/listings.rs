//! Services, private jobs and government jobs.

use chrono::Utc;
use hirebase_core::finance::format_inr;
use hirebase_core::geo::SearchQuery;
use hirebase_core::models::{
    CategoryPriceInput, GovernmentJob, Job, JobInput, Service, ServiceInput, SubscriptionType,
    has_plan, has_service_search_access, job_trial_active,
};

use super::{Context, or_dash};
use crate::cli::{GovJobsCommand, JobsCommand, SearchArgs, ServicesCommand};
use crate::{Error, Result};

pub async fn services(ctx: &Context, cmd: &ServicesCommand) -> Result<()> {
    ctx.require_authenticated()?;
    let client = ctx.client()?;
    match cmd {
        ServicesCommand::Search(args) => {
            let subs = client.my_subscriptions().await?;
            if !has_service_search_access(&subs) {
                return Err(Error::Custom(
                    "Service search needs a Service Search or Service Post subscription.".into(),
                ));
            }
            print_services(&client.search_services(&search_query(args)).await?);
        }
        ServicesCommand::Mine => print_services(&client.my_services().await?),
        ServicesCommand::Post {
            categories,
            company,
            location,
        } => {
            let input = ServiceInput {
                category_prices: categories
                    .iter()
                    .map(|(category, price)| CategoryPriceInput {
                        category: category.clone(),
                        price: *price,
                    })
                    .collect(),
                location: location.to_location(),
                is_company_post: company.is_some(),
                company_id: company.clone(),
            };
            let (subs, mine) = tokio::join!(client.my_subscriptions(), client.my_services());
            input.validate(has_plan(&subs?, &SubscriptionType::ServicePost), mine?.len())?;
            match client.create_service(&input).await? {
                Some(service) => log::info!("Service {} posted", service.id),
                None => log::info!("Service posted"),
            }
        }
    }
    Ok(())
}

pub async fn jobs(ctx: &Context, cmd: &JobsCommand) -> Result<()> {
    ctx.require_authenticated()?;
    let client = ctx.client()?;
    match cmd {
        JobsCommand::Search(args) => {
            let (profile, subs) = tokio::join!(client.profile(), client.my_subscriptions());
            let has_access = has_plan(&subs?, &SubscriptionType::JobSearch)
                || job_trial_active(profile?.created_at, Utc::now());
            if !has_access {
                return Err(Error::Custom(
                    "Your free job search trial has ended. Subscribe to Job Search to continue."
                        .into(),
                ));
            }
            print_jobs(&client.search_jobs(&search_query(args)).await?);
        }
        JobsCommand::Mine => print_jobs(&client.my_jobs().await?),
        JobsCommand::Candidates { categories } => {
            let candidates = client.search_candidates(categories).await?;
            if candidates.is_empty() {
                println!("No candidates found");
            }
            for c in &candidates {
                let interests: Vec<&str> = c
                    .interested_job_categories
                    .iter()
                    .map(|cat| cat.name.as_str())
                    .collect();
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    or_dash(c.name.as_deref()),
                    or_dash(c.email.as_deref()),
                    or_dash(c.phone.as_deref()),
                    interests.join(", "),
                    or_dash(c.resume_url.as_deref()),
                );
            }
        }
        JobsCommand::Post {
            categories,
            company,
            location,
        } => {
            let input = JobInput {
                categories_ids: categories.clone(),
                location: location.to_location(),
                is_company_post: company.is_some(),
                company_id: company.clone(),
            };
            input.validate()?;
            match client.create_job(&input).await? {
                Some(job) => log::info!("Job {} posted", job.id),
                None => log::info!("Job posted"),
            }
        }
        JobsCommand::Interests { categories, resume } => {
            let saved = client.my_interests().await?;
            if categories.is_empty() && resume.is_none() {
                match saved {
                    Some(saved) => {
                        let names: Vec<&str> =
                            saved.categories.iter().map(|c| c.name.as_str()).collect();
                        println!("categories: {}", names.join(", "));
                        println!("resume:     {}", or_dash(saved.resume_url.as_deref()));
                    }
                    None => println!("No job interests saved"),
                }
                return Ok(());
            }

            let mut input = saved.map(|s| s.to_input()).unwrap_or_default();
            if !categories.is_empty() {
                input.categories_ids = categories.clone();
            }
            if let Some(path) = resume {
                let bytes = std::fs::read(path)?;
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("resume");
                match client.upload_resume(file_name, bytes).await? {
                    Some(url) => input.resume_url = url,
                    None => log::info!("Upload succeeded."),
                }
            }
            client.update_interests(&input).await?;
            log::info!("Job interests saved");
        }
    }
    Ok(())
}

/// Government listings are public, so no guard runs here.
pub async fn government_jobs(ctx: &Context, cmd: &GovJobsCommand) -> Result<()> {
    let client = ctx.client()?;
    let jobs = match cmd {
        GovJobsCommand::List { job_type } => client
            .government_jobs()
            .await?
            .into_iter()
            .filter(|j| job_type.as_ref().is_none_or(|t| &j.job_type == t))
            .collect(),
        GovJobsCommand::Search { keyword, job_type } => {
            let query = SearchQuery {
                keyword: keyword.clone(),
                ..SearchQuery::default()
            };
            client.search_government_jobs(&query, job_type).await?
        }
    };
    print_government_jobs(&jobs);
    Ok(())
}

fn search_query(args: &SearchArgs) -> SearchQuery {
    SearchQuery {
        keyword: args.keyword.clone().unwrap_or_default(),
        location: args.location.to_location(),
    }
}

fn print_services(services: &[Service]) {
    if services.is_empty() {
        println!("No services found");
    }
    for s in services {
        let prices: Vec<String> = s
            .category_prices
            .iter()
            .map(|cp| format!("{} {}", cp.category.name, format_inr(cp.price)))
            .collect();
        println!(
            "{}\t{}\t{}\t{}",
            s.id,
            prices.join(", "),
            or_dash(Some(s.location.city.as_str())),
            or_dash(s.user.as_ref().and_then(|u| u.name.as_deref())),
        );
    }
}

fn print_jobs(jobs: &[Job]) {
    if jobs.is_empty() {
        println!("No jobs found");
    }
    for j in jobs {
        let categories: Vec<&str> = j.categories.iter().map(|c| c.name.as_str()).collect();
        println!(
            "{}\t{}\t{}\t{}",
            j.id,
            categories.join(", "),
            or_dash(Some(j.location.city.as_str())),
            or_dash(j.user.as_ref().and_then(|u| u.name.as_deref())),
        );
    }
}

fn print_government_jobs(jobs: &[GovernmentJob]) {
    if jobs.is_empty() {
        println!("No government jobs found");
    }
    for j in jobs {
        let last_date = j
            .last_date_to_apply
            .map(|d| d.date_naive().to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{}\t{}\t{}\t{}\t{}",
            j.job_title, j.organization_name, j.job_type, last_date, j.apply_link
        );
    }
}

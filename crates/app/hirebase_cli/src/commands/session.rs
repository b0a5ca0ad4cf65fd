//! Sign-in state and navigation.

use hirebase_core::routes::{Navigation, navigate};

use super::{Context, or_dash};
use crate::Result;

pub fn login(ctx: &Context, token: &str, admin: bool) -> Result<()> {
    if token.trim().is_empty() {
        return Err(crate::Error::Custom("Token must not be empty".into()));
    }
    ctx.session.sign_in(token, admin)?;
    log::info!(
        "Signed in{}",
        if admin { " as admin" } else { "" }
    );
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    ctx.session.sign_out()?;
    log::info!("Signed out");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> Result<()> {
    if ctx.session.token()?.is_none() {
        println!("Not signed in");
        return Ok(());
    }
    let profile = ctx.client()?.profile().await?;
    println!("name:        {}", or_dash(profile.name.as_deref()));
    println!("email:       {}", or_dash(profile.email.as_deref()));
    println!("phone:       {}", or_dash(profile.phone.as_deref()));
    println!("referral id: {}", or_dash(profile.referral_id.as_deref()));
    println!(
        "admin:       {}",
        if ctx.session.is_admin()? { "yes" } else { "no" }
    );
    Ok(())
}

/// Print the outcome of navigating to `path` with the current session.
pub fn open(ctx: &Context, path: &str) -> Result<()> {
    println!("{}", describe(&navigate(&ctx.session, path)));
    Ok(())
}

fn describe(nav: &Navigation) -> String {
    match nav {
        Navigation::Render { view, id: Some(id) } => format!("render {view:?} id={id}"),
        Navigation::Render { view, id: None } => format!("render {view:?}"),
        Navigation::Redirect { to, .. } => format!("redirect {to}"),
        Navigation::NotFound => "not found".to_string(),
    }
}

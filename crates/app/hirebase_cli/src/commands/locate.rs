//! Location lookup used to pre-fill search and post forms.

use hirebase_api_client::ApiError;
use hirebase_core::geo::{Location, ResolvedLocation};

use super::{Context, or_dash};
use crate::{Error, Result};

pub async fn run(
    ctx: &Context,
    address: Option<&str>,
    coords: Option<(f64, f64)>,
) -> Result<()> {
    let geo = ctx.geo()?;
    let resolved = match address {
        Some(address) => geo
            .resolve_address(address)
            .await
            .map_err(|e| match e {
                ApiError::Validation(message) => Error::Custom(message),
                other => Error::Custom(format!(
                    "Address lookup failed: {}",
                    other.display_message()
                )),
            })?
            .ok_or_else(|| Error::Custom(format!("No match found for \"{address}\"")))?,
        None => geo.locate(coords, &Location::default()).await.map_err(|e| {
            Error::Custom(format!(
                "Location unavailable and IP lookup failed: {}. Please enter an address manually.",
                e.display_message()
            ))
        })?,
    };
    if resolved.is_approximate() {
        log::warn!("Using an approximate location based on your IP address");
    }
    print_location(&resolved);
    Ok(())
}

fn print_location(resolved: &ResolvedLocation) {
    let l = &resolved.location;
    println!("address:  {}", or_dash(Some(l.address.as_str())));
    println!("city:     {}", or_dash(Some(l.city.as_str())));
    println!("district: {}", or_dash(Some(l.district.as_str())));
    println!("state:    {}", or_dash(Some(l.state.as_str())));
    println!("country:  {}", or_dash(Some(l.country.as_str())));
    println!("pincode:  {}", or_dash(Some(l.pincode.as_str())));
}

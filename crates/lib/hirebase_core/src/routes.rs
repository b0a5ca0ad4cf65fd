//! Client route table and navigation decisions.

use crate::guard::{GuardDecision, require_admin, require_authenticated};
use crate::session::Session;

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

/// Every view the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    SignIn,
    SignUp,
    GovernmentJobs,
    Home,
    Services,
    Jobs,
    Companies,
    Company,
    Subscriptions,
    Transactions,
    ReferEarn,
    ReferHowItWorks,
    Profile,
    AdminDashboard,
    AdminServices,
    AdminJobs,
    AdminSubscriptions,
    AdminTransactions,
    AdminPayments,
    AdminUsers,
    AdminUserDetail,
    AdminCompanies,
    AdminCategories,
    AdminReferralSettings,
    AdminGovernmentJobs,
}

/// A route pattern. Segments starting with `:` capture a parameter.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub pattern: &'static str,
    pub view: View,
    pub access: Access,
}

const fn route(pattern: &'static str, view: View, access: Access) -> Route {
    Route {
        pattern,
        view,
        access,
    }
}

/// All client routes.
pub const ROUTES: &[Route] = &[
    route("/signin", View::SignIn, Access::Public),
    route("/signup", View::SignUp, Access::Public),
    route("/government-jobs", View::GovernmentJobs, Access::Public),
    route("/", View::Home, Access::Authenticated),
    route("/services", View::Services, Access::Authenticated),
    route("/jobs", View::Jobs, Access::Authenticated),
    route("/companies", View::Companies, Access::Authenticated),
    route("/company", View::Company, Access::Authenticated),
    route("/subscriptions", View::Subscriptions, Access::Authenticated),
    route("/transactions", View::Transactions, Access::Authenticated),
    route("/refer-earn", View::ReferEarn, Access::Authenticated),
    route("/refer/how-it-works", View::ReferHowItWorks, Access::Authenticated),
    route("/profile", View::Profile, Access::Authenticated),
    route("/admin/dashboard", View::AdminDashboard, Access::Admin),
    route("/admin/services", View::AdminServices, Access::Admin),
    route("/admin/jobs", View::AdminJobs, Access::Admin),
    route("/admin/subscriptions", View::AdminSubscriptions, Access::Admin),
    route("/admin/transactions", View::AdminTransactions, Access::Admin),
    route("/admin/payments", View::AdminPayments, Access::Admin),
    route("/admin/users", View::AdminUsers, Access::Admin),
    route("/admin/users/:id", View::AdminUserDetail, Access::Admin),
    route("/admin/companies", View::AdminCompanies, Access::Admin),
    route("/admin/categories", View::AdminCategories, Access::Admin),
    route("/admin/referral-settings", View::AdminReferralSettings, Access::Admin),
    route("/admin/government-jobs", View::AdminGovernmentJobs, Access::Admin),
];

/// A matched route plus its captured `:id`, if the pattern has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: View,
    pub access: Access,
    pub id: Option<String>,
}

/// What navigating to a path results in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render { view: View, id: Option<String> },
    Redirect { to: &'static str, replace: bool },
    NotFound,
}

/// Match `path` against [`ROUTES`]. Query strings, fragments and a trailing
/// slash are ignored.
pub fn match_route(path: &str) -> Option<RouteMatch> {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    ROUTES.iter().find_map(|route| {
        let pattern: Vec<&str> = route.pattern.split('/').filter(|s| !s.is_empty()).collect();
        if pattern.len() != segments.len() {
            return None;
        }
        let mut id = None;
        for (want, got) in pattern.iter().zip(&segments) {
            if want.starts_with(':') {
                id = Some((*got).to_string());
            } else if want != got {
                return None;
            }
        }
        Some(RouteMatch {
            view: route.view,
            access: route.access,
            id,
        })
    })
}

/// Resolve a navigation to `path` for the given session.
pub fn navigate(session: &Session, path: &str) -> Navigation {
    let Some(matched) = match_route(path) else {
        return Navigation::NotFound;
    };
    let decision = match matched.access {
        Access::Public => GuardDecision::Render,
        Access::Authenticated => require_authenticated(session),
        Access::Admin => require_admin(session),
    };
    match decision {
        GuardDecision::Render => Navigation::Render {
            view: matched.view,
            id: matched.id,
        },
        GuardDecision::Redirect { to, replace } => Navigation::Redirect { to, replace },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_static_routes() {
        let m = match_route("/jobs").unwrap();
        assert_eq!(m.view, View::Jobs);
        assert_eq!(m.access, Access::Authenticated);
        assert!(m.id.is_none());
    }

    #[test]
    fn root_matches_home() {
        assert_eq!(match_route("/").unwrap().view, View::Home);
        assert_eq!(match_route("").unwrap().view, View::Home);
    }

    #[test]
    fn captures_user_id() {
        let m = match_route("/admin/users/64fa?tab=1").unwrap();
        assert_eq!(m.view, View::AdminUserDetail);
        assert_eq!(m.id.as_deref(), Some("64fa"));
    }

    #[test]
    fn ignores_trailing_slash() {
        assert_eq!(match_route("/services/").unwrap().view, View::Services);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let session = Session::in_memory();
        assert_eq!(navigate(&session, "/nowhere"), Navigation::NotFound);
    }

    #[test]
    fn public_route_renders_without_token() {
        let session = Session::in_memory();
        assert_eq!(
            navigate(&session, "/government-jobs"),
            Navigation::Render {
                view: View::GovernmentJobs,
                id: None
            }
        );
    }

    #[test]
    fn protected_route_redirects_without_token() {
        let session = Session::in_memory();
        assert_eq!(
            navigate(&session, "/refer-earn"),
            Navigation::Redirect {
                to: "/signin",
                replace: true
            }
        );
    }

    #[test]
    fn admin_route_redirects_non_admin_home() {
        let session = Session::in_memory();
        session.set_token("t").unwrap();
        assert_eq!(
            navigate(&session, "/admin/payments"),
            Navigation::Redirect {
                to: "/",
                replace: true
            }
        );
    }

    #[test]
    fn admin_route_renders_for_admin() {
        let session = Session::in_memory();
        session.sign_in("t", true).unwrap();
        assert_eq!(
            navigate(&session, "/admin/users/42"),
            Navigation::Render {
                view: View::AdminUserDetail,
                id: Some("42".into())
            }
        );
    }
}

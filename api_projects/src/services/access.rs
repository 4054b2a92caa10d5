use chrono::NaiveDate;
use uuid::Uuid;

use common::{error::AppError, misc::ProjectOccupation};
use db::models::{project::Project, subscription::Subscription};

/// The identity a request carries into the policy check.
#[derive(Debug, Clone, Copy)]
pub struct Viewer {
    pub user_id: Uuid,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessDecision {
    Granted,
    Denied(DenialReason),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DenialReason {
    /// Secure projects are visible only to their creator or an admin.
    SecureProject,
    /// Gated project and the viewer is anonymous; the client is expected
    /// to route to the login page.
    AuthenticationRequired,
    /// Gated project and the viewer holds no active subscription.
    SubscriptionInactive,
}

impl From<DenialReason> for AppError {
    fn from(reason: DenialReason) -> Self {
        match reason {
            DenialReason::SecureProject => AppError::Forbidden(
                "You do not have permission to view this secure project".to_string(),
            ),
            DenialReason::AuthenticationRequired => {
                AppError::Unauthorized("Please log in to view this project".to_string())
            }
            DenialReason::SubscriptionInactive => AppError::Forbidden(
                "Your subscription has expired. Please renew your subscription to access this page"
                    .to_string(),
            ),
        }
    }
}

/// Decides whether a viewer may see a project's details.
///
/// Pure function of (viewer, project, subscription state, date); the only
/// side effect anywhere in the flow is the caller's subscription lookup.
/// Rules, in order: secure projects admit only creator and admins; staff
/// and postgraduate projects admit the creator, then require a signed-in
/// viewer with an active subscription; everything else is open.
pub fn can_view_details(
    viewer: Option<&Viewer>,
    project: &Project,
    subscription: Option<&Subscription>,
    today: NaiveDate,
) -> AccessDecision {
    let is_creator = viewer.is_some_and(|v| v.user_id == project.creator_id);
    let is_admin = viewer.is_some_and(|v| v.is_admin);

    if project.is_secure && !is_creator && !is_admin {
        return AccessDecision::Denied(DenialReason::SecureProject);
    }

    let gated = ProjectOccupation::from_str(&project.occupation)
        .is_some_and(|occupation| occupation.is_gated());

    if gated && !is_creator {
        if viewer.is_none() {
            return AccessDecision::Denied(DenialReason::AuthenticationRequired);
        }
        match subscription {
            Some(sub) if sub.is_active_on(today) => {}
            _ => return AccessDecision::Denied(DenialReason::SubscriptionInactive),
        }
    }

    AccessDecision::Granted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDateTime};

    fn project(creator_id: Uuid, occupation: &str, is_secure: bool) -> Project {
        Project {
            id: Uuid::new_v4(),
            name: "solar-dryer".to_string(),
            title: "Solar Dryer".to_string(),
            description: String::new(),
            email: None,
            github_link: None,
            project_url: None,
            image_path: None,
            date: base_time(),
            creator_id,
            status: "active".to_string(),
            occupation: occupation.to_string(),
            postgraduate_type: None,
            is_secure,
        }
    }

    fn base_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn subscription(user_id: Uuid, days_left: i64) -> Subscription {
        let start = base_time().checked_sub_days(Days::new(10)).unwrap();
        let end = if days_left >= 0 {
            base_time().checked_add_days(Days::new(days_left as u64))
        } else {
            base_time().checked_sub_days(Days::new(days_left.unsigned_abs()))
        };
        Subscription {
            id: Uuid::new_v4(),
            user_id,
            start_date: start,
            end_date: end,
        }
    }

    fn today() -> NaiveDate {
        base_time().date()
    }

    #[test]
    fn secure_project_denies_strangers() {
        let viewer = Viewer {
            user_id: Uuid::new_v4(),
            is_admin: false,
        };
        let project = project(Uuid::new_v4(), "undergraduate", true);

        assert_eq!(
            can_view_details(Some(&viewer), &project, None, today()),
            AccessDecision::Denied(DenialReason::SecureProject)
        );
    }

    #[test]
    fn secure_project_admits_creator_and_admin() {
        let creator = Viewer {
            user_id: Uuid::new_v4(),
            is_admin: false,
        };
        let admin = Viewer {
            user_id: Uuid::new_v4(),
            is_admin: true,
        };
        let project = project(creator.user_id, "undergraduate", true);

        assert_eq!(
            can_view_details(Some(&creator), &project, None, today()),
            AccessDecision::Granted
        );
        assert_eq!(
            can_view_details(Some(&admin), &project, None, today()),
            AccessDecision::Granted
        );
    }

    #[test]
    fn gated_project_admits_creator_without_subscription() {
        let creator = Viewer {
            user_id: Uuid::new_v4(),
            is_admin: false,
        };
        for occupation in ["postgraduate", "staff"] {
            let project = project(creator.user_id, occupation, false);
            assert_eq!(
                can_view_details(Some(&creator), &project, None, today()),
                AccessDecision::Granted
            );
        }
    }

    #[test]
    fn gated_project_requires_login() {
        let project = project(Uuid::new_v4(), "postgraduate", false);

        assert_eq!(
            can_view_details(None, &project, None, today()),
            AccessDecision::Denied(DenialReason::AuthenticationRequired)
        );
    }

    #[test]
    fn gated_project_denies_expired_subscription() {
        let viewer = Viewer {
            user_id: Uuid::new_v4(),
            is_admin: false,
        };
        let project = project(Uuid::new_v4(), "postgraduate", false);
        // ended yesterday
        let expired = subscription(viewer.user_id, -1);

        assert_eq!(
            can_view_details(Some(&viewer), &project, Some(&expired), today()),
            AccessDecision::Denied(DenialReason::SubscriptionInactive)
        );
    }

    #[test]
    fn gated_project_denies_missing_subscription() {
        let viewer = Viewer {
            user_id: Uuid::new_v4(),
            is_admin: false,
        };
        let project = project(Uuid::new_v4(), "staff", false);

        assert_eq!(
            can_view_details(Some(&viewer), &project, None, today()),
            AccessDecision::Denied(DenialReason::SubscriptionInactive)
        );
    }

    #[test]
    fn gated_project_admits_active_subscriber() {
        let viewer = Viewer {
            user_id: Uuid::new_v4(),
            is_admin: false,
        };
        let project = project(Uuid::new_v4(), "staff", false);
        let active = subscription(viewer.user_id, 20);

        assert_eq!(
            can_view_details(Some(&viewer), &project, Some(&active), today()),
            AccessDecision::Granted
        );
    }

    #[test]
    fn subscription_active_through_its_last_day() {
        let viewer = Viewer {
            user_id: Uuid::new_v4(),
            is_admin: false,
        };
        let project = project(Uuid::new_v4(), "postgraduate", false);
        // ends today; the window is inclusive
        let ending = subscription(viewer.user_id, 0);

        assert_eq!(
            can_view_details(Some(&viewer), &project, Some(&ending), today()),
            AccessDecision::Granted
        );
    }

    #[test]
    fn ungated_project_is_open_to_everyone() {
        let project = project(Uuid::new_v4(), "undergraduate", false);

        assert_eq!(
            can_view_details(None, &project, None, today()),
            AccessDecision::Granted
        );
    }
}

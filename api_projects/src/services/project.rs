use common::{
    error::{AppError, Res},
    jwt::JwtClaims,
    misc::{ProjectOccupation, ProjectStatus},
};
use db::models::project::Project;

/// Publishing is reserved for university addresses; admins are exempt.
pub fn require_university_email(claims: &JwtClaims, domain: &str) -> Res<()> {
    if claims.email.ends_with(domain) || claims.is_admin {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "A university email address is required to publish projects".to_string(),
        ))
    }
}

/// Only the creator (or an admin) may modify a project.
pub fn require_owner(project: &Project, claims: &JwtClaims) -> Res<()> {
    if project.creator_id == claims.user_id || claims.is_admin {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Only the project creator can modify this project".to_string(),
        ))
    }
}

pub fn validate_occupation(occupation: &str) -> Res<()> {
    ProjectOccupation::from_str(occupation)
        .map(|_| ())
        .ok_or_else(|| AppError::BadRequest(format!("Unknown occupation: {}", occupation)))
}

pub fn validate_status(status: &str) -> Res<()> {
    ProjectStatus::from_str(status)
        .map(|_| ())
        .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", status)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn claims(email: &str, is_admin: bool) -> JwtClaims {
        JwtClaims {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
            is_admin,
            exp: 0,
        }
    }

    fn project(creator_id: Uuid) -> Project {
        Project {
            id: Uuid::new_v4(),
            name: "p".to_string(),
            title: "P".to_string(),
            description: String::new(),
            email: None,
            github_link: None,
            project_url: None,
            image_path: None,
            date: NaiveDateTime::default(),
            creator_id,
            status: "active".to_string(),
            occupation: "undergraduate".to_string(),
            postgraduate_type: None,
            is_secure: false,
        }
    }

    #[test]
    fn university_domain_is_required_unless_admin() {
        assert!(require_university_email(&claims("jane@jkuat.ac.ke", false), "jkuat.ac.ke").is_ok());
        assert!(require_university_email(&claims("jane@gmail.com", false), "jkuat.ac.ke").is_err());
        assert!(require_university_email(&claims("root@gmail.com", true), "jkuat.ac.ke").is_ok());
    }

    #[test]
    fn only_creator_or_admin_can_modify() {
        let owner = claims("jane@jkuat.ac.ke", false);
        let stranger = claims("joe@jkuat.ac.ke", false);
        let admin = claims("root@jkuat.ac.ke", true);
        let project = project(owner.user_id);

        assert!(require_owner(&project, &owner).is_ok());
        assert!(require_owner(&project, &stranger).is_err());
        assert!(require_owner(&project, &admin).is_ok());
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        assert!(validate_occupation("postgraduate").is_ok());
        assert!(validate_occupation("alumni").is_err());
        assert!(validate_status("completed").is_ok());
        assert!(validate_status("archived").is_err());
    }
}

//! Screens of the job-portal client

use super::group::NavigationGroup;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single view. Each screen belongs to exactly one navigation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    // Unauthenticated
    Landing,
    Login,
    Register,
    Verify,

    // Authenticated: job vacancies
    JobVacancies,
    JobVacancyDetail,

    // Authenticated: job applications
    JobApplications,

    // Authenticated: profile
    Profile,
    UserDetail,
    EditUserDetail,
    EducationDetail,
    CreateEducation,
    EditEducation,
    ExperienceDetail,
    CreateExperience,
    EditExperience,
    AttachmentDetail,
    ChangePassword,
}

impl Screen {
    /// The group this screen is reachable from
    pub fn group(&self) -> NavigationGroup {
        match self {
            Screen::Landing | Screen::Login | Screen::Register | Screen::Verify => {
                NavigationGroup::Unauthenticated
            }
            _ => NavigationGroup::Authenticated,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Job vacancies",
            Screen::Login => "Login",
            Screen::Register => "Register",
            Screen::Verify => "Verify account",
            Screen::JobVacancies => "Job vacancies",
            Screen::JobVacancyDetail => "Job vacancy detail",
            Screen::JobApplications => "Job applications",
            Screen::Profile => "Profile",
            Screen::UserDetail => "Personal details",
            Screen::EditUserDetail => "Edit personal details",
            Screen::EducationDetail => "Education history",
            Screen::CreateEducation => "Add education",
            Screen::EditEducation => "Edit education",
            Screen::ExperienceDetail => "Work experience",
            Screen::CreateExperience => "Add experience",
            Screen::EditExperience => "Edit experience",
            Screen::AttachmentDetail => "Attachments",
            Screen::ChangePassword => "Change password",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

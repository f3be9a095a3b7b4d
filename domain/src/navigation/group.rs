//! Navigation groups gated by the session state

use super::screen::Screen;
use crate::session::SessionState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bottom-tab entry: a label and the stack of screens behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub label: &'static str,
    pub screens: &'static [Screen],
}

const UNAUTHENTICATED_TABS: &[Tab] = &[
    Tab {
        label: "Lowongan Kerja",
        screens: &[Screen::Landing],
    },
    Tab {
        label: "Login",
        screens: &[Screen::Login],
    },
    Tab {
        label: "Daftar",
        screens: &[Screen::Register],
    },
    Tab {
        label: "Verifikasi Akun",
        screens: &[Screen::Verify],
    },
];

const AUTHENTICATED_TABS: &[Tab] = &[
    Tab {
        label: "Job Vacancies",
        screens: &[Screen::JobVacancies, Screen::JobVacancyDetail],
    },
    Tab {
        label: "Job Application",
        screens: &[Screen::JobApplications],
    },
    Tab {
        label: "Profile",
        screens: &[
            Screen::Profile,
            Screen::UserDetail,
            Screen::EditUserDetail,
            Screen::EducationDetail,
            Screen::CreateEducation,
            Screen::EditEducation,
            Screen::ExperienceDetail,
            Screen::CreateExperience,
            Screen::EditExperience,
            Screen::AttachmentDetail,
            Screen::ChangePassword,
        ],
    },
];

/// One of two mutually exclusive screen groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationGroup {
    /// Landing, login, register, verify
    Unauthenticated,
    /// Job vacancies, job applications, profile flows
    Authenticated,
}

impl NavigationGroup {
    /// Choose the group for a session state.
    ///
    /// `Authenticated` iff the state is `LoggedIn`; `Unknown` maps to
    /// `Unauthenticated` so nothing privileged shows before the first check.
    pub fn for_state(state: SessionState) -> Self {
        if state.is_logged_in() {
            NavigationGroup::Authenticated
        } else {
            NavigationGroup::Unauthenticated
        }
    }

    pub fn tabs(&self) -> &'static [Tab] {
        match self {
            NavigationGroup::Unauthenticated => UNAUTHENTICATED_TABS,
            NavigationGroup::Authenticated => AUTHENTICATED_TABS,
        }
    }

    pub fn initial_screen(&self) -> Screen {
        match self {
            NavigationGroup::Unauthenticated => Screen::Landing,
            NavigationGroup::Authenticated => Screen::JobVacancies,
        }
    }

    pub fn contains(&self, screen: Screen) -> bool {
        self.tabs()
            .iter()
            .any(|tab| tab.screens.contains(&screen))
    }

    /// The header logout action only exists for signed-in users
    pub fn shows_logout_action(&self) -> bool {
        matches!(self, NavigationGroup::Authenticated)
    }
}

impl fmt::Display for NavigationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationGroup::Unauthenticated => f.write_str("unauthenticated"),
            NavigationGroup::Authenticated => f.write_str("authenticated"),
        }
    }
}

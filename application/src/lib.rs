//! Application layer for jobseeker
//!
//! This crate contains the session context, the navigation root, the portal
//! use cases and the port definitions they depend on.
//! It depends only on the domain layer.

pub mod config;
pub mod navigation;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::PortalParams;
pub use navigation::NavigationRoot;
pub use ports::{
    alert::{Alert, AlertNotifier, AlertSeverity, NoAlerts},
    job_portal::{JobPortalGateway, PortalError},
    session_store::{SessionStore, StorageError, TOKEN_KEY},
};
pub use session::{LOGOUT_FAILED_MESSAGE, SessionContext};
pub use use_cases::auth::{AuthError, AuthUseCase, VerifyOutcome};
pub use use_cases::profile::{EducationOptions, ExperienceOptions, ProfileError, ProfileUseCase};
pub use use_cases::vacancies::{VacancyError, VacancyUseCase};

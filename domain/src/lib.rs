//! Domain layer for jobseeker
//!
//! This crate contains the session model, the navigation groups that the session
//! gates, and the entities exchanged with the job-portal API.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! - **Session token**: opaque credential persisted by a session store
//! - **Session state**: `Unknown`, `LoggedOut` or `LoggedIn`, derived from token presence
//!
//! ## Navigation
//!
//! - **Navigation group**: the screens reachable for a given session state
//! - **Screen**: a single view inside a group

pub mod config;
pub mod core;
pub mod navigation;
pub mod portal;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use navigation::{NavigationGroup, Screen, Tab};
pub use portal::{
    Attachment, AttachmentUpload, ChangePasswordInput, Education, EducationInput, Experience,
    ExperienceInput, JobApplication, JobVacancy, JobVacancyPage, LoginInput, OptionItem,
    OptionKind, ProfileUpdate, RegisterInput, UserProfile, VerifyInput,
};
pub use session::{SessionState, SessionToken};

//! Runs one CLI command against the use cases.
//!
//! Every command targets a screen. A command whose screen is not in the
//! group the navigation root currently selects is refused before any
//! request is made.

use super::forms::{
    education_input, experience_input, profile_args_complete, profile_update,
};
use crate::cli::commands::{
    AttachmentCommand, Command, EducationCommand, ExperienceCommand, ProfileCommand,
};
use crate::cli::input::{prompt_password, value_or_prompt};
use crate::output::{ConsoleFormatter, Output};
use crate::progress::LoadingIndicator;
use jobseeker_application::{
    Alert, AlertNotifier, AuthError, AuthUseCase, JobPortalGateway, NavigationRoot, PortalParams,
    ProfileError, ProfileUseCase, SessionContext, StorageError, VacancyError, VacancyUseCase,
    VerifyOutcome,
};
use jobseeker_domain::{
    AttachmentUpload, ChangePasswordInput, DomainError, LoginInput, NavigationGroup, OptionKind,
    OutputFormat, RegisterInput, Screen, SessionState, UserProfile, VerifyInput,
};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("`{command}` is not available {hint}")]
    NotAvailable {
        command: &'static str,
        hint: &'static str,
    },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Vacancy(#[from] VacancyError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("{0}")]
    Invalid(#[from] DomainError),

    #[error("Could not read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("Could not read input: {0}")]
    Input(#[from] io::Error),

    /// Already shown to the user by the session context
    #[error("Error logging out")]
    Logout(#[source] StorageError),
}

impl AppError {
    fn already_reported(&self) -> bool {
        matches!(self, AppError::Logout(_))
    }
}

/// What a command needs from the current navigation group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Available in either group
    Anywhere,
    Screen(Screen),
    /// The header logout action
    LogoutAction,
}

/// The target of `command` when `group` is mounted.
pub fn target(command: &Command, group: NavigationGroup) -> Target {
    let screen = match command {
        Command::Status | Command::Options { .. } => return Target::Anywhere,
        Command::Logout => return Target::LogoutAction,
        // Both groups list vacancies: the landing tab or the vacancies tab
        Command::Vacancies { .. } => match group {
            NavigationGroup::Unauthenticated => Screen::Landing,
            NavigationGroup::Authenticated => Screen::JobVacancies,
        },
        Command::Vacancy { .. } | Command::Apply { .. } => Screen::JobVacancyDetail,
        Command::Applications => Screen::JobApplications,
        Command::Register { .. } => Screen::Register,
        Command::Verify { .. } => Screen::Verify,
        Command::Login { .. } => Screen::Login,
        Command::Password => Screen::ChangePassword,
        Command::Profile(ProfileCommand::Show) => Screen::UserDetail,
        Command::Profile(ProfileCommand::Edit(_)) => Screen::EditUserDetail,
        Command::Education(EducationCommand::List) => Screen::EducationDetail,
        Command::Education(EducationCommand::Add(_)) => Screen::CreateEducation,
        Command::Education(EducationCommand::Edit { .. }) => Screen::EditEducation,
        Command::Experience(ExperienceCommand::List | ExperienceCommand::Delete { .. }) => {
            Screen::ExperienceDetail
        }
        Command::Experience(ExperienceCommand::Add(_)) => Screen::CreateExperience,
        Command::Experience(ExperienceCommand::Edit { .. }) => Screen::EditExperience,
        Command::Attachment(_) => Screen::AttachmentDetail,
    };
    Target::Screen(screen)
}

pub fn is_allowed(command: &Command, group: NavigationGroup) -> bool {
    match target(command, group) {
        Target::Anywhere => true,
        Target::Screen(screen) => group.contains(screen),
        Target::LogoutAction => group.shows_logout_action(),
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Status => "status",
        Command::Vacancies { .. } => "vacancies",
        Command::Vacancy { .. } => "vacancy",
        Command::Apply { .. } => "apply",
        Command::Applications => "applications",
        Command::Register { .. } => "register",
        Command::Verify { .. } => "verify",
        Command::Login { .. } => "login",
        Command::Logout => "logout",
        Command::Password => "password",
        Command::Profile(_) => "profile",
        Command::Education(_) => "education",
        Command::Experience(_) => "experience",
        Command::Attachment(_) => "attachment",
        Command::Options { .. } => "options",
    }
}

/// Log line for a refused command. Arguments are left out since they may hold passwords.
fn refusal_message(command: &Command, group: NavigationGroup) -> String {
    format!("Refusing `{}` in the {} group", command_name(command), group)
}

#[derive(Serialize)]
struct StatusView {
    state: SessionState,
    group: NavigationGroup,
    logout_action: bool,
}

/// The command-line application: session, navigation root and use cases
pub struct App {
    session: Arc<SessionContext>,
    root: NavigationRoot,
    auth: AuthUseCase,
    vacancies: VacancyUseCase,
    profile: ProfileUseCase,
    alerts: Arc<dyn AlertNotifier>,
    output: Output,
    loading: LoadingIndicator,
    max_attachment_bytes: u64,
}

impl App {
    pub fn new(
        session: Arc<SessionContext>,
        gateway: Arc<dyn JobPortalGateway>,
        params: PortalParams,
        alerts: Arc<dyn AlertNotifier>,
        output: Output,
        loading: LoadingIndicator,
    ) -> Self {
        let store = session.store().clone();
        let max_attachment_bytes = params.max_attachment_bytes;
        Self {
            root: NavigationRoot::new(&session),
            auth: AuthUseCase::new(gateway.clone(), session.clone()),
            vacancies: VacancyUseCase::new(gateway.clone(), store.clone(), params.clone()),
            profile: ProfileUseCase::new(gateway, store, params),
            session,
            alerts,
            output,
            loading,
            max_attachment_bytes,
        }
    }

    pub fn group(&self) -> NavigationGroup {
        self.root.current()
    }

    /// Run a command and alert on failure.
    pub async fn execute(&mut self, command: Command) -> Result<(), AppError> {
        let result = self.run(command).await;
        if let Err(e) = &result
            && !e.already_reported()
        {
            self.alerts.alert(Alert::error(e.to_string()));
        }
        result
    }

    fn gate(&self, command: &Command) -> Result<(), AppError> {
        let group = self.root.current();
        if is_allowed(command, group) {
            return Ok(());
        }
        debug!("{}", refusal_message(command, group));
        let hint = match group {
            NavigationGroup::Unauthenticated => "until you log in",
            NavigationGroup::Authenticated => "while logged in; run `jobseeker logout` first",
        };
        Err(AppError::NotAvailable {
            command: command_name(command),
            hint,
        })
    }

    /// Print the newly mounted group after a login or logout.
    fn announce_group(&mut self) {
        if let Some(group) = self.root.take_change()
            && self.output.format() == OutputFormat::Text
        {
            print!("{}", ConsoleFormatter::status(self.root.state(), group));
        }
    }

    async fn run(&mut self, command: Command) -> Result<(), AppError> {
        self.gate(&command)?;

        match command {
            Command::Status => {
                let view = StatusView {
                    state: self.root.state(),
                    group: self.root.current(),
                    logout_action: self.root.shows_logout_action(),
                };
                self.output
                    .emit(&view, |v| ConsoleFormatter::status(v.state, v.group));
            }

            // ==================== Vacancies ====================
            Command::Vacancies { page } => {
                let page = self
                    .loading
                    .run("Loading vacancies...", self.vacancies.list(page))
                    .await?;
                self.output.emit(&page, ConsoleFormatter::vacancy_page);
            }
            Command::Vacancy { id } => {
                let vacancy = self
                    .loading
                    .run("Loading vacancy...", self.vacancies.detail(id))
                    .await?;
                self.output.emit(&vacancy, ConsoleFormatter::vacancy_detail);
            }
            Command::Apply { id } => {
                self.loading
                    .run("Applying...", self.vacancies.apply(id))
                    .await?;
                self.output.done("Application submitted");
            }
            Command::Applications => {
                let applications = self
                    .loading
                    .run("Loading applications...", self.vacancies.applications())
                    .await?;
                self.output
                    .emit(&applications, |a| ConsoleFormatter::applications(a));
            }

            // ==================== Account ====================
            Command::Register {
                username,
                email,
                password,
            } => {
                let username = value_or_prompt(username, "Username")?;
                let email = value_or_prompt(email, "Email")?;
                let (password, confirm_password) = match password {
                    Some(password) => (password.clone(), password),
                    None => (
                        prompt_password("Password")?,
                        prompt_password("Confirm password")?,
                    ),
                };
                let input = RegisterInput {
                    username,
                    email,
                    password,
                    confirm_password,
                };
                self.loading
                    .run("Registering...", self.auth.register(&input))
                    .await?;
                self.output
                    .done("Registered. Check your email and verify your account");
            }
            Command::Verify { email, code } => {
                let input = VerifyInput {
                    email: value_or_prompt(email, "Email")?,
                    verification_code: value_or_prompt(code, "Verification code")?,
                };
                let outcome = self
                    .loading
                    .run("Verifying...", self.auth.verify(&input))
                    .await?;
                match outcome {
                    VerifyOutcome::Verified => {
                        self.output.done("Account verified. You can now log in")
                    }
                    VerifyOutcome::SignedIn(_) => {
                        self.output.done("Account verified and logged in");
                        self.announce_group();
                    }
                }
            }
            Command::Login { email, password } => {
                let input = LoginInput {
                    email: value_or_prompt(email, "Email")?,
                    password: match password {
                        Some(password) => password,
                        None => prompt_password("Password")?,
                    },
                };
                let state = self
                    .loading
                    .run("Logging in...", self.auth.login(&input))
                    .await?;
                debug!("Login finished with state {}", state);
                self.output.done("Logged in");
                self.announce_group();
            }
            Command::Logout => {
                self.session
                    .handle_logout()
                    .await
                    .map_err(AppError::Logout)?;
                self.output.done("Logged out");
                self.announce_group();
            }
            Command::Password => {
                let input = ChangePasswordInput {
                    old_password: prompt_password("Old password")?,
                    new_password: prompt_password("New password")?,
                    confirm_password: prompt_password("Confirm new password")?,
                };
                self.loading
                    .run("Changing password...", self.auth.change_password(&input))
                    .await?;
                self.output.done("Password changed");
            }

            // ==================== Profile ====================
            Command::Profile(ProfileCommand::Show) => {
                let profile = self
                    .loading
                    .run("Loading profile...", self.profile.profile())
                    .await?;
                self.output.emit(&profile, ConsoleFormatter::profile);
            }
            Command::Profile(ProfileCommand::Edit(args)) => {
                let current = if profile_args_complete(&args) {
                    UserProfile::default()
                } else {
                    self.loading
                        .run("Loading profile...", self.profile.profile())
                        .await?
                };
                let update = profile_update(args, &current)?;
                self.loading
                    .run("Saving profile...", self.profile.update_profile(&update))
                    .await?;
                self.output.done("Profile updated");
            }

            Command::Education(EducationCommand::List) => {
                let educations = self
                    .loading
                    .run("Loading education...", self.profile.educations())
                    .await?;
                self.output
                    .emit(&educations, |e| ConsoleFormatter::educations(e));
            }
            Command::Education(EducationCommand::Add(args)) => {
                let options = self
                    .loading
                    .run("Loading options...", self.profile.education_options())
                    .await?;
                let input = education_input(args, &options)?;
                self.loading
                    .run("Saving education...", self.profile.create_education(&input))
                    .await?;
                self.output.done("Education added");
            }
            Command::Education(EducationCommand::Edit { id, fields }) => {
                let options = self
                    .loading
                    .run("Loading options...", self.profile.education_options())
                    .await?;
                let input = education_input(fields, &options)?;
                self.loading
                    .run(
                        "Saving education...",
                        self.profile.update_education(id, &input),
                    )
                    .await?;
                self.output.done("Education updated");
            }

            Command::Experience(ExperienceCommand::List) => {
                let experiences = self
                    .loading
                    .run("Loading experience...", self.profile.experiences())
                    .await?;
                self.output
                    .emit(&experiences, |e| ConsoleFormatter::experiences(e));
            }
            Command::Experience(ExperienceCommand::Add(args)) => {
                let options = self
                    .loading
                    .run("Loading options...", self.profile.experience_options())
                    .await?;
                let input = experience_input(args, &options)?;
                self.loading
                    .run("Saving experience...", self.profile.create_experience(input))
                    .await?;
                self.output.done("Experience added");
            }
            Command::Experience(ExperienceCommand::Edit { id, fields }) => {
                let options = self
                    .loading
                    .run("Loading options...", self.profile.experience_options())
                    .await?;
                let input = experience_input(fields, &options)?;
                self.loading
                    .run(
                        "Saving experience...",
                        self.profile.update_experience(id, input),
                    )
                    .await?;
                self.output.done("Experience updated");
            }
            Command::Experience(ExperienceCommand::Delete { id }) => {
                self.loading
                    .run("Deleting experience...", self.profile.delete_experience(id))
                    .await?;
                self.output.done("Experience deleted");
            }

            Command::Attachment(AttachmentCommand::List) => {
                let attachments = self
                    .loading
                    .run("Loading attachments...", self.profile.attachments())
                    .await?;
                self.output
                    .emit(&attachments, |a| ConsoleFormatter::attachments(a));
            }
            Command::Attachment(AttachmentCommand::Upload {
                document_type,
                file,
            }) => {
                let read_error = |source: io::Error| AppError::ReadFile {
                    path: file.clone(),
                    source,
                };
                // Reject oversized files before they are read into memory
                let size = tokio::fs::metadata(&file).await.map_err(read_error)?.len();
                if size > self.max_attachment_bytes {
                    return Err(DomainError::AttachmentTooLarge {
                        size,
                        limit: self.max_attachment_bytes,
                    }
                    .into());
                }
                let types = self
                    .loading
                    .run(
                        "Loading document types...",
                        self.profile.options(OptionKind::DocumentTypes),
                    )
                    .await?;
                let type_id = ProfileUseCase::resolve_option(
                    OptionKind::DocumentTypes,
                    &types,
                    &document_type,
                )?;
                let bytes = tokio::fs::read(&file).await.map_err(read_error)?;
                let file_name = file
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let upload = AttachmentUpload::new(type_id, file_name, bytes)?;
                self.loading
                    .run("Uploading...", self.profile.upload_attachment(&upload))
                    .await?;
                self.output.done("Attachment uploaded");
            }
            Command::Attachment(AttachmentCommand::Delete { id }) => {
                self.loading
                    .run("Deleting attachment...", self.profile.delete_attachment(id))
                    .await?;
                self.output.done("Attachment deleted");
            }

            Command::Options { kind } => {
                let items = self
                    .loading
                    .run("Loading options...", self.profile.options(kind))
                    .await?;
                self.output
                    .emit(&items, |items| ConsoleFormatter::options(kind, items));
            }
        }

        Ok(())
    }
}

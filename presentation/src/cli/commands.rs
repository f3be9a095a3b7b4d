//! CLI command definitions

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for jobseeker_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => jobseeker_domain::OutputFormat::Text,
            OutputFormat::Json => jobseeker_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for jobseeker
#[derive(Parser, Debug)]
#[command(name = "jobseeker")]
#[command(author, version, about = "Job portal client - browse vacancies, apply and manage your profile")]
#[command(long_about = r#"
jobseeker talks to the job portal API on your behalf.

Without a session you can browse vacancies, register, verify your account
and log in. After logging in, applying, your applications and your profile
become available and the public screens are hidden until you log out.

Configuration files are loaded from (in priority order):
1. JOBSEEKER_* environment variables (e.g. JOBSEEKER_API__BASE_URL)
2. --config <path>          Explicit config file
3. ./jobseeker.toml         Project-level config
4. ~/.config/jobseeker/config.toml   Global config

Example:
  jobseeker vacancies --page 2
  jobseeker login --email budi@example.com
  jobseeker apply 42
  jobseeker experience add --title "Backend Engineer" --employment-type "Full Time" ...
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the loading spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the session state and the screens currently available
    Status,

    /// List job vacancies
    Vacancies {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Show one job vacancy
    Vacancy { id: u64 },

    /// Apply for a job vacancy
    Apply { id: u64 },

    /// List the vacancies you applied for
    Applications,

    /// Create an account
    Register {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Verify an account with the code sent by email
    Verify {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        code: Option<String>,
    },

    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: Option<String>,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Delete the stored session token
    Logout,

    /// Change your password
    Password,

    /// Personal details
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Education history
    #[command(subcommand)]
    Education(EducationCommand),

    /// Work experience
    #[command(subcommand)]
    Experience(ExperienceCommand),

    /// Profile attachments (CV, certificates, ...)
    #[command(subcommand)]
    Attachment(AttachmentCommand),

    /// Show a pick-list (education-levels, years, months, employee-types, document-types)
    Options {
        kind: jobseeker_domain::OptionKind,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProfileCommand {
    /// Show personal details
    Show,
    /// Update personal details; omitted fields keep their current value
    Edit(ProfileArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub username: Option<String>,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub dob: Option<NaiveDate>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum EducationCommand {
    /// List education history
    List,
    /// Add an education entry
    Add(EducationArgs),
    /// Replace an education entry
    Edit {
        id: u64,
        #[command(flatten)]
        fields: EducationArgs,
    },
}

/// Option-backed fields accept the display value or the option id.
#[derive(Args, Debug, Clone)]
pub struct EducationArgs {
    /// School or university
    #[arg(long)]
    pub institution: String,
    /// Education level, e.g. "S1"
    #[arg(long)]
    pub level: String,
    #[arg(long)]
    pub grade: String,
    /// Field of study
    #[arg(long)]
    pub field: String,
    #[arg(long)]
    pub start_year: String,
    #[arg(long)]
    pub start_month: String,
    #[arg(long)]
    pub end_year: String,
    #[arg(long)]
    pub end_month: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ExperienceCommand {
    /// List work experience
    List,
    /// Add a work experience entry
    Add(ExperienceArgs),
    /// Replace a work experience entry
    Edit {
        id: u64,
        #[command(flatten)]
        fields: ExperienceArgs,
    },
    /// Delete a work experience entry
    Delete { id: u64 },
}

#[derive(Args, Debug, Clone)]
pub struct ExperienceArgs {
    /// Job title
    #[arg(long)]
    pub title: String,
    /// Employment type, e.g. "Full Time"
    #[arg(long)]
    pub employment_type: String,
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub location: String,
    /// Still working here (end date is ignored)
    #[arg(long)]
    pub still_active: bool,
    #[arg(long)]
    pub start_year: String,
    #[arg(long)]
    pub start_month: String,
    #[arg(long)]
    pub end_year: Option<String>,
    #[arg(long)]
    pub end_month: Option<String>,
    /// What you did
    #[arg(long)]
    pub description: String,
    /// Skills used
    #[arg(long)]
    pub skills: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AttachmentCommand {
    /// List uploaded attachments
    List,
    /// Upload a PDF or image
    Upload {
        /// Document type, e.g. "CV"
        #[arg(long = "type")]
        document_type: String,
        file: PathBuf,
    },
    /// Delete an attachment
    Delete { id: u64 },
}

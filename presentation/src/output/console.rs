//! Console output formatter for portal data

use colored::Colorize;
use jobseeker_domain::core::string::truncate;
use jobseeker_domain::{
    Attachment, Education, Experience, JobApplication, JobVacancy, JobVacancyPage,
    NavigationGroup, OptionItem, OptionKind, OutputFormat, SessionState, UserProfile,
};
use serde::Serialize;

const TITLE_WIDTH: usize = 40;

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// Formats portal data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn status(state: SessionState, group: NavigationGroup) -> String {
        let mut output = String::new();
        let label = if state.is_logged_in() {
            "logged in".green().bold()
        } else {
            "not logged in".yellow().bold()
        };
        output.push_str(&format!("{} {}\n", "Session:".cyan().bold(), label));
        output.push_str(&format!("{} {}\n", "Screens:".cyan().bold(), group));
        for tab in group.tabs() {
            let screens: Vec<&str> = tab.screens.iter().map(|s| s.title()).collect();
            output.push_str(&format!(
                "  {} {}\n",
                tab.label.bold(),
                format!("({})", screens.join(", ")).dimmed()
            ));
        }
        if group.shows_logout_action() {
            output.push_str(&format!("{}\n", "Run `jobseeker logout` to sign out.".dimmed()));
        }
        output
    }

    pub fn vacancy_page(page: &JobVacancyPage) -> String {
        let mut output = Self::header("Lowongan Kerja");
        if page.job_vacancies.is_empty() {
            output.push_str("No vacancies on this page.\n");
        }
        for vacancy in &page.job_vacancies {
            output.push_str(&format!(
                "{:>5}  {:<width$}  {}\n",
                format!("#{}", vacancy.id).dimmed(),
                truncate(&vacancy.job_title, TITLE_WIDTH).as_str().bold(),
                or_dash(&vacancy.location),
                width = TITLE_WIDTH
            ));
        }

        let mut nav = format!("Page {} of {}", page.page, page.total_pages);
        if page.has_previous() {
            nav.push_str(&format!("  [prev: --page {}]", page.page - 1));
        }
        if page.has_next() {
            nav.push_str(&format!("  [next: --page {}]", page.page + 1));
        }
        output.push_str(&format!("\n{}\n", nav.dimmed()));
        output
    }

    pub fn vacancy_detail(vacancy: &JobVacancy) -> String {
        let mut output = Self::header(&vacancy.job_title);
        let rows = [
            ("Location", vacancy.location.clone()),
            ("Employment", vacancy.employee_type.clone()),
            ("Education", vacancy.education_type.clone()),
            ("Specialization", vacancy.job_specialization.clone()),
            ("Gender", vacancy.gender.clone()),
            ("Age", vacancy.age.clone()),
            (
                "Published",
                vacancy.published_on().map(|d| d.format("%d %B %Y").to_string()),
            ),
            (
                "Closes",
                vacancy.closes_on().map(|d| d.format("%d %B %Y").to_string()),
            ),
        ];
        for (label, value) in rows {
            output.push_str(&Self::row(label, or_dash(&value)));
        }
        output.push_str(&format!(
            "\n{}\n",
            format!("Apply with `jobseeker apply {}`", vacancy.id).dimmed()
        ));
        output
    }

    pub fn applications(applications: &[JobApplication]) -> String {
        let mut output = Self::header("Job Application");
        if applications.is_empty() {
            output.push_str("You have not applied for any vacancy yet.\n");
        }
        for application in applications {
            output.push_str(&format!(
                "{:>5}  {:<width$}  {}\n",
                format!("#{}", application.id).dimmed(),
                truncate(or_dash(&application.job_title), TITLE_WIDTH),
                or_dash(&application.status).yellow(),
                width = TITLE_WIDTH
            ));
        }
        output
    }

    pub fn profile(profile: &UserProfile) -> String {
        let mut output = Self::header("Profile");
        let dob = profile
            .date_of_birth()
            .map(|d| d.format("%Y-%m-%d").to_string());
        output.push_str(&Self::row("Username", or_dash(&profile.username)));
        output.push_str(&Self::row("Email", or_dash(&profile.email)));
        output.push_str(&Self::row("Date of birth", or_dash(&dob)));
        output.push_str(&Self::row("Address", or_dash(&profile.address)));
        output.push_str(&Self::row("Phone", or_dash(&profile.phone)));
        output
    }

    pub fn educations(educations: &[Education]) -> String {
        let mut output = Self::header("Education");
        if educations.is_empty() {
            output.push_str("No education history yet.\n");
        }
        for education in educations {
            output.push_str(&format!(
                "{} {} {}\n",
                format!("#{}", education.id).dimmed(),
                or_dash(&education.title_education).bold(),
                format!("({})", or_dash(&education.education_type)).dimmed()
            ));
            output.push_str(&format!(
                "    {}, grade {}\n    {}\n",
                or_dash(&education.education_field_study),
                or_dash(&education.education_grade),
                education.period()
            ));
        }
        output
    }

    pub fn experiences(experiences: &[Experience]) -> String {
        let mut output = Self::header("Experience");
        if experiences.is_empty() {
            output.push_str("No work experience yet.\n");
        }
        for experience in experiences {
            output.push_str(&format!(
                "{} {} at {}\n",
                format!("#{}", experience.id).dimmed(),
                or_dash(&experience.title).bold(),
                or_dash(&experience.company_name)
            ));
            output.push_str(&format!(
                "    {}, {}\n    {}\n",
                or_dash(&experience.employee_type),
                or_dash(&experience.location),
                experience.period()
            ));
            if let Some(skills) = &experience.desc_skill {
                output.push_str(&format!("    {} {}\n", "Skills:".dimmed(), skills));
            }
        }
        output
    }

    pub fn attachments(attachments: &[Attachment]) -> String {
        let mut output = Self::header("Attachments");
        if attachments.is_empty() {
            output.push_str("No attachments uploaded.\n");
        }
        for attachment in attachments {
            output.push_str(&format!(
                "{:>5}  {:<20}  {}\n",
                format!("#{}", attachment.id).dimmed(),
                or_dash(&attachment.document_type),
                or_dash(&attachment.url).underline()
            ));
        }
        output
    }

    pub fn options(kind: OptionKind, items: &[OptionItem]) -> String {
        let mut output = Self::header(kind.path());
        for item in items {
            output.push_str(&format!("{:>5}  {}\n", item.id.to_string().dimmed(), item.param_data));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn row(label: &str, value: &str) -> String {
        format!("{:<16}{}\n", format!("{}:", label).cyan(), value)
    }
}

/// Prints results as text or JSON according to the configured format
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Print `value` as pretty JSON, or the text `render` produces.
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, render: impl FnOnce(&T) -> String) {
        match self.format {
            OutputFormat::Json => println!("{}", Self::to_json(value)),
            OutputFormat::Text => print!("{}", render(value)),
        }
    }

    /// Print a short confirmation; JSON mode emits `{"ok": true, "message": ...}`.
    pub fn done(&self, message: &str) {
        match self.format {
            OutputFormat::Json => println!(
                "{}",
                Self::to_json(&serde_json::json!({"ok": true, "message": message}))
            ),
            OutputFormat::Text => println!("{} {}", "v".green(), message),
        }
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

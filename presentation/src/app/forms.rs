//! Turning command-line fields into portal request bodies

use crate::cli::commands::{EducationArgs, ExperienceArgs, ProfileArgs};
use jobseeker_application::{EducationOptions, ExperienceOptions, ProfileError, ProfileUseCase};
use jobseeker_domain::{
    DomainError, EducationInput, ExperienceInput, OptionItem, OptionKind, ProfileUpdate,
    UserProfile,
};

/// Fill omitted fields from the current profile, like the edit form does.
pub(crate) fn profile_update(
    args: ProfileArgs,
    current: &UserProfile,
) -> Result<ProfileUpdate, DomainError> {
    let dob = args
        .dob
        .or_else(|| current.date_of_birth())
        .ok_or_else(|| DomainError::missing("date of birth"))?;
    Ok(ProfileUpdate {
        username: args
            .username
            .or_else(|| current.username.clone())
            .unwrap_or_default(),
        dob,
        address: args
            .address
            .or_else(|| current.address.clone())
            .unwrap_or_default(),
        phone: args
            .phone
            .or_else(|| current.phone.clone())
            .unwrap_or_default(),
    })
}

/// Whether every profile field was given on the command line
pub(crate) fn profile_args_complete(args: &ProfileArgs) -> bool {
    args.username.is_some() && args.dob.is_some() && args.address.is_some() && args.phone.is_some()
}

pub(crate) fn education_input(
    args: EducationArgs,
    options: &EducationOptions,
) -> Result<EducationInput, ProfileError> {
    let resolve = ProfileUseCase::resolve_option;
    Ok(EducationInput {
        education_type: resolve(OptionKind::EducationLevels, &options.levels, &args.level)?,
        year_education_start: resolve(OptionKind::Years, &options.years, &args.start_year)?,
        month_education_start: resolve(OptionKind::Months, &options.months, &args.start_month)?,
        year_education_end: resolve(OptionKind::Years, &options.years, &args.end_year)?,
        month_education_end: resolve(OptionKind::Months, &options.months, &args.end_month)?,
        title_education: args.institution,
        education_grade: args.grade,
        education_field_study: args.field,
    })
}

pub(crate) fn experience_input(
    args: ExperienceArgs,
    options: &ExperienceOptions,
) -> Result<ExperienceInput, ProfileError> {
    let resolve = ProfileUseCase::resolve_option;
    let optional = |kind: OptionKind, items: &[OptionItem], value: &Option<String>| match value {
        Some(value) if !args.still_active => resolve(kind, items, value).map(Some),
        _ => Ok(None),
    };

    Ok(ExperienceInput {
        employee_type: resolve(
            OptionKind::EmployeeTypes,
            &options.employee_types,
            &args.employment_type,
        )?,
        start_year_experience: resolve(OptionKind::Years, &options.years, &args.start_year)?,
        start_month_experience: resolve(OptionKind::Months, &options.months, &args.start_month)?,
        end_year_experience: optional(OptionKind::Years, &options.years, &args.end_year)?,
        end_month_experience: optional(OptionKind::Months, &options.months, &args.end_month)?,
        still_active: args.still_active,
        title: args.title,
        company_name: args.company,
        location: args.location,
        desc_experience: args.description,
        desc_skill: args.skills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(id: u64, value: &str) -> OptionItem {
        OptionItem {
            id,
            param_data: value.into(),
        }
    }

    fn years_and_months() -> (Vec<OptionItem>, Vec<OptionItem>) {
        (
            vec![item(10, "2015"), item(11, "2016")],
            vec![item(1, "Januari"), item(2, "Februari")],
        )
    }

    #[test]
    fn test_profile_update_merges_current_values() {
        let current = UserProfile {
            username: Some("budi".into()),
            dob: Some("1995-04-12T00:00:00.000Z".into()),
            address: Some("Jl. Sudirman 1".into()),
            phone: Some("08123456789".into()),
            ..UserProfile::default()
        };
        let args = ProfileArgs {
            phone: Some("08999999999".into()),
            ..ProfileArgs::default()
        };

        let update = profile_update(args, &current).unwrap();

        assert_eq!(update.username, "budi");
        assert_eq!(update.dob, NaiveDate::from_ymd_opt(1995, 4, 12).unwrap());
        assert_eq!(update.phone, "08999999999");
    }

    #[test]
    fn test_profile_update_needs_dob() {
        let err = profile_update(ProfileArgs::default(), &UserProfile::default()).unwrap_err();
        assert!(matches!(err, DomainError::MissingField { .. }));
    }

    #[test]
    fn test_education_input_resolves_names_and_ids() {
        let (years, months) = years_and_months();
        let options = EducationOptions {
            levels: vec![item(3, "S1")],
            years,
            months,
        };
        let args = EducationArgs {
            institution: "Universitas Indonesia".into(),
            level: "s1".into(),
            grade: "3.6".into(),
            field: "Computer Science".into(),
            start_year: "2015".into(),
            start_month: "Februari".into(),
            end_year: "11".into(),
            end_month: "1".into(),
        };

        let input = education_input(args, &options).unwrap();

        assert_eq!(input.education_type, 3);
        assert_eq!(input.year_education_start, 10);
        assert_eq!(input.month_education_start, 2);
        assert_eq!(input.year_education_end, 11);
        assert_eq!(input.month_education_end, 1);
    }

    fn experience_args(still_active: bool) -> ExperienceArgs {
        ExperienceArgs {
            title: "Backend Engineer".into(),
            employment_type: "Full Time".into(),
            company: "PT Maju".into(),
            location: "Jakarta".into(),
            still_active,
            start_year: "2015".into(),
            start_month: "Januari".into(),
            end_year: Some("2016".into()),
            end_month: Some("Februari".into()),
            description: "APIs".into(),
            skills: "Rust".into(),
        }
    }

    #[test]
    fn test_experience_input_ignores_end_when_active() {
        let (years, months) = years_and_months();
        let options = ExperienceOptions {
            employee_types: vec![item(1, "Full Time")],
            years,
            months,
        };

        let active = experience_input(experience_args(true), &options).unwrap();
        assert_eq!(active.end_year_experience, None);

        let finished = experience_input(experience_args(false), &options).unwrap();
        assert_eq!(finished.end_year_experience, Some(11));
        assert_eq!(finished.end_month_experience, Some(2));
    }

    #[test]
    fn test_unknown_option_is_reported() {
        let (years, months) = years_and_months();
        let options = ExperienceOptions {
            employee_types: vec![item(1, "Full Time")],
            years,
            months,
        };
        let args = ExperienceArgs {
            employment_type: "Freelance".into(),
            ..experience_args(false)
        };

        let err = experience_input(args, &options).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::UnknownOption {
                kind: OptionKind::EmployeeTypes,
                ..
            }
        ));
    }
}

//! Pick-list options served by `/options/*`

use super::lenient;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which option list to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionKind {
    EducationLevels,
    Years,
    Months,
    EmployeeTypes,
    DocumentTypes,
}

impl OptionKind {
    pub const ALL: [OptionKind; 5] = [
        OptionKind::EducationLevels,
        OptionKind::Years,
        OptionKind::Months,
        OptionKind::EmployeeTypes,
        OptionKind::DocumentTypes,
    ];

    /// Path segment under `/options/`
    pub fn path(&self) -> &'static str {
        match self {
            OptionKind::EducationLevels => "education-levels",
            OptionKind::Years => "years",
            OptionKind::Months => "months",
            OptionKind::EmployeeTypes => "employee-types",
            OptionKind::DocumentTypes => "document-types",
        }
    }

    /// Key of the list inside the response `data` object
    pub fn data_key(&self) -> &'static str {
        match self {
            OptionKind::EducationLevels => "educationLevels",
            OptionKind::Years => "years",
            OptionKind::Months => "months",
            OptionKind::EmployeeTypes => "employeeTypes",
            OptionKind::DocumentTypes => "documentTypes",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for OptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        OptionKind::ALL
            .into_iter()
            .find(|kind| kind.path() == normalized)
            .ok_or_else(|| {
                let valid: Vec<_> = OptionKind::ALL.iter().map(|k| k.path()).collect();
                format!("unknown option list '{}' (expected one of: {})", s, valid.join(", "))
            })
    }
}

/// A single `{id, param_data}` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::required_text")]
    pub param_data: String,
}

impl OptionItem {
    /// Find the entry whose display value matches, case-insensitively.
    pub fn find_by_value<'a>(items: &'a [OptionItem], value: &str) -> Option<&'a OptionItem> {
        let value = value.trim();
        items
            .iter()
            .find(|item| item.param_data.trim().eq_ignore_ascii_case(value))
    }

    /// Resolve user input: display value first, then numeric id.
    pub fn resolve<'a>(items: &'a [OptionItem], query: &str) -> Option<&'a OptionItem> {
        Self::find_by_value(items, query).or_else(|| {
            let id: u64 = query.trim().parse().ok()?;
            items.iter().find(|item| item.id == id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months() -> Vec<OptionItem> {
        vec![
            OptionItem {
                id: 1,
                param_data: "Januari".into(),
            },
            OptionItem {
                id: 2,
                param_data: "Februari".into(),
            },
        ]
    }

    #[test]
    fn test_kind_paths_and_keys() {
        assert_eq!(OptionKind::EducationLevels.path(), "education-levels");
        assert_eq!(OptionKind::EducationLevels.data_key(), "educationLevels");
        assert_eq!(OptionKind::DocumentTypes.data_key(), "documentTypes");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "employee_types".parse::<OptionKind>().unwrap(),
            OptionKind::EmployeeTypes
        );
        assert!("colors".parse::<OptionKind>().is_err());
    }

    #[test]
    fn test_resolve_by_value_then_id() {
        let items = months();
        assert_eq!(OptionItem::resolve(&items, "februari").unwrap().id, 2);
        assert_eq!(OptionItem::resolve(&items, "1").unwrap().param_data, "Januari");
        assert!(OptionItem::resolve(&items, "Maret").is_none());
    }

    #[test]
    fn test_value_match_wins_over_id() {
        let years = vec![
            OptionItem {
                id: 2019,
                param_data: "2020".into(),
            },
            OptionItem {
                id: 7,
                param_data: "2019".into(),
            },
        ];
        assert_eq!(OptionItem::resolve(&years, "2019").unwrap().id, 7);
    }
}

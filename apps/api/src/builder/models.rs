use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_WORK_EXPERIENCES: usize = 10;
pub const MAX_EDUCATION_ENTRIES: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub graduation_year: String,
    pub gpa: String,
}

/// The structured record produced by the builder form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub professional_summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

impl ResumeRecord {
    /// Checks form limits and tidies the skill list. Returns a message suitable
    /// for a validation error.
    pub fn normalized(mut self) -> Result<Self, String> {
        if self.personal_info.full_name.trim().is_empty() {
            return Err("personal_info.full_name cannot be empty".to_string());
        }
        if self.work_experience.len() > MAX_WORK_EXPERIENCES {
            return Err(format!(
                "at most {MAX_WORK_EXPERIENCES} work experiences are allowed"
            ));
        }
        if self.education.len() > MAX_EDUCATION_ENTRIES {
            return Err(format!(
                "at most {MAX_EDUCATION_ENTRIES} education entries are allowed"
            ));
        }

        self.skills = self
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Ok(self)
    }
}

/// A saved record. The generated id is the storage key, so two people with
/// the same name never overwrite each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResume {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume: ResumeRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ResumeRecord {
        ResumeRecord {
            personal_info: PersonalInfo {
                full_name: name.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert!(named("  ").normalized().is_err());
    }

    #[test]
    fn test_skills_are_trimmed_and_blanks_dropped() {
        let mut record = named("Jane Doe");
        record.skills = vec![" Rust ".into(), "".into(), "  ".into(), "SQL".into()];
        let record = record.normalized().unwrap();
        assert_eq!(record.skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_entry_limits() {
        let mut record = named("Jane Doe");
        record.work_experience = vec![WorkExperience::default(); MAX_WORK_EXPERIENCES + 1];
        assert!(record.normalized().unwrap_err().contains("work experiences"));

        let mut record = named("Jane Doe");
        record.education = vec![Education::default(); MAX_EDUCATION_ENTRIES];
        assert!(record.normalized().is_ok());
    }

    #[test]
    fn test_partial_form_deserializes_with_defaults() {
        let json = r#"{"personal_info": {"full_name": "Jane Doe"}, "skills": ["Rust"]}"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.personal_info.full_name, "Jane Doe");
        assert!(record.personal_info.email.is_empty());
        assert!(record.work_experience.is_empty());
    }
}

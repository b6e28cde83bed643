use serde::{Deserialize, Serialize};

use crate::pkg::internal::{
    adaptors::EntityRecord,
    forms::{FieldErrors, Rules, ValidateDraft},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(flatten)]
    pub draft: JobDraft,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_link: String,
    #[serde(default)]
    pub job_location: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub job_requirement: String,
    #[serde(default)]
    pub job_experience_level: String,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(default)]
    pub job_salary_range: String,
    #[serde(default)]
    pub job_status: String,
    /// Set by picking a suggestion from the company autocomplete, never
    /// free text.
    #[serde(default)]
    pub company_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    None,
    FullTime,
    PartTime,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::None,
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
    ];

    pub fn parse(value: &str) -> Option<JobType> {
        match value {
            "" | "none" => Some(JobType::None),
            "full-time" => Some(JobType::FullTime),
            "part-time" => Some(JobType::PartTime),
            "contract" => Some(JobType::Contract),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::None => "none",
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::None => "None",
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
        }
    }
}

impl EntityRecord for Job {
    type Draft = JobDraft;

    const SEGMENT: &'static str = "job";
    const NOUN: &'static str = "Job";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_parts(id: String, draft: JobDraft) -> Self {
        Job { id, draft }
    }

    fn into_parts(self) -> (String, JobDraft) {
        (self.id, self.draft)
    }
}

impl ValidateDraft for JobDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        Rules::field(&mut errors, "jobTitle", &self.job_title)
            .required("Job title is required")
            .max_len(100);
        Rules::field(&mut errors, "jobLink", &self.job_link)
            .required("Job URL is required")
            .max_len(150)
            .absolute_url();
        Rules::field(&mut errors, "jobLocation", &self.job_location).max_len(255);
        Rules::field(&mut errors, "jobDescription", &self.job_description).max_len(100);
        Rules::field(&mut errors, "jobRequirement", &self.job_requirement).max_len(150);
        Rules::field(&mut errors, "jobExperienceLevel", &self.job_experience_level).max_len(255);
        Rules::field(&mut errors, "jobSalaryRange", &self.job_salary_range).max_len(50);
        Rules::field(&mut errors, "jobStatus", &self.job_status).max_len(255);
        Rules::field(&mut errors, "companyId", &self.company_id)
            .required("Related company is required");
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> JobDraft {
        JobDraft {
            job_title: "Backend Engineer".into(),
            job_link: "https://acme.example/jobs/42".into(),
            job_type: JobType::FullTime,
            company_id: "c-1".into(),
            ..JobDraft::default()
        }
    }

    #[test]
    fn job_type_serializes_kebab_case() {
        let body = serde_json::to_value(draft()).unwrap();
        assert_eq!(body["jobType"], "full-time");
        assert_eq!(body["companyId"], "c-1");
    }

    #[test]
    fn job_type_parse_covers_every_variant() {
        for job_type in JobType::ALL {
            assert_eq!(JobType::parse(job_type.as_str()), Some(job_type));
        }
        assert_eq!(JobType::parse(""), Some(JobType::None));
        assert_eq!(JobType::parse("freelance"), None);
    }

    #[test]
    fn company_must_come_from_a_selection() {
        let mut d = draft();
        d.company_id.clear();
        assert_eq!(
            d.validate().get("companyId"),
            Some("Related company is required")
        );
    }

    #[test]
    fn link_without_scheme_fails_validation() {
        let mut d = draft();
        d.job_link = "acme.example/jobs/42".into();
        assert_eq!(
            d.validate().get("jobLink"),
            Some("Please input valid(full url with https:// or http://) URL")
        );
    }

    #[test]
    fn optional_fields_respect_their_bounds() {
        let mut d = draft();
        d.job_description = "x".repeat(101);
        d.job_salary_range = "y".repeat(51);
        let errors = d.validate();
        assert_eq!(
            errors.get("jobDescription"),
            Some("Please input characters less than 100")
        );
        assert_eq!(
            errors.get("jobSalaryRange"),
            Some("Please input characters less than 50")
        );
    }
}

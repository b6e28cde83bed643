use askama::Template;

use crate::pkg::internal::{
    adaptors::{
        applications::ApplicationRow,
        companies::{Company, CompanyDraft},
        jobs::{Job, JobDraft, JobType},
    },
    forms::FieldErrors,
    views::{
        list::ListState,
        notify::Notices,
        upsert::{FormMode, UpsertForm},
    },
};

pub struct NoticeView {
    pub severity: &'static str,
    pub message: String,
}

fn notice_views(notices: &Notices) -> Vec<NoticeView> {
    notices
        .iter()
        .map(|notice| NoticeView {
            severity: notice.severity.as_str(),
            message: notice.message.clone(),
        })
        .collect()
}

pub struct FieldView {
    pub value: String,
    pub error: String,
}

impl FieldView {
    fn new(value: &str, errors: &FieldErrors, field: &str) -> Self {
        FieldView {
            value: value.to_string(),
            error: errors.message(field),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home {
    pub service: &'static str,
    pub notices: Vec<NoticeView>,
}

// ---- companies ----

pub struct CompanyRowView {
    pub id: String,
    pub company_name: String,
    pub recruiter_name: String,
    pub rate: u8,
}

pub struct CompanyFormView {
    pub title: &'static str,
    pub action: String,
    pub cancel: String,
    pub submit: &'static str,
    pub company_name: FieldView,
    pub company_url: FieldView,
    pub company_address: FieldView,
    pub recruiter_name: FieldView,
    pub recruiter_email: FieldView,
    pub recruiter_number: FieldView,
    pub rate: u8,
    pub rate_error: String,
}

impl CompanyFormView {
    fn new(form: &UpsertForm<Company>) -> Self {
        let draft = form.draft();
        let errors = form.errors();
        let (title, action, cancel, submit) = match form.mode() {
            FormMode::Create => (
                "Add Company",
                "/company/create".to_string(),
                "/company".to_string(),
                "Add",
            ),
            FormMode::Update { id } => (
                "Update Company",
                format!("/company/{id}"),
                format!("/company/{id}"),
                "Update",
            ),
        };
        CompanyFormView {
            title,
            action,
            cancel,
            submit,
            company_name: FieldView::new(&draft.company_name, errors, "companyName"),
            company_url: FieldView::new(&draft.company_url, errors, "companyURL"),
            company_address: FieldView::new(&draft.company_address, errors, "companyAddress"),
            recruiter_name: FieldView::new(&draft.recruiter_name, errors, "recruiterName"),
            recruiter_email: FieldView::new(&draft.recruiter_email, errors, "recruiterEmail"),
            recruiter_number: FieldView::new(&draft.recruiter_number, errors, "recruiterNumber"),
            rate: draft.rate,
            rate_error: errors.message("rate"),
        }
    }
}

#[derive(Template)]
#[template(path = "company_list.html")]
pub struct CompanyListPage {
    pub notices: Vec<NoticeView>,
    pub loading: bool,
    pub empty: bool,
    pub rows: Vec<CompanyRowView>,
    pub reload: u64,
    pub show_form: bool,
    pub form: CompanyFormView,
}

impl CompanyListPage {
    pub fn new(
        state: &ListState<Company>,
        notices: &Notices,
        reload: u64,
        show_form: bool,
        form: &UpsertForm<Company>,
    ) -> Self {
        let rows = match state {
            ListState::Populated(companies) => companies
                .iter()
                .map(|company| CompanyRowView {
                    id: company.id.clone(),
                    company_name: company.draft.company_name.clone(),
                    recruiter_name: company.draft.recruiter_name.clone(),
                    rate: company.draft.rate,
                })
                .collect(),
            _ => vec![],
        };
        CompanyListPage {
            notices: notice_views(notices),
            loading: matches!(state, ListState::Loading),
            empty: matches!(state, ListState::Empty),
            rows,
            reload,
            show_form,
            form: CompanyFormView::new(form),
        }
    }
}

#[derive(Template)]
#[template(path = "company_detail.html")]
pub struct CompanyDetailPage {
    pub notices: Vec<NoticeView>,
    pub found: bool,
    pub id: String,
    pub company_name: String,
    pub company_url: String,
    pub company_address: String,
    pub recruiter_name: String,
    pub recruiter_email: String,
    pub recruiter_number: String,
    pub rate: u8,
    pub editing: bool,
    pub confirming: bool,
    pub reload: u64,
    pub form: CompanyFormView,
}

impl CompanyDetailPage {
    pub fn loaded(
        company: &Company,
        notices: &Notices,
        editing: bool,
        confirming: bool,
        reload: u64,
    ) -> Self {
        let form = UpsertForm::update(company.clone());
        Self::build(&company.id, &company.draft, &form, notices, editing, confirming, reload)
    }

    /// Re-render after a rejected or failed update: the detail section and
    /// the open form both show the submitted input.
    pub fn editing(id: &str, form: &UpsertForm<Company>, notices: &Notices, reload: u64) -> Self {
        let display = form.draft().clone();
        Self::build(id, &display, form, notices, true, false, reload)
    }

    pub fn missing(notices: &Notices) -> Self {
        CompanyDetailPage {
            notices: notice_views(notices),
            found: false,
            id: String::new(),
            company_name: String::new(),
            company_url: String::new(),
            company_address: String::new(),
            recruiter_name: String::new(),
            recruiter_email: String::new(),
            recruiter_number: String::new(),
            rate: 0,
            editing: false,
            confirming: false,
            reload: 0,
            form: CompanyFormView::new(&UpsertForm::create()),
        }
    }

    fn build(
        id: &str,
        display: &CompanyDraft,
        form: &UpsertForm<Company>,
        notices: &Notices,
        editing: bool,
        confirming: bool,
        reload: u64,
    ) -> Self {
        CompanyDetailPage {
            notices: notice_views(notices),
            found: true,
            id: id.to_string(),
            company_name: display.company_name.clone(),
            company_url: display.company_url.clone(),
            company_address: display.company_address.clone(),
            recruiter_name: display.recruiter_name.clone(),
            recruiter_email: display.recruiter_email.clone(),
            recruiter_number: display.recruiter_number.clone(),
            rate: display.rate,
            editing,
            confirming,
            reload,
            form: CompanyFormView::new(form),
        }
    }
}

// ---- jobs ----

pub struct JobRowView {
    pub id: String,
    pub job_title: String,
    pub job_location: String,
    pub job_type: &'static str,
    pub job_status: String,
}

pub struct JobTypeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub struct JobFormView {
    pub title: &'static str,
    pub action: String,
    pub cancel: String,
    pub submit: &'static str,
    pub job_title: FieldView,
    pub job_link: FieldView,
    pub job_location: FieldView,
    pub job_description: FieldView,
    pub job_requirement: FieldView,
    pub job_experience_level: FieldView,
    pub job_salary_range: FieldView,
    pub job_status: FieldView,
    pub company_id: FieldView,
    pub company_label: String,
    pub job_type_options: Vec<JobTypeOption>,
}

impl JobFormView {
    fn new(form: &UpsertForm<Job>, company_label: &str) -> Self {
        let draft = form.draft();
        let errors = form.errors();
        let (title, action, cancel, submit) = match form.mode() {
            FormMode::Create => (
                "Add Job",
                "/job/create".to_string(),
                "/job".to_string(),
                "Add",
            ),
            FormMode::Update { id } => (
                "Update Job",
                format!("/job/{id}"),
                format!("/job/{id}"),
                "Update",
            ),
        };
        let job_type_options = JobType::ALL
            .iter()
            .map(|job_type| JobTypeOption {
                value: job_type.as_str(),
                label: job_type.label(),
                selected: *job_type == draft.job_type,
            })
            .collect();
        JobFormView {
            title,
            action,
            cancel,
            submit,
            job_title: FieldView::new(&draft.job_title, errors, "jobTitle"),
            job_link: FieldView::new(&draft.job_link, errors, "jobLink"),
            job_location: FieldView::new(&draft.job_location, errors, "jobLocation"),
            job_description: FieldView::new(&draft.job_description, errors, "jobDescription"),
            job_requirement: FieldView::new(&draft.job_requirement, errors, "jobRequirement"),
            job_experience_level: FieldView::new(
                &draft.job_experience_level,
                errors,
                "jobExperienceLevel",
            ),
            job_salary_range: FieldView::new(&draft.job_salary_range, errors, "jobSalaryRange"),
            job_status: FieldView::new(&draft.job_status, errors, "jobStatus"),
            company_id: FieldView::new(&draft.company_id, errors, "companyId"),
            company_label: company_label.to_string(),
            job_type_options,
        }
    }
}

#[derive(Template)]
#[template(path = "job_list.html")]
pub struct JobListPage {
    pub notices: Vec<NoticeView>,
    pub loading: bool,
    pub empty: bool,
    pub rows: Vec<JobRowView>,
    pub reload: u64,
    pub show_form: bool,
    pub form: JobFormView,
}

impl JobListPage {
    pub fn new(
        state: &ListState<Job>,
        notices: &Notices,
        reload: u64,
        show_form: bool,
        form: &UpsertForm<Job>,
        company_label: &str,
    ) -> Self {
        let rows = match state {
            ListState::Populated(jobs) => jobs
                .iter()
                .map(|job| JobRowView {
                    id: job.id.clone(),
                    job_title: job.draft.job_title.clone(),
                    job_location: job.draft.job_location.clone(),
                    job_type: job.draft.job_type.label(),
                    job_status: job.draft.job_status.clone(),
                })
                .collect(),
            _ => vec![],
        };
        JobListPage {
            notices: notice_views(notices),
            loading: matches!(state, ListState::Loading),
            empty: matches!(state, ListState::Empty),
            rows,
            reload,
            show_form,
            form: JobFormView::new(form, company_label),
        }
    }
}

#[derive(Template)]
#[template(path = "job_detail.html")]
pub struct JobDetailPage {
    pub notices: Vec<NoticeView>,
    pub found: bool,
    pub id: String,
    pub job_title: String,
    pub job_link: String,
    pub job_location: String,
    pub job_description: String,
    pub job_requirement: String,
    pub job_experience_level: String,
    pub job_type: &'static str,
    pub job_salary_range: String,
    pub job_status: String,
    pub company_id: String,
    pub editing: bool,
    pub confirming: bool,
    pub reload: u64,
    pub form: JobFormView,
}

impl JobDetailPage {
    pub fn loaded(
        job: &Job,
        company_label: &str,
        notices: &Notices,
        editing: bool,
        confirming: bool,
        reload: u64,
    ) -> Self {
        let form = UpsertForm::update(job.clone());
        let mut page =
            Self::build(&job.id, &job.draft, &form, notices, editing, confirming, reload);
        page.form.company_label = company_label.to_string();
        page
    }

    pub fn editing(
        id: &str,
        form: &UpsertForm<Job>,
        company_label: &str,
        notices: &Notices,
        reload: u64,
    ) -> Self {
        let display = form.draft().clone();
        let mut page = Self::build(id, &display, form, notices, true, false, reload);
        page.form.company_label = company_label.to_string();
        page
    }

    pub fn missing(notices: &Notices) -> Self {
        JobDetailPage {
            notices: notice_views(notices),
            found: false,
            id: String::new(),
            job_title: String::new(),
            job_link: String::new(),
            job_location: String::new(),
            job_description: String::new(),
            job_requirement: String::new(),
            job_experience_level: String::new(),
            job_type: JobType::None.label(),
            job_salary_range: String::new(),
            job_status: String::new(),
            company_id: String::new(),
            editing: false,
            confirming: false,
            reload: 0,
            form: JobFormView::new(&UpsertForm::create(), ""),
        }
    }

    fn build(
        id: &str,
        display: &JobDraft,
        form: &UpsertForm<Job>,
        notices: &Notices,
        editing: bool,
        confirming: bool,
        reload: u64,
    ) -> Self {
        JobDetailPage {
            notices: notice_views(notices),
            found: true,
            id: id.to_string(),
            job_title: display.job_title.clone(),
            job_link: display.job_link.clone(),
            job_location: display.job_location.clone(),
            job_description: display.job_description.clone(),
            job_requirement: display.job_requirement.clone(),
            job_experience_level: display.job_experience_level.clone(),
            job_type: display.job_type.label(),
            job_salary_range: display.job_salary_range.clone(),
            job_status: display.job_status.clone(),
            company_id: display.company_id.clone(),
            editing,
            confirming,
            reload,
            form: JobFormView::new(form, ""),
        }
    }
}

// ---- applications ----

pub struct ApplicationRowView {
    pub id: String,
    pub company_name: String,
    pub job_title: String,
    pub status: String,
    pub date_created: String,
}

#[derive(Template)]
#[template(path = "application_list.html")]
pub struct ApplicationListPage {
    pub notices: Vec<NoticeView>,
    pub empty: bool,
    pub rows: Vec<ApplicationRowView>,
}

impl ApplicationListPage {
    pub fn new(rows: &[ApplicationRow], notices: &Notices) -> Self {
        let rows: Vec<ApplicationRowView> = rows
            .iter()
            .map(|row| ApplicationRowView {
                id: row.id.clone(),
                company_name: row.company_name.clone(),
                job_title: row.job_title.clone(),
                status: row.status.clone(),
                date_created: row
                    .date_created
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            })
            .collect();
        ApplicationListPage {
            notices: notice_views(notices),
            empty: rows.is_empty(),
            rows,
        }
    }
}

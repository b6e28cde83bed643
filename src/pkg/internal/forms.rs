use std::collections::BTreeMap;

use validator::ValidateEmail;

/// Field-scoped validation messages. At most one message per field: the
/// first failing rule wins, later rules for the same field are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        FieldErrors::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn message(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Schema validation for a create/update payload, evaluated in full before
/// any network call is made.
pub trait ValidateDraft {
    fn validate(&self) -> FieldErrors;
}

/// Per-field rule chain. Optional fields simply omit `required`; all the
/// format rules skip empty values so that blank optional input passes.
pub struct Rules<'a> {
    errors: &'a mut FieldErrors,
    field: &'static str,
    value: &'a str,
}

impl<'a> Rules<'a> {
    pub fn field(errors: &'a mut FieldErrors, field: &'static str, value: &'a str) -> Self {
        Rules {
            errors,
            field,
            value,
        }
    }

    fn failed(&self) -> bool {
        self.errors.get(self.field).is_some()
    }

    pub fn required(self, message: &str) -> Self {
        if !self.failed() && self.value.trim().is_empty() {
            self.errors.push(self.field, message);
        }
        self
    }

    pub fn max_len(self, limit: usize) -> Self {
        if !self.failed() && self.value.chars().count() > limit {
            self.errors
                .push(self.field, format!("Please input characters less than {limit}"));
        }
        self
    }

    /// Absolute url with an explicit http/https scheme. Our users paste
    /// links from a browser bar, anything schemeless is a typo.
    pub fn absolute_url(self) -> Self {
        if self.failed() || self.value.is_empty() {
            return self;
        }
        let valid = matches!(
            reqwest::Url::parse(self.value),
            Ok(url) if url.scheme() == "http" || url.scheme() == "https"
        );
        if !valid {
            self.errors.push(
                self.field,
                "Please input valid(full url with https:// or http://) URL",
            );
        }
        self
    }

    pub fn email(self) -> Self {
        if self.failed() || self.value.is_empty() {
            return self;
        }
        if !self.value.validate_email() {
            self.errors.push(self.field, "Please input valid email");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_keeps_a_single_message_per_field() {
        let mut errors = FieldErrors::new();
        Rules::field(&mut errors, "companyName", "")
            .required("Company name is required")
            .max_len(100);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("companyName"), Some("Company name is required"));
    }

    #[test]
    fn url_rule_rejects_schemeless_values() {
        for value in ["acme.example", "ftp://acme.example", "www.acme.example/jobs"] {
            let mut errors = FieldErrors::new();
            Rules::field(&mut errors, "companyURL", value).absolute_url();
            assert!(
                errors.get("companyURL").is_some(),
                "{value} should fail url validation"
            );
        }
    }

    #[test]
    fn url_rule_accepts_absolute_http_and_https() {
        for value in ["https://acme.example", "http://acme.example/careers?id=1"] {
            let mut errors = FieldErrors::new();
            Rules::field(&mut errors, "companyURL", value).absolute_url();
            assert!(errors.is_empty(), "{value} should pass url validation");
        }
    }

    #[test]
    fn format_rules_skip_empty_optional_values() {
        let mut errors = FieldErrors::new();
        Rules::field(&mut errors, "recruiterEmail", "")
            .max_len(150)
            .email();
        assert!(errors.is_empty());
    }

    #[test]
    fn email_rule_flags_malformed_addresses() {
        let mut errors = FieldErrors::new();
        Rules::field(&mut errors, "recruiterEmail", "not-an-email").email();
        assert_eq!(
            errors.get("recruiterEmail"),
            Some("Please input valid email")
        );
    }

    #[test]
    fn max_len_counts_characters_not_bytes() {
        let mut errors = FieldErrors::new();
        let value = "ü".repeat(100);
        Rules::field(&mut errors, "companyName", &value).max_len(100);
        assert!(errors.is_empty());
    }
}

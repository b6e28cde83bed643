/// Toast-style notifications. Workflows push into a `Notices` buffer and
/// the page shell renders whatever accumulated during the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Severity> {
        match value {
            "success" => Some(Severity::Success),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Notices(Vec<Notice>);

impl Notices {
    pub fn new() -> Self {
        Notices::default()
    }

    /// Rebuild a notice that was carried across a redirect as query
    /// parameters. Unknown severities are dropped rather than guessed.
    pub fn from_flash(severity: Option<&str>, message: Option<&str>) -> Self {
        let mut notices = Notices::new();
        if let (Some(severity), Some(message)) = (severity, message) {
            if let Some(severity) = Severity::parse(severity) {
                notices.0.push(Notice {
                    severity,
                    message: message.to_string(),
                });
            }
        }
        notices
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.0.push(Notice {
            severity: Severity::Success,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.0.push(Notice {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    pub fn first(&self) -> Option<&Notice> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notice> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_round_trip_keeps_severity_and_message() {
        let notices = Notices::from_flash(Some("success"), Some("Company added successfully"));
        let notice = notices.first().unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, "Company added successfully");
    }

    #[test]
    fn unknown_severity_is_dropped() {
        let notices = Notices::from_flash(Some("fatal"), Some("nope"));
        assert!(notices.is_empty());
    }
}

//! BSD syslog formatting and a pass-through logging stage.
//!
//! Entries follow the classic `<priority>timestamp hostname app[id]: message`
//! line format, with the priority computed as `facility * 8 + severity`.

use std::fmt::{self, Display};

use chrono::Local;

use crate::deferred::{from_producer, Deferred, Resolve};
use crate::issue::UnexpectedIssue;

/// Syslog facility codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Facility {
    Kernel = 0,
    User = 1,
    Mail = 2,
    Daemon = 3,
    Authorization = 4,
    Syslog = 5,
    Printer = 6,
    News = 7,
    Uucp = 8,
    ClockDaemon = 9,
    PrivateAuthorization = 10,
    Ftp = 11,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

/// Syslog severity levels, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Informational = 6,
    Debug = 7,
}

/// Where and as what an entry is logged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyslogOptions {
    /// Facility code for the priority field.
    pub facility: Facility,
    /// Severity level for the priority field.
    pub severity: Severity,
    /// Host the entry originates from.
    pub hostname: String,
    /// Application name.
    pub application: String,
    /// Process or instance identifier.
    pub identifier: String,
}

impl SyslogOptions {
    /// The priority field: `facility * 8 + severity`.
    pub fn priority(&self) -> u8 {
        self.facility as u8 * 8 + self.severity as u8
    }

    /// The same options at a different severity.
    pub fn with_severity(&self, severity: Severity) -> Self {
        Self { severity, ..self.clone() }
    }
}

/// Format one entry with the given timestamp string.
///
/// The timestamp is taken as an argument so entries are checkable; [`log`]
/// stamps with the current local time, `Mmm dd hh:mm:ss` with a space-padded
/// day.
pub fn format_entry(options: &SyslogOptions, timestamp: &str, message: impl Display) -> String {
    format!(
        "<{}>{} {} {}[{}]: {}",
        options.priority(),
        timestamp,
        options.hostname,
        options.application,
        options.identifier,
        message
    )
}

/// A pass-through stage that prints the value as a syslog entry and forwards
/// it unchanged.
///
/// ```no_run
/// use augury::prelude::*;
/// use augury::syslog::{self, Facility, Severity, SyslogOptions};
///
/// let options = SyslogOptions {
///     facility: Facility::User,
///     severity: Severity::Informational,
///     hostname: "localhost".into(),
///     application: "augury".into(),
///     identifier: "demo".into(),
/// };
///
/// pure::<_, UnexpectedIssue>("ready")
///     .and_then(move |status| syslog::log(options.clone(), status))
///     .run_issue(|issue| eprintln!("{}", issue.kind()));
/// ```
pub fn log<V>(options: SyslogOptions, value: V) -> impl Deferred<Value = V, Issue = UnexpectedIssue>
where
    V: Display + Clone + 'static,
{
    from_producer(move |resolve: Resolve<V, UnexpectedIssue>| {
        let timestamp = Local::now().format("%b %e %H:%M:%S").to_string();
        println!("{}", format_entry(&options, &timestamp, &value));
        resolve.value(value.clone());
    })
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Informational => "informational",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_value;

    fn options() -> SyslogOptions {
        SyslogOptions {
            facility: Facility::Local0,
            severity: Severity::Warning,
            hostname: "db-1".into(),
            application: "augury".into(),
            identifier: "4242".into(),
        }
    }

    #[test]
    fn priority_combines_facility_and_severity() {
        assert_eq!(options().priority(), 16 * 8 + 4);
        assert_eq!(
            options().with_severity(Severity::Emergency).priority(),
            128
        );
    }

    #[test]
    fn entry_follows_the_line_format() {
        let entry = format_entry(&options(), "Jan  2 03:04:05", "disk low");
        assert_eq!(entry, "<132>Jan  2 03:04:05 db-1 augury[4242]: disk low");
    }

    #[test]
    fn log_forwards_the_value() {
        assert_value!(log(options(), 7), 7);
    }

    #[test]
    fn severity_orders_most_urgent_first() {
        assert!(Severity::Emergency < Severity::Debug);
        assert_eq!(Severity::Critical.to_string(), "critical");
    }
}

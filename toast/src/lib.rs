pub mod queue;
pub mod timer;
pub mod toastlist;
pub mod toasttray;

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

pub use queue::*;
pub use timer::*;
pub use toastlist::*;
pub use toasttray::*;

use rand::Rng;
use serde::{Serialize, Deserialize};
use yew::Reducible;

/// Severity tag of a toast. The well-known tags get their own variant,
/// anything else is carried through untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Other(String),
}

impl ToastKind {
    pub fn as_str(&self) -> &str {
        match self {
            ToastKind::Info       => "info",
            ToastKind::Success    => "success",
            ToastKind::Warning    => "warning",
            ToastKind::Error      => "error",
            ToastKind::Other(tag) => tag,
        }
    }

    /// Bulma flavor class for the notification box
    pub fn css_class(&self) -> String {
        match self {
            ToastKind::Info       => "is-info".into(),
            ToastKind::Success    => "is-success".into(),
            ToastKind::Warning    => "is-warning".into(),
            ToastKind::Error      => "is-danger".into(),
            ToastKind::Other(tag) => format!("is-{}", tag),
        }
    }
}

impl From<&str> for ToastKind {
    fn from(tag: &str) -> Self {
        match tag {
            "info"    => ToastKind::Info,
            "success" => ToastKind::Success,
            "warning" => ToastKind::Warning,
            "error"   => ToastKind::Error,
            other     => ToastKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ToastKind {
    fn from(tag: String) -> Self {
        match ToastKind::from(tag.as_str()) {
            ToastKind::Other(_) => ToastKind::Other(tag),
            known => known,
        }
    }
}

impl From<ToastKind> for String {
    fn from(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Short random token identifying a toast.
///
/// Not cryptographic and not guaranteed unique: 64 random bits are plenty for
/// a handful of notifications that live a few seconds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    pub fn generate() -> Self {
        let mut n: u64 = rand::thread_rng().gen();

        let mut digits = Vec::with_capacity(13);
        loop {
            let d = (n % 36) as u32;
            digits.push(std::char::from_digit(d, 36).unwrap_or('0'));
            n /= 36;
            if n == 0 {
                break;
            }
        }

        Self(digits.into_iter().rev().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    /// Build a toast with a freshly generated id
    pub fn new(message: impl Into<String>, kind: impl Into<ToastKind>) -> Self {
        Self {
            id: ToastId::generate(),
            message: message.into(),
            kind: kind.into(),
        }
    }
}

/// Defaults applied by [`ToastQueue::show`] and friends.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ToastSettings {
    pub duration_ms: u64,
    pub kind: ToastKind,
}

impl ToastSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            duration_ms: 3_000,
            kind: ToastKind::Info,
        }
    }
}

pub enum ToastAction {
    Show(Toast),
    Expire(ToastId),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ToastAction::Show(toast) => self.appended(toast),
            ToastAction::Expire(id) => self.without(&id),
        };

        next.into()
    }
}


#[macro_export]
macro_rules! toast_info {
    ($queue:expr, $string:expr) => {
        $queue.show_kind($string, $crate::ToastKind::Info)
    };
}
#[macro_export]
macro_rules! toast_success {
    ($queue:expr, $string:expr) => {
        $queue.show_kind($string, $crate::ToastKind::Success)
    };
}
#[macro_export]
macro_rules! toast_warning {
    ($queue:expr, $string:expr) => {
        $queue.show_kind($string, $crate::ToastKind::Warning)
    };
}
#[macro_export]
macro_rules! toast_error {
    ($queue:expr, $string:expr) => {
        $queue.show_kind($string, $crate::ToastKind::Error)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_known_tags() {
        assert_eq!(ToastKind::from("info"), ToastKind::Info);
        assert_eq!(ToastKind::from("error"), ToastKind::Error);
        assert_eq!(ToastKind::from("Info"), ToastKind::Other("Info".into()));
        assert_eq!(ToastKind::from("critical".to_string()), ToastKind::Other("critical".into()));
    }

    #[test]
    fn kind_serializes_as_plain_string() {
        let json = serde_json::to_string(&ToastKind::Warning).unwrap();
        assert_eq!(json, r#""warning""#);

        let kind: ToastKind = serde_json::from_str(r#""critical""#).unwrap();
        assert_eq!(kind, ToastKind::Other("critical".into()));
        assert_eq!(kind.to_string(), "critical");
    }

    #[test]
    fn kind_css_class() {
        assert_eq!(ToastKind::Error.css_class(), "is-danger");
        assert_eq!(ToastKind::Other("dark".into()).css_class(), "is-dark");
    }

    #[test]
    fn generated_ids_are_short_base36() {
        let id = ToastId::generate();
        assert!(!id.as_str().is_empty());
        assert!(id.as_str().len() <= 13);
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(ToastId::generate(), ToastId::generate());
    }

    #[test]
    fn settings_default_and_partial_deserialize() {
        assert_eq!(ToastSettings::default().duration(), Duration::from_millis(3000));

        let settings: ToastSettings = serde_json::from_str(r#"{"duration_ms": 500}"#).unwrap();
        assert_eq!(settings.duration_ms, 500);
        assert_eq!(settings.kind, ToastKind::Info);
    }
}

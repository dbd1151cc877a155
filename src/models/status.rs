use serde::{Deserialize, Serialize};

/// Icon shown for a status string that is not one of the known codes.
pub const UNKNOWN_ICON: &str = "❔";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusCode {
    #[default]
    ToDo,
    Doing,
    Done,
    Cancelled,
    Postponed,
    Appointment,
    Event,
    Note,
    /// Any other string found in saved data or passed by a caller.
    Unrecognized(String),
}

/// One row of the status picker: wire code, icon and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
    pub code: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl StatusInfo {
    const fn new(code: &'static str, icon: &'static str, label: &'static str) -> Self {
        Self { code, icon, label }
    }
}

/// The statuses offered to the user, in picker order.
pub const STATUSES: [StatusInfo; 8] = [
    StatusInfo::new("a_fazer", "📝", "A fazer"),
    StatusInfo::new("fazendo", "⚡", "Fazendo"),
    StatusInfo::new("feito", "✅", "Feito"),
    StatusInfo::new("cancelado", "❌", "Cancelado"),
    StatusInfo::new("adiado", "⏸️", "Adiado"),
    StatusInfo::new("compromisso", "📅", "Compromisso"),
    StatusInfo::new("evento", "🎉", "Evento"),
    StatusInfo::new("anotacao", "🗒️", "Anotação"),
];

impl StatusCode {
    pub fn parse(s: &str) -> Self {
        match s {
            "a_fazer" => Self::ToDo,
            "fazendo" => Self::Doing,
            "feito" => Self::Done,
            "cancelado" => Self::Cancelled,
            "adiado" => Self::Postponed,
            "compromisso" => Self::Appointment,
            "evento" => Self::Event,
            "anotacao" => Self::Note,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ToDo => "a_fazer",
            Self::Doing => "fazendo",
            Self::Done => "feito",
            Self::Cancelled => "cancelado",
            Self::Postponed => "adiado",
            Self::Appointment => "compromisso",
            Self::Event => "evento",
            Self::Note => "anotacao",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Table entry for a known code; `None` for unrecognized strings.
    pub fn info(&self) -> Option<&'static StatusInfo> {
        if let Self::Unrecognized(_) = self {
            return None;
        }
        STATUSES.iter().find(|info| info.code == self.as_str())
    }

    pub fn icon(&self) -> &'static str {
        self.info().map_or(UNKNOWN_ICON, |info| info.icon)
    }

    /// Display label; unrecognized codes are shown as their raw text.
    pub fn label(&self) -> &str {
        match self.info() {
            Some(info) => info.label,
            None => self.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for StatusCode {
    fn from(s: String) -> Self {
        match Self::parse(&s) {
            Self::Unrecognized(_) => Self::Unrecognized(s),
            known => known,
        }
    }
}

impl From<&str> for StatusCode {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<StatusCode> for String {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon lookup for a raw status string.
pub fn status_icon(status: &str) -> &'static str {
    StatusCode::parse(status).icon()
}

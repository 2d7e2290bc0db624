//! Transient notification queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStatus {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastStatus {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Warning => "toast--warning",
            Self::Info => "toast--info",
        }
    }
}

pub const DEFAULT_DURATION_MS: u32 = 5000;

/// What to show; the queue assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastSpec {
    pub status: ToastStatus,
    pub title: String,
    pub description: Option<String>,
    pub duration_ms: u32,
}

impl ToastSpec {
    pub fn new(status: ToastStatus, title: impl Into<String>) -> Self {
        Self { status, title: title.into(), description: None, duration_ms: DEFAULT_DURATION_MS }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastStatus::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastStatus::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastStatus::Warning, title)
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub spec: ToastSpec,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push(&mut self, spec: ToastSpec) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, spec });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

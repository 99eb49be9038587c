//! Sparse field changes applied to an existing task.

use super::TaskStatus;
use serde::{Deserialize, Deserializer};

/// Change requested for a single optional field.
///
/// Distinguishes a field that was left out of a request from one that was
/// explicitly cleared. When deserialized, an absent field (with
/// `#[serde(default)]`) is [`FieldUpdate::Keep`], `null` is
/// [`FieldUpdate::Clear`], and any value is [`FieldUpdate::Set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Leave the current value unchanged.
    #[default]
    Keep,
    /// Remove the current value.
    Clear,
    /// Replace the current value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Applies the change to `current`.
    pub fn apply_to(self, current: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Clear => *current = None,
            Self::Set(value) => *current = Some(value),
        }
    }

    /// Maps the carried value, preserving `Keep` and `Clear`.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldUpdate<U> {
        match self {
            Self::Keep => FieldUpdate::Keep,
            Self::Clear => FieldUpdate::Clear,
            Self::Set(value) => FieldUpdate::Set(f(value)),
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(value.map_or(Self::Clear, Self::Set))
    }
}

/// Partial update for a task; omitted fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskUpdate {
    /// Replacement title, validated and trimmed before it is applied.
    pub title: Option<String>,
    /// Description change; set values are trimmed before they are applied.
    pub description: FieldUpdate<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    /// Creates an update that changes nothing but the update timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = FieldUpdate::Set(description.into());
        self
    }

    /// Requests removal of the description.
    #[must_use]
    pub fn clearing_description(mut self) -> Self {
        self.description = FieldUpdate::Clear;
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

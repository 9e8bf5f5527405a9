//! Localized user-facing strings.
//!
//! All text the widget or its hosting UI shows lives in this one catalog
//! keyed by [`Locale`], so locales share a single copy of the logic.
//! [`Notice`] values are the transient status messages the widget
//! publishes; [`Label`] values are the static captions a hosting UI
//! renders around the face.

use serde::{Deserialize, Serialize};

/// Display locale for notices and labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Locale {
    #[default]
    English,
    Russian,
}

/// A transient status notice published by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Notice {
    IntervalAdded { start: String, end: String },
    IntervalRemoved,
    IntervalsCleared,
    /// Prompt shown when the form is submitted with an empty time field.
    MissingTimes,
}

/// Static captions for the hosting UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Title,
    FormHeader,
    StartField,
    EndField,
    ColorField,
    AddButton,
    ClearButton,
    ListHeader,
    NoIntervals,
    IntervalCount,
    RemoveHint,
}

impl Locale {
    /// Render a notice in this locale.
    pub fn notice(&self, notice: &Notice) -> String {
        match (self, notice) {
            (Locale::English, Notice::IntervalAdded { start, end }) => {
                format!("Interval {start}-{end} added")
            }
            (Locale::English, Notice::IntervalRemoved) => "Interval removed".to_string(),
            (Locale::English, Notice::IntervalsCleared) => "All intervals removed".to_string(),
            (Locale::English, Notice::MissingTimes) => {
                "Please specify start and end time for the interval".to_string()
            }
            (Locale::Russian, Notice::IntervalAdded { start, end }) => {
                format!("Интервал {start}-{end} добавлен")
            }
            (Locale::Russian, Notice::IntervalRemoved) => "Интервал удален".to_string(),
            (Locale::Russian, Notice::IntervalsCleared) => "Все интервалы удалены".to_string(),
            (Locale::Russian, Notice::MissingTimes) => {
                "Пожалуйста, укажите время начала и конца интервала".to_string()
            }
        }
    }

    /// Static caption text in this locale.
    pub fn label(&self, label: Label) -> &'static str {
        match (self, label) {
            (Locale::English, Label::Title) => "Clock with Intervals",
            (Locale::English, Label::FormHeader) => "Add Interval",
            (Locale::English, Label::StartField) => "Start:",
            (Locale::English, Label::EndField) => "End:",
            (Locale::English, Label::ColorField) => "Color:",
            (Locale::English, Label::AddButton) => "Add Interval",
            (Locale::English, Label::ClearButton) => "Clear All Intervals",
            (Locale::English, Label::ListHeader) => "Intervals List",
            (Locale::English, Label::NoIntervals) => "No intervals added",
            (Locale::English, Label::IntervalCount) => "Number of intervals:",
            (Locale::English, Label::RemoveHint) => "Remove interval",
            (Locale::Russian, Label::Title) => "Часы с интервалами",
            (Locale::Russian, Label::FormHeader) => "Добавить интервал",
            (Locale::Russian, Label::StartField) => "Начало:",
            (Locale::Russian, Label::EndField) => "Конец:",
            (Locale::Russian, Label::ColorField) => "Цвет:",
            (Locale::Russian, Label::AddButton) => "Добавить интервал",
            (Locale::Russian, Label::ClearButton) => "Очистить все интервалы",
            (Locale::Russian, Label::ListHeader) => "Список интервалов",
            (Locale::Russian, Label::NoIntervals) => "Нет добавленных интервалов",
            (Locale::Russian, Label::IntervalCount) => "Количество интервалов:",
            (Locale::Russian, Label::RemoveHint) => "Удалить интервал",
        }
    }
}

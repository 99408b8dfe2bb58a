//! Telemetry event vocabulary.
//!
//! A closed set of event names split across two channels: product analytics
//! and the conversion pixel. Parameters are a flat string-keyed map.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Category attached to every event.
pub const EVENT_CATEGORY: &str = "quiz_interaction";

/// Which collector an event is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Analytics,
    Pixel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    QuizStartButtonClicked,
    QuizStarted,
    QuestionViewed,
    QuestionTimeSpent,
    QuestionAnswered,
    InfoBoxInteraction,
    QuizCompleted,
    CtaClicked,
    NoThanksClicked,
    PopupInteraction,
    // Pixel standard events.
    Lead,
    InitiateCheckout,
    ViewContent,
    CompleteRegistration,
    AddToWishlist,
}

impl EventName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventName::QuizStartButtonClicked => "quiz_start_button_clicked",
            EventName::QuizStarted => "quiz_started",
            EventName::QuestionViewed => "question_viewed",
            EventName::QuestionTimeSpent => "question_time_spent",
            EventName::QuestionAnswered => "question_answered",
            EventName::InfoBoxInteraction => "info_box_interaction",
            EventName::QuizCompleted => "quiz_completed",
            EventName::CtaClicked => "cta_clicked",
            EventName::NoThanksClicked => "no_thanks_clicked",
            EventName::PopupInteraction => "popup_interaction",
            EventName::Lead => "Lead",
            EventName::InitiateCheckout => "InitiateCheckout",
            EventName::ViewContent => "ViewContent",
            EventName::CompleteRegistration => "CompleteRegistration",
            EventName::AddToWishlist => "AddToWishlist",
        }
    }

    #[must_use]
    pub const fn channel(self) -> Channel {
        match self {
            EventName::Lead
            | EventName::InitiateCheckout
            | EventName::ViewContent
            | EventName::CompleteRegistration
            | EventName::AddToWishlist => Channel::Pixel,
            _ => Channel::Analytics,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Int(i64),
}

impl ParamValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            ParamValue::Int(_) => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(value) => Some(*value),
            ParamValue::Text(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        ParamValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// One reportable occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetryEvent {
    name: EventName,
    params: BTreeMap<&'static str, ParamValue>,
}

impl TelemetryEvent {
    #[must_use]
    pub fn new(name: EventName) -> Self {
        Self {
            name,
            params: BTreeMap::new(),
        }
    }

    /// Add or replace a parameter.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> EventName {
        self.name
    }

    #[must_use]
    pub fn channel(&self) -> Channel {
        self.name.channel()
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn params(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> + '_ {
        self.params.iter().map(|(key, value)| (*key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_events_route_to_pixel_channel() {
        for name in [
            EventName::Lead,
            EventName::InitiateCheckout,
            EventName::ViewContent,
            EventName::CompleteRegistration,
            EventName::AddToWishlist,
        ] {
            assert_eq!(name.channel(), Channel::Pixel, "{name}");
        }
        assert_eq!(EventName::QuizCompleted.channel(), Channel::Analytics);
    }

    #[test]
    fn with_overwrites_existing_key() {
        let event = TelemetryEvent::new(EventName::QuestionViewed)
            .with("question_number", 1_usize)
            .with("question_number", 2_usize);
        assert_eq!(
            event.param("question_number").and_then(ParamValue::as_int),
            Some(2)
        );
    }

    #[test]
    fn serializes_name_and_flat_params() {
        let event = TelemetryEvent::new(EventName::PopupInteraction)
            .with("action", "product_button_clicked")
            .with("time_on_page_seconds", 42_u64);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["name"], "popup_interaction");
        assert_eq!(json["params"]["action"], "product_button_clicked");
        assert_eq!(json["params"]["time_on_page_seconds"], 42);
    }
}

//! Local form submission stubs: field capture and confirmation feedback.

use crate::constants::FORM_CONFIRM_HOLD;
use crate::timeline::Timeline;
use std::fmt;

/// Flat name → value mapping of a submitted form. Repeated names keep their
/// first position and their last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut out = FormFields::default();
        for (n, v) in iter {
            out.insert(n, v);
        }
        out
    }
}

impl fmt::Display for FormFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (n, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{n:?}: {v:?}")?;
        }
        f.write_str("}")
    }
}

/// How the confirmation label is written onto the submit control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelMarkup {
    Text,
    Html,
}

/// Per-form confirmation behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormStub {
    pub name: &'static str,
    pub submit_selector: &'static str,
    pub confirmation: &'static str,
    pub markup: LabelMarkup,
    /// Background colour applied to the control while confirming.
    pub accent: Option<&'static str>,
}

pub const HERO_FORM: FormStub = FormStub {
    name: "hero",
    submit_selector: ".btn-form-submit",
    confirmation: "Request Sent!",
    markup: LabelMarkup::Text,
    accent: Some("var(--color-accent)"),
};

pub const CONTACT_FORM: FormStub = FormStub {
    name: "contact",
    submit_selector: "button[type=\"submit\"]",
    confirmation: "<span>Message Sent!</span>",
    markup: LabelMarkup::Html,
    accent: None,
};

/// Submit-control changes over the confirmation period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// Show the confirmation label and disable the control.
    Confirm { label: &'static str },
    /// Put the original label back, re-enable, and reset the form.
    Restore { label: String },
}

impl FormStub {
    /// Feedback sequence for a submission whose control read `original`.
    pub fn feedback(&self, original: impl Into<String>) -> Timeline<Feedback> {
        Timeline::new()
            .at(std::time::Duration::ZERO, Feedback::Confirm { label: self.confirmation })
            .at(FORM_CONFIRM_HOLD, Feedback::Restore { label: original.into() })
    }
}

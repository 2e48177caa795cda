//! # Proposal Form
//!
//! Typed form state, a parallel record of touched fields and a pure reducer.
//! Validation runs over the whole form; display code shows only errors for
//! fields the user has touched.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use shared_types::BlockNumber;
use std::collections::BTreeMap;
use thiserror::Error;

use super::payload::ProposalDraft;

/// Fewest non-empty choices a proposal may have.
pub const MINIMUM_CHOICES: usize = 2;

/// Form fields that carry validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    /// Title
    Name,
    /// Markdown body
    Body,
    /// Choice list
    Choices,
    /// Start date
    StartDate,
    /// Start time of day
    StartTime,
    /// End date
    EndDate,
    /// End time of day
    EndTime,
}

/// One editable choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Stable identity while the list is edited.
    pub id: u32,
    /// Text shown to voters.
    pub value: String,
}

impl Choice {
    /// Empty choice with the given id.
    pub fn empty(id: u32) -> Self {
        Self {
            id,
            value: String::new(),
        }
    }
}

/// In-progress proposal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Title
    pub name: String,
    /// Markdown body
    pub body: String,
    /// Choices in display order
    pub choices: Vec<Choice>,
    /// Start date
    pub start_date: Option<NaiveDate>,
    /// Start time of day
    pub start_time: Option<NaiveTime>,
    /// End date
    pub end_date: Option<NaiveDate>,
    /// End time of day
    pub end_time: Option<NaiveTime>,
    /// Snapshot block, fixed when the form opens
    pub snapshot: BlockNumber,
}

impl FormState {
    /// Blank form with [`MINIMUM_CHOICES`] empty choices.
    pub fn new(snapshot: BlockNumber) -> Self {
        Self {
            name: String::new(),
            body: String::new(),
            choices: (0..MINIMUM_CHOICES as u32).map(Choice::empty).collect(),
            start_date: None,
            start_time: None,
            end_date: None,
            end_time: None,
            snapshot,
        }
    }

    /// Choice values that are not blank, in order.
    pub fn non_empty_choices(&self) -> Vec<String> {
        self.choices
            .iter()
            .filter(|choice| !choice.value.trim().is_empty())
            .map(|choice| choice.value.clone())
            .collect()
    }

    /// Validate every field.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.push(FormField::Name, FieldError::Required);
        }
        if self.body.trim().is_empty() {
            errors.push(FormField::Body, FieldError::Required);
        }

        if self.non_empty_choices().len() < MINIMUM_CHOICES {
            errors.push(
                FormField::Choices,
                FieldError::TooFewChoices {
                    minimum: MINIMUM_CHOICES,
                },
            );
        }

        if self.start_date.is_none() {
            errors.push(FormField::StartDate, FieldError::InvalidDate);
        }
        if self.start_time.is_none() {
            errors.push(FormField::StartTime, FieldError::InvalidDate);
        }
        if self.end_date.is_none() {
            errors.push(FormField::EndDate, FieldError::InvalidDate);
        }
        if self.end_time.is_none() {
            errors.push(FormField::EndTime, FieldError::InvalidDate);
        }

        errors
    }

    /// Convert a valid form into a draft, or return its errors.
    pub fn to_draft(&self) -> Result<ProposalDraft, FormErrors> {
        let errors = self.validate();
        match (self.start_date, self.start_time, self.end_date, self.end_time) {
            (Some(start_date), Some(start_time), Some(end_date), Some(end_time))
                if errors.is_empty() =>
            {
                Ok(ProposalDraft {
                    name: self.name.clone(),
                    body: self.body.clone(),
                    choices: self.choices.iter().map(|c| c.value.clone()).collect(),
                    start: combine_date_and_time(start_date, start_time),
                    end: combine_date_and_time(end_date, end_time),
                    snapshot: self.snapshot,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Fields the user has attempted to edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFields {
    /// Title touched
    pub name: bool,
    /// Body touched
    pub body: bool,
    /// Choices touched
    pub choices: bool,
    /// Start date touched
    pub start_date: bool,
    /// Start time touched
    pub start_time: bool,
    /// End date touched
    pub end_date: bool,
    /// End time touched
    pub end_time: bool,
}

impl TouchedFields {
    /// Whether `field` has been touched.
    pub fn is_touched(&self, field: FormField) -> bool {
        match field {
            FormField::Name => self.name,
            FormField::Body => self.body,
            FormField::Choices => self.choices,
            FormField::StartDate => self.start_date,
            FormField::StartTime => self.start_time,
            FormField::EndDate => self.end_date,
            FormField::EndTime => self.end_time,
        }
    }

    fn touch(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = true,
            FormField::Body => self.body = true,
            FormField::Choices => self.choices = true,
            FormField::StartDate => self.start_date = true,
            FormField::StartTime => self.start_time = true,
            FormField::EndDate => self.end_date = true,
            FormField::EndTime => self.end_time = true,
        }
    }
}

/// Form edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Replace the title.
    SetName(String),
    /// Replace the body.
    SetBody(String),
    /// Replace the whole choice list.
    SetChoices(Vec<Choice>),
    /// Append an empty choice.
    AddChoice,
    /// Edit one choice's text.
    UpdateChoice {
        /// Choice id
        id: u32,
        /// New text
        value: String,
    },
    /// Remove a choice.
    RemoveChoice(u32),
    /// Pick the start date.
    SetStartDate(NaiveDate),
    /// Pick the start time.
    SetStartTime(NaiveTime),
    /// Pick the end date.
    SetEndDate(NaiveDate),
    /// Pick the end time.
    SetEndTime(NaiveTime),
}

impl FormAction {
    /// Field affected by this action.
    pub fn field(&self) -> FormField {
        match self {
            FormAction::SetName(_) => FormField::Name,
            FormAction::SetBody(_) => FormField::Body,
            FormAction::SetChoices(_)
            | FormAction::AddChoice
            | FormAction::UpdateChoice { .. }
            | FormAction::RemoveChoice(_) => FormField::Choices,
            FormAction::SetStartDate(_) => FormField::StartDate,
            FormAction::SetStartTime(_) => FormField::StartTime,
            FormAction::SetEndDate(_) => FormField::EndDate,
            FormAction::SetEndTime(_) => FormField::EndTime,
        }
    }
}

/// Apply `action`, returning the next state and touched record.
pub fn reduce(
    state: &FormState,
    touched: &TouchedFields,
    action: FormAction,
) -> (FormState, TouchedFields) {
    let mut next = state.clone();
    let mut next_touched = *touched;
    next_touched.touch(action.field());

    match action {
        FormAction::SetName(name) => next.name = name,
        FormAction::SetBody(body) => next.body = body,
        FormAction::SetChoices(choices) => next.choices = choices,
        FormAction::AddChoice => {
            let id = next.choices.iter().map(|c| c.id + 1).max().unwrap_or(0);
            next.choices.push(Choice::empty(id));
        }
        FormAction::UpdateChoice { id, value } => {
            if let Some(choice) = next.choices.iter_mut().find(|c| c.id == id) {
                choice.value = value;
            }
        }
        FormAction::RemoveChoice(id) => next.choices.retain(|c| c.id != id),
        FormAction::SetStartDate(date) => next.start_date = Some(date),
        FormAction::SetStartTime(time) => next.start_time = Some(time),
        FormAction::SetEndDate(date) => next.end_date = Some(date),
        FormAction::SetEndTime(time) => next.end_time = Some(time),
    }

    (next, next_touched)
}

/// Single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field left blank.
    #[error("is required")]
    Required,
    /// Not enough non-empty choices.
    #[error("needs at least {minimum} choices")]
    TooFewChoices {
        /// Required count
        minimum: usize,
    },
    /// Date or time not selected.
    #[error("please select a valid date")]
    InvalidDate,
}

/// Validation errors keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, Vec<FieldError>>);

impl FormErrors {
    fn push(&mut self, field: FormField, error: FieldError) {
        self.0.entry(field).or_default().push(error);
    }

    /// No errors at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Errors for `field`.
    pub fn get(&self, field: FormField) -> &[FieldError] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `field` has any error.
    pub fn has(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Fields with errors, in form order.
    pub fn fields(&self) -> Vec<FormField> {
        self.0.keys().copied().collect()
    }

    /// Subset restricted to touched fields.
    pub fn visible(&self, touched: &TouchedFields) -> FormErrors {
        FormErrors(
            self.0
                .iter()
                .filter(|(field, _)| touched.is_touched(**field))
                .map(|(field, errors)| (*field, errors.clone()))
                .collect(),
        )
    }
}

/// Combine a date and a time of day into UTC epoch seconds.
pub fn combine_date_and_time(date: NaiveDate, time: NaiveTime) -> i64 {
    NaiveDateTime::new(date, time).and_utc().timestamp()
}

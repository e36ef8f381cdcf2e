//! Presence checks for the stream form.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::constants::MAX_STREAM_NAME_LEN;
use crate::state::StreamUserInputs;

pub const FIELD_REQUIRED: &str = "Field is required";
pub const PERIOD_TOO_SHORT: &str = "Must be at least 1 second";
pub const NAME_TOO_LONG: &str = "Must be at most 64 bytes";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Recipient,
    Period,
    Mint,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Recipient => "recipient",
            FormField::Period => "period",
            FormField::Mint => "mint",
        }
    }
}

/// Field name to message. Built fresh for every submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<FormField, &'static str>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: FormField, message: &'static str) {
        self.entries.insert(field, message);
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.entries.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.entries.iter().map(|(field, message)| (*field, *message))
    }

    pub fn log(&self) {
        for (field, message) in self.iter() {
            msg!("{}: {}", field.as_str(), message);
        }
    }
}

/// Inputs that passed validation; every required field is present.
/// `name` and `recipient` are trimmed of surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidStreamInputs {
    pub name: String,
    pub recipient: String,
    pub period: u64,
    pub mint: Pubkey,
    pub can_topup: bool,
    pub cancelable_by_sender: bool,
}

pub fn validate_stream_inputs(
    inputs: &StreamUserInputs,
) -> std::result::Result<ValidStreamInputs, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = non_blank(inputs.name.as_deref());
    match name {
        None => errors.insert(FormField::Name, FIELD_REQUIRED),
        Some(n) if n.len() > MAX_STREAM_NAME_LEN => errors.insert(FormField::Name, NAME_TOO_LONG),
        Some(_) => {}
    }

    let recipient = non_blank(inputs.recipient.as_deref());
    if recipient.is_none() {
        errors.insert(FormField::Recipient, FIELD_REQUIRED);
    }

    match inputs.period {
        None => errors.insert(FormField::Period, FIELD_REQUIRED),
        Some(0) => errors.insert(FormField::Period, PERIOD_TOO_SHORT),
        Some(_) => {}
    }

    if inputs.mint.is_none() {
        errors.insert(FormField::Mint, FIELD_REQUIRED);
    }

    match (name, recipient, inputs.period, inputs.mint) {
        (Some(name), Some(recipient), Some(period), Some(mint)) if errors.is_empty() => {
            Ok(ValidStreamInputs {
                name: name.to_string(),
                recipient: recipient.to_string(),
                period,
                mint,
                can_topup: inputs.can_topup,
                cancelable_by_sender: inputs.cancelable_by_sender,
            })
        }
        _ => Err(errors),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> StreamUserInputs {
        StreamUserInputs {
            name: Some("Team vesting".to_string()),
            recipient: Some("9f5LBDmA1enRXXXqGLSfD9ycRH7qyk4Kcb8smFvk8t8W".to_string()),
            period: Some(60),
            mint: Some(Pubkey::new_unique()),
            can_topup: true,
            cancelable_by_sender: false,
        }
    }

    #[test]
    fn accepts_filled_form() {
        let inputs = filled();
        let valid = validate_stream_inputs(&inputs).unwrap();
        assert_eq!(valid.name, "Team vesting");
        assert_eq!(valid.period, 60);
        assert_eq!(Some(valid.mint), inputs.mint);
        assert!(valid.can_topup);
        assert!(!valid.cancelable_by_sender);
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate_stream_inputs(&StreamUserInputs::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in [
            FormField::Name,
            FormField::Recipient,
            FormField::Period,
            FormField::Mint,
        ] {
            assert_eq!(errors.get(field), Some(FIELD_REQUIRED));
        }
    }

    #[test]
    fn whitespace_only_text_is_missing() {
        let mut inputs = filled();
        inputs.name = Some("   ".to_string());
        inputs.recipient = Some("\t\n".to_string());
        let errors = validate_stream_inputs(&inputs).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::Name), Some(FIELD_REQUIRED));
        assert_eq!(errors.get(FormField::Recipient), Some(FIELD_REQUIRED));
    }

    #[test]
    fn text_fields_are_trimmed() {
        let mut inputs = filled();
        inputs.name = Some("  Team vesting \n".to_string());
        inputs.recipient = Some(" abc ".to_string());
        let valid = validate_stream_inputs(&inputs).unwrap();
        assert_eq!(valid.name, "Team vesting");
        assert_eq!(valid.recipient, "abc");
    }

    #[test]
    fn recipient_is_not_checked_for_address_format() {
        let mut inputs = filled();
        inputs.recipient = Some("not-an-address".to_string());
        assert!(validate_stream_inputs(&inputs).is_ok());
    }

    #[test]
    fn zero_period_is_rejected() {
        let mut inputs = filled();
        inputs.period = Some(0);
        let errors = validate_stream_inputs(&inputs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Period), Some(PERIOD_TOO_SHORT));
    }

    #[test]
    fn name_must_fit_stream_name_field() {
        let mut inputs = filled();
        inputs.name = Some("x".repeat(64));
        assert!(validate_stream_inputs(&inputs).is_ok());

        inputs.name = Some("x".repeat(65));
        let errors = validate_stream_inputs(&inputs).unwrap_err();
        assert_eq!(errors.get(FormField::Name), Some(NAME_TOO_LONG));
    }

    #[test]
    fn single_missing_field_is_the_only_error() {
        let mut inputs = filled();
        inputs.mint = None;
        let errors = validate_stream_inputs(&inputs).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fields, vec!["mint"]);
    }
}

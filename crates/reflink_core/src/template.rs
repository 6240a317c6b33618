//! Message templates.
//!
//! Every formatter is a plain `fn(&ValidatedForm) -> String`: no I/O, no
//! clock, no randomness. Identical input always yields identical bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{FormProfile, ValidatedForm};

/// LinkedIn caps personalized connection notes at this many characters.
pub const INVITE_CHAR_LIMIT: usize = 300;

const DEFAULT_POSITION: &str = "open";
const DEFAULT_COMPANY: &str = "your company";

pub type Formatter = fn(&ValidatedForm) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// Connection request sent before any relationship exists.
    Invite,
    /// Referral ask sent once the connection is accepted.
    ReferralAfterConnecting,
    /// Longer, multi-paragraph referral ask.
    ReferralFollowUp,
}

impl MessageKind {
    pub fn key(self) -> &'static str {
        match self {
            MessageKind::Invite => "invite",
            MessageKind::ReferralAfterConnecting => "referral",
            MessageKind::ReferralFollowUp => "follow-up",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MessageKind::Invite => "LinkedIn Personalized Invite",
            MessageKind::ReferralAfterConnecting => "LinkedIn Referral",
            MessageKind::ReferralFollowUp => "LinkedIn Referral Follow-up",
        }
    }

    pub fn char_limit(self) -> Option<usize> {
        match self {
            MessageKind::Invite => Some(INVITE_CHAR_LIMIT),
            MessageKind::ReferralAfterConnecting | MessageKind::ReferralFollowUp => None,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Generated text per message kind, in the profile's presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedMessages {
    entries: Vec<(MessageKind, String)>,
}

impl GeneratedMessages {
    pub fn get(&self, kind: MessageKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, text)| text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (MessageKind, &str)> {
        self.entries.iter().map(|(kind, text)| (*kind, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs every formatter in the profile's template table.
pub fn generate(form: &ValidatedForm, profile: &FormProfile) -> GeneratedMessages {
    let entries = profile
        .templates
        .iter()
        .map(|(kind, format)| (*kind, format(form)))
        .collect();
    GeneratedMessages { entries }
}

/// Length shown next to a message: Unicode scalar values, not bytes.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

fn salutation(form: &ValidatedForm) -> String {
    match form.recipient_name() {
        Some(recipient) => format!("Hi {recipient}, "),
        None => "Hi, ".to_string(),
    }
}

fn role_phrase(form: &ValidatedForm) -> String {
    let position = form.position().unwrap_or(DEFAULT_POSITION);
    let company = form.company().unwrap_or(DEFAULT_COMPANY);
    match form.job_id() {
        Some(job_id) => format!("the {position} role at {company} (Job ID: {job_id})"),
        None => format!("the {position} role at {company}"),
    }
}

pub(crate) fn casual_invite(form: &ValidatedForm) -> String {
    format!(
        "{}I’m {}, I came across your profile and would love to connect! \
         Looking forward to exchanging ideas and learning from your experiences. 🚀",
        salutation(form),
        form.name()
    )
}

pub(crate) fn targeted_invite(form: &ValidatedForm) -> String {
    format!(
        "{}I’m {}. I came across your profile and saw that you work at {}. \
         I’m interested in the {} role there and would love to connect and learn from your experience.",
        salutation(form),
        form.name(),
        form.company().unwrap_or(DEFAULT_COMPANY),
        form.position().unwrap_or(DEFAULT_POSITION)
    )
}

pub(crate) fn referral_after_connecting(form: &ValidatedForm) -> String {
    let job_link = form
        .job_url()
        .map(|url| format!(" Here’s the job URL: {url}."))
        .unwrap_or_default();
    format!(
        "{}thank you for connecting! I’m very interested in {}. \
         I believe my skills align well with the position.{} \
         I’d greatly appreciate it if you could refer me for this opportunity. \
         Please let me know if I can share my resume or any other details to help with the process. \
         Thanks again for your time and support!",
        salutation(form),
        role_phrase(form),
        job_link
    )
}

pub(crate) fn referral_follow_up(form: &ValidatedForm) -> String {
    let job_link = form
        .job_url()
        .map(|url| format!("Here’s the job posting: {url}. "))
        .unwrap_or_default();
    format!(
        "{}\n\
         I hope you're doing well! I’m reaching out because I’m very interested in {}. \
         I believe my background and skills align well with this opportunity.\n\
         {}If you’re able to refer me for this position, I’d be incredibly grateful. \
         Please let me know if I can provide any additional information or my resume to assist with the process.\n\
         \n\
         Thanks again for your time and support!\n\
         \n\
         Best regards,\n\
         {}",
        salutation(form).trim_end(),
        role_phrase(form),
        job_link,
        form.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate, FieldId, FormInput, Variant};
    use pretty_assertions::assert_eq;

    fn validated(form: FormInput) -> ValidatedForm {
        validate(&form, Variant::Lenient.profile()).unwrap()
    }

    #[test]
    fn salutation_uses_recipient_when_present() {
        let form = validated(
            FormInput::new()
                .with(FieldId::Name, "Ann")
                .with(FieldId::RecipientName, "Bo"),
        );
        assert_eq!(salutation(&form), "Hi Bo, ");

        let form = validated(FormInput::new().with(FieldId::Name, "Ann"));
        assert_eq!(salutation(&form), "Hi, ");
    }

    #[test]
    fn role_phrase_falls_back_to_defaults() {
        let form = validated(FormInput::new().with(FieldId::Name, "Ann"));
        assert_eq!(role_phrase(&form), "the open role at your company");
    }

    #[test]
    fn referral_omits_missing_job_link() {
        let form = validated(
            FormInput::new()
                .with(FieldId::Name, "Ann")
                .with(FieldId::Company, "Acme"),
        );
        let text = referral_after_connecting(&form);
        assert!(!text.contains("job URL"));
        assert!(!text.contains("Job ID"));
        assert!(text.contains("role at Acme."));
    }

    #[test]
    fn follow_up_is_signed_by_sender() {
        let form = validated(
            FormInput::new()
                .with(FieldId::Name, "Ann")
                .with(FieldId::RecipientName, "Bo"),
        );
        let text = referral_follow_up(&form);
        assert!(text.starts_with("Hi Bo,\nI hope you're doing well!"));
        assert!(text.ends_with("\n\nBest regards,\nAnn"));
        assert_eq!(text.matches("\n\n").count(), 2);
    }

    #[test]
    fn char_count_counts_scalars_not_bytes() {
        assert_eq!(char_count("I’m 🚀"), 5);
        assert_eq!(char_count(""), 0);
    }
}

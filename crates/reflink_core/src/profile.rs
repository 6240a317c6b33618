//! Declarative form profiles.
//!
//! A profile pairs a `{field -> requiredness}` rule table with a
//! `{message kind -> formatter}` template table. The lenient and strict forms
//! are two rows of data, not two code paths.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::template::{self, Formatter, MessageKind};
use crate::FieldId;

/// Which form profile a session runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Only the sender's name is required; three message kinds.
    #[default]
    Lenient,
    /// Recipient, company and position are required too; two message kinds.
    Strict,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Lenient, Variant::Strict];

    pub fn key(self) -> &'static str {
        match self {
            Variant::Lenient => "lenient",
            Variant::Strict => "strict",
        }
    }

    pub fn profile(self) -> &'static FormProfile {
        match self {
            Variant::Lenient => &LENIENT,
            Variant::Strict => &STRICT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requiredness {
    Required,
    Optional,
}

pub struct FormProfile {
    pub variant: Variant,
    pub rules: &'static [(FieldId, Requiredness)],
    pub templates: &'static [(MessageKind, Formatter)],
    pub default_kind: MessageKind,
}

impl FormProfile {
    pub fn requiredness(&self, field: FieldId) -> Requiredness {
        self.rules
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, rule)| *rule)
            .unwrap_or(Requiredness::Optional)
    }

    pub fn is_required(&self, field: FieldId) -> bool {
        self.requiredness(field) == Requiredness::Required
    }

    /// Message kinds in presentation order.
    pub fn kinds(&self) -> impl Iterator<Item = MessageKind> + '_ {
        self.templates.iter().map(|(kind, _)| *kind)
    }

    pub fn supports(&self, kind: MessageKind) -> bool {
        self.kinds().any(|k| k == kind)
    }
}

impl fmt::Debug for FormProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormProfile")
            .field("variant", &self.variant)
            .field("rules", &self.rules)
            .field("kinds", &self.kinds().collect::<Vec<_>>())
            .field("default_kind", &self.default_kind)
            .finish()
    }
}

static LENIENT: FormProfile = FormProfile {
    variant: Variant::Lenient,
    rules: &[
        (FieldId::Name, Requiredness::Required),
        (FieldId::RecipientName, Requiredness::Optional),
        (FieldId::Company, Requiredness::Optional),
        (FieldId::Position, Requiredness::Optional),
        (FieldId::JobId, Requiredness::Optional),
        (FieldId::JobUrl, Requiredness::Optional),
    ],
    templates: &[
        (MessageKind::ReferralAfterConnecting, template::referral_after_connecting),
        (MessageKind::Invite, template::casual_invite),
        (MessageKind::ReferralFollowUp, template::referral_follow_up),
    ],
    default_kind: MessageKind::ReferralAfterConnecting,
};

static STRICT: FormProfile = FormProfile {
    variant: Variant::Strict,
    rules: &[
        (FieldId::Name, Requiredness::Required),
        (FieldId::RecipientName, Requiredness::Required),
        (FieldId::Company, Requiredness::Required),
        (FieldId::Position, Requiredness::Required),
        (FieldId::JobId, Requiredness::Optional),
        (FieldId::JobUrl, Requiredness::Optional),
    ],
    templates: &[
        (MessageKind::ReferralAfterConnecting, template::referral_after_connecting),
        (MessageKind::Invite, template::targeted_invite),
    ],
    default_kind: MessageKind::ReferralAfterConnecting,
};

use pretty_assertions::assert_eq;
use reflink_core::{
    char_count, generate, validate, FieldId, FormInput, MessageKind, ValidationErrorKind, Variant,
};

fn sample_form() -> FormInput {
    FormInput::new()
        .with(FieldId::Name, "Ann")
        .with(FieldId::RecipientName, "Bo")
        .with(FieldId::Company, "Acme")
        .with(FieldId::Position, "Engineer")
        .with(FieldId::JobId, "123")
        .with(FieldId::JobUrl, "https://acme.com/jobs/123")
}

#[test]
fn sample_input_fills_invite_and_referral() {
    for variant in Variant::ALL {
        let profile = variant.profile();
        let valid = validate(&sample_form(), profile).expect("sample form is valid");
        let messages = generate(&valid, profile);

        let invite = messages.get(MessageKind::Invite).expect("invite");
        assert!(invite.contains("Ann"), "{variant:?}: {invite}");
        assert!(invite.contains("Bo"), "{variant:?}: {invite}");

        let referral = messages
            .get(MessageKind::ReferralAfterConnecting)
            .expect("referral");
        for needle in ["Engineer", "Acme", "123", "https://acme.com/jobs/123"] {
            assert!(referral.contains(needle), "{variant:?} missing {needle}");
        }
    }
}

#[test]
fn lenient_texts_are_stable() {
    let profile = Variant::Lenient.profile();
    let valid = validate(&sample_form(), profile).unwrap();
    let messages = generate(&valid, profile);

    assert_eq!(
        messages.get(MessageKind::Invite).unwrap(),
        "Hi Bo, I’m Ann, I came across your profile and would love to connect! \
         Looking forward to exchanging ideas and learning from your experiences. 🚀"
    );
    assert_eq!(
        messages.get(MessageKind::ReferralAfterConnecting).unwrap(),
        "Hi Bo, thank you for connecting! I’m very interested in the Engineer role at Acme \
         (Job ID: 123). I believe my skills align well with the position. \
         Here’s the job URL: https://acme.com/jobs/123. \
         I’d greatly appreciate it if you could refer me for this opportunity. \
         Please let me know if I can share my resume or any other details to help with the process. \
         Thanks again for your time and support!"
    );
    assert_eq!(
        messages.get(MessageKind::ReferralFollowUp).unwrap(),
        "Hi Bo,\n\
         I hope you're doing well! I’m reaching out because I’m very interested in the Engineer \
         role at Acme (Job ID: 123). I believe my background and skills align well with this \
         opportunity.\n\
         Here’s the job posting: https://acme.com/jobs/123. If you’re able to refer me for this \
         position, I’d be incredibly grateful. Please let me know if I can provide any additional \
         information or my resume to assist with the process.\n\
         \n\
         Thanks again for your time and support!\n\
         \n\
         Best regards,\n\
         Ann"
    );
}

#[test]
fn generation_is_deterministic() {
    for variant in Variant::ALL {
        let profile = variant.profile();
        let first = generate(&validate(&sample_form(), profile).unwrap(), profile);
        let second = generate(&validate(&sample_form(), profile).unwrap(), profile);
        assert_eq!(first, second);
    }
}

#[test]
fn lenient_invite_without_recipient_uses_generic_salutation() {
    let profile = Variant::Lenient.profile();
    let form = FormInput::new().with(FieldId::Name, "Ann");
    let messages = generate(&validate(&form, profile).unwrap(), profile);

    let invite = messages.get(MessageKind::Invite).unwrap();
    assert!(invite.starts_with("Hi, I’m Ann,"));
    assert!(char_count(invite) > 0);
    assert_eq!(messages.len(), 3);
}

#[test]
fn strict_invite_text_is_stable() {
    let profile = Variant::Strict.profile();
    let messages = generate(&validate(&sample_form(), profile).unwrap(), profile);

    assert_eq!(
        messages.get(MessageKind::Invite).unwrap(),
        "Hi Bo, I’m Ann. I came across your profile and saw that you work at Acme. \
         I’m interested in the Engineer role there and would love to connect and learn from your experience."
    );
    assert_eq!(messages.get(MessageKind::ReferralFollowUp), None);
    assert_eq!(messages.len(), 2);
}

#[test]
fn messages_follow_profile_order() {
    let profile = Variant::Lenient.profile();
    let messages = generate(&validate(&sample_form(), profile).unwrap(), profile);
    let kinds: Vec<_> = messages.iter().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, profile.kinds().collect::<Vec<_>>());
}

#[test]
fn empty_or_blank_name_is_required() {
    for name in ["", "   ", "\t\n"] {
        let form = sample_form().with(FieldId::Name, name);
        for variant in Variant::ALL {
            let errors = validate(&form, variant.profile()).unwrap_err();
            let err = errors.for_field(FieldId::Name).expect("name error");
            assert_eq!(err.kind, ValidationErrorKind::Required);
            assert_eq!(err.message, "Your name is required");
        }
    }
}

#[test]
fn malformed_job_url_is_invalid_format() {
    for url in ["acme.com/jobs", "https://acme", "mailto:jobs@acme.com"] {
        let form = sample_form().with(FieldId::JobUrl, url);
        let errors = validate(&form, Variant::Lenient.profile()).unwrap_err();
        assert_eq!(errors.len(), 1);
        let err = errors.for_field(FieldId::JobUrl).expect("url error");
        assert_eq!(err.kind, ValidationErrorKind::InvalidFormat);
        assert_eq!(err.message, "Job URL must be a valid URL");
    }
}

#[test]
fn strict_reports_every_missing_field_at_once() {
    let form = FormInput::new().with(FieldId::JobUrl, "bad");
    let errors = validate(&form, Variant::Strict.profile()).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|err| err.field).collect();
    assert_eq!(
        fields,
        vec![
            FieldId::Name,
            FieldId::RecipientName,
            FieldId::Company,
            FieldId::Position,
            FieldId::JobUrl,
        ]
    );
}

#[test]
fn lenient_accepts_missing_optional_fields() {
    let form = FormInput::new().with(FieldId::Name, "Ann");
    let valid = validate(&form, Variant::Lenient.profile()).unwrap();
    assert_eq!(valid.recipient_name(), None);
    assert_eq!(valid.company(), None);
    assert_eq!(valid.job_id(), None);
}

use reflink_core::{AppViewModel, FieldRowView, MessageView, NoticeSeverity};

use super::constants::*;

/// Text for one refresh after a state change.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    if let Some(notice) = &view.notice {
        let marker = match notice.severity {
            NoticeSeverity::Info => "i",
            NoticeSeverity::Error => "!",
        };
        out.push_str(&format!("[{marker}] {}\n", notice.text));
    }

    if view.error_count > 0 {
        out.push_str(&render_errors(view));
    } else if let Some(message) = view.selected_message() {
        out.push_str(&render_selector(view));
        out.push_str(&render_message(message));
    }

    out
}

pub fn render_header(view: &AppViewModel) -> String {
    format!(
        "{TITLE}\n{TAGLINE}\nProfile: {} ({} message kinds)\n\n",
        view.variant.key(),
        view.kinds.len()
    )
}

pub fn field_prompt(row: &FieldRowView) -> String {
    let marker = if row.required { "*" } else { "" };
    if row.value.is_empty() {
        format!("{}{marker}: ", row.label)
    } else {
        format!("{}{marker} [{}]: ", row.label, row.value)
    }
}

pub fn render_errors(view: &AppViewModel) -> String {
    let mut out = format!(
        "Please fix {} field{}:\n",
        view.error_count,
        if view.error_count == 1 { "" } else { "s" }
    );
    for row in &view.fields {
        if let Some(error) = &row.error {
            out.push_str(&format!("  x {}: {}\n", row.label, error));
        }
    }
    out
}

pub fn render_selector(view: &AppViewModel) -> String {
    let items: Vec<String> = view
        .kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let marker = if *kind == view.selected { ">" } else { " " };
            format!("{marker}[{}] {}", i + 1, kind.title())
        })
        .collect();
    format!("{}\n", items.join("  "))
}

pub fn render_message(message: &MessageView) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    format!(
        "{rule}\n{}:\n{}\n{rule}\n{}\n",
        message.title,
        message.text,
        format_count(message)
    )
}

pub fn render_all(view: &AppViewModel) -> String {
    view.messages.iter().map(render_message).collect()
}

pub fn render_help(view: &AppViewModel) -> String {
    format!(
        "Commands: 1-{n} select message, {CMD_COPY} copy, {CMD_ALL} show all, {CMD_EDIT} edit fields, \
         {CMD_PROFILE} switch profile, {CMD_RESET} reset, {CMD_QUIT} quit\n",
        n = view.kinds.len()
    )
}

fn format_count(message: &MessageView) -> String {
    match message.char_limit {
        Some(limit) if message.over_limit => format!(
            "{} characters (limit {limit}, over by {})",
            message.char_count,
            message.char_count - limit
        ),
        Some(limit) => format!("{} / {limit} characters", message.char_count),
        None => format!("{} characters", message.char_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflink_core::{update, AppState, FieldId, MessageKind, Msg, Variant};

    fn view_after(msgs: Vec<Msg>, variant: Variant) -> AppViewModel {
        msgs.into_iter()
            .fold(AppState::with_variant(variant), |state, msg| {
                update(state, msg).0
            })
            .view()
    }

    fn set(field: FieldId, value: &str) -> Msg {
        Msg::FieldChanged {
            field,
            value: value.to_string(),
        }
    }

    #[test]
    fn prompt_marks_required_and_shows_current_value() {
        let view = view_after(vec![set(FieldId::Name, "Ann")], Variant::Strict);
        assert_eq!(
            field_prompt(view.field(FieldId::Name).unwrap()),
            "Your Name* [Ann]: "
        );
        assert_eq!(
            field_prompt(view.field(FieldId::JobId).unwrap()),
            "Job ID: "
        );
    }

    #[test]
    fn errors_are_listed_by_label() {
        let view = view_after(vec![Msg::SubmitClicked], Variant::Lenient);
        let text = render(&view);
        assert!(text.starts_with("Please fix 1 field:\n"));
        assert!(text.contains("  x Your Name: Your name is required\n"));
    }

    #[test]
    fn message_block_shows_exact_count() {
        let view = view_after(
            vec![
                set(FieldId::Name, "Ann"),
                Msg::SubmitClicked,
                Msg::KindSelected(MessageKind::Invite),
            ],
            Variant::Lenient,
        );
        let message = view.selected_message().unwrap();
        let text = render(&view);
        assert!(text.contains(&message.text));
        assert!(text.contains(&format!("{} / 300 characters", message.char_count)));
        assert!(text.contains(">[2] LinkedIn Personalized Invite"));
    }

    #[test]
    fn over_limit_count_says_by_how_much() {
        let message = MessageView {
            kind: MessageKind::Invite,
            title: "Invite",
            text: String::new(),
            char_count: 310,
            char_limit: Some(300),
            over_limit: true,
        };
        assert_eq!(format_count(&message), "310 characters (limit 300, over by 10)");
    }
}

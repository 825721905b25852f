//! Builds the TUI screen ViewModel from `App`.
//!
//! Every decision the views need (labels, error text, visibility, status
//! colour) is made here so the widgets only lay things out.

use walink_runtime::ClipboardWriter;
use walink_types::{Field, MAX_MESSAGE_CHARS};

use crate::app::App;
use crate::presentation::view_models::{
    FieldViewModel, FormViewModel, LinkPanelViewModel, PreviewViewModel, StatusBarViewModel,
    StatusLevel, TuiScreenViewModel,
};

pub const TITLE: &str = "My Whats Link";
pub const IDLE_HINT: &str = "Preencha o telefone e pressione Enter";

/// Snapshot of everything the screen shows for a terminal `width` columns wide.
pub fn build_screen_view_model<C: ClipboardWriter>(
    app: &App<C>,
    width: u16,
) -> TuiScreenViewModel {
    TuiScreenViewModel {
        title: TITLE.to_string(),
        form: build_form(app),
        link: LinkPanelViewModel {
            link: app.form().link().map(|l| l.to_string()),
            copied: app.is_copied(),
        },
        preview: build_preview(app, width),
        status_bar: build_status_bar(app),
    }
}

fn build_form<C: ClipboardWriter>(app: &App<C>) -> FormViewModel {
    let form = app.form();

    let fields = [Field::Phone, Field::Message]
        .into_iter()
        .map(|field| {
            let (label, placeholder, counter) = match field {
                Field::Phone => ("Telefone", "(11) 98765-4321", None),
                Field::Message => (
                    "Mensagem",
                    "Olá! Gostaria de mais informações",
                    Some((form.message().chars().count(), MAX_MESSAGE_CHARS)),
                ),
            };

            FieldViewModel {
                field,
                label: label.to_string(),
                value: form.value(field).to_string(),
                placeholder: placeholder.to_string(),
                error: form.error_for(field).map(|e| e.message().to_string()),
                focused: app.focus() == field,
                counter,
            }
        })
        .collect();

    FormViewModel { fields }
}

fn build_preview<C: ClipboardWriter>(app: &App<C>, width: u16) -> PreviewViewModel {
    let message = app.form().message();

    PreviewViewModel {
        visible: width >= app.preview_min_width(),
        clock: app.clock_label().to_string(),
        contact: app.form().phone().to_string(),
        message: (!message.is_empty()).then(|| message.to_string()),
    }
}

fn build_status_bar<C: ClipboardWriter>(app: &App<C>) -> StatusBarViewModel {
    match app.status() {
        Some(status) => StatusBarViewModel {
            status_message: status.message.clone(),
            status_level: status.level,
        },
        None => StatusBarViewModel {
            status_message: IDLE_HINT.to_string(),
            status_level: StatusLevel::Info,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Instant;
    use walink_runtime::Config;
    use walink_testing::RecordingClipboard;

    fn app(phone: &str, message: &str) -> App<RecordingClipboard> {
        App::new(&Config::default(), RecordingClipboard::new(), Instant::now(), Utc::now())
            .unwrap()
            .with_input(phone, message)
    }

    #[test]
    fn test_preview_follows_fields() {
        let vm = build_screen_view_model(&app("11987654321", "Oi"), 120);

        assert!(vm.preview.visible);
        assert_eq!(vm.preview.contact, "(11) 98765-4321");
        assert_eq!(vm.preview.message.as_deref(), Some("Oi"));
    }

    #[test]
    fn test_empty_message_has_no_bubble() {
        let vm = build_screen_view_model(&app("11987654321", ""), 120);
        assert!(vm.preview.message.is_none());
    }

    #[test]
    fn test_preview_hidden_below_min_width() {
        let vm = build_screen_view_model(&app("", ""), 89);
        assert!(!vm.preview.visible);
    }

    #[test]
    fn test_message_counter_counts_chars() {
        let vm = build_screen_view_model(&app("", "Olá"), 120);
        let message = &vm.form.fields[1];

        assert_eq!(message.counter, Some((3, 200)));
        assert!(!message.focused);
        assert!(vm.form.fields[0].focused);
    }

    #[test]
    fn test_errors_show_after_submit() {
        let mut app = app("119876543", "");
        let before = build_screen_view_model(&app, 120);
        assert!(before.form.fields[0].error.is_none());

        app.submit(Instant::now());
        let after = build_screen_view_model(&app, 120);

        assert_eq!(
            after.form.fields[0].error.as_deref(),
            Some("O telefone deve ter 10 ou 11 dígitos")
        );
        assert_eq!(after.status_bar.status_level, StatusLevel::Error);
    }

    #[test]
    fn test_idle_status_is_hint() {
        let vm = build_screen_view_model(&app("", ""), 120);
        assert_eq!(vm.status_bar.status_message, IDLE_HINT);
        assert_eq!(vm.status_bar.status_level, StatusLevel::Info);
    }
}

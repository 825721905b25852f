use walink_types::{FormInput, GeneratedLink};

use crate::presentation::view_models::{
    CommandResultViewModel, FormatViewModel, Guidance, LinkViewModel, StatusBadge,
};

/// What happened to a `--copy` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyReport {
    Copied,
    /// Written, but the selection goes away with this process unless a
    /// clipboard manager picks it up.
    HeldUntilExit,
    Failed(String),
}

/// `copy` is `None` when no copy was requested.
pub fn present_link(
    input: &FormInput,
    link: &GeneratedLink,
    copy: Option<CopyReport>,
) -> CommandResultViewModel<LinkViewModel> {
    let copied = matches!(copy, Some(CopyReport::Copied));

    let content = LinkViewModel {
        phone: input.phone.clone(),
        message: input.message.clone(),
        link: link.to_string(),
        copied,
    };

    let mut result = CommandResultViewModel::new(content);

    match copy {
        None => {}
        Some(CopyReport::Copied) => {
            result = result.with_badge(StatusBadge::success("Link copiado!"));
        }
        Some(CopyReport::HeldUntilExit) => {
            result = result
                .with_badge(StatusBadge::warning(
                    "Link copiado, mas pode ser perdido ao sair",
                ))
                .with_suggestion(
                    Guidance::new("Keep the link on the clipboard from the interactive form")
                        .with_command("walink"),
                );
        }
        Some(CopyReport::Failed(reason)) => {
            result = result
                .with_badge(StatusBadge::warning(format!(
                    "Não foi possível copiar: {}",
                    reason
                )))
                .with_suggestion(Guidance::new(
                    "Copy needs a desktop session; pipe the link instead",
                ));
        }
    }

    result
}

pub fn present_format(
    input: &str,
    digits: String,
    formatted: String,
) -> CommandResultViewModel<FormatViewModel> {
    CommandResultViewModel::new(FormatViewModel {
        input: input.to_string(),
        digits,
        formatted,
    })
}

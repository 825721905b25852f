use std::path::Path;

use walink_runtime::Config;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigPathViewModel, ConfigShowViewModel,
    Guidance, StatusBadge,
};

pub fn present_config_path(path: &Path) -> CommandResultViewModel<ConfigPathViewModel> {
    CommandResultViewModel::new(ConfigPathViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
    })
}

pub fn present_config_show(
    path: &Path,
    config: Config,
    toml: String,
) -> CommandResultViewModel<ConfigShowViewModel> {
    let from_file = path.exists();
    let mut result = CommandResultViewModel::new(ConfigShowViewModel {
        path: path.display().to_string(),
        from_file,
        config,
        toml,
    });

    if !from_file {
        result = result.with_suggestion(
            Guidance::new("Create a config file with the defaults")
                .with_command("walink config init"),
        );
    }

    result
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let label = if overwritten {
        "Config overwritten with defaults"
    } else {
        "Config created"
    };

    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success(label))
    .with_suggestion(
        Guidance::new("Review the effective settings").with_command("walink config show"),
    )
}

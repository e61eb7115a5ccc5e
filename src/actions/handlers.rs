//! Preset action handlers

use std::path::Path;

use tracing::{error, info, warn};

use super::responses::ActionResponse;
use crate::{
    config::PresetAction,
    preset::{model::display_name, model::normalize_name, Preset, PresetDuration, PresetError},
};

/// Run one preset action against the store at `store`
pub fn handle_preset_action(action: &PresetAction, store: &Path) -> ActionResponse {
    match action {
        PresetAction::Add { name, duration } => add_handler(name, *duration, store),
        PresetAction::Use { name } => use_handler(name, store),
        PresetAction::Rename { old_name, new_name } => rename_handler(old_name, new_name, store),
        PresetAction::ModifyDuration { name, duration } => modify_duration_handler(name, *duration, store),
        PresetAction::Delete { name } => delete_handler(name, store),
        PresetAction::List => list_handler(store),
    }
}

/// Handle --add-preset - Save a new named duration
pub fn add_handler(name: &str, duration: PresetDuration, store: &Path) -> ActionResponse {
    let shown = shown_name(name);
    match Preset::new(name, duration, store).and_then(|preset| preset.add()) {
        Ok(record) => {
            info!("Preset {} added", record.name);
            ActionResponse::done(format!("New preset added: {} - {}", shown, record.duration))
        }
        Err(PresetError::AlreadyExists(_)) => {
            warn!("Preset {} already exists", shown);
            ActionResponse::failed(format!(
                "The preset name {} already exists. Please choose another name.",
                shown
            ))
        }
        Err(e) => store_failure(e),
    }
}

/// Handle --use-preset - Look up a duration to run
pub fn use_handler(name: &str, store: &Path) -> ActionResponse {
    let shown = shown_name(name);
    match Preset::named(name, store).and_then(|preset| preset.get()) {
        Ok(duration) => {
            info!("Using preset {} ({})", shown, duration);
            ActionResponse::run(format!("Preset {} - {}", shown, duration), duration)
        }
        Err(PresetError::NotFound(_)) => ActionResponse::failed(format!(
            "The preset {} does not exist. Please choose an existing preset.",
            shown
        )),
        Err(e) => store_failure(e),
    }
}

/// Handle --rename-preset - Move a preset to a new name
pub fn rename_handler(old_name: &str, new_name: &str, store: &Path) -> ActionResponse {
    let (old_shown, new_shown) = (shown_name(old_name), shown_name(new_name));
    let result = Preset::named(old_name, store).and_then(|mut preset| preset.rename(new_name));

    match result {
        Ok(()) => ActionResponse::done(format!("Preset {} renamed: {}", old_shown, new_shown)),
        Err(PresetError::NotFound(_)) => {
            ActionResponse::failed(format!("The preset {} does not exist.", old_shown))
        }
        Err(PresetError::AlreadyExists(_)) => ActionResponse::failed(format!(
            "The new name {} is not available. Please choose another name.",
            new_shown
        )),
        Err(e) => store_failure(e),
    }
}

/// Handle --modify-preset-duration - Replace a preset's duration
pub fn modify_duration_handler(name: &str, duration: PresetDuration, store: &Path) -> ActionResponse {
    let shown = shown_name(name);
    let result = Preset::named(name, store).and_then(|mut preset| {
        preset.set_duration(duration.hours, duration.minutes, duration.seconds)
    });

    match result {
        Ok(()) => ActionResponse::done(format!("New preset duration: {} - {}", shown, duration)),
        Err(PresetError::NotFound(_)) => ActionResponse::failed(format!(
            "The preset {} does not exist. Please choose an existing name.",
            shown
        )),
        Err(e) => store_failure(e),
    }
}

/// Handle --del-preset - Remove a preset
pub fn delete_handler(name: &str, store: &Path) -> ActionResponse {
    let shown = shown_name(name);
    match Preset::named(name, store).and_then(|preset| preset.delete()) {
        Ok(()) => ActionResponse::done(format!("Preset deleted: {}", shown)),
        Err(PresetError::NotFound(_)) => {
            ActionResponse::failed(format!("The preset {} does not exist.", shown))
        }
        Err(e) => store_failure(e),
    }
}

/// Handle --list-presets - Show every saved name
pub fn list_handler(store: &Path) -> ActionResponse {
    match Preset::named("", store).and_then(|preset| preset.get_all()) {
        Ok(names) => ActionResponse::done(format!("Available presets:\n  {}", names.join("\n  "))),
        Err(PresetError::EmptyStore) => {
            ActionResponse::failed("No existing preset. Add one with --add-preset.".to_string())
        }
        Err(e) => store_failure(e),
    }
}

fn shown_name(name: &str) -> String {
    display_name(&normalize_name(name))
}

fn store_failure(e: PresetError) -> ActionResponse {
    error!("Preset store failure: {}", e);
    ActionResponse::failed(format!("minutaria: error: {}", e))
}

//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use clap::{ArgGroup, Parser};
use thiserror::Error;

use crate::preset::PresetDuration;

/// Timer run when neither a duration nor a preset is given
pub const DEFAULT_TIMER: PresetDuration = PresetDuration::new(0, 0, 5);

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "minutaria")]
#[command(
    about = "Execute a given timer from min 00:00:01 to max 23:59:59. \
             Options --add-preset and --modify-preset-duration shall be used with duration parameters."
)]
#[command(after_help = "If no timer is provided, execute the default: 0:00:05.")]
#[command(disable_version_flag = true)]
#[command(group(ArgGroup::new("preset_action").multiple(false)))]
pub struct Config {
    /// Print version and exit
    #[arg(short = 'v', long = "version")]
    pub show_version: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Hour(s) to time
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub hours: Option<i64>,

    /// Minute(s) to time
    #[arg(short = 'M', long, allow_negative_numbers = true)]
    pub minutes: Option<i64>,

    /// Second(s) to time
    #[arg(short = 'S', long, allow_negative_numbers = true)]
    pub seconds: Option<i64>,

    /// Name of the timer preset to create
    #[arg(long = "add-preset", visible_alias = "ap", alias = "add_preset", value_name = "PRESET_NAME", group = "preset_action")]
    pub add_preset: Option<String>,

    /// Name of the timer preset to use
    #[arg(short = 'p', long = "use-preset", alias = "use_preset", value_name = "PRESET_NAME", group = "preset_action")]
    pub use_preset: Option<String>,

    /// Names of the timer preset to rename and the new one
    #[arg(
        long = "rename-preset",
        visible_alias = "rp",
        alias = "rename_preset",
        num_args = 2,
        value_names = ["OLD_NAME", "NEW_NAME"],
        group = "preset_action"
    )]
    pub rename_preset: Option<Vec<String>>,

    /// Name of the timer preset to modify
    #[arg(
        long = "modify-preset-duration",
        visible_alias = "mpd",
        alias = "modify_preset_duration",
        value_name = "PRESET_NAME",
        group = "preset_action"
    )]
    pub modify_preset_duration: Option<String>,

    /// Name of the timer preset to delete
    #[arg(long = "del-preset", visible_alias = "dp", alias = "del_preset", value_name = "PRESET_NAME", group = "preset_action")]
    pub del_preset: Option<String>,

    /// List every saved preset
    #[arg(short = 'l', long = "list-presets", group = "preset_action")]
    pub list_presets: bool,

    /// JSON file holding the presets
    #[arg(long, env = "MINUTARIA_PRESET_FILE", default_value = "preset.json")]
    pub preset_file: PathBuf,

    /// Countdown refresh interval in milliseconds
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_ms: u64,

    /// Shell command to run once the timer expires
    #[arg(long, value_name = "COMMAND")]
    pub on_expiry: Option<String>,
}

/// What a command line asks for once validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    RunTimer(PresetDuration),
    Preset(PresetAction),
}

/// One preset-management request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetAction {
    Add { name: String, duration: PresetDuration },
    Use { name: String },
    Rename { old_name: String, new_name: String },
    ModifyDuration { name: String, duration: PresetDuration },
    Delete { name: String },
    List,
}

/// Rejected command line input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("argument -H/--hours: invalid choice: {0} (choose from 0 to 23)")]
    HoursOutOfRange(i64),

    #[error("argument -M/--minutes: invalid choice: {0} (choose from 0 to 59)")]
    MinutesOutOfRange(i64),

    #[error("argument -S/--seconds: invalid choice: {0} (choose from 1 to 59)")]
    SecondsOutOfRange(i64),

    #[error("argument --{flag}: incomplete input: {name} (indicate the preset name and its timer with -H/-M/-S)")]
    MissingDuration { flag: &'static str, name: String },

    #[error("argument --{flag}: invalid input: only indicate the preset name(s)")]
    UnexpectedDuration { flag: &'static str },

    #[error("argument --rename-preset: expected 2 names (old and new), got {0}")]
    RenameArity(usize),
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on debug flag
    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "warn" }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    /// Validate ranges and flag combinations and decide what to do
    pub fn resolve(&self) -> Result<Invocation, ConfigError> {
        let duration = self.duration()?;

        if let Some(name) = &self.add_preset {
            let duration = duration.ok_or_else(|| ConfigError::MissingDuration {
                flag: "add-preset",
                name: name.clone(),
            })?;
            return Ok(Invocation::Preset(PresetAction::Add {
                name: name.clone(),
                duration,
            }));
        }

        if let Some(name) = &self.modify_preset_duration {
            let duration = duration.ok_or_else(|| ConfigError::MissingDuration {
                flag: "modify-preset-duration",
                name: name.clone(),
            })?;
            return Ok(Invocation::Preset(PresetAction::ModifyDuration {
                name: name.clone(),
                duration,
            }));
        }

        if let Some(names) = &self.rename_preset {
            reject_duration(duration, "rename-preset")?;
            let [old_name, new_name] = names.as_slice() else {
                return Err(ConfigError::RenameArity(names.len()));
            };
            return Ok(Invocation::Preset(PresetAction::Rename {
                old_name: old_name.clone(),
                new_name: new_name.clone(),
            }));
        }

        if let Some(name) = &self.del_preset {
            reject_duration(duration, "del-preset")?;
            return Ok(Invocation::Preset(PresetAction::Delete { name: name.clone() }));
        }

        if let Some(name) = &self.use_preset {
            reject_duration(duration, "use-preset")?;
            return Ok(Invocation::Preset(PresetAction::Use { name: name.clone() }));
        }

        if self.list_presets {
            reject_duration(duration, "list-presets")?;
            return Ok(Invocation::Preset(PresetAction::List));
        }

        Ok(Invocation::RunTimer(duration.unwrap_or(DEFAULT_TIMER)))
    }

    /// The requested duration, if any component is non-zero.
    ///
    /// Missing components default to zero.
    fn duration(&self) -> Result<Option<PresetDuration>, ConfigError> {
        if let Some(hours) = self.hours.filter(|h| !(0..=23).contains(h)) {
            return Err(ConfigError::HoursOutOfRange(hours));
        }
        if let Some(minutes) = self.minutes.filter(|m| !(0..=59).contains(m)) {
            return Err(ConfigError::MinutesOutOfRange(minutes));
        }
        if let Some(seconds) = self.seconds.filter(|s| !(1..=59).contains(s)) {
            return Err(ConfigError::SecondsOutOfRange(seconds));
        }

        let duration = PresetDuration::new(
            self.hours.unwrap_or(0),
            self.minutes.unwrap_or(0),
            self.seconds.unwrap_or(0),
        );
        Ok((!duration.is_zero()).then_some(duration))
    }
}

fn reject_duration(duration: Option<PresetDuration>, flag: &'static str) -> Result<(), ConfigError> {
    match duration {
        Some(_) => Err(ConfigError::UnexpectedDuration { flag }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(args: &[&str]) -> Result<Invocation, ConfigError> {
        let mut argv = vec!["minutaria"];
        argv.extend_from_slice(args);
        <Config as Parser>::try_parse_from(argv).unwrap().resolve()
    }

    #[test]
    fn test_default_timer() {
        assert_eq!(resolve(&[]), Ok(Invocation::RunTimer(DEFAULT_TIMER)));
        assert_eq!(resolve(&["-H", "0"]), Ok(Invocation::RunTimer(DEFAULT_TIMER)));
    }

    #[test]
    fn test_partial_duration_defaults_to_zero() {
        assert_eq!(
            resolve(&["-M", "25"]),
            Ok(Invocation::RunTimer(PresetDuration::new(0, 25, 0)))
        );
        assert_eq!(
            resolve(&["-H", "1", "-S", "30"]),
            Ok(Invocation::RunTimer(PresetDuration::new(1, 0, 30)))
        );
    }

    #[test]
    fn test_ranges() {
        assert_eq!(resolve(&["-H", "24"]), Err(ConfigError::HoursOutOfRange(24)));
        assert_eq!(resolve(&["-M", "60"]), Err(ConfigError::MinutesOutOfRange(60)));
        assert_eq!(resolve(&["-M", "-1"]), Err(ConfigError::MinutesOutOfRange(-1)));
        assert_eq!(resolve(&["-S", "0"]), Err(ConfigError::SecondsOutOfRange(0)));
        assert_eq!(resolve(&["-S", "60"]), Err(ConfigError::SecondsOutOfRange(60)));
        assert!(resolve(&["-H", "23", "-M", "59", "-S", "59"]).is_ok());
    }

    #[test]
    fn test_add_preset_requires_duration() {
        assert_eq!(
            resolve(&["--add-preset", "gym"]),
            Err(ConfigError::MissingDuration {
                flag: "add-preset",
                name: "gym".into()
            })
        );
        assert_eq!(
            resolve(&["--ap", "gym", "-M", "30"]),
            Ok(Invocation::Preset(PresetAction::Add {
                name: "gym".into(),
                duration: PresetDuration::new(0, 30, 0)
            }))
        );
    }

    #[test]
    fn test_modify_duration() {
        assert!(matches!(
            resolve(&["--mpd", "gym"]),
            Err(ConfigError::MissingDuration { .. })
        ));
        assert_eq!(
            resolve(&["--modify-preset-duration", "gym", "-H", "1"]),
            Ok(Invocation::Preset(PresetAction::ModifyDuration {
                name: "gym".into(),
                duration: PresetDuration::new(1, 0, 0)
            }))
        );
    }

    #[test]
    fn test_name_only_actions_reject_duration() {
        assert_eq!(
            resolve(&["-p", "gym", "-S", "5"]),
            Err(ConfigError::UnexpectedDuration { flag: "use-preset" })
        );
        assert_eq!(
            resolve(&["--dp", "gym", "-M", "1"]),
            Err(ConfigError::UnexpectedDuration { flag: "del-preset" })
        );
        assert_eq!(
            resolve(&["--rename-preset", "gym", "yoga", "-H", "2"]),
            Err(ConfigError::UnexpectedDuration { flag: "rename-preset" })
        );
    }

    #[test]
    fn test_name_only_actions() {
        assert_eq!(
            resolve(&["--rp", "gym", "yoga"]),
            Ok(Invocation::Preset(PresetAction::Rename {
                old_name: "gym".into(),
                new_name: "yoga".into()
            }))
        );
        assert_eq!(
            resolve(&["--del_preset", "gym"]),
            Ok(Invocation::Preset(PresetAction::Delete { name: "gym".into() }))
        );
        assert_eq!(
            resolve(&["-p", "gym"]),
            Ok(Invocation::Preset(PresetAction::Use { name: "gym".into() }))
        );
        assert_eq!(resolve(&["-l"]), Ok(Invocation::Preset(PresetAction::List)));
    }

    #[test]
    fn test_rename_needs_two_names() {
        let mut config = <Config as Parser>::try_parse_from(["minutaria"]).unwrap();
        config.rename_preset = Some(vec!["gym".into()]);
        assert_eq!(config.resolve(), Err(ConfigError::RenameArity(1)));

        config.rename_preset = Some(vec!["gym".into(), "yoga".into(), "tea".into()]);
        assert_eq!(config.resolve(), Err(ConfigError::RenameArity(3)));
    }

    #[test]
    fn test_preset_actions_are_exclusive() {
        let result = <Config as Parser>::try_parse_from(["minutaria", "-p", "gym", "--del-preset", "yoga"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags() {
        let config = <Config as Parser>::try_parse_from([
            "minutaria",
            "-d",
            "--preset-file",
            "/tmp/presets.json",
            "--refresh-ms",
            "250",
        ])
        .unwrap();

        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.preset_file, PathBuf::from("/tmp/presets.json"));
        assert_eq!(config.refresh_interval(), Duration::from_millis(250));
        assert!(<Config as Parser>::try_parse_from(["minutaria", "--refresh-ms", "0"]).is_err());
    }
}

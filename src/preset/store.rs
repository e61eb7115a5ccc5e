//! JSON file backed preset store
//!
//! Every operation reads the whole file, scans it linearly, and rewrites it
//! in full when something changed. Nothing is cached between calls, so two
//! handles on the same path always see each other's writes. Nothing locks the
//! file either: two processes writing concurrently race and the last writer
//! wins.

use std::{
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info};

use super::{
    error::{PresetError, Result},
    model::{display_name, normalize_name, PresetDuration, PresetRecord},
};

/// A handle on one named preset inside a store file.
///
/// The handle carries a candidate duration used by [`Preset::add`]; other
/// operations only use the name.
#[derive(Debug, Clone)]
pub struct Preset {
    name: String,
    duration: PresetDuration,
    path: PathBuf,
}

impl Preset {
    /// Create a handle, initializing the store file to `[]` if it does not
    /// exist yet.
    pub fn new(name: &str, duration: PresetDuration, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_store(&path)?;

        Ok(Self {
            name: normalize_name(name),
            duration,
            path,
        })
    }

    /// Create a handle with a zero candidate duration
    pub fn named(name: &str, path: impl Into<PathBuf>) -> Result<Self> {
        Self::new(name, PresetDuration::default(), path)
    }

    /// Lowercase name this handle refers to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Candidate duration carried by the handle
    pub fn duration(&self) -> PresetDuration {
        self.duration
    }

    /// Append this preset to the store and return the stored record
    pub fn add(&self) -> Result<PresetRecord> {
        let mut records = load(&self.path)?;
        if find(&records, &self.name).is_some() {
            return Err(PresetError::AlreadyExists(self.name.clone()));
        }

        let record = PresetRecord::new(&self.name, self.duration);
        records.push(record.clone());
        save(&self.path, &records)?;

        info!("Added preset {} ({})", record.name, record.duration);
        Ok(record)
    }

    /// Look up the stored duration for this name.
    ///
    /// Presence is decided by the name match alone, so a stored `0:00:00`
    /// preset is found like any other.
    pub fn get(&self) -> Result<PresetDuration> {
        let records = load(&self.path)?;
        find(&records, &self.name)
            .map(|index| records[index].duration)
            .ok_or_else(|| PresetError::NotFound(self.name.clone()))
    }

    /// Every stored name, display-cased, in storage order
    pub fn get_all(&self) -> Result<Vec<String>> {
        let records = load(&self.path)?;
        if records.is_empty() {
            return Err(PresetError::EmptyStore);
        }

        Ok(records.iter().map(|record| display_name(&record.name)).collect())
    }

    /// Remove this preset from the store
    pub fn delete(&self) -> Result<()> {
        let mut records = load(&self.path)?;
        let index = find(&records, &self.name)
            .ok_or_else(|| PresetError::NotFound(self.name.clone()))?;

        records.remove(index);
        save(&self.path, &records)?;

        info!("Deleted preset {}", self.name);
        Ok(())
    }

    /// Change the stored name; the handle follows the record.
    ///
    /// Renaming to the current name (in any casing) succeeds without
    /// rewriting the file.
    pub fn rename(&mut self, new_name: &str) -> Result<()> {
        let new_name = normalize_name(new_name);
        let mut records = load(&self.path)?;
        let index = find(&records, &self.name)
            .ok_or_else(|| PresetError::NotFound(self.name.clone()))?;

        if new_name == self.name {
            debug!("Rename of {} to itself, nothing to write", self.name);
            return Ok(());
        }
        if find(&records, &new_name).is_some() {
            return Err(PresetError::AlreadyExists(new_name));
        }

        records[index].name = new_name.clone();
        save(&self.path, &records)?;

        info!("Renamed preset {} to {}", self.name, new_name);
        self.name = new_name;
        Ok(())
    }

    /// Overwrite the stored duration; the handle's candidate duration follows
    pub fn set_duration(&mut self, hours: i64, minutes: i64, seconds: i64) -> Result<()> {
        let duration = PresetDuration::new(hours, minutes, seconds);
        let mut records = load(&self.path)?;
        let index = find(&records, &self.name)
            .ok_or_else(|| PresetError::NotFound(self.name.clone()))?;

        records[index].duration = duration;
        save(&self.path, &records)?;

        info!("Preset {} duration set to {}", self.name, duration);
        self.duration = duration;
        Ok(())
    }
}

fn find(records: &[PresetRecord], name: &str) -> Option<usize> {
    records.iter().position(|record| record.name == name)
}

/// Create an empty store at `path` unless a file is already there
fn ensure_store(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(_) => return Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(PresetError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PresetError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    info!("Creating empty preset store at {}", path.display());
    save(path, &[])
}

fn load(path: &Path) -> Result<Vec<PresetRecord>> {
    let contents = fs::read_to_string(path).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<PresetRecord> =
        serde_json::from_str(&contents).map_err(|source| PresetError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded {} presets from {}", records.len(), path.display());
    Ok(records)
}

/// Rewrite the whole store through a sibling temp file and a rename, so
/// readers never see a half-written array.
fn save(path: &Path, records: &[PresetRecord]) -> Result<()> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records
        .serialize(&mut serializer)
        .map_err(|source| PresetError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut tmp_path = OsString::from(path.as_os_str());
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    fs::write(&tmp_path, &buf).map_err(|source| PresetError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} presets to {}", records.len(), path.display());
    Ok(())
}

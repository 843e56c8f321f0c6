use crate::error::{HdResult, HorseDebugError};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "horsedebug.cfg";
pub const KEY_SHOW_3D_OVERLAY: &str = "show3DOverlay";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OverlayConfig {
    pub show_3d_overlay: bool,
}

impl OverlayConfig {
    /// Applies the recognized keys of a flat `key=value` document on top of
    /// `self`. Keys absent from the document keep their current value.
    pub fn merge_from_reader<R: Read>(&self, reader: R) -> HdResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'=')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut merged = *self;
        for result in rdr.records() {
            let rec = result?;
            let key = rec.get(0).unwrap_or("");
            if key.is_empty() {
                continue;
            }
            if rec.len() < 2 {
                return Err(HorseDebugError::Config(format!(
                    "line without '=' separator: '{}'",
                    key
                )));
            }
            // Values may themselves contain '='; glue the tail back together.
            let value = rec.iter().skip(1).collect::<Vec<_>>().join("=");
            if key == KEY_SHOW_3D_OVERLAY {
                merged.show_3d_overlay = value == "true";
            }
        }
        Ok(merged)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> HdResult<()> {
        let mut out = writer;
        writeln!(out, "#HorseDebug configuration")?;
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'=')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(out);
        let value = self.show_3d_overlay.to_string();
        wtr.write_record([KEY_SHOW_3D_OVERLAY, value.as_str()])?;
        wtr.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigState {
    Unloaded,
    Loaded,
}

/// Write-through store for [`OverlayConfig`]. Load and save failures are
/// swallowed: the in-memory value stays authoritative.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: OverlayConfig,
    state: ConfigState,
}

impl ConfigStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config: OverlayConfig::default(),
            state: ConfigState::Unloaded,
        }
    }

    /// Store for `horsedebug.cfg` inside the host run directory.
    pub fn in_run_dir<P: AsRef<Path>>(run_dir: P) -> Self {
        Self::new(run_dir.as_ref().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> ConfigState {
        self.state
    }

    pub fn config(&self) -> OverlayConfig {
        self.config
    }

    pub fn show_3d_overlay(&self) -> bool {
        self.config.show_3d_overlay
    }

    /// Reads the file over the in-memory value, then rewrites it so it always
    /// reflects the resolved state.
    pub fn load(&mut self) -> OverlayConfig {
        match self.try_read() {
            Ok(config) => self.config = config,
            Err(e) => debug!(target: "HorseDebug", "config load from {:?} ignored: {}", self.path, e),
        }
        self.state = ConfigState::Loaded;
        self.save();
        self.config
    }

    pub fn set_show_3d_overlay(&mut self, show: bool) {
        self.config.show_3d_overlay = show;
        self.save();
    }

    /// Flips the overlay flag and persists; returns the new value.
    pub fn toggle_show_3d_overlay(&mut self) -> bool {
        let next = !self.show_3d_overlay();
        self.set_show_3d_overlay(next);
        next
    }

    pub fn save(&self) {
        if let Err(e) = self.try_write() {
            debug!(target: "HorseDebug", "config save to {:?} ignored: {}", self.path, e);
        }
    }

    fn try_read(&self) -> HdResult<OverlayConfig> {
        let file = File::open(&self.path)?;
        self.config.merge_from_reader(file)
    }

    fn try_write(&self) -> HdResult<()> {
        let file = File::create(&self.path)?;
        self.config.write_to(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_flat_document() {
        let doc = "#comment\n\nshow3DOverlay = true\nother=1\n";
        let c = OverlayConfig::default()
            .merge_from_reader(Cursor::new(doc))
            .unwrap();
        assert!(c.show_3d_overlay);
    }

    #[test]
    fn non_true_value_is_false() {
        let start = OverlayConfig {
            show_3d_overlay: true,
        };
        let c = start
            .merge_from_reader(Cursor::new("show3DOverlay=yes\n"))
            .unwrap();
        assert!(!c.show_3d_overlay);
    }

    #[test]
    fn absent_key_keeps_value() {
        let start = OverlayConfig {
            show_3d_overlay: true,
        };
        let c = start.merge_from_reader(Cursor::new("#empty\n")).unwrap();
        assert!(c.show_3d_overlay);
    }

    #[test]
    fn writes_key_value_line() {
        let mut buf = Vec::new();
        OverlayConfig {
            show_3d_overlay: true,
        }
        .write_to(&mut buf)
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().any(|l| l == "show3DOverlay=true"));
    }
}

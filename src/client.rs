use crate::config::ConfigStore;
use crate::error::{HdResult, HorseDebugError};
use crate::host::{
    Camera, DefaultKey, EnglishTranslator, HostWorld, HudSurface, KeyBinding, KeyBindingSpec,
    KeyBindings, Translator, WorldSurface,
};
use crate::overlay::{self, PanelLayout};
use std::fmt;
use std::path::Path;
use tracing::info;

pub const TOGGLE_KEY: KeyBindingSpec = KeyBindingSpec {
    translation_key: "gui.act.invView.horse",
    category: "key.categories.horsedebug",
    default_key: DefaultKey::Unbound,
};

/// Per-process registration point. The host adapter owns one and registers
/// the mod exactly once during client startup.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    registered: Option<String>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.registered.is_some()
    }

    /// Builds the context for the adapter named `api_name`. A second call is
    /// a fatal startup error.
    pub fn register(&mut self, api_name: &str) -> HdResult<HorseDebug> {
        if let Some(existing) = &self.registered {
            return Err(HorseDebugError::AlreadyRegistered(existing.clone()));
        }
        self.registered = Some(api_name.to_string());
        info!(target: "HorseDebug", "Starting HorseDebug with {}", api_name);
        Ok(HorseDebug::new(api_name))
    }
}

/// Application context: config, toggle key and translator.
pub struct HorseDebug {
    api_name: String,
    config: Option<ConfigStore>,
    toggle_key: Option<Box<dyn KeyBinding>>,
    translator: Box<dyn Translator>,
}

impl fmt::Debug for HorseDebug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HorseDebug")
            .field("api_name", &self.api_name)
            .field("config", &self.config)
            .field("toggle_key", &self.toggle_key.is_some())
            .finish()
    }
}

impl HorseDebug {
    fn new(api_name: &str) -> Self {
        Self {
            api_name: api_name.to_string(),
            config: None,
            toggle_key: None,
            translator: Box::new(EnglishTranslator),
        }
    }

    pub fn with_translator(mut self, translator: Box<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Registers the toggle binding and loads `horsedebug.cfg` from `run_dir`.
    pub fn setup<K: KeyBindings + ?Sized, P: AsRef<Path>>(&mut self, key_bindings: &mut K, run_dir: P) {
        info!(target: "HorseDebug", "Initialization");
        self.toggle_key = Some(key_bindings.register(&TOGGLE_KEY));
        let mut store = ConfigStore::in_run_dir(run_dir);
        store.load();
        self.config = Some(store);
    }

    pub fn config(&self) -> Option<&ConfigStore> {
        self.config.as_ref()
    }

    pub fn is_show_3d_overlay(&self) -> bool {
        self.config
            .as_ref()
            .map(|c| c.show_3d_overlay())
            .unwrap_or(false)
    }

    pub fn set_show_3d_overlay(&mut self, show: bool) {
        if let Some(store) = self.config.as_mut() {
            store.set_show_3d_overlay(show);
        }
    }

    /// End-of-tick key check.
    pub fn on_key(&mut self) {
        let pressed = self
            .toggle_key
            .as_mut()
            .map(|k| k.was_pressed())
            .unwrap_or(false);
        if pressed {
            let next = !self.is_show_3d_overlay();
            self.set_show_3d_overlay(next);
            info!(target: "HorseDebug", "3D overlay {}", if next { "enabled" } else { "disabled" });
        }
    }

    pub fn render_overlay<W, S>(&self, world: &W, surface: &mut S) -> Option<PanelLayout>
    where
        W: HostWorld + ?Sized,
        S: HudSurface + ?Sized,
    {
        overlay::render_overlay(world, surface, self.translator())
    }

    pub fn render_world<W, S>(&self, world: &W, camera: &Camera, surface: &mut S) -> usize
    where
        W: HostWorld + ?Sized,
        S: WorldSurface + ?Sized,
    {
        if !self.is_show_3d_overlay() {
            return 0;
        }
        overlay::render_world(world, camera, surface)
    }
}

/// Callbacks a host adapter wires to its client events.
pub trait ClientHandlers {
    fn on_end_tick(&mut self);
    fn on_hud_render(&mut self, world: &dyn HostWorld, surface: &mut dyn HudSurface);
    fn on_world_render(&mut self, world: &dyn HostWorld, camera: &Camera, surface: &mut dyn WorldSurface);
}

impl ClientHandlers for HorseDebug {
    fn on_end_tick(&mut self) {
        self.on_key();
    }

    fn on_hud_render(&mut self, world: &dyn HostWorld, surface: &mut dyn HudSurface) {
        self.render_overlay(world, surface);
    }

    fn on_world_render(&mut self, world: &dyn HostWorld, camera: &Camera, surface: &mut dyn WorldSurface) {
        self.render_world(world, camera, surface);
    }
}

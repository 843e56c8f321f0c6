pub mod describe;
pub mod hud;
pub mod world;

pub use self::describe::entity_data;
pub use self::hud::{layout_panel, render_overlay, select_target, PanelLayout};
pub use self::world::{label_lines, layout_label, render_world};

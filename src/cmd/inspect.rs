use clap::Args;
use horsedebug::headless::{HudDraw, RecordingHud, Scene};
use horsedebug::host::EnglishTranslator;
use horsedebug::overlay::{entity_data, layout_panel, render_overlay};
use horsedebug::{HdResult, HorseDebugError};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Scene snapshot (JSON)
    #[arg(short, long)]
    pub scene: PathBuf,

    /// Describe this entity instead of the vehicle/crosshair target
    #[arg(short, long)]
    pub entity: Option<u32>,
}

pub fn run(args: InspectArgs) -> HdResult<()> {
    let scene = Scene::load_from_file(&args.scene)?;
    let translator = EnglishTranslator;
    let mut hud = RecordingHud::default();

    let layout = match args.entity {
        Some(id) => {
            let entity = scene
                .entity(id)
                .ok_or_else(|| HorseDebugError::Validation(format!("no entity with id {}", id)))?;
            let lines = entity_data(entity, &translator);
            let viewport = scene.viewport;
            let layout = layout_panel(
                &hud,
                viewport,
                viewport.width,
                viewport.height,
                &lines,
                Some(entity),
            );
            if let Some(layout) = &layout {
                horsedebug::overlay::hud::draw_panel(&mut hud, layout, &lines, Some(entity));
            }
            layout
        }
        None => render_overlay(&scene, &mut hud, &translator),
    };

    let Some(layout) = layout else {
        println!("Nothing to inspect (debug HUD closed or no target).");
        return Ok(());
    };

    println!(
        "\n🔎 Panel at ({}, {}) size {}x{}",
        layout.x, layout.y, layout.width, layout.height
    );
    for draw in &hud.draws {
        match draw {
            HudDraw::Text { line, x, y, .. } => println!("  [{:>4},{:>4}] {}", x, y, line),
            HudDraw::Preview { entity_id, preview } => println!(
                "  [preview] entity #{} size {} at ({}, {})",
                entity_id, preview.size, preview.x1, preview.y1
            ),
        }
    }
    Ok(())
}

use crate::reports;
use clap::Args;
use horsedebug::headless::Scene;
use horsedebug::overlay::label_lines;
use horsedebug::scan::GroupScan;
use horsedebug::HdResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Scene snapshot (JSON)
    #[arg(short, long)]
    pub scene: PathBuf,

    /// Also print each entity's floating label lines
    #[arg(long, default_value_t = false)]
    pub labels: bool,
}

pub fn run(args: ScanArgs) -> HdResult<()> {
    info!("📂 Loading Scene: {}", args.scene.display());
    let scene = Scene::load_from_file(&args.scene)?;

    let Some(player) = scene.player else {
        println!("No player in scene; nothing to scan.");
        return Ok(());
    };

    let scan = GroupScan::scan(player, &scene.entities);
    info!("{} of {} entities in range", scan.len(), scene.entities.len());

    reports::print_group_report(&scan);

    if args.labels {
        println!("\n🏷️  === LABELS === 🏷️");
        for (entry, flags) in scan.flagged() {
            let lines: Vec<String> = label_lines(entry, flags)
                .iter()
                .map(|l| l.plain())
                .collect();
            println!("#{:<5} {}", entry.entity.id, lines.join(" | "));
        }
    }
    Ok(())
}

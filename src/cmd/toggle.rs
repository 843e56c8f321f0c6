use horsedebug::config::ConfigStore;
use horsedebug::HdResult;
use std::path::Path;
use tracing::info;

pub fn run(run_dir: &Path) -> HdResult<()> {
    let mut store = ConfigStore::in_run_dir(run_dir);
    store.load();
    let show = store.toggle_show_3d_overlay();
    info!("⚙️  Config: {}", store.path().display());
    println!("show3DOverlay={}", show);
    Ok(())
}

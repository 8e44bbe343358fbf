//! Ultimate Tic-Tac-Toe GUI
//!
//! Usage: `uttt [player-o] [player-x] [depth]`, with the same player names
//! as the console version. The players can also be changed from the menu.

use uttt::ui::UtttApp;
use uttt::GameConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let (config, _) = GameConfig::from_args(std::env::args().skip(1))?;
    log::info!(
        "starting GUI: O={} X={} depth={}",
        config.player_o,
        config.player_x,
        config.engine.max_depth()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Ultimate Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Ultimate Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(UtttApp::new(cc, config)))),
    )?;
    Ok(())
}

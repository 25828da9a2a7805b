pub mod app;
pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod state;
pub mod themes;

use gpui::{App, actions};
pub use gui::{TimberView, open_main_window, setup_app};
use tracing::info;

actions!(timber_track, [Quit]);

pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}

mod ai;
mod components;
mod config;
mod model;
mod render;
mod settings;
mod state;
mod theme;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}

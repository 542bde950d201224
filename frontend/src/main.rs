use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod export;
mod helpers;
mod routes;
mod storage;
mod views;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

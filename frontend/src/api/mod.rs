//! Typed wrappers around the remote API, one module per resource.

pub mod auth;
pub mod client;
pub mod dashboards;
pub mod data;
pub mod templates;

use yew::prelude::*;

pub use client::ApiClient;

/// The client provided by the application root.
pub fn client_from<C: Component>(ctx: &Context<C>) -> Option<ApiClient> {
    ctx.link()
        .context::<ApiClient>(Callback::noop())
        .map(|(client, _)| client)
}

use yew::{html, Component, Context, ContextProvider, Html};
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::routes::{switch, Route};
use crate::{config, storage};

/// Root component: owns the API client (and through it the session) and
/// hands it to every view through context.
pub struct App {
    client: ApiClient,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = config::load();
        storage::apply_theme(storage::load_theme(&config.theme_storage_key));
        let session = storage::browser_session(&config.token_storage_key);
        Self {
            client: ApiClient::new(config, session),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<ApiClient> context={self.client.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<ApiClient>>
        }
    }
}

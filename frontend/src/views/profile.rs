use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::dates::format_date;
use common::error::ApiError;
use common::model::user::User;
use common::status::LoadState;

use crate::api::{self, auth};
use crate::helpers::{icon, page_header, placeholder};
use crate::routes::Route;

pub enum Msg {
    Loaded(Result<User, ApiError>),
    Logout,
}

pub struct Profile {
    user: LoadState<User>,
}

impl Component for Profile {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(client) = api::client_from(ctx) {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(auth::me(&client).await));
            });
        }
        Self {
            user: LoadState::Loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.user = LoadState::from_result(result);
                true
            }
            Msg::Logout => {
                if let Some(client) = api::client_from(ctx) {
                    auth::logout(&client);
                }
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let user = match &self.user {
            LoadState::Loading => return placeholder("Cargando perfil..."),
            LoadState::Failed(err) => return placeholder(err),
            LoadState::Ready(user) => user,
        };

        html! {
            <section class="page">
                { page_header("Perfil", None, html! {}) }
                <div class="card profile-card">
                    <div class="avatar">{ user.initial() }</div>
                    <div>
                        <h2>{ user.username.clone() }</h2>
                        <p class="muted">{ icon("mail") }{ user.email.clone() }</p>
                        <p class="muted">{ format!("Se unió en {}", format_date(&user.created_at)) }</p>
                        <span class={classes!("badge", if user.is_active { "badge-yes" } else { "badge-no" })}>
                            { if user.is_active { "Cuenta activa" } else { "Cuenta inactiva" } }
                        </span>
                    </div>
                    <button class="btn btn-danger" onclick={ctx.link().callback(|_| Msg::Logout)}>
                        { icon("logout") }{"Cerrar sesión"}
                    </button>
                </div>
            </section>
        }
    }
}

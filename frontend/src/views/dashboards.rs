use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::dates::format_date;
use common::error::ApiError;
use common::model::dashboard::Dashboard;
use common::status::LoadState;

use crate::api::{self, dashboards};
use crate::helpers::{icon, page_header, placeholder};
use crate::routes::Route;

pub enum Msg {
    Loaded(Result<Vec<Dashboard>, ApiError>),
}

pub struct Dashboards {
    dashboards: LoadState<Vec<Dashboard>>,
}

impl Component for Dashboards {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(client) = api::client_from(ctx) {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(dashboards::list(&client).await));
            });
        }
        Self {
            dashboards: LoadState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.dashboards = LoadState::from_result(result);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let actions = html! {
            <Link<Route> classes="btn btn-primary" to={Route::Upload}>
                { icon("add") }{"Crear Dashboard"}
            </Link<Route>>
        };
        let body = match &self.dashboards {
            LoadState::Loading => placeholder("Cargando dashboards..."),
            LoadState::Failed(err) => placeholder(err),
            LoadState::Ready(list) if list.is_empty() => empty_state(),
            LoadState::Ready(list) => html! {
                <div class="card-grid">
                    { for list.iter().map(dashboard_card) }
                </div>
            },
        };

        html! {
            <section class="page">
                { page_header("Dashboards", Some("Tus tableros de visualización"), actions) }
                { body }
            </section>
        }
    }
}

fn dashboard_card(dashboard: &Dashboard) -> Html {
    html! {
        <Link<Route> classes="card card-link" to={Route::DashboardDetail { id: dashboard.id.clone() }}>
            <div class="card-title">{ icon("dashboard") }<h3>{ dashboard.name.clone() }</h3></div>
            <p class="muted">{ format!("{} widgets", dashboard.widgets.len()) }</p>
            <p class="muted small">{ format!("Creado el {}", format_date(&dashboard.created_at)) }</p>
        </Link<Route>>
    }
}

fn empty_state() -> Html {
    html! {
        <div class="empty-state">
            { icon("dashboard") }
            <h3>{"No tienes dashboards"}</h3>
            <p class="muted">{"Sube un archivo y crea tu primer dashboard a partir de él."}</p>
            <Link<Route> classes="btn btn-primary" to={Route::Upload}>{"Crear Dashboard"}</Link<Route>>
        </div>
    }
}

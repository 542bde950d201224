use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::dates::format_date;
use common::error::ApiError;
use common::model::template::Template;
use common::status::LoadState;

use crate::api::{self, templates};
use crate::helpers::{download_bytes, icon, icon_button, page_header, placeholder, show_success};
use crate::routes::Route;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub enum Msg {
    Loaded(Result<Vec<Template>, ApiError>),
    Download { id: String, name: String },
    Downloaded { name: String, result: Result<Vec<u8>, ApiError> },
}

pub struct Templates {
    templates: LoadState<Vec<Template>>,
}

impl Component for Templates {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(client) = api::client_from(ctx) {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(templates::list(&client).await));
            });
        }
        Self {
            templates: LoadState::Loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.templates = LoadState::from_result(result);
                true
            }
            Msg::Download { id, name } => {
                if let Some(client) = api::client_from(ctx) {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = templates::download(&client, &id).await;
                        link.send_message(Msg::Downloaded { name, result });
                    });
                }
                false
            }
            Msg::Downloaded { name, result } => {
                if let Ok(bytes) = result {
                    download_bytes(&bytes, &format!("{}.xlsx", name), XLSX_MIME);
                    show_success("Template descargado");
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let actions = html! {
            <Link<Route> classes="btn btn-primary" to={Route::TemplateCreate}>
                { icon("add") }{"Nuevo Template"}
            </Link<Route>>
        };
        let body = match &self.templates {
            LoadState::Loading => placeholder("Cargando templates..."),
            LoadState::Failed(err) => placeholder(err),
            LoadState::Ready(list) if list.is_empty() => html! {
                <div class="empty-state">
                    { icon("description") }
                    <h3>{"No tienes templates"}</h3>
                    <p class="muted">{"Define las columnas que deben tener tus archivos."}</p>
                    <Link<Route> classes="btn btn-primary" to={Route::TemplateCreate}>{"Crear Template"}</Link<Route>>
                </div>
            },
            LoadState::Ready(list) => html! {
                <div class="card-grid">
                    { for list.iter().map(|t| template_card(ctx, t)) }
                </div>
            },
        };

        html! {
            <section class="page">
                { page_header("Templates", Some("Esquemas contra los que se validan tus archivos"), actions) }
                { body }
            </section>
        }
    }
}

fn template_card(ctx: &Context<Templates>, template: &Template) -> Html {
    let (id, name) = (template.id.clone(), template.name.clone());
    let download = ctx.link().callback(move |_| Msg::Download {
        id: id.clone(),
        name: name.clone(),
    });

    html! {
        <div class="card">
            <Link<Route> classes="card-title" to={Route::TemplateDetail { id: template.id.clone() }}>
                { icon("description") }<h3>{ template.name.clone() }</h3>
            </Link<Route>>
            <p class="muted">{ format!("{} columnas", template.columns.len()) }</p>
            <div class="chip-row">
                { for template.columns.iter().map(|(name, column_type)| html! {
                    <span class="chip" title={column_type.label()}>{ name.to_string() }</span>
                }) }
            </div>
            <p class="muted small">{ format!("Creado el {}", format_date(&template.created_at)) }</p>
            <div class="card-actions">
                { icon_button("download", "Descargar", download, false) }
                <Link<Route> classes="icon-btn" to={Route::TemplateEdit { id: template.id.clone() }}>
                    { icon("edit") }<span class="icon-label">{"Editar"}</span>
                </Link<Route>>
            </div>
        </div>
    }
}

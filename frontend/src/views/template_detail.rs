use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::dates::format_date_time;
use common::error::ApiError;
use common::model::template::Template;
use common::status::LoadState;

use crate::api::{self, templates};
use crate::helpers::{confirm, download_bytes, icon, icon_button, navigate_after, page_header, placeholder, show_error, show_success};
use crate::routes::Route;
use crate::views::templates::XLSX_MIME;

pub enum Msg {
    Load,
    Loaded(Result<Template, ApiError>),
    Delete,
    Deleted(Result<(), ApiError>),
    Download,
    Downloaded(Result<Vec<u8>, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct TemplateDetailProps {
    pub id: String,
}

pub struct TemplateDetail {
    template: LoadState<Template>,
    deleting: bool,
}

impl Component for TemplateDetail {
    type Message = Msg;
    type Properties = TemplateDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            template: LoadState::Loading,
            deleting: false,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            ctx.link().send_message(Msg::Load);
        }
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let id = ctx.props().id.clone();
        match msg {
            Msg::Load => {
                if id.trim().is_empty() {
                    show_error("ID de template no válido");
                    navigate_after(ctx.link().navigator(), Route::Templates, 0);
                    return false;
                }
                let Some(client) = api::client_from(ctx) else {
                    return false;
                };
                self.template = LoadState::Loading;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(templates::get(&client, &id).await));
                });
                true
            }
            Msg::Loaded(result) => {
                if result.is_err() {
                    show_error("Error al cargar el template");
                }
                self.template = LoadState::from_result(result);
                true
            }
            Msg::Delete => {
                let Some(template) = self.template.ready() else {
                    return false;
                };
                let question = format!(
                    "¿Eliminar el template \"{}\"? Esta acción no se puede deshacer.",
                    template.name
                );
                if self.deleting || !confirm(&question) {
                    return false;
                }
                let Some(client) = api::client_from(ctx) else {
                    return false;
                };
                self.deleting = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Deleted(templates::delete(&client, &id).await));
                });
                true
            }
            Msg::Deleted(result) => {
                self.deleting = false;
                if result.is_ok() {
                    show_success("Template eliminado exitosamente");
                    let delay = api::client_from(ctx)
                        .map(|c| c.config().redirect_delay_ms)
                        .unwrap_or(common::config::DEFAULT_REDIRECT_DELAY_MS);
                    navigate_after(ctx.link().navigator(), Route::Templates, delay);
                }
                true
            }
            Msg::Download => {
                if let Some(client) = api::client_from(ctx) {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::Downloaded(templates::download(&client, &id).await));
                    });
                }
                false
            }
            Msg::Downloaded(result) => {
                if let (Ok(bytes), Some(template)) = (result, self.template.ready()) {
                    download_bytes(&bytes, &format!("{}.xlsx", template.name), XLSX_MIME);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let template = match &self.template {
            LoadState::Loading => return placeholder("Cargando template..."),
            LoadState::Failed(_) => return placeholder("Template no encontrado"),
            LoadState::Ready(template) => template,
        };
        let link = ctx.link();
        let actions = html! {
            <>
                <Link<Route> classes="btn" to={Route::Templates}>{ icon("arrow_back") }{"Volver"}</Link<Route>>
                { icon_button("download", "Descargar", link.callback(|_| Msg::Download), false) }
                <Link<Route> classes="btn" to={Route::TemplateEdit { id: template.id.clone() }}>
                    { icon("edit") }{"Editar"}
                </Link<Route>>
                { icon_button("delete", "Eliminar", link.callback(|_| Msg::Delete), self.deleting) }
            </>
        };

        html! {
            <section class="page">
                { page_header(&template.name, Some(&format!("{} columnas", template.columns.len())), actions) }
                <table class="data-table">
                    <thead><tr><th>{"#"}</th><th>{"Columna"}</th><th>{"Tipo"}</th></tr></thead>
                    <tbody>
                        { for template.columns.iter().enumerate().map(|(i, (name, column_type))| html! {
                            <tr>
                                <td>{ i + 1 }</td>
                                <td>{ name.to_string() }</td>
                                <td><span class="badge">{ column_type.label() }</span></td>
                            </tr>
                        }) }
                    </tbody>
                </table>
                <dl class="meta">
                    <dt>{"Creado"}</dt><dd>{ format_date_time(&template.created_at) }</dd>
                    <dt>{"Actualizado"}</dt><dd>{ format_date_time(&template.updated_at) }</dd>
                </dl>
            </section>
        }
    }
}

//! Uploaded files, with the dialog that adds new ones.
//!
//! Files and templates are requested together; the list renders once both
//! answered, since each row shows the name of the template it was validated
//! against.

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::dates::format_date;
use common::error::ApiError;
use common::model::data_file::DataFile;
use common::model::template::Template;
use common::status::LoadState;

use crate::api::{self, data, templates};
use crate::components::upload_dialog::UploadDialog;
use crate::helpers::{icon, page_header, placeholder};
use crate::routes::{CreateDashboardQuery, Route};

pub enum Msg {
    Load,
    FilesLoaded(Result<Vec<DataFile>, ApiError>),
    TemplatesLoaded(Result<Vec<Template>, ApiError>),
    OpenDialog,
    CloseDialog,
}

pub struct Upload {
    files: LoadState<Vec<DataFile>>,
    templates: LoadState<Vec<Template>>,
    dialog_open: bool,
}

impl Upload {
    fn template_name(&self, template_id: Option<&str>) -> String {
        template_id
            .and_then(|id| {
                self.templates
                    .ready()
                    .and_then(|list| list.iter().find(|t| t.id == id))
            })
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl Component for Upload {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            files: LoadState::Loading,
            templates: LoadState::Loading,
            dialog_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let Some(client) = api::client_from(ctx) else {
                    return false;
                };
                self.files = LoadState::Loading;
                self.templates = LoadState::Loading;
                let (files_client, files_link) = (client.clone(), ctx.link().clone());
                spawn_local(async move {
                    files_link.send_message(Msg::FilesLoaded(data::list(&files_client).await));
                });
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::TemplatesLoaded(templates::list(&client).await));
                });
                true
            }
            Msg::FilesLoaded(result) => {
                self.files = LoadState::from_result(result);
                true
            }
            Msg::TemplatesLoaded(result) => {
                self.templates = LoadState::from_result(result);
                true
            }
            Msg::OpenDialog => {
                self.dialog_open = true;
                true
            }
            Msg::CloseDialog => {
                self.dialog_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let actions = html! {
            <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenDialog)}>
                { icon("upload_file") }{"Subir Archivo"}
            </button>
        };
        let body = match (&self.files, &self.templates) {
            (LoadState::Loading, _) | (_, LoadState::Loading) => placeholder("Cargando archivos..."),
            (LoadState::Failed(err), _) => placeholder(err),
            (LoadState::Ready(files), _) if files.is_empty() => html! {
                <div class="empty-state">
                    { icon("upload_file") }
                    <h3>{"No has subido archivos"}</h3>
                    <p class="muted">{"Sube un archivo Excel o CSV validado contra uno de tus templates."}</p>
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenDialog)}>{"Subir Archivo"}</button>
                </div>
            },
            (LoadState::Ready(files), _) => html! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Archivo"}</th>
                            <th>{"Template"}</th>
                            <th>{"Filas"}</th>
                            <th>{"Columnas"}</th>
                            <th>{"Formato"}</th>
                            <th>{"Subido"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for files.iter().map(|f| self.file_row(f)) }
                    </tbody>
                </table>
            },
        };

        html! {
            <section class="page">
                { page_header("Archivos", Some("Datos subidos y validados contra tus templates"), actions) }
                { body }
                <UploadDialog
                    open={self.dialog_open}
                    on_close={link.callback(|_| Msg::CloseDialog)}
                    on_uploaded={link.callback(|_| Msg::Load)}
                />
            </section>
        }
    }
}

impl Upload {
    fn file_row(&self, file: &DataFile) -> Html {
        let query = CreateDashboardQuery {
            data_id: Some(file.data_id.clone()),
        };
        html! {
            <tr key={file.data_id.clone()}>
                <td>
                    <Link<Route> to={Route::UploadDetail { id: file.data_id.clone() }}>{ file.name.clone() }</Link<Route>>
                </td>
                <td>{ self.template_name(file.template_id.as_deref()) }</td>
                <td>{ file.num_rows }</td>
                <td>{ file.num_columns }</td>
                <td><span class="badge">{ file.source_type.to_uppercase() }</span></td>
                <td>{ format_date(&file.created_at) }</td>
                <td class="row-actions">
                    <Link<Route> classes="icon-btn" to={Route::UploadPreview { id: file.data_id.clone() }}>
                        { icon("visibility") }<span class="icon-label">{"Vista previa"}</span>
                    </Link<Route>>
                    <Link<Route, CreateDashboardQuery> classes="icon-btn" to={Route::DashboardCreate} query={Some(query)}>
                        { icon("dashboard_customize") }<span class="icon-label">{"Crear dashboard"}</span>
                    </Link<Route, CreateDashboardQuery>>
                </td>
            </tr>
        }
    }
}

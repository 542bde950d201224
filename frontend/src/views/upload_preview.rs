use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::error::ApiError;
use common::model::data_file::{cell_label, DataPreview};
use common::preview::Pager;
use common::status::LoadState;

use crate::api::{self, data};
use crate::helpers::{icon, icon_button, page_header, placeholder, show_error};
use crate::routes::Route;

pub enum Msg {
    Loaded(Result<DataPreview, ApiError>),
    Previous,
    Next,
}

#[derive(Properties, PartialEq)]
pub struct UploadPreviewProps {
    pub id: String,
}

pub struct UploadPreview {
    preview: LoadState<DataPreview>,
    pager: Pager,
}

impl Component for UploadPreview {
    type Message = Msg;
    type Properties = UploadPreviewProps;

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(client) = api::client_from(ctx) {
            let id = ctx.props().id.clone();
            let rows = client.config().preview_rows;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(data::preview(&client, &id, rows).await));
            });
        }
        Self {
            preview: LoadState::Loading,
            pager: Pager::new(0),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                if result.is_err() {
                    show_error("Error al cargar la vista previa");
                }
                self.preview = LoadState::from_result(result);
                self.pager = Pager::new(self.preview.ready().map(|p| p.data.len()).unwrap_or_default());
            }
            Msg::Previous => self.pager.previous(),
            Msg::Next => self.pager.next(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let preview = match &self.preview {
            LoadState::Loading => return placeholder("Cargando vista previa..."),
            LoadState::Failed(_) => return placeholder("Vista previa no disponible"),
            LoadState::Ready(preview) => preview,
        };
        let link = ctx.link();
        let actions = html! {
            <Link<Route> classes="btn" to={Route::UploadDetail { id: ctx.props().id.clone() }}>
                { icon("arrow_back") }{"Volver"}
            </Link<Route>>
        };
        let subtitle = format!(
            "Mostrando {} de {} filas",
            preview.data.len(),
            preview.num_rows
        );

        html! {
            <section class="page">
                { page_header(&preview.name, Some(&subtitle), actions) }
                if preview.data.is_empty() {
                    { placeholder("El archivo no tiene filas.") }
                } else {
                    <div class="table-scroll">
                        <table class="data-table">
                            <thead>
                                <tr>{ for preview.columns.iter().map(|c| html! { <th>{ c.clone() }</th> }) }</tr>
                            </thead>
                            <tbody>
                                { for preview.data[self.pager.range()].iter().map(|row| html! {
                                    <tr>
                                        { for preview.columns.iter().map(|c| html! { <td>{ cell_label(row.get(c)) }</td> }) }
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }
                if self.pager.is_paged() {
                    <div class="pager">
                        { icon_button("chevron_left", "Anterior", link.callback(|_| Msg::Previous), !self.pager.has_previous()) }
                        <span>{ self.pager.label() }</span>
                        { icon_button("chevron_right", "Siguiente", link.callback(|_| Msg::Next), !self.pager.has_next()) }
                    </div>
                }
            </section>
        }
    }
}

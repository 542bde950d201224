//! A saved dashboard: its widgets placed in the six-slot layout, plus PDF export.

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::error::ApiError;
use common::layout::arrange;
use common::status::LoadState;
use common::widgets::payload::{DashboardView, DecodedWidget};

use crate::api::{self, dashboards};
use crate::components::widgets::render_widget;
use crate::components::workspace_grid::WorkspaceGrid;
use crate::export::export_element_to_pdf;
use crate::helpers::{icon, show_error, show_success};
use crate::routes::Route;

pub enum Msg {
    Load,
    Loaded(Result<DashboardView, ApiError>),
    Export,
    Exported(bool),
}

#[derive(Properties, PartialEq)]
pub struct DashboardDetailProps {
    pub id: String,
}

pub struct DashboardDetail {
    dashboard: LoadState<DashboardView>,
    exporting: bool,
    canvas: NodeRef,
}

impl Component for DashboardDetail {
    type Message = Msg;
    type Properties = DashboardDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            dashboard: LoadState::Loading,
            exporting: false,
            canvas: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            ctx.link().send_message(Msg::Load);
        }
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let Some(client) = api::client_from(ctx) else {
                    return false;
                };
                self.dashboard = LoadState::Loading;
                let id = ctx.props().id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(dashboards::data(&client, &id).await));
                });
                true
            }
            Msg::Loaded(result) => {
                self.dashboard = LoadState::from_result(result);
                true
            }
            Msg::Export => {
                let (Some(element), Some(view)) = (self.canvas.cast::<web_sys::HtmlElement>(), self.dashboard.ready())
                else {
                    return false;
                };
                if self.exporting {
                    return false;
                }
                self.exporting = true;
                let name = view.name.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = export_element_to_pdf(&element, &name).await;
                    if let Err(err) = &result {
                        gloo_console::error!("Error al exportar el PDF:", err.clone());
                    }
                    link.send_message(Msg::Exported(result.is_ok()));
                });
                true
            }
            Msg::Exported(ok) => {
                self.exporting = false;
                if ok {
                    show_success("PDF exportado exitosamente");
                } else {
                    show_error("Error al exportar el PDF");
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = match &self.dashboard {
            LoadState::Loading => return centered("Cargando dashboard..."),
            LoadState::Failed(_) => return not_found(),
            LoadState::Ready(view) => view,
        };

        html! {
            <section class="page dashboard-detail">
                <header class="page-header" data-export-ignore="true">
                    <div class="header-left">
                        <Link<Route> classes="btn" to={Route::Dashboards}>{ icon("arrow_back") }{"Volver"}</Link<Route>>
                        <div>
                            <h1>{ view.name.clone() }</h1>
                            <p class="muted">
                                { format!("{} widgets • Layout: {}", view.widgets.len(), view.layout_type) }
                            </p>
                        </div>
                    </div>
                    <div class="page-actions">
                        <button class="btn btn-primary" onclick={ctx.link().callback(|_| Msg::Export)} disabled={self.exporting}>
                            { icon("picture_as_pdf") }
                            { if self.exporting { "Exportando..." } else { "Exportar PDF" } }
                        </button>
                    </div>
                </header>
                <div class="dashboard-canvas" ref={self.canvas.clone()}>
                    <h2 class="export-title">{ view.name.clone() }</h2>
                    { layout(&view.widgets) }
                </div>
            </section>
        }
    }
}

fn layout(widgets: &[DecodedWidget]) -> Html {
    if widgets.is_empty() {
        return centered("Este dashboard no tiene widgets.");
    }
    html! {
        { for arrange(widgets.iter().collect::<Vec<_>>(), |w| w.position).into_iter().map(|(role, row)| html! {
            <WorkspaceGrid {role} height_px={Some(role.height_px())}>
                { for row.into_iter().enumerate().map(|(column, cell)| match cell {
                    Some(widget) => html! {
                        <div class="widget-slot" key={widget.position.to_string()}>{ render_widget(widget) }</div>
                    },
                    None => html! { <div class="widget-slot empty" key={format!("empty-{}", column)}></div> },
                }) }
            </WorkspaceGrid>
        }) }
    }
}

fn centered(message: &str) -> Html {
    html! { <div class="centered-page"><p class="muted">{ message.to_string() }</p></div> }
}

fn not_found() -> Html {
    html! {
        <div class="centered-page">
            <h2>{"Dashboard no encontrado"}</h2>
            <Link<Route> classes="btn" to={Route::Dashboards}>{ icon("arrow_back") }{"Volver"}</Link<Route>>
        </div>
    }
}

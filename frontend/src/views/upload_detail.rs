//! Analysis of one uploaded file: general stats, per-column profiles and the
//! server's chart suggestions.

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::dates::format_date_time;
use common::error::ApiError;
use common::model::data_file::{ColumnAnalysis, DataFileDetail};
use common::status::LoadState;
use common::widgets::format::group_with_decimals;

use crate::api::{self, data};
use crate::helpers::{icon, page_header, placeholder, show_error};
use crate::routes::{CreateDashboardQuery, Route};

pub enum Msg {
    Loaded(Result<DataFileDetail, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct UploadDetailProps {
    pub id: String,
}

pub struct UploadDetail {
    analysis: LoadState<DataFileDetail>,
}

impl Component for UploadDetail {
    type Message = Msg;
    type Properties = UploadDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(client) = api::client_from(ctx) {
            let id = ctx.props().id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(data::analysis(&client, &id).await));
            });
        }
        Self {
            analysis: LoadState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                if result.is_err() {
                    show_error("Error al cargar el análisis");
                }
                self.analysis = LoadState::from_result(result);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let analysis = match &self.analysis {
            LoadState::Loading => return placeholder("Cargando análisis..."),
            LoadState::Failed(_) => return placeholder("Archivo no encontrado"),
            LoadState::Ready(analysis) => analysis,
        };
        let query = CreateDashboardQuery {
            data_id: Some(analysis.data_id.clone()),
        };
        let actions = html! {
            <>
                <Link<Route> classes="btn" to={Route::Upload}>{ icon("arrow_back") }{"Volver"}</Link<Route>>
                <Link<Route> classes="btn" to={Route::UploadPreview { id: analysis.data_id.clone() }}>
                    { icon("visibility") }{"Vista previa"}
                </Link<Route>>
                <Link<Route, CreateDashboardQuery> classes="btn btn-primary" to={Route::DashboardCreate} query={Some(query)}>
                    { icon("dashboard_customize") }{"Crear Dashboard"}
                </Link<Route, CreateDashboardQuery>>
            </>
        };

        html! {
            <section class="page">
                { page_header(&analysis.name, Some("Análisis del archivo"), actions) }
                <div class="stat-row">
                    { stat("Filas", analysis.num_rows.to_string()) }
                    { stat("Columnas", analysis.num_columns.to_string()) }
                    { stat("Formato", analysis.source_type.to_uppercase()) }
                    { stat("Subido", format_date_time(&analysis.created_at)) }
                </div>
                <h2>{"Columnas"}</h2>
                <div class="card-grid">
                    { for analysis.column_analyses.iter().map(column_card) }
                </div>
                { suggestions(analysis) }
            </section>
        }
    }
}

fn stat(label: &str, value: String) -> Html {
    html! {
        <div class="stat">
            <span class="muted small">{ label.to_string() }</span>
            <strong>{ value }</strong>
        </div>
    }
}

fn column_card(column: &ColumnAnalysis) -> Html {
    let number = |value: Option<f64>| value.map(group_with_decimals).unwrap_or_else(|| "-".to_string());
    html! {
        <div class="card column-card">
            <div class="card-title">
                <h3>{ column.column_name.clone() }</h3>
                <span class="badge">{ column.column_type.label() }</span>
                if column.is_categorical {
                    <span class="badge">{"Categórica"}</span>
                }
            </div>
            <dl class="meta">
                <dt>{"Total"}</dt><dd>{ column.total_count }</dd>
                <dt>{"No nulos"}</dt><dd>{ column.non_null_count }</dd>
                <dt>{"Nulos"}</dt><dd>{ format!("{} ({:.1}%)", column.null_count, column.null_percentage) }</dd>
                if column.is_numeric() {
                    <dt>{"Mínimo"}</dt><dd>{ number(column.min) }</dd>
                    <dt>{"Máximo"}</dt><dd>{ number(column.max) }</dd>
                    <dt>{"Promedio"}</dt><dd>{ number(column.avg) }</dd>
                    <dt>{"Suma"}</dt><dd>{ number(column.sum) }</dd>
                } else if let Some(unique) = column.unique_count {
                    <dt>{"Valores únicos"}</dt><dd>{ unique }</dd>
                }
            </dl>
            if !column.sample_values.is_empty() {
                <div class="chip-row">
                    { for column.sample_labels().into_iter().map(|v| html! { <span class="chip">{ v }</span> }) }
                </div>
            }
        </div>
    }
}

fn suggestions(analysis: &DataFileDetail) -> Html {
    let ranked = analysis.ranked_suggestions();
    if ranked.is_empty() {
        return html! {};
    }
    html! {
        <>
            <h2>{"Visualizaciones sugeridas"}</h2>
            <div class="card-grid">
                { for ranked.into_iter().map(|s| html! {
                    <div class="card">
                        <div class="card-title">{ icon(s.chart_type.icon()) }<h3>{ s.title.clone() }</h3></div>
                        <p class="muted">{ s.description.clone() }</p>
                        <p class="small">
                            { format!("{} · {}", s.chart_type.label(), s.columns.join(", ")) }
                            if let Some(aggregation) = s.aggregation {
                                { format!(" · {}", aggregation.label()) }
                            }
                        </p>
                    </div>
                }) }
            </div>
        </>
    }
}

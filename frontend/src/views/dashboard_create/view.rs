//! View of the creation workspace.
//!
//! Three areas: the name and save controls, the layout preview (one card per
//! slot, arranged as the saved dashboard will be), and the configuration panel
//! for the selected slot. Validation issues are recomputed on every render
//! from the current draft, so they always match what is on screen.

use yew::html::Scope;
use yew::prelude::*;

use common::layout::{rows, Slot, SlotRole};
use common::model::dashboard::{Aggregation, ChartType};
use common::model::data_file::DataFileDetail;
use common::status::LoadState;
use common::workspace::{SubmitError, WidgetDraft};

use crate::components::workspace_grid::WorkspaceGrid;
use crate::helpers::{icon, input_value, page_header, placeholder, select_value};

use super::messages::Msg;
use super::state::DashboardCreate;

pub fn view(component: &DashboardCreate, ctx: &Context<DashboardCreate>) -> Html {
    let link = ctx.link();
    let analysis = match &component.analysis {
        LoadState::Loading => return placeholder("Cargando análisis del archivo..."),
        LoadState::Failed(err) => return placeholder(err),
        LoadState::Ready(analysis) => analysis,
    };

    let actions = html! {
        <button class="btn btn-primary" onclick={link.callback(|_| Msg::Save)} disabled={component.saving}>
            { icon("save") }
            { if component.saving { "Guardando..." } else { "Guardar Dashboard" } }
        </button>
    };

    html! {
        <section class="page dashboard-create">
            { page_header("Crear Dashboard", Some(&format!("Archivo: {}", analysis.name)), actions) }
            <label class="field">
                <span>{"Nombre del dashboard"}</span>
                <input type="text" placeholder="Ej. Ventas del trimestre" value={component.name.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))} />
            </label>
            if let Some(err) = &component.submit_error {
                { submit_error(err) }
            }
            <div class="create-columns">
                <div class="layout-preview">
                    { for rows().into_iter().map(|(role, slots)| layout_row(component, link, role, slots)) }
                </div>
                <aside class="config-panel">
                    { config_panel(component, link, analysis) }
                </aside>
            </div>
        </section>
    }
}

fn submit_error(err: &SubmitError) -> Html {
    html! {
        <div class="alert alert-error">
            { icon("error_outline") }
            <span>{ err.to_string() }</span>
        </div>
    }
}

fn layout_row(component: &DashboardCreate, link: &Scope<DashboardCreate>, role: SlotRole, slots: Vec<Slot>) -> Html {
    html! {
        <WorkspaceGrid {role}>
            { for slots.into_iter().filter_map(|slot| component.workspace.slot(slot.position).map(|draft| slot_card(component, link, slot, draft))) }
        </WorkspaceGrid>
    }
}

fn slot_title(slot: Slot) -> String {
    match slot.role {
        SlotRole::Wide => format!("Posición {} - Widget Grande", slot.position),
        _ => format!("Posición {}", slot.position),
    }
}

fn slot_card(component: &DashboardCreate, link: &Scope<DashboardCreate>, slot: Slot, draft: &WidgetDraft) -> Html {
    let position = slot.position;
    let selected = component.workspace.selected() == Some(position);
    let issues = if draft.is_populated() {
        component.workspace.issues(position, component.columns()).len()
    } else {
        0
    };
    let classes = classes!(
        "slot-card",
        selected.then_some("selected"),
        draft.is_populated().then_some("populated"),
        (issues > 0).then_some("invalid")
    );

    html! {
        <button class={classes} onclick={link.callback(move |_| Msg::SelectSlot(position))}>
            <span class="slot-position">{ slot_title(slot) }</span>
            { match draft.chart_type {
                Some(chart) => html! {
                    <>
                        <span class="slot-kind">{ icon(chart.icon()) }{ chart.label() }</span>
                        <span class="slot-title">
                            { if draft.title.trim().is_empty() { "Sin título".to_string() } else { draft.title.clone() } }
                        </span>
                        if issues > 0 {
                            <span class="badge badge-error">{ format!("{} errores", issues) }</span>
                        }
                    </>
                },
                None => html! { <span class="slot-empty muted">{ icon("add") }{"Vacío"}</span> },
            } }
        </button>
    }
}

fn config_panel(component: &DashboardCreate, link: &Scope<DashboardCreate>, analysis: &DataFileDetail) -> Html {
    let Some(draft) = component.workspace.selected_slot() else {
        return html! {
            <>
                <p class="muted">{"Selecciona una posición en el layout para configurar un widget."}</p>
                { suggestions(link, analysis, false) }
            </>
        };
    };
    let issues = if draft.is_populated() {
        component.workspace.issues(draft.position, &analysis.column_analyses)
    } else {
        Vec::new()
    };

    html! {
        <>
            <h2>{ format!("Widget en posición {}", draft.position) }</h2>
            { chart_picker(link, draft) }
            if let Some(chart) = draft.chart_type {
                <label class="field">
                    <span>{"Título del Widget"}</span>
                    <input type="text" placeholder="Sin título" value={draft.title.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetTitle(input_value(&e)))} />
                </label>
                { column_picker(link, draft, chart, analysis) }
                { aggregation_picker(link, draft, chart) }
                if !issues.is_empty() {
                    <div class="alert alert-error">
                        <strong>{"Errores de validación"}</strong>
                        <ul>{ for issues.iter().map(|i| html! { <li>{ i.to_string() }</li> }) }</ul>
                    </div>
                }
                <button class="btn btn-danger" onclick={link.callback(|_| Msg::ClearSlot)}>
                    { icon("delete") }{"Quitar widget"}
                </button>
            }
            { suggestions(link, analysis, true) }
        </>
    }
}

fn chart_picker(link: &Scope<DashboardCreate>, draft: &WidgetDraft) -> Html {
    html! {
        <div class="field">
            <span>{"Tipo de Gráfico"}</span>
            <div class="chart-grid">
                { for ChartType::ALL.into_iter().map(|chart| html! {
                    <button
                        class={classes!("chart-option", (draft.chart_type == Some(chart)).then_some("selected"))}
                        onclick={link.callback(move |_| Msg::SetChartType(chart))}
                    >
                        { icon(chart.icon()) }
                        <strong>{ chart.label() }</strong>
                        <small class="muted">{ chart.description() }</small>
                    </button>
                }) }
            </div>
        </div>
    }
}

fn column_picker(link: &Scope<DashboardCreate>, draft: &WidgetDraft, chart: ChartType, analysis: &DataFileDetail) -> Html {
    html! {
        <div class="field">
            <span>{"Columnas"}<small class="muted">{ format!(" ({})", chart.arity().hint()) }</small></span>
            if chart.is_series() {
                <small class="muted">{"La primera columna es la categoría y la segunda el valor."}</small>
            }
            <div class="column-list">
                { for analysis.column_analyses.iter().map(|column| {
                    let name = column.column_name.clone();
                    let role = draft.column_role(&name);
                    let disabled = role.is_none() && !draft.can_add_column();
                    html! {
                        <button
                            class={classes!("column-option", role.is_some().then_some("selected"))}
                            disabled={disabled}
                            onclick={link.callback(move |_| Msg::ToggleColumn(name.clone()))}
                        >
                            <span>{ column.column_name.clone() }</span>
                            <small class="muted">{ column.column_type.label() }</small>
                            if let Some(role) = role {
                                <span class="badge">{ role.label() }</span>
                            }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

fn aggregation_picker(link: &Scope<DashboardCreate>, draft: &WidgetDraft, chart: ChartType) -> Html {
    let forced = chart.forced_aggregation().is_some();
    let current = draft.aggregation.map(|a| a.as_str()).unwrap_or_default();
    html! {
        <label class="field">
            <span>{"Agregación"}</span>
            <select disabled={forced} onchange={link.callback(|e: Event| Msg::SetAggregation(Aggregation::parse(&select_value(&e))))}>
                <option value="" selected={current.is_empty()}>{"Sin agregación"}</option>
                { for Aggregation::ALL.into_iter().map(|a| html! {
                    <option value={a.as_str()} selected={a.as_str() == current}>
                        { format!("{} - {}", a.label(), a.description()) }
                    </option>
                }) }
            </select>
            if forced {
                <small class="muted">{"Este tipo de gráfico define su propia agregación."}</small>
            }
        </label>
    }
}

fn suggestions(link: &Scope<DashboardCreate>, analysis: &DataFileDetail, can_apply: bool) -> Html {
    let ranked = analysis.ranked_suggestions();
    if ranked.is_empty() {
        return html! {};
    }
    html! {
        <div class="suggestions">
            <h3>{ icon("lightbulb") }{"Sugerencias"}</h3>
            { for ranked.into_iter().enumerate().map(|(index, s)| html! {
                <div class="suggestion">
                    <div>
                        <strong>{ icon(s.chart_type.icon()) }{ s.title.clone() }</strong>
                        <p class="muted small">{ s.description.clone() }</p>
                    </div>
                    if can_apply {
                        <button class="btn btn-small" onclick={link.callback(move |_| Msg::ApplySuggestion(index))}>
                            {"Usar"}
                        </button>
                    }
                </div>
            }) }
        </div>
    }
}

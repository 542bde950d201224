use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::status::LoadState;

use crate::api::{self, dashboards, data};
use crate::helpers::{navigate_after, show_error, show_success};
use crate::routes::Route;

use super::messages::Msg;
use super::state::DashboardCreate;

pub fn update(component: &mut DashboardCreate, ctx: &Context<DashboardCreate>, msg: Msg) -> bool {
    match msg {
        Msg::LoadAnalysis => {
            let (Some(client), Some(data_id)) = (api::client_from(ctx), component.data_id.clone()) else {
                return false;
            };
            component.analysis = LoadState::Loading;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::AnalysisLoaded(data::analysis(&client, &data_id).await));
            });
            true
        }
        Msg::AnalysisLoaded(result) => {
            if result.is_err() {
                show_error("Error al cargar el análisis del archivo");
            }
            component.analysis = LoadState::from_result(result);
            true
        }
        Msg::SetName(name) => {
            component.name = name;
            component.submit_error = None;
            true
        }
        Msg::SelectSlot(position) => {
            component.workspace.select(position);
            true
        }
        Msg::SetChartType(chart) => edit(component, |ws, p| ws.set_chart_type(p, chart)),
        Msg::SetTitle(title) => edit(component, |ws, p| ws.set_title(p, title)),
        Msg::ToggleColumn(column) => edit(component, |ws, p| ws.toggle_column(p, &column)),
        Msg::SetAggregation(aggregation) => edit(component, |ws, p| ws.set_aggregation(p, aggregation)),
        Msg::ClearSlot => edit(component, |ws, p| ws.clear(p)),
        Msg::ApplySuggestion(index) => {
            let Some(suggestion) = component
                .analysis
                .ready()
                .and_then(|a| a.ranked_suggestions().get(index).map(|s| (*s).clone()))
            else {
                return false;
            };
            edit(component, |ws, p| ws.apply_suggestion(p, &suggestion))
        }
        Msg::Save => {
            if component.saving {
                return false;
            }
            let (Some(client), Some(analysis), Some(data_id)) =
                (api::client_from(ctx), component.analysis.ready(), component.data_id.as_deref())
            else {
                return false;
            };
            let payload = match component.workspace.submit(
                &component.name,
                &analysis.template_id,
                data_id,
                &analysis.column_analyses,
            ) {
                Ok(payload) => payload,
                Err(err) => {
                    show_error(&err.to_string());
                    component.submit_error = Some(err);
                    return true;
                }
            };
            component.submit_error = None;
            component.saving = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Saved(dashboards::create(&client, &payload).await));
            });
            true
        }
        Msg::Saved(result) => {
            component.saving = false;
            match result {
                Ok(dashboard) => {
                    gloo_console::log!(format!("Dashboard {} creado", dashboard.id));
                    show_success("Dashboard creado exitosamente");
                    let delay = api::client_from(ctx)
                        .map(|c| c.config().redirect_delay_ms)
                        .unwrap_or(common::config::DEFAULT_REDIRECT_DELAY_MS);
                    navigate_after(ctx.link().navigator(), Route::Dashboards, delay);
                }
                Err(err) => gloo_console::error!(format!("Error al crear el dashboard: {}", err)),
            }
            true
        }
    }
}

/// Applies `change` to the selected slot. Nothing happens without a selection.
fn edit<F>(component: &mut DashboardCreate, change: F) -> bool
where
    F: FnOnce(&mut common::workspace::Workspace, u8),
{
    let Some(position) = component.workspace.selected() else {
        return false;
    };
    change(&mut component.workspace, position);
    component.submit_error = None;
    true
}

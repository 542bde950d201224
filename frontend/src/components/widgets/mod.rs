//! Renderers for the six widget kinds of a dashboard.
//!
//! Payloads arrive already decoded (see `common::widgets::payload`); a widget
//! whose payload failed to decode renders an error card in its slot while the
//! rest of the dashboard renders normally.

mod kpi;
mod pie;
mod series;
mod table;

use yew::prelude::*;

use common::model::dashboard::ChartType;
use common::widgets::format::KpiFormat;
use common::widgets::payload::{DecodedWidget, PayloadError, WidgetPayload};

use crate::helpers::icon;

pub use kpi::KpiWidget;
pub use pie::PieWidget;
pub use series::{SeriesKind, SeriesWidget};
pub use table::TableWidget;

/// Card for one decoded widget, or its error.
pub fn render_widget(widget: &DecodedWidget) -> Html {
    let title = AttrValue::from(widget.title.clone());
    match &widget.payload {
        Ok(WidgetPayload::Kpi(data)) => html! { <KpiWidget {title} data={data.clone()} format={KpiFormat::Number} /> },
        Ok(WidgetPayload::Bar(points)) => series_card(title, SeriesKind::Bar, points),
        Ok(WidgetPayload::Line(points)) => series_card(title, SeriesKind::Line, points),
        Ok(WidgetPayload::Area(points)) => series_card(title, SeriesKind::Area, points),
        Ok(WidgetPayload::Pie(points)) => html! { <PieWidget {title} points={points.clone()} /> },
        Ok(WidgetPayload::Table(data)) => html! { <TableWidget {title} data={data.clone()} /> },
        Err(err) => error_card(&widget.title, err),
    }
}

fn series_card(title: AttrValue, kind: SeriesKind, points: &[common::widgets::payload::SeriesPoint]) -> Html {
    html! { <SeriesWidget {title} {kind} points={points.to_vec()} /> }
}

fn error_card(title: &str, err: &PayloadError) -> Html {
    html! {
        <div class="widget-card widget-error">
            <div class="widget-header">
                <h3 class="widget-title">{ title.to_string() }</h3>
            </div>
            <div class="widget-body centered">
                { icon("error_outline") }
                <p class="muted">{ err.to_string() }</p>
            </div>
        </div>
    }
}

/// Header shared by every widget card.
pub(crate) fn widget_header(title: &str, chart: ChartType, badge: Option<String>) -> Html {
    html! {
        <div class="widget-header">
            <span class="widget-kind">{ icon(chart.icon()) }</span>
            <h3 class="widget-title" title={title.to_string()}>{ title.to_string() }</h3>
            if let Some(badge) = badge {
                <span class="badge">{ badge }</span>
            }
        </div>
    }
}

pub(crate) fn no_data() -> Html {
    html! { <div class="widget-body centered"><p class="muted">{"Sin datos"}</p></div> }
}

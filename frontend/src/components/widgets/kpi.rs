use yew::prelude::*;

use common::model::dashboard::ChartType;
use common::widgets::format::{format_kpi, KpiFormat};
use common::widgets::payload::KpiData;

use super::widget_header;

#[derive(Properties, PartialEq)]
pub struct KpiWidgetProps {
    pub title: AttrValue,
    pub data: KpiData,
    /// The API carries no display hint, so dashboards pass `Number`.
    /// `Currency` and `Percentage` are for callers that know the unit.
    #[prop_or_default]
    pub format: KpiFormat,
}

/// Single metric tile.
#[function_component(KpiWidget)]
pub fn kpi_widget(props: &KpiWidgetProps) -> Html {
    html! {
        <div class="widget-card widget-kpi">
            { widget_header(&props.title, ChartType::Kpi, None) }
            <div class="widget-body centered">
                <span class="kpi-value">{ format_kpi(props.data.value, props.format) }</span>
                if let Some(label) = &props.data.label {
                    <span class="kpi-label muted">{ label.clone() }</span>
                }
            </div>
        </div>
    }
}

use yew::prelude::*;

use common::model::dashboard::ChartType;
use common::widgets::chart::pie_slices;
use common::widgets::format::{legend_entry, slice_caption};
use common::widgets::payload::SeriesPoint;

use super::{no_data, widget_header};

/// Slices with a share below this get no caption on the chart itself.
const MIN_CAPTION_SHARE: f64 = 0.05;

#[derive(Properties, PartialEq)]
pub struct PieWidgetProps {
    pub title: AttrValue,
    pub points: Vec<SeriesPoint>,
}

#[function_component(PieWidget)]
pub fn pie_widget(props: &PieWidgetProps) -> Html {
    let slices = pie_slices(&props.points);
    let body = if slices.iter().all(|s| s.share == 0.0) {
        no_data()
    } else {
        html! {
            <div class="widget-body pie-body">
                <svg class="chart pie" viewBox="-20 -20 240 240">
                    { for slices.iter().map(|slice| html! {
                        <path d={slice.path.clone()} fill={slice.color} stroke="var(--card)" stroke-width="1">
                            <title>{ slice_caption(&slice.label, slice.share) }</title>
                        </path>
                    }) }
                    { for slices.iter().filter(|s| s.share >= MIN_CAPTION_SHARE).map(|slice| html! {
                        <text class="slice-caption" x={slice.caption_at.0.to_string()} y={slice.caption_at.1.to_string()}
                            text-anchor="middle">
                            { format!("{:.0}%", slice.share * 100.0) }
                        </text>
                    }) }
                </svg>
                <ul class="legend">
                    { for slices.iter().map(|slice| html! {
                        <li>
                            <span class="swatch" style={format!("background: {};", slice.color)}></span>
                            { legend_entry(&slice.label, slice.value) }
                        </li>
                    }) }
                </ul>
            </div>
        }
    };

    html! {
        <div class="widget-card widget-pie">
            { widget_header(&props.title, ChartType::Pie, None) }
            { body }
        </div>
    }
}

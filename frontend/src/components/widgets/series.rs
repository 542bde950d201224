//! Bar, line and area charts drawn as inline SVG on a shared category/value frame.

use yew::prelude::*;

use common::model::dashboard::ChartType;
use common::widgets::chart::{palette_color, SeriesFrame, VIEW_HEIGHT, VIEW_WIDTH};
use common::widgets::format::group_with_decimals;
use common::widgets::payload::SeriesPoint;

use super::{no_data, widget_header};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Bar,
    Line,
    Area,
}

impl SeriesKind {
    fn chart_type(&self) -> ChartType {
        match self {
            SeriesKind::Bar => ChartType::Bar,
            SeriesKind::Line => ChartType::Line,
            SeriesKind::Area => ChartType::Area,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SeriesWidgetProps {
    pub title: AttrValue,
    pub kind: SeriesKind,
    pub points: Vec<SeriesPoint>,
}

#[function_component(SeriesWidget)]
pub fn series_widget(props: &SeriesWidgetProps) -> Html {
    let body = if props.points.is_empty() {
        no_data()
    } else {
        let frame = SeriesFrame::new(&props.points);
        html! {
            <div class="widget-body">
                <svg class="chart" viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)} preserveAspectRatio="none">
                    { axes(&frame, &props.points) }
                    { plot(props.kind, &frame, &props.points) }
                </svg>
            </div>
        }
    };

    html! {
        <div class="widget-card widget-series">
            { widget_header(&props.title, props.kind.chart_type(), None) }
            { body }
        </div>
    }
}

fn axes(frame: &SeriesFrame, points: &[SeriesPoint]) -> Html {
    let label_y = frame.axis_label_y();
    html! {
        <g class="chart-axes">
            { for frame.ticks().into_iter().map(|tick| html! {
                <g>
                    <line class="grid-line" x1={frame.left().to_string()} x2={frame.right().to_string()}
                        y1={tick.y.to_string()} y2={tick.y.to_string()} />
                    <text class="tick-label" x={(frame.left() - 4.0).to_string()} y={(tick.y + 3.0).to_string()}
                        text-anchor="end">{ tick.label }</text>
                </g>
            }) }
            { for frame.axis_labels(points).into_iter().map(|label| html! {
                <text class="axis-label" x={label.x.to_string()} y={label_y.to_string()} text-anchor="middle">
                    <title>{ label.full }</title>
                    { label.text }
                </text>
            }) }
        </g>
    }
}

fn plot(kind: SeriesKind, frame: &SeriesFrame, points: &[SeriesPoint]) -> Html {
    let color = palette_color(0);
    match kind {
        SeriesKind::Bar => html! {
            <g class="chart-bars">
                { for frame.bars(points).into_iter().enumerate().map(|(i, bar)| html! {
                    <rect x={bar.x.to_string()} y={bar.y.to_string()} width={bar.width.to_string()}
                        height={bar.height.to_string()} rx="2" fill={palette_color(i)}>
                        <title>{ format!("{}: {}", bar.label, group_with_decimals(bar.value)) }</title>
                    </rect>
                }) }
            </g>
        },
        SeriesKind::Line => html! {
            <g class="chart-line">
                <path d={frame.line_path(points)} fill="none" stroke={color} stroke-width="2" />
                { markers(frame, points, color) }
            </g>
        },
        SeriesKind::Area => html! {
            <g class="chart-area">
                <path d={frame.area_path(points)} fill={color} fill-opacity="0.3" stroke="none" />
                <path d={frame.line_path(points)} fill="none" stroke={color} stroke-width="2" />
                { markers(frame, points, color) }
            </g>
        },
    }
}

fn markers(frame: &SeriesFrame, points: &[SeriesPoint], color: &'static str) -> Html {
    html! {
        { for points.iter().enumerate().map(|(i, p)| html! {
            <circle cx={frame.x_of(i).to_string()} cy={frame.y_of(p.value).to_string()} r="3" fill={color}>
                <title>{ format!("{}: {}", p.label, group_with_decimals(p.value)) }</title>
            </circle>
        }) }
    }
}

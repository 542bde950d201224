use yew::prelude::*;

use common::model::dashboard::ChartType;
use common::widgets::payload::TableData;
use common::widgets::table::{is_limited, row_count_label, CellDisplay, TABLE_ROW_LIMIT};

use super::{no_data, widget_header};

#[derive(Properties, PartialEq)]
pub struct TableWidgetProps {
    pub title: AttrValue,
    pub data: TableData,
}

#[function_component(TableWidget)]
pub fn table_widget(props: &TableWidgetProps) -> Html {
    let data = &props.data;
    let badge = Some(row_count_label(data.rows.len()));

    let body = if data.rows.is_empty() {
        no_data()
    } else {
        html! {
            <div class="widget-body table-scroll">
                <table class="data-table">
                    <thead>
                        <tr>{ for data.columns.iter().map(|c| html! { <th>{ c.clone() }</th> }) }</tr>
                    </thead>
                    <tbody>
                        { for data.rows.iter().map(|row| html! {
                            <tr>
                                { for (0..data.columns.len()).map(|i| cell(CellDisplay::of(row.get(i)))) }
                            </tr>
                        }) }
                    </tbody>
                </table>
                if is_limited(data.rows.len()) {
                    <p class="muted small">{ format!("Mostrando las primeras {} filas", TABLE_ROW_LIMIT) }</p>
                }
            </div>
        }
    };

    html! {
        <div class="widget-card widget-table">
            { widget_header(&props.title, ChartType::Table, badge) }
            { body }
        </div>
    }
}

fn cell(display: CellDisplay) -> Html {
    match display {
        CellDisplay::Flag(flag) => html! {
            <td><span class={classes!("badge", if flag { "badge-yes" } else { "badge-no" })}>{ display.text() }</span></td>
        },
        CellDisplay::Text(text) => html! { <td>{ text }</td> },
    }
}

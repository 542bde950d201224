use yew::prelude::*;

use crate::helpers::{page_header, placeholder};

#[function_component(TableView)]
pub fn table_view() -> Html {
    html! {
        <section class="page">
            { page_header("Tablas", Some("Visualiza y gestiona los datos de tus tablas."), html! {}) }
            { placeholder("Selecciona un archivo subido para ver sus datos.") }
        </section>
    }
}

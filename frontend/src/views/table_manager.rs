use yew::prelude::*;

use crate::helpers::{page_header, placeholder};

#[function_component(TableManager)]
pub fn table_manager() -> Html {
    html! {
        <section class="page">
            { page_header("Gestor de Tablas", Some("Administra tus tablas de base de datos."), html! {}) }
            { placeholder("No hay tablas configuradas.") }
        </section>
    }
}

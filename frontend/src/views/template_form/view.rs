use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::template::ColumnType;
use common::status::LoadState;

use crate::helpers::{icon, icon_button, input_value, page_header, placeholder, select_value};
use crate::routes::Route;

use super::messages::Msg;
use super::state::TemplateForm;

pub fn view(form: &TemplateForm, ctx: &Context<TemplateForm>) -> Html {
    match &form.loaded {
        LoadState::Loading => return placeholder("Cargando template..."),
        LoadState::Failed(_) => return placeholder("Template no encontrado"),
        LoadState::Ready(()) => {}
    }
    let link = ctx.link();
    let (title, back) = match &ctx.props().id {
        Some(id) => ("Editar Template", Route::TemplateDetail { id: id.clone() }),
        None => ("Nuevo Template", Route::Templates),
    };
    let actions = html! {
        <Link<Route> classes="btn" to={back}>{ icon("arrow_back") }{"Volver"}</Link<Route>>
    };
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Save
    });

    html! {
        <section class="page">
            { page_header(title, Some("Define el nombre y las columnas que deben tener tus archivos"), actions) }
            <form class="form" {onsubmit}>
                <label class="field">
                    <span>{"Nombre del template"}</span>
                    <input type="text" value={form.name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))} />
                </label>
                { column_adder(form, link) }
                { column_list(form, link) }
                if let Some(error) = &form.form_error {
                    <p class="error-text">{ error.clone() }</p>
                }
                <div class="form-actions">
                    <button class="btn btn-primary" type="submit" disabled={form.saving}>
                        { icon("save") }
                        { if form.saving { "Guardando..." } else { "Guardar Template" } }
                    </button>
                </div>
            </form>
        </section>
    }
}

fn column_adder(form: &TemplateForm, link: &Scope<TemplateForm>) -> Html {
    let on_key = link.batch_callback(|e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            Some(Msg::AddColumn)
        } else {
            None
        }
    });
    let on_type = link.callback(|e: Event| Msg::SetColumnType(ColumnType::from_str_lossy(&select_value(&e))));

    html! {
        <div class="field">
            <span>{"Agregar columna"}</span>
            <div class="inline-inputs">
                <input type="text" placeholder="Nombre de la columna" value={form.column_name.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetColumnName(input_value(&e)))}
                    onkeydown={on_key} />
                <select onchange={on_type}>
                    { for ColumnType::SELECTABLE.into_iter().map(|t| html! {
                        <option value={t.as_str()} selected={t == form.column_type}>{ t.label() }</option>
                    }) }
                </select>
                { icon_button("add", "Agregar", link.callback(|e: MouseEvent| {
                    e.prevent_default();
                    Msg::AddColumn
                }), false) }
            </div>
            if let Some(error) = &form.column_error {
                <span class="error-text">{ error.clone() }</span>
            }
        </div>
    }
}

fn column_list(form: &TemplateForm, link: &Scope<TemplateForm>) -> Html {
    html! {
        <div class="field">
            <span>{ format!("Columnas agregadas ({})", form.columns.len()) }</span>
            if form.columns.is_empty() {
                <p class="muted">{"Aún no has agregado columnas."}</p>
            } else {
                <ul class="column-rows">
                    { for form.columns.columns().iter().enumerate().map(|(index, column)| html! {
                        <li>
                            <span>{ column.name.clone() }</span>
                            <span class="badge">{ column.column_type.label() }</span>
                            <button type="button" class="icon-btn" title="Quitar"
                                onclick={link.callback(move |_| Msg::RemoveColumn(index))}>
                                { icon("close") }
                            </button>
                        </li>
                    }) }
                </ul>
            }
        </div>
    }
}

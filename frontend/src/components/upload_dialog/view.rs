use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::status::LoadState;
use common::upload::{accept_attribute, can_submit};

use crate::components::top_sheet::TopSheet;
use crate::helpers::{icon, select_value};

use super::messages::Msg;
use super::state::UploadDialog;

pub fn view(dialog: &UploadDialog, ctx: &Context<UploadDialog>) -> Html {
    let link = ctx.link();
    html! {
        <TopSheet open={ctx.props().open} title="Subir archivo" on_close={link.callback(|_| Msg::Close)}>
            <div class="form">
                { template_picker(dialog, link) }
                { file_picker(dialog, link) }
                <div class="form-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::Close)} disabled={dialog.uploading}>
                        {"Cancelar"}
                    </button>
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::Submit)}
                        disabled={!can_submit(dialog.uploading, dialog.template_id.as_deref(), dialog.file.is_some())}>
                        { if dialog.uploading { "Subiendo..." } else { "Subir" } }
                    </button>
                </div>
            </div>
        </TopSheet>
    }
}

fn template_picker(dialog: &UploadDialog, link: &Scope<UploadDialog>) -> Html {
    let options = match &dialog.templates {
        LoadState::Loading => return html! { <p class="muted">{"Cargando templates..."}</p> },
        LoadState::Failed(_) => return html! { <p class="error-text">{"Error al cargar templates"}</p> },
        LoadState::Ready(templates) if templates.is_empty() => {
            return html! { <p class="muted">{"No tienes templates. Crea uno antes de subir un archivo."}</p> };
        }
        LoadState::Ready(templates) => templates,
    };
    let selected = dialog.template_id.clone().unwrap_or_default();

    html! {
        <label class="field">
            <span>{"Template"}</span>
            <select onchange={link.callback(|e: Event| Msg::SelectTemplate(select_value(&e)))}>
                <option value="" selected={selected.is_empty()}>{"Selecciona un template"}</option>
                { for options.iter().map(|t| html! {
                    <option value={t.id.clone()} selected={t.id == selected}>
                        { format!("{} ({} columnas)", t.name, t.columns.len()) }
                    </option>
                }) }
            </select>
        </label>
    }
}

fn file_picker(dialog: &UploadDialog, link: &Scope<UploadDialog>) -> Html {
    let on_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChosen(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <label class="field">
            <span>{"Archivo"}</span>
            <input type="file" accept={accept_attribute()} onchange={on_change} />
            if let Some(name) = dialog.file_name() {
                <span class="file-chip">{ icon("description") }{ name }</span>
            }
            if let Some(error) = &dialog.file_error {
                <span class="error-text">{ error.clone() }</span>
            }
            <small class="muted">{"Formatos admitidos: .xlsx, .xls, .csv"}</small>
        </label>
    }
}

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::forms::ColumnBuilder;
use common::status::LoadState;

use crate::api::{self, templates};
use crate::helpers::{navigate_after, show_error, show_success};
use crate::routes::Route;

use super::messages::Msg;
use super::state::TemplateForm;

pub fn update(form: &mut TemplateForm, ctx: &Context<TemplateForm>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let Some(id) = ctx.props().id.clone() else {
                return false;
            };
            if id.trim().is_empty() {
                show_error("ID de template no válido");
                navigate_after(ctx.link().navigator(), Route::Templates, 0);
                return false;
            }
            let Some(client) = api::client_from(ctx) else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(templates::get(&client, &id).await));
            });
            false
        }
        Msg::Loaded(result) => {
            match result {
                Ok(template) => {
                    form.name = template.name.clone();
                    form.columns = ColumnBuilder::from_template(&template);
                    form.loaded = LoadState::Ready(());
                }
                Err(err) => {
                    show_error("Error al cargar el template");
                    form.loaded = LoadState::Failed(err.to_string());
                }
            }
            true
        }
        Msg::SetName(name) => {
            form.name = name;
            form.form_error = None;
            false
        }
        Msg::SetColumnName(name) => {
            form.column_name = name;
            if form.column_error.take().is_some() {
                return true;
            }
            false
        }
        Msg::SetColumnType(column_type) => {
            form.column_type = column_type;
            false
        }
        Msg::AddColumn => {
            match form.columns.add(&form.column_name, form.column_type) {
                Ok(()) => {
                    form.column_name.clear();
                    form.column_error = None;
                    form.form_error = None;
                }
                Err(err) => form.column_error = Some(err.to_string()),
            }
            true
        }
        Msg::RemoveColumn(index) => {
            form.columns.remove(index);
            true
        }
        Msg::Save => {
            if form.saving {
                return false;
            }
            let payload = match form.columns.payload(&form.name) {
                Ok(payload) => payload,
                Err(err) => {
                    form.form_error = Some(err.to_string());
                    return true;
                }
            };
            let Some(client) = api::client_from(ctx) else {
                return false;
            };
            form.saving = true;
            form.form_error = None;
            let id = ctx.props().id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match id {
                    Some(id) => templates::update(&client, &id, &payload).await,
                    None => templates::create(&client, &payload).await,
                };
                link.send_message(Msg::Saved(result));
            });
            true
        }
        Msg::Saved(result) => {
            form.saving = false;
            match result {
                Ok(template) => {
                    show_success(if form.editing {
                        "Template actualizado exitosamente"
                    } else {
                        "Template creado exitosamente"
                    });
                    if let Some(navigator) = ctx.link().navigator() {
                        navigator.push(&Route::TemplateDetail { id: template.id });
                    }
                }
                Err(err) => form.form_error = Some(err.detail().to_string()),
            }
            true
        }
    }
}

use yew::platform::spawn_local;
use yew::prelude::*;

use common::status::LoadState;
use common::upload::{check_file, check_submission};

use crate::api::{self, data, templates};
use crate::helpers::{show_error, show_success};

use super::messages::Msg;
use super::state::UploadDialog;

pub fn update(dialog: &mut UploadDialog, ctx: &Context<UploadDialog>, msg: Msg) -> bool {
    match msg {
        Msg::LoadTemplates => {
            let Some(client) = api::client_from(ctx) else {
                return false;
            };
            dialog.templates = LoadState::Loading;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::TemplatesLoaded(templates::list(&client).await));
            });
            true
        }
        Msg::TemplatesLoaded(result) => {
            if result.is_err() {
                show_error("Error al cargar templates");
            }
            dialog.templates = LoadState::from_result(result);
            true
        }
        Msg::SelectTemplate(id) => {
            dialog.template_id = (!id.is_empty()).then_some(id);
            true
        }
        Msg::FileChosen(file) => {
            dialog.file_error = None;
            dialog.file = match file {
                Some(file) => match check_file(&file.name(), &file.type_()) {
                    Ok(()) => Some(file),
                    Err(rejection) => {
                        show_error(&rejection.to_string());
                        dialog.file_error = Some(rejection.to_string());
                        None
                    }
                },
                None => None,
            };
            true
        }
        Msg::Submit => {
            if dialog.uploading {
                return false;
            }
            if let Err(rejection) = check_submission(dialog.template_id.as_deref(), dialog.file.is_some()) {
                show_error(&rejection.to_string());
                return false;
            }
            let (Some(client), Some(template_id), Some(file)) =
                (api::client_from(ctx), dialog.template_id.clone(), dialog.file.clone())
            else {
                return false;
            };
            dialog.uploading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Uploaded(data::upload(&client, &template_id, &file).await));
            });
            true
        }
        Msg::Uploaded(result) => {
            dialog.uploading = false;
            match result {
                Ok(_) => {
                    show_success("Archivo subido exitosamente");
                    ctx.props().on_uploaded.emit(());
                    ctx.props().on_close.emit(());
                }
                Err(err) => {
                    gloo_console::error!(format!("Error al subir el archivo: {}", err));
                    show_error("Error al subir el archivo");
                }
            }
            true
        }
        Msg::Close => {
            if !dialog.uploading {
                ctx.props().on_close.emit(());
            }
            false
        }
    }
}

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::error::ApiError;
use common::model::user::TokenResponse;
use common::requests::LoginRequest;

use crate::api::{self, auth};
use crate::helpers::{input_value, show_success};
use crate::routes::Route;

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Finished(Result<TokenResponse, ApiError>),
}

pub struct Login {
    username: String,
    password: String,
    submitting: bool,
    error: Option<String>,
}

impl Component for Login {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            submitting: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(value) => {
                self.username = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                if self.username.trim().is_empty() || self.password.is_empty() {
                    self.error = Some("Ingresa tu usuario y contraseña".to_string());
                    return true;
                }
                let Some(client) = api::client_from(ctx) else {
                    return false;
                };
                let request = LoginRequest {
                    username: self.username.trim().to_string(),
                    password: self.password.clone(),
                };
                self.submitting = true;
                self.error = None;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(auth::login(&client, &request).await));
                });
                true
            }
            Msg::Finished(result) => {
                self.submitting = false;
                match result {
                    Ok(_) => {
                        show_success("Inicio de sesión exitoso");
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push(&Route::Dashboards);
                        }
                    }
                    Err(err) if err.is_unauthorized() => {
                        self.error = Some("Usuario o contraseña incorrectos".to_string());
                    }
                    Err(err) => self.error = Some(err.detail().to_string()),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="centered-page">
                <form class="auth-card" {onsubmit}>
                    <h1>{"Iniciar sesión"}</h1>
                    <label class="field">
                        <span>{"Usuario"}</span>
                        <input type="text" autocomplete="username" value={self.username.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetUsername(input_value(&e)))} />
                    </label>
                    <label class="field">
                        <span>{"Contraseña"}</span>
                        <input type="password" autocomplete="current-password" value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetPassword(input_value(&e)))} />
                    </label>
                    if let Some(error) = &self.error {
                        <p class="error-text">{ error.clone() }</p>
                    }
                    <button class="btn btn-primary" type="submit" disabled={self.submitting}>
                        { if self.submitting { "Ingresando..." } else { "Ingresar" } }
                    </button>
                    <p class="muted">
                        {"¿No tienes cuenta? "}
                        <Link<Route> to={Route::Signup}>{"Regístrate"}</Link<Route>>
                    </p>
                </form>
            </div>
        }
    }
}

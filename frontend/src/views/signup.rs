use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::error::ApiError;
use common::forms::SignupForm;
use common::model::user::User;

use crate::api::{self, auth};
use crate::helpers::{input_value, show_success};
use crate::routes::Route;

#[derive(Clone, Copy)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

pub enum Msg {
    Set(Field, String),
    Submit,
    Finished(Result<User, ApiError>),
}

pub struct Signup {
    form: SignupForm,
    submitting: bool,
    error: Option<String>,
}

impl Component for Signup {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: SignupForm::default(),
            submitting: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(field, value) => {
                let slot = match field {
                    Field::Username => &mut self.form.username,
                    Field::Email => &mut self.form.email,
                    Field::Password => &mut self.form.password,
                    Field::ConfirmPassword => &mut self.form.confirm_password,
                };
                *slot = value;
                false
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let request = match self.form.validate() {
                    Ok(request) => request,
                    Err(err) => {
                        self.error = Some(err.to_string());
                        return true;
                    }
                };
                let Some(client) = api::client_from(ctx) else {
                    return false;
                };
                self.submitting = true;
                self.error = None;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(auth::register(&client, &request).await));
                });
                true
            }
            Msg::Finished(result) => {
                self.submitting = false;
                match result {
                    Ok(user) => {
                        show_success(&format!("Cuenta creada para {}. Inicia sesión.", user.username));
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push(&Route::Login);
                        }
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
        let field = |label: &str, kind: &str, value: &str, target: Field| {
            html! {
                <label class="field">
                    <span>{ label.to_string() }</span>
                    <input type={kind.to_string()} value={value.to_string()}
                        oninput={link.callback(move |e: InputEvent| Msg::Set(target, input_value(&e)))} />
                </label>
            }
        };

        html! {
            <div class="centered-page">
                <form class="auth-card" {onsubmit}>
                    <h1>{"Crear cuenta"}</h1>
                    { field("Usuario", "text", &self.form.username, Field::Username) }
                    { field("Email", "email", &self.form.email, Field::Email) }
                    { field("Contraseña", "password", &self.form.password, Field::Password) }
                    { field("Confirmar contraseña", "password", &self.form.confirm_password, Field::ConfirmPassword) }
                    if let Some(error) = &self.error {
                        <p class="error-text">{ error.clone() }</p>
                    }
                    <button class="btn btn-primary" type="submit" disabled={self.submitting}>
                        { if self.submitting { "Creando cuenta..." } else { "Registrarse" } }
                    </button>
                    <p class="muted">
                        {"¿Ya tienes cuenta? "}
                        <Link<Route> to={Route::Login}>{"Inicia sesión"}</Link<Route>>
                    </p>
                </form>
            </div>
        }
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="centered-page">
            <h1 class="brand">{"KeepDM"}</h1>
            <p class="muted">{"Elige una opción:"}</p>
            <div class="button-row">
                <Link<Route> classes="btn btn-primary" to={Route::Login}>{"Login"}</Link<Route>>
                <Link<Route> classes="btn" to={Route::Signup}>{"Sign Up"}</Link<Route>>
                <Link<Route> classes="btn" to={Route::Dashboards}>{"Dashboard"}</Link<Route>>
            </div>
        </div>
    }
}

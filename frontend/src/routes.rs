//! Route tree and the single guard every route passes through.

use yew::prelude::*;
use yew_router::prelude::*;

use common::routing::{resolve, Access, GuardOutcome};

use crate::api::ApiClient;
use crate::components::shell::AppShell;
use crate::views::dashboard_create::DashboardCreate;
use crate::views::dashboard_detail::DashboardDetail;
use crate::views::dashboards::Dashboards;
use crate::views::home::Home;
use crate::views::login::Login;
use crate::views::profile::Profile;
use crate::views::signup::Signup;
use crate::views::table::TableView;
use crate::views::table_manager::TableManager;
use crate::views::template_detail::TemplateDetail;
use crate::views::template_form::TemplateForm;
use crate::views::templates::Templates;
use crate::views::upload::Upload;
use crate::views::upload_detail::UploadDetail;
use crate::views::upload_preview::UploadPreview;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboards,
    #[at("/dashboard/create")]
    DashboardCreate,
    #[at("/dashboard/:id")]
    DashboardDetail { id: String },
    #[at("/table-manager")]
    TableManager,
    #[at("/table")]
    Table,
    #[at("/upload")]
    Upload,
    #[at("/upload/:id")]
    UploadDetail { id: String },
    #[at("/upload/:id/preview")]
    UploadPreview { id: String },
    #[at("/profile")]
    Profile,
    #[at("/templates")]
    Templates,
    #[at("/templates/create")]
    TemplateCreate,
    #[at("/templates/:id")]
    TemplateDetail { id: String },
    #[at("/templates/:id/edit")]
    TemplateEdit { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn access(&self) -> Access {
        match self {
            Route::Home | Route::NotFound => Access::Open,
            Route::Login | Route::Signup => Access::PublicOnly,
            _ => Access::Protected,
        }
    }
}

/// Query string of `/dashboard/create`.
#[derive(Clone, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct CreateDashboardQuery {
    #[serde(default)]
    pub data_id: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub route: Route,
}

#[function_component(Guarded)]
fn guarded(props: &GuardProps) -> Html {
    let client = use_context::<ApiClient>();
    let authenticated = client.as_ref().is_some_and(|c| c.session().is_authenticated());

    match resolve(props.route.access(), authenticated) {
        GuardOutcome::Allow => render(&props.route),
        GuardOutcome::Redirect(path) => match Route::recognize(path) {
            Some(target) => html! { <Redirect<Route> to={target} /> },
            None => html! {},
        },
    }
}

pub fn switch(route: Route) -> Html {
    html! { <Guarded route={route} /> }
}

fn render(route: &Route) -> Html {
    let page = match route.clone() {
        Route::Home => return html! { <Home /> },
        Route::Login => return html! { <Login /> },
        Route::Signup => return html! { <Signup /> },
        Route::NotFound => return not_found(),
        Route::Dashboards => html! { <Dashboards /> },
        Route::DashboardCreate => html! { <DashboardCreate /> },
        Route::DashboardDetail { id } => html! { <DashboardDetail {id} /> },
        Route::TableManager => html! { <TableManager /> },
        Route::Table => html! { <TableView /> },
        Route::Upload => html! { <Upload /> },
        Route::UploadDetail { id } => html! { <UploadDetail {id} /> },
        Route::UploadPreview { id } => html! { <UploadPreview {id} /> },
        Route::Profile => html! { <Profile /> },
        Route::Templates => html! { <Templates /> },
        Route::TemplateCreate => html! { <TemplateForm /> },
        Route::TemplateDetail { id } => html! { <TemplateDetail {id} /> },
        Route::TemplateEdit { id } => html! { <TemplateForm id={Some(id)} /> },
    };
    html! { <AppShell>{ page }</AppShell> }
}

fn not_found() -> Html {
    html! {
        <div class="centered-page">
            <h1>{"404"}</h1>
            <p class="muted">{"La página que buscas no existe."}</p>
            <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_resolves_to_its_route() {
        let cases = [
            ("/", Route::Home),
            ("/login", Route::Login),
            ("/signup", Route::Signup),
            ("/dashboard", Route::Dashboards),
            ("/dashboard/create", Route::DashboardCreate),
            ("/dashboard/abc", Route::DashboardDetail { id: "abc".into() }),
            ("/table-manager", Route::TableManager),
            ("/table", Route::Table),
            ("/upload", Route::Upload),
            ("/upload/d1", Route::UploadDetail { id: "d1".into() }),
            ("/upload/d1/preview", Route::UploadPreview { id: "d1".into() }),
            ("/profile", Route::Profile),
            ("/templates", Route::Templates),
            ("/templates/create", Route::TemplateCreate),
            ("/templates/t1", Route::TemplateDetail { id: "t1".into() }),
            ("/templates/t1/edit", Route::TemplateEdit { id: "t1".into() }),
        ];
        for (path, route) in cases {
            assert_eq!(Route::recognize(path), Some(route.clone()), "{}", path);
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn access_levels() {
        assert_eq!(Route::Home.access(), Access::Open);
        assert_eq!(Route::Login.access(), Access::PublicOnly);
        assert_eq!(Route::Signup.access(), Access::PublicOnly);
        assert_eq!(Route::Profile.access(), Access::Protected);
        assert_eq!(Route::UploadPreview { id: "x".into() }.access(), Access::Protected);
    }

    #[test]
    fn guard_targets_are_routes() {
        assert_eq!(Route::recognize(common::routing::LOGIN_PATH), Some(Route::Login));
        assert_eq!(Route::recognize(common::routing::HOME_PATH), Some(Route::Dashboards));
    }
}

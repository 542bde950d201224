//! Authenticated page frame: sidebar navigation, theme toggle and logout.

use yew::prelude::*;
use yew_router::prelude::*;

use common::theme::Theme;

use crate::api::{self, auth};
use crate::helpers::{icon, show_toast};
use crate::routes::Route;
use crate::storage;

const NAV_ITEMS: [(&str, &str, Route); 4] = [
    ("dashboard", "Dashboard", Route::Dashboards),
    ("description", "Templates", Route::Templates),
    ("table_chart", "Tablas", Route::Table),
    ("upload_file", "Subir", Route::Upload),
];

pub enum Msg {
    ToggleTheme,
    Logout,
}

#[derive(Properties, PartialEq)]
pub struct AppShellProps {
    #[prop_or_default]
    pub children: Html,
}

pub struct AppShell {
    theme: Theme,
}

impl Component for AppShell {
    type Message = Msg;
    type Properties = AppShellProps;

    fn create(ctx: &Context<Self>) -> Self {
        let theme = api::client_from(ctx)
            .map(|c| storage::load_theme(&c.config().theme_storage_key))
            .unwrap_or_default();
        Self { theme }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleTheme => {
                self.theme = self.theme.toggled();
                storage::apply_theme(self.theme);
                if let Some(client) = api::client_from(ctx) {
                    storage::save_theme(&client.config().theme_storage_key, self.theme);
                }
                true
            }
            Msg::Logout => {
                if let Some(client) = api::client_from(ctx) {
                    auth::logout(&client);
                }
                show_toast("Sesión cerrada");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = ctx.link().route::<Route>();
        let current_path = current.as_ref().map(|r| r.to_path()).unwrap_or_default();

        html! {
            <div class="app-shell">
                <aside class="sidebar" data-export-ignore="true">
                    <Link<Route> classes="sidebar-brand" to={Route::Dashboards}>{"KeepDM"}</Link<Route>>
                    <nav class="sidebar-nav">
                        { for NAV_ITEMS.iter().map(|(icon_name, label, route)| {
                            let active = is_section_of(&current_path, &route.to_path());
                            html! {
                                <Link<Route>
                                    classes={classes!("nav-item", active.then_some("active"))}
                                    to={route.clone()}
                                >
                                    { icon(icon_name) }
                                    <span>{ *label }</span>
                                </Link<Route>>
                            }
                        }) }
                    </nav>
                    <div class="sidebar-footer">
                        <Link<Route> classes="nav-item" to={Route::Profile}>
                            { icon("person") }
                            <span>{"Perfil"}</span>
                        </Link<Route>>
                        <button class="nav-item" onclick={ctx.link().callback(|_| Msg::ToggleTheme)}>
                            { icon(self.theme.toggle_icon()) }
                            <span>{"Tema"}</span>
                        </button>
                        <button class="nav-item" onclick={ctx.link().callback(|_| Msg::Logout)}>
                            { icon("logout") }
                            <span>{"Cerrar sesión"}</span>
                        </button>
                    </div>
                </aside>
                <main class="app-content">
                    { ctx.props().children.clone() }
                </main>
            </div>
        }
    }
}

/// `/templates/abc` belongs to the `/templates` section, `/table-manager` does not belong to `/table`.
fn is_section_of(current: &str, section: &str) -> bool {
    current == section
        || current
            .strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::is_section_of;

    #[test]
    fn section_matching() {
        assert!(is_section_of("/templates", "/templates"));
        assert!(is_section_of("/templates/t1/edit", "/templates"));
        assert!(is_section_of("/dashboard/create", "/dashboard"));
        assert!(!is_section_of("/table-manager", "/table"));
        assert!(!is_section_of("/upload", "/dashboard"));
    }
}

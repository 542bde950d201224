//! Dashboard creation: a six-slot workspace over one uploaded data file.
//!
//! Responsibilities
//! - Read the `data_id` query parameter; without it, leave for the upload list.
//! - Load the file analysis, which provides the template id, the column types
//!   the validator checks against and the server's chart suggestions.
//! - Delegate every slot edit to `common::workspace::Workspace` and submit the
//!   single creation payload it assembles.

use yew::prelude::*;
use yew_router::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DashboardCreate;

use crate::helpers::{navigate_after, show_error};
use crate::routes::{CreateDashboardQuery, Route};

impl Component for DashboardCreate {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let data_id = ctx
            .link()
            .location()
            .and_then(|l| l.query::<CreateDashboardQuery>().ok())
            .and_then(|q| q.data_id)
            .filter(|id| !id.trim().is_empty());
        DashboardCreate::new(data_id)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if self.data_id.is_some() {
            ctx.link().send_message(Msg::LoadAnalysis);
        } else {
            show_error("No se especificó un archivo de datos");
            navigate_after(ctx.link().navigator(), Route::Upload, 0);
        }
    }
}

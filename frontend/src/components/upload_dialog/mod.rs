//! Upload dialog: pick a template, pick a spreadsheet, send both.
//!
//! Responsibilities
//! - Load the user's templates every time the dialog opens.
//! - Reject files that are not Excel or CSV before any request is made.
//! - Post the file as multipart form data and report the outcome with a toast.
//! - Notify the parent on success so it can refresh its list.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UploadDialogProps;
pub use state::UploadDialog;

impl Component for UploadDialog {
    type Message = Msg;
    type Properties = UploadDialogProps;

    fn create(ctx: &Context<Self>) -> Self {
        let dialog = UploadDialog::new();
        if ctx.props().open {
            ctx.link().send_message(Msg::LoadTemplates);
        }
        dialog
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().open && !old_props.open {
            self.reset();
            ctx.link().send_message(Msg::LoadTemplates);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

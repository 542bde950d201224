//! Template builder, shared by `/templates/create` and `/templates/:id/edit`.
//!
//! With an `id` the existing template is loaded first and saving issues a PUT;
//! without one the form starts empty and saving issues a POST. Column rules
//! (trimmed names, no case-insensitive duplicates, at least one column) live in
//! `common::forms::ColumnBuilder`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TemplateFormProps;
pub use state::TemplateForm;

impl Component for TemplateForm {
    type Message = Msg;
    type Properties = TemplateFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let editing = ctx.props().id.is_some();
        if editing {
            ctx.link().send_message(Msg::Load);
        }
        TemplateForm::new(editing)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            *self = TemplateForm::new(ctx.props().id.is_some());
            if ctx.props().id.is_some() {
                ctx.link().send_message(Msg::Load);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

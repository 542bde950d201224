use yew::{html, Children, Component, Context, Html, Properties};

use common::layout::SlotRole;

#[derive(Properties, PartialEq)]
pub struct WorkspaceGridProps {
    /// Role of the row; sets the column count.
    pub role: SlotRole,
    /// Fixed cell height. `None` lets cells size to their content.
    #[prop_or_default]
    pub height_px: Option<u32>,
    pub children: Children,
}

/// One row of the dashboard layout.
pub struct WorkspaceGrid;

impl Component for WorkspaceGrid {
    type Message = ();
    type Properties = WorkspaceGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WorkspaceGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let rows = match props.height_px {
            Some(px) => format!("grid-auto-rows: {}px;", px),
            None => String::new(),
        };
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             {}
             gap: 16px;
             margin-bottom: 16px;",
            props.role.columns(),
            rows
        );

        html! {
            <div class="workspace-row" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}

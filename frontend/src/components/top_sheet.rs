//! Sheet that slides down from the top of the viewport, used for modal forms.
//!
//! Visibility follows the `open` prop. The `show` class is toggled shortly
//! after render so the CSS transition runs instead of snapping into place.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

use crate::helpers::icon;

const SHOW_CLASS: &str = "show";
const TRANSITION_DELAY_MS: u32 = 50;

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

pub struct TopSheet {
    id: String,
    node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let close = props.on_close.reform(|_: MouseEvent| ());
        html! {
            <>
                if props.open {
                    <div class="top-sheet-backdrop" onclick={close.clone()}></div>
                }
                <div class="top-sheet" id={self.id.clone()} ref={self.node_ref.clone()} aria-hidden={(!props.open).to_string()}>
                    <div class="top-sheet-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="icon-btn" onclick={close}>{ icon("close") }</button>
                    </div>
                    if props.open {
                        { props.children.clone() }
                    }
                </div>
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if ctx.props().open {
            open_top_sheet(&self.node_ref);
        } else {
            close_top_sheet(&self.node_ref);
        }
    }
}

pub fn open_top_sheet(sheet: &NodeRef) {
    set_shown(sheet, true);
}

pub fn close_top_sheet(sheet: &NodeRef) {
    set_shown(sheet, false);
}

fn set_shown(sheet: &NodeRef, shown: bool) {
    let Some(element) = sheet.cast::<web_sys::HtmlElement>() else {
        return;
    };
    Timeout::new(TRANSITION_DELAY_MS, move || {
        let classes = element.class_list();
        let _ = if shown {
            classes.add_1(SHOW_CLASS)
        } else {
            classes.remove_1(SHOW_CLASS)
        };
    })
    .forget();
}

//! Small DOM utilities shared by the views.
//!
//! - **Toasts**: transient notifications injected at the bottom of the page and
//!   removed after a few seconds. Every network and server failure ends here.
//! - **Confirmation**: the browser's blocking `confirm()` dialog.
//! - **Downloads**: saving fetched bytes through an object URL.
//! - **Delayed navigation**: leaving a view after a toast has had time to show.

use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::routes::Route;

const TOAST_MS: u32 = 3000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn background(&self) -> &'static str {
        match self {
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
            ToastKind::Success => "rgba(27, 94, 32, 0.95)",
            ToastKind::Error => "rgba(183, 28, 28, 0.95)",
        }
    }
}

/// Displays a temporary notification at the bottom of the screen.
pub fn show_toast(message: &str) {
    toast(ToastKind::Info, message);
}

pub fn show_success(message: &str) {
    toast(ToastKind::Success, message);
}

pub fn show_error(message: &str) {
    toast(ToastKind::Error, message);
}

pub fn toast(kind: ToastKind, message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("max-width", "90vw").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Browser confirmation dialog. A missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Navigates to `route` after `delay_ms`, leaving room for a toast to be read.
pub fn navigate_after(navigator: Option<Navigator>, route: Route, delay_ms: u32) {
    let Some(navigator) = navigator else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        navigator.push(&route);
    });
}

/// Saves `bytes` as a file named `file_name`.
pub fn download_bytes(bytes: &[u8], file_name: &str, mime_type: &str) {
    let blob = Blob::new_with_options(bytes, Some(mime_type));
    let url = ObjectUrl::from(blob);
    let anchor = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.create_element("a").ok())
        .and_then(|e| e.dyn_into::<HtmlAnchorElement>().ok());
    if let Some(anchor) = anchor {
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
    }
    // The object URL must outlive the click.
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
        drop(url);
    });
}

pub fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

/// Material icon.
pub fn icon(name: &str) -> Html {
    html! { <i class="material-icons">{ name.to_string() }</i> }
}

pub fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>, disabled: bool) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click} disabled={disabled}>
            { icon(icon_name) }
            <span class="icon-label">{ label.to_string() }</span>
        </button>
    }
}

/// Centered muted message used for loading, empty and failure states.
pub fn placeholder(message: &str) -> Html {
    html! {
        <div class="placeholder">
            <p class="muted">{ message.to_string() }</p>
        </div>
    }
}

/// Title row at the top of a page, with optional actions on the right.
pub fn page_header(title: &str, subtitle: Option<&str>, actions: Html) -> Html {
    html! {
        <header class="page-header">
            <div>
                <h1>{ title.to_string() }</h1>
                if let Some(subtitle) = subtitle {
                    <p class="muted">{ subtitle.to_string() }</p>
                }
            </div>
            <div class="page-actions">{ actions }</div>
        </header>
    }
}

//! Dashboard to PDF.
//!
//! The element is rasterized with `html-to-image` and laid onto A4 pages with
//! `jsPDF`, both loaded as globals by `index.html`. Elements carrying
//! `data-export-ignore="true"` are left out of the capture.

use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement};

use common::export::{paginate, sanitize_file_name, DEFAULT_MARGIN_MM, EXPORT_IGNORE_ATTR};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = htmlToImage, js_name = toPng, catch)]
    fn to_png(node: &HtmlElement, options: &JsValue) -> Result<Promise, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, js_namespace = jspdf, js_class = "jsPDF", catch)]
    fn new(options: &JsValue) -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method, js_name = addImage)]
    fn add_image(this: &JsPdf, data_url: &str, format: &str, x: f64, y: f64, width: f64, height: f64);

    #[wasm_bindgen(method, js_name = addPage)]
    fn add_page(this: &JsPdf);

    #[wasm_bindgen(method)]
    fn save(this: &JsPdf, file_name: &str);
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

fn is_exported(node: JsValue) -> bool {
    node.dyn_into::<Element>()
        .map(|el| el.get_attribute(EXPORT_IGNORE_ATTR).as_deref() != Some("true"))
        .unwrap_or(true)
}

/// Captures `element` and downloads it as `<name>.pdf`, one or more A4 pages.
pub async fn export_element_to_pdf(element: &HtmlElement, name: &str) -> Result<(), JsValue> {
    let filter = Closure::<dyn Fn(JsValue) -> bool>::new(is_exported);
    let capture = Object::new();
    set(&capture, "filter", filter.as_ref())?;
    set(&capture, "pixelRatio", &JsValue::from_f64(2.0))?;
    set(&capture, "cacheBust", &JsValue::TRUE)?;

    let data_url = JsFuture::from(to_png(element, &capture)?).await?;
    drop(filter);
    let data_url = data_url
        .as_string()
        .ok_or_else(|| JsValue::from_str("la captura no devolvió una imagen"))?;

    let document = Object::new();
    set(&document, "orientation", &JsValue::from_str("portrait"))?;
    set(&document, "unit", &JsValue::from_str("mm"))?;
    set(&document, "format", &JsValue::from_str("a4"))?;
    let pdf = JsPdf::new(&document)?;

    let width = f64::from(element.offset_width());
    let height = f64::from(element.offset_height());
    for (page, placement) in paginate(width, height, DEFAULT_MARGIN_MM).iter().enumerate() {
        if page > 0 {
            pdf.add_page();
        }
        pdf.add_image(&data_url, "PNG", placement.x, placement.y, placement.width, placement.height);
    }

    pdf.save(&sanitize_file_name(name));
    Ok(())
}

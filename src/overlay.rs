use crate::constants::{SLIDES_ID, SLIDE_ID_PREFIX, SLIDE_LABEL_ID};
use crate::dom::js_err;
use folio_core::{pages_for, ViewTable, Viewpoint};
use web_sys as web;

fn append_text(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let el = document.create_element(tag).map_err(js_err)?;
    el.set_text_content(Some(text));
    parent.append_child(&el).map_err(js_err)?;
    Ok(el)
}

fn build_section(
    document: &web::Document,
    index: usize,
    view: &Viewpoint,
) -> anyhow::Result<web::Element> {
    let section = document.create_element("section").map_err(js_err)?;
    section.set_id(&format!("{SLIDE_ID_PREFIX}{index}"));
    section.set_class_name("slide");
    _ = section.set_attribute("data-active", "0");
    _ = section.set_attribute(
        "style",
        &format!("min-height:100vh;text-align:{}", view.align.as_css()),
    );

    append_text(document, &section, "h1", &view.label)?;
    if let Some(sub) = &view.subtitle {
        append_text(document, &section, "h2", sub)?;
    }
    if let Some(desc) = &view.description {
        append_text(document, &section, "p", desc)?;
    }
    if !view.details.is_empty() {
        let list = document.create_element("ul").map_err(js_err)?;
        for d in &view.details {
            append_text(document, &list, "li", d)?;
        }
        section.append_child(&list).map_err(js_err)?;
    }
    Ok(section)
}

/// Fill `#slides` with one full-screen section per viewpoint.
pub fn build_slides(document: &web::Document, table: &ViewTable) -> anyhow::Result<()> {
    let root = document
        .get_element_by_id(SLIDES_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{SLIDES_ID}"))?;
    root.set_inner_html("");
    let pages = pages_for(table.len());
    _ = root.set_attribute("style", &format!("min-height:{}vh", pages * 100));
    for (i, view) in table.iter().enumerate() {
        let section = build_section(document, i, view)?;
        root.append_child(&section).map_err(js_err)?;
    }
    log::info!("[overlay] built {} slide sections over {pages} pages", table.len());
    Ok(())
}

/// Mark slide `active` and update the HUD label.
pub fn set_active(document: &web::Document, table: &ViewTable, active: usize) {
    for i in 0..table.len() {
        if let Some(el) = document.get_element_by_id(&format!("{SLIDE_ID_PREFIX}{i}")) {
            let on = i == active;
            _ = el.set_attribute("data-active", if on { "1" } else { "0" });
            let cl = el.class_list();
            _ = if on {
                cl.add_1("active")
            } else {
                cl.remove_1("active")
            };
        }
    }
    if let Some(el) = document.get_element_by_id(SLIDE_LABEL_ID) {
        el.set_text_content(Some(&table.view(active).label));
    }
}

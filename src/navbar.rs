use crate::constants::*;
use crate::dom;
use portfolio_core::navbar::{
    active_flags, is_scrolled, nav_link_selector, MenuState, SectionSpan, ACTIVE_LINK_COLOR,
};
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    let (Some(navbar), Some(hamburger), Some(nav_links)) = (
        document.get_element_by_id(NAVBAR_ID),
        document.get_element_by_id(HAMBURGER_ID),
        document.get_element_by_id(NAV_LINKS_ID),
    ) else {
        log::debug!("[navbar] navbar elements missing; navbar effects disabled");
        return;
    };
    let Some(window) = web::window() else {
        return;
    };

    // Scrolled state
    let navbar_scroll = navbar.clone();
    let wnd = window.clone();
    dom::add_listener(&window, "scroll", move || {
        let y = wnd.scroll_y().unwrap_or(0.0);
        _ = navbar_scroll
            .class_list()
            .toggle_with_force(SCROLLED_CLASS, is_scrolled(y));
    });

    wire_menu(&hamburger, &nav_links);
    wire_active_links(document, &window, &nav_links);
    log::info!("[navbar] wired");
}

fn wire_menu(hamburger: &web::Element, nav_links: &web::Element) {
    let menu = Rc::new(Cell::new(MenuState::default()));

    let (menu_t, burger_t, links_t) = (menu.clone(), hamburger.clone(), nav_links.clone());
    dom::add_listener(hamburger, "click", move || {
        let mut m = menu_t.get();
        let open = m.toggle();
        menu_t.set(m);
        show_menu(&burger_t, &links_t, open);
    });

    for link in dom::query_all(nav_links, NAV_LINK_SELECTOR) {
        let (menu_c, burger_c, links_c) = (menu.clone(), hamburger.clone(), nav_links.clone());
        dom::add_listener(&link, "click", move || {
            let mut m = menu_c.get();
            m.close();
            menu_c.set(m);
            show_menu(&burger_c, &links_c, false);
        });
    }
}

fn show_menu(hamburger: &web::Element, nav_links: &web::Element, open: bool) {
    _ = hamburger.class_list().toggle_with_force(MENU_ACTIVE_CLASS, open);
    _ = nav_links.class_list().toggle_with_force(MENU_OPEN_CLASS, open);
}

struct TrackedSection {
    section: web::HtmlElement,
    link: Option<web::HtmlElement>,
}

fn wire_active_links(document: &web::Document, window: &web::Window, nav_links: &web::Element) {
    let sections: Vec<TrackedSection> = dom::query_all_in_document(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let id = el.get_attribute("id")?;
            let link = nav_links
                .query_selector(&nav_link_selector(&id))
                .ok()
                .flatten()
                .and_then(|l| l.dyn_into::<web::HtmlElement>().ok());
            let section = el.dyn_into::<web::HtmlElement>().ok()?;
            Some(TrackedSection { section, link })
        })
        .collect();
    if sections.is_empty() {
        return;
    }

    let wnd = window.clone();
    dom::add_listener(window, "scroll", move || {
        let y = wnd.scroll_y().unwrap_or(0.0);
        // Layout can shift (images, fonts), so spans are measured on every scroll.
        let spans: SmallVec<[SectionSpan; 8]> = sections
            .iter()
            .map(|s| SectionSpan {
                top: s.section.offset_top() as f64,
                height: s.section.offset_height() as f64,
            })
            .collect();
        for (tracked, active) in sections.iter().zip(active_flags(y, &spans)) {
            if let Some(link) = &tracked.link {
                dom::set_style(link, "color", if active { ACTIVE_LINK_COLOR } else { "" });
            }
        }
    });
}

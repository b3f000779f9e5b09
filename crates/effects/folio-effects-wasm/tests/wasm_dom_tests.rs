#![cfg(target_arch = "wasm32")]
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, MouseEvent, MouseEventInit};

use folio_effects_wasm::{abi_version, vanish_opacity_at, SiteEffects};

const HOME: &str = include_str!("../../../../fixtures/pages/home.html");

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Replace the fixture container's content, leaving the runner's own output
/// elements alone.
fn mount(html: &str) -> Document {
    let doc = document();
    let root = match doc.get_element_by_id("fixture-root") {
        Some(root) => root,
        None => {
            let root = doc.create_element("div").unwrap();
            root.set_id("fixture-root");
            let body = doc.body().unwrap();
            body.insert_before(&root, body.first_child().as_ref()).unwrap();
            root
        }
    };
    root.set_inner_html(html);
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    doc
}

/// Mount `html` followed by a spacer tall enough to scroll well past the hero.
fn mount_tall(html: &str) -> Document {
    mount(&format!("{html}<div style=\"height: 4000px\"></div>"))
}

fn behaviors(effects: &SiteEffects) -> Vec<String> {
    effects
        .behaviors()
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

fn style(el: &HtmlElement, prop: &str) -> String {
    el.style().get_property_value(prop).unwrap()
}

fn scroll_to(y: f64) {
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, y);
}

fn fire_on_window(name: &str) {
    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new(name).unwrap()).unwrap();
}

fn el(doc: &Document, selector: &str) -> HtmlElement {
    doc.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

fn click_at(target: &Element, x: i32, y: i32) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

fn dispatch(target: &Element, name: &str) {
    let init = EventInit::new();
    init.set_bubbles(false);
    let event = Event::new_with_event_init_dict(name, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_on_empty_page() {
    mount("");
    let effects = SiteEffects::new(JsValue::UNDEFINED).unwrap();
    assert_eq!(behaviors(&effects), Vec::<String>::new());
    assert_eq!(effects.refresh().unwrap(), JsValue::UNDEFINED);
}

#[wasm_bindgen_test]
fn home_page_lists_every_element_bound_behavior() {
    mount(HOME);
    let names = behaviors(&SiteEffects::new(JsValue::NULL).unwrap());
    for expected in [
        "nav-toggle",
        "smooth-anchors",
        "reveal",
        "hover-glow",
        "parallax",
        "hero-vanish",
        "active-links",
        "lazy-images",
        "ripple",
    ] {
        assert!(names.contains(&expected.to_string()), "{expected} in {names:?}");
    }
    assert!(!names.contains(&"typewriter".to_string()));
}

#[wasm_bindgen_test]
fn typewriter_needs_its_target() {
    mount("<section id=\"plain\"></section>");
    let cfg = js_sys::JSON::parse(r#"{ "typewriter": { "enabled": true } }"#).unwrap();
    let names = behaviors(&SiteEffects::new(cfg).unwrap());
    assert!(!names.contains(&"typewriter".to_string()));
    assert!(names.contains(&"active-links".to_string()));
    assert!(!names.contains(&"hero-vanish".to_string()));
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    mount("");
    let cfg = js_sys::JSON::parse(r#"{ "timing": { "resize_debounce_ms": 0 } }"#).unwrap();
    assert!(SiteEffects::new(cfg).is_err());
}

#[wasm_bindgen_test]
fn hamburger_toggles_and_links_clear() {
    let doc = mount(HOME);
    let _effects = SiteEffects::new(JsValue::NULL).unwrap();
    let toggle = el(&doc, ".hamburger");
    let menu = el(&doc, ".nav-menu");

    toggle.click();
    assert!(has_class(&toggle, "active"));
    assert!(has_class(&menu, "active"));
    toggle.click();
    assert!(!has_class(&toggle, "active"));
    assert!(!has_class(&menu, "active"));

    // clearing works from either state
    let link = el(&doc, ".nav-menu a[href=\"#about\"]");
    link.click();
    assert!(!has_class(&menu, "active"));
    toggle.click();
    link.click();
    assert!(!has_class(&toggle, "active"));
    assert!(!has_class(&menu, "active"));
}

#[wasm_bindgen_test]
fn dangling_anchor_is_suppressed_without_scrolling() {
    let doc = mount(HOME);
    let _effects = SiteEffects::new(JsValue::NULL).unwrap();
    let window = web_sys::window().unwrap();
    let before = window.scroll_y().unwrap();
    let not_canceled = click_at(&el(&doc, "#cta-missing"), 5, 5);
    assert!(!not_canceled, "default navigation should be prevented");
    assert_eq!(window.scroll_y().unwrap(), before);
}

#[wasm_bindgen_test]
fn glow_follows_pointer() {
    let doc = mount(HOME);
    let _effects = SiteEffects::new(JsValue::NULL).unwrap();
    let button = el(&doc, ".btn-primary");
    dispatch(&button, "mouseenter");
    let shadow = button.style().get_property_value("box-shadow").unwrap();
    assert!(shadow.contains("30px"), "{shadow}");
    dispatch(&button, "mouseleave");
    let shadow = button.style().get_property_value("box-shadow").unwrap();
    assert!(shadow.contains("20px"), "{shadow}");
}

#[wasm_bindgen_test]
fn reveal_targets_start_hidden_with_stagger() {
    let doc = mount(HOME);
    let _effects = SiteEffects::new(JsValue::NULL).unwrap();
    let cards = doc
        .query_selector_all(".glass-card, .link-card, .project-card, .about-section")
        .unwrap();
    assert!(cards.length() >= 2);
    let second = cards.item(1).unwrap().dyn_into::<HtmlElement>().unwrap();
    let transition = second.style().get_property_value("transition").unwrap();
    assert!(transition.contains("0.1s"), "{transition}");
}

#[wasm_bindgen_test]
async fn ripples_are_removed_independently() {
    let doc = mount(HOME);
    let _effects = SiteEffects::new(JsValue::NULL).unwrap();
    let button = el(&doc, "#cta-projects");
    let rect = button.get_bounding_client_rect();
    let (x, y) = ((rect.left() + 10.0) as i32, (rect.top() + 10.0) as i32);

    click_at(&button, x, y);
    TimeoutFuture::new(300).await;
    click_at(&button, x, y);
    assert_eq!(button.query_selector_all(".ripple").unwrap().length(), 2);

    let first = button
        .query_selector(".ripple")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    let width = first.style().get_property_value("width").unwrap();
    assert_eq!(width, format!("{}px", rect.width().max(rect.height())));

    // first ripple expires at ~600ms, second at ~900ms
    TimeoutFuture::new(400).await;
    assert_eq!(button.query_selector_all(".ripple").unwrap().length(), 1);
    TimeoutFuture::new(400).await;
    assert_eq!(button.query_selector_all(".ripple").unwrap().length(), 0);
}

#[wasm_bindgen_test]
fn ripple_styles_injected_once() {
    mount(HOME);
    let _a = SiteEffects::new(JsValue::NULL).unwrap();
    let _b = SiteEffects::new(JsValue::NULL).unwrap();
    let head = document().head().unwrap();
    assert_eq!(
        head.query_selector_all("#folio-ripple-styles").unwrap().length(),
        1
    );
}

#[wasm_bindgen_test]
async fn lazy_image_swaps_source_once_visible() {
    let doc = mount(
        "<img id=\"lazy\" width=\"10\" height=\"10\" \
         data-src=\"data:image/gif;base64,R0lGODlhAQABAAAAACw=\">",
    );
    let _effects = SiteEffects::new(JsValue::NULL).unwrap();
    TimeoutFuture::new(250).await;
    let img = el(&doc, "#lazy");
    assert!(img.get_attribute("data-src").is_none());
    assert!(img.get_attribute("src").unwrap().starts_with("data:image/gif"));
}

#[wasm_bindgen_test]
fn section_in_range_marks_one_link() {
    let doc = mount(HOME);
    let effects = SiteEffects::new(JsValue::NULL).unwrap();
    let about = el(&doc, "#about");
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, about.offset_top() as f64 + 10.0);
    effects.refresh().unwrap();

    let links = doc.query_selector_all(".nav-menu a").unwrap();
    let mut active = Vec::new();
    for i in 0..links.length() {
        let link = links.item(i).unwrap().dyn_into::<Element>().unwrap();
        if has_class(&link, "active") {
            active.push(link.get_attribute("href").unwrap());
        }
    }
    assert_eq!(active, vec!["#about".to_string()]);
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn exported_opacity_matches_profiles() {
    assert_eq!(vanish_opacity_at(0.0, 1280.0), 1.0);
    assert_eq!(vanish_opacity_at(80.0, 390.0), 0.5);
    assert_eq!(vanish_opacity_at(500.0, 1280.0), 0.0);
}

#[wasm_bindgen_test]
fn partial_config_is_accepted() {
    mount(HOME);
    let cfg = js_sys::JSON::parse(r#"{ "ripple": { "lifetime_ms": 300 } }"#).unwrap();
    let names = behaviors(&SiteEffects::new(cfg).unwrap());
    assert!(names.contains(&"ripple".to_string()));
    assert!(names.contains(&"nav-toggle".to_string()));
}

#[wasm_bindgen_test]
async fn scroll_and_touch_burst_schedules_one_frame() {
    mount(HOME);
    let effects = SiteEffects::new(JsValue::NULL).unwrap();
    let window = web_sys::window().unwrap();
    for name in ["scroll", "touchmove", "scroll", "touchmove", "scroll"] {
        window.dispatch_event(&Event::new(name).unwrap()).unwrap();
    }
    assert!(effects.frame_pending());
    assert_eq!(effects.collapsed_events(), 4.0);

    TimeoutFuture::new(100).await;
    assert!(!effects.frame_pending());
}

#[wasm_bindgen_test]
fn page_without_toggle_skips_nav() {
    mount(include_str!("../../../../fixtures/pages/projects.html"));
    let names = behaviors(&SiteEffects::new(JsValue::NULL).unwrap());
    assert!(!names.contains(&"nav-toggle".to_string()));
    assert!(names.contains(&"smooth-anchors".to_string()));
}

#[wasm_bindgen_test]
fn hero_fades_out_past_the_end_and_resets_at_top() {
    let doc = mount_tall(HOME);
    let effects = SiteEffects::new(JsValue::NULL).unwrap();

    scroll_to(400.0);
    let phase = effects.refresh().unwrap();
    let name = js_sys::Reflect::get(&phase, &JsValue::from_str("phase")).unwrap();
    assert_eq!(name.as_string().as_deref(), Some("apply"));

    let image = el(&doc, ".profile-image");
    assert_eq!(style(&image, "opacity"), "0");
    assert_eq!(style(&image, "visibility"), "hidden");
    assert_eq!(style(&image, "pointer-events"), "none");
    assert_eq!(style(&image, "transform"), "scale(0.9)");
    assert!(has_class(&image, "scrolled"));
    for part in [".profile-glow", ".social-icons", ".hero-text", ".hero-buttons"] {
        let el = el(&doc, part);
        assert_eq!(style(&el, "opacity"), "0", "{part}");
        assert_eq!(style(&el, "visibility"), "hidden", "{part}");
    }
    assert_eq!(style(&el(&doc, ".social-icons"), "pointer-events"), "none");
    assert_eq!(style(&el(&doc, ".hero-buttons"), "pointer-events"), "none");
    assert!(!has_class(&el(&doc, ".hero-buttons"), "scrolled"));

    scroll_to(0.0);
    effects.refresh().unwrap();
    assert_eq!(style(&image, "opacity"), "1");
    assert_eq!(style(&image, "visibility"), "visible");
    assert_eq!(style(&image, "pointer-events"), "auto");
    assert_eq!(style(&image, "transform"), "scale(1)");
    assert!(!has_class(&image, "scrolled"));
    assert_eq!(style(&el(&doc, ".profile-glow"), "opacity"), "0.3");
    assert_eq!(style(&el(&doc, ".hero-buttons"), "pointer-events"), "auto");
}

#[wasm_bindgen_test]
fn scroll_moves_hero_by_half_the_offset() {
    let doc = mount_tall(HOME);
    let _effects = SiteEffects::new(JsValue::NULL).unwrap();
    scroll_to(120.0);
    fire_on_window("scroll");
    assert_eq!(style(&el(&doc, ".hero"), "transform"), "translateY(60px)");
    scroll_to(0.0);
}

#[wasm_bindgen_test]
async fn resize_burst_recomputes_once_after_quiet_window() {
    mount(HOME);
    let effects = SiteEffects::new(JsValue::NULL).unwrap();
    // let scroll events from earlier mounts settle
    TimeoutFuture::new(100).await;
    let before = effects.recomputations();

    for _ in 0..3 {
        fire_on_window("resize");
        TimeoutFuture::new(50).await;
    }
    assert_eq!(effects.recomputations(), before);

    TimeoutFuture::new(150).await;
    assert_eq!(effects.recomputations(), before);

    TimeoutFuture::new(150).await;
    assert_eq!(effects.recomputations(), before + 1.0);
}

#[wasm_bindgen_test]
async fn orientation_change_recomputes_after_delay() {
    mount(HOME);
    let effects = SiteEffects::new(JsValue::NULL).unwrap();
    TimeoutFuture::new(100).await;
    let before = effects.recomputations();

    fire_on_window("orientationchange");
    TimeoutFuture::new(40).await;
    assert_eq!(effects.recomputations(), before);
    TimeoutFuture::new(120).await;
    assert_eq!(effects.recomputations(), before + 1.0);
}

#[wasm_bindgen_test]
async fn dropped_effects_skip_pending_orientation_run() {
    let doc = mount(HOME);
    let effects = SiteEffects::new(JsValue::NULL).unwrap();
    TimeoutFuture::new(100).await;
    let image = el(&doc, ".profile-image");
    image.style().set_property("opacity", "0.77").unwrap();

    fire_on_window("orientationchange");
    drop(effects);
    TimeoutFuture::new(200).await;
    assert_eq!(style(&image, "opacity"), "0.77");
}

#[wasm_bindgen_test]
async fn lazy_image_is_unobserved_after_first_swap() {
    let doc = mount(
        "<img id=\"lazy\" width=\"10\" height=\"10\" \
         data-src=\"data:image/gif;base64,R0lGODlhAQABAAAAACw=\">",
    );
    let _effects = SiteEffects::new(JsValue::NULL).unwrap();
    TimeoutFuture::new(250).await;
    let img = el(&doc, "#lazy");
    assert!(img.get_attribute("data-src").is_none());

    // leave and re-enter the viewport with a fresh deferred source
    img.set_attribute("data-src", "data:image/gif;base64,R0lGODlhAgACAAAAACw=")
        .unwrap();
    img.style().set_property("display", "none").unwrap();
    TimeoutFuture::new(150).await;
    img.style().remove_property("display").unwrap();
    TimeoutFuture::new(250).await;
    assert!(img.get_attribute("data-src").is_some());
    assert!(img.get_attribute("src").unwrap().contains("R0lGODlhAQAB"));
}

#[wasm_bindgen_test]
async fn empty_deferred_source_is_left_alone() {
    let doc = mount("<img id=\"blank\" width=\"10\" height=\"10\" data-src=\"\">");
    let _effects = SiteEffects::new(JsValue::NULL).unwrap();
    TimeoutFuture::new(250).await;
    let img = el(&doc, "#blank");
    assert!(img.get_attribute("src").is_none());
    assert_eq!(img.get_attribute("data-src").as_deref(), Some(""));
}

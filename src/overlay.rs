use crate::constants::HUD_ID;
use crate::core::Stage;
use web_sys as web;

fn stage_name(stage: Stage) -> &'static str {
    match stage {
        Stage::Warmup => "Pre-launch",
        Stage::Launch => "Liftoff",
    }
}

/// Update the progress HUD with the rounded percentage and stage name.
/// A missing element is ignored.
pub fn update_hud(document: &web::Document, progress: f32, stage: Stage, scrolling: bool) {
    if let Some(el) = document.get_element_by_id(HUD_ID) {
        let pct = (progress * 100.0).round() as i32;
        let marker = if scrolling { " ↕" } else { "" };
        el.set_inner_html(&format!("{} • {}%{}", stage_name(stage), pct, marker));
    }
}

#[inline]
pub fn hide_hud(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HUD_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

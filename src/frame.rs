use crate::core::{
    map_progress, stage, ExperienceSettings, FlameUniforms, ParticleVisual, ScenePose,
    ScrollSignal, SmokeSystem, STAR_ROT_X_PER_SEC, STAR_ROT_Y_PER_SEC,
};
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame inputs handed to the renderer by value; the renderer owns all
/// GPU node lifetime, this struct is rebuilt every tick.
pub struct FrameInputs<'a> {
    pub pose: ScenePose,
    pub flame: FlameUniforms,
    pub smoke: &'a [ParticleVisual],
    pub star_rot: [f32; 2],
    pub sky_opacity: f32,
}

pub struct FrameContext<'a> {
    pub scroll: Rc<RefCell<ScrollSignal>>,
    pub smoke: SmokeSystem,
    pub settings: ExperienceSettings,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,

    pub epoch: Instant,
    pub last_instant: Instant,
    pub star_rot: [f32; 2],
    pub smoke_visuals: Vec<ParticleVisual>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed_sec = (now - self.epoch).as_secs_f64();

        let (progress, scrolling) = {
            let s = self.scroll.borrow();
            (s.progress(), s.is_actively_scrolling(elapsed_sec))
        };

        let pose = map_progress(progress);
        self.smoke.update_phase(progress);
        self.smoke.tick(dt_sec);
        self.smoke.visuals(&mut self.smoke_visuals);

        self.star_rot[0] += STAR_ROT_X_PER_SEC * dt_sec;
        self.star_rot[1] += STAR_ROT_Y_PER_SEC * dt_sec;

        let flame = FlameUniforms::update(
            elapsed_sec as f32,
            self.settings.flame_intensity,
            self.settings.flame_speed,
            self.settings.flame_noise_scale,
        );

        if self.settings.show_hud {
            overlay::update_hud(&self.document, progress, stage(progress), scrolling);
        }

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let inputs = FrameInputs {
                pose,
                flame,
                smoke: &self.smoke_visuals,
                star_rot: self.star_rot,
                sky_opacity: 1.0 - progress,
            };
            if let Err(e) = g.render(&inputs) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    settings: &ExperienceSettings,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, settings).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

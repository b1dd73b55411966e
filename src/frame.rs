use crate::constants::FRAME_LOG_INTERVAL_SEC;
use crate::core::{CardTransform, CarouselState};
use crate::overlay::Overlay;
use crate::render;
use crate::texture::CardTexture;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<CarouselState>>,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub overlay: Overlay,

    pub last_instant: Instant,
    pub frames_since_log: u32,
    pub secs_since_log: f32,
}

impl FrameContext {
    pub fn new(
        state: Rc<RefCell<CarouselState>>,
        gpu: Option<render::GpuState>,
        canvas: web::HtmlCanvasElement,
        overlay: Overlay,
    ) -> Self {
        Self {
            state,
            gpu,
            canvas,
            overlay,
            last_instant: Instant::now(),
            frames_since_log: 0,
            secs_since_log: 0.0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let (transforms, selected) = {
            let mut state = self.state.borrow_mut();
            state.step();
            let transforms: SmallVec<[CardTransform; 8]> = state.transforms().collect();
            (transforms, state.selected_index())
        };
        self.overlay.set_active(selected);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&transforms) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }

        self.frames_since_log += 1;
        self.secs_since_log += dt_sec;
        if self.secs_since_log >= FRAME_LOG_INTERVAL_SEC {
            let state = self.state.borrow();
            log::debug!(
                "[frame] {:.1} fps, track {:.2}, velocity {:.3}, dragging {}, settled {}",
                self.frames_since_log as f32 / self.secs_since_log,
                state.track_position(),
                state.velocity(),
                state.is_dragging(),
                state.is_settled()
            );
            drop(state);
            self.frames_since_log = 0;
            self.secs_since_log = 0.0;
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    textures: &[CardTexture],
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, textures).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Handle to a running requestAnimationFrame loop. Dropping it cancels the
/// pending frame and releases the frame context.
pub struct FrameLoop {
    pending: FrameSlot,
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let pending: FrameSlot = Rc::new(RefCell::new(None));
    schedule(Rc::new(RefCell::new(frame_ctx)), Rc::downgrade(&pending));
    FrameLoop { pending }
}

fn schedule(frame_ctx: Rc<RefCell<FrameContext>>, slot: Weak<RefCell<Option<AnimationFrame>>>) {
    let Some(pending) = slot.upgrade() else {
        return;
    };
    let handle = request_animation_frame(move |_| {
        frame_ctx.borrow_mut().frame();
        schedule(frame_ctx, slot);
    });
    *pending.borrow_mut() = Some(handle);
}

impl FrameLoop {
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

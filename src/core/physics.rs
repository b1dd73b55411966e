use glam::{EulerRot, Mat4, Quat, Vec3};

/// Horizontal distance between neighbouring cards in world units.
pub const CARD_SPACING: f32 = 5.0;

// Per-card transform shaping: cards further from center recede, shrink and fade.
pub const DEPTH_PER_UNIT: f32 = 0.4;
pub const BOB_FREQUENCY: f32 = 0.08;
pub const BOB_AMPLITUDE: f32 = 0.15;
pub const YAW_PER_UNIT: f32 = 0.06;
pub const PITCH_FREQUENCY: f32 = 0.04;
pub const PITCH_AMPLITUDE: f32 = 0.03;
pub const SCALE_FALLOFF: f32 = 0.06;
pub const SCALE_MIN: f32 = 0.8;
pub const OPACITY_FALLOFF: f32 = 0.2;
pub const OPACITY_MIN: f32 = 0.5;

/// Tunables for settling and dragging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub spacing: f32,
    /// Below this distance the track snaps onto its target.
    pub settle_epsilon: f32,
    /// Upper bound on the per-frame easing fraction.
    pub max_easing: f32,
    /// Easing fraction per unit of remaining distance.
    pub easing_gain: f32,
    /// Per-frame multiplicative velocity decay while dragging.
    pub drag_friction: f32,
    /// World units per pointer pixel.
    pub drag_sensitivity: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            spacing: CARD_SPACING,
            settle_epsilon: 0.01,
            max_easing: 0.15,
            easing_gain: 0.08,
            drag_friction: 0.92,
            drag_sensitivity: 0.008,
        }
    }
}

/// Last pointer sample seen while dragging.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub time_ms: f64,
}

/// Visual placement of one card, derived from its offset along the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub offset: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl CardTransform {
    pub fn from_offset(offset: f32) -> Self {
        let distance = offset.abs();
        Self {
            offset,
            position: Vec3::new(
                offset,
                (offset * BOB_FREQUENCY).sin() * BOB_AMPLITUDE,
                -distance * DEPTH_PER_UNIT,
            ),
            yaw: -offset * YAW_PER_UNIT,
            pitch: (offset * PITCH_FREQUENCY).sin() * PITCH_AMPLITUDE,
            scale: (1.0 - distance * SCALE_FALLOFF).max(SCALE_MIN),
            opacity: (1.0 - distance * OPACITY_FALLOFF).max(OPACITY_MIN),
        }
    }

    /// Translation * rotation (XYZ Euler: pitch, yaw, 0) * uniform scale.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0),
            self.position,
        )
    }
}

/// Scroll state shared between input handlers and the frame loop.
#[derive(Clone, Debug)]
pub struct CarouselState {
    params: PhysicsParams,
    card_count: usize,
    selected: usize,
    track_position: f32,
    velocity: f32,
    dragging: bool,
    last_sample: PointerSample,
}

impl CarouselState {
    pub fn new(card_count: usize, params: PhysicsParams) -> Self {
        Self {
            params,
            card_count,
            selected: 0,
            track_position: 0.0,
            velocity: 0.0,
            dragging: false,
            last_sample: PointerSample::default(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn track_position(&self) -> f32 {
        self.track_position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn target_position(&self) -> f32 {
        -(self.selected as f32) * self.params.spacing
    }

    /// True once the track sits exactly on the selected card and no drag is active.
    pub fn is_settled(&self) -> bool {
        !self.dragging && self.track_position == self.target_position()
    }

    #[inline]
    fn clamp_index(&self, index: i64) -> usize {
        let last = self.card_count.saturating_sub(1) as i64;
        index.clamp(0, last) as usize
    }

    /// Advance one display frame.
    pub fn step(&mut self) {
        if self.dragging {
            self.velocity *= self.params.drag_friction;
            self.track_position += self.velocity;
            return;
        }
        let target = self.target_position();
        let delta = target - self.track_position;
        let distance = delta.abs();
        if distance > self.params.settle_epsilon {
            let easing = (distance * self.params.easing_gain).min(self.params.max_easing);
            self.track_position += delta * easing;
            self.velocity = delta * easing;
        } else {
            self.track_position = target;
            self.velocity = 0.0;
        }
    }

    pub fn pointer_down(&mut self, x: f32, time_ms: f64) {
        self.dragging = true;
        self.last_sample = PointerSample { x, time_ms };
    }

    pub fn pointer_move(&mut self, x: f32, time_ms: f64) {
        if !self.dragging {
            return;
        }
        let delta_x = x - self.last_sample.x;
        let delta_time = time_ms - self.last_sample.time_ms;
        if delta_time > 0.0 {
            let sensitivity = self.params.drag_sensitivity;
            self.velocity = (delta_x / delta_time as f32) * sensitivity;
            self.track_position += delta_x * sensitivity;
        }
        self.last_sample = PointerSample { x, time_ms };
    }

    /// End a drag and snap the selection to the card nearest the track.
    ///
    /// Returns the new selection, or `None` when no drag was in progress.
    pub fn pointer_up(&mut self) -> Option<usize> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        self.selected = self.nearest_index();
        Some(self.selected)
    }

    /// Index of the card closest to center for the current track position.
    pub fn nearest_index(&self) -> usize {
        let nearest = (-self.track_position / self.params.spacing).round();
        self.clamp_index(nearest as i64)
    }

    pub fn select(&mut self, index: usize) -> usize {
        self.selected = self.clamp_index(index.min(i64::MAX as usize) as i64);
        self.selected
    }

    pub fn select_next(&mut self) -> usize {
        self.selected = self.clamp_index(self.selected as i64 + 1);
        self.selected
    }

    pub fn select_previous(&mut self) -> usize {
        self.selected = self.clamp_index(self.selected as i64 - 1);
        self.selected
    }

    pub fn card_offset(&self, index: usize) -> f32 {
        index as f32 * self.params.spacing + self.track_position
    }

    pub fn card_transform(&self, index: usize) -> CardTransform {
        CardTransform::from_offset(self.card_offset(index))
    }

    pub fn transforms(&self) -> impl Iterator<Item = CardTransform> + '_ {
        (0..self.card_count).map(|i| self.card_transform(i))
    }
}

/// Discrete navigation request from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    Previous,
    Next,
}

impl Nav {
    #[inline]
    pub fn from_key(key: &str) -> Option<Nav> {
        match key {
            "ArrowLeft" => Some(Nav::Previous),
            "ArrowRight" => Some(Nav::Next),
            _ => None,
        }
    }
}

impl CarouselState {
    /// Move the selection one card; the track eases there on later frames.
    pub fn navigate(&mut self, nav: Nav) -> usize {
        match nav {
            Nav::Previous => self.select_previous(),
            Nav::Next => self.select_next(),
        }
    }
}

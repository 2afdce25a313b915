//! Tag cloud state: labels on a sphere, rotated by pointer offset.

use super::sphere::{self, POINTER_SENSITIVITY};
use super::surface::{Surface, TextStyle};
use crate::domain::{Label, LabelSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Pointer position in surface pixels (origin at the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rotating pseudo-3D label cloud.
///
/// Labels are kept sorted by descending `z` so that [`draw`](Self::draw) paints
/// the back of the sphere first (painter's algorithm). Rotation is cumulative:
/// every [`step`](Self::step) turns the sphere a little further.
#[derive(Debug, Clone)]
pub struct TagCloud {
    specs: Vec<LabelSpec>,
    labels: Vec<Label>,
    width: f64,
    height: f64,
    radius: f64,
    pointer: Pointer,
    rng: StdRng,
}

impl TagCloud {
    /// Creates a cloud seeded from OS entropy.
    #[must_use]
    pub fn new(specs: Vec<LabelSpec>, width: f64, height: f64) -> Self {
        Self::with_rng(specs, width, height, StdRng::from_entropy())
    }

    /// Creates a cloud whose label placement is reproducible.
    #[must_use]
    pub fn with_seed(specs: Vec<LabelSpec>, width: f64, height: f64, seed: u64) -> Self {
        Self::with_rng(specs, width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(specs: Vec<LabelSpec>, width: f64, height: f64, rng: StdRng) -> Self {
        let mut cloud = Self {
            specs,
            labels: Vec::new(),
            width,
            height,
            radius: 0.0,
            pointer: Pointer::default(),
            rng,
        };
        cloud.initialize(width, height);
        cloud
    }

    /// Places every label at a fresh position on a sphere sized for the surface.
    ///
    /// Resets the pointer reference to the surface center. Previous positions
    /// and accumulated rotation are discarded.
    pub fn initialize(&mut self, width: f64, height: f64) {
        let _span = tracing::debug_span!("tag_cloud_initialize",
            label_count = self.specs.len(),
            width = width,
            height = height
        )
        .entered();

        self.width = width;
        self.height = height;
        self.radius = sphere::radius_for(width, height);
        self.pointer = Pointer::new(width / 2.0, height / 2.0);

        let count = self.specs.len();
        let radius = self.radius;
        let rng = &mut self.rng;
        self.labels = self
            .specs
            .iter()
            .map(|spec| Label::new(spec, sphere::sample_position(rng, count, radius)))
            .collect();
        self.sort_by_depth();

        tracing::debug!(radius = self.radius, "tag cloud initialized");
    }

    /// Re-initializes for a new surface size. Rotation state is not preserved.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.initialize(width, height);
    }

    /// Rotates the sphere one frame's worth for `pointer` and re-sorts by depth.
    pub fn step(&mut self, pointer: Pointer) {
        let angle_x = (pointer.y - self.height / 2.0) * POINTER_SENSITIVITY;
        let angle_y = (pointer.x - self.width / 2.0) * POINTER_SENSITIVITY;

        for label in &mut self.labels {
            let rotated = sphere::rotate_x(label.position, angle_x);
            label.position = sphere::rotate_y(rotated, angle_y);
        }
        self.sort_by_depth();
    }

    /// Steps using the last pointer given to [`set_pointer`](Self::set_pointer).
    pub fn advance(&mut self) {
        self.step(self.pointer);
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    /// Clears `surface` and paints every label, farthest first.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        for label in &self.labels {
            let depth = sphere::depth_style(label.position.z, self.radius);
            let style = TextStyle {
                color: label.color(),
                alpha: depth.alpha,
                font_size: depth.font_size,
            };
            surface.fill_text(
                label.text(),
                label.position.x + cx,
                label.position.y + cy,
                &style,
            );
        }
    }

    fn sort_by_depth(&mut self) {
        self.labels
            .sort_by(|a, b| b.position.z.total_cmp(&a.position.z));
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Label texts in configuration order, for the static fallback display.
    #[must_use]
    pub fn fallback_texts(specs: &[LabelSpec]) -> Vec<String> {
        specs.iter().map(|s| s.text.clone()).collect()
    }
}

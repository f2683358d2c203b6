use glam::Vec2;

/// Pointer position in normalized device coordinates, tracked across
/// frames.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    current: Option<Vec2>,
    previous: Option<Vec2>,
    velocity: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer event in client pixels for a `width x height`
    /// viewport. Y grows upward in NDC.
    pub fn move_client(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let x = client_x / width * 2.0 - 1.0;
        let y = -(client_y / height) * 2.0 + 1.0;
        self.move_to(Vec2::new(x, y));
    }

    pub fn move_to(&mut self, ndc: Vec2) {
        self.current = Some(ndc);
    }

    /// Back to "no pointer".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn position(&self) -> Option<Vec2> {
        self.current
    }

    /// Movement between the two most recent frames.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Close out a frame: the movement since the previous frame becomes the
    /// velocity. Returns `(position, velocity)` when a pointer is present.
    pub fn advance_frame(&mut self) -> Option<(Vec2, Vec2)> {
        let current = self.current?;
        self.velocity = current - self.previous.unwrap_or(current);
        self.previous = Some(current);
        Some((current, self.velocity))
    }
}

//! Per-frame input snapshot handed from the front end to the simulation.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    /// Ends the session from any state.
    pub quit: bool,
    /// Only acted on after game over.
    pub restart: bool,
}

impl FrameInput {
    /// Horizontal axis: −1 left, +1 right, 0 when neither or both are held.
    pub fn horizontal(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    /// Vertical axis in screen space: −1 up, +1 down.
    pub fn vertical(&self) -> f32 {
        (self.down as i8 - self.up as i8) as f32
    }
}

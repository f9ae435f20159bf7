use crate::renderer::Surface;

/// Anything the driver can move once per frame.
///
/// `Particle` is the only motion model today; new ones (acceleration,
/// drag) slot in here without touching the driver.
pub trait Mover {
    /// Advances one frame and pushes the new position to `surface`.
    fn advance(&mut self, surface: &mut dyn Surface);
}

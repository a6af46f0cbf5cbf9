/// Control events recognized by the simulation loop.
///
/// This is the loop driver's whole input alphabet; anything else coming off
/// the keyboard is a no-op. Mapping from raw key events lives in
/// [`crate::term`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// End the simulation.
    Terminate,

    /// Shorten the inter-tick delay by one step.
    SpeedUp,

    /// Lengthen the inter-tick delay by one step.
    SpeedDown,
}

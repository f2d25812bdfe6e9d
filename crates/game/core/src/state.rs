/// The guard's behavioral state.
///
/// Transitions are driven exclusively by ticking the guard's behavior tree.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GuardState {
    /// Walking the patrol route.
    #[default]
    Patrol,
    /// A target is visible; pursuing it.
    Detecting,
    /// Target lost; sweeping the last heading.
    Searching,
    /// Target fully detected. Terminal.
    Alert,
}

impl GuardState {
    /// `true` for the absorbing alert state.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Alert)
    }
}

//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. All call sites are additionally gated by
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit a summary line (N, inside count, estimate, elapsed) for every run.
    pub print_simulation_runs: bool,
    /// Emit UI interaction logs (slider moves, button presses).
    pub print_ui_interactions: bool,
    /// Log which classification pass (sequential or rayon) was chosen.
    pub print_classification_path: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_simulation_runs: true,
    print_ui_interactions: false,
    print_classification_path: false,
    print_state_serde: false,
    print_shutdown: false,
};

//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet even when compiled with `--features debug_assertions`.

pub struct DebugFlags {
    /// Emit UI interaction logs (button presses, dialog dismissals).
    pub print_ui_interactions: bool,
    /// Emit the evaluated results after every successful Analyze.
    pub print_evaluations: bool,
    /// Emit report rendering details (paragraph count, logo size).
    pub print_report_details: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_evaluations: false,
    print_report_details: false,
    print_shutdown: false,
};

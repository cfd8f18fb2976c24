//! Phase-completion side effects.
//!
//! Fire-and-forget: a terminal bell plus a desktop notification. The
//! session machine never calls into here; the presentation shell does,
//! once per phase-complete signal and only while the sound cue is
//! enabled. Failures are ignored so the timer keeps working on systems
//! without a notification daemon.

use std::io::Write;

use notify_rust::Notification;

use crate::timer::Mode;

/// Announce a phase transition.
pub fn phase_complete(mode: Mode) {
    ring_bell();

    let (summary, body) = match mode {
        Mode::Break => ("Work phase complete", "Time for a break."),
        Mode::Work => ("Break over", "Back to work."),
        Mode::Completed => ("All sessions complete", "Great work today!"),
    };

    let _ = Notification::new()
        .summary(summary)
        .body(body)
        .appname("pomo")
        .icon("alarm-clock")
        .show();
}

/// Ring the terminal bell.
fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}

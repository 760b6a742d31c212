use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use glossa_core::ViewController;
use glossa_types::{AppEvent, Direction, SurfacePoint};
use kanal::AsyncReceiver;
use slint::{ComponentHandle, Timer, TimerMode};

mod dialogs;
mod events;
mod state;

use self::events::handle_events;
use self::state::UiState;

slint::include_modules!();

/// Quiet period before a resize triggers a re-render
const RESIZE_SETTLE: Duration = Duration::from_millis(150);

/// Run the reader window on the current thread until it closes.
///
/// The controller stays on this thread; everything it emits comes back
/// through `app_to_ui_rx` and is applied by a local task.
pub fn run(
    controller: ViewController,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    open_on_start: bool,
) -> anyhow::Result<()> {
    let window = ReaderWindow::new()?;
    let controller = Rc::new(RefCell::new(controller));
    let state = Rc::new(UiState::new());

    {
        let controller = controller.clone();
        window.on_open_requested(move || {
            let path = dialogs::pick_pdf();
            // Failures come back as OpenFailed
            let _ = controller.borrow_mut().open_file(path.as_deref());
        });
    }

    {
        let controller = controller.clone();
        window.on_previous_requested(move || {
            controller.borrow_mut().navigate(Direction::Previous);
        });
    }

    {
        let controller = controller.clone();
        window.on_next_requested(move || {
            controller.borrow_mut().navigate(Direction::Next);
        });
    }

    {
        let controller = controller.clone();
        window.on_page_clicked(move |x, y| {
            let point = SurfacePoint::new(x, y);
            match controller.borrow().click(point) {
                Some(word) => tracing::debug!("[SLINT] Clicked '{}'", word.text),
                None => tracing::trace!("[SLINT] Click at ({}, {}) hit nothing", x, y),
            }
        });
    }

    // Re-render once resizing settles
    let resize_timer = Rc::new(Timer::default());
    {
        let controller = controller.clone();
        let resize_timer = resize_timer.clone();
        window.on_resized(move || {
            let controller = controller.clone();
            resize_timer.start(TimerMode::SingleShot, RESIZE_SETTLE, move || {
                controller.borrow_mut().refresh();
            });
        });
    }

    // Drain display events on the UI thread
    {
        let window_weak = window.as_weak();
        let state = state.clone();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                if !handle_events(event, &window_weak, &state) {
                    break;
                }
            }
            tracing::debug!("[SLINT] Display channel closed");
        })?;
    }

    window.show()?;

    if open_on_start {
        // Let the window map before the picker takes focus
        let window_weak = window.as_weak();
        Timer::single_shot(Duration::ZERO, move || {
            if let Some(w) = window_weak.upgrade() {
                w.invoke_open_requested();
            }
        });
    }

    slint::run_event_loop()?;
    window.hide().ok();

    Ok(())
}

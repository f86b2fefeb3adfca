//! TUI rendering and terminal management (impure shell)

mod controls;
mod help;
pub mod layout;
mod slide;
mod styles;

pub use controls::{play_pause_label, NAVIGATION_HINT};
pub use help::render_help_overlay;
pub use layout::{control_layout, split_screen, ScreenAreas};
pub use slide::{truncate_to_width, EMPTY_MESSAGE};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, Item, KeyAction};
use crate::source::ItemSource;
use crate::state::{AppState, Carousel, FocusRegion, InputEvent, PointerPos};
use crate::view_state::{ControlHit, ControlLayout, ResizeDebouncer};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Longest the event loop sleeps when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(e) => AppError::Terminal(e),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    item_source: ItemSource,
    resize: ResizeDebouncer,
    /// Control rects from the last render (for mouse hit-testing)
    controls: ControlLayout,
    /// Control under the pointer when the button went down
    pressed: Option<ControlHit>,
    cell_width_px: u32,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, mouse capture and
    /// focus reporting
    pub fn new(
        items: Vec<Item>,
        item_source: ItemSource,
        config: &ResolvedConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(event::EnableMouseCapture)?;
        stdout.execute(event::EnableFocusChange)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            items,
            item_source,
            config,
            Instant::now(),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C).
    /// The poll timeout is the nearest pending deadline (autoplay tick or
    /// debounced resize), so an idle paused carousel does not spin.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            let mut dirty = false;

            if event::poll(timeout)? {
                let now = Instant::now();
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, now) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse, now);
                        dirty = true;
                    }
                    Event::FocusLost => {
                        self.handle_focus_lost(now);
                        dirty = true;
                    }
                    Event::Resize(width, _height) => {
                        self.handle_resize(width, now);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.poll_timers(Instant::now()) {
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal.
    ///
    /// The carousel is mounted at the terminal's current width.
    pub fn with_terminal(
        terminal: Terminal<B>,
        items: Vec<Item>,
        item_source: ItemSource,
        config: &ResolvedConfig,
        now: Instant,
    ) -> Self {
        let columns = match terminal.size() {
            Ok(size) if size.width > 0 => size.width,
            _ => 80,
        };
        let cell_width_px = config.cell_width_px.max(1);
        let carousel = Carousel::new(
            items,
            u32::from(columns) * cell_width_px,
            config.carousel_settings(),
            now,
        );
        info!(
            items = carousel.items().len(),
            pages = carousel.page_count(),
            visible = carousel.visible_count(),
            "carousel mounted"
        );

        Self {
            terminal,
            app_state: AppState::new(carousel),
            key_bindings: KeyBindings::default(),
            item_source,
            resize: ResizeDebouncer::new(Duration::from_millis(config.resize_debounce_ms)),
            controls: ControlLayout::default(),
            pressed: None,
            cell_width_px,
        }
    }

    /// Application state (read-only).
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Stop the carousel. No autoplay tick is processed afterwards.
    pub fn shutdown(&mut self) {
        self.app_state.carousel_mut().unmount();
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        let carousel = self.app_state.carousel();
        [carousel.next_deadline(), self.resize.deadline()]
            .into_iter()
            .flatten()
            .min()
            .map(|deadline| deadline.saturating_duration_since(now).min(IDLE_POLL))
            .unwrap_or(IDLE_POLL)
    }

    /// Fire due timers. Returns true if anything visible changed.
    fn poll_timers(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(width_px) = self.resize.poll(now) {
            let outcome = self.app_state.carousel_mut().set_viewport_width(width_px, now);
            debug!(width_px, ?outcome, "resize applied");
            changed = true;
        }

        let outcome = self.app_state.carousel_mut().tick(now);
        changed || outcome.is_change()
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help overlay swallows everything but its own toggle and quit
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::CycleFocus => {
                self.app_state.cycle_focus();
                debug!(focus = ?self.app_state.focus(), "focus moved");
            }
            KeyAction::Reload => self.reload_items(now),
            KeyAction::Previous
            | KeyAction::Next
            | KeyAction::TogglePlay
            | KeyAction::First
            | KeyAction::Last => {
                let outcome = self
                    .app_state
                    .carousel_mut()
                    .handle(InputEvent::Key(action), now);
                debug!(?action, ?outcome, "key handled");
            }
        }
        false
    }

    /// Re-read the item file. A failed reload keeps the current list.
    fn reload_items(&mut self, now: Instant) {
        if !self.item_source.is_reloadable() {
            debug!("reload requested for built-in items; nothing to do");
            return;
        }
        match self.item_source.load() {
            Ok(items) => {
                let outcome = self.app_state.carousel_mut().set_items(items, now);
                info!(?outcome, "items reloaded");
            }
            Err(e) => warn!(error = %e, "reload failed, keeping current items"),
        }
    }

    fn pointer_pos(&self, column: u16, row: u16) -> PointerPos {
        let cell = i64::from(self.cell_width_px);
        // terminal cells are roughly twice as tall as they are wide
        PointerPos::new(i64::from(column) * cell, i64::from(row) * cell * 2)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let (column, row) = (mouse.column, mouse.row);
        let inside = self.controls.in_region(column, row);
        let pos = self.pointer_pos(column, row);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.app_state.carousel_mut().set_hovered(inside, now);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.app_state.carousel_mut().set_hovered(inside, now);
                if inside {
                    self.app_state.set_focus(FocusRegion::Carousel);
                    self.app_state.carousel_mut().pointer_down(pos, now);
                    self.pressed = self.controls.hit(column, row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let swipe = self.app_state.carousel_mut().pointer_up(pos, now);
                let pressed = self.pressed.take();
                // A click is press and release on the same control without a swipe
                if !swipe.is_change() {
                    let released_on = self.controls.hit(column, row);
                    if let Some(hit) = pressed.filter(|hit| released_on == Some(*hit)) {
                        let outcome = self
                            .app_state
                            .carousel_mut()
                            .handle(InputEvent::Control(hit), now);
                        debug!(?hit, ?outcome, "control clicked");
                    }
                }
                self.app_state.carousel_mut().set_hovered(inside, now);
            }
            _ => {}
        }
    }

    /// The terminal lost focus, so no further mouse events will arrive.
    fn handle_focus_lost(&mut self, now: Instant) {
        self.pressed = None;
        self.app_state.carousel_mut().pointer_lost(now);
        debug!("terminal focus lost, hover cleared");
    }

    fn handle_resize(&mut self, columns: u16, now: Instant) {
        let columns = if columns > 0 { columns } else { 80 };
        let width_px = u32::from(columns) * self.cell_width_px;
        debug!(columns, width_px, "resize queued");
        self.resize.push(width_px, now);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let app_state = &self.app_state;
        let mut controls = ControlLayout::default();
        self.terminal.draw(|frame| {
            controls = render_frame(frame, app_state);
        })?;
        self.controls = controls;
        Ok(())
    }
}

/// Render the whole screen and return where the controls were placed.
pub fn render_frame(frame: &mut Frame, state: &AppState) -> ControlLayout {
    let carousel = state.carousel();
    let areas = split_screen(frame.area());
    let controls = control_layout(&areas, carousel.page_count());
    let carousel_focused = state.focus() == FocusRegion::Carousel;

    controls::render_header(frame, areas.header, !carousel_focused);
    controls::render_progress(frame, areas.progress, carousel);
    slide::render_slide(frame, areas.slide, carousel, carousel_focused);
    controls::render_controls(frame, &controls, carousel);
    controls::render_status(frame, areas.status, &controls, carousel);
    controls::render_footer(frame, areas.footer);

    if state.help_visible {
        render_help_overlay(frame);
    }

    controls
}

/// Run the TUI over `items` until the user quits, restoring the terminal
/// afterwards even if the loop failed.
pub fn run_app(
    items: Vec<Item>,
    item_source: ItemSource,
    config: &ResolvedConfig,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(items, item_source, config)?;

    let result = app.run();
    app.shutdown();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, focus reporting and mouse capture, then leaves the
/// alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(event::DisableFocusChange)?;
    io::stdout().execute(event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;

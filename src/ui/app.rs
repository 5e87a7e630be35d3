//! Main TUI application state and logic

use crate::trace::{Snapshot, Tracer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Operations,
    State,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Operations => FocusedPane::State,
            FocusedPane::State => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Operations,
        }
    }
}

/// The main application state
pub struct App {
    /// Name of the demo being replayed
    pub demo_name: String,

    /// Recorded operation snapshots, in execution order
    pub snapshots: Vec<Snapshot>,

    /// The demo's full captured output
    pub output: Vec<String>,

    /// Index of the current snapshot
    pub step: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub ops_scroll: usize,
    pub state_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app replaying `tracer`'s recording of `demo_name`
    pub fn new(demo_name: &str, tracer: &Tracer) -> Self {
        App {
            demo_name: demo_name.to_string(),
            snapshots: tracer.snapshots().to_vec(),
            output: tracer.output().to_vec(),
            step: 0,
            focused_pane: FocusedPane::Operations,
            ops_scroll: 0,
            state_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= Duration::from_millis(400) {
                    if self.step + 1 < self.snapshots.len() {
                        self.step += 1;
                        self.status_message = "Playing...".to_string();
                        self.output_scroll = usize::MAX;
                    } else {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// The snapshot currently being displayed
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.step)
    }

    /// Output lines visible at the current step
    pub fn visible_output(&self) -> &[String] {
        let watermark = self
            .current_snapshot()
            .map(|snap| snap.output_len.min(self.output.len()))
            .unwrap_or(self.output.len());
        &self.output[..watermark]
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Layout: panes above, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: operations. Right column: state over output.
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        super::panes::render_operations_pane(
            frame,
            columns[0],
            &self.snapshots,
            self.step,
            self.focused_pane == FocusedPane::Operations,
            &mut self.ops_scroll,
        );

        super::panes::render_state_pane(
            frame,
            right_rows[0],
            self.snapshots.get(self.step),
            self.focused_pane == FocusedPane::State,
            &mut self.state_scroll,
        );

        let visible: Vec<String> = self.visible_output().to_vec();
        super::panes::render_output_pane(
            frame,
            right_rows[1],
            &visible,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.demo_name,
            &self.status_message,
            self.step,
            self.snapshots.len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let before = self.step;
                self.step = (self.step + n).min(self.snapshots.len().saturating_sub(1));
                self.status_message = format!("Stepped forward {} step(s)", self.step - before);
                self.output_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Operations => {
                    self.ops_scroll = self.ops_scroll.saturating_sub(1);
                }
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Operations => {
                    self.ops_scroll = self.ops_scroll.saturating_add(1);
                }
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_millis(400))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to the last operation
                self.is_playing = false;
                if !self.snapshots.is_empty() {
                    self.step = self.snapshots.len() - 1;
                }
                self.status_message = "Jumped to end".to_string();
                self.output_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                // Jump back to the first operation
                self.is_playing = false;
                self.step = 0;
                self.status_message = "Jumped to start".to_string();
                self.output_scroll = 0;
            }
            _ => {}
        }
    }

    /// Step forward one operation
    fn step_forward(&mut self) {
        if self.step + 1 < self.snapshots.len() {
            self.step += 1;
            self.status_message = "Stepped forward".to_string();
            // Auto-scroll output to bottom
            self.output_scroll = usize::MAX;
        } else {
            self.status_message = "Already at the last operation".to_string();
        }
    }

    /// Step backward one operation
    fn step_backward(&mut self) {
        if self.step > 0 {
            self.step -= 1;
            self.status_message = "Stepped backward".to_string();
            self.output_scroll = usize::MAX;
        } else {
            self.status_message = "Already at the first operation".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_app() -> App {
        let mut tracer = Tracer::new();
        tracer.line("one");
        tracer.snapshot("op 1", vec!["s1".to_string()]);
        tracer.line("two");
        tracer.snapshot("op 2", vec!["s2".to_string()]);
        App::new("sample", &tracer)
    }

    #[test]
    fn test_visible_output_follows_watermark() {
        let mut app = sample_app();
        assert_eq!(app.visible_output(), ["one".to_string()]);

        app.step_forward();
        assert_eq!(app.visible_output().len(), 2);
    }

    #[test]
    fn test_stepping_clamps_at_both_ends() {
        let mut app = sample_app();
        app.step_backward();
        assert_eq!(app.step, 0);

        app.step_forward();
        app.step_forward();
        assert_eq!(app.step, 1);
    }
}

use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use super::pacer::TickPacer;
use crate::game::{Direction, GameConfig, GameEngine, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive play in the terminal
pub struct HumanMode {
    config: GameConfig,
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    pacer: TickPacer,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|msg| anyhow!("Invalid configuration: {}", msg))?;

        let mut engine = GameEngine::from_config(&config).context("Failed to create game")?;
        let start = config.start_position();
        engine
            .start(start.x, start.y)
            .context("Failed to start the first round")?;

        Ok(Self {
            pacer: TickPacer::new(config.update_interval),
            config,
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_direction: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            "playing on a {}x{} board",
            self.config.grid_width, self.config.grid_height
        );

        let result = self.run_game_loop(&mut terminal).await;

        // Restore the terminal even when the loop failed
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session ended after {} rounds, {} lost",
            self.metrics.round, self.metrics.losses
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(Duration::from_millis(self.config.frame_millis));

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                _ = frame_timer.tick() => {
                    self.on_frame()?;
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    self.pending_direction = Some(direction);
                }
                KeyAction::Restart => {
                    if !self.engine.is_started() {
                        self.restart()?;
                    }
                }
                KeyAction::Quit => {
                    info!("quit requested");
                    self.should_quit = true;
                }
                KeyAction::Ignore => {}
            }
        }

        Ok(())
    }

    /// One driver frame: apply input, then tick if the pacer says so
    fn on_frame(&mut self) -> Result<()> {
        if !self.engine.is_started() {
            return Ok(());
        }

        if let Some(direction) = self.pending_direction.take() {
            if self.engine.set_direction(direction)? {
                self.pacer.hasten();
            }
        }

        if !self.pacer.advance() {
            return Ok(());
        }

        if let TickOutcome::GameOver(collision) = self.engine.update()? {
            info!("round {} lost: {:?}", self.metrics.round, collision);
            self.metrics.on_game_over();

            if self.config.auto_restart {
                self.restart()?;
            }
        }

        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        let start = self.config.start_position();
        self.engine.start(start.x, start.y)?;
        self.pacer.reset();
        self.pending_direction = None;
        self.metrics.on_round_start();
        info!("round {} started", self.metrics.round);
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

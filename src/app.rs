use tracing::{debug, info, trace_span};

use crate::config::SimConfig;
use crate::core::{Clock, FrameCounter, Mover, Particle, RandomSource, Ticker};
use crate::renderer::Surface;
use crate::ui;

/// ループの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// What a finished run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames presented over the whole run.
    pub frames: u64,
    /// Every published frames-per-second sample, oldest first.
    pub fps_samples: Vec<u64>,
}

/// Owns the surface and a fixed set of movers, and drives them frame by
/// frame until the run duration is up.
pub struct App<S: Surface> {
    config: SimConfig,
    surface: S,
    movers: Box<[Box<dyn Mover>]>,
    state: RunState,
}

impl<S: Surface> App<S> {
    /// Spawns `config.num_particles` particles on `surface`.
    pub fn new(config: SimConfig, mut surface: S, rng: &mut dyn RandomSource) -> Self {
        let bounds = config.canvas.bounds();
        let movers: Box<[Box<dyn Mover>]> = (0..config.num_particles)
            .map(|_| {
                let particle = Particle::spawn(bounds, config.style, &mut *rng, &mut surface);
                Box::new(particle) as Box<dyn Mover>
            })
            .collect();

        Self::with_movers(config, surface, movers)
    }

    /// Uses movers built elsewhere; their visuals must already live on
    /// `surface`.
    pub fn with_movers(config: SimConfig, surface: S, movers: Box<[Box<dyn Mover>]>) -> Self {
        Self {
            config,
            surface,
            movers,
            state: RunState::Running,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Runs until the run-duration ticker fires.
    ///
    /// Each iteration advances every mover, presents a frame, then reads
    /// the clock once and polls both tickers. A sample that is due is
    /// published first. A stop that comes due together with a sample waits
    /// exactly one more frame, then takes effect whatever the sample ticker
    /// does.
    pub fn run(&mut self, clock: &dyn Clock) -> RunSummary {
        let start = clock.now();
        let mut sample_tick = Ticker::new(self.config.sample_period, start);
        let mut stop_tick = Ticker::new(self.config.run_duration, start);
        let mut counter = FrameCounter::default();
        let mut summary = RunSummary::default();
        let mut stop_pending = false;

        self.state = RunState::Running;
        info!(
            particles = self.movers.len(),
            run_secs = self.config.run_duration.as_secs_f64(),
            "simulation running"
        );

        while self.state == RunState::Running {
            {
                let _span = trace_span!("advance_all").entered();
                for mover in self.movers.iter_mut() {
                    mover.advance(&mut self.surface);
                }
            }
            {
                let _span = trace_span!("present").entered();
                self.surface.frame();
            }
            counter.tick();
            summary.frames += 1;

            let now = clock.now();
            let sampled = sample_tick.poll(now);
            if sampled {
                let fps = counter.sample();
                self.surface.set_heading_text(&ui::fps_text(fps));
                summary.fps_samples.push(fps);
                debug!(fps, "frame rate sampled");
            }
            if stop_pending {
                self.state = RunState::Stopped;
            } else if stop_tick.poll(now) {
                // サンプルと重なったら次のフレームで止める
                if sampled {
                    stop_pending = true;
                } else {
                    self.state = RunState::Stopped;
                }
            }
        }

        info!(frames = summary.frames, "simulation stopped");
        summary
    }
}

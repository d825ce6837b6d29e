use galaxy_engine::{
    DrawList, FrameClock, Galaxy, GalaxyConfig, InputEvent, InputQueue, TaskRecord,
};

/// Host-agnostic frame driver.
///
/// Owns the galaxy plus everything a refresh needs: queued input, the frame
/// clock and the reusable draw list. DOM glue lives in `host`; this type
/// never touches the browser, so it runs in native tests.
pub struct GalaxyRunner {
    galaxy: Galaxy,
    input: InputQueue,
    clock: FrameClock,
    draw_list: DrawList,
}

impl GalaxyRunner {
    pub fn new(config: GalaxyConfig, width: f32, height: f32, seed: u64) -> Self {
        let clock = FrameClock::new(config.tick_seconds, config.max_ticks_per_frame);
        Self {
            galaxy: Galaxy::new(config, width, height, seed),
            input: InputQueue::new(),
            clock,
            draw_list: DrawList::new(),
        }
    }

    /// Seed the background. Call once after construction.
    pub fn init(&mut self) {
        self.galaxy.initialize();
    }

    /// Queue a host notification for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one refresh: apply queued input, simulate the ticks the clock
    /// grants, then rebuild the draw list.
    ///
    /// `timestamp_ms` is the scheduler's monotonic frame time; `now_ms` is
    /// wall-clock time for star twinkle. Returns `None` once shut down.
    pub fn frame(&mut self, timestamp_ms: f64, now_ms: f64) -> Option<&DrawList> {
        if !self.galaxy.is_running() {
            return None;
        }

        self.galaxy.apply_input(&mut self.input);

        let ticks = self.clock.advance(timestamp_ms);
        self.galaxy.frame(ticks, &mut self.draw_list, now_ms);
        Some(&self.draw_list)
    }

    // ---- Task-store API ----

    pub fn sync(&mut self, tasks: &[TaskRecord]) {
        self.galaxy.sync(tasks);
    }

    pub fn add_task_visual(&mut self) {
        self.galaxy.add_task_visual();
    }

    pub fn complete_task_visual(&mut self) {
        self.galaxy.complete_task_visual();
    }

    /// Stop the galaxy and drop anything still queued.
    pub fn shutdown(&mut self) {
        self.galaxy.shutdown();
        self.input.clear();
        self.clock.reset();
    }

    pub fn is_running(&self) -> bool {
        self.galaxy.is_running()
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_engine::{DrawCommand, ThemeName};

    fn runner() -> GalaxyRunner {
        let mut r = GalaxyRunner::new(GalaxyConfig::default(), 800.0, 600.0, 7);
        r.init();
        r
    }

    #[test]
    fn frame_before_init_draws_nothing() {
        let mut r = GalaxyRunner::new(GalaxyConfig::default(), 800.0, 600.0, 7);
        assert!(r.frame(0.0, 0.0).is_none());
    }

    #[test]
    fn frame_applies_queued_input_first() {
        let mut r = runner();
        r.push_input(InputEvent::Resize { width: 320.0, height: 240.0 });
        r.push_input(InputEvent::Theme(ThemeName::Light));
        let list = r.frame(0.0, 0.0).unwrap();
        assert!(matches!(
            list.commands()[0],
            DrawCommand::Clear { width, height } if width == 320.0 && height == 240.0
        ));
        assert_eq!(r.galaxy().theme_name(), ThemeName::Light);
    }

    #[test]
    fn burst_fades_over_frames() {
        let mut r = runner();
        r.add_task_visual();
        r.complete_task_visual();
        assert_eq!(r.galaxy().particle_count(), 12);

        // ~1 s of 60 Hz refreshes is more than 50 ticks.
        let mut t = 0.0;
        for _ in 0..60 {
            r.frame(t, t);
            t += 1000.0 / 60.0;
        }
        assert_eq!(r.galaxy().particle_count(), 0);
    }

    #[test]
    fn task_calls_reach_the_galaxy() {
        let mut r = runner();
        r.sync(&[TaskRecord::new(false), TaskRecord::new(true)]);
        r.add_task_visual();
        assert_eq!(r.galaxy().orb_count(), 2);
        assert_eq!(r.galaxy().star_count(), 51);
    }

    #[test]
    fn shutdown_stops_frames() {
        let mut r = runner();
        r.push_input(InputEvent::PointerMove { x: 1.0, y: 1.0 });
        r.shutdown();
        assert!(!r.is_running());
        assert!(r.frame(16.0, 16.0).is_none());
    }
}

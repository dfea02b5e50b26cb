use std::time::{Duration, Instant};
use winit::window::Window;

/// Session clock plus the fps readout in the window title.
pub struct FrameTiming {
    start: Instant,
    elapsed: Duration,
    last_frame_time: Option<Instant>,
    last_fps_time: Instant,
    frame_count: u32,
    pub frame_dt: f32,
    render_ms: f32,
    base_title: String,
}

impl FrameTiming {
    pub fn new(base_title: String) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            elapsed: Duration::ZERO,
            last_frame_time: None,
            last_fps_time: now,
            frame_count: 0,
            frame_dt: 1.0 / 60.0,
            render_ms: 0.0,
            base_title,
        }
    }

    /// Time since the viewer started, as of the last [`FrameTiming::update`].
    /// Never decreases.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Session time at `now`, for events arriving between frames. Never
    /// earlier than the last frame.
    pub fn session_time(&self, now: Instant) -> Duration {
        self.elapsed.max(now.saturating_duration_since(self.start))
    }

    pub fn set_render_ms(&mut self, render_ms: f32) {
        self.render_ms = render_ms;
    }

    pub fn update(&mut self, window: Option<&Window>, now: Instant) {
        let dt_duration = if let Some(last) = self.last_frame_time {
            now.saturating_duration_since(last)
        } else {
            Duration::from_millis(16)
        };
        self.last_frame_time = Some(now);
        self.frame_dt = dt_duration.as_secs_f32().max(0.0);
        self.elapsed = self.session_time(now);

        self.frame_count = self.frame_count.saturating_add(1);
        let fps_window = now.saturating_duration_since(self.last_fps_time);
        if fps_window.as_secs_f32() >= 0.5 {
            let fps = self.frame_count as f32 / fps_window.as_secs_f32();
            if let Some(window) = window {
                window.set_title(&format!(
                    "{} - {:.1} fps (render {:.2} ms)",
                    self.base_title, fps, self.render_ms
                ));
            }
            self.frame_count = 0;
            self.last_fps_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_tracks_frames_and_never_goes_back() {
        let mut timing = FrameTiming::new("test".to_string());
        let start = timing.start;
        timing.update(None, start + Duration::from_millis(100));
        assert_eq!(timing.elapsed(), Duration::from_millis(100));
        assert!((timing.frame_dt - 0.016).abs() < 1e-6);

        timing.update(None, start + Duration::from_millis(120));
        assert!((timing.frame_dt - 0.020).abs() < 1e-6);

        timing.update(None, start + Duration::from_millis(50));
        assert_eq!(timing.elapsed(), Duration::from_millis(120));
        assert_eq!(timing.frame_dt, 0.0);
    }

    #[test]
    fn session_time_is_exact_between_frames() {
        let mut timing = FrameTiming::new("test".to_string());
        let start = timing.start;
        timing.update(None, start + Duration::from_millis(100));

        let click = timing.session_time(start + Duration::from_millis(110));
        assert_eq!(click, Duration::from_millis(110));
        assert_eq!(timing.elapsed(), Duration::from_millis(100));
        assert_eq!(
            timing.session_time(start + Duration::from_millis(40)),
            Duration::from_millis(100)
        );

        timing.update(None, start + Duration::from_millis(116));
        assert!(timing.elapsed() >= click);
    }
}

//! Per-frame animation driver
//!
//! Each driver owns a time cursor that advances by `0.01 * speed` per tick
//! and turns the current [`BlobConfig`] into a [`BlobFrame`]. Drivers are
//! started fresh (time 0) and stopping is idempotent; a stopped driver
//! ignores ticks.

use super::config::BlobConfig;
use super::gradient::{self, GradientKind};
use super::outline::{self, CurveDescription};

/// Time added per tick at speed 1
pub const BASE_TIME_STEP: f32 = 0.01;

/// Monotonic animation clock owned by one driver
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeCursor(f32);

impl TimeCursor {
    pub fn value(&self) -> f32 {
        self.0
    }

    fn advance(&mut self, speed: f32) {
        self.0 += BASE_TIME_STEP * speed;
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct BlobFrame {
    pub curve: CurveDescription,
    pub gradient: GradientKind,
    pub time: f32,
    /// Edge of the square box the curve was generated in
    pub size: f32,
}

impl BlobFrame {
    /// Build the frame for `config` at `time`
    pub fn at(config: &BlobConfig, time: f32) -> Self {
        let curve = outline::generate(config.center(), &config.shape(), time);
        let gradient = if config.rotates_gradient() {
            GradientKind::Linear {
                angle_degrees: gradient::animated_angle(
                    config.gradient_angle,
                    time,
                    config.gradient_speed,
                    config.gradient_direction,
                ),
            }
        } else {
            config.gradient_kind()
        };

        Self {
            curve,
            gradient,
            time,
            size: config.size,
        }
    }
}

/// Frame loop state for one mounted blob
#[derive(Debug, Clone, Default)]
pub struct AnimationDriver {
    time: TimeCursor,
    running: bool,
    ticks: u64,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fresh time cursor; no-op when already running
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.time = TimeCursor::default();
        self.ticks = 0;
        self.running = true;
    }

    /// Stop ticking; safe to call repeatedly
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn time(&self) -> f32 {
        self.time.value()
    }

    /// Ticks processed since the last start
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one frame and render it; `None` when stopped
    pub fn tick(&mut self, config: &BlobConfig) -> Option<BlobFrame> {
        if !self.running {
            return None;
        }
        self.time.advance(config.speed);
        self.ticks += 1;
        Some(self.frame(config))
    }

    /// Render the current time without advancing
    pub fn frame(&self, config: &BlobConfig) -> BlobFrame {
        BlobFrame::at(config, self.time.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::gradient::{GradientDirection, GradientType};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn tick_advances_by_speed() {
        let config = BlobConfig::default().speed(2.0);
        let mut driver = AnimationDriver::new();
        driver.start();
        for _ in 0..10 {
            driver.tick(&config);
        }
        assert!(approx(driver.time(), 0.2), "time {}", driver.time());
        assert_eq!(driver.ticks(), 10);
    }

    #[test]
    fn stopped_driver_ignores_ticks() {
        let config = BlobConfig::default();
        let mut driver = AnimationDriver::new();
        assert!(driver.tick(&config).is_none(), "never started");

        driver.start();
        driver.tick(&config);
        let before = driver.time();
        driver.stop();
        driver.stop();
        assert!(driver.tick(&config).is_none());
        assert_eq!(driver.time(), before);
    }

    #[test]
    fn restart_begins_at_zero() {
        let config = BlobConfig::default();
        let mut driver = AnimationDriver::new();
        driver.start();
        for _ in 0..50 {
            driver.tick(&config);
        }
        driver.stop();
        driver.start();
        assert_eq!(driver.time(), 0.0);
        assert_eq!(driver.ticks(), 0);
    }

    #[test]
    fn start_while_running_keeps_time() {
        let config = BlobConfig::default();
        let mut driver = AnimationDriver::new();
        driver.start();
        driver.tick(&config);
        driver.start();
        assert!(driver.time() > 0.0);
    }

    #[test]
    fn frozen_circle_stays_static() {
        let config = BlobConfig::default().speed(0.0).intensity(0.0);
        let mut driver = AnimationDriver::new();
        driver.start();
        let first = driver.tick(&config).map(|f| f.curve);
        for _ in 0..20 {
            driver.tick(&config);
        }
        let later = driver.tick(&config).map(|f| f.curve);
        assert_eq!(first, later);
    }

    #[test]
    fn config_changes_apply_next_tick() {
        let mut config = BlobConfig::default();
        let mut driver = AnimationDriver::new();
        driver.start();
        let small = driver.tick(&config).map(|f| f.curve.samples.len());
        config.vertices = 48;
        let large = driver.tick(&config).map(|f| f.curve.samples.len());
        assert_eq!(small, Some(25));
        assert_eq!(large, Some(49));
    }

    mod gradient_rotation {
        use super::*;

        #[test]
        fn clockwise_adds_thirty_degrees_after_one_unit() {
            let config = BlobConfig::default()
                .gradient_angle(45.0)
                .animate_gradient(true)
                .gradient_speed(1.0);
            let frame = BlobFrame::at(&config, 1.0);
            match frame.gradient {
                GradientKind::Linear { angle_degrees } => assert!(approx(angle_degrees, 75.0)),
                GradientKind::Radial => panic!("expected a linear gradient"),
            }
        }

        #[test]
        fn hundred_ticks_at_speed_one_is_one_unit() {
            let config = BlobConfig::default()
                .gradient_angle(0.0)
                .animate_gradient(true)
                .gradient_direction(GradientDirection::CounterClockwise);
            let mut driver = AnimationDriver::new();
            driver.start();
            let mut last = None;
            for _ in 0..100 {
                last = driver.tick(&config);
            }
            match last.map(|f| f.gradient) {
                Some(GradientKind::Linear { angle_degrees }) => {
                    assert!(approx(angle_degrees, -30.0), "angle {}", angle_degrees)
                }
                other => panic!("unexpected gradient {:?}", other),
            }
        }

        #[test]
        fn static_gradient_keeps_base_angle() {
            let config = BlobConfig::default().gradient_angle(120.0);
            let frame = BlobFrame::at(&config, 5.0);
            assert_eq!(frame.gradient, GradientKind::Linear { angle_degrees: 120.0 });
        }

        #[test]
        fn radial_is_not_rotated() {
            let config = BlobConfig::default()
                .gradient_type(GradientType::Radial)
                .animate_gradient(true);
            assert_eq!(BlobFrame::at(&config, 3.0).gradient, GradientKind::Radial);
        }
    }
}

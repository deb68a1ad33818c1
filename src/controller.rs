use chrono::{DateTime, Local};
use eframe::egui;

use crate::countdown::{Countdown, Tick, TimerSnapshot};
use crate::exercises::locate_step;
use crate::models::Exercise;

pub const DEFAULT_MINUTES: u32 = 5;
pub const PRESET_MINUTES: [u32; 5] = [1, 2, 5, 10, 15];

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum DisplayMode {
    Timer,
    Exercises,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Status {
    Idle,
    Preset(u32),
    Running,
    Paused,
    Complete,
    Exercise(usize),
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Shortcut {
    ToggleRunning,
    Reset,
}

pub fn shortcut_for(key: egui::Key) -> Option<Shortcut> {
    match key {
        egui::Key::Space => Some(Shortcut::ToggleRunning),
        egui::Key::Escape => Some(Shortcut::Reset),
        _ => None,
    }
}

/// Step label and progress shown while an exercise runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExerciseProgress {
    pub exercise: usize,
    pub step: usize,
    pub fraction: f32,
}

pub struct Controller {
    catalog: Vec<Exercise>,
    countdown: Countdown,
    status: Status,
    progress: Option<ExerciseProgress>,
    pub display_mode: DisplayMode,
}

impl Controller {
    pub fn new(catalog: Vec<Exercise>) -> Self {
        Controller {
            catalog,
            countdown: Countdown::new(DEFAULT_MINUTES * 60),
            status: Status::Idle,
            progress: None,
            display_mode: DisplayMode::Timer,
        }
    }

    pub fn catalog(&self) -> &[Exercise] {
        &self.catalog
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.countdown.snapshot()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_text(&self) -> String {
        match self.status {
            Status::Idle => "Choose a timer or exercise".to_string(),
            Status::Preset(minutes) => format!("{} minute pause", minutes),
            Status::Running => "Running...".to_string(),
            Status::Paused => "Paused".to_string(),
            Status::Complete => "Time's up! 🎉".to_string(),
            Status::Exercise(index) => self
                .catalog
                .get(index)
                .map(|e| e.name.clone())
                .unwrap_or_default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn can_start(&self) -> bool {
        !self.countdown.is_running()
    }

    pub fn can_stop(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn exercise_progress(&self) -> Option<ExerciseProgress> {
        self.progress
    }

    pub fn exercise_prompt(&self) -> Option<&str> {
        let progress = self.progress?;
        self.catalog.get(progress.exercise)?.step(progress.step)
    }

    pub fn select_preset(&mut self, minutes: u32) {
        log::info!("Preset selected: {} min", minutes);
        self.countdown.load(minutes * 60, None);
        self.progress = None;
        self.status = Status::Preset(minutes);
    }

    pub fn start(&mut self, now: DateTime<Local>) {
        if !self.countdown.start(now) {
            return;
        }
        let snapshot = self.countdown.snapshot();
        log::info!("Countdown started at {}s of {}s", snapshot.remaining, snapshot.total);
        self.status = match self.countdown.active_exercise() {
            Some(index) => Status::Exercise(index),
            None => Status::Running,
        };
    }

    pub fn stop(&mut self) {
        if self.countdown.stop() {
            log::info!("Countdown paused at {}s", self.countdown.snapshot().remaining);
            self.status = Status::Paused;
        }
    }

    pub fn toggle(&mut self, now: DateTime<Local>) {
        if self.countdown.is_running() {
            self.stop();
        } else {
            self.start(now);
        }
    }

    pub fn reset(&mut self) {
        log::info!("Countdown reset");
        self.countdown.reset();
        self.progress = None;
        self.status = Status::Idle;
    }

    pub fn start_exercise(&mut self, index: usize, now: DateTime<Local>) {
        let Some(exercise) = self.catalog.get(index) else {
            log::warn!("No exercise at index {}", index);
            return;
        };
        log::info!("Starting exercise '{}'", exercise.name);
        self.countdown.load(exercise.total_seconds(), Some(index));
        self.progress = Some(ExerciseProgress {
            exercise: index,
            step: 0,
            fraction: 0.0,
        });
        self.display_mode = DisplayMode::Timer;
        self.start(now);
    }

    pub fn apply_shortcut(&mut self, shortcut: Shortcut, now: DateTime<Local>) {
        match shortcut {
            Shortcut::ToggleRunning => self.toggle(now),
            Shortcut::Reset => self.reset(),
        }
    }

    pub fn poll(&mut self, now: DateTime<Local>) {
        match self.countdown.poll(now) {
            Some(Tick::Counted { remaining }) => {
                log::debug!("Tick: {}s left", remaining);
                if self.countdown.active_exercise().is_some() {
                    self.update_exercise_step();
                }
            }
            Some(Tick::Finished) => {
                log::info!("Countdown finished");
                self.progress = None;
                self.status = Status::Complete;
            }
            None => {}
        }
    }

    pub fn until_next_tick(&self, now: DateTime<Local>) -> Option<std::time::Duration> {
        self.countdown.until_next_tick(now)
    }

    fn update_exercise_step(&mut self) {
        let Some(progress) = self.progress.as_mut() else {
            return;
        };
        let Some(exercise) = self.catalog.get(progress.exercise) else {
            return;
        };
        let position = locate_step(&exercise.durations, self.countdown.elapsed());
        if position.index != progress.step {
            progress.step = position.index;
            log::debug!("'{}' step {}", exercise.name, position.index);
        }
        progress.fraction = position.fraction;
    }
}

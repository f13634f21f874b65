//! Gallery mode: walks through every time-of-day and weather combination,
//! saves a screenshot of each, and exits.

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use simulation::selection::{SelectionRequest, TimeOfDay, WeatherKind, WeatherSelection};

pub const GALLERY_ENV_VAR: &str = "SKYCAST_SCREENSHOTS";

/// Frames to wait for the first render before the first shot.
const WARMUP_FRAMES: u32 = 120;
/// Frames per shot; the capture happens `CAPTURE_AT` frames after selecting
/// so the effects have animated for a moment.
const FRAMES_PER_SHOT: u32 = 30;
const CAPTURE_AT: u32 = 20;
/// Frames left for the last screenshot to hit disk.
const EXIT_GRACE: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryStep {
    Wait,
    Select(WeatherSelection),
    Capture(String),
    Exit,
}

#[derive(Resource, Debug)]
pub struct GalleryQueue {
    frame: u32,
    shots: Vec<WeatherSelection>,
}

impl GalleryQueue {
    pub fn new(shots: Vec<WeatherSelection>) -> Self {
        Self { frame: 0, shots }
    }

    pub fn all_selections() -> Self {
        let shots = TimeOfDay::ALL
            .into_iter()
            .flat_map(|time| {
                WeatherKind::ALL
                    .into_iter()
                    .map(move |weather| WeatherSelection::new(time, weather))
            })
            .collect();
        Self::new(shots)
    }

    /// Advance one frame and say what to do on it.
    pub fn step(&mut self) -> GalleryStep {
        self.frame += 1;
        if self.frame < WARMUP_FRAMES {
            return GalleryStep::Wait;
        }

        let since = self.frame - WARMUP_FRAMES;
        let idx = (since / FRAMES_PER_SHOT) as usize;
        let Some(selection) = self.shots.get(idx) else {
            let finished = self.shots.len() as u32 * FRAMES_PER_SHOT + EXIT_GRACE;
            return if since >= finished {
                GalleryStep::Exit
            } else {
                GalleryStep::Wait
            };
        };

        match since % FRAMES_PER_SHOT {
            0 => GalleryStep::Select(*selection),
            CAPTURE_AT => GalleryStep::Capture(shot_name(selection)),
            _ => GalleryStep::Wait,
        }
    }
}

pub fn shot_name(selection: &WeatherSelection) -> String {
    format!(
        "{}_{}",
        selection.time_of_day.label().to_lowercase(),
        selection.weather.label().to_lowercase()
    )
}

pub fn drive_gallery(
    mut commands: Commands,
    mut queue: ResMut<GalleryQueue>,
    mut requests: EventWriter<SelectionRequest>,
    mut exit: EventWriter<AppExit>,
) {
    match queue.step() {
        GalleryStep::Wait => {}
        GalleryStep::Select(selection) => {
            requests.send(SelectionRequest::TimeOfDay(selection.time_of_day));
            requests.send(SelectionRequest::Weather(selection.weather));
        }
        GalleryStep::Capture(name) => {
            let path = std::env::temp_dir().join(format!("skycast_{name}.png"));
            info!("Saving screenshot {}", path.display());
            commands
                .spawn(Screenshot::primary_window())
                .observe(save_to_disk(path));
        }
        GalleryStep::Exit => {
            exit.send(AppExit::Success);
        }
    }
}

// Facade Pattern: one home-theater object hides the start-up and shut-down
// sequence of three subsystems.

use crate::console::Console;

// ============================================================================
// Subsystems
// ============================================================================

#[derive(Debug, Default)]
pub struct DvdPlayer {
    on: bool,
    playing: Option<String>,
}

impl DvdPlayer {
    pub fn on(&mut self) -> String {
        self.on = true;
        "DVD Player is ON".to_string()
    }

    pub fn play(&mut self, movie: &str) -> String {
        self.playing = Some(movie.to_string());
        format!("Playing movie: {}", movie)
    }

    pub fn off(&mut self) -> String {
        self.on = false;
        self.playing = None;
        "DVD Player is OFF".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn now_playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct Projector {
    on: bool,
    input: Option<String>,
}

impl Projector {
    pub fn on(&mut self) -> String {
        self.on = true;
        "Projector is ON".to_string()
    }

    pub fn set_input(&mut self, input: &str) -> String {
        self.input = Some(input.to_string());
        format!("Projector input set to: {}", input)
    }

    pub fn off(&mut self) -> String {
        self.on = false;
        "Projector is OFF".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct SoundSystem {
    on: bool,
    volume: u8,
}

impl SoundSystem {
    pub fn on(&mut self) -> String {
        self.on = true;
        "Sound System is ON".to_string()
    }

    pub fn set_volume(&mut self, volume: u8) -> String {
        self.volume = volume;
        format!("Sound System volume set to: {}", volume)
    }

    pub fn off(&mut self) -> String {
        self.on = false;
        "Sound System is OFF".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }
}

// ============================================================================
// Facade
// ============================================================================

pub struct HomeTheaterFacade {
    dvd_player: DvdPlayer,
    projector: Projector,
    sound_system: SoundSystem,
}

impl HomeTheaterFacade {
    pub const MOVIE_VOLUME: u8 = 50;

    pub fn new(dvd_player: DvdPlayer, projector: Projector, sound_system: SoundSystem) -> Self {
        Self {
            dvd_player,
            projector,
            sound_system,
        }
    }

    pub fn watch_movie(&mut self, movie: &str) -> Vec<String> {
        vec![
            "Setting up the home theater to watch a movie...".to_string(),
            self.projector.on(),
            self.projector.set_input("DVD"),
            self.sound_system.on(),
            self.sound_system.set_volume(Self::MOVIE_VOLUME),
            self.dvd_player.on(),
            self.dvd_player.play(movie),
        ]
    }

    pub fn end_movie(&mut self) -> Vec<String> {
        vec![
            "Shutting down the home theater...".to_string(),
            self.dvd_player.off(),
            self.projector.off(),
            self.sound_system.off(),
        ]
    }

    pub fn dvd_player(&self) -> &DvdPlayer {
        &self.dvd_player
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn sound_system(&self) -> &SoundSystem {
        &self.sound_system
    }
}

impl Default for HomeTheaterFacade {
    fn default() -> Self {
        Self::new(DvdPlayer::default(), Projector::default(), SoundSystem::default())
    }
}

pub fn demo(console: &mut Console) {
    let mut home_theater = HomeTheaterFacade::default();
    console.lines(home_theater.watch_movie("Inception"));
    console.lines(home_theater.end_movie());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_movie_powers_everything() {
        let mut theater = HomeTheaterFacade::default();
        let lines = theater.watch_movie("Inception");

        assert_eq!(lines.len(), 7);
        assert_eq!(lines.last().unwrap(), "Playing movie: Inception");
        assert!(theater.projector().is_on());
        assert_eq!(theater.projector().input(), Some("DVD"));
        assert!(theater.sound_system().is_on());
        assert_eq!(theater.sound_system().volume(), 50);
        assert_eq!(theater.dvd_player().now_playing(), Some("Inception"));
    }

    #[test]
    fn test_end_movie_powers_down() {
        let mut theater = HomeTheaterFacade::default();
        theater.watch_movie("Inception");
        let lines = theater.end_movie();

        assert_eq!(
            lines,
            vec![
                "Shutting down the home theater...",
                "DVD Player is OFF",
                "Projector is OFF",
                "Sound System is OFF",
            ]
        );
        assert!(!theater.dvd_player().is_on());
        assert!(!theater.projector().is_on());
        assert!(!theater.sound_system().is_on());
        assert_eq!(theater.dvd_player().now_playing(), None);
    }

    #[test]
    fn test_demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console);
        assert_eq!(console.transcript().len(), 11);
        assert_eq!(console.transcript()[1], "Projector is ON");
    }
}

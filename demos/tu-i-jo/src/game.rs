use lyric_engine::{Game, GameData, GameEvent, LineKind};

/// "Tu i Jo": each revealed lyric line narrows down who "tu" and "jo" are.
pub struct TuIJo {
    plays: u32,
    hints: usize,
}

impl TuIJo {
    pub fn new() -> Self {
        Self { plays: 0, hints: 0 }
    }
}

// The engine's default config already carries this game's Catalan end
// messages and data path, so `config()` is not overridden.
impl Game for TuIJo {
    fn init(&mut self, data: &GameData) {
        self.hints = data.lyrics.iter().filter(|l| l.kind() == LineKind::Hint).count();
        log::info!(
            "TuIJo: {} names, {} lines ({} hints)",
            data.names.len(),
            data.line_count(),
            self.hints
        );
    }

    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Reset { .. } => {
                self.plays += 1;
                log::info!("TuIJo: play #{}", self.plays);
            }
            GameEvent::Ended(end) => {
                log::info!("TuIJo: play #{} ended, solved: {}", self.plays, end.solved);
            }
            _ => {}
        }
    }
}

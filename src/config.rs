//! Board and fleet constants plus per-session settings.

/// Side length of the square board.
pub const BOARD_SIZE: i32 = 10;

/// Fixed fleet composition, placed in this order (largest first so the
/// cramped placements happen while the board is still open).
pub const FLEET_SIZES: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

pub const NUM_SHIPS: usize = FLEET_SIZES.len();

/// Random draws `auto_place` spends per ship before giving up on the whole
/// fleet.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Every Nth call, a Hard strategy with intel enabled fires at a known ship
/// cell instead of reasoning from observed outcomes. This is a deliberate
/// difficulty knob, not an inference step; see `HardStrategy::with_intel`
/// for the per-instance toggle.
pub const INTEL_SHOT_INTERVAL: u32 = 5;

/// Opponent difficulty tier, selected at strategy construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Whether a session pits a player against the computer or two players
/// sharing one machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    SinglePlayer,
    Hotseat,
}

/// Plain configuration carried by a session. The core only reads
/// `difficulty` and `mode`; the rest is passed through for the presentation
/// layer.
#[derive(Debug, Clone)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub dark_theme: bool,
    pub placement_hints: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            difficulty: Difficulty::Medium,
            mode: GameMode::SinglePlayer,
            dark_theme: false,
            placement_hints: true,
        }
    }
}

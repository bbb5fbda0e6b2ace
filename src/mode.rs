/// what is displayed, and how.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisplayMode {
    /// memory, users, and cpu, redrawn in place.
    AllStats,
    /// memory, users, and cpu, one iteration after another.
    NormalSequential,
    /// users, redrawn in place.
    UserOnly,
    /// users, one iteration after another.
    UserSequential,
    /// memory and cpu, redrawn in place.
    SystemOnly,
    /// memory and cpu, one iteration after another.
    SystemSequential,
}

/// how iterations are laid out on the terminal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Discipline {
    /// the cursor is moved back after each iteration, and the next one is drawn over it.
    Live,
    /// each iteration is appended below the last. nothing is erased.
    Sequential,
}

/// which blocks are drawn in each iteration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Blocks {
    pub memory: bool,
    pub users: bool,
    pub cpu: bool,
}

// === impl DisplayMode ===

impl DisplayMode {
    /// selects a mode from the `--user`, `--system`, and `--sequential` flags.
    ///
    /// asking for both users and system is the same as asking for neither.
    pub fn select(user: bool, system: bool, sequential: bool) -> Self {
        use DisplayMode::*;

        match (user, system, sequential) {
            (true, true, true) | (false, false, true) => NormalSequential,
            (true, true, false) | (false, false, false) => AllStats,
            (true, false, true) => UserSequential,
            (false, true, true) => SystemSequential,
            (true, false, false) => UserOnly,
            (false, true, false) => SystemOnly,
        }
    }

    pub fn discipline(self) -> Discipline {
        use DisplayMode::*;

        match self {
            AllStats | UserOnly | SystemOnly => Discipline::Live,
            NormalSequential | UserSequential | SystemSequential => Discipline::Sequential,
        }
    }

    /// returns whether the screen is cleared before the first iteration.
    ///
    /// the system-only log is written below whatever the terminal already shows.
    pub fn clears_screen(self) -> bool {
        self != DisplayMode::SystemSequential
    }

    pub fn blocks(self) -> Blocks {
        use DisplayMode::*;

        let (memory, users, cpu) = match self {
            AllStats | NormalSequential => (true, true, true),
            UserOnly | UserSequential => (false, true, false),
            SystemOnly | SystemSequential => (true, false, true),
        };

        Blocks { memory, users, cpu }
    }
}

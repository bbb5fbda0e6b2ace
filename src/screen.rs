use {
    crate::{
        RunConfig,
        host::{Identity, Memory, MemoryUsage, Session},
    },
    crossterm::{
        QueueableCommand, cursor,
        terminal::{self, ClearType},
    },
    std::io::{self, Write},
};

/// the number of rows drawn by [`Screen::header()`].
pub const HEADER_ROWS: usize = 3;

/// draws blocks of text onto a terminal.
pub struct Screen<W> {
    out: W,
}

// === impl Screen ===

impl<W: Write> Screen<W> {
    /// the separator between blocks.
    const RULE: &str = "--------------------------------------------------";

    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// clears the screen, and moves the cursor to the top-left corner.
    pub fn clear(&mut self) -> io::Result<()> {
        self.out
            .queue(terminal::Clear(ClearType::All))?
            .queue(cursor::MoveTo(0, 0))
            .map(drop)
    }

    /// moves the cursor to the start of the given row, and erases everything below it.
    pub fn rewind(&mut self, row: usize) -> io::Result<()> {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        self.out
            .queue(cursor::MoveTo(0, row))?
            .queue(terminal::Clear(ClearType::FromCursorDown))
            .map(drop)
    }

    pub fn header(&mut self, config: &RunConfig, max_rss: i64) -> io::Result<()> {
        let RunConfig { samples, interval } = config;
        let secs = interval.as_secs();

        writeln!(self.out, "Nbr of samples: {samples} -- every {secs} secs")?;
        self.resident(max_rss)?;
        self.rule()
    }

    /// marks the start of an iteration in a sequential log.
    pub fn iteration(&mut self, i: u32, max_rss: i64) -> io::Result<()> {
        writeln!(self.out, ">>> iteration {i}")?;
        self.resident(max_rss)
    }

    pub fn memory_title(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "### Memory ### (Phys.Used/Tot -- Virtual Used/Tot)"
        )
    }

    /// draws `rows` rows, where the row at index `at` holds the memory line and the rest are
    /// blank.
    pub fn memory(&mut self, memory: &Memory, at: usize, rows: usize) -> io::Result<()> {
        let MemoryUsage {
            phys_used,
            phys_total,
            virt_used,
            virt_total,
        } = memory.usage();

        for row in 0..rows {
            if row == at {
                writeln!(
                    self.out,
                    "{phys_used:.2} GB / {phys_total:.2} GB -- {virt_used:.2} GB / {virt_total:.2} GB"
                )?;
            } else {
                writeln!(self.out)?;
            }
        }

        Ok(())
    }

    pub fn users(&mut self, sessions: &[Session]) -> io::Result<()> {
        self.rule()?;
        writeln!(self.out, "### Sessions/Users ###")?;
        for Session { user, line, host } in sessions {
            writeln!(self.out, " {user} {line:>15} ({host})")?;
        }
        self.rule()
    }

    pub fn cpu(&mut self, cores: u64, usage: f64) -> io::Result<()> {
        writeln!(self.out, "Number of cores: {cores}")?;
        writeln!(self.out, " total cpu use = {usage:.2}%")
    }

    pub fn identity(&mut self, identity: &Identity) -> io::Result<()> {
        let Identity {
            system_name,
            machine_name,
            version,
            release,
            architecture,
        } = identity;

        self.rule()?;
        writeln!(self.out, "### System Information ###")?;
        writeln!(self.out, " System Name = {system_name}")?;
        writeln!(self.out, " Machine Name = {machine_name}")?;
        writeln!(self.out, " Version = {version}")?;
        writeln!(self.out, " Release = {release}")?;
        writeln!(self.out, " Architecture = {architecture}")?;
        self.rule()
    }

    /// draws a separating rule.
    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", Self::RULE)
    }

    fn resident(&mut self, max_rss: i64) -> io::Result<()> {
        writeln!(self.out, " Memory Usage {max_rss} kb")
    }
}

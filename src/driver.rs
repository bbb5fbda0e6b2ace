use {
    crate::{
        App, Error, RunConfig,
        host::Host,
        mode::{Blocks, Discipline, DisplayMode},
        screen::{HEADER_ROWS, Screen},
        sentinel::Sentinel,
        source::{Pause, StatsSource},
    },
    std::io::Write,
};

#[cfg(test)]
mod tests;

impl<S, H, P> App<S, H, P>
where
    S: StatsSource,
    H: Host,
    P: Pause,
{
    /// runs the monitor, drawing each iteration to `out`.
    ///
    /// a failure to sample cpu time aborts the run. nothing of the failed iteration is drawn.
    pub fn run(&mut self, out: impl Write) -> Result<(), Error> {
        let mut screen = Screen::new(out);
        log::info!(
            "taking {} samples every {:?} in {:?} mode",
            self.config.samples,
            self.config.interval,
            self.mode,
        );

        if self.mode.clears_screen() {
            screen.clear()?;
        }
        let drawn = match self.mode.discipline() {
            Discipline::Live => self.live(&mut screen),
            Discipline::Sequential => self.sequential(&mut screen),
        };
        if let Err(error) = drawn {
            log::error!("monitor aborted: {error}");
            screen.flush()?;
            return Err(error);
        }

        screen.identity(&self.host.identity()?)?;
        screen.flush()?;

        Ok(())
    }

    /// draws each iteration over the last.
    fn live<W: Write>(&mut self, screen: &mut Screen<W>) -> Result<(), Error> {
        let RunConfig { samples, interval } = self.config;
        let blocks = self.mode.blocks();

        screen.header(&self.config, self.host.max_rss()?)?;
        if blocks.memory {
            screen.memory_title()?;
        }

        let mut rewind = None;
        for i in 0..samples {
            let usage = self.sample(blocks)?;
            // the previous iteration stays on screen until this sample is read.
            if let Some(row) = rewind.take() {
                screen.rewind(row)?;
            }

            if blocks.memory {
                let rows = (samples - i) as usize;
                screen.memory(&self.host.memory()?, 0, rows)?;
            }
            self.draw_common(screen, blocks, usage)?;
            screen.flush()?;

            self.pause.sleep(interval);
            rewind = Some(Self::anchor(blocks, i));
        }

        Ok(())
    }

    /// draws each iteration below the last.
    fn sequential<W: Write>(&mut self, screen: &mut Screen<W>) -> Result<(), Error> {
        let RunConfig { samples, interval } = self.config;
        let blocks = self.mode.blocks();

        for i in 0..samples {
            let usage = self.sample(blocks)?;

            screen.iteration(i, self.host.max_rss()?)?;
            if blocks.memory {
                screen.rule()?;
                screen.memory_title()?;
                screen.memory(&self.host.memory()?, i as usize, samples as usize)?;
            }
            self.draw_common(screen, blocks, usage)?;
            screen.flush()?;

            self.pause.sleep(interval);
        }

        Ok(())
    }

    /// draws the user and cpu blocks, which look the same in either discipline.
    fn draw_common<W: Write>(
        &self,
        screen: &mut Screen<W>,
        blocks: Blocks,
        usage: Option<f64>,
    ) -> Result<(), Error> {
        if blocks.users {
            screen.users(&self.host.sessions()?)?;
        }
        if let Some(usage) = usage {
            screen.cpu(self.host.cores()?, usage)?;
        }

        Ok(())
    }

    /// samples cpu time, if the cpu block is drawn.
    fn sample(&mut self, blocks: Blocks) -> Result<Option<f64>, Error> {
        if !blocks.cpu {
            return Ok(None);
        }

        let usage = self.sentinel.observe()?;
        log::debug!("estimated cpu usage: {usage:.2}%");

        Ok(Some(usage))
    }

    /// returns the row that iteration `i` of a live display is redrawn from.
    ///
    /// this is the row just below iteration `i`'s memory line, or the row below the header when
    /// no memory is drawn.
    fn anchor(blocks: Blocks, i: u32) -> usize {
        if blocks.memory {
            // the memory title, and the memory lines of iterations `0..=i`.
            HEADER_ROWS + 1 + (i as usize) + 1
        } else {
            HEADER_ROWS
        }
    }
}

impl<S, H, P> App<S, H, P> {
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn sentinel(&self) -> &Sentinel<S> {
        &self.sentinel
    }

    pub fn pause(&self) -> &P {
        &self.pause
    }
}

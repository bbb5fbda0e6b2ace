use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fs::File,
    io::{self, BufReader, Cursor, Read},
    time::Duration,
};

pub use self::{pause::*, stats::*};

/// abstracts over the suspension between samples.
mod pause {
    use super::*;

    /// suspends the process between samples.
    pub trait Pause {
        fn sleep(&self, interval: Duration);
    }

    /// blocks the current thread.
    #[derive(Default)]
    pub struct ThreadSleep;

    /// a mock pause that records each interval rather than sleeping.
    #[derive(Default)]
    pub struct MockPause {
        slept: RefCell<Vec<Duration>>,
    }

    impl Pause for ThreadSleep {
        fn sleep(&self, interval: Duration) {
            std::thread::sleep(interval);
        }
    }

    impl Pause for MockPause {
        fn sleep(&self, interval: Duration) {
            let Self { slept } = self;
            slept.borrow_mut().push(interval);
        }
    }

    impl MockPause {
        /// returns the intervals slept so far.
        pub fn slept(&self) -> Vec<Duration> {
            self.slept.borrow().clone()
        }
    }
}

/// abstracts over providers of statistics.
mod stats {
    use super::*;

    /// a source of kernel statistics.
    pub trait StatsSource {
        /// returns a reader.
        fn open(&self) -> io::Result<impl Read>;
    }

    /// stats backed by `/proc/stat`.
    #[derive(Default)]
    pub struct ProcStatFile;

    /// a mock stat source.
    ///
    /// each call to [`StatsSource::open()`] yields the next queued table, in order.
    #[derive(Default)]
    pub struct MockStatFile {
        stats: RefCell<VecDeque<Result<String, io::ErrorKind>>>,
        opened: Cell<usize>,
    }

    // === impl ProcStatFile ===

    impl StatsSource for ProcStatFile {
        fn open(&self) -> io::Result<impl Read> {
            File::open(Self::STAT).map(BufReader::new)
        }
    }

    impl ProcStatFile {
        const STAT: &str = "/proc/stat";
    }

    // === impl MockStatFile ===

    impl StatsSource for MockStatFile {
        fn open(&self) -> io::Result<impl Read> {
            let Self { stats, opened } = self;

            opened.set(opened.get() + 1);
            stats
                .borrow_mut()
                .pop_front()
                .expect("mock stats should not be empty")
                .map(Cursor::new)
                .map_err(io::Error::from)
        }
    }

    impl MockStatFile {
        /// queues a table to be returned.
        pub fn push(&self, table: impl Into<String>) {
            self.stats.borrow_mut().push_back(Ok(table.into()));
        }

        /// queues a failure to open the table.
        pub fn fail(&self, kind: io::ErrorKind) {
            self.stats.borrow_mut().push_back(Err(kind));
        }

        /// returns how many times the source has been opened.
        pub fn opened(&self) -> usize {
            self.opened.get()
        }
    }

    impl<T: Into<String>> FromIterator<T> for MockStatFile {
        fn from_iter<I: IntoIterator<Item = T>>(tables: I) -> Self {
            let stats = Self::default();
            tables.into_iter().for_each(|table| stats.push(table));
            stats
        }
    }
}

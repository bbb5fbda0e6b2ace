use {
    super::*,
    crate::{
        host::MockHost,
        source::{MockPause, MockStatFile},
        stat::StatReadError,
    },
    std::{io, time::Duration},
};

const RULE: &str = "--------------------------------------------------\n";
const CLEAR: &str = "\x1b[2J\x1b[1;1H";
const MEMORY_TITLE: &str = "### Memory ### (Phys.Used/Tot -- Virtual Used/Tot)\n";
const MEMORY: &str = "6.00 GB / 8.00 GB -- 7.00 GB / 10.00 GB\n";

/// busy time grows from 15 to 30 to 45 ticks: usage is 0%, then 100%, then 50%.
const TABLES: [&str; 3] = [
    "cpu  10 0 5 85 0 0 0 0 0 0\ncpu0 10 0 5 85 0 0 0 0 0 0\n",
    "cpu  20 0 10 170 0 0 0 0 0 0\ncpu0 20 0 10 170 0 0 0 0 0 0\n",
    "cpu  30 0 15 255 0 0 0 0 0 0\ncpu0 30 0 15 255 0 0 0 0 0 0\n",
];

type MockApp = App<MockStatFile, MockHost, MockPause>;

fn app(mode: DisplayMode, samples: u32, secs: u64, stats: MockStatFile) -> MockApp {
    let config = RunConfig {
        samples,
        interval: Duration::from_secs(secs),
    };
    App::with_parts(config, mode, stats, MockHost::default(), MockPause::default())
}

fn run(app: &mut MockApp) -> (Result<(), Error>, String) {
    let mut out = Vec::new();
    let result = app.run(&mut out);
    (result, String::from_utf8(out).unwrap())
}

fn users() -> String {
    format!("{RULE}### Sessions/Users ###\n ada           pts/0 (10.0.0.2)\n{RULE}")
}

fn cpu(usage: &str) -> String {
    format!("Number of cores: 8\n total cpu use = {usage}%\n")
}

fn identity() -> String {
    format!(
        "{RULE}### System Information ###\n System Name = Linux\n Machine Name = sentinel\n \
         Version = #1 SMP PREEMPT_DYNAMIC\n Release = 6.9.0\n Architecture = x86_64\n{RULE}"
    )
}

fn header(samples: u32, secs: u64) -> String {
    format!("Nbr of samples: {samples} -- every {secs} secs\n Memory Usage 4096 kb\n{RULE}")
}

mod live {
    use {super::*, pretty_assertions::assert_eq};

    #[test]
    fn all_stats() {
        let mut app = app(DisplayMode::AllStats, 3, 1, TABLES.into_iter().collect());
        let (result, out) = run(&mut app);
        result.unwrap();

        let expected = [
            CLEAR.to_owned(),
            header(3, 1),
            MEMORY_TITLE.to_owned(),
            // the first memory line is followed by two placeholders.
            format!("{MEMORY}\n\n"),
            users(),
            cpu("0.00"),
            "\x1b[6;1H\x1b[J".to_owned(),
            format!("{MEMORY}\n"),
            users(),
            cpu("100.00"),
            "\x1b[7;1H\x1b[J".to_owned(),
            MEMORY.to_owned(),
            users(),
            cpu("50.00"),
            identity(),
        ]
        .concat();
        assert_eq!(out, expected);
        assert_eq!(app.sentinel().source().opened(), 3);
    }

    #[test]
    fn system_only() {
        let mut app = app(DisplayMode::SystemOnly, 2, 1, TABLES.into_iter().collect());
        let (result, out) = run(&mut app);
        result.unwrap();

        let expected = [
            CLEAR.to_owned(),
            header(2, 1),
            MEMORY_TITLE.to_owned(),
            format!("{MEMORY}\n"),
            cpu("0.00"),
            "\x1b[6;1H\x1b[J".to_owned(),
            MEMORY.to_owned(),
            cpu("100.00"),
            identity(),
        ]
        .concat();
        assert_eq!(out, expected);
    }

    /// users are redrawn from just below the header, and cpu time is never read.
    #[test]
    fn user_only() {
        let mut app = app(DisplayMode::UserOnly, 3, 1, MockStatFile::default());
        let (result, out) = run(&mut app);
        result.unwrap();

        let rewind = "\x1b[4;1H\x1b[J";
        let expected = [
            CLEAR.to_owned(),
            header(3, 1),
            users(),
            rewind.to_owned(),
            users(),
            rewind.to_owned(),
            users(),
            identity(),
        ]
        .concat();
        assert_eq!(out, expected);
        assert_eq!(app.sentinel().source().opened(), 0);
        assert_eq!(app.pause().slept().len(), 3);
    }

    #[test]
    fn single_sample() {
        let mut app = app(DisplayMode::AllStats, 1, 1, TABLES.into_iter().collect());
        let (result, out) = run(&mut app);
        result.unwrap();

        assert!(out.contains(&cpu("0.00")));
        assert!(!out.contains("\x1b[J"), "a single sample is never redrawn");
        assert_eq!(app.sentinel().window().previous(), None);
        assert_eq!(app.sentinel().source().opened(), 1);
        assert_eq!(app.pause().slept(), vec![Duration::from_secs(1)]);
    }

    #[test]
    fn malformed_sample() {
        let stats = MockStatFile::from_iter([TABLES[0], TABLES[1], "cpu 1 2\n"]);
        let mut app = app(DisplayMode::AllStats, 5, 1, stats);
        let (result, out) = run(&mut app);

        assert!(matches!(result, Err(Error::Stat(_))));
        assert_eq!(out.matches("total cpu use").count(), 2);
        assert!(
            out.ends_with(&cpu("100.00")),
            "the last complete iteration stays on screen"
        );
        assert!(!out.contains("\x1b[7;1H"));
        assert!(!out.contains("System Information"));
        assert_eq!(app.pause().slept().len(), 2);
    }
}

mod sequential {
    use {super::*, pretty_assertions::assert_eq};

    fn iteration(i: u32) -> String {
        format!(">>> iteration {i}\n Memory Usage 4096 kb\n")
    }

    #[test]
    fn normal() {
        let mut app = app(DisplayMode::NormalSequential, 3, 1, TABLES.into_iter().collect());
        let (result, out) = run(&mut app);
        result.unwrap();

        let memory = |rows: &str| format!("{RULE}{MEMORY_TITLE}{rows}");
        let expected = [
            CLEAR.to_owned(),
            iteration(0),
            memory(&format!("{MEMORY}\n\n")),
            users(),
            cpu("0.00"),
            iteration(1),
            memory(&format!("\n{MEMORY}\n")),
            users(),
            cpu("100.00"),
            iteration(2),
            memory(&format!("\n\n{MEMORY}")),
            users(),
            cpu("50.00"),
            identity(),
        ]
        .concat();
        assert_eq!(out, expected);
    }

    #[test]
    fn user() {
        let mut app = app(DisplayMode::UserSequential, 2, 1, MockStatFile::default());
        let (result, out) = run(&mut app);
        result.unwrap();

        let expected = [
            CLEAR.to_owned(),
            iteration(0),
            users(),
            iteration(1),
            users(),
            identity(),
        ]
        .concat();
        assert_eq!(out, expected);
        assert_eq!(app.sentinel().source().opened(), 0);
    }

    #[test]
    fn system() {
        let mut app = app(DisplayMode::SystemSequential, 2, 1, TABLES.into_iter().collect());
        let (result, out) = run(&mut app);
        result.unwrap();

        assert!(!out.contains("Sessions/Users"));
        assert_eq!(out.matches(MEMORY).count(), 2);
        assert!(out.contains(&cpu("100.00")));
        assert!(!out.contains("\x1b[J"), "a sequential log is never erased");
        assert!(!out.contains("\x1b[2J"), "the terminal is not cleared");
        assert!(out.starts_with(&iteration(0)));
    }

    /// a zero interval still takes every sample, in order.
    #[test]
    fn zero_interval() {
        let mut app = app(DisplayMode::NormalSequential, 3, 0, TABLES.into_iter().collect());
        let (result, out) = run(&mut app);
        result.unwrap();

        assert_eq!(app.sentinel().source().opened(), 3);
        assert_eq!(app.pause().slept(), vec![Duration::ZERO; 3]);

        let usages = out
            .lines()
            .filter(|line| line.starts_with(" total cpu use"))
            .collect::<Vec<_>>();
        assert_eq!(
            usages,
            [
                " total cpu use = 0.00%",
                " total cpu use = 100.00%",
                " total cpu use = 50.00%",
            ]
        );
    }

    #[test]
    fn sleeps_after_every_iteration() {
        let mut app = app(DisplayMode::SystemSequential, 3, 2, TABLES.into_iter().collect());
        run(&mut app).0.unwrap();
        assert_eq!(app.pause().slept(), vec![Duration::from_secs(2); 3]);
    }

    /// a failed read on the third iteration aborts the run after two complete iterations.
    #[test]
    fn unavailable() {
        let stats = MockStatFile::from_iter([TABLES[0], TABLES[1]]);
        stats.fail(io::ErrorKind::NotFound);
        let mut app = app(DisplayMode::NormalSequential, 5, 1, stats);
        let (result, out) = run(&mut app);

        match result {
            Err(Error::Stat(StatReadError::Io(error))) => {
                assert_eq!(error.kind(), io::ErrorKind::NotFound)
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(out.contains(">>> iteration 0\n"));
        assert!(out.contains(">>> iteration 1\n"));
        assert!(!out.contains(">>> iteration 2"));
        assert!(out.ends_with(&cpu("100.00")));
        assert_eq!(app.pause().slept().len(), 2);
    }
}

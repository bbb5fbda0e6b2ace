//! queries about the host, and this process.

use nix::{
    sys::{
        resource::{UsageWho, getrusage},
        sysinfo::sysinfo,
        utsname::uname,
    },
    unistd::{SysconfVar, sysconf},
};

/// answers questions about the machine being monitored.
pub trait Host {
    /// returns the physical and swap memory of the system.
    fn memory(&self) -> nix::Result<Memory>;

    /// returns the sessions of users currently logged in.
    fn sessions(&self) -> nix::Result<Vec<Session>>;

    /// returns the identity of the system.
    fn identity(&self) -> nix::Result<Identity>;

    /// returns the maximum resident set size of this process, in kilobytes.
    fn max_rss(&self) -> nix::Result<i64>;

    /// returns the number of processors currently online.
    fn cores(&self) -> nix::Result<u64>;
}

/// the local linux host.
#[derive(Default)]
pub struct LinuxHost;

/// a host answering with fixed values.
#[derive(Clone, Debug)]
pub struct MockHost {
    pub memory: Memory,
    pub sessions: Vec<Session>,
    pub identity: Identity,
    pub max_rss: i64,
    pub cores: u64,
}

/// physical and swap memory, in bytes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Memory {
    pub ram_total: u64,
    pub ram_free: u64,
    pub swap_total: u64,
    pub swap_free: u64,
}

/// memory usage, in gigabytes.
///
/// "virtual" memory is physical memory plus swap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemoryUsage {
    pub phys_used: f64,
    pub phys_total: f64,
    pub virt_used: f64,
    pub virt_total: f64,
}

/// a logged in user.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Session {
    pub user: String,
    /// the terminal device, e.g. `pts/0`.
    pub line: String,
    /// the remote host, if any.
    pub host: String,
}

/// the fields of `uname(2)`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Identity {
    pub system_name: String,
    pub machine_name: String,
    pub version: String,
    pub release: String,
    pub architecture: String,
}

// === impl LinuxHost ===

impl Host for LinuxHost {
    fn memory(&self) -> nix::Result<Memory> {
        let info = sysinfo()?;

        Ok(Memory {
            ram_total: info.ram_total(),
            ram_free: info.ram_unused(),
            swap_total: info.swap_total(),
            swap_free: info.swap_free(),
        })
    }

    fn sessions(&self) -> nix::Result<Vec<Session>> {
        let mut sessions = Vec::new();

        // SAFETY: the utmp database is only walked from this thread. each entry is copied out
        // before the next call to `getutxent`, which may overwrite it.
        unsafe {
            libc::setutxent();
            loop {
                let entry = libc::getutxent();
                if entry.is_null() {
                    break;
                }
                let entry = &*entry;
                if entry.ut_type == libc::USER_PROCESS {
                    sessions.push(Session {
                        user: Self::field(&entry.ut_user),
                        line: Self::field(&entry.ut_line),
                        host: Self::field(&entry.ut_host),
                    });
                }
            }
            libc::endutxent();
        }

        Ok(sessions)
    }

    fn identity(&self) -> nix::Result<Identity> {
        let uts = uname()?;
        let field = |s: &std::ffi::OsStr| s.to_string_lossy().into_owned();

        Ok(Identity {
            system_name: field(uts.sysname()),
            machine_name: field(uts.nodename()),
            version: field(uts.version()),
            release: field(uts.release()),
            architecture: field(uts.machine()),
        })
    }

    fn max_rss(&self) -> nix::Result<i64> {
        getrusage(UsageWho::RUSAGE_SELF).map(|usage| usage.max_rss().into())
    }

    fn cores(&self) -> nix::Result<u64> {
        let online = sysconf(SysconfVar::_NPROCESSORS_ONLN)?;
        Ok(online.and_then(|n| u64::try_from(n).ok()).unwrap_or(1))
    }
}

impl LinuxHost {
    /// reads a fixed-width utmp field, which is not necessarily nul-terminated.
    fn field(raw: &[libc::c_char]) -> String {
        let bytes = raw
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect::<Vec<_>>();

        String::from_utf8_lossy(&bytes).into_owned()
    }
}

// === impl MockHost ===

impl Default for MockHost {
    fn default() -> Self {
        Self {
            memory: Memory {
                ram_total: 8_000_000_000,
                ram_free: 2_000_000_000,
                swap_total: 2_000_000_000,
                swap_free: 1_000_000_000,
            },
            sessions: vec![Session {
                user: "ada".to_owned(),
                line: "pts/0".to_owned(),
                host: "10.0.0.2".to_owned(),
            }],
            identity: Identity {
                system_name: "Linux".to_owned(),
                machine_name: "sentinel".to_owned(),
                version: "#1 SMP PREEMPT_DYNAMIC".to_owned(),
                release: "6.9.0".to_owned(),
                architecture: "x86_64".to_owned(),
            },
            max_rss: 4096,
            cores: 8,
        }
    }
}

impl Host for MockHost {
    fn memory(&self) -> nix::Result<Memory> {
        Ok(self.memory)
    }

    fn sessions(&self) -> nix::Result<Vec<Session>> {
        Ok(self.sessions.clone())
    }

    fn identity(&self) -> nix::Result<Identity> {
        Ok(self.identity.clone())
    }

    fn max_rss(&self) -> nix::Result<i64> {
        Ok(self.max_rss)
    }

    fn cores(&self) -> nix::Result<u64> {
        Ok(self.cores)
    }
}

// === impl Memory ===

impl Memory {
    const GB: f64 = 1_000_000_000.0;

    /// converts to gigabytes.
    pub fn usage(&self) -> MemoryUsage {
        let gb = |bytes: u64| bytes as f64 / Self::GB;
        let Self {
            ram_total,
            ram_free,
            swap_total,
            swap_free,
        } = *self;

        let phys_total = gb(ram_total);
        let phys_used = phys_total - gb(ram_free);
        let virt_total = phys_total + gb(swap_total);
        let virt_used = virt_total - gb(ram_free + swap_free);

        MemoryUsage {
            phys_used,
            phys_total,
            virt_used,
            virt_total,
        }
    }
}

// (diagnostic, OS family) -> concrete command line

use crate::models::DiagnosticKind;

/// Supported OS families. Anything that is not Windows speaks the POSIX tool syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Posix,
}

impl OsFamily {
    pub fn current() -> Self {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Posix
        }
    }
}

/// Program plus argument list, passed to the runner without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    fn new(program: &str, args: &[&str], target: Option<&str>) -> Self {
        let mut args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
        if let Some(target) = target {
            args.push(target.to_string());
        }
        Self {
            program: program.to_string(),
            args,
        }
    }

    /// Full command line for logs.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Returns `None` when the diagnostic has no implementation on `family`.
pub fn command_for(kind: DiagnosticKind, family: OsFamily, target: &str) -> Option<CommandSpec> {
    match (kind, family) {
        (DiagnosticKind::Reachability, OsFamily::Windows) => {
            Some(CommandSpec::new("ping", &["-n", "1"], Some(target)))
        }
        (DiagnosticKind::Reachability, OsFamily::Posix) => {
            Some(CommandSpec::new("ping", &["-c", "1"], Some(target)))
        }
        (DiagnosticKind::RouteTrace, OsFamily::Windows) => Some(CommandSpec::new(
            "tracert",
            &["-h", "15", "-w", "300"],
            Some(target),
        )),
        (DiagnosticKind::RouteTrace, OsFamily::Posix) => Some(CommandSpec::new(
            "traceroute",
            &["-m", "15", "-w", "1"],
            Some(target),
        )),
        (DiagnosticKind::WirelessInfo, OsFamily::Windows) => Some(CommandSpec::new(
            "netsh",
            &["wlan", "show", "interfaces"],
            None,
        )),
        (DiagnosticKind::WirelessInfo, OsFamily::Posix) => None,
    }
}

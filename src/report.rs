//! Text renderings of a node status

use crate::netbios::service_name;
use crate::status::NodeStatus;
use std::fmt::Write;
use std::str::FromStr;

/// Listing style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Windows `nbtstat -A` style table
    #[default]
    Nbtstat,
    /// Samba `nmblookup -A` style listing
    Nmblookup,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nbtstat" => Ok(ReportFormat::Nbtstat),
            "nmblookup" => Ok(ReportFormat::Nmblookup),
            other => Err(format!("unknown format '{}' (nbtstat, nmblookup)", other)),
        }
    }
}

pub fn render(status: &NodeStatus, format: ReportFormat) -> String {
    match format {
        ReportFormat::Nbtstat => render_nbtstat(status),
        ReportFormat::Nmblookup => render_nmblookup(status),
    }
}

pub fn render_nbtstat(status: &NodeStatus) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(out, "    NetBIOS Remote Machine Table");
    let _ = writeln!(out);
    let _ = writeln!(out, "       Name             Type   Status     Description  ");
    let _ = writeln!(out, "    ----------------------------------------------");

    for entry in status.names() {
        let group = entry.flags.is_group();
        let _ = writeln!(
            out,
            "    {}<{:02X}> {} Registered {}",
            entry.printable_name(),
            entry.suffix,
            if group { "GROUP " } else { "UNIQUE" },
            service_name(group, entry.suffix)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "    MAC Address = {}", status.mac());
    out
}

pub fn render_nmblookup(status: &NodeStatus) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Looking up status of {}", status.peer().ip());

    for entry in status.names() {
        let flags = entry.flags;
        let mut line = format!(
            "\t{:<15} <{:02x}> - {:<8}{} ",
            entry.printable_name(),
            entry.suffix,
            if flags.is_group() { "<GROUP>" } else { "" },
            flags.owner_node_type().letter()
        );
        if flags.is_active() {
            line.push_str("<ACTIVE> ");
        }
        if flags.is_permanent() {
            line.push_str("<PERMANENT> ");
        }
        if flags.is_conflict() {
            line.push_str("<CONFLICT> ");
        }
        if flags.is_deregistering() {
            line.push_str("<DEREGISTERING> ");
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "\tMAC Address = {}", status.mac());
    out
}

//! `urlbuilder kinds`

use crate::resolver::Kind;
use anyhow::Result;
use std::io::{self, Write};

pub fn run() -> Result<()> {
    let mut out = io::stdout().lock();
    write_table(&mut out)?;
    out.flush()?;
    Ok(())
}

fn write_table(out: &mut impl Write) -> io::Result<()> {
    let width = Kind::ALL.iter().map(|k| k.name().len()).max().unwrap_or(0);
    for kind in Kind::ALL {
        writeln!(out, "{:<width$}  {}", kind.name(), kind.template())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_table() {
        let mut buf = Vec::new();
        write_table(&mut buf).unwrap();
        let table = String::from_utf8(buf).unwrap();

        assert_eq!(table.lines().count(), Kind::ALL.len());
        assert!(table.lines().any(|l| l.starts_with("group_milestone")
            && l.ends_with("/groups/{group.full_path}/-/milestones/{iid}")));
    }
}

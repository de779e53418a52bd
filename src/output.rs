use std::io::{self, Write};

use serde::Serialize;

use crate::app::{PapersView, PathsView, SessionsView};

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_paths(view: &PathsView) -> io::Result<()> {
        Self::print_json(view)
    }

    pub fn print_papers(view: &PapersView) -> io::Result<()> {
        Self::print_json(view)
    }

    pub fn print_sessions(view: &SessionsView) -> io::Result<()> {
        Self::print_json(view)
    }

    fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        let mut stdout = io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

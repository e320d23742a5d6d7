//! The two answers of a run and how they are printed.

use std::fmt;
use std::time::Duration;

use hillclimb_paths::{Distance, Strategy};
use serde::Serialize;

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Steps from the marked start to the summit.
    pub from_start: Distance,
    /// Steps from the best lowest cell to the summit.
    pub best: Distance,
    pub strategy: Strategy,
    /// Search time in microseconds, parsing excluded.
    pub elapsed_us: u64,
}

impl Report {
    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_us)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Steps to goal from original starting point: {}",
            self.from_start
        )?;
        write!(
            f,
            "Steps to goal from best possible starting point: {}",
            self.best
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            from_start: Distance::Steps(31),
            best: Distance::Steps(29),
            strategy: Strategy::Reverse,
            elapsed_us: 1500,
        }
    }

    #[test]
    fn text() {
        assert_eq!(
            report().to_string(),
            "Steps to goal from original starting point: 31\n\
             Steps to goal from best possible starting point: 29"
        );
    }

    #[test]
    fn text_unreachable() {
        let r = Report {
            from_start: Distance::Unreachable,
            best: Distance::Unreachable,
            ..report()
        };
        assert!(r.to_string().ends_with("starting point: unreachable"));
    }

    #[test]
    fn json() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["from_start"]["steps"], 31);
        assert_eq!(json["best"]["steps"], 29);
        assert_eq!(json["strategy"], "reverse");
        assert_eq!(json["elapsed_us"], 1500);
    }

    #[test]
    fn elapsed() {
        assert_eq!(report().elapsed(), Duration::from_micros(1500));
    }
}

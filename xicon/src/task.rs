use console::style;
use mipmap::{Observer, Outcome, Report};
use std::time::Instant;

/// Prints one status line per asset as the run progresses.
pub struct Reporter {
    num_tasks: usize,
    now: Instant,
    started: Instant,
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            num_tasks: 0,
            now: Instant::now(),
            started: Instant::now(),
        }
    }

    fn task_id(&self, index: usize) -> String {
        style(format!("[{}/{}]", index + 1, self.num_tasks))
            .dim()
            .to_string()
    }

    pub fn summary(&self, report: &Report) {
        let time = self.started.elapsed();
        println!(
            "{} placed, {} skipped, {} failed [{}ms]",
            style(report.written()).green(),
            style(report.skipped()).yellow(),
            style(report.failed()).red(),
            time.as_millis(),
        );
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for Reporter {
    fn start(&mut self, total: usize) {
        self.num_tasks = total;
        self.now = Instant::now();
    }

    fn outcome(&mut self, index: usize, outcome: &Outcome) {
        let id = self.task_id(index);
        match outcome {
            Outcome::Written {
                file_name,
                key,
                pair,
                ..
            } => {
                let time = self.now.elapsed();
                println!(
                    "{} {} ({}px) -> {} (& round) {}",
                    id,
                    file_name,
                    key,
                    pair.square().display(),
                    style(format!("[{}ms]", time.as_millis())).green(),
                );
            }
            Outcome::Skipped { reason, .. } => {
                println!("{} {} {}", id, reason, style("[SKIPPED]").yellow());
            }
            Outcome::Failed { error, .. } => {
                println!("{} {} {}", id, error, style("[FAILED]").red());
            }
        }
        self.now = Instant::now();
    }
}

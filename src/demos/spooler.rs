//! Print-job spooling on a circular buffer
//!
//! A spooler accepts jobs faster than the printer drains them, so it parks
//! them in a fixed-size [`RingQueue`]. Jobs print strictly in arrival order,
//! and the buffer's slots are reused once the indices wrap past the end.
//! The slot view makes the wrap-around visible: front and rear chase each
//! other around the ring while FIFO order never breaks.

use crate::containers::RingQueue;
use crate::errors::DemoError;
use crate::trace::Tracer;
use std::fmt;

/// A queued print job
#[derive(Debug, Clone)]
pub struct PrintJob {
    pub name: &'static str,
    pub pages: u32,
}

impl fmt::Display for PrintJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}p)", self.name, self.pages)
    }
}

const SPOOL_CAPACITY: usize = 4;

pub fn run(tracer: &mut Tracer) -> Result<(), DemoError> {
    tracer.section("Print Job Spooler");

    let mut spool: RingQueue<PrintJob> = RingQueue::new(SPOOL_CAPACITY);

    tracer.line(format!(
        "Spool buffer: {} slots, jobs print in arrival order",
        SPOOL_CAPACITY
    ));
    tracer.blank();

    let arrivals = [
        PrintJob { name: "report", pages: 12 },
        PrintJob { name: "invoice", pages: 2 },
        PrintJob { name: "slides", pages: 30 },
        PrintJob { name: "memo", pages: 1 },
    ];

    tracer.line("--- Jobs arriving ---");
    for job in arrivals {
        let label = format!("submit {}", job);
        tracer.line(format!("  SUBMIT {} -> queue: {}", job, preview(&spool, &job)));
        spool.enqueue(job)?;
        tracer.snapshot(label, spool.slots());
    }

    tracer.blank();
    tracer.line("--- Buffer full: next submission is refused ---");
    let overflow = PrintJob { name: "poster", pages: 6 };
    match spool.enqueue(overflow.clone()) {
        Err(err) => tracer.line(format!("  SUBMIT {} rejected: {}", overflow, err)),
        Ok(()) => tracer.line("  unexpected: the spool accepted a fifth job"),
    }

    tracer.blank();
    tracer.line("--- Printer drains two jobs ---");
    for _ in 0..2 {
        if let Some(job) = spool.dequeue() {
            tracer.line(format!("  PRINT {} -> queue: {}", job, spool.contents()));
            tracer.snapshot(format!("print {}", job), spool.slots());
        }
    }

    tracer.blank();
    tracer.line("--- New arrivals reuse the freed slots (wrap-around) ---");
    let late = [
        PrintJob { name: "poster", pages: 6 },
        PrintJob { name: "labels", pages: 3 },
    ];
    for job in late {
        let label = format!("submit {}", job);
        tracer.line(format!("  SUBMIT {} -> queue: {}", job, preview(&spool, &job)));
        spool.enqueue(job)?;
        tracer.snapshot(label, spool.slots());
    }

    tracer.blank();
    tracer.line("Buffer slots after wrap-around:");
    for line in spool.slots() {
        tracer.line(format!("  {}", line));
    }

    tracer.blank();
    tracer.line("--- Printer drains the rest, strictly FIFO ---");
    let mut printed = Vec::new();
    while let Some(job) = spool.dequeue() {
        tracer.line(format!("  PRINT {} -> queue: {}", job, spool.contents()));
        tracer.snapshot(format!("print {}", job), spool.slots());
        printed.push(job.name);
    }
    tracer.line(format!("Print order: {}", printed.join(", ")));

    Ok(())
}

/// Queue contents as they will look after `job` joins
fn preview(spool: &RingQueue<PrintJob>, job: &PrintJob) -> String {
    let mut names: Vec<String> = spool.iter().map(|queued| queued.to_string()).collect();
    names.push(job.to_string());
    format!("[{}]", names.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_print_in_arrival_order() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        assert!(tracer.contains("Print order: slides, memo, poster, labels"));
    }

    #[test]
    fn test_full_spool_rejects_submission() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        assert!(tracer.contains("rejected: queue overflow"));
    }

    #[test]
    fn test_wrap_around_reuses_low_slots() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        // After two drains and two late arrivals, slot 0 holds the poster
        assert!(tracer.contains("slot 0: poster(6p)"));
    }
}

// Integration tests driving the demo gallery through the library API

use stacklab::demos;
use stacklab::errors::DemoError;

#[test]
fn test_every_registered_demo_runs_clean() {
    for demo in demos::DEMOS {
        let result = demos::run(demo.name);
        assert!(result.is_ok(), "demo '{}' failed: {:?}", demo.name, result.err());
    }
}

#[test]
fn test_every_demo_records_snapshots_and_output() {
    for demo in demos::DEMOS {
        let tracer = demos::run(demo.name).expect("demo failed");
        assert!(
            !tracer.output().is_empty(),
            "demo '{}' produced no output",
            demo.name
        );
        assert!(
            !tracer.snapshots().is_empty(),
            "demo '{}' recorded no snapshots",
            demo.name
        );
    }
}

#[test]
fn test_snapshot_watermarks_are_monotonic() {
    for demo in demos::DEMOS {
        let tracer = demos::run(demo.name).expect("demo failed");
        let mut previous = 0;
        for snapshot in tracer.snapshots() {
            assert!(
                snapshot.output_len >= previous,
                "demo '{}' snapshot watermark went backward",
                demo.name
            );
            assert!(
                snapshot.output_len <= tracer.output().len(),
                "demo '{}' snapshot watermark past the output",
                demo.name
            );
            previous = snapshot.output_len;
        }
    }
}

#[test]
fn test_unknown_demo_is_a_typed_error() {
    let err = demos::run("no-such-demo").unwrap_err();
    assert_eq!(
        err,
        DemoError::UnknownDemo {
            name: "no-such-demo".to_string()
        }
    );
}

#[test]
fn test_demo_names_are_unique() {
    for (i, demo) in demos::DEMOS.iter().enumerate() {
        for other in &demos::DEMOS[i + 1..] {
            assert_ne!(demo.name, other.name);
        }
    }
}

// === Per-demo trace contents ===

#[test]
fn test_stack_hello_reverses_the_message() {
    let tracer = demos::run("stack-hello").expect("demo failed");
    assert!(tracer.contains("!dlroW olleH"));
    assert!(tracer.contains("Hello World!"));
}

#[test]
fn test_stack_vs_queue_drain_orders() {
    let tracer = demos::run("stack-vs-queue").expect("demo failed");
    assert!(tracer.contains("Stack output: EDCBA"));
    assert!(tracer.contains("Queue output: ABCDE"));
}

#[test]
fn test_balanced_covers_success_and_all_failure_shapes() {
    let tracer = demos::run("balanced").expect("demo failed");
    assert!(tracer.contains("BALANCED"));
    assert!(tracer.contains("closed with an empty stack"));
    assert!(tracer.contains("never closed"));
}

#[test]
fn test_spooler_prints_fifo_through_wrap_around() {
    let tracer = demos::run("spooler").expect("demo failed");
    assert!(tracer.contains("Print order: slides, memo, poster, labels"));
}

#[test]
fn test_frames_reports_five_levels() {
    let tracer = demos::run("frames").expect("demo failed");
    assert!(tracer.contains("Deepest nesting: 5 frames"));
}

#[test]
fn test_fibonacci_reports_result_and_counts() {
    let tracer = demos::run("fibonacci").expect("demo failed");
    assert!(tracer.contains("fib(5) = 5"));
    assert!(tracer.contains("21891 calls"));
    assert!(tracer.contains("39 calls"));
}

#[test]
fn test_overflow_stops_at_the_safe_limit() {
    let tracer = demos::run("overflow").expect("demo failed");
    assert!(tracer.contains("the guard refused the next frame"));
    assert!(tracer.contains("unwound cleanly"));
}

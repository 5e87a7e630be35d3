//! Fibonacci three ways: naive recursion, iteration, memoization
//!
//! The naive recursive version runs on the simulated [`CallStack`] so the
//! trace shows every frame appearing and unwinding, indented by depth. The
//! iterative version needs one frame and a loop. The memoized version keeps
//! the recursive shape but collapses the call count from exponential to
//! linear by caching results in an [`FxHashMap`].

use crate::callstack::CallStack;
use crate::errors::DemoError;
use crate::trace::Tracer;
use rustc_hash::FxHashMap;

const N: u32 = 5;

/// Naive recursion, narrating every call and return at its depth
fn fib_traced(n: u32, stack: &mut CallStack, tracer: &mut Tracer) -> Result<u64, DemoError> {
    let frame = stack.push_frame(&format!("fib({})", n))?;
    frame.declare_local("n", n);
    let depth = stack.depth();
    let indent = "  ".repeat(depth - 1);

    tracer.line(format!("{}-> fib({}) called [depth={}]", indent, n, depth));
    tracer.snapshot(format!("call fib({})", n), stack.render());

    let result = if n <= 1 {
        tracer.line(format!("{}<- fib({}) = {} [base case]", indent, n, n));
        u64::from(n)
    } else {
        let a = fib_traced(n - 1, stack, tracer)?;
        let b = fib_traced(n - 2, stack, tracer)?;
        tracer.line(format!("{}<- fib({}) = {} + {} = {}", indent, n, a, b, a + b));
        a + b
    };

    stack.pop_frame()?;
    tracer.snapshot(format!("return fib({}) = {}", n, result), stack.render());
    Ok(result)
}

/// Iterative version: two rolling values, constant stack
fn fib_iterative(n: u32, tracer: &mut Tracer) -> u64 {
    if n == 0 {
        return 0;
    }
    let (mut prev2, mut prev1) = (0u64, 1u64);
    tracer.line("  fib(0) = 0");
    tracer.line("  fib(1) = 1");
    for i in 2..=n {
        let current = prev1 + prev2;
        tracer.line(format!("  fib({}) = {} + {} = {}", i, prev1, prev2, current));
        prev2 = prev1;
        prev1 = current;
    }
    prev1
}

/// Bare recursion that only counts its calls
fn fib_count(n: u32, calls: &mut u64) -> u64 {
    *calls += 1;
    if n <= 1 {
        u64::from(n)
    } else {
        fib_count(n - 1, calls) + fib_count(n - 2, calls)
    }
}

/// Memoized recursion: each distinct `n` is computed once
fn fib_memoized(n: u32, memo: &mut FxHashMap<u32, u64>, calls: &mut u64) -> u64 {
    *calls += 1;
    if let Some(&cached) = memo.get(&n) {
        return cached;
    }
    let result = if n <= 1 {
        u64::from(n)
    } else {
        fib_memoized(n - 1, memo, calls) + fib_memoized(n - 2, memo, calls)
    };
    memo.insert(n, result);
    result
}

pub fn run(tracer: &mut Tracer) -> Result<(), DemoError> {
    tracer.section("Fibonacci and the Call Stack");

    tracer.line(format!("Computing fib({}) with naive recursion:", N));
    tracer.line("(each indentation level is one stack frame deeper)");
    tracer.blank();

    let mut stack = CallStack::new();
    let result = fib_traced(N, &mut stack, tracer)?;

    tracer.blank();
    tracer.line(format!("fib({}) = {}", N, result));
    tracer.line(format!(
        "Maximum stack depth: {} frames, total calls: {}",
        stack.max_depth(),
        stack.total_calls()
    ));

    tracer.section("Iterative Version");
    let iterative = fib_iterative(N, tracer);
    tracer.blank();
    tracer.line(format!("Same result ({}) from one frame and a loop.", iterative));

    tracer.section("Call-Count Comparison");
    let probe = 20;
    let mut naive_calls = 0;
    let naive_result = fib_count(probe, &mut naive_calls);

    let mut memo = FxHashMap::default();
    let mut memo_calls = 0;
    let memo_result = fib_memoized(probe, &mut memo, &mut memo_calls);

    tracer.line(format!(
        "fib({}) naive:    {} calls -> {}",
        probe, naive_calls, naive_result
    ));
    tracer.line(format!(
        "fib({}) memoized: {} calls -> {}",
        probe, memo_calls, memo_result
    ));
    tracer.blank();
    tracer.line("Naive recursion recomputes every subproblem: O(2^n) calls,");
    tracer.line("O(n) frames live at once. Memoization caches each fib(k) and");
    tracer.line("drops the call count to O(n) while keeping the recursive shape.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_three_agree() {
        let mut tracer = Tracer::new();
        let mut stack = CallStack::new();
        let traced = fib_traced(10, &mut stack, &mut tracer).unwrap();

        let iterative = fib_iterative(10, &mut Tracer::new());

        let mut memo = FxHashMap::default();
        let mut calls = 0;
        let memoized = fib_memoized(10, &mut memo, &mut calls);

        assert_eq!(traced, 55);
        assert_eq!(iterative, 55);
        assert_eq!(memoized, 55);
    }

    #[test]
    fn test_depth_and_call_accounting() {
        let mut tracer = Tracer::new();
        let mut stack = CallStack::new();
        fib_traced(N, &mut stack, &mut tracer).unwrap();

        // Depth follows the fib(n-1) spine; calls follow 2*fib(n+1)-1
        assert_eq!(stack.max_depth(), N as usize);
        assert_eq!(stack.total_calls(), 15);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_memoization_collapses_call_count() {
        let mut naive_calls = 0;
        fib_count(20, &mut naive_calls);

        let mut memo = FxHashMap::default();
        let mut memo_calls = 0;
        fib_memoized(20, &mut memo, &mut memo_calls);

        assert_eq!(naive_calls, 21891);
        assert_eq!(memo_calls, 39);
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(fib_iterative(0, &mut Tracer::new()), 0);
        assert_eq!(fib_iterative(1, &mut Tracer::new()), 1);
    }
}

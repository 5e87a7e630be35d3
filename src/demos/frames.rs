//! Nested calls and the shape of a stack frame
//!
//! Walks the call chain main -> a -> b -> c -> d on the simulated
//! [`CallStack`], printing each frame's virtual stack pointer on the way
//! down and the unwinding on the way back up. The addresses descend with
//! every call: the stack grows downward.

use crate::callstack::CallStack;
use crate::errors::DemoError;
use crate::trace::Tracer;

pub fn run(tracer: &mut Tracer) -> Result<(), DemoError> {
    tracer.section("Nested Calls: Stack Frames");

    tracer.line("Every call pushes a frame holding:");
    tracer.line("  1. the return address (where to resume)");
    tracer.line("  2. the saved frame pointer");
    tracer.line("  3. local variables");
    tracer.line("  4. spilled parameters and saved registers");
    tracer.blank();
    tracer.line("Call chain: main -> a -> b -> c -> d");
    tracer.line("(watch the simulated stack pointer descend)");
    tracer.blank();

    let mut stack = CallStack::new();

    let frame = stack.push_frame("main")?;
    let sp = frame.address;
    tracer.line(format!("[main] executing            sp=0x{:012x}", sp));
    tracer.snapshot("call main()", stack.render());

    function_a(&mut stack, tracer)?;

    tracer.line("[main] <- all calls returned, stack unwound");
    stack.pop_frame()?;
    tracer.snapshot("return from main()", stack.render());

    tracer.blank();
    tracer.line(format!("Deepest nesting: {} frames", stack.max_depth()));
    tracer.blank();
    tracer.line("Observations:");
    tracer.line("  - each call got a strictly lower stack pointer");
    tracer.line("  - each frame's locals live only while its call is active");
    tracer.line("  - returns pop frames in the reverse order of the calls");

    Ok(())
}

fn function_a(stack: &mut CallStack, tracer: &mut Tracer) -> Result<(), DemoError> {
    let frame = stack.push_frame("function_a")?;
    frame.declare_local("local_a", 100);
    frame.declare_local("message", "\"Stack frame A\"");
    let sp = frame.address;

    tracer.line(format!("[a] executing               sp=0x{:012x}", sp));
    tracer.line("[a] locals: local_a=100, message=\"Stack frame A\"");
    tracer.line("[a] -> calling function_b()");
    tracer.snapshot("call function_a()", stack.render());

    function_b(stack, tracer)?;

    tracer.line("[a] <- returned from function_b()");
    stack.pop_frame()?;
    tracer.snapshot("return from function_a()", stack.render());
    Ok(())
}

fn function_b(stack: &mut CallStack, tracer: &mut Tracer) -> Result<(), DemoError> {
    let frame = stack.push_frame("function_b")?;
    frame.declare_local("local_b", 42);
    let sp = frame.address;

    tracer.line(format!("  [b] executing             sp=0x{:012x}", sp));
    tracer.line("  [b] locals: local_b=42");
    tracer.line("  [b] -> calling function_c()");
    tracer.snapshot("call function_b()", stack.render());

    function_c(stack, tracer)?;

    tracer.line("  [b] <- returned from function_c()");
    stack.pop_frame()?;
    tracer.snapshot("return from function_b()", stack.render());
    Ok(())
}

fn function_c(stack: &mut CallStack, tracer: &mut Tracer) -> Result<(), DemoError> {
    let frame = stack.push_frame("function_c")?;
    let sp = frame.address;

    tracer.line(format!("    [c] executing           sp=0x{:012x}", sp));
    tracer.line("    [c] -> calling function_d()");
    tracer.snapshot("call function_c()", stack.render());

    function_d(stack, tracer)?;

    tracer.line("    [c] <- returned from function_d()");
    stack.pop_frame()?;
    tracer.snapshot("return from function_c()", stack.render());
    Ok(())
}

fn function_d(stack: &mut CallStack, tracer: &mut Tracer) -> Result<(), DemoError> {
    let frame = stack.push_frame("function_d")?;
    let sp = frame.address;

    tracer.line(format!("      [d] executing         sp=0x{:012x}", sp));
    tracer.line("      [d] deepest frame in the chain, about to return");
    tracer.snapshot("call function_d()", stack.render());

    stack.pop_frame()?;
    tracer.snapshot("return from function_d()", stack.render());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callstack::{DEFAULT_FRAME_SIZE, STACK_BASE_ADDRESS};

    #[test]
    fn test_five_frames_deep() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        assert!(tracer.contains("Deepest nesting: 5 frames"));
    }

    #[test]
    fn test_stack_pointers_descend() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        let deepest = STACK_BASE_ADDRESS - 4 * DEFAULT_FRAME_SIZE;
        assert!(tracer.contains(&format!("sp=0x{:012x}", STACK_BASE_ADDRESS)));
        assert!(tracer.contains(&format!("sp=0x{:012x}", deepest)));
    }

    #[test]
    fn test_calls_and_returns_pair_up() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        let calls = tracer
            .snapshots()
            .iter()
            .filter(|snap| snap.operation.starts_with("call "))
            .count();
        let returns = tracer
            .snapshots()
            .iter()
            .filter(|snap| snap.operation.starts_with("return "))
            .count();
        assert_eq!(calls, 5);
        assert_eq!(returns, 5);
    }
}

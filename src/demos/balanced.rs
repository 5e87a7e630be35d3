//! Bracket matching with a stack
//!
//! Walks an expression left to right, pushing every opening bracket and
//! popping on every closing one. The expression is balanced when each
//! closer matches the top opener and the stack drains to empty at the end.
//! Three failure shapes are shown: a mismatched pair, a closer arriving on
//! an empty stack, and openers left over at the end.

use crate::containers::BoundedStack;
use crate::errors::DemoError;
use crate::trace::Tracer;
use rustc_hash::FxHashMap;

/// Outcome of checking a single expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Balance {
    Balanced,
    MismatchedPair { expected: char, found: char },
    UnmatchedCloser { closer: char },
    UnclosedOpeners { count: usize },
}

/// Check one expression, narrating each bracket into the tracer
pub fn check(expression: &str, tracer: &mut Tracer) -> Result<Balance, DemoError> {
    let pairs: FxHashMap<char, char> =
        [(')', '('), (']', '['), ('}', '{')].into_iter().collect();

    let mut stack = BoundedStack::new(expression.len());

    for ch in expression.chars() {
        if pairs.values().any(|&opener| opener == ch) {
            stack.push(ch)?;
            tracer.line(format!("  '{}' opens  -> {}", ch, stack.contents()));
            tracer.snapshot(format!("push '{}'", ch), vec![stack.contents()]);
        } else if let Some(&expected) = pairs.get(&ch) {
            match stack.pop() {
                Some(opener) if opener == expected => {
                    tracer.line(format!(
                        "  '{}' closes '{}' -> {}",
                        ch,
                        opener,
                        stack.contents()
                    ));
                    tracer.snapshot(format!("match '{}{}'", opener, ch), vec![stack.contents()]);
                }
                Some(opener) => {
                    tracer.line(format!(
                        "  '{}' arrived but top of stack is '{}' (wanted '{}')",
                        ch, opener, expected
                    ));
                    return Ok(Balance::MismatchedPair {
                        expected,
                        found: opener,
                    });
                }
                None => {
                    tracer.line(format!("  '{}' arrived with nothing open", ch));
                    return Ok(Balance::UnmatchedCloser { closer: ch });
                }
            }
        }
        // Everything that is not a bracket just streams past the stack
    }

    if stack.is_empty() {
        Ok(Balance::Balanced)
    } else {
        Ok(Balance::UnclosedOpeners { count: stack.len() })
    }
}

pub fn run(tracer: &mut Tracer) -> Result<(), DemoError> {
    tracer.section("Bracket Matching");

    let expressions = [
        "(a + {b * [c - d]})",
        "(a + [b)]",
        "a + b)",
        "({a + b}",
    ];

    for expression in expressions {
        tracer.line(format!("Expression: {}", expression));
        let verdict = check(expression, tracer)?;
        match verdict {
            Balance::Balanced => tracer.line("  BALANCED: every bracket found its partner"),
            Balance::MismatchedPair { expected, found } => tracer.line(format!(
                "  NOT BALANCED: closer wanted '{}' but '{}' was on top",
                expected, found
            )),
            Balance::UnmatchedCloser { closer } => tracer.line(format!(
                "  NOT BALANCED: '{}' closed with an empty stack",
                closer
            )),
            Balance::UnclosedOpeners { count } => tracer.line(format!(
                "  NOT BALANCED: {} opener(s) never closed",
                count
            )),
        }
        tracer.blank();
    }

    tracer.line("The stack works here because bracket scopes nest:");
    tracer.line("the most recently opened bracket must close first. LIFO.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(expression: &str) -> Balance {
        let mut tracer = Tracer::new();
        check(expression, &mut tracer).unwrap()
    }

    #[test]
    fn test_balanced_expression() {
        assert_eq!(verdict("(a + {b * [c - d]})"), Balance::Balanced);
        assert_eq!(verdict("no brackets at all"), Balance::Balanced);
        assert_eq!(verdict(""), Balance::Balanced);
    }

    #[test]
    fn test_mismatched_pair() {
        assert_eq!(
            verdict("(a + [b)]"),
            Balance::MismatchedPair {
                expected: '(',
                found: '['
            }
        );
    }

    #[test]
    fn test_closer_with_empty_stack() {
        assert_eq!(verdict("a + b)"), Balance::UnmatchedCloser { closer: ')' });
    }

    #[test]
    fn test_leftover_openers() {
        assert_eq!(verdict("({a + b}"), Balance::UnclosedOpeners { count: 1 });
    }

    #[test]
    fn test_demo_reports_all_four_verdicts() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        assert!(tracer.contains("BALANCED: every bracket found its partner"));
        assert!(tracer.contains("but '[' was on top"));
        assert!(tracer.contains("closed with an empty stack"));
        assert!(tracer.contains("never closed"));
    }
}

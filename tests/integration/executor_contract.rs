//! Both executors honor the same ordering contract

use crate::integration::test_utils::{scripted, InvocationLog};
use genjoin::{
    build_executor, execute_repeated, generator, BoxError, ConcurrentExecutor, Executor,
    ExecutorConfig, ExecutorKind, SerialExecutor,
};

fn executors() -> Vec<(&'static str, Box<dyn Executor>)> {
    vec![
        ("serial", Box::new(SerialExecutor::new()) as Box<dyn Executor>),
        (
            "concurrent",
            Box::new(ConcurrentExecutor::with_max_concurrency(4)) as Box<dyn Executor>,
        ),
    ]
}

#[test]
fn test_empty_task_list_returns_empty_string() {
    for (name, executor) in executors() {
        assert_eq!(executor.execute(&[]).unwrap(), "", "{}", name);
    }
}

#[test]
fn test_slow_first_generator_keeps_submission_order() {
    let log = InvocationLog::new();
    let gens = scripted(&[(Ok("a"), 100), (Ok("b"), 50), (Ok("c"), 0)], &log);

    let output = ConcurrentExecutor::with_max_concurrency(3)
        .execute(&gens)
        .unwrap();

    assert_eq!(output, "abc");
    assert_eq!(log.invoked(), vec![0, 1, 2]);
}

#[test]
fn test_executors_agree_on_output() {
    let log = InvocationLog::new();
    let gens = scripted(
        &[(Ok("re"), 5), (Ok("g"), 0), (Ok("e"), 10), (Ok("x"), 0), (Ok("p"), 1)],
        &log,
    );

    let outputs: Vec<String> = executors()
        .iter()
        .map(|(_, executor)| executor.execute(&gens).unwrap())
        .collect();
    assert_eq!(outputs[0], "regexp");
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_cap_of_one_still_runs_everything_in_order() {
    let log = InvocationLog::new();
    let gens = scripted(&[(Ok("1"), 5), (Ok("2"), 0), (Ok("3"), 5)], &log);

    let output = ConcurrentExecutor::with_max_concurrency(1)
        .execute(&gens)
        .unwrap();
    assert_eq!(output, "123");
}

#[test]
fn test_repeat_runner_with_each_strategy() {
    let x = generator(|| Ok::<_, BoxError>("x".to_string()));
    for kind in [ExecutorKind::Serial, ExecutorKind::Concurrent] {
        let executor = build_executor(&ExecutorConfig {
            kind,
            max_concurrency: None,
        });
        assert_eq!(execute_repeated(executor.as_ref(), x.clone(), 3).unwrap(), "xxx");
    }
}
